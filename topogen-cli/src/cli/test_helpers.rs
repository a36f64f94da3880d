//! Shared fixtures for the CLI unit tests.

use std::fs;
use std::io;
use std::path::PathBuf;

use clap::Parser;
use tempfile::TempDir;

use super::{Cli, CliError, GenerateCommand, GenerationSummary, run_cli};
use super::commands::run_generate;
use super::Command;

pub(super) type TestResult = Result<(), Box<dyn std::error::Error>>;

pub(super) fn temp_dir() -> TempDir {
    match TempDir::new() {
        Ok(dir) => dir,
        Err(err) => panic!("failed to create temp dir: {err}"),
    }
}

pub(super) fn write_matrix_file(dir: &TempDir, name: &str, contents: &str) -> io::Result<PathBuf> {
    let path = dir.path().join(name);
    fs::write(&path, contents)?;
    Ok(path)
}

/// Parses `args` (without the binary name) into a `generate` command.
pub(super) fn parse_generate<I, S>(args: I) -> Result<GenerateCommand, clap::Error>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let argv = std::iter::once("topogen".to_owned())
        .chain(std::iter::once("generate".to_owned()))
        .chain(args.into_iter().map(Into::into));
    let Cli { command } = Cli::try_parse_from(argv)?;
    match command {
        Command::Generate(generate) => Ok(generate),
    }
}

pub(super) fn generate(args: &[&str]) -> Result<GenerationSummary, Box<dyn std::error::Error>> {
    let command = parse_generate(args.iter().copied())?;
    Ok(run_generate(command)?)
}

pub(super) fn run_cli_expecting_error(cli: Cli, panic_msg: &str) -> CliError {
    match run_cli(cli) {
        Ok(_) => panic!("{panic_msg}"),
        Err(err) => err,
    }
}
