//! Command-line interface for the graph generators.
//!
//! A single `generate` command builds one graph of the chosen kind and prints
//! its adjacency matrix as text or JSON.

mod commands;

pub use commands::{
    BarabasiAlbertArgs, Cli, CliError, Command, GenerateCommand, GenerationSummary, KindCommand,
    OutputFormat, RandomArgs, parse_byte_size, render_summary, run_cli,
};

#[cfg(test)]
mod test_helpers;
