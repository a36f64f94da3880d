//! Command implementations and argument parsing for the topogen CLI.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use thiserror::Error;
use tracing::{Span, field, info, instrument};
use topogen_core::{
    AdjacencyMatrix, GraphError, GraphKind, GraphRequest, MatrixParseError, estimate_matrix_bytes,
};

const DEFAULT_MAX_BYTES: &str = "1GiB";

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(name = "topogen", about = "Generate synthetic undirected graphs as adjacency matrices.")]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Generate one graph and print its adjacency matrix.
    Generate(GenerateCommand),
}

/// Options accepted by the `generate` command.
#[derive(Debug, Args, Clone)]
pub struct GenerateCommand {
    /// Number of nodes in the generated graph.
    pub num_nodes: usize,

    /// Seed for reproducible output; OS entropy is used when omitted.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output format written to stdout.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Log how long generation took.
    #[arg(long)]
    pub timing: bool,

    /// Refuse to allocate matrices larger than this (e.g. `512MiB`, `2G`).
    #[arg(long = "max-bytes", default_value = DEFAULT_MAX_BYTES, value_parser = parse_byte_size)]
    pub max_bytes: u64,

    /// Generator to run.
    #[command(subcommand)]
    pub kind: KindCommand,
}

/// Generators exposed on the command line.
#[derive(Debug, Subcommand, Clone)]
pub enum KindCommand {
    /// Uniform random graph.
    Random(RandomArgs),
    /// Ring closed back to node 0 (no hub node).
    Wheel,
    /// Ring where node i connects to (i + 1) mod n.
    Cycle,
    /// Every pair of distinct nodes connected.
    Complete,
    /// Node 0 connected to every other node.
    Star,
    /// Preferential attachment growth, optionally extending an existing graph.
    BarabasiAlbert(BarabasiAlbertArgs),
}

/// Arguments for the uniform random generator.
#[derive(Debug, Args, Clone)]
pub struct RandomArgs {
    /// Probability that any given pair of nodes is connected.
    #[arg(long = "edge-probability")]
    pub edge_probability: f64,
}

/// Arguments for the preferential attachment generator.
#[derive(Debug, Args, Clone)]
pub struct BarabasiAlbertArgs {
    /// Edges each new node forms.
    #[arg(long = "edges-to-attach")]
    pub edges_to_attach: usize,

    /// Text file holding a 0/1 matrix to extend, one row per line.
    #[arg(long)]
    pub existing: Option<PathBuf>,
}

/// Output formats supported by [`render_summary`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One row per line, entries separated by spaces.
    Text,
    /// A JSON object with the generator name, edge count and rows.
    Json,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Reading an existing-graph file failed.
    #[error("failed to read `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// An existing-graph file did not hold a valid matrix.
    #[error("failed to parse `{path}`: {source}")]
    Parse {
        /// Path of the malformed file.
        path: PathBuf,
        /// Parse failure.
        #[source]
        source: MatrixParseError,
    },
    /// The matrix would exceed the configured memory limit.
    #[error("a {num_nodes}-node matrix needs {estimated} bytes, above the {limit}-byte limit")]
    MatrixTooLarge {
        /// Requested node count.
        num_nodes: usize,
        /// Estimated matrix size in bytes.
        estimated: u64,
        /// Configured limit in bytes.
        limit: u64,
    },
    /// Graph generation failed.
    #[error(transparent)]
    Core(#[from] GraphError),
}

/// Result of a `generate` command.
#[derive(Debug, Clone)]
pub struct GenerationSummary {
    /// Stable name of the generator that ran.
    pub kind: &'static str,
    /// Generated adjacency matrix.
    pub matrix: AdjacencyMatrix,
    /// Format requested for rendering.
    pub format: OutputFormat,
    /// Wall-clock generation time, recorded when `--timing` is set.
    pub elapsed: Option<Duration>,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    kind: &'a str,
    edges: usize,
    matrix: &'a AdjacencyMatrix,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when an input file cannot be loaded, the matrix would
/// exceed the memory limit, or generation fails.
///
/// # Examples
/// ```
/// use clap::Parser;
/// use topogen_cli::cli::{Cli, run_cli};
///
/// let cli = Cli::parse_from(["topogen", "generate", "5", "star"]);
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.matrix.degree(0), 4);
/// # Ok::<(), topogen_cli::cli::CliError>(())
/// ```
#[instrument(name = "cli.run", err, skip(cli), fields(command = field::Empty))]
pub fn run_cli(cli: Cli) -> Result<GenerationSummary, CliError> {
    match cli.command {
        Command::Generate(generate) => {
            Span::current().record("command", field::display("generate"));
            run_generate(generate)
        }
    }
}

#[instrument(
    name = "cli.generate",
    err,
    skip(command),
    fields(num_nodes = command.num_nodes, kind = field::Empty, seed = field::Empty),
)]
pub(super) fn run_generate(command: GenerateCommand) -> Result<GenerationSummary, CliError> {
    let GenerateCommand {
        num_nodes,
        seed,
        format,
        timing,
        max_bytes,
        kind,
    } = command;
    let span = Span::current();
    if let Some(seed) = seed {
        span.record("seed", seed);
    }

    check_memory(num_nodes, max_bytes)?;

    let (graph_kind, existing) = resolve_kind(kind)?;
    span.record("kind", field::display(graph_kind.name()));

    let mut request = GraphRequest::new(num_nodes, graph_kind);
    if let Some(seed) = seed {
        request = request.with_seed(seed);
    }
    let generator = request.build()?;

    let started = Instant::now();
    let matrix = match existing {
        Some(prefix) => generator.extend(&prefix)?,
        None => generator.generate()?,
    };
    let elapsed = timing.then(|| started.elapsed());
    if let Some(elapsed) = elapsed {
        info!(
            kind = graph_kind.name(),
            num_nodes,
            elapsed_ms = elapsed.as_secs_f64() * 1_000.0,
            "generation timing"
        );
    }

    info!(
        kind = graph_kind.name(),
        edges = matrix.edge_count(),
        "command completed"
    );
    Ok(GenerationSummary {
        kind: graph_kind.name(),
        matrix,
        format,
        elapsed,
    })
}

fn check_memory(num_nodes: usize, limit: u64) -> Result<(), CliError> {
    let estimated = estimate_matrix_bytes(num_nodes);
    if estimated > limit {
        return Err(CliError::MatrixTooLarge {
            num_nodes,
            estimated,
            limit,
        });
    }
    Ok(())
}

fn resolve_kind(kind: KindCommand) -> Result<(GraphKind, Option<AdjacencyMatrix>), CliError> {
    let resolved = match kind {
        KindCommand::Random(RandomArgs { edge_probability }) => {
            (GraphKind::Random { edge_probability }, None)
        }
        KindCommand::Wheel => (GraphKind::Wheel, None),
        KindCommand::Cycle => (GraphKind::Cycle, None),
        KindCommand::Complete => (GraphKind::Complete, None),
        KindCommand::Star => (GraphKind::Star, None),
        KindCommand::BarabasiAlbert(BarabasiAlbertArgs {
            edges_to_attach,
            existing,
        }) => {
            let prefix = existing.as_deref().map(load_matrix).transpose()?;
            (
                GraphKind::BarabasiAlbert {
                    num_edges_to_attach: edges_to_attach,
                },
                prefix,
            )
        }
    };
    Ok(resolved)
}

#[instrument(name = "cli.load_matrix", err, fields(path = %path.display()))]
pub(super) fn load_matrix(path: &Path) -> Result<AdjacencyMatrix, CliError> {
    let text = fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let matrix = text
        .parse::<AdjacencyMatrix>()
        .map_err(|source| CliError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    info!(nodes = matrix.node_count(), "existing graph loaded");
    Ok(matrix)
}

/// Parses a byte count with an optional binary suffix.
///
/// Accepts plain integers and the suffixes `K`, `M`, `G` and `T`, optionally
/// followed by `B` or `iB`, in any case. Every suffix is a power of 1024.
///
/// # Errors
/// Returns a description of the problem for empty, negative, fractional or
/// overflowing input and for unknown suffixes.
pub fn parse_byte_size(raw: &str) -> Result<u64, String> {
    let trimmed = raw.trim();
    let digits_end = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());
    let (digits, suffix) = trimmed.split_at(digits_end);
    if digits.is_empty() {
        return Err(format!("`{raw}` does not start with a byte count"));
    }
    let value: u64 = digits
        .parse()
        .map_err(|error| format!("invalid byte count `{digits}`: {error}"))?;

    let shift = match suffix.to_ascii_lowercase().as_str() {
        "" | "b" => 0,
        "k" | "kb" | "kib" => 10,
        "m" | "mb" | "mib" => 20,
        "g" | "gb" | "gib" => 30,
        "t" | "tb" | "tib" => 40,
        other => return Err(format!("unknown size suffix `{other}`")),
    };
    value
        .checked_mul(1_u64 << shift)
        .ok_or_else(|| format!("`{raw}` does not fit in 64 bits"))
}

/// Renders `summary` to `writer` in the requested format.
///
/// # Errors
/// Returns [`io::Error`] if writing fails or JSON serialisation fails.
///
/// # Examples
/// ```
/// use topogen_cli::cli::{GenerationSummary, OutputFormat, render_summary};
/// use topogen_core::generate_cycle_graph;
///
/// let summary = GenerationSummary {
///     kind: "cycle",
///     matrix: generate_cycle_graph(3)?,
///     format: OutputFormat::Text,
///     elapsed: None,
/// };
/// let mut buffer = Vec::new();
/// render_summary(&summary, &mut buffer)?;
/// assert_eq!(String::from_utf8(buffer)?, "0 1 1\n1 0 1\n1 1 0\n");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn render_summary(summary: &GenerationSummary, mut writer: impl Write) -> io::Result<()> {
    match summary.format {
        OutputFormat::Text => write!(writer, "{}", summary.matrix),
        OutputFormat::Json => {
            let report = JsonReport {
                kind: summary.kind,
                edges: summary.matrix.edge_count(),
                matrix: &summary.matrix,
            };
            serde_json::to_writer(&mut writer, &report)?;
            writeln!(writer)
        }
    }
}
