pub mod cylinder;
pub mod wheel;

use crate::check::{GraphStats, check_all};
use crate::graph::PlaneGraph;
use anyhow::{Context, Result, bail};
use clap::{Args, ValueEnum};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// How the adjacency list is written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One line per vertex, IDs separated by a space
    #[default]
    Text,
    /// A JSON array of rows
    Json,
}

/// Flags shared by both generators.
#[derive(Debug, Clone, Default, Args)]
pub struct OutputArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Write the adjacency list to FILE instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Print vertex, edge and face counts to stderr
    #[arg(long)]
    pub stats: bool,

    /// Verify the embedding before writing it
    #[arg(long)]
    pub check: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Initialize the stderr logger. `RUST_LOG` takes precedence over `verbose`.
pub fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .try_init();
}

/// Check, write and summarize a generated graph according to `args`.
pub fn emit(graph: &PlaneGraph, args: &OutputArgs) -> Result<()> {
    if args.check {
        let result = check_all(graph);
        if !result.ok {
            let problems = result.problems();
            for problem in &problems {
                log::warn!("check failed: {}", problem);
            }
            bail!("generated graph failed checks: {}", problems.join("; "));
        }
        log::debug!("all checks passed ({} faces)", result.faces.unwrap_or(0));
    }

    match &args.output {
        Some(path) => {
            write_to_file(graph, args.format, path)?;
            log::info!("wrote {} rows to {}", graph.order(), path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut out = BufWriter::new(stdout.lock());
            write_graph(graph, args.format, &mut out)?;
            out.flush().context("Failed to flush stdout")?;
        }
    }

    if args.stats {
        eprintln!("{}", GraphStats::of(graph));
    }
    Ok(())
}

/// Write `graph` in the given format.
pub fn write_graph<W: Write>(graph: &PlaneGraph, format: OutputFormat, out: &mut W) -> Result<()> {
    match format {
        OutputFormat::Text => graph
            .write_text(out)
            .context("Failed to write adjacency list")?,
        OutputFormat::Json => graph
            .write_json(out)
            .context("Failed to write adjacency list as JSON")?,
    }
    Ok(())
}

fn write_to_file(graph: &PlaneGraph, format: OutputFormat, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create output file {}", path.display()))?;
    let mut out = BufWriter::new(file);
    write_graph(graph, format, &mut out)?;
    out.flush()
        .with_context(|| format!("Failed to write {}", path.display()))
}
