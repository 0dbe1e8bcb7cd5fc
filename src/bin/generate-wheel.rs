//! Print a planar embedding of the wheel graph with `n` vertices in
//! adjacency list format.
//!
//! ```bash
//! generate-wheel 8 > wheel-8.txt
//! ```

use clap::Parser;
use planegen::commands::{self, OutputArgs};
use std::process::ExitCode;

/// Generate a planar embedding of the wheel graph with n vertices
#[derive(Parser)]
#[command(name = "generate-wheel")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Number of vertices, hub included (at least 4)
    #[arg(allow_negative_numbers = true)]
    n: String,

    #[command(flatten)]
    output: OutputArgs,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    commands::init_logging(cli.output.verbose);

    match commands::wheel::run(&cli.n, &cli.output) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
