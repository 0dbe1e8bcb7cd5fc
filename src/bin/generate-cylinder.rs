//! Print a planar embedding of the cylindrical grid graph with `n` columns
//! and `m` rows in adjacency list format.
//!
//! ```bash
//! generate-cylinder 3 3 > cylinder-3x3.txt
//! ```

use clap::Parser;
use planegen::commands::{self, OutputArgs};
use std::process::ExitCode;

/// Generate a planar embedding of an n x m cylindrical grid graph
#[derive(Parser)]
#[command(name = "generate-cylinder")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Number of columns (at least 3)
    #[arg(allow_negative_numbers = true)]
    n: String,

    /// Number of rows (at least 2)
    #[arg(allow_negative_numbers = true)]
    m: String,

    #[command(flatten)]
    output: OutputArgs,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    commands::init_logging(cli.output.verbose);

    match commands::cylinder::run(&cli.n, &cli.m, &cli.output) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
