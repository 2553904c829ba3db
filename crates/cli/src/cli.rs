//! Command-line arguments of the `relax` binary.

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "relax")]
#[command(about = "Solves A·x = b by Gauss-Seidel relaxation and prints every iterate, the approximate solution, and the residual")]
#[command(after_help = "Set RUST_LOG (for example RUST_LOG=debug) to see solver logs on stderr.\n\
Exit status: 0 converged, 1 error, 2 not converged.")]
pub struct Cli {
    /// TOML (.toml) or JSON problem file; the built-in 5x5 scenario is used when omitted
    pub problem: Option<PathBuf>,

    /// Print the built-in scenario as TOML and exit
    #[arg(long)]
    pub print_problem: bool,
}
