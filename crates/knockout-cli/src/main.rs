//! `knockout` - make near-black pixels of an image transparent.
//!
//! ```text
//! knockout team_udayon.jpeg result_transparent.png --threshold 20
//! ```
//!
//! Set `RUST_LOG=debug` for decode/encode details.

use std::process::ExitCode;

use clap::Parser;

mod cli;

use cli::CliArgs;

fn main() -> ExitCode {
    // User-facing lines are printed directly; logs stay quiet unless asked for
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("error")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = CliArgs::parse();
    cli::run(&args)
}
