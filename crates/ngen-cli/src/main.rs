//! # ngen CLI Entry Point
//!
//! Parses arguments, initializes tracing, and dispatches to the run
//! module. Exit code 0 when the brief validates (and artifacts were
//! written), 1 otherwise.

use clap::Parser;

use ngen_cli::run::{run, Cli};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if !run(&cli)? {
        std::process::exit(1);
    }

    Ok(())
}
