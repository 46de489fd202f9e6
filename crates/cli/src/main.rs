use anyhow::Result;
use clap::Parser;

use shmock::{Cli, commands::generate_command};

fn main() -> Result<()> {
    // Initialize tracing based on RUST_LOG env var, warnings by default
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let opts = Cli::parse().into_opts();
    generate_command(&opts)
}
