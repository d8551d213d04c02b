//! Binary crate for the `citytime` terminal dashboard.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Polling the dashboard server
//! - Human-friendly card rendering

use clap::Parser;

mod cli;
mod client;
mod render;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cmd = cli::Cli::parse();
    cmd.run().await
}
