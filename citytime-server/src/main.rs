//! Binary crate for the dashboard HTTP server.
//!
//! This crate focuses on:
//! - Parsing CLI flags and layering them over the config file
//! - Serving `/api/cities`, `/api/health` and the static browser page

use clap::Parser;

mod cli;
mod routes;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cmd = cli::Cli::parse();
    cmd.run().await
}
