use std::{path::PathBuf, sync::Arc};

use anyhow::Context;
use citytime_core::{CITIES, Config, Dashboard, OpenMeteoProvider};
use clap::Parser;

use crate::routes;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "citytime-server", version, about = "City time & weather dashboard server")]
pub struct Cli {
    /// Path to a TOML config file. Defaults to the platform config directory.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Port to listen on; overrides the config file and `PORT`.
    #[arg(long)]
    pub port: Option<u16>,

    /// Directory of static assets for the browser page.
    #[arg(long)]
    pub static_dir: Option<PathBuf>,
}

impl Cli {
    /// Config file first, then `PORT`, then flags.
    pub fn resolve_config(&self, port_env: Option<&str>) -> anyhow::Result<Config> {
        let mut config = Config::load(self.config.as_deref())?;
        config.apply_port_env(port_env)?;

        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(dir) = &self.static_dir {
            config.server.static_dir = Some(dir.clone());
        }

        Ok(config)
    }

    pub async fn run(self) -> anyhow::Result<()> {
        let port_env = std::env::var("PORT").ok();
        let config = self.resolve_config(port_env.as_deref())?;

        let provider = OpenMeteoProvider::new(
            config.provider.base_url.clone(),
            config.provider.timeout(),
        )
        .context("Failed to build weather HTTP client")?;
        let dashboard = Arc::new(Dashboard::new(Arc::new(provider), CITIES));

        let static_dir = config
            .server
            .static_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/static")));

        let (addr, server) = warp::serve(routes::routes(dashboard, static_dir.clone()))
            .try_bind_with_graceful_shutdown(config.listen_addr(), shutdown_signal())
            .with_context(|| format!("Failed to bind {}", config.listen_addr()))?;

        tracing::info!(
            %addr,
            static_dir = %static_dir.display(),
            cities = CITIES.len(),
            "Server running on http://localhost:{}",
            addr.port()
        );

        server.await;
        tracing::info!("Server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %err, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
}
