use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use citytime_core::{CitiesEnvelope, ErrorBody};
use reqwest::Client;

/// Fetches the dashboard payload from a running server.
#[derive(Debug, Clone)]
pub struct DashboardClient {
    base_url: String,
    http: Client,
}

impl DashboardClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(15))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { base_url: base_url.trim_end_matches('/').to_string(), http })
    }

    pub async fn fetch(&self) -> Result<CitiesEnvelope> {
        let url = format!("{}/api/cities", self.base_url);

        let res = self
            .http
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Failed to reach dashboard server at {url}"))?;

        let status = res.status();
        let body = res.text().await.context("Failed to read dashboard response body")?;

        if !status.is_success() {
            // The server reports orchestration failures as `{ "error": ... }`.
            let reason = serde_json::from_str::<ErrorBody>(&body).map(|e| e.error).unwrap_or(body);
            return Err(anyhow!("Dashboard request failed with status {status}: {reason}"));
        }

        serde_json::from_str(&body).context("Failed to parse dashboard JSON")
    }
}
