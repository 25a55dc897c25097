use std::{env, sync::Arc, time::Duration};

use anyhow::Context;
use reqwest::Client;
use tracing::info;

use crate::services::content::{ContentSource, SanityClient};

#[derive(Clone)]
pub struct AppState {
    pub content: Arc<dyn ContentSource>,
}

impl AppState {
    pub fn new(content: Arc<dyn ContentSource>) -> Self {
        Self { content }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub port: u16,
    pub project_id: String,
    pub dataset: String,
    pub api_version: String,
    pub use_cdn: bool,
    /// Overrides the host derived from the project id.
    pub api_host: Option<String>,
    pub external_timeout_ms: u64,
}

fn flag(name: &str) -> bool {
    env::var(name)
        .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(false)
}

impl AppConfig {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        let port: u16 = env::var("PORT")
            .unwrap_or_else(|_| "8080".into())
            .parse()
            .context("PORT must be a port number")?;
        let project_id = env::var("SANITY_PROJECT_ID").context("SANITY_PROJECT_ID is required")?;
        let dataset = env::var("SANITY_DATASET").unwrap_or_else(|_| "production".into());
        let api_version = env::var("SANITY_API_VERSION").unwrap_or_else(|_| "2024-04-15".into());
        let api_host = env::var("SANITY_API_HOST").ok().filter(|s| !s.trim().is_empty());
        let external_timeout_ms: u64 = env::var("EXTERNAL_TIMEOUT_MS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(12_000);
        Ok(Self {
            port,
            project_id,
            dataset,
            api_version,
            use_cdn: flag("SANITY_USE_CDN"),
            api_host,
            external_timeout_ms,
        })
    }

    pub fn api_host(&self) -> String {
        match &self.api_host {
            Some(host) => host.clone(),
            None if self.use_cdn => format!("https://{}.apicdn.sanity.io", self.project_id),
            None => format!("https://{}.api.sanity.io", self.project_id),
        }
    }

    pub fn build_state(&self) -> Result<AppState, anyhow::Error> {
        let http = Client::builder()
            .timeout(Duration::from_millis(self.external_timeout_ms))
            .build()?;

        let sanity = SanityClient::new(http, &self.api_host(), &self.api_version, &self.dataset);
        info!(endpoint = sanity.endpoint(), "✅ Content source configured");

        Ok(AppState::new(Arc::new(sanity)))
    }
}
