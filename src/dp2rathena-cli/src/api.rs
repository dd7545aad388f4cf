//! Divine Pride API client

use anyhow::{bail, Context, Result};
use dp2rathena::RawRecord;
use std::time::Duration;

/// Somewhere item records come from
pub trait ItemSource {
    fn fetch_item(&self, id: u32) -> Result<RawRecord>;
}

/// Blocking client for the Divine Pride item endpoint
pub struct CatalogClient {
    agent: ureq::Agent,
    base_url: String,
    api_key: String,
}

impl CatalogClient {
    pub fn new(base_url: &str, api_key: String) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(30))
            .build();

        Self {
            agent,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }

    /// Item URL without the API key
    pub fn item_url(&self, id: u32) -> String {
        format!("{}/item/{}", self.base_url, id)
    }
}

impl ItemSource for CatalogClient {
    fn fetch_item(&self, id: u32) -> Result<RawRecord> {
        let url = self.item_url(id);
        tracing::info!(id, %url, "fetching item");

        let response = match self.agent.get(&url).query("apiKey", &self.api_key).call() {
            Ok(resp) => resp,
            Err(ureq::Error::Status(code, _)) => {
                bail!("Divine Pride returned HTTP {} for item {}", code, id)
            }
            Err(e) => return Err(e).with_context(|| format!("Failed to fetch item {}", id)),
        };

        let body: serde_json::Value = response
            .into_json()
            .with_context(|| format!("Invalid JSON for item {}", id))?;

        RawRecord::from_value(body).with_context(|| format!("Unexpected response for item {}", id))
    }
}
