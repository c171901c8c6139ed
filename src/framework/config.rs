//! Client configuration.

use crate::framework::error::FrameworkError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

fn default_max_pages() -> usize {
    100
}

/// Settings for a [`ResourceClient`](crate::framework::ResourceClient).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Account the resource lives in, bound to `ACCOUNTID` in every template.
    pub account_id: u64,
    /// Wait after a write whose action asks for a propagation delay.
    #[serde(default)]
    pub propagation_delay_ms: u64,
    /// Upper bound on pages fetched by a single List traversal.
    #[serde(default = "default_max_pages")]
    pub max_pages: usize,
}

impl ClientConfig {
    pub fn new(account_id: u64) -> Self {
        Self {
            account_id,
            propagation_delay_ms: 0,
            max_pages: default_max_pages(),
        }
    }

    pub fn with_propagation_delay(mut self, delay: Duration) -> Self {
        self.propagation_delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        self
    }

    pub fn with_max_pages(mut self, max_pages: usize) -> Self {
        self.max_pages = max_pages;
        self
    }

    pub fn propagation_delay(&self) -> Duration {
        Duration::from_millis(self.propagation_delay_ms)
    }

    /// Parses a JSON document such as `{"account_id": 1234, "propagation_delay_ms": 500}`.
    pub fn from_json(json: &str) -> Result<Self, FrameworkError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| FrameworkError::Config(e.to_string()))?;
        if config.max_pages == 0 {
            return Err(FrameworkError::Config("max_pages must be at least 1".into()));
        }
        Ok(config)
    }
}
