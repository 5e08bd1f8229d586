pub mod client;

use crate::config::settings::Auth0Config;
use crate::utils::constants::DEFAULT_HTTP_TIMEOUT_MS;
use anyhow::Result;
use client::M2mClient;
use reqwest::Client;
use std::time::Duration;

/// The pair of audience-bound M2M clients used by the processors.
/// Built once from config, immutable afterwards and cheap to clone.
#[derive(Debug, Clone)]
pub struct M2mAuth {
    ubahn: M2mClient,
    topcoder: M2mClient,
}

impl M2mAuth {
    pub fn new(cfg: &Auth0Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(DEFAULT_HTTP_TIMEOUT_MS))
            .build()?;

        Ok(Self {
            ubahn: M2mClient::new(cfg.ubahn_audience.clone(), cfg.clone(), client.clone()),
            topcoder: M2mClient::new(cfg.topcoder_audience.clone(), cfg.clone(), client),
        })
    }

    /// Fresh token for the U-Bahn APIs.
    pub async fn ubahn_token(&self) -> Result<String> {
        self.ubahn.fetch_token().await
    }

    /// Fresh token for the Topcoder APIs.
    pub async fn topcoder_token(&self) -> Result<String> {
        self.topcoder.fetch_token().await
    }
}
