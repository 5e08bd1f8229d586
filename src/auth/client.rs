use crate::config::settings::Auth0Config;
use crate::utils::constants::GRANT_TYPE_CLIENT_CREDENTIALS;
use anyhow::{anyhow, Result};
use reqwest::Client;
use serde::Deserialize;
use std::collections::HashMap;
use tracing::debug;

/// Raw token response from the client-credentials endpoint
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    expires_in: Option<u64>,
}

#[derive(Debug, Clone)]
pub struct M2mClient {
    pub audience: String,
    cfg: Auth0Config,
    client: Client,
}

impl M2mClient {
    pub fn new(audience: String, cfg: Auth0Config, client: Client) -> Self {
        Self {
            audience,
            cfg,
            client,
        }
    }

    /// Token endpoint: the proxy server when configured, Auth0 otherwise.
    fn token_url(&self) -> &str {
        self.cfg
            .proxy_server_url
            .as_deref()
            .filter(|url| !url.is_empty())
            .unwrap_or(&self.cfg.url)
    }

    /// Request a fresh bearer token. Nothing is cached here, every call
    /// reaches the endpoint.
    pub async fn fetch_token(&self) -> Result<String> {
        let mut form = HashMap::new();
        form.insert("grant_type", GRANT_TYPE_CLIENT_CREDENTIALS.to_string());
        form.insert("client_id", self.cfg.client_id.resolve()?);
        form.insert("client_secret", self.cfg.client_secret.resolve()?);
        form.insert("audience", self.audience.clone());

        let response = self.client.post(self.token_url()).form(&form).send().await?;
        if !response.status().is_success() {
            return Err(anyhow!("M2M token request failed: {}", response.status()));
        }

        let body: TokenResponse = response.json().await?;
        debug!(
            "fetched M2M token for audience {} (expires_in: {:?})",
            self.audience, body.expires_in
        );
        Ok(body.access_token)
    }
}
