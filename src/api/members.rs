use crate::config::settings::ApiConfig;
use anyhow::{anyhow, Result};
use reqwest::Client;
use serde_json::{Map, Value};
use tracing::debug;

/// Authenticated lookup against the members API.
#[derive(Debug, Clone)]
pub struct MembersClient {
    base_url: String,
    client: Client,
}

impl MembersClient {
    pub fn new(cfg: &ApiConfig, client: Client) -> Self {
        Self {
            base_url: cfg.members_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    /// Fetch the member profile for `handle`. The handle is URL-escaped
    /// before use. An absent response body yields an empty object.
    pub async fn get_member(&self, handle: &str, token: &str) -> Result<Value> {
        let url = format!("{}/{}", self.base_url, urlencoding::encode(handle));
        debug!("fetching member {}", handle);

        let response = self.client.get(&url).bearer_auth(token).send().await?;
        if !response.status().is_success() {
            return Err(anyhow!("member lookup failed: {}", response.status()));
        }

        let body = response.text().await?;
        if body.is_empty() {
            return Ok(Value::Object(Map::new()));
        }
        serde_json::from_str(&body).map_err(|err| anyhow!("invalid member response body: {}", err))
    }
}
