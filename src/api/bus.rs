use crate::config::settings::ApiConfig;
use crate::helpers::time::iso_timestamp;
use crate::utils::constants::{BUS_EVENTS_PATH, MIME_TYPE_JSON};
use anyhow::{anyhow, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

/// Envelope published to the bus API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventMessage {
    pub topic: String,
    pub originator: String,
    pub timestamp: String,
    #[serde(rename = "mime-type")]
    pub mime_type: String,
    pub payload: Value,
}

impl EventMessage {
    /// Wrap `payload` for `topic`, stamped with the current instant.
    pub fn new(topic: &str, originator: &str, payload: Value) -> Self {
        Self {
            topic: topic.to_string(),
            originator: originator.to_string(),
            timestamp: iso_timestamp(),
            mime_type: MIME_TYPE_JSON.to_string(),
            payload,
        }
    }
}

/// Publishes event envelopes to the bus endpoint.
#[derive(Debug, Clone)]
pub struct BusClient {
    events_url: String,
    originator: String,
    client: Client,
}

impl BusClient {
    pub fn new(cfg: &ApiConfig, client: Client) -> Self {
        Self {
            events_url: format!("{}{}", cfg.v5_url.trim_end_matches('/'), BUS_EVENTS_PATH),
            originator: cfg.message_originator.clone(),
            client,
        }
    }

    /// Publish `payload` under `topic`. No retry, no acknowledgment
    /// handling beyond the HTTP status; failures propagate.
    pub async fn post_event(&self, topic: &str, payload: Value, token: &str) -> Result<()> {
        debug!("posting event to bus topic {}: {}", topic, payload);
        let message = EventMessage::new(topic, &self.originator, payload);

        let response = self
            .client
            .post(&self.events_url)
            .bearer_auth(token)
            .json(&message)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(anyhow!(
                "posting event to topic {} failed: {}",
                topic,
                response.status()
            ));
        }

        debug!("posted event to bus topic {}", topic);
        Ok(())
    }
}
