use crate::config::settings::AppConfig;
use crate::utils::constants::DEFAULT_SLEEP_TIME_MS;
use anyhow::{bail, Result};
use std::fs;
use std::path::Path;

/// Load and validate config from YAML file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let raw = fs::read_to_string(path)?;
    let mut config: AppConfig = serde_yaml::from_str(&raw)?;

    // Apply defaults
    if config.settings.sleep_time_ms.is_none() {
        config.settings.sleep_time_ms = Some(DEFAULT_SLEEP_TIME_MS);
    }

    // Validate auth0
    if config.auth0.url.is_empty() {
        bail!("auth0.url must not be empty");
    }
    if config.auth0.ubahn_audience.is_empty() {
        bail!("auth0.ubahn_audience must not be empty");
    }
    if config.auth0.topcoder_audience.is_empty() {
        bail!("auth0.topcoder_audience must not be empty");
    }

    // Validate kafka
    if config.kafka.url.is_empty() {
        bail!("kafka.url must not be empty");
    }
    if config.kafka.group_id.is_empty() {
        bail!("kafka.group_id must not be empty");
    }

    // Validate platform APIs
    if config.api.members_url.is_empty() {
        bail!("api.members_url must not be empty");
    }
    if config.api.v5_url.is_empty() {
        bail!("api.v5_url must not be empty");
    }
    if config.api.message_originator.is_empty() {
        bail!("api.message_originator must not be empty");
    }

    Ok(config)
}
