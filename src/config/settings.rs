use anyhow::{anyhow, Result};
use serde::Deserialize;
use std::{env, fs};

/// ================================
/// Full service configuration
/// ================================
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub settings: SettingsConfig,
    pub auth0: Auth0Config,
    pub kafka: KafkaConfig,
    pub api: ApiConfig,
}

/// ================================
/// Global service-wide settings
/// ================================
#[derive(Debug, Deserialize, Clone)]
pub struct SettingsConfig {
    /// fallback duration for `helpers::time::sleep` when the caller passes none
    pub sleep_time_ms: Option<u64>,
    pub logging: Option<LoggingConfig>,
}

/// ================================
/// Auth0 M2M credentials
/// ================================
#[derive(Debug, Deserialize, Clone)]
pub struct Auth0Config {
    pub url: String,
    pub ubahn_audience: String,
    pub topcoder_audience: String,
    /// overrides `url` as the token endpoint when present
    pub proxy_server_url: Option<String>,
    pub client_id: SecretValue,
    pub client_secret: SecretValue,
}

/// ================================
/// Kafka
/// ================================
#[derive(Debug, Deserialize, Clone)]
pub struct KafkaConfig {
    pub url: String,
    pub group_id: String,
    pub client_cert: Option<SecretValue>,
    pub client_cert_key: Option<SecretValue>,
}

/// ================================
/// Platform APIs
/// ================================
#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    pub members_url: String,
    pub v5_url: String,
    pub message_originator: String,
}

/// Secret-bearing value sources
#[derive(Debug, Deserialize, Clone)]
#[serde(untagged)]
pub enum SecretValue {
    Literal { value: String },
    FromEnv { from_env: String },
    FromFile { path: String },
}

impl SecretValue {
    pub fn resolve(&self) -> Result<String> {
        match self {
            SecretValue::Literal { value } => Ok(value.to_owned()),
            SecretValue::FromEnv { from_env } => {
                env::var(from_env).map_err(|err| anyhow!("{}: {}", from_env, err))
            }
            SecretValue::FromFile { path } => fs::read_to_string(path)
                .map_err(|err| anyhow!(err))
                .map(|res| res.trim().to_string()),
        }
    }
}

/// ================================
/// Logging
/// ================================
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String, // allowed: trace, debug, info, warn, error
    pub format: LogFormat,
}

impl LoggingConfig {
    pub fn new(level: String, format: LogFormat) -> Self {
        Self { level, format }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    Compact,
}

impl LogFormat {
    pub fn from_env() -> Self {
        match std::env::var("LOG_FORMAT")
            .unwrap_or_else(|_| "json".to_string())
            .to_lowercase()
            .as_str()
        {
            "compact" | "text" => LogFormat::Compact,
            _ => LogFormat::Json,
        }
    }
}
