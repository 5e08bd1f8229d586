use crate::config::settings::KafkaConfig;
use anyhow::Result;
use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct KafkaSsl {
    pub cert: String,
    pub key: String,
}

/// Consumer connection options, derived freshly per call from config.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct KafkaOptions {
    pub connection_string: String,
    pub group_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssl: Option<KafkaSsl>,
}

/// The ssl block is present iff both the client certificate and its key
/// resolve to non-empty values.
pub fn kafka_options(cfg: &KafkaConfig) -> Result<KafkaOptions> {
    let cert = cfg
        .client_cert
        .as_ref()
        .map(|secret| secret.resolve())
        .transpose()?;
    let key = cfg
        .client_cert_key
        .as_ref()
        .map(|secret| secret.resolve())
        .transpose()?;

    let ssl = match (cert, key) {
        (Some(cert), Some(key)) if !cert.is_empty() && !key.is_empty() => {
            Some(KafkaSsl { cert, key })
        }
        _ => None,
    };

    Ok(KafkaOptions {
        connection_string: cfg.url.clone(),
        group_id: cfg.group_id.clone(),
        ssl,
    })
}
