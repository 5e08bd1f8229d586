// tests/common/mod.rs
use reqwest::Client;

use crate::config::settings::{
    ApiConfig, AppConfig, Auth0Config, KafkaConfig, SecretValue, SettingsConfig,
};

pub fn build_reqwest_client() -> Client {
    Client::builder()
        .timeout(std::time::Duration::from_secs(5))
        .build()
        .expect("reqwest client")
}

/// Config fixture pointing every outbound URL at the given bases
/// (usually mock servers).
pub fn test_app_config(auth0_url: String, members_url: String, v5_url: String) -> AppConfig {
    AppConfig {
        settings: SettingsConfig {
            sleep_time_ms: Some(10),
            logging: None,
        },
        auth0: Auth0Config {
            url: auth0_url,
            ubahn_audience: "https://ubahn.example.com".to_string(),
            topcoder_audience: "https://topcoder.example.com".to_string(),
            proxy_server_url: None,
            client_id: SecretValue::Literal {
                value: "client-abc".to_string(),
            },
            client_secret: SecretValue::Literal {
                value: "secret-xyz".to_string(),
            },
        },
        kafka: KafkaConfig {
            url: "broker-1:9092".to_string(),
            group_id: "ubahn-processor-group".to_string(),
            client_cert: None,
            client_cert_key: None,
        },
        api: ApiConfig {
            members_url,
            v5_url,
            message_originator: "u-bahn-api".to_string(),
        },
    }
}
