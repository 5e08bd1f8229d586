//! Shared constants and invariants

pub const DEFAULT_SLEEP_TIME_MS: u64 = 1000;
pub const DEFAULT_HTTP_TIMEOUT_MS: u64 = 5000;

/// mime-type carried by every bus event envelope
pub const MIME_TYPE_JSON: &str = "application/json";
/// appended to the configured v5 API base URL
pub const BUS_EVENTS_PATH: &str = "/bus/events";

pub const GRANT_TYPE_CLIENT_CREDENTIALS: &str = "client_credentials";
