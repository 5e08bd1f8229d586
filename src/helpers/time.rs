use chrono::{SecondsFormat, Utc};
use tokio::time::Duration;
use tracing::debug;

/// Halt the calling task for `duration_ms`, or `default_ms` when the caller
/// passes none (the configured `settings.sleep_time_ms`).
pub async fn sleep(duration_ms: Option<u64>, default_ms: u64) {
    let ms = duration_ms.unwrap_or(default_ms);
    debug!("sleeping for {} ms", ms);
    tokio::time::sleep(Duration::from_millis(ms)).await;
}

/// Current instant as ISO-8601 with millisecond precision,
/// e.g. `2020-01-01T00:00:00.000Z`.
pub fn iso_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
