use anyhow::Result;
use chrono::{DateTime, Utc};
use chrono_english::{parse_date_string, Dialect};
use taskq_core::models::Timestamp;

/// Parses a point in time given on the command line. Machine formats
/// (RFC 3339, `2024-02-01`, `2024-02-01 10:00`) are tried first, then English
/// phrases such as "tomorrow" or "next friday", relative to `now`.
pub fn parse_when(input: &str, now: DateTime<Utc>) -> Result<DateTime<Utc>> {
    if let Some(instant) = Timestamp::parse_instant(input) {
        return Ok(instant);
    }
    parse_date_string(input, now, Dialect::Us)
        .map_err(|e| anyhow::anyhow!("Failed to parse date '{}': {}", input, e))
}
