use chrono::{DateTime, NaiveDate, Utc};
use serde::de::DeserializeOwned;

/// Parse an enum value given in any case, with `-` or `_` separators.
///
/// `needs-attention`, `needs_attention`, and `NEEDS_ATTENTION` all parse.
pub fn parse_enum<T>(raw: &str, field: &str) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let normalized = raw.trim().replace('-', "_").to_ascii_uppercase();
    serde_json::from_value(serde_json::Value::String(normalized))
        .map_err(|error| anyhow::anyhow!("invalid {field} '{raw}': {error}"))
}

/// Parse an optional enum argument.
pub fn parse_opt_enum<T>(raw: Option<&str>, field: &str) -> anyhow::Result<Option<T>>
where
    T: DeserializeOwned,
{
    raw.map(|raw| parse_enum(raw, field)).transpose()
}

/// Parse RFC 3339, or a bare `YYYY-MM-DD` taken as midnight UTC.
pub fn parse_datetime(raw: &str, field: &str) -> anyhow::Result<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| {
            anyhow::anyhow!("invalid {field} '{raw}': expected RFC 3339 or YYYY-MM-DD")
        })
}

/// Parse an optional date argument.
pub fn parse_opt_datetime(raw: Option<&str>, field: &str) -> anyhow::Result<Option<DateTime<Utc>>> {
    raw.map(|raw| parse_datetime(raw, field)).transpose()
}
