//! Lenient parsing for the messy parts of the source data.
//!
//! The record export this engine consumes is hand-maintained: quantities
//! show up as strings, prices go missing, dates arrive in whatever format
//! the spreadsheet produced. Everything here degrades to a harmless default
//! instead of failing the whole load.

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Deserializer};

/// Parse a record's raw date text.
///
/// Accepts the formats observed in the source datasets: ISO `YYYY-MM-DD`,
/// US `MM/DD/YYYY`, and full RFC 3339 timestamps. Anything else is treated
/// as unparseable and the record is excluded from aggregation (it still
/// appears in raw filtered views).
pub fn parse_record_date(raw: Option<&str>) -> Option<NaiveDate> {
    let raw = raw?.trim();
    if raw.is_empty() {
        return None;
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| NaiveDate::parse_from_str(raw, "%m/%d/%Y").ok())
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
}

/// Coerce to a finite number; NaN and infinities become 0.
pub fn coerce_finite(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Deserializer for numeric record fields: accepts a JSON number, a numeric
/// string, or anything else (which coerces to 0).
pub(crate) fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(coerce_value(&value))
}

fn coerce_value(value: &serde_json::Value) -> f64 {
    match value {
        serde_json::Value::Number(n) => coerce_finite(n.as_f64().unwrap_or(0.0)),
        serde_json::Value::String(s) => coerce_finite(s.trim().parse().unwrap_or(0.0)),
        _ => 0.0,
    }
}
