//! Parser for the content fixture.
//!
//! The fixture is a JSON array of content items with camelCase keys:
//!
//! ```json
//! [{ "id": 1, "title": "Team Tempest", "category": "equipment",
//!    "date": "2024-01-15", "type": "video", "tags": ["Aircraft"] }]
//! ```

use crate::error::{ContentLoadError, Result};
use crate::types::ContentItem;
use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Deserializer};
use std::fs;
use std::path::Path;

/// Calendar date format used by the fixture
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a content fixture file
pub fn parse_content(path: &Path) -> Result<Vec<ContentItem>> {
    if !path.exists() {
        return Err(ContentLoadError::FileNotFound {
            path: path.display().to_string(),
        });
    }
    let raw = fs::read_to_string(path)?;
    parse_content_str(&raw, &path.display().to_string())
}

/// Parse a content fixture already held in memory
///
/// `source_name` only shows up in error messages.
pub fn parse_content_str(raw: &str, source_name: &str) -> Result<Vec<ContentItem>> {
    serde_json::from_str(raw).map_err(|e| ContentLoadError::ParseError {
        source_name: source_name.to_string(),
        reason: e.to_string(),
    })
}

/// Parse a fixture date.
///
/// Accepts a plain ISO date (`2024-01-15`) or an RFC 3339 timestamp, in
/// which case only the calendar date is kept.
pub fn parse_content_date(raw: &str) -> Result<NaiveDate> {
    let trimmed = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, DATE_FORMAT) {
        return Ok(date);
    }
    DateTime::parse_from_rfc3339(trimmed)
        .map(|dt| dt.date_naive())
        .map_err(|_| ContentLoadError::InvalidValue {
            field: "date".to_string(),
            value: raw.to_string(),
        })
}

/// `Option<NaiveDate>` (de)serialization that tolerates malformed input.
///
/// A date that does not parse is logged and dropped instead of failing the
/// whole fixture.
pub(crate) mod lenient_date {
    use super::{parse_content_date, DATE_FORMAT};
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};
    use serde_json::Value;

    pub fn serialize<S>(date: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match date {
            Some(date) => serializer.serialize_str(&date.format(DATE_FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<Value> = Option::deserialize(deserializer)?;
        Ok(match raw {
            None | Some(Value::Null) => None,
            Some(Value::String(raw)) => match parse_content_date(&raw) {
                Ok(date) => Some(date),
                Err(e) => {
                    tracing::warn!("Ignoring unparseable content date: {}", e);
                    None
                }
            },
            Some(other) => {
                tracing::warn!("Ignoring non-string content date: {}", other);
                None
            }
        })
    }
}

/// Treat a JSON `null` list the same as a missing one.
pub(crate) fn nullable_list<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}
