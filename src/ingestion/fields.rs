//! Stateless converters from raw extract cells to typed values.
//!
//! Strict parsers return `Result<_, String>`; the message is wrapped into
//! [`crate::IngestionError::ParseError`] by the record assembler, which knows the row and column.
//! [`parse_point`] is deliberately permissive and never fails.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::types::Coordinate;

static WKT_POINT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^POINT \(([^ ]+) ([^ ]+)\)").expect("WKT point pattern is a valid regex")
});

/// Parse a `MM/DD/YYYY` date. Empty input is `Ok(None)`.
pub fn parse_date(raw: &str) -> Result<Option<NaiveDate>, String> {
    if raw.is_empty() {
        return Ok(None);
    }

    let parts: Vec<&str> = raw.split('/').collect();
    let [month, day, year] = parts.as_slice() else {
        return Err("expected date as MM/DD/YYYY".to_string());
    };

    if year.len() != 4 || !year.bytes().all(|b| b.is_ascii_digit()) {
        return Err("expected a four-digit year".to_string());
    }

    let month: u32 = month
        .parse()
        .map_err(|e| format!("invalid month '{month}': {e}"))?;
    let day: u32 = day.parse().map_err(|e| format!("invalid day '{day}': {e}"))?;
    let year: i32 = year
        .parse()
        .map_err(|e| format!("invalid year '{year}': {e}"))?;

    NaiveDate::from_ymd_opt(year, month, day)
        .map(Some)
        .ok_or_else(|| "not a valid calendar date".to_string())
}

/// Parse a WKT `POINT (longitude latitude)` into a [`Coordinate`].
///
/// Returns `None` for empty input and for anything that does not have the expected shape.
/// The result has `x = latitude`, `y = longitude`.
pub fn parse_point(raw: &str) -> Option<Coordinate> {
    if raw.is_empty() {
        return None;
    }

    let caps = WKT_POINT.captures(raw)?;
    let lng: f64 = caps.get(1)?.as_str().parse().ok()?;
    let lat: f64 = caps.get(2)?.as_str().parse().ok()?;

    Some(Coordinate::new(lat, lng))
}

/// Map an empty cell to `None`; pass anything else through unchanged.
pub fn optional_string(raw: &str) -> Option<String> {
    if raw.is_empty() {
        None
    } else {
        Some(raw.to_owned())
    }
}

/// Parse a base-10 integer, ignoring surrounding whitespace.
pub fn parse_int(raw: &str) -> Result<i64, String> {
    raw.trim().parse::<i64>().map_err(|e| e.to_string())
}
