//! Core data model for registry ingestion.
//!
//! Ingestion produces one [`LiquorLicense`] per extract row. Optional columns are `Option`s and
//! never hold an empty string.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A geographic point.
///
/// `x` is the latitude and `y` the longitude. WKT notation lists longitude first, so points
/// read from the extract are swapped on the way in (see [`crate::ingestion::fields::parse_point`]).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude, in decimal degrees.
    pub x: f64,
    /// Longitude, in decimal degrees.
    pub y: f64,
}

impl Coordinate {
    /// Create a coordinate from its components, in `(x, y)` order.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// One entry of the liquor-license registry.
///
/// `license_permit_id` is the natural key. Uniqueness across an extract is not checked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiquorLicense {
    pub license_permit_id: String,
    pub premises_county: String,
    /// Numeric license type code.
    pub license_type: i64,
    /// License class code (kept as text; codes are zero-padded, e.g. `"0002"`).
    pub license_class: String,
    pub description: String,
    pub legal_name: String,
    /// Trade name ("doing business as").
    pub dba: Option<String>,
    pub address: String,
    pub additional_address: Option<String>,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub original_issue_date: Option<NaiveDate>,
    pub last_issue_date: Option<NaiveDate>,
    pub effective_date: Option<NaiveDate>,
    pub expiration_date: Option<NaiveDate>,
    pub parent_license_id: Option<String>,
    pub legacy_serial_number: Option<String>,
    /// Alternate ("also known as") address.
    pub aka_address: Option<String>,
    pub georeference: Option<Coordinate>,
}
