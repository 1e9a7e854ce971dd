//! Parsers for user-supplied walk parameters: coordinates and distances.

use crate::error::UsageError;
use crate::types::Coordinate;

/// Default walk start: the New York Stock Exchange.
pub const NY_STOCK_EXCHANGE: &str = "40.706981526535955, -74.01094373134949";
/// Default walk end: the Metropolitan Museum of Art.
pub const NY_MET_MUSEUM: &str = "40.77902603833201, -73.9623977615683";
/// Default distance between stops.
pub const DEFAULT_DENSITY: &str = "1km";

/// A length unit accepted by [`parse_distance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistanceUnit {
    Meters,
    Kilometers,
    Miles,
    Feet,
}

impl DistanceUnit {
    pub const ALL: [DistanceUnit; 4] = [Self::Meters, Self::Kilometers, Self::Miles, Self::Feet];

    /// Suffixes naming this unit (abbreviation first).
    pub fn suffixes(self) -> [&'static str; 2] {
        match self {
            Self::Meters => ["m", "meters"],
            Self::Kilometers => ["km", "kilometers"],
            Self::Miles => ["mi", "miles"],
            Self::Feet => ["ft", "feet"],
        }
    }

    /// Length of one unit in meters.
    pub fn meters(self) -> f64 {
        match self {
            Self::Meters => 1.0,
            Self::Kilometers => 1000.0,
            Self::Miles => 1609.34,
            Self::Feet => 0.3048,
        }
    }
}

/// Parse `"x,y"` into a [`Coordinate`], keeping the components in the order given.
///
/// Whitespace around each component is ignored, as is anything after a second comma.
pub fn parse_coordinates(raw: &str) -> Result<Coordinate, UsageError> {
    let invalid = || UsageError::InvalidCoordinates {
        raw: raw.to_owned(),
    };

    let mut parts = raw.split(',');
    let x = parts.next().ok_or_else(invalid)?;
    let y = parts.next().ok_or_else(invalid)?;

    let x: f64 = x.trim().parse().map_err(|_| invalid())?;
    let y: f64 = y.trim().parse().map_err(|_| invalid())?;
    Ok(Coordinate::new(x, y))
}

/// Parse a magnitude followed by a unit suffix (e.g. `500m`, `0.5mi`) into meters.
///
/// Longer suffixes are tried first so that `km` is never read as `k` + `m`.
pub fn parse_distance(raw: &str) -> Result<f64, UsageError> {
    let invalid = || UsageError::InvalidDistance {
        raw: raw.to_owned(),
    };

    let mut candidates: Vec<(&'static str, DistanceUnit)> = DistanceUnit::ALL
        .iter()
        .flat_map(|&unit| unit.suffixes().into_iter().map(move |s| (s, unit)))
        .collect();
    candidates.sort_by_key(|(suffix, _)| std::cmp::Reverse(suffix.len()));

    let (magnitude, unit) = candidates
        .into_iter()
        .find_map(|(suffix, unit)| raw.strip_suffix(suffix).map(|m| (m, unit)))
        .ok_or_else(invalid)?;

    let magnitude: f64 = magnitude.trim().parse().map_err(|_| invalid())?;
    Ok(magnitude * unit.meters())
}
