//! Property-based tests for the cell and walk-parameter parsers.

use nyslad::ingestion::fields::{optional_string, parse_date, parse_point};
use nyslad::location::{parse_coordinates, parse_distance, DistanceUnit};
use proptest::prelude::*;

proptest! {
    #[test]
    fn wkt_point_round_trips_with_swapped_axes(
        lng in -180.0f64..180.0,
        lat in -90.0f64..90.0,
    ) {
        let coord = parse_point(&format!("POINT ({lng} {lat})")).expect("valid point");
        prop_assert!((coord.y - lng).abs() < 1e-9);
        prop_assert!((coord.x - lat).abs() < 1e-9);
    }

    #[test]
    fn point_parser_never_panics(raw in ".*") {
        let _ = parse_point(&raw);
    }

    #[test]
    fn dates_round_trip_through_us_format(year in 1900i32..2100, month in 1u32..=12, day in 1u32..=28) {
        let parsed = parse_date(&format!("{month:02}/{day:02}/{year}")).unwrap();
        prop_assert_eq!(parsed, chrono::NaiveDate::from_ymd_opt(year, month, day));
    }

    #[test]
    fn optional_string_is_none_only_for_empty(raw in ".*") {
        prop_assert_eq!(optional_string(&raw).is_none(), raw.is_empty());
    }

    #[test]
    fn coordinates_keep_literal_order(x in -90.0f64..90.0, y in -180.0f64..180.0) {
        let c = parse_coordinates(&format!("{x}, {y}")).unwrap();
        prop_assert_eq!((c.x, c.y), (x, y));
    }

    #[test]
    fn every_suffix_scales_by_its_unit(magnitude in 0u32..100_000, unit_idx in 0usize..4, long in any::<bool>()) {
        let unit = DistanceUnit::ALL[unit_idx];
        let suffix = unit.suffixes()[usize::from(long)];
        let meters = parse_distance(&format!("{magnitude}{suffix}")).unwrap();
        prop_assert!((meters - f64::from(magnitude) * unit.meters()).abs() < 1e-6);
    }
}
