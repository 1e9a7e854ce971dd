//! In-memory transformations over ingested licenses.
//!
//! Currently implemented:
//!
//! - [`filter()`]: order-preserving filtering by predicate
//! - predicate constructors ([`in_county`], [`in_city`], [`with_description_containing`],
//!   [`has_georeference`], [`expires_on_or_after`])
//!
//! ## Example: filter while ingesting, then again in memory
//!
//! ```no_run
//! use nyslad::ingestion::{read_dataset_with, IngestionOptions};
//! use nyslad::processing::{filter, has_georeference, in_county};
//!
//! # fn main() -> Result<(), nyslad::IngestionError> {
//! let opts = IngestionOptions::from_path("licenses.csv");
//! let manhattan = read_dataset_with(&opts, in_county("New York"))?;
//! let mappable = filter(&manhattan, has_georeference);
//! println!("{} of {} have a georeference", mappable.len(), manhattan.len());
//! # Ok(())
//! # }
//! ```

pub mod filter;

pub use filter::{
    expires_on_or_after, filter, has_georeference, in_city, in_county, with_description_containing,
};
