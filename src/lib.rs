//! `nyslad` ingests the New York State Liquor Authority active-license extract (a CSV file) into
//! strongly-typed [`types::LiquorLicense`] records.
//!
//! The primary entrypoints are [`ingestion::read_dataset`] and [`ingestion::read_dataset_with`],
//! which read the extract named by [`ingestion::IngestionOptions`] and optionally keep only the
//! records matching a predicate.
//!
//! ## What ingestion produces
//!
//! One [`types::LiquorLicense`] per data row, in file order. Columns are matched by header name,
//! so the extract's column order does not matter. Per field:
//!
//! - text columns are kept verbatim
//! - `Type` must be an integer
//! - date columns are `MM/DD/YYYY`; an empty cell is `None`, anything else malformed is an error
//! - optional text columns (DBA, additional/AKA address, parent license, legacy serial) map an
//!   empty cell to `None`
//! - `Georeference` is a WKT `POINT (longitude latitude)`; it becomes a [`types::Coordinate`]
//!   with `x = latitude`, `y = longitude`, and anything unreadable is simply `None`
//!
//! Any error aborts the whole call; there is no partial result.
//!
//! ## Quick example
//!
//! ```no_run
//! use nyslad::ingestion::{read_dataset_with, IngestionOptions};
//!
//! # fn main() -> Result<(), nyslad::IngestionError> {
//! let opts = IngestionOptions::from_path("Current_Liquor_Authority_Active_Licenses_20260219.csv");
//! let kings = read_dataset_with(&opts, |lic| lic.premises_county == "Kings")?;
//! for lic in &kings {
//!     println!("{} {}", lic.license_permit_id, lic.legal_name);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`ingestion`]: dataset entrypoints, the CSV reader, record assembly and field parsers
//! - [`types`]: the record and coordinate types
//! - [`processing`]: in-memory filtering and ready-made predicates
//! - [`location`]: parsers for user-supplied coordinates and distances
//! - [`prompt`]: yes/no confirmation prompts
//! - [`error`]: error types

pub mod error;
pub mod ingestion;
pub mod location;
pub mod processing;
pub mod prompt;
pub mod types;

pub use error::{IngestionError, IngestionResult, UsageError};
pub use types::{Coordinate, LiquorLicense};
