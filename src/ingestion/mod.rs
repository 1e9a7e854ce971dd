//! Registry ingestion entrypoints and implementations.
//!
//! Most callers should use [`read_dataset`] / [`read_dataset_with`] (from [`dataset`]) which:
//!
//! - read the extract named by [`IngestionOptions::source`]
//! - assemble one [`crate::types::LiquorLicense`] per row, in file order
//! - optionally report success/failure/alerts to an [`IngestionObserver`]
//!
//! Lower-level pieces are also available under:
//! - [`csv`]: reading from a path or an existing `csv::Reader`
//! - [`record`]: the row -> record assembler and the extract's column names
//! - [`fields`]: the individual cell parsers

pub mod csv;
pub mod dataset;
pub mod fields;
pub mod observability;
pub mod record;

pub use dataset::{
    read_dataset, read_dataset_with, IngestionOptions, IngestionRequest, DEFAULT_SOURCE_FILE,
};
pub use observability::{
    CompositeObserver, FileObserver, IngestionContext, IngestionObserver, IngestionSeverity, IngestionStats,
    StdErrObserver, TracingObserver,
};
pub use record::{columns, ColumnIndex, RawRow};
