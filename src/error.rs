use thiserror::Error;

/// Convenience result type for ingestion operations.
pub type IngestionResult<T> = Result<T, IngestionError>;

/// Error type returned by registry ingestion.
///
/// Every variant aborts the whole ingestion call; no partially-read dataset is ever returned.
#[derive(Debug, Error)]
pub enum IngestionError {
    /// Underlying I/O error (e.g. file not found, permission denied).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV decoding error (malformed quoting, invalid UTF-8, I/O while reading records).
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// The extract does not have the expected shape (missing header column, short row).
    #[error("schema mismatch: {message}")]
    SchemaMismatch { message: String },

    /// A value could not be converted into its typed field.
    #[error("failed to parse value at row {row} column '{column}': {message} (raw='{raw}')")]
    ParseError {
        row: usize,
        column: String,
        raw: String,
        message: String,
    },
}

/// Error type for user-supplied command-line values (coordinates, distances).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UsageError {
    #[error("bad usage: coordinates should be in the format 'x,y' where x and y are numbers (got '{raw}')")]
    InvalidCoordinates { raw: String },

    #[error("bad usage: density should end with a unit, e.g. 1km, 500m, 0.5mi (got '{raw}')")]
    InvalidDistance { raw: String },
}
