//! CSV reading of the registry extract.

use std::fs::File;
use std::path::Path;

use tracing::debug;

use crate::error::IngestionResult;
use crate::types::LiquorLicense;

use super::record::ColumnIndex;

/// Read every license in the extract at `path` for which `predicate` returns `true`.
///
/// Rules:
///
/// - The header line must name every registry column (order can differ) once any data row is
///   present. An extract with no data rows yields an empty `Vec` whatever its header says.
/// - Rows are assembled in file order; `predicate` only sees fully assembled records, so a
///   malformed row fails the call even if the predicate would have rejected it.
/// - A missing or unreadable file is [`IngestionError::Io`](crate::IngestionError::Io).
/// - The file handle lives inside the reader and is closed on every return path.
pub fn read_licenses_from_path<F>(
    path: impl AsRef<Path>,
    predicate: F,
) -> IngestionResult<Vec<LiquorLicense>>
where
    F: FnMut(&LiquorLicense) -> bool,
{
    let mut rdr = reader_builder().from_reader(File::open(path)?);
    read_licenses_from_reader(&mut rdr, predicate)
}

/// Read licenses from an existing CSV reader (which must have headers enabled).
pub fn read_licenses_from_reader<R, F>(
    rdr: &mut csv::Reader<R>,
    predicate: F,
) -> IngestionResult<Vec<LiquorLicense>>
where
    R: std::io::Read,
    F: FnMut(&LiquorLicense) -> bool,
{
    read_counted(rdr, predicate).map(|(licenses, _)| licenses)
}

/// Like [`read_licenses_from_reader`], also returning the number of data rows scanned.
pub(crate) fn read_counted<R, F>(
    rdr: &mut csv::Reader<R>,
    mut predicate: F,
) -> IngestionResult<(Vec<LiquorLicense>, usize)>
where
    R: std::io::Read,
    F: FnMut(&LiquorLicense) -> bool,
{
    let mut record = csv::StringRecord::new();
    if !rdr.read_record(&mut record)? {
        debug!("registry extract has no data rows");
        return Ok((Vec::new(), 0));
    }

    // Columns are only required once a row has to be assembled.
    let index = ColumnIndex::from_headers(rdr.headers()?)?;

    let mut licenses = Vec::new();
    let mut rows_read = 0usize;
    loop {
        rows_read += 1;
        // 1-based row number for users; the header is row 1.
        let user_row = rows_read + 1;
        let license = LiquorLicense::from_row(&index.row(&record), user_row)?;
        if predicate(&license) {
            licenses.push(license);
        }
        if !rdr.read_record(&mut record)? {
            break;
        }
    }

    debug!(rows_read, kept = licenses.len(), "registry extract read");
    Ok((licenses, rows_read))
}

/// The reader configuration used for registry extracts.
///
/// `flexible` is on so that a short row is reported as a schema mismatch naming the missing
/// column rather than as a bare record-length error.
pub fn reader_builder() -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder.has_headers(true).flexible(true);
    builder
}
