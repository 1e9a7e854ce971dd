//! Dataset-level ingestion entrypoint.
//!
//! Most callers should use [`read_dataset`] or [`read_dataset_with`], which read the extract
//! named by [`IngestionOptions::source`] into an ordered `Vec` of [`LiquorLicense`]s.
//!
//! - The source defaults to [`DEFAULT_SOURCE_FILE`], a relative path. Nothing is resolved
//!   against the executable or crate location; pass an explicit path to read elsewhere.
//! - If an [`IngestionObserver`] is provided, success/failure/alerts are reported to it.

use std::fmt;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::debug;

use crate::error::{IngestionError, IngestionResult};
use crate::types::LiquorLicense;

use super::csv::{read_counted, reader_builder};
use super::observability::{IngestionContext, IngestionObserver, IngestionSeverity, IngestionStats};

/// File name of the registry extract read when no source is configured.
///
/// The date in the name is the extract date published by the licensing authority.
pub const DEFAULT_SOURCE_FILE: &str = "Current_Liquor_Authority_Active_Licenses_20260219.csv";

/// Options controlling dataset ingestion.
///
/// Use [`Default`] for common cases.
#[derive(Clone)]
pub struct IngestionOptions {
    /// Extract to read. Defaults to [`DEFAULT_SOURCE_FILE`].
    pub source: PathBuf,
    /// Optional observer for logging/alerts.
    pub observer: Option<Arc<dyn IngestionObserver>>,
    /// Severity threshold at which `on_alert` is invoked.
    pub alert_at_or_above: IngestionSeverity,
}

impl IngestionOptions {
    /// Options reading from `source`, otherwise default.
    pub fn from_path(source: impl AsRef<Path>) -> Self {
        Self {
            source: source.as_ref().to_path_buf(),
            ..Default::default()
        }
    }

    /// Options reading [`DEFAULT_SOURCE_FILE`] inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::from_path(dir.as_ref().join(DEFAULT_SOURCE_FILE))
    }

    pub fn with_observer(mut self, observer: Arc<dyn IngestionObserver>) -> Self {
        self.observer = Some(observer);
        self
    }
}

impl fmt::Debug for IngestionOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IngestionOptions")
            .field("source", &self.source)
            .field("observer_set", &self.observer.is_some())
            .field("alert_at_or_above", &self.alert_at_or_above)
            .finish()
    }
}

impl Default for IngestionOptions {
    fn default() -> Self {
        Self {
            source: PathBuf::from(DEFAULT_SOURCE_FILE),
            observer: None,
            alert_at_or_above: IngestionSeverity::Critical,
        }
    }
}

/// Read every license in the configured extract, in file order.
///
/// # Examples
///
/// ```no_run
/// use nyslad::ingestion::{read_dataset, IngestionOptions};
///
/// # fn main() -> Result<(), nyslad::IngestionError> {
/// let licenses = read_dataset(&IngestionOptions::from_path("licenses.csv"))?;
/// println!("licenses={}", licenses.len());
/// # Ok(())
/// # }
/// ```
pub fn read_dataset(options: &IngestionOptions) -> IngestionResult<Vec<LiquorLicense>> {
    read_dataset_with(options, |_| true)
}

/// Read the configured extract, keeping only licenses for which `predicate` returns `true`.
///
/// Every row is fully parsed before the predicate sees it; a malformed row fails the whole
/// call even when the predicate would have rejected it.
///
/// When an observer is configured, this function reports:
///
/// - `on_success` on success, with row and kept-record counts
/// - `on_failure` on failure, with a computed severity
/// - `on_alert` on failure when the computed severity is >= `options.alert_at_or_above`
///
/// # Examples
///
/// ```no_run
/// use std::sync::Arc;
///
/// use nyslad::ingestion::{read_dataset_with, IngestionOptions, StdErrObserver};
///
/// # fn main() -> Result<(), nyslad::IngestionError> {
/// let opts = IngestionOptions::from_path("licenses.csv")
///     .with_observer(Arc::new(StdErrObserver::default()));
///
/// let manhattan = read_dataset_with(&opts, |lic| lic.premises_county == "New York")?;
/// println!("manhattan={}", manhattan.len());
/// # Ok(())
/// # }
/// ```
pub fn read_dataset_with<F>(
    options: &IngestionOptions,
    predicate: F,
) -> IngestionResult<Vec<LiquorLicense>>
where
    F: FnMut(&LiquorLicense) -> bool,
{
    let ctx = IngestionContext {
        source: options.source.clone(),
    };
    debug!(source = %ctx.source.display(), "reading registry extract");

    let result = File::open(&options.source)
        .map_err(IngestionError::from)
        .and_then(|file| read_counted(&mut reader_builder().from_reader(file), predicate));

    if let Some(obs) = options.observer.as_ref() {
        match &result {
            Ok((licenses, rows_read)) => obs.on_success(
                &ctx,
                IngestionStats {
                    rows_read: *rows_read,
                    records_kept: licenses.len(),
                },
            ),
            Err(e) => {
                let sev = IngestionSeverity::for_error(e);
                obs.on_failure(&ctx, sev, e);
                if sev >= options.alert_at_or_above {
                    obs.on_alert(&ctx, sev, e);
                }
            }
        }
    }

    result.map(|(licenses, _)| licenses)
}

/// Convenience helper for callers that want an owned request object.
#[derive(Debug, Clone, Default)]
pub struct IngestionRequest {
    pub options: IngestionOptions,
}

impl IngestionRequest {
    pub fn new(options: IngestionOptions) -> Self {
        Self { options }
    }

    /// Execute the request by calling [`read_dataset`].
    pub fn run(&self) -> IngestionResult<Vec<LiquorLicense>> {
        read_dataset(&self.options)
    }

    /// Execute the request by calling [`read_dataset_with`].
    pub fn run_with<F>(&self, predicate: F) -> IngestionResult<Vec<LiquorLicense>>
    where
        F: FnMut(&LiquorLicense) -> bool,
    {
        read_dataset_with(&self.options, predicate)
    }
}
