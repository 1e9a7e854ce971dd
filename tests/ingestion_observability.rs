use std::fs;
use std::sync::{Arc, Mutex};

use nyslad::ingestion::{
    read_dataset, read_dataset_with, CompositeObserver, FileObserver, IngestionContext, IngestionObserver,
    IngestionOptions, IngestionSeverity, IngestionStats,
};
use nyslad::IngestionError;

const FIXTURE: &str = "tests/fixtures/active_licenses_sample.csv";

#[derive(Default)]
struct RecordingObserver {
    successes: Mutex<Vec<IngestionStats>>,
    failures: Mutex<Vec<IngestionSeverity>>,
    alerts: Mutex<Vec<IngestionSeverity>>,
}

impl IngestionObserver for RecordingObserver {
    fn on_success(&self, _ctx: &IngestionContext, stats: IngestionStats) {
        self.successes.lock().unwrap().push(stats);
    }

    fn on_failure(&self, _ctx: &IngestionContext, severity: IngestionSeverity, _error: &IngestionError) {
        self.failures.lock().unwrap().push(severity);
    }

    fn on_alert(&self, _ctx: &IngestionContext, severity: IngestionSeverity, _error: &IngestionError) {
        self.alerts.lock().unwrap().push(severity);
    }
}

fn options_with(source: &str, obs: Arc<RecordingObserver>, alert_at: IngestionSeverity) -> IngestionOptions {
    IngestionOptions {
        alert_at_or_above: alert_at,
        ..IngestionOptions::from_path(source).with_observer(obs)
    }
}

#[test]
fn observer_receives_row_and_kept_counts_on_success() {
    let obs = Arc::new(RecordingObserver::default());
    let opts = options_with(FIXTURE, obs.clone(), IngestionSeverity::Critical);

    let kept = read_dataset_with(&opts, |lic| lic.premises_county == "New York").unwrap();
    assert_eq!(kept.len(), 2);

    let successes = obs.successes.lock().unwrap().clone();
    assert_eq!(
        successes,
        vec![IngestionStats {
            rows_read: 3,
            records_kept: 2
        }]
    );
    assert!(obs.failures.lock().unwrap().is_empty());
}

#[test]
fn observer_receives_failure_and_alert_on_critical_io_error() {
    let obs = Arc::new(RecordingObserver::default());
    let opts = options_with("tests/fixtures/does_not_exist.csv", obs.clone(), IngestionSeverity::Critical);

    let _ = read_dataset(&opts).unwrap_err();

    let failures = obs.failures.lock().unwrap().clone();
    let alerts = obs.alerts.lock().unwrap().clone();
    assert_eq!(failures, vec![IngestionSeverity::Critical]);
    assert_eq!(alerts, vec![IngestionSeverity::Critical]);
}

#[test]
fn observer_receives_failure_without_alert_for_malformed_extract() {
    let path = std::env::temp_dir().join(format!("nyslad-observability-{}.csv", std::process::id()));
    fs::write(&path, "\"License Permit ID\",\"City\"\n\"X\",\"NYC\"\n").unwrap();

    let obs = Arc::new(RecordingObserver::default());
    let opts = options_with(path.to_str().unwrap(), obs.clone(), IngestionSeverity::Critical);
    let err = read_dataset(&opts).unwrap_err();
    let _ = fs::remove_file(&path);

    assert!(matches!(err, IngestionError::SchemaMismatch { .. }));
    assert_eq!(obs.failures.lock().unwrap().clone(), vec![IngestionSeverity::Error]);
    assert!(obs.alerts.lock().unwrap().is_empty());
}

#[test]
fn composite_observer_fans_out() {
    let a = Arc::new(RecordingObserver::default());
    let b = Arc::new(RecordingObserver::default());
    let observers: Vec<Arc<dyn IngestionObserver>> = vec![a.clone(), b.clone()];
    let composite = CompositeObserver::new(observers);

    let opts = IngestionOptions::from_path(FIXTURE).with_observer(Arc::new(composite));
    read_dataset(&opts).unwrap();

    assert_eq!(a.successes.lock().unwrap().len(), 1);
    assert_eq!(b.successes.lock().unwrap().len(), 1);
}

#[test]
fn file_observer_appends_lines() {
    let log = std::env::temp_dir().join(format!("nyslad-observer-{}.log", std::process::id()));
    let _ = fs::remove_file(&log);

    let opts = IngestionOptions::from_path(FIXTURE).with_observer(Arc::new(FileObserver::new(&log)));
    read_dataset(&opts).unwrap();
    read_dataset(&opts).unwrap();

    let contents = fs::read_to_string(&log).unwrap();
    let _ = fs::remove_file(&log);
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines.iter().all(|l| l.contains(" ok ") && l.contains("rows=3 kept=3")));
}
