//! Batch driver tests
//!
//! Output locations, invocation order and both failure policies.

mod common;

use common::{REWOUND_MARKER, RecordingEngine, dir_names};
use rstest::*;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tempfile::TempDir;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::{Layer, registry};
use usn_rewind::infrastructure::observers::{MemoryLog, TracingObserver};
use usn_rewind::{FailurePolicy, Pair, PairStatus, RewindBatchUseCase, RunEvent};

#[fixture]
fn pairs() -> Vec<Pair> {
    (1..=4)
        .map(|i| {
            Pair::new(
                i,
                PathBuf::from(format!("in/{}$MFT_Output.csv", i)),
                PathBuf::from(format!("in/{}$J_Output.csv", i)),
            )
        })
        .collect()
}

#[rstest]
fn test_one_output_location_per_pair(pairs: Vec<Pair>) {
    let out = TempDir::new().unwrap();
    let engine = RecordingEngine::new();
    let batch = RewindBatchUseCase::new(&engine, FailurePolicy::FailFast);

    let report = batch.execute(&pairs, out.path(), &MemoryLog::new()).unwrap();

    assert!(report.is_success());
    assert_eq!(report.succeeded(), 4);
    assert_eq!(dir_names(out.path()), vec!["Pair_1", "Pair_2", "Pair_3", "Pair_4"]);

    let calls = engine.calls();
    assert_eq!(calls.len(), 4);
    for (i, call) in calls.iter().enumerate() {
        assert_eq!(call.output, out.path().join(format!("Pair_{}", i + 1)));
        assert_eq!(call.mft, pairs[i].mft());
        assert_eq!(call.journal, pairs[i].journal());
        assert!(call.output_existed);
        assert!(call.output.join(REWOUND_MARKER).is_file());
    }
}

#[rstest]
fn test_fail_fast_stops_at_failing_pair(pairs: Vec<Pair>) {
    let out = TempDir::new().unwrap();
    let engine = RecordingEngine::failing_on(&[2]);
    let batch = RewindBatchUseCase::new(&engine, FailurePolicy::FailFast);

    let report = batch.execute(&pairs, out.path(), &MemoryLog::new()).unwrap();

    assert_eq!(engine.calls().len(), 2);
    let statuses: Vec<&PairStatus> = report.outcomes().iter().map(|o| &o.status).collect();
    assert_eq!(statuses[0], &PairStatus::Succeeded);
    assert!(statuses[1].is_failed());
    assert_eq!(statuses[2], &PairStatus::NotAttempted);
    assert_eq!(statuses[3], &PairStatus::NotAttempted);

    assert_eq!(report.first_failure().unwrap().pair.index(), 2);
    assert!(!out.path().join("Pair_3").exists());
    assert!(!out.path().join("Pair_4").exists());
}

#[rstest]
fn test_continue_on_error_attempts_every_pair(pairs: Vec<Pair>) {
    let out = TempDir::new().unwrap();
    let engine = RecordingEngine::failing_on(&[1, 3]);
    let batch = RewindBatchUseCase::new(&engine, FailurePolicy::ContinueOnError);

    let report = batch.execute(&pairs, out.path(), &MemoryLog::new()).unwrap();

    assert_eq!(engine.calls().len(), 4);
    assert_eq!(report.succeeded(), 2);
    assert_eq!(report.failed(), 2);
    assert_eq!(report.not_attempted(), 0);
    assert_eq!(report.first_failure().unwrap().pair.index(), 1);
}

#[rstest]
fn test_log_follows_processing_order(pairs: Vec<Pair>) {
    let out = TempDir::new().unwrap();
    let engine = RecordingEngine::failing_on(&[3]);
    let log = MemoryLog::new();

    RewindBatchUseCase::new(&engine, FailurePolicy::FailFast)
        .execute(&pairs, out.path(), &log)
        .unwrap();

    let entries = log.entries();
    assert_eq!(entries[0], "Starting USNJRNL rewind process...");
    assert!(entries[1].starts_with("Processing pair 1:"));
    assert_eq!(entries[2], "Pair 1 completed.");
    assert!(entries[3].starts_with("Processing pair 2:"));
    assert!(entries[5].starts_with("Processing pair 3:"));
    assert!(entries[6].starts_with("Error during processing pair 3: "));
    assert!(entries[7].starts_with("USNJRNL rewind aborted: 2 succeeded, 1 failed, 1 not attempted."));
    assert!(entries[7].contains("Process completed in"));
    assert_eq!(entries.len(), 8);
}

#[rstest]
fn test_events_carry_pair_paths(pairs: Vec<Pair>) {
    let out = TempDir::new().unwrap();
    let engine = RecordingEngine::new();
    let seen = parking_lot::Mutex::new(Vec::new());
    let observer = |event: &RunEvent| seen.lock().push(event.clone());

    RewindBatchUseCase::new(&engine, FailurePolicy::FailFast)
        .execute(&pairs[..1], out.path(), &observer)
        .unwrap();

    let events = seen.into_inner();
    assert_eq!(
        events[1],
        RunEvent::PairStarted {
            index: 1,
            total: 1,
            mft: pairs[0].mft().to_path_buf(),
            journal: pairs[0].journal().to_path_buf(),
            output: out.path().join("Pair_1"),
        }
    );
}

#[test]
fn test_output_root_created_when_missing() {
    let tmp = TempDir::new().unwrap();
    let out = tmp.path().join("deep/output/root");
    let engine = RecordingEngine::new();
    let pair = Pair::new(1, PathBuf::from("m"), PathBuf::from("j"));

    RewindBatchUseCase::new(&engine, FailurePolicy::FailFast)
        .execute(&[pair], &out, &MemoryLog::new())
        .unwrap();

    assert!(out.join("Pair_1").is_dir());
}

#[test]
fn test_existing_output_location_is_reused() {
    let out = TempDir::new().unwrap();
    fs::create_dir(out.path().join("Pair_1")).unwrap();
    let engine = RecordingEngine::new();
    let pair = Pair::new(1, PathBuf::from("m"), PathBuf::from("j"));

    let report = RewindBatchUseCase::new(&engine, FailurePolicy::FailFast)
        .execute(&[pair], out.path(), &MemoryLog::new())
        .unwrap();

    assert!(report.is_success());
}

#[test]
fn test_output_creation_failure_is_a_pair_failure() {
    let out = TempDir::new().unwrap();
    // A regular file where Pair_1 should go blocks directory creation.
    fs::write(out.path().join("Pair_1"), b"").unwrap();

    let engine = RecordingEngine::new();
    let pairs = vec![
        Pair::new(1, PathBuf::from("m1"), PathBuf::from("j1")),
        Pair::new(2, PathBuf::from("m2"), PathBuf::from("j2")),
    ];

    let report = RewindBatchUseCase::new(&engine, FailurePolicy::ContinueOnError)
        .execute(&pairs, out.path(), &MemoryLog::new())
        .unwrap();

    assert!(report.outcomes()[0].status.is_failed());
    assert_eq!(report.outcomes()[1].status, PairStatus::Succeeded);
    assert_eq!(engine.calls().len(), 1);
    assert_eq!(engine.calls()[0].mft, PathBuf::from("m2"));
}

#[test]
fn test_empty_batch_reports_success() {
    let out = TempDir::new().unwrap();
    let engine = RecordingEngine::new();

    let report = RewindBatchUseCase::new(&engine, FailurePolicy::FailFast)
        .execute(&[], out.path(), &MemoryLog::new())
        .unwrap();

    assert!(report.outcomes().is_empty());
    assert!(engine.calls().is_empty());
}

/// Counts ERROR records
struct ErrorCount(Arc<AtomicUsize>);

impl<S: Subscriber> Layer<S> for ErrorCount {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if *event.metadata().level() == Level::ERROR {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }
}

#[rstest]
fn test_each_failure_logged_once(pairs: Vec<Pair>) {
    let out = TempDir::new().unwrap();
    let engine = RecordingEngine::failing_on(&[1, 3]);
    let batch = RewindBatchUseCase::new(&engine, FailurePolicy::ContinueOnError);
    let errors = Arc::new(AtomicUsize::new(0));
    let subscriber = registry().with(ErrorCount(Arc::clone(&errors)));

    let report = tracing::subscriber::with_default(subscriber, || {
        batch.execute(&pairs, out.path(), &TracingObserver).unwrap()
    });

    assert_eq!(report.failed(), 2);
    assert_eq!(errors.load(Ordering::SeqCst), 2);
}
