//! The per-run telemetry record: counters, executed files, and the run's
//! wall-clock interval.
//!
//! One record is created per run scope, mutated as the run's events occur,
//! and at run end either snapshotted (see [`crate::snapshot`]) or merged
//! with sibling records from parallel workers. A record is never shared
//! across concurrent mutators: each worker owns its own, and the owners
//! merge on a single thread afterwards.

use chrono::{DateTime, Utc};

use crate::elapsed::format_elapsed;
use crate::errors::{TelemetryError, TelemetryResult};

/// Counter/timestamp aggregate for one test run, or for the merge of several.
///
/// Counters start at zero and only grow through the recording operations;
/// `files` grows by append in event order, duplicates permitted. Fields are
/// public so a record can be reconstructed field-by-field from persisted or
/// transmitted data.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TelemetryRecord {
    pub files: Vec<String>,
    pub passes: u64,
    pub failures: u64,
    pub skips: u64,
    pub assertions: u64,
    pub errors: u64,
    pub start_time: Option<DateTime<Utc>>,
    pub stop_time: Option<DateTime<Utc>>,
}

impl TelemetryRecord {
    /// Empty record: all counters zero, no files, timestamps unset.
    pub fn new() -> Self {
        Self::default()
    }

    // Recording operations. This is the hot path during a run: plain
    // increments and an append, no allocation beyond the stored path and no
    // failure mode.

    /// Record that a test file was executed.
    pub fn file_executed(&mut self, path: impl Into<String>) {
        self.files.push(path.into());
    }

    /// Record that a test passed.
    pub fn test_passed(&mut self) {
        self.passes += 1;
    }

    /// Record that a test failed.
    pub fn test_failed(&mut self) {
        self.failures += 1;
    }

    /// Record that a test was skipped.
    pub fn test_skipped(&mut self) {
        self.skips += 1;
    }

    /// Record that an error was raised outside a test's assertions.
    pub fn error_raised(&mut self) {
        self.errors += 1;
    }

    /// Record that an assertion was made.
    pub fn assertion_made(&mut self) {
        self.assertions += 1;
    }

    /// Stamp the start of the run's wall-clock interval.
    pub fn set_start_time(&mut self, time: DateTime<Utc>) {
        self.start_time = Some(time);
    }

    /// Stamp the end of the run's wall-clock interval.
    pub fn set_stop_time(&mut self, time: DateTime<Utc>) {
        self.stop_time = Some(time);
    }

    // Queries. Pure reads, safe to call repeatedly.

    /// Total number of tests: passes + failures + skips.
    pub fn tests(&self) -> u64 {
        self.passes + self.failures + self.skips
    }

    /// The run's wall-clock interval as `{minutes}m{seconds}.{millis}s`,
    /// e.g. `1m1.111s`.
    ///
    /// Fails with [`TelemetryError::MissingTimestamp`] until both timestamps
    /// are stamped, and with [`TelemetryError::InvalidInterval`] when the
    /// stop time precedes the start time.
    pub fn elapsed_time(&self) -> TelemetryResult<String> {
        let start = self
            .start_time
            .ok_or(TelemetryError::MissingTimestamp { field: "start" })?;
        let stop = self
            .stop_time
            .ok_or(TelemetryError::MissingTimestamp { field: "stop" })?;
        if stop < start {
            return Err(TelemetryError::InvalidInterval { start, stop });
        }
        Ok(format_elapsed(stop - start))
    }

    /// True when no test failed and no error was raised. Skips do not affect
    /// pass classification.
    pub fn is_passed(&self) -> bool {
        self.failures == 0 && self.errors == 0
    }

    /// True when a test failed or an error was raised.
    ///
    /// Evaluated on its own terms, not as the negation of
    /// [`is_passed`](Self::is_passed), so the predicates stay independent if
    /// one of them later grows additional conditions.
    pub fn is_failed(&self) -> bool {
        self.failures > 0 || self.errors > 0
    }

    /// Combine records from independent runs into one fresh aggregate.
    ///
    /// Files concatenate in input order, counters sum, and the merged
    /// interval spans the outermost start/stop across the inputs (the full
    /// wall-clock window, not the sum of individual durations). The merged
    /// record owns none of its sources.
    ///
    /// Inputs must agree on timestamp presence: merging a stamped record
    /// with an unstamped one fails with
    /// [`TelemetryError::IncompleteTelemetry`]. Merging a single record
    /// returns an equivalent copy; merging none fails with
    /// [`TelemetryError::EmptyMerge`].
    pub fn merged(records: &[TelemetryRecord]) -> TelemetryResult<TelemetryRecord> {
        let (first, rest) = records.split_first().ok_or(TelemetryError::EmptyMerge)?;
        tracing::debug!(records = records.len(), "merging telemetry records");

        let mut merged = first.clone();
        for record in rest {
            if merged.start_time.is_some() != record.start_time.is_some() {
                return Err(TelemetryError::IncompleteTelemetry { field: "start" });
            }
            if merged.stop_time.is_some() != record.stop_time.is_some() {
                return Err(TelemetryError::IncompleteTelemetry { field: "stop" });
            }

            merged.files.extend(record.files.iter().cloned());
            merged.passes += record.passes;
            merged.failures += record.failures;
            merged.skips += record.skips;
            merged.assertions += record.assertions;
            merged.errors += record.errors;

            if let (Some(a), Some(b)) = (merged.start_time, record.start_time) {
                merged.start_time = Some(a.min(b));
            }
            if let (Some(a), Some(b)) = (merged.stop_time, record.stop_time) {
                merged.stop_time = Some(a.max(b));
            }
        }
        Ok(merged)
    }
}
