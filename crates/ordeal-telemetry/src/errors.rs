//! Error types for telemetry queries, merging, and snapshot decoding.

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Result type for telemetry operations.
pub type TelemetryResult<T> = Result<T, TelemetryError>;

/// Errors surfaced by telemetry queries, merging, and snapshot decoding.
///
/// Recording operations never fail; every variant here comes from a derived
/// computation or a reconstruction step. All failures are synchronous and
/// there are no retries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TelemetryError {
    /// Elapsed time was requested before both timestamps were recorded.
    /// Recoverable: stamp the record, or defer the call.
    #[error("missing {field} timestamp")]
    MissingTimestamp { field: &'static str },

    /// The stop timestamp precedes the start timestamp, so the interval
    /// cannot be rendered. The caller stamped the record out of order.
    #[error("stop time {stop} precedes start time {start}")]
    InvalidInterval {
        start: DateTime<Utc>,
        stop: DateTime<Utc>,
    },

    /// Merge inputs disagree on whether a timestamp was recorded. Signals
    /// mismatched run lifecycles upstream, not a transient condition.
    #[error("telemetry records disagree on {field} timestamp presence")]
    IncompleteTelemetry { field: &'static str },

    /// Merge was invoked with no input records.
    #[error("cannot merge an empty set of telemetry records")]
    EmptyMerge,

    /// A serialized snapshot could not be reconstructed: missing field,
    /// non-numeric counter, or unparsable timestamp. No partial
    /// reconstruction is attempted.
    #[error("malformed telemetry snapshot: {reason}")]
    MalformedSnapshot { reason: String },
}

impl TelemetryError {
    /// True when the failure clears once both timestamps are supplied.
    pub fn is_missing_timestamp(&self) -> bool {
        matches!(self, Self::MissingTimestamp { .. })
    }

    /// True for snapshot decode failures.
    pub fn is_malformed_snapshot(&self) -> bool {
        matches!(self, Self::MalformedSnapshot { .. })
    }
}
