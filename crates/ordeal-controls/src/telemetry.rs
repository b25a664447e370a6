//! Canned telemetry records mirroring the framework's per-file outcomes.

use chrono::SecondsFormat;
use ordeal_telemetry::TelemetryRecord;

use crate::clock;
use crate::path;

/// Default example: one executed file with every counter exercised.
pub fn example() -> TelemetryRecord {
    example_with(path::example(), 1, 1)
}

/// One executed file: 1 pass, 1 skip, 11 assertions, the supplied
/// failure/error counts, spanning the control clock interval.
pub fn example_with(file: &str, failures: u64, errors: u64) -> TelemetryRecord {
    TelemetryRecord {
        files: vec![file.to_string()],
        passes: 1,
        failures,
        skips: 1,
        assertions: 11,
        errors,
        start_time: Some(clock::t0()),
        stop_time: Some(clock::t1()),
    }
}

/// Wire text for the default [`example`] record.
pub fn data() -> String {
    data_with(path::example())
}

/// Wire text for an [`example_with`] record executing `file`.
pub fn data_with(file: &str) -> String {
    serde_json::json!({
        "files": [file],
        "passes": 1,
        "failures": 1,
        "skips": 1,
        "assertions": 11,
        "errors": 1,
        "start_time": clock::t0().to_rfc3339_opts(SecondsFormat::Micros, true),
        "stop_time": clock::t1().to_rfc3339_opts(SecondsFormat::Micros, true),
    })
    .to_string()
}

/// A run whose single file passed.
pub mod passed {
    use super::*;

    pub fn file() -> &'static str {
        "pass.rs"
    }

    pub fn example() -> TelemetryRecord {
        example_with(file(), 0, 0)
    }
}

/// A run whose single file had a test failure.
pub mod failed {
    use super::*;

    pub fn file() -> &'static str {
        "fail.rs"
    }

    pub fn example() -> TelemetryRecord {
        example_with(file(), 1, 0)
    }
}

/// A run whose single file raised an error.
pub mod errored {
    use super::*;

    pub fn file() -> &'static str {
        "error.rs"
    }

    pub fn example() -> TelemetryRecord {
        example_with(file(), 0, 1)
    }
}

/// The merge of the passed, failed, and errored runs.
pub mod merged {
    use super::*;

    /// The records a coordinator would hand to the merge, in order.
    pub fn sources() -> Vec<TelemetryRecord> {
        vec![passed::example(), failed::example(), errored::example()]
    }

    /// The expected merge result.
    pub fn example() -> TelemetryRecord {
        TelemetryRecord {
            files: vec![
                passed::file().to_string(),
                failed::file().to_string(),
                errored::file().to_string(),
            ],
            passes: 3,
            failures: 1,
            skips: 3,
            assertions: 33,
            errors: 1,
            start_time: Some(clock::t0()),
            stop_time: Some(clock::t1()),
        }
    }
}
