//! Run telemetry for the Ordeal test-execution framework.
//!
//! One [`TelemetryRecord`] is created per run scope and mutated as the run's
//! events occur: files executed, tests passed/failed/skipped, errors raised,
//! assertions made, and the start/stop of the wall-clock interval. At run
//! end the record answers derived questions (total tests, elapsed time,
//! pass/fail classification), is serialized as a [`TelemetrySnapshot`] to
//! cross a process boundary, or is merged with sibling records from parallel
//! workers via [`TelemetryRecord::merged`].
//!
//! A record carries no internal synchronization. Each concurrent execution
//! unit owns and mutates exactly one record; after all units complete, one
//! owner merges them. Nothing here blocks, suspends, or performs I/O.

pub mod clock;
mod elapsed;
pub mod errors;
pub mod settings;
pub mod snapshot;
pub mod telemetry;

pub use clock::{Clock, SystemClock};
pub use errors::{TelemetryError, TelemetryResult};
pub use settings::{RunnerKind, Settings};
pub use snapshot::TelemetrySnapshot;
pub use telemetry::TelemetryRecord;
