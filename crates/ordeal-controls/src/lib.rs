//! Canned telemetry fixtures for Ordeal test suites.
//!
//! Deterministic records, clock instants, and wire text mirroring the
//! framework's per-file outcomes. Used by this workspace's own tests and
//! available to downstream suites asserting against telemetry.

pub mod clock;
pub mod path;
pub mod telemetry;
