//! Wall-clock interval rendering: whole minutes plus fractional seconds at
//! millisecond precision, e.g. `1m1.111s`.

use chrono::Duration;

/// Render a non-negative duration as `{minutes}m{seconds}.{millis}s`.
/// Sub-millisecond detail is truncated. Sign handling is the caller's job;
/// [`TelemetryRecord::elapsed_time`](crate::TelemetryRecord::elapsed_time)
/// rejects negative intervals before calling this.
pub(crate) fn format_elapsed(elapsed: Duration) -> String {
    let total_millis = elapsed.num_milliseconds();
    let minutes = total_millis / 60_000;
    let seconds = (total_millis % 60_000) / 1_000;
    let millis = total_millis % 1_000;
    format!("{minutes}m{seconds}.{millis:03}s")
}
