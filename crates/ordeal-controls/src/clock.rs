//! Fixed run interval: `t1` is exactly 61.111 seconds after `t0`.

use chrono::{DateTime, Duration, Utc};

pub fn t0() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2026-01-01T11:11:00.000011Z")
        .expect("control timestamp parses")
        .with_timezone(&Utc)
}

pub fn t1() -> DateTime<Utc> {
    t0() + Duration::milliseconds(61_111)
}

/// The rendered elapsed time of the `t0..t1` interval.
pub fn elapsed_text() -> &'static str {
    "1m1.111s"
}
