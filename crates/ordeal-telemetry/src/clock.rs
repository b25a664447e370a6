//! Clock seam for stamping run intervals.
//!
//! The record treats timestamps as opaque orderable values; whoever drives a
//! run decides where they come from. Production orchestrators use
//! [`SystemClock`], test suites inject fixed instants.

use chrono::{DateTime, Utc};

/// Source of timestamps for a run orchestrator.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::telemetry::TelemetryRecord;
    use chrono::TimeZone;

    struct FixedClock(DateTime<Utc>);

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.0
        }
    }

    #[test]
    fn records_are_stamped_through_the_seam() {
        let instant = Utc.with_ymd_and_hms(2026, 1, 1, 11, 11, 0).unwrap();
        let clock: &dyn Clock = &FixedClock(instant);

        let mut telemetry = TelemetryRecord::new();
        telemetry.set_start_time(clock.now());
        telemetry.set_stop_time(clock.now());

        assert_eq!(telemetry.elapsed_time().unwrap(), "0m0.000s");
    }
}
