//! Serialized snapshot of a telemetry record.
//!
//! The snapshot is this crate's only wire surface: field names are exact,
//! `files` order is preserved, and timestamps are rendered as RFC 3339 text
//! at microsecond precision. Sub-microsecond detail does not survive a
//! round-trip through the wire text; everything else reconstructs exactly.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{TelemetryError, TelemetryResult};
use crate::telemetry::TelemetryRecord;

/// Serde helpers: timestamps as RFC 3339 strings with microsecond precision,
/// or null when the run never stamped them. The keys themselves are
/// required; a snapshot missing either timestamp field is malformed.
mod serde_time {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(v: &Option<DateTime<Utc>>, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match v {
            Some(t) => s.serialize_str(&t.to_rfc3339_opts(SecondsFormat::Micros, true)),
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(d: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let opt: Option<String> = Option::deserialize(d)?;
        match opt {
            None => Ok(None),
            Some(raw) => {
                let parsed =
                    DateTime::parse_from_rfc3339(&raw).map_err(serde::de::Error::custom)?;
                Ok(Some(parsed.with_timezone(&Utc)))
            }
        }
    }
}

/// Structural snapshot of a [`TelemetryRecord`], read-only once produced.
///
/// Used to transmit telemetry out of a process, e.g. from a parallel worker
/// to its coordinator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TelemetrySnapshot {
    pub files: Vec<String>,
    pub passes: u64,
    pub failures: u64,
    pub skips: u64,
    pub assertions: u64,
    pub errors: u64,
    #[serde(with = "serde_time")]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(with = "serde_time")]
    pub stop_time: Option<DateTime<Utc>>,
}

impl TelemetrySnapshot {
    /// Encode as wire text.
    pub fn to_json(&self) -> TelemetryResult<String> {
        serde_json::to_string(self).map_err(|e| TelemetryError::MalformedSnapshot {
            reason: e.to_string(),
        })
    }

    /// Decode from wire text. Fails on a missing field, a non-numeric
    /// counter, or an unparsable timestamp; nothing is defaulted.
    pub fn from_json(raw: &str) -> TelemetryResult<Self> {
        serde_json::from_str(raw).map_err(|e| TelemetryError::MalformedSnapshot {
            reason: e.to_string(),
        })
    }
}

impl From<&TelemetryRecord> for TelemetrySnapshot {
    fn from(record: &TelemetryRecord) -> Self {
        Self {
            files: record.files.clone(),
            passes: record.passes,
            failures: record.failures,
            skips: record.skips,
            assertions: record.assertions,
            errors: record.errors,
            start_time: record.start_time,
            stop_time: record.stop_time,
        }
    }
}

impl From<TelemetrySnapshot> for TelemetryRecord {
    fn from(snapshot: TelemetrySnapshot) -> Self {
        Self {
            files: snapshot.files,
            passes: snapshot.passes,
            failures: snapshot.failures,
            skips: snapshot.skips,
            assertions: snapshot.assertions,
            errors: snapshot.errors,
            start_time: snapshot.start_time,
            stop_time: snapshot.stop_time,
        }
    }
}

impl TelemetryRecord {
    /// Structural snapshot for transmission out of the process. The record
    /// is conventionally treated as closed once snapshotted.
    pub fn snapshot(&self) -> TelemetrySnapshot {
        TelemetrySnapshot::from(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 1, 11, 11, 0).unwrap() + chrono::Duration::microseconds(11)
    }

    #[test]
    fn timestamps_render_at_microsecond_precision() {
        let mut record = TelemetryRecord::new();
        record.set_start_time(t0());

        let json = record.snapshot().to_json().unwrap();
        let v: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(
            v["start_time"].as_str(),
            Some("2026-01-01T11:11:00.000011Z")
        );
        assert!(v["stop_time"].is_null());
    }

    #[test]
    fn unset_timestamp_keys_are_still_present_in_wire_text() {
        let json = TelemetryRecord::new().snapshot().to_json().unwrap();
        let v: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(v.get("start_time").is_some());
        assert!(v.get("stop_time").is_some());
    }

    #[test]
    fn snapshot_round_trips_through_the_record() {
        let record = TelemetryRecord {
            files: vec!["a.rs".into(), "b.rs".into()],
            passes: 2,
            failures: 1,
            skips: 3,
            assertions: 11,
            errors: 1,
            start_time: Some(t0()),
            stop_time: Some(t0() + chrono::Duration::milliseconds(61_111)),
        };
        assert_eq!(TelemetryRecord::from(record.snapshot()), record);
    }

    #[test]
    fn decode_rejects_missing_counter_field() {
        // No "errors" key: must fail rather than default to zero.
        let raw = r#"{
            "files": ["a.rs"],
            "passes": 1,
            "failures": 1,
            "skips": 1,
            "assertions": 11,
            "start_time": "2026-01-01T11:11:00.000011Z",
            "stop_time": "2026-01-01T11:12:01.111011Z"
        }"#;
        let err = TelemetrySnapshot::from_json(raw).unwrap_err();
        assert!(err.is_malformed_snapshot());
    }

    #[test]
    fn decode_rejects_non_numeric_counter() {
        let raw = r#"{
            "files": [],
            "passes": "one",
            "failures": 0,
            "skips": 0,
            "assertions": 0,
            "errors": 0,
            "start_time": null,
            "stop_time": null
        }"#;
        assert!(TelemetrySnapshot::from_json(raw).is_err());
    }

    #[test]
    fn decode_rejects_negative_counter() {
        let raw = r#"{
            "files": [],
            "passes": -1,
            "failures": 0,
            "skips": 0,
            "assertions": 0,
            "errors": 0,
            "start_time": null,
            "stop_time": null
        }"#;
        assert!(TelemetrySnapshot::from_json(raw).is_err());
    }

    #[test]
    fn decode_rejects_unparsable_timestamp() {
        let raw = r#"{
            "files": [],
            "passes": 0,
            "failures": 0,
            "skips": 0,
            "assertions": 0,
            "errors": 0,
            "start_time": "eleven past eleven",
            "stop_time": null
        }"#;
        let err = TelemetrySnapshot::from_json(raw).unwrap_err();
        assert!(err.is_malformed_snapshot());
    }

    #[test]
    fn decode_rejects_missing_timestamp_key() {
        let raw = r#"{
            "files": [],
            "passes": 0,
            "failures": 0,
            "skips": 0,
            "assertions": 0,
            "errors": 0,
            "start_time": null
        }"#;
        assert!(TelemetrySnapshot::from_json(raw).is_err());
    }
}
