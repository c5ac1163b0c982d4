//! Result envelope returned by `/process`

use chrono::Utc;
use rand::Rng;
use serde::Serialize;
use serde_json::{Map, Value};

pub const STATUS_COMPLETED: &str = "completed";

#[derive(Debug, Clone, Serialize)]
pub struct ResultEnvelope {
    pub original_data: Value,
    pub processed_by: String,
    /// Seconds since the Unix epoch, with sub-second precision.
    pub timestamp: f64,
    pub processing_duration_ms: u64,
    pub status: &'static str,
    pub results: AnalysisScores,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct AnalysisScores {
    pub analysis: f64,
    pub confidence: f64,
}

impl AnalysisScores {
    /// Two independent draws from `[0, 1)`.
    pub fn random() -> Self {
        let mut rng = rand::thread_rng();
        Self {
            analysis: rng.gen::<f64>(),
            confidence: rng.gen::<f64>(),
        }
    }
}

impl ResultEnvelope {
    pub fn new(original_data: Value, processed_by: String, processing_duration_ms: u64) -> Self {
        Self {
            original_data,
            processed_by,
            timestamp: unix_seconds_now(),
            processing_duration_ms,
            status: STATUS_COMPLETED,
            results: AnalysisScores::random(),
        }
    }
}

/// Parses a request body, treating empty or malformed input as `{}`.
pub fn parse_payload(body: &[u8]) -> Value {
    serde_json::from_slice::<Value>(body).unwrap_or_else(|_| Value::Object(Map::new()))
}

fn unix_seconds_now() -> f64 {
    Utc::now().timestamp_micros() as f64 / 1_000_000.0
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn payload_passes_through_any_json() {
        assert_eq!(parse_payload(br#"{"a":1}"#), json!({"a": 1}));
        assert_eq!(parse_payload(b"[1,2,3]"), json!([1, 2, 3]));
        assert_eq!(parse_payload(b"\"text\""), json!("text"));
        assert_eq!(parse_payload(b"42"), json!(42));
        assert_eq!(parse_payload(b"false"), json!(false));
        assert_eq!(parse_payload(b"null"), Value::Null);
    }

    #[test]
    fn missing_or_broken_payload_becomes_empty_object() {
        assert_eq!(parse_payload(b""), json!({}));
        assert_eq!(parse_payload(b"{not json"), json!({}));
    }

    #[test]
    fn scores_stay_in_unit_interval() {
        for _ in 0..1_000 {
            let scores = AnalysisScores::random();
            assert!((0.0..1.0).contains(&scores.analysis));
            assert!((0.0..1.0).contains(&scores.confidence));
        }
    }

    #[test]
    fn envelope_carries_configured_metadata() {
        let before = unix_seconds_now();
        let envelope = ResultEnvelope::new(json!({"k": "v"}), "node-a".to_string(), 250);
        let after = unix_seconds_now();

        assert_eq!(envelope.original_data, json!({"k": "v"}));
        assert_eq!(envelope.processed_by, "node-a");
        assert_eq!(envelope.processing_duration_ms, 250);
        assert_eq!(envelope.status, "completed");
        assert!(envelope.timestamp >= before && envelope.timestamp <= after);
    }

    #[test]
    fn envelope_serializes_every_field() {
        let envelope = ResultEnvelope::new(json!([]), "unknown".to_string(), 0);
        let value = serde_json::to_value(&envelope).expect("serialize envelope");

        for key in [
            "original_data",
            "processed_by",
            "timestamp",
            "processing_duration_ms",
            "status",
        ] {
            assert!(value.get(key).is_some(), "missing {key}");
        }
        assert!(value["results"]["analysis"].is_f64());
        assert!(value["results"]["confidence"].is_f64());
    }
}
