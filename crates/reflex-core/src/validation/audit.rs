//! Audit logging for accepted analysis attempts
//!
//! One event per accepted input, carrying a privacy-safe identifier and a
//! timestamp. Fire-and-forget: emitting the event never changes the outcome
//! returned to the caller.

use chrono::Utc;
use serde_json::{Map, Value};
use tracing::info;

/// Identifier logged for a sanitized record: its `id` field when present and
/// string-typed, otherwise a placeholder.
pub fn audit_identity(record: &Map<String, Value>) -> &str {
    record
        .get("id")
        .and_then(Value::as_str)
        .unwrap_or("anonymous")
}

/// Emit the audit event for an accepted, sanitized record.
pub fn log_analysis_attempt(record: &Map<String, Value>) {
    info!(
        user = audit_identity(record),
        timestamp = %Utc::now().to_rfc3339(),
        "analysis attempted"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn as_map(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn test_string_id_used() {
        let record = as_map(json!({ "id": "42", "name": "John" }));
        assert_eq!(audit_identity(&record), "42");
    }

    #[test]
    fn test_missing_id_falls_back_to_anonymous() {
        let record = as_map(json!({ "name": "John" }));
        assert_eq!(audit_identity(&record), "anonymous");
    }

    #[test]
    fn test_non_string_id_falls_back_to_anonymous() {
        let record = as_map(json!({ "id": 42 }));
        assert_eq!(audit_identity(&record), "anonymous");
    }
}
