//! Normalized outcome type for remote lookups.
//!
//! Every MotorAPI call terminates in a [`LookupResult`] value - either the
//! remote payload passed through verbatim, or a structured failure. Callers
//! distinguish the two by the presence of the `error` key in the serialized
//! form, not by a separate status channel.

use serde::Serialize;

/// The outcome of one remote lookup.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum LookupResult {
    /// JSON payload returned by the remote API, unmodified.
    Payload(serde_json::Value),

    /// Normalized failure; serializes as `{"error": "..."}`.
    Failure(LookupFailure),
}

/// Structured failure value carried by [`LookupResult::Failure`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LookupFailure {
    /// Human-readable failure message.
    pub error: String,
}

impl LookupResult {
    /// Wrap a remote payload.
    pub fn payload(value: serde_json::Value) -> Self {
        Self::Payload(value)
    }

    /// Create a failure with the given message.
    pub fn failure(message: impl Into<String>) -> Self {
        Self::Failure(LookupFailure {
            error: message.into(),
        })
    }

    /// Whether this result is a failure.
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_payload_serializes_verbatim() {
        let result = LookupResult::payload(json!({"registration": "AB12345", "make": "Toyota"}));
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value, json!({"registration": "AB12345", "make": "Toyota"}));
    }

    #[test]
    fn test_failure_serializes_as_error_object() {
        let result = LookupResult::failure("Vehicle not found: XX00000");
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value, json!({"error": "Vehicle not found: XX00000"}));
    }

    #[test]
    fn test_is_failure() {
        assert!(LookupResult::failure("boom").is_failure());
        assert!(!LookupResult::payload(json!({})).is_failure());
    }

    #[test]
    fn test_non_ascii_preserved_in_pretty_output() {
        let result = LookupResult::payload(json!({"mærke": "Citroën"}));
        let text = serde_json::to_string_pretty(&result).unwrap();
        assert!(text.contains("mærke"));
        assert!(text.contains("Citroën"));
    }
}
