//! Response envelopes
//!
//! Both envelopes always serialize every field. A success envelope is only
//! built once the handler has returned; every other path builds an
//! [`ErrorEnvelope`].

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

use crate::errors::ApiError;

/// Operation specific result object
pub type ResultMap = Map<String, JsonValue>;

/// Success envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolResponse {
  /// Echoed request identifier
  pub request_id: String,
  /// Display name of the operation (e.g. "Summarize")
  pub tool: String,
  /// Wall-clock milliseconds from pipeline entry to response construction
  pub duration_ms: u64,
  /// Operation result
  pub result: ResultMap,
}

impl ToolResponse {
  /// Builds the success envelope
  #[must_use]
  pub fn new(request_id: impl Into<String>, tool: &str, duration_ms: u64, result: ResultMap) -> Self {
    Self {
      request_id: request_id.into(),
      tool: tool.to_string(),
      duration_ms,
      result,
    }
  }
}

/// Error envelope
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorEnvelope {
  /// Request identifier (validated or substituted)
  pub request_id: String,
  /// Error body
  pub error: ErrorBody,
}

/// Error body of the error envelope
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
  /// HTTP status code as a string (e.g. "413")
  pub code: String,
  /// Generic human readable description
  pub message: String,
}

impl ErrorEnvelope {
  /// Builds the error envelope from an [`ApiError`]
  ///
  /// Only the public message is used; the error's detail stays server side.
  #[must_use]
  pub fn from_error(request_id: impl Into<String>, error: &ApiError) -> Self {
    Self {
      request_id: request_id.into(),
      error: ErrorBody {
        code: error.code().to_string(),
        message: error.public_message(),
      },
    }
  }
}

/// Health check response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
  /// Always "healthy"
  pub status: String,
  /// ISO-8601 UTC timestamp
  pub timestamp: String,
}

impl HealthResponse {
  /// Healthy response stamped with the current time
  #[must_use]
  pub fn healthy() -> Self {
    Self {
      status: "healthy".to_string(),
      timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    }
  }
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  #[test]
  fn tool_response_serialization() {
    let mut result = ResultMap::new();
    result.insert("summary".to_string(), json!("A."));
    let response = ToolResponse::new("abc", "Summarize", 7, result);

    let json = serde_json::to_value(&response).unwrap();
    assert_eq!(
      json,
      json!({
        "requestId": "abc",
        "tool": "Summarize",
        "durationMs": 7,
        "result": { "summary": "A." }
      })
    );
  }

  #[test]
  fn error_envelope_echoes_request_id() {
    let envelope = ErrorEnvelope::from_error("abc", &ApiError::Unauthorized);
    let json = serde_json::to_value(&envelope).unwrap();
    assert_eq!(
      json,
      json!({
        "requestId": "abc",
        "error": { "code": "401", "message": "Invalid or missing API key" }
      })
    );
  }

  #[test]
  fn error_envelope_hides_internal_detail() {
    let envelope = ErrorEnvelope::from_error("abc", &ApiError::internal("boom"));
    assert_eq!(envelope.error.code, "500");
    assert!(!envelope.error.message.contains("boom"));
  }

  #[test]
  fn health_timestamp_is_utc_iso8601() {
    let health = HealthResponse::healthy();
    assert_eq!(health.status, "healthy");
    assert!(health.timestamp.ends_with('Z'));
    assert!(chrono::DateTime::parse_from_rfc3339(&health.timestamp).is_ok());
  }
}
