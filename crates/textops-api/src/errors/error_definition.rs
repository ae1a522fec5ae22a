//! API error definitions
//!
//! `Display` carries the full detail and is only ever logged. Callers see
//! [`ApiError::public_message`], a fixed text per kind.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::warn;
use uuid::Uuid;

use textops::{OptionsError, TextOpsError};

use crate::models::ErrorEnvelope;

/// Error kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
  /// Malformed request envelope (requestId, options, body shape)
  Validation,
  /// Text exceeds the byte limit
  PayloadTooLarge,
  /// Missing or unknown API key
  Unauthorized,
  /// Unmatched route
  NotFound,
  /// Route exists but not for this method
  MethodNotAllowed,
  /// Handler fault, timeout or routing bug
  Internal,
  /// Configuration error
  Config,
}

impl ApiErrorKind {
  /// Get HTTP status code
  #[must_use]
  pub fn status(&self) -> StatusCode {
    match self {
      Self::Validation => StatusCode::BAD_REQUEST,
      Self::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
      Self::Unauthorized => StatusCode::UNAUTHORIZED,
      Self::NotFound => StatusCode::NOT_FOUND,
      Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
      Self::Internal | Self::Config => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  /// Get error code (the decimal HTTP status, e.g. `"401"`)
  #[must_use]
  pub fn code(&self) -> &'static str {
    match self {
      Self::Validation => "400",
      Self::PayloadTooLarge => "413",
      Self::Unauthorized => "401",
      Self::NotFound => "404",
      Self::MethodNotAllowed => "405",
      Self::Internal | Self::Config => "500",
    }
  }
}

/// API Error
#[derive(Debug, Error)]
pub enum ApiError {
  /// A request field is malformed
  #[error("validation failed on `{field}`: {detail}")]
  Validation {
    /// Offending field (`requestId`, `text`, `options` or `body`)
    field: &'static str,
    /// Detail for the server log
    detail: String,
  },

  /// Text exceeds the byte limit
  #[error("text size {size} exceeds maximum {limit}")]
  PayloadTooLarge {
    /// UTF-8 byte length of the text
    size: usize,
    /// Effective limit
    limit: usize,
  },

  /// Raw body exceeds the transport ceiling before the text could be read
  #[error("request body exceeds maximum {limit} bytes")]
  BodyTooLarge {
    /// Transport body ceiling
    limit: usize,
  },

  /// Missing or unknown API key
  #[error("invalid or missing API key")]
  Unauthorized,

  /// Unmatched route
  #[error("no route for {path}")]
  NotFound {
    /// Requested path
    path: String,
  },

  /// Method not allowed on an existing route
  #[error("method not allowed")]
  MethodNotAllowed,

  /// Internal error
  #[error("internal error: {0}")]
  Internal(String),

  /// Configuration error
  #[error("config error: {0}")]
  Config(String),
}

impl ApiError {
  /// Get error kind
  #[must_use]
  pub fn kind(&self) -> ApiErrorKind {
    match self {
      Self::Validation { .. } => ApiErrorKind::Validation,
      Self::PayloadTooLarge { .. } | Self::BodyTooLarge { .. } => ApiErrorKind::PayloadTooLarge,
      Self::Unauthorized => ApiErrorKind::Unauthorized,
      Self::NotFound { .. } => ApiErrorKind::NotFound,
      Self::MethodNotAllowed => ApiErrorKind::MethodNotAllowed,
      Self::Internal(_) => ApiErrorKind::Internal,
      Self::Config(_) => ApiErrorKind::Config,
    }
  }

  /// Get error code
  #[must_use]
  pub fn code(&self) -> &'static str {
    self.kind().code()
  }

  /// Get HTTP status code
  #[must_use]
  pub fn status(&self) -> StatusCode {
    self.kind().status()
  }

  /// Message returned to the caller
  ///
  /// Never contains handler or configuration detail.
  #[must_use]
  pub fn public_message(&self) -> String {
    match self {
      Self::Validation { field, .. } => format!("Invalid value for field '{field}'"),
      Self::PayloadTooLarge { size, limit } => {
        format!("Text size {size} exceeds maximum {limit}")
      }
      Self::BodyTooLarge { limit } => format!("Request body exceeds maximum {limit} bytes"),
      Self::Unauthorized => "Invalid or missing API key".to_string(),
      Self::NotFound { .. } => "Not found".to_string(),
      Self::MethodNotAllowed => "Method not allowed".to_string(),
      Self::Internal(_) | Self::Config(_) => "Processing failed".to_string(),
    }
  }

  /// Create validation error
  #[must_use]
  pub fn validation(field: &'static str, detail: impl Into<String>) -> Self {
    Self::Validation {
      field,
      detail: detail.into(),
    }
  }

  /// Create payload too large error
  #[must_use]
  pub fn payload_too_large(size: usize, limit: usize) -> Self {
    Self::PayloadTooLarge { size, limit }
  }

  /// Create not found error
  #[must_use]
  pub fn not_found(path: impl Into<String>) -> Self {
    Self::NotFound { path: path.into() }
  }

  /// Create internal error
  #[must_use]
  pub fn internal(message: impl Into<String>) -> Self {
    Self::Internal(message.into())
  }

  /// Create config error
  #[must_use]
  pub fn config(message: impl Into<String>) -> Self {
    Self::Config(message.into())
  }

  /// Attaches the request identifier echoed in the error envelope
  ///
  /// `None` substitutes a fresh v4 UUID right away, so the identifier that
  /// is logged is the one the caller receives.
  #[must_use]
  pub fn with_request_id(self, request_id: Option<String>) -> RequestFailure {
    let (request_id, substituted) = match request_id {
      Some(id) => (id, false),
      None => (Uuid::new_v4().to_string(), true),
    };
    RequestFailure {
      request_id,
      substituted,
      error: self,
    }
  }
}

/// Invalid option values are rejected at the boundary as a validation error
impl From<OptionsError> for ApiError {
  fn from(err: OptionsError) -> Self {
    ApiError::validation("options", err.to_string())
  }
}

impl From<TextOpsError> for ApiError {
  fn from(err: TextOpsError) -> Self {
    match err {
      TextOpsError::Options(err) => err.into(),
      // #[non_exhaustive]: variants added later are treated as handler faults
      other => ApiError::internal(other.to_string()),
    }
  }
}

/// An [`ApiError`] together with the request identifier of the call
///
/// The identifier is either the validated `requestId` or a fresh v4 UUID
/// substituted when none could be validated.
#[derive(Debug)]
pub struct RequestFailure {
  /// Request identifier echoed in the error envelope
  pub request_id: String,
  /// Whether `request_id` was generated instead of taken from the request
  pub substituted: bool,
  /// The error
  pub error: ApiError,
}

impl RequestFailure {
  /// Logs a rejected call (4xx) with full detail and the request identifier
  pub fn log_rejection(&self, context: &str) {
    warn!(
      context,
      request_id = %self.request_id,
      substituted = self.substituted,
      code = self.error.code(),
      error = %self.error,
      "request rejected"
    );
  }
}

impl IntoResponse for RequestFailure {
  fn into_response(self) -> Response {
    let status = self.error.status();
    let body = ErrorEnvelope::from_error(self.request_id, &self.error);
    (status, Json(body)).into_response()
  }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, ApiError>;
