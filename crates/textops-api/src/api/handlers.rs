//! HTTP handler definitions

use axum::{
  Json,
  body::Bytes,
  extract::{State, rejection::BytesRejection},
  http::{HeaderMap, StatusCode, Uri},
};
use tracing::debug;

use crate::config::{API_KEY_HEADER, MAX_BODY_BYTES};
use crate::errors::{ApiError, RequestFailure};
use crate::models::{HealthResponse, ToolResponse};
use crate::service::OperationKey;

use super::state::AppState;

/// Handler result: success envelope or error envelope
pub type OperationResult = Result<Json<ToolResponse>, RequestFailure>;

/// POST /v1/summarize endpoint
///
/// # Request Body
/// ```json
/// { "requestId": "<uuid>", "text": "First. Second.", "options": { "maxSentences": 1 } }
/// ```
///
/// # Response
/// - 200 OK: `{ requestId, tool: "Summarize", durationMs, result: { summary } }`
/// - 400 / 401 / 413 / 500: error envelope
pub async fn post_summarize(
  State(state): State<AppState>,
  headers: HeaderMap,
  body: Result<Bytes, BytesRejection>,
) -> OperationResult {
  run_operation(&state, OperationKey::Summarize, &headers, body).await
}

/// POST /v1/keywords endpoint
///
/// Options: `topN` (default 10). Result: `{ keywords: [{ term, score }] }`.
pub async fn post_keywords(
  State(state): State<AppState>,
  headers: HeaderMap,
  body: Result<Bytes, BytesRejection>,
) -> OperationResult {
  run_operation(&state, OperationKey::Keywords, &headers, body).await
}

/// POST /v1/sentiment endpoint
///
/// No options. Result: `{ label: "positive" | "negative" | "neutral" }`.
pub async fn post_sentiment(
  State(state): State<AppState>,
  headers: HeaderMap,
  body: Result<Bytes, BytesRejection>,
) -> OperationResult {
  run_operation(&state, OperationKey::Sentiment, &headers, body).await
}

async fn run_operation(
  state: &AppState,
  key: OperationKey,
  headers: &HeaderMap,
  body: Result<Bytes, BytesRejection>,
) -> OperationResult {
  let body = body.map_err(|rejection| body_failure(key, &rejection))?;
  debug!(operation = key.name(), body_bytes = body.len(), "request received");

  let credential = headers.get(API_KEY_HEADER).and_then(|v| v.to_str().ok());

  let response = state.pipeline.handle(body, key, credential).await?;
  Ok(Json(response))
}

/// Maps a body read failure to the error envelope
fn body_failure(key: OperationKey, rejection: &BytesRejection) -> RequestFailure {
  let error = if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
    ApiError::BodyTooLarge {
      limit: MAX_BODY_BYTES,
    }
  } else {
    ApiError::validation("body", rejection.body_text())
  };
  let failure = error.with_request_id(None);
  failure.log_rejection(key.name());
  failure
}

/// Health check endpoint
///
/// Never requires an API key.
pub async fn health_check() -> Json<HealthResponse> {
  Json(HealthResponse::healthy())
}

/// Fallback for unmatched routes
pub async fn not_found(uri: Uri) -> RequestFailure {
  let failure = ApiError::not_found(uri.path()).with_request_id(None);
  failure.log_rejection("routing");
  failure
}

/// Fallback for known routes called with the wrong method
pub async fn method_not_allowed() -> RequestFailure {
  let failure = ApiError::MethodNotAllowed.with_request_id(None);
  failure.log_rejection("routing");
  failure
}
