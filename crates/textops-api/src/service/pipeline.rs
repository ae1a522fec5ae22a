//! Request pipeline
//!
//! validate envelope -> authenticate -> enforce size -> resolve operation ->
//! timed invocation -> response. Each step is a hard gate: the first failure
//! is returned and later steps never run.

use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::body::Bytes;
use tracing::{error, info};

use crate::config::{Config, INLINE_PARSE_BYTES};
use crate::errors::{ApiError, RequestFailure};
use crate::models::{ToolRequest, ToolResponse};

use super::auth::{ApiKeyAllowSet, CredentialCheck};
use super::registry::{OperationKey, OperationRegistry};
use super::validator::{enforce_size_limit, validate_envelope};

/// Per-request processing shared by all operation routes
///
/// Holds only data that is read-only after start, so calls run
/// concurrently without coordination.
#[derive(Clone)]
pub struct RequestPipeline {
  registry: Arc<OperationRegistry>,
  credentials: Arc<dyn CredentialCheck>,
  max_text_bytes: usize,
  handler_timeout: Option<Duration>,
}

impl RequestPipeline {
  /// Creates a pipeline using the configured API key allow-set
  #[must_use]
  pub fn new(config: &Config, registry: OperationRegistry) -> Self {
    Self::with_credentials(config, registry, Arc::new(ApiKeyAllowSet::from_config(config)))
  }

  /// Creates a pipeline with an arbitrary credential check
  #[must_use]
  pub fn with_credentials(
    config: &Config,
    registry: OperationRegistry,
    credentials: Arc<dyn CredentialCheck>,
  ) -> Self {
    Self {
      registry: Arc::new(registry),
      credentials,
      max_text_bytes: config.max_text_bytes,
      handler_timeout: config.handler_timeout,
    }
  }

  /// Processes one call to the route bound to `key`
  ///
  /// # Errors
  /// - 400 malformed envelope or invalid options
  /// - 413 text over the byte limit
  /// - 401 missing or unknown credential
  /// - 500 handler fault, handler timeout or missing binding
  pub async fn handle(
    &self,
    body: Bytes,
    key: OperationKey,
    credential: Option<&str>,
  ) -> Result<ToolResponse, RequestFailure> {
    let started = Instant::now();

    let result = self.run(body, key, credential, started).await;

    if let Err(failure) = &result
      && failure.error.kind().status().is_client_error()
    {
      failure.log_rejection(key.name());
    }

    result
  }

  /// Parses the envelope, moving large bodies off the async worker
  async fn parse(&self, body: Bytes) -> Result<ToolRequest, RequestFailure> {
    if body.len() <= INLINE_PARSE_BYTES {
      return validate_envelope(&body, self.max_text_bytes);
    }

    let limit = self.max_text_bytes;
    tokio::task::spawn_blocking(move || validate_envelope(&body, limit))
      .await
      .unwrap_or_else(|e| {
        let failure =
          ApiError::internal(format!("envelope parse task failed: {e}")).with_request_id(None);
        error!(
          request_id = %failure.request_id,
          substituted = failure.substituted,
          error = %failure.error,
          "request failed"
        );
        Err(failure)
      })
  }

  async fn run(
    &self,
    body: Bytes,
    key: OperationKey,
    credential: Option<&str>,
    started: Instant,
  ) -> Result<ToolResponse, RequestFailure> {
    let request = self.parse(body).await?;

    self
      .credentials
      .check(credential)
      .map_err(|e| e.with_request_id(Some(request.request_id.clone())))?;

    enforce_size_limit(&request, self.max_text_bytes)?;

    let operation = self
      .registry
      .resolve(key.name())
      .map_err(|e| self.internal_failure(key, &request.request_id, e))?;

    info!(
      operation = operation.name(),
      request_id = %request.request_id,
      text_bytes = request.text_bytes(),
      "processing request"
    );

    let ToolRequest {
      request_id,
      text,
      options,
    } = request;

    let invocation = operation.invoke(text, options);
    let outcome = match self.handler_timeout {
      Some(limit) => tokio::time::timeout(limit, invocation).await.unwrap_or_else(|_| {
        Err(ApiError::internal(format!(
          "handler exceeded {} ms",
          limit.as_millis()
        )))
      }),
      None => invocation.await,
    };

    let result = match outcome {
      Ok(result) => result,
      Err(err @ ApiError::Validation { .. }) => return Err(err.with_request_id(Some(request_id))),
      Err(err) => return Err(self.internal_failure(key, &request_id, err)),
    };

    let duration_ms = started.elapsed().as_millis() as u64;
    info!(
      operation = operation.name(),
      request_id = %request_id,
      duration_ms,
      "request completed"
    );

    Ok(ToolResponse::new(request_id, operation.tool(), duration_ms, result))
  }

  /// Logs the fault with full detail and replaces it with a generic 500
  fn internal_failure(&self, key: OperationKey, request_id: &str, err: ApiError) -> RequestFailure {
    error!(
      operation = key.name(),
      request_id = %request_id,
      error = %err,
      "request failed"
    );
    let err = match err {
      ApiError::Internal(_) => err,
      other => ApiError::internal(other.to_string()),
    };
    err.with_request_id(Some(request_id.to_string()))
  }
}
