//! Access logging
//!
//! One `info` line per inbound call with method, path, status and latency,
//! whatever the route or outcome. Built on `tower-http`'s `TraceLayer`: the
//! span carries method and path, the response hook adds status and latency.

use std::time::Duration;

use axum::http::{Request, Response};
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{
  DefaultOnBodyChunk, DefaultOnEos, DefaultOnRequest, MakeSpan, OnResponse, TraceLayer,
};
use tracing::{Span, info, info_span};

/// Span maker and response hook of the access log
#[derive(Debug, Clone, Copy, Default)]
pub struct AccessLog;

impl<B> MakeSpan<B> for AccessLog {
  fn make_span(&mut self, request: &Request<B>) -> Span {
    info_span!(
      "http_request",
      method = %request.method(),
      path = %request.uri().path(),
    )
  }
}

impl<B> OnResponse<B> for AccessLog {
  fn on_response(self, response: &Response<B>, latency: Duration, _span: &Span) {
    info!(
      status = response.status().as_u16(),
      latency_ms = latency.as_millis() as u64,
      "request served"
    );
  }
}

/// Access log layer type
pub type AccessLogLayer = TraceLayer<
  SharedClassifier<ServerErrorsAsFailures>,
  AccessLog,
  DefaultOnRequest,
  AccessLog,
  DefaultOnBodyChunk,
  DefaultOnEos,
  (),
>;

/// Creates the access log layer
///
/// Failures are not logged a second time here; the pipeline already logs
/// them with the request identifier.
#[must_use]
pub fn access_log_layer() -> AccessLogLayer {
  TraceLayer::new_for_http()
    .make_span_with(AccessLog)
    .on_response(AccessLog)
    .on_failure(())
}

#[cfg(test)]
mod tests {
  use axum::body::Body;
  use axum::http::StatusCode;

  use super::*;

  #[test]
  fn make_span_accepts_any_body() {
    let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
    let _span = AccessLog.make_span(&request);
  }

  #[test]
  fn on_response_accepts_any_status() {
    let response = Response::builder().status(StatusCode::NOT_FOUND).body(Body::empty()).unwrap();
    AccessLog.on_response(&response, Duration::from_millis(3), &Span::none());
  }
}
