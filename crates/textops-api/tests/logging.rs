//! Log line tests
//!
//! Installs a thread-local `fmt` subscriber writing into a shared buffer and
//! checks the access log and pipeline lines emitted while the router serves
//! a call. Tests run on the current-thread runtime so every event of the call
//! reaches the scoped subscriber.

use std::io;
use std::sync::{Arc, Mutex};

use axum::{
  Router,
  body::Body,
  http::{Request, StatusCode},
};
use serde_json::{Value, json};
use tower::ServiceExt;
use tracing::subscriber::DefaultGuard;
use tracing_subscriber::fmt::MakeWriter;
use uuid::Uuid;

use textops_api::{
  api::{AppState, create_router},
  config::Config,
  service::OperationRegistry,
};

const VALID_API_KEY: &str = "test-api-key";

/// Shared in-memory log sink
#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
  fn install(&self) -> DefaultGuard {
    let subscriber = tracing_subscriber::fmt()
      .with_writer(self.clone())
      .with_ansi(false)
      .with_max_level(tracing::Level::INFO)
      .finish();
    tracing::subscriber::set_default(subscriber)
  }

  fn lines(&self) -> Vec<String> {
    let bytes = self.0.lock().unwrap().clone();
    String::from_utf8(bytes).unwrap().lines().map(str::to_string).collect()
  }

  /// Lines whose message is `message`
  fn matching(&self, message: &str) -> Vec<String> {
    self.lines().into_iter().filter(|line| line.contains(message)).collect()
  }
}

impl io::Write for CapturedLogs {
  fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
    self.0.lock().unwrap().extend_from_slice(buf);
    Ok(buf.len())
  }

  fn flush(&mut self) -> io::Result<()> {
    Ok(())
  }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
  type Writer = Self;

  fn make_writer(&'a self) -> Self::Writer {
    self.clone()
  }
}

fn test_app() -> Router {
  let config = Config {
    bind_addr: "127.0.0.1:0".to_string(),
    ..Config::default()
  };
  create_router(AppState::new(config, OperationRegistry::builtin()))
}

fn post(uri: &str, body: &Value) -> Request<Body> {
  Request::builder()
    .method("POST")
    .uri(uri)
    .header("content-type", "application/json")
    .header("x-api-key", VALID_API_KEY)
    .body(Body::from(body.to_string()))
    .unwrap()
}

async fn send(request: Request<Body>) -> (StatusCode, Value) {
  let response = test_app().oneshot(request).await.expect("request should succeed");
  let status = response.status();
  let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.expect("read body");
  (status, serde_json::from_slice(&bytes).expect("json body"))
}

#[tokio::test]
async fn served_call_logs_access_line_once() {
  let logs = CapturedLogs::default();
  let _guard = logs.install();

  let body = json!({ "requestId": Uuid::new_v4().to_string(), "text": "A.B.C." });
  let (status, _) = send(post("/v1/summarize", &body)).await;
  assert_eq!(status, StatusCode::OK);

  let served = logs.matching("request served");
  assert_eq!(served.len(), 1, "logs: {:#?}", logs.lines());
  let line = &served[0];
  assert!(line.contains("status=200"), "{line}");
  assert!(line.contains("latency_ms="), "{line}");
  assert!(line.contains("method=POST"), "{line}");
  assert!(line.contains("path=/v1/summarize"), "{line}");
}

#[tokio::test]
async fn pipeline_lines_carry_request_id() {
  let logs = CapturedLogs::default();
  let _guard = logs.install();

  let request_id = Uuid::new_v4().to_string();
  let body = json!({ "requestId": request_id, "text": "héllo", "options": {} });
  let (status, _) = send(post("/v1/sentiment", &body)).await;
  assert_eq!(status, StatusCode::OK);

  let started = logs.matching("processing request");
  assert_eq!(started.len(), 1, "logs: {:#?}", logs.lines());
  assert!(started[0].contains(&format!("request_id={request_id}")), "{}", started[0]);
  // UTF-8 byte length, not characters
  assert!(started[0].contains("text_bytes=6"), "{}", started[0]);

  let completed = logs.matching("request completed");
  assert_eq!(completed.len(), 1, "logs: {:#?}", logs.lines());
  assert!(completed[0].contains(&format!("request_id={request_id}")), "{}", completed[0]);
  assert!(completed[0].contains("duration_ms="), "{}", completed[0]);
}

#[tokio::test]
async fn substituted_request_id_is_logged() {
  let logs = CapturedLogs::default();
  let _guard = logs.install();

  let body = json!({ "requestId": "not-a-uuid", "text": "text" });
  let (status, json) = send(post("/v1/keywords", &body)).await;
  assert_eq!(status, StatusCode::BAD_REQUEST);

  let returned = json["requestId"].as_str().expect("requestId present");
  let rejected = logs.matching("request rejected");
  assert_eq!(rejected.len(), 1, "logs: {:#?}", logs.lines());
  assert!(rejected[0].contains(&format!("request_id={returned}")), "{}", rejected[0]);
  assert!(rejected[0].contains("substituted=true"), "{}", rejected[0]);

  let served = logs.matching("request served");
  assert!(served[0].contains("status=400"), "{}", served[0]);
}

#[tokio::test]
async fn routing_failures_are_logged_with_returned_id() {
  let logs = CapturedLogs::default();
  let _guard = logs.install();

  let unknown = Request::builder().method("POST").uri("/v2/translate").body(Body::empty()).unwrap();
  let (status, not_found) = send(unknown).await;
  assert_eq!(status, StatusCode::NOT_FOUND);

  let wrong_method = Request::builder().method("GET").uri("/v1/summarize").body(Body::empty()).unwrap();
  let (status, not_allowed) = send(wrong_method).await;
  assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);

  let rejected = logs.matching("request rejected");
  assert_eq!(rejected.len(), 2, "logs: {:#?}", logs.lines());
  for (line, json) in rejected.iter().zip([&not_found, &not_allowed]) {
    let returned = json["requestId"].as_str().expect("requestId present");
    assert!(line.contains(&format!("request_id={returned}")), "{line}");
  }
  assert!(rejected[0].contains("/v2/translate"), "{}", rejected[0]);
}

#[tokio::test]
async fn malformed_body_is_logged() {
  let logs = CapturedLogs::default();
  let _guard = logs.install();

  let request = Request::builder()
    .method("POST")
    .uri("/v1/summarize")
    .header("x-api-key", VALID_API_KEY)
    .body(Body::from("{ invalid json"))
    .unwrap();
  let (status, json) = send(request).await;
  assert_eq!(status, StatusCode::BAD_REQUEST);

  let returned = json["requestId"].as_str().expect("requestId present");
  let rejected = logs.matching("request rejected");
  assert_eq!(rejected.len(), 1, "logs: {:#?}", logs.lines());
  assert!(rejected[0].contains(&format!("request_id={returned}")), "{}", rejected[0]);
}
