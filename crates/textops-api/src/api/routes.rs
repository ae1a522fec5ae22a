//! Router definition

use axum::{
  Router,
  extract::DefaultBodyLimit,
  routing::{get, post},
};

use super::access_log::access_log_layer;
use super::handlers::{
  health_check, method_not_allowed, not_found, post_keywords, post_sentiment, post_summarize,
};
use super::state::AppState;
use crate::config::MAX_BODY_BYTES;
use crate::errors::ApiError;
use crate::service::OperationKey;

/// Create API router
///
/// # Arguments
/// * `state` - Application state
///
/// # Returns
/// Configured Router
pub fn create_router(state: AppState) -> Router {
  Router::new()
    .route("/health", get(health_check))
    .route(OperationKey::Summarize.route(), post(post_summarize))
    .route(OperationKey::Keywords.route(), post(post_keywords))
    .route(OperationKey::Sentiment.route(), post(post_sentiment))
    .fallback(not_found)
    .method_not_allowed_fallback(method_not_allowed)
    .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
    .layer(access_log_layer())
    .with_state(state)
}

/// Start server
///
/// # Arguments
/// * `state` - Application state
///
/// # Errors
/// Returns error if server startup fails
pub async fn run_server(state: AppState) -> crate::errors::Result<()> {
  let addr = state.config.bind_addr.clone();
  let listener = tokio::net::TcpListener::bind(&addr)
    .await
    .map_err(|e| ApiError::config(format!("failed to bind {addr}: {e}")))?;

  tracing::info!("listening on http://{}", addr);

  let router = create_router(state);

  axum::serve(listener, router)
    .with_graceful_shutdown(shutdown_signal())
    .await
    .map_err(|e| ApiError::internal(format!("server error: {e}")))?;

  tracing::info!("server stopped");
  Ok(())
}

async fn shutdown_signal() {
  if let Err(e) = tokio::signal::ctrl_c().await {
    tracing::error!(error = %e, "failed to listen for shutdown signal");
    std::future::pending::<()>().await;
  }
  tracing::info!("shutdown signal received");
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::config::Config;
  use crate::service::OperationRegistry;

  fn create_test_state() -> AppState {
    let config = Config {
      bind_addr: "127.0.0.1:0".to_string(),
      ..Config::default()
    };
    AppState::new(config, OperationRegistry::builtin())
  }

  #[test]
  fn test_router_creation() {
    let state = create_test_state();
    let _router = create_router(state);
  }
}
