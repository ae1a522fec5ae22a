//! textops-api server entry point

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use textops_api::ApiError;
use textops_api::api::{AppState, run_server};
use textops_api::config::Config;
use textops_api::service::OperationRegistry;

#[tokio::main]
async fn main() -> Result<(), ApiError> {
  // Logging
  tracing_subscriber::registry()
    .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .with(tracing_subscriber::fmt::layer())
    .init();

  // Configuration
  let config = Config::from_env()?;
  tracing::info!(
    bind_addr = %config.bind_addr,
    api_keys = config.api_keys.len(),
    max_text_bytes = config.max_text_bytes,
    handler_timeout_ms = config.handler_timeout.map(|d| d.as_millis() as u64),
    "configuration loaded"
  );

  let registry = OperationRegistry::builtin();
  tracing::info!(operations = ?registry.names().collect::<Vec<_>>(), "operations registered");

  let state = AppState::new(config, registry);

  run_server(state).await
}
