//! API State Definition

use std::sync::Arc;

use crate::config::Config;
use crate::service::{CredentialCheck, OperationRegistry, RequestPipeline};

/// Application State
///
/// State shared across the entire server.
/// Contains configuration and the request pipeline.
#[derive(Clone)]
pub struct AppState {
  /// Configuration
  pub config: Config,
  /// Request pipeline
  ///
  /// - Production: built-in operations and the configured API keys
  /// - Test: stub operations injected through [`OperationRegistry::with_operation`]
  pub pipeline: Arc<RequestPipeline>,
}

impl AppState {
  /// Creates a new AppState
  #[must_use]
  pub fn new(config: Config, registry: OperationRegistry) -> Self {
    let pipeline = Arc::new(RequestPipeline::new(&config, registry));
    Self { config, pipeline }
  }

  /// Creates a new AppState with a custom credential check
  #[must_use]
  pub fn with_credentials(
    config: Config,
    registry: OperationRegistry,
    credentials: Arc<dyn CredentialCheck>,
  ) -> Self {
    let pipeline = Arc::new(RequestPipeline::with_credentials(&config, registry, credentials));
    Self { config, pipeline }
  }
}
