//! API key check

use std::collections::HashSet;

use crate::config::Config;
use crate::errors::{ApiError, Result};

/// Accept/reject decision for a presented credential
///
/// The allow-set implementation can be swapped for an external identity
/// provider behind the same interface.
pub trait CredentialCheck: Send + Sync {
  /// Checks the credential taken from the API key header
  ///
  /// # Errors
  /// Returns [`ApiError::Unauthorized`] when the credential is missing,
  /// empty or unknown
  fn check(&self, credential: Option<&str>) -> Result<()>;
}

/// Static allow-set of API keys
#[derive(Debug, Clone, Default)]
pub struct ApiKeyAllowSet {
  keys: HashSet<String>,
}

impl ApiKeyAllowSet {
  /// Creates an allow-set; empty keys are never accepted
  #[must_use]
  pub fn new<I, K>(keys: I) -> Self
  where
    I: IntoIterator<Item = K>,
    K: Into<String>,
  {
    Self {
      keys: keys.into_iter().map(Into::<String>::into).filter(|k| !k.is_empty()).collect(),
    }
  }

  /// Builds the allow-set from the configured keys
  #[must_use]
  pub fn from_config(config: &Config) -> Self {
    Self::new(config.api_keys.iter().cloned())
  }

  /// Number of accepted keys
  #[must_use]
  pub fn len(&self) -> usize {
    self.keys.len()
  }

  /// Whether no key is accepted at all
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.keys.is_empty()
  }
}

impl CredentialCheck for ApiKeyAllowSet {
  fn check(&self, credential: Option<&str>) -> Result<()> {
    match credential {
      Some(key) if !key.is_empty() && self.keys.contains(key) => Ok(()),
      _ => Err(ApiError::Unauthorized),
    }
  }
}
