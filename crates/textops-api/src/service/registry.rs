//! Operation registry
//!
//! Binds each operation key to its handler. The registry is built once
//! before the server starts and is only read afterwards.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value as JsonValue;
use tracing::error;

use textops::{
  KeywordOptions, OptionsBag, SummarizeOptions, analyze_sentiment, extract_keywords, summarize,
};

use crate::errors::{ApiError, Result};
use crate::models::ResultMap;

/// Operation served by a fixed route
///
/// Route, registry name and display name are bound together per operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKey {
  /// `POST /v1/summarize`, tool "Summarize"
  Summarize,
  /// `POST /v1/keywords`, tool "ExtractKeywords"
  Keywords,
  /// `POST /v1/sentiment`, tool "Sentiment"
  Sentiment,
}

impl OperationKey {
  /// All operation keys
  pub const ALL: [OperationKey; 3] = [Self::Summarize, Self::Keywords, Self::Sentiment];

  /// Registry name used in logs and errors
  #[must_use]
  pub fn name(&self) -> &'static str {
    match self {
      Self::Summarize => "summarize",
      Self::Keywords => "keywords",
      Self::Sentiment => "sentiment",
    }
  }

  /// Display name returned as `tool`
  #[must_use]
  pub fn tool(&self) -> &'static str {
    match self {
      Self::Summarize => "Summarize",
      Self::Keywords => "ExtractKeywords",
      Self::Sentiment => "Sentiment",
    }
  }

  /// Route path
  #[must_use]
  pub fn route(&self) -> &'static str {
    match self {
      Self::Summarize => "/v1/summarize",
      Self::Keywords => "/v1/keywords",
      Self::Sentiment => "/v1/sentiment",
    }
  }
}

/// A registered text operation
///
/// Handlers must not keep state between calls. Any error other than
/// [`ApiError::Validation`] is reported to the caller as a generic 500.
#[async_trait]
pub trait Operation: Send + Sync {
  /// Registry name (e.g. "summarize")
  fn name(&self) -> &'static str;

  /// Display name (e.g. "Summarize")
  fn tool(&self) -> &'static str;

  /// Runs the operation
  ///
  /// # Errors
  /// - Invalid options (validation error)
  /// - Any internal fault
  async fn invoke(&self, text: String, options: OptionsBag) -> Result<ResultMap>;
}

type RunFn = fn(&str, &OptionsBag) -> Result<ResultMap>;

/// Operation backed by one of the synchronous `textops` functions
///
/// The computation is CPU bound, so it runs on the blocking pool to keep the
/// async runtime free for other requests.
#[derive(Clone, Copy)]
pub struct BuiltinOperation {
  key: OperationKey,
  run: RunFn,
}

impl BuiltinOperation {
  /// Built-in operation for `key`
  #[must_use]
  pub fn for_key(key: OperationKey) -> Self {
    let run: RunFn = match key {
      OperationKey::Summarize => run_summarize,
      OperationKey::Keywords => run_keywords,
      OperationKey::Sentiment => run_sentiment,
    };
    Self { key, run }
  }
}

#[async_trait]
impl Operation for BuiltinOperation {
  fn name(&self) -> &'static str {
    self.key.name()
  }

  fn tool(&self) -> &'static str {
    self.key.tool()
  }

  async fn invoke(&self, text: String, options: OptionsBag) -> Result<ResultMap> {
    let run = self.run;
    let name = self.name();

    tokio::task::spawn_blocking(move || run(&text, &options)).await.map_err(|e| {
      error!(operation = name, error = %e, "blocking task failed");
      ApiError::internal(format!("{name} task failed: {e}"))
    })?
  }
}

fn run_summarize(text: &str, options: &OptionsBag) -> Result<ResultMap> {
  let options = SummarizeOptions::from_bag(options)?;
  to_result_map(&summarize(text, &options))
}

fn run_keywords(text: &str, options: &OptionsBag) -> Result<ResultMap> {
  let options = KeywordOptions::from_bag(options)?;
  to_result_map(&extract_keywords(text, &options))
}

fn run_sentiment(text: &str, _options: &OptionsBag) -> Result<ResultMap> {
  to_result_map(&analyze_sentiment(text))
}

/// Serializes an operation result into the `result` object
///
/// # Errors
/// Returns an internal error if the value does not serialize to a JSON object
pub fn to_result_map<T: Serialize>(value: &T) -> Result<ResultMap> {
  match serde_json::to_value(value) {
    Ok(JsonValue::Object(map)) => Ok(map),
    Ok(other) => Err(ApiError::internal(format!("result is not an object: {other}"))),
    Err(e) => Err(ApiError::internal(format!("result serialization failed: {e}"))),
  }
}

/// Name to operation bindings
#[derive(Clone)]
pub struct OperationRegistry {
  operations: HashMap<&'static str, Arc<dyn Operation>>,
}

impl OperationRegistry {
  /// Registry with the three built-in operations
  #[must_use]
  pub fn builtin() -> Self {
    OperationKey::ALL
      .into_iter()
      .fold(Self::empty(), |registry, key| {
        registry.with_operation(Arc::new(BuiltinOperation::for_key(key)))
      })
  }

  /// Registry without operations
  #[must_use]
  pub fn empty() -> Self {
    Self {
      operations: HashMap::new(),
    }
  }

  /// Builder that binds `operation` under its name, replacing any previous
  /// binding of that name
  #[must_use]
  pub fn with_operation(mut self, operation: Arc<dyn Operation>) -> Self {
    self.operations.insert(operation.name(), operation);
    self
  }

  /// Looks up an operation by registry name
  ///
  /// # Errors
  /// A missing binding is a routing bug and yields an internal error
  pub fn resolve(&self, name: &str) -> Result<Arc<dyn Operation>> {
    self
      .operations
      .get(name)
      .cloned()
      .ok_or_else(|| ApiError::internal(format!("operation not registered: {name}")))
  }

  /// Registered names
  pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
    self.operations.keys().copied()
  }

  /// Number of registered operations
  #[must_use]
  pub fn len(&self) -> usize {
    self.operations.len()
  }

  /// Whether no operation is registered
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.operations.is_empty()
  }
}

impl Default for OperationRegistry {
  fn default() -> Self {
    Self::builtin()
  }
}
