//! Options bag and per-operation typed options
//!
//! Callers send an open JSON object of options. The bag is kept untyped and
//! every operation reads only the keys it knows, through typed accessors that
//! apply defaults. Unknown keys are ignored.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

use crate::errors::{OptionsError, TextOpsResult};

/// Option key for the number of sentences kept by the summarizer
pub const MAX_SENTENCES_KEY: &str = "maxSentences";

/// Option key for the number of keywords returned
pub const TOP_N_KEY: &str = "topN";

/// Default number of sentences in a summary
pub const DEFAULT_MAX_SENTENCES: usize = 3;

/// Default number of keywords returned
pub const DEFAULT_TOP_N: usize = 10;

/// Untyped, string-keyed options map as received from the caller
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OptionsBag(Map<String, JsonValue>);

impl OptionsBag {
  /// Creates an empty bag
  #[must_use]
  pub fn new() -> Self {
    Self::default()
  }

  /// Builder that inserts one option and returns Self
  #[must_use]
  pub fn with(mut self, key: impl Into<String>, value: JsonValue) -> Self {
    self.0.insert(key.into(), value);
    self
  }

  /// Raw value for `key`, if present
  #[must_use]
  pub fn get(&self, key: &str) -> Option<&JsonValue> {
    self.0.get(key)
  }

  /// Number of options in the bag
  #[must_use]
  pub fn len(&self) -> usize {
    self.0.len()
  }

  /// Whether the bag is empty
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  /// Reads a non-negative integer option
  ///
  /// A missing key or an explicit `null` yields `default`.
  ///
  /// # Errors
  /// Returns [`OptionsError::InvalidValue`] when the value is not a
  /// non-negative integer (strings, floats, negatives, booleans, ...).
  pub fn get_usize(&self, key: &str, default: usize) -> Result<usize, OptionsError> {
    match self.0.get(key) {
      None | Some(JsonValue::Null) => Ok(default),
      Some(JsonValue::Number(n)) => n
        .as_u64()
        .and_then(|v| usize::try_from(v).ok())
        .ok_or_else(|| invalid(key, "a non-negative integer")),
      Some(_) => Err(invalid(key, "a non-negative integer")),
    }
  }
}

impl From<Map<String, JsonValue>> for OptionsBag {
  fn from(map: Map<String, JsonValue>) -> Self {
    Self(map)
  }
}

fn invalid(key: &str, expected: &'static str) -> OptionsError {
  OptionsError::InvalidValue {
    key: key.to_string(),
    expected,
  }
}

/// Typed options of the summarizer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummarizeOptions {
  /// Maximum number of sentences kept (0 yields an empty summary)
  pub max_sentences: usize,
}

impl Default for SummarizeOptions {
  fn default() -> Self {
    Self {
      max_sentences: DEFAULT_MAX_SENTENCES,
    }
  }
}

impl SummarizeOptions {
  /// Reads `maxSentences` from the bag
  ///
  /// # Errors
  /// Returns an error if `maxSentences` is not a non-negative integer
  pub fn from_bag(bag: &OptionsBag) -> TextOpsResult<Self> {
    Ok(Self {
      max_sentences: bag.get_usize(MAX_SENTENCES_KEY, DEFAULT_MAX_SENTENCES)?,
    })
  }
}

/// Typed options of the keyword extractor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordOptions {
  /// Number of keywords returned (always positive)
  pub top_n: usize,
}

impl Default for KeywordOptions {
  fn default() -> Self {
    Self {
      top_n: DEFAULT_TOP_N,
    }
  }
}

impl KeywordOptions {
  /// Reads `topN` from the bag
  ///
  /// # Errors
  /// Returns an error if `topN` is not a positive integer
  pub fn from_bag(bag: &OptionsBag) -> TextOpsResult<Self> {
    let top_n = bag
      .get_usize(TOP_N_KEY, DEFAULT_TOP_N)
      .map_err(|_| invalid(TOP_N_KEY, "a positive integer"))?;
    if top_n == 0 {
      return Err(invalid(TOP_N_KEY, "a positive integer").into());
    }
    Ok(Self { top_n })
  }
}
