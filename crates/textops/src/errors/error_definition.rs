//! Error definitions

use thiserror::Error;

/// Errors raised while reading typed values out of an options bag
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum OptionsError {
  /// The key is present but its value has the wrong shape
  #[error("option `{key}` must be {expected}")]
  InvalidValue {
    /// Option key as sent by the caller
    key: String,
    /// Human readable description of the accepted values
    expected: &'static str,
  },
}

impl OptionsError {
  /// Name of the offending option key
  #[must_use]
  pub fn key(&self) -> &str {
    match self {
      Self::InvalidValue { key, .. } => key,
    }
  }
}

/// Unified error
/// Public APIs of this crate return this error through `TextOpsResult<T>`
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TextOpsError {
  /// Options related error
  #[error(transparent)]
  Options(#[from] OptionsError),
}

/// Standard Result type alias for the textops crate
pub type TextOpsResult<T> = Result<T, TextOpsError>;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn invalid_value_message_names_key() {
    let err = OptionsError::InvalidValue {
      key: "topN".to_string(),
      expected: "a positive integer",
    };
    assert_eq!(err.key(), "topN");
    assert_eq!(err.to_string(), "option `topN` must be a positive integer");
  }

  #[test]
  fn options_error_is_transparent() {
    let err: TextOpsError = OptionsError::InvalidValue {
      key: "maxSentences".to_string(),
      expected: "a non-negative integer",
    }
    .into();
    assert_eq!(
      err.to_string(),
      "option `maxSentences` must be a non-negative integer"
    );
  }
}
