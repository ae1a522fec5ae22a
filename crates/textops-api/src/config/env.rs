//! Config loading from environment variables

use std::time::Duration;

use super::constants::{DEFAULT_API_KEYS, DEFAULT_BIND_ADDR, MAX_TEXT_BYTES};
use crate::errors::ApiError;

/// Environment variable holding the bind address
pub const ENV_BIND_ADDR: &str = "TEXTOPS_API_BIND_ADDR";
/// Environment variable holding the comma separated API keys
pub const ENV_API_KEYS: &str = "TEXTOPS_API_KEYS";
/// Environment variable holding an optional tighter text byte limit
pub const ENV_MAX_TEXT_BYTES: &str = "TEXTOPS_MAX_TEXT_BYTES";
/// Environment variable holding an optional handler timeout in milliseconds
pub const ENV_HANDLER_TIMEOUT_MS: &str = "TEXTOPS_HANDLER_TIMEOUT_MS";

/// API Server Configuration
///
/// Built once at process start and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Config {
  /// Bind address (e.g. "127.0.0.1:8000")
  pub bind_addr: String,
  /// Accepted API keys
  pub api_keys: Vec<String>,
  /// Effective text byte limit (never above [`MAX_TEXT_BYTES`])
  pub max_text_bytes: usize,
  /// Upper bound on a single handler invocation, `None` waits indefinitely
  pub handler_timeout: Option<Duration>,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      bind_addr: DEFAULT_BIND_ADDR.to_string(),
      api_keys: split_keys(DEFAULT_API_KEYS),
      max_text_bytes: MAX_TEXT_BYTES,
      handler_timeout: None,
    }
  }
}

impl Config {
  /// Loads configuration from environment variables
  ///
  /// # Errors
  /// Returns an error if environment variable values are invalid
  pub fn from_env() -> crate::errors::Result<Self> {
    Self::from_lookup(|key| std::env::var(key).ok())
  }

  /// Loads configuration through an arbitrary variable lookup
  ///
  /// # Errors
  /// - The API key list is set but contains no usable key
  /// - A numeric variable does not parse
  pub fn from_lookup<F>(lookup: F) -> crate::errors::Result<Self>
  where
    F: Fn(&str) -> Option<String>,
  {
    let bind_addr = lookup(ENV_BIND_ADDR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());

    let api_keys = match lookup(ENV_API_KEYS) {
      Some(raw) => {
        let keys = split_keys(&raw);
        if keys.is_empty() {
          return Err(ApiError::config(format!("{ENV_API_KEYS} contains no API key")));
        }
        keys
      }
      None => split_keys(DEFAULT_API_KEYS),
    };

    let max_text_bytes = match lookup(ENV_MAX_TEXT_BYTES) {
      Some(raw) => parse_number(ENV_MAX_TEXT_BYTES, &raw)?.min(MAX_TEXT_BYTES as u64) as usize,
      None => MAX_TEXT_BYTES,
    };

    let handler_timeout = lookup(ENV_HANDLER_TIMEOUT_MS)
      .map(|raw| parse_number(ENV_HANDLER_TIMEOUT_MS, &raw).map(Duration::from_millis))
      .transpose()?;

    Ok(Self {
      bind_addr,
      api_keys,
      max_text_bytes,
      handler_timeout,
    })
  }
}

fn split_keys(raw: &str) -> Vec<String> {
  raw
    .split(',')
    .map(str::trim)
    .filter(|k| !k.is_empty())
    .map(str::to_string)
    .collect()
}

fn parse_number(name: &str, raw: &str) -> crate::errors::Result<u64> {
  raw
    .trim()
    .parse::<u64>()
    .map_err(|e| ApiError::config(format!("{name} must be a non-negative integer: {e}")))
}

#[cfg(test)]
mod tests {
  use std::collections::HashMap;

  use super::*;

  fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> =
      pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect();
    move |key| vars.get(key).cloned()
  }

  #[test]
  fn defaults_when_nothing_is_set() {
    let config = Config::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR);
    assert_eq!(config.api_keys, vec!["test-api-key", "development-key"]);
    assert_eq!(config.max_text_bytes, MAX_TEXT_BYTES);
    assert_eq!(config.handler_timeout, None);
  }

  #[test]
  fn api_keys_are_trimmed_and_blank_entries_dropped() {
    let config = Config::from_lookup(lookup_from(&[(ENV_API_KEYS, " k1 ,, k2 ,")])).unwrap();
    assert_eq!(config.api_keys, vec!["k1", "k2"]);
  }

  #[test]
  fn empty_api_key_list_is_rejected() {
    let err = Config::from_lookup(lookup_from(&[(ENV_API_KEYS, " , ")])).unwrap_err();
    assert_eq!(err.code(), "500");
    assert!(err.to_string().contains(ENV_API_KEYS));
  }

  #[test]
  fn max_text_bytes_is_clamped_to_ceiling() {
    let config = Config::from_lookup(lookup_from(&[(ENV_MAX_TEXT_BYTES, "999999999999")])).unwrap();
    assert_eq!(config.max_text_bytes, MAX_TEXT_BYTES);

    let config = Config::from_lookup(lookup_from(&[(ENV_MAX_TEXT_BYTES, "1024")])).unwrap();
    assert_eq!(config.max_text_bytes, 1024);
  }

  #[test]
  fn handler_timeout_is_parsed() {
    let config = Config::from_lookup(lookup_from(&[(ENV_HANDLER_TIMEOUT_MS, "250")])).unwrap();
    assert_eq!(config.handler_timeout, Some(Duration::from_millis(250)));
  }

  #[test]
  fn non_numeric_values_are_rejected() {
    assert!(Config::from_lookup(lookup_from(&[(ENV_MAX_TEXT_BYTES, "ten")])).is_err());
    assert!(Config::from_lookup(lookup_from(&[(ENV_HANDLER_TIMEOUT_MS, "-5")])).is_err());
  }

  #[test]
  fn default_matches_unset_environment() {
    let from_lookup = Config::from_lookup(lookup_from(&[])).unwrap();
    let default = Config::default();
    assert_eq!(from_lookup.bind_addr, default.bind_addr);
    assert_eq!(from_lookup.api_keys, default.api_keys);
  }
}
