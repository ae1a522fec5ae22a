//! Config module

mod constants;
mod env;

pub use constants::{
  API_KEY_HEADER, API_VERSION, DEFAULT_API_KEYS, DEFAULT_BIND_ADDR, INLINE_PARSE_BYTES,
  MAX_BODY_BYTES, MAX_TEXT_BYTES,
};
pub use env::{
  Config, ENV_API_KEYS, ENV_BIND_ADDR, ENV_HANDLER_TIMEOUT_MS, ENV_MAX_TEXT_BYTES,
};
