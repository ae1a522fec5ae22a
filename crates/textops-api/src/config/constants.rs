//! API configuration constants

/// Hard ceiling for the UTF-8 byte length of a request's `text` (10 MiB)
///
/// A configured limit may be tighter but never larger.
pub const MAX_TEXT_BYTES: usize = 10 * 1024 * 1024;

/// Ceiling for the raw HTTP request body
///
/// JSON escaping can grow a string up to six times (`\u0000`), so the body
/// ceiling leaves room for a maximally sized text plus the envelope fields.
pub const MAX_BODY_BYTES: usize = MAX_TEXT_BYTES * 6 + 64 * 1024;

/// Default bind address
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8000";

/// Default comma separated API key allow-set
///
/// Development keys only; production deployments set `TEXTOPS_API_KEYS`.
pub const DEFAULT_API_KEYS: &str = "test-api-key,development-key";

/// Header carrying the caller's API key (header names are case-insensitive)
pub const API_KEY_HEADER: &str = "x-api-key";

/// Version prefix of the operation routes
pub const API_VERSION: &str = "v1";

/// Bodies up to this size are parsed on the async worker; larger ones move
/// to the blocking pool
pub const INLINE_PARSE_BYTES: usize = 256 * 1024;
