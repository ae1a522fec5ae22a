//! Request envelope validation
//!
//! Turns a raw body into a [`ToolRequest`] or a [`RequestFailure`]. Field
//! checks run in order: body shape, `requestId`, `text` (including the byte
//! limit), `options`. Once `requestId` has been validated it is attached to
//! every later failure so the error envelope can echo it.

use serde_json::Value as JsonValue;
use uuid::Uuid;

use textops::OptionsBag;

use crate::config::MAX_TEXT_BYTES;
use crate::errors::{ApiError, RequestFailure};
use crate::models::ToolRequest;

const REQUEST_ID_FIELD: &str = "requestId";
const TEXT_FIELD: &str = "text";
const OPTIONS_FIELD: &str = "options";

/// The tighter of the configured limit and the hard ceiling
#[must_use]
pub fn effective_text_limit(configured: usize) -> usize {
  configured.min(MAX_TEXT_BYTES)
}

/// Validates a raw JSON body
///
/// # Errors
/// - 400 when the body is not a JSON object, `requestId` is missing or not a
///   UUID, `text` is missing or not a string, or `options` is present but not
///   an object (`null` included)
/// - 413 when the UTF-8 byte length of `text` exceeds the limit
pub fn validate_envelope(
  body: &[u8],
  max_text_bytes: usize,
) -> std::result::Result<ToolRequest, RequestFailure> {
  let value: JsonValue = serde_json::from_slice(body)
    .map_err(|e| ApiError::validation("body", format!("invalid JSON: {e}")).with_request_id(None))?;

  let JsonValue::Object(mut fields) = value else {
    return Err(ApiError::validation("body", "body must be a JSON object").with_request_id(None));
  };

  let request_id = match fields.remove(REQUEST_ID_FIELD) {
    Some(JsonValue::String(id)) if Uuid::parse_str(&id).is_ok() => id,
    Some(other) => {
      return Err(
        ApiError::validation(REQUEST_ID_FIELD, format!("not a UUID: {other}")).with_request_id(None),
      );
    }
    None => {
      return Err(ApiError::validation(REQUEST_ID_FIELD, "missing").with_request_id(None));
    }
  };

  let fail = |err: ApiError| err.with_request_id(Some(request_id.clone()));

  let text = match fields.remove(TEXT_FIELD) {
    Some(JsonValue::String(text)) => text,
    Some(_) => return Err(fail(ApiError::validation(TEXT_FIELD, "must be a string"))),
    None => return Err(fail(ApiError::validation(TEXT_FIELD, "missing"))),
  };

  let limit = effective_text_limit(max_text_bytes);
  if text.len() > limit {
    return Err(fail(ApiError::payload_too_large(text.len(), limit)));
  }

  let options = match fields.remove(OPTIONS_FIELD) {
    None => OptionsBag::default(),
    Some(JsonValue::Object(map)) => OptionsBag::from(map),
    Some(other) => {
      return Err(fail(ApiError::validation(
        OPTIONS_FIELD,
        format!("must be an object, got {other}"),
      )));
    }
  };

  Ok(ToolRequest {
    request_id,
    text,
    options,
  })
}

/// Re-checks the text byte size of an already validated request
///
/// # Errors
/// Returns 413 when the text exceeds the limit
pub fn enforce_size_limit(
  request: &ToolRequest,
  max_text_bytes: usize,
) -> std::result::Result<(), RequestFailure> {
  let limit = effective_text_limit(max_text_bytes);
  let size = request.text_bytes();
  if size > limit {
    return Err(ApiError::payload_too_large(size, limit).with_request_id(Some(request.request_id.clone())));
  }
  Ok(())
}
