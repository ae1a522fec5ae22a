//! Request model definition

use textops::OptionsBag;

/// Validated operation request
///
/// Built once by the envelope validator and then only read. `request_id` is
/// caller supplied tracing metadata; uniqueness is not enforced.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolRequest {
  /// Caller supplied UUID, echoed back unchanged
  pub request_id: String,
  /// Text to process
  pub text: String,
  /// Operation specific options
  pub options: OptionsBag,
}

impl ToolRequest {
  /// Creates a request with empty options
  #[must_use]
  pub fn new(request_id: impl Into<String>, text: impl Into<String>) -> Self {
    Self {
      request_id: request_id.into(),
      text: text.into(),
      options: OptionsBag::default(),
    }
  }

  /// Builder that replaces the options bag
  #[must_use]
  pub fn with_options(mut self, options: OptionsBag) -> Self {
    self.options = options;
    self
  }

  /// UTF-8 byte length of the text
  #[must_use]
  pub fn text_bytes(&self) -> usize {
    self.text.len()
  }
}
