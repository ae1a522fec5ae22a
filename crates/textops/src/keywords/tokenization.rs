//! Keyword tokenization
//!
//! Splits text on whitespace and normalizes each token for counting.

/// Characters stripped from both ends of every token
pub(crate) const STRIP_CHARS: &[char] = &['.', ',', '!', '?', ';', ':', '"', '(', ')', '[', ']', '{', '}'];

/// Tokens shorter than this (in characters) are not keyword candidates
pub(crate) const MIN_TERM_CHARS: usize = 4;

/// Result of tokenizing one text
#[derive(Debug, Clone, Default)]
pub(crate) struct TokenizationResult {
  /// Normalized candidate terms in text order (short tokens removed)
  pub(crate) terms: Vec<String>,
  /// Number of whitespace separated tokens before filtering
  pub(crate) total_tokens: usize,
}

/// Lowercases `text`, splits on whitespace, strips surrounding punctuation
/// and keeps tokens of at least [`MIN_TERM_CHARS`] characters
pub(crate) fn tokenize(text: &str) -> TokenizationResult {
  let lowered = text.to_lowercase();
  let mut result = TokenizationResult::default();

  for raw in lowered.split_whitespace() {
    result.total_tokens += 1;

    let term = raw.trim_matches(STRIP_CHARS);
    if term.chars().count() >= MIN_TERM_CHARS {
      result.terms.push(term.to_string());
    }
  }

  result
}
