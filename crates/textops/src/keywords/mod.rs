//! Frequency based keyword extraction

mod tokenization;

use std::collections::HashMap;

use tracing::trace;

use crate::models::{Keyword, KeywordList};
use crate::options::KeywordOptions;

use tokenization::tokenize;

/// Returns the `top_n` most frequent terms of `text`
///
/// # Processing
/// - Tokenize (lowercase, whitespace split, punctuation strip, length filter)
/// - Count frequencies in first-seen order
/// - Stable sort by frequency, so ties keep first-seen order
/// - `score = frequency / total token count` (the total includes filtered tokens)
#[must_use]
pub fn extract_keywords(text: &str, options: &KeywordOptions) -> KeywordList {
  let tokens = tokenize(text);
  if tokens.total_tokens == 0 {
    return KeywordList::default();
  }

  // (term, frequency) in first-seen order, with an index for lookups
  let mut counts: Vec<(String, usize)> = Vec::new();
  let mut positions: HashMap<String, usize> = HashMap::new();

  for term in tokens.terms {
    match positions.get(&term) {
      Some(&idx) => counts[idx].1 += 1,
      None => {
        positions.insert(term.clone(), counts.len());
        counts.push((term, 1));
      }
    }
  }

  counts.sort_by(|a, b| b.1.cmp(&a.1));

  trace!(
    total_tokens = tokens.total_tokens,
    unique_terms = counts.len(),
    "keyword frequencies counted"
  );

  let total = tokens.total_tokens as f64;
  let keywords = counts
    .into_iter()
    .take(options.top_n)
    .map(|(term, freq)| Keyword {
      term,
      score: freq as f64 / total,
    })
    .collect();

  KeywordList { keywords }
}
