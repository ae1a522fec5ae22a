//! Result models
//!
//! Each operation returns one of these structures. They serialize to the
//! `result` object of the API response.

use serde::{Deserialize, Serialize};

/// Summarizer result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
  /// First sentences of the input, joined with `". "`
  pub summary: String,
}

/// One ranked keyword
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keyword {
  /// Normalized (lowercased, punctuation stripped) token
  pub term: String,
  /// Frequency divided by the total whitespace token count
  pub score: f64,
}

/// Keyword extractor result
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KeywordList {
  /// Keywords ordered by descending frequency
  pub keywords: Vec<Keyword>,
}

/// Sentiment label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
  /// More positive than negative lexicon hits
  Positive,
  /// More negative than positive lexicon hits
  Negative,
  /// Equal hits, including none at all
  Neutral,
}

impl SentimentLabel {
  /// Wire representation of the label
  ///
  /// # Examples
  /// - `SentimentLabel::Positive` → `"positive"`
  #[must_use]
  pub fn as_str(&self) -> &'static str {
    match self {
      SentimentLabel::Positive => "positive",
      SentimentLabel::Negative => "negative",
      SentimentLabel::Neutral => "neutral",
    }
  }
}

impl std::fmt::Display for SentimentLabel {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Sentiment result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentiment {
  /// Overall label
  pub label: SentimentLabel,
}
