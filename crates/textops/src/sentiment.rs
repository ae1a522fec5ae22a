//! Lexicon based sentiment labelling

use crate::models::{Sentiment, SentimentLabel};

/// Terms counted as positive
pub const POSITIVE_TERMS: &[&str] = &[
  "good",
  "great",
  "excellent",
  "amazing",
  "wonderful",
  "fantastic",
  "love",
];

/// Terms counted as negative
pub const NEGATIVE_TERMS: &[&str] = &["bad", "terrible", "awful", "horrible", "disappointing"];

/// Labels `text` by comparing positive and negative lexicon hits
///
/// Every lexicon term found as a case-insensitive substring counts once.
/// Ties (including no hits at all) are neutral.
#[must_use]
pub fn analyze_sentiment(text: &str) -> Sentiment {
  let lowered = text.to_lowercase();
  let hits = |terms: &[&str]| terms.iter().filter(|term| lowered.contains(*term)).count();

  let positive = hits(POSITIVE_TERMS);
  let negative = hits(NEGATIVE_TERMS);

  let label = match positive.cmp(&negative) {
    std::cmp::Ordering::Greater => SentimentLabel::Positive,
    std::cmp::Ordering::Less => SentimentLabel::Negative,
    std::cmp::Ordering::Equal => SentimentLabel::Neutral,
  };

  Sentiment { label }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn label(text: &str) -> SentimentLabel {
    analyze_sentiment(text).label
  }

  #[test]
  fn positive_text() {
    assert_eq!(label("I love this"), SentimentLabel::Positive);
    assert_eq!(label("I LOVE this AMAZING product!"), SentimentLabel::Positive);
  }

  #[test]
  fn negative_text() {
    assert_eq!(label("What a terrible, awful day"), SentimentLabel::Negative);
  }

  #[test]
  fn no_hits_is_neutral() {
    assert_eq!(label("plain text"), SentimentLabel::Neutral);
    assert_eq!(label(""), SentimentLabel::Neutral);
  }

  #[test]
  fn tie_is_neutral() {
    assert_eq!(label("good but bad"), SentimentLabel::Neutral);
  }

  #[test]
  fn repeated_term_counts_once() {
    // one positive term (repeated) against two distinct negative terms
    assert_eq!(label("good good good, bad and awful"), SentimentLabel::Negative);
  }

  #[test]
  fn substring_containment() {
    // "goodness" contains "good"
    assert_eq!(label("goodness me"), SentimentLabel::Positive);
  }
}
