//! Sentence-prefix summarizer

use crate::models::Summary;
use crate::options::SummarizeOptions;

/// Sentence delimiter
const SENTENCE_DELIMITER: char = '.';

/// Separator placed between kept sentences
const SENTENCE_JOINER: &str = ". ";

/// Builds a summary from the first `max_sentences` sentences of `text`
///
/// Sentences are the trimmed, non-empty segments between `.` delimiters.
/// Kept sentences are joined with `". "` and the trailing `.` is restored.
/// When no sentence is kept the summary is empty.
#[must_use]
pub fn summarize(text: &str, options: &SummarizeOptions) -> Summary {
  let sentences: Vec<&str> = text
    .split(SENTENCE_DELIMITER)
    .map(str::trim)
    .filter(|s| !s.is_empty())
    .take(options.max_sentences)
    .collect();

  if sentences.is_empty() {
    return Summary {
      summary: String::new(),
    };
  }

  let mut summary = sentences.join(SENTENCE_JOINER);
  summary.push(SENTENCE_DELIMITER);

  Summary { summary }
}
