//! textops text analysis library
//!
//! Small, stateless heuristics used behind the textops HTTP API:
//! sentence-prefix summarization, frequency keyword extraction and
//! lexicon sentiment labelling.

/// Error module - TextOpsError, OptionsError and the TextOpsResult alias
pub mod errors;

/// Keyword module - whitespace tokenization and frequency ranking
pub mod keywords;

/// Data model module - result structures returned by each operation
pub mod models;

/// Options module - the untyped options bag and per-operation typed options
pub mod options;

/// Sentiment module - lexicon based positive/negative/neutral labelling
pub mod sentiment;

/// Summarizer module - first-N sentence summaries
pub mod summarizer;

/// Re-exports
pub use errors::{OptionsError, TextOpsError, TextOpsResult};
pub use keywords::extract_keywords;
pub use models::{Keyword, KeywordList, Sentiment, SentimentLabel, Summary};
pub use options::{KeywordOptions, OptionsBag, SummarizeOptions};
pub use sentiment::analyze_sentiment;
pub use summarizer::summarize;
