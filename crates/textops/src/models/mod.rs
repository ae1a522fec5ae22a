//! models module
pub mod model_definition;

/// Re-export result models
pub use model_definition::{Keyword, KeywordList, Sentiment, SentimentLabel, Summary};
