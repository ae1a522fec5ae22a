//! API module

mod access_log;
mod handlers;
mod routes;
mod state;

pub use access_log::{AccessLog, AccessLogLayer, access_log_layer};
pub use handlers::{
  OperationResult, health_check, method_not_allowed, not_found, post_keywords, post_sentiment,
  post_summarize,
};
pub use routes::{create_router, run_server};
pub use state::AppState;
