//! textops-api crate
//!
//! Web server exposing the textops operations as an authenticated HTTP API.
//!
//! ## Endpoints
//! - `POST /v1/summarize` - First-N sentence summary
//! - `POST /v1/keywords` - Frequency keywords
//! - `POST /v1/sentiment` - Lexicon sentiment label
//! - `GET /health` - Health Check (no API key)
//!
//! ## Usage Example
//! ```bash
//! curl -X POST http://127.0.0.1:8000/v1/summarize \
//!   -H "Content-Type: application/json" \
//!   -H "X-Api-Key: test-api-key" \
//!   -d '{"requestId": "6f1c2b9e-3a4d-4e5f-8a7b-1c2d3e4f5a6b", "text": "One. Two. Three.", "options": {"maxSentences": 2}}'
//! ```

pub mod api;
pub mod config;
pub mod errors;
pub mod models;
pub mod service;

pub use api::AppState;
pub use config::Config;
pub use errors::{ApiError, ApiErrorKind, RequestFailure};
pub use models::{ErrorEnvelope, HealthResponse, ToolRequest, ToolResponse};
pub use service::{Operation, OperationKey, OperationRegistry, RequestPipeline};
