//! Model module

mod request;
mod response;

pub use request::ToolRequest;
pub use response::{ErrorBody, ErrorEnvelope, HealthResponse, ResultMap, ToolResponse};
