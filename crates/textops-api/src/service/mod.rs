//! Service module
//!
//! Request processing: envelope validation, credential check, operation
//! registry and the pipeline that ties them together.

mod auth;
mod pipeline;
mod registry;
mod validator;

pub use auth::{ApiKeyAllowSet, CredentialCheck};
pub use pipeline::RequestPipeline;
pub use registry::{BuiltinOperation, Operation, OperationKey, OperationRegistry, to_result_map};
pub use validator::{effective_text_limit, enforce_size_limit, validate_envelope};
