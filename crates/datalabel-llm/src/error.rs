//! Error types for datalabel LLM module

use std::time::Duration;
use thiserror::Error;

/// Result type alias for LLM operations
pub type Result<T> = std::result::Result<T, LLMError>;

/// LLM module errors
#[derive(Debug, Error)]
pub enum LLMError {
    /// External API call failed (transport error or non-2xx status)
    #[error("External API call failed: {0}")]
    ApiCallFailed(String),

    /// The call did not complete within the per-call timeout
    #[error("Request timed out after {timeout:?}")]
    Timeout { timeout: Duration },

    /// The endpoint answered 404 for the chat route or model
    #[error(
        "Model '{model}' or chat endpoint not found. Available models: {}",
        .available.join(", ")
    )]
    ModelNotFound {
        model: String,
        available: Vec<String>,
    },

    /// Invalid response format
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}
