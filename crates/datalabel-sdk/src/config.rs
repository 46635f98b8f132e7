//! Configuration types for LabelingEngine

use crate::error::{Result, SdkError};
use datalabel_core::DEFAULT_BATCH_SIZE;
use datalabel_llm::provider::DEFAULT_OLLAMA_URL;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Main engine configuration
///
/// Sampling temperature is not configurable; every call is sent at
/// [`TEMPERATURE`](datalabel_llm::prompt::TEMPERATURE).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Model name sent with every chat request
    pub model: String,

    /// Inference endpoint base URL
    pub base_url: String,

    /// Per-call inference timeout, in seconds
    pub timeout_secs: u64,

    /// Rows per model request in AI mode
    pub batch_size: usize,
}

impl EngineConfig {
    /// Create a new engine configuration
    pub fn new() -> Self {
        Self {
            model: "llama3".to_string(),
            base_url: DEFAULT_OLLAMA_URL.to_string(),
            timeout_secs: 30,
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }

    /// Set the model
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the endpoint base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the per-call timeout
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Set the batch size
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Reject settings the pipeline cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.batch_size == 0 {
            return Err(SdkError::ConfigError(
                "batch_size must be at least 1".to_string(),
            ));
        }
        if self.timeout_secs == 0 {
            return Err(SdkError::ConfigError(
                "timeout_secs must be at least 1".to_string(),
            ));
        }
        if self.model.trim().is_empty() {
            return Err(SdkError::ConfigError("model must not be empty".to_string()));
        }
        if self.base_url.trim().is_empty() {
            return Err(SdkError::ConfigError(
                "base_url must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}
