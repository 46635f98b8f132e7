//! LLM client interface and types

use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Request to an LLM
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LLMRequest {
    /// The user message to send to the LLM
    pub prompt: String,

    /// Model identifier (e.g., "llama3", "gemma3:27b")
    pub model: String,

    /// Temperature for sampling; 0 disables randomness
    pub temperature: Option<f32>,

    /// System message/instructions
    pub system: Option<String>,
}

impl LLMRequest {
    /// Create a new LLM request
    pub fn new(prompt: String, model: String) -> Self {
        Self {
            prompt,
            model,
            temperature: None,
            system: None,
        }
    }

    /// Set temperature
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Set system message
    pub fn with_system(mut self, system: String) -> Self {
        self.system = Some(system);
        self
    }
}

/// Response from an LLM
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LLMResponse {
    /// The generated text
    pub content: String,

    /// Model that generated the response
    pub model: String,

    /// Number of tokens used (prompt + completion)
    pub tokens_used: u32,
}

impl LLMResponse {
    /// Create a new LLM response
    pub fn new(content: String, model: String) -> Self {
        Self {
            content,
            model,
            tokens_used: 0,
        }
    }

    /// Set tokens used
    pub fn with_tokens(mut self, tokens: u32) -> Self {
        self.tokens_used = tokens;
        self
    }
}

/// Async LLM client trait
#[async_trait]
pub trait LLMClient: Send + Sync {
    /// Send one chat request and return the model's reply
    async fn call(&self, request: LLMRequest) -> Result<LLMResponse>;

    /// Get the name of this client
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_llm_request_builder() {
        let request = LLMRequest::new("Test prompt".to_string(), "llama3".to_string())
            .with_temperature(0.0)
            .with_system("You are an expert data annotator".to_string());

        assert_eq!(request.prompt, "Test prompt");
        assert_eq!(request.model, "llama3");
        assert_eq!(request.temperature, Some(0.0));
        assert_eq!(
            request.system,
            Some("You are an expert data annotator".to_string())
        );
    }

    #[test]
    fn test_llm_response_builder() {
        let response = LLMResponse::new("1: LABEL".to_string(), "llama3".to_string())
            .with_tokens(50);

        assert_eq!(response.content, "1: LABEL");
        assert_eq!(response.model, "llama3");
        assert_eq!(response.tokens_used, 50);
    }
}
