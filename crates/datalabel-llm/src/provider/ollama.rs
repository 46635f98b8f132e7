//! Ollama chat provider implementation

use crate::client::{LLMClient, LLMRequest, LLMResponse};
use crate::error::{LLMError, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::json;
use std::time::Duration;
use tracing::debug;

/// Default local Ollama endpoint
pub const DEFAULT_OLLAMA_URL: &str = "http://127.0.0.1:11434";

/// Models suggested when the endpoint reports 404
pub const DEFAULT_AVAILABLE_MODELS: &[&str] = &["gemma-uncensored", "gemma3:27b", "llama4", "llama3"];

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Ollama provider using the non-streaming `/api/chat` route
pub struct OllamaProvider {
    base_url: String,
    timeout: Duration,
    client: Client,
}

impl OllamaProvider {
    /// Create a provider for the default local endpoint
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_OLLAMA_URL.to_string())
    }

    /// Create with custom base URL
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout: DEFAULT_TIMEOUT,
            client: Client::new(),
        }
    }

    /// Set the per-call timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn transport_error(&self, err: reqwest::Error) -> LLMError {
        if err.is_timeout() {
            LLMError::Timeout {
                timeout: self.timeout,
            }
        } else {
            LLMError::ApiCallFailed(format!("{}. Make sure Ollama is running.", err))
        }
    }
}

impl Default for OllamaProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LLMClient for OllamaProvider {
    async fn call(&self, request: LLMRequest) -> Result<LLMResponse> {
        let mut messages = Vec::new();
        if let Some(system) = &request.system {
            messages.push(json!({
                "role": "system",
                "content": system
            }));
        }
        messages.push(json!({
            "role": "user",
            "content": request.prompt
        }));

        let body = json!({
            "model": request.model,
            "messages": messages,
            "stream": false,
            "options": {
                "temperature": request.temperature.unwrap_or(0.0)
            }
        });

        debug!(model = %request.model, url = %self.base_url, "Sending chat request");

        let resp = self
            .client
            .post(format!("{}/api/chat", self.base_url))
            .timeout(self.timeout)
            .json(&body)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = resp.status();
        let resp_text = resp.text().await.map_err(|e| self.transport_error(e))?;

        if status == StatusCode::NOT_FOUND {
            return Err(LLMError::ModelNotFound {
                model: request.model,
                available: DEFAULT_AVAILABLE_MODELS
                    .iter()
                    .map(|m| m.to_string())
                    .collect(),
            });
        }

        if !status.is_success() {
            return Err(LLMError::ApiCallFailed(format!(
                "Ollama API error ({}): {}",
                status, resp_text
            )));
        }

        let resp_json: serde_json::Value = serde_json::from_str(&resp_text).map_err(|e| {
            LLMError::InvalidResponse(format!("Failed to parse response: {}", e))
        })?;

        let content = resp_json["message"]["content"]
            .as_str()
            .ok_or_else(|| LLMError::InvalidResponse("No content in response".to_string()))?
            .trim()
            .to_string();

        let tokens_used = resp_json["prompt_eval_count"].as_u64().unwrap_or(0)
            + resp_json["eval_count"].as_u64().unwrap_or(0);

        Ok(LLMResponse::new(content, request.model)
            .with_tokens(u32::try_from(tokens_used).unwrap_or(u32::MAX)))
    }

    fn name(&self) -> &str {
        "ollama"
    }
}
