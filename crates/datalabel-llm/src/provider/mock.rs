//! Mock LLM provider for testing

use crate::client::{LLMClient, LLMRequest, LLMResponse};
use crate::error::{LLMError, Result};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

/// One scripted outcome of a mock call
#[derive(Debug, Clone, PartialEq)]
pub enum MockReply {
    /// Reply with this text
    Text(String),
    /// Fail with [`LLMError::ApiCallFailed`] carrying this message
    Fail(String),
}

/// Mock LLM provider for testing
///
/// Scripted replies are consumed in call order; once the script is empty
/// every call gets the default reply. Every request is recorded.
pub struct MockProvider {
    name: String,
    default_reply: MockReply,
    script: Mutex<VecDeque<MockReply>>,
    requests: Mutex<Vec<LLMRequest>>,
}

impl MockProvider {
    /// Create a new mock provider
    pub fn new() -> Self {
        Self::with_default(MockReply::Text("Mock LLM response".to_string()))
    }

    /// Create with custom default response
    pub fn with_response(response: String) -> Self {
        Self::with_default(MockReply::Text(response))
    }

    /// Create a provider whose every call fails
    pub fn failing(message: impl Into<String>) -> Self {
        Self::with_default(MockReply::Fail(message.into()))
    }

    /// Create with replies consumed one per call, then `default_response`
    pub fn with_script(script: Vec<MockReply>, default_response: String) -> Self {
        let provider = Self::with_response(default_response);
        *lock(&provider.script) = script.into();
        provider
    }

    fn with_default(default_reply: MockReply) -> Self {
        Self {
            name: "mock".to_string(),
            default_reply,
            script: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Requests received so far, in call order
    pub fn requests(&self) -> Vec<LLMRequest> {
        lock(&self.requests).clone()
    }

    pub fn call_count(&self) -> usize {
        lock(&self.requests).len()
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new()
    }
}

fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[async_trait]
impl LLMClient for MockProvider {
    async fn call(&self, request: LLMRequest) -> Result<LLMResponse> {
        let model = request.model.clone();
        lock(&self.requests).push(request);

        let reply = lock(&self.script)
            .pop_front()
            .unwrap_or_else(|| self.default_reply.clone());

        match reply {
            MockReply::Text(content) => Ok(LLMResponse::new(content, model)),
            MockReply::Fail(message) => Err(LLMError::ApiCallFailed(message)),
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
