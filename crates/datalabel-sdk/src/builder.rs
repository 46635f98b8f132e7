//! Builder pattern for LabelingEngine

use crate::config::EngineConfig;
use crate::error::Result;
use crate::labeling_engine::LabelingEngine;
use crate::store::{DatasetResolver, InMemoryDatasetStore};
use datalabel_llm::{LLMClient, OllamaProvider};
use std::sync::Arc;

/// Builder for LabelingEngine
///
/// # Example
///
/// ```rust,ignore
/// use datalabel_sdk::{EngineConfig, InMemoryDatasetStore, LabelingEngineBuilder};
/// use std::sync::Arc;
///
/// // Local Ollama, datasets resolved from a shared store
/// let store = Arc::new(InMemoryDatasetStore::new());
/// let engine = LabelingEngineBuilder::new()
///     .with_config(EngineConfig::new().with_model("gemma3:27b"))
///     .with_resolver(store.clone())
///     .build()?;
///
/// // Scripted client for tests
/// let engine = LabelingEngineBuilder::new()
///     .with_client(Arc::new(MockProvider::with_response("1: LABEL".to_string())))
///     .build()?;
/// ```
pub struct LabelingEngineBuilder {
    config: EngineConfig,
    client: Option<Arc<dyn LLMClient>>,
    resolver: Option<Arc<dyn DatasetResolver>>,
}

impl LabelingEngineBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self {
            config: EngineConfig::new(),
            client: None,
            resolver: None,
        }
    }

    /// Replace the whole configuration
    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the model
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.config.model = model.into();
        self
    }

    /// Set the number of rows per model request
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.config.batch_size = batch_size;
        self
    }

    /// Use a specific inference client instead of Ollama
    pub fn with_client(mut self, client: Arc<dyn LLMClient>) -> Self {
        self.client = Some(client);
        self
    }

    /// Resolve active datasets through `resolver`
    pub fn with_resolver(mut self, resolver: Arc<dyn DatasetResolver>) -> Self {
        self.resolver = Some(resolver);
        self
    }

    /// Build the engine
    ///
    /// Without an explicit client an [`OllamaProvider`] is created from the
    /// configured base URL and timeout. Without a resolver requests must
    /// carry their dataset inline.
    pub fn build(self) -> Result<LabelingEngine> {
        self.config.validate()?;

        let client: Arc<dyn LLMClient> = match self.client {
            Some(client) => client,
            None => Arc::new(
                OllamaProvider::with_base_url(self.config.base_url.clone())
                    .with_timeout(self.config.timeout()),
            ),
        };

        let resolver: Arc<dyn DatasetResolver> = match self.resolver {
            Some(resolver) => resolver,
            None => Arc::new(InMemoryDatasetStore::new()),
        };

        tracing::debug!(
            "Building labeling engine: client={}, model={}, batch_size={}",
            client.name(),
            self.config.model,
            self.config.batch_size
        );

        Ok(LabelingEngine::new(self.config, client, resolver))
    }
}

impl Default for LabelingEngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}
