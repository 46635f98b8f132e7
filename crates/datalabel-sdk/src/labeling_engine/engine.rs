//! LabelingEngine - labels every row of a dataset against a rule

use super::types::{LabeledExample, LabelingRequest, LabelingResult, MatchMode};
use crate::config::EngineConfig;
use crate::error::{Result, SdkError};
use crate::store::DatasetResolver;
use datalabel_core::{batches, ColumnSelection, Dataset, Label, LabelVector, LiteralMatcher};
use datalabel_llm::{apply_verdicts, LLMClient, LabelingPrompt};
use futures::FutureExt;
use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::Instant;

/// Main labeling engine
///
/// Holds no per-request state; one engine can serve concurrent requests.
pub struct LabelingEngine {
    pub(super) config: EngineConfig,
    pub(super) client: Arc<dyn LLMClient>,
    pub(super) resolver: Arc<dyn DatasetResolver>,
}

impl LabelingEngine {
    pub(crate) fn new(
        config: EngineConfig,
        client: Arc<dyn LLMClient>,
        resolver: Arc<dyn DatasetResolver>,
    ) -> Self {
        Self {
            config,
            client,
            resolver,
        }
    }

    /// Get the engine configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Name of the inference client in use
    pub fn client_name(&self) -> &str {
        self.client.name()
    }

    /// Label every row of the requested dataset
    ///
    /// Request errors (missing dataset, column or rule; unknown column;
    /// undecodable payload) are returned as-is. Inference failures never
    /// surface here: the affected batch keeps label 0 and the failure is
    /// written to the result's log. Anything else, panics included, becomes
    /// [`SdkError::LabelingFailed`].
    pub async fn label(&self, request: LabelingRequest) -> Result<LabelingResult> {
        match AssertUnwindSafe(self.run_labeling(request))
            .catch_unwind()
            .await
        {
            Ok(Ok(result)) => Ok(result),
            Ok(Err(err)) if err.is_request_error() => {
                tracing::warn!("Rejected labeling request: {}", err);
                Err(err)
            }
            Ok(Err(err)) => {
                tracing::error!("Labeling failed: {}", err);
                Err(SdkError::LabelingFailed(err.to_string()))
            }
            Err(panic) => {
                let message = panic_message(panic.as_ref());
                tracing::error!("Labeling panicked: {}", message);
                Err(SdkError::LabelingFailed(message))
            }
        }
    }

    async fn run_labeling(&self, request: LabelingRequest) -> Result<LabelingResult> {
        let column = non_empty(request.column).ok_or(SdkError::MissingColumn)?;
        let rule = non_empty(request.rule).ok_or(SdkError::MissingRule)?;
        let dataset = self.resolve_dataset(request.inline_dataset.as_deref())?;

        let selection = ColumnSelection::from(column);
        let texts = dataset.row_texts(&selection)?;

        tracing::info!(
            "Labeling {} rows of '{}' in {:?} mode",
            texts.len(),
            selection,
            request.mode
        );

        Ok(self.label_rows(texts, &rule, request.mode).await)
    }

    /// Resolve the request's dataset: inline payload first, then the active one
    pub(super) fn resolve_dataset(&self, inline: Option<&str>) -> Result<Arc<Dataset>> {
        match inline.filter(|payload| !payload.is_empty()) {
            Some(payload) => Ok(Arc::new(Dataset::from_split_json(payload)?)),
            None => self
                .resolver
                .active_dataset()
                .ok_or(SdkError::MissingDataset),
        }
    }

    /// Label already-projected row texts
    ///
    /// Always returns one example per input text, in input order.
    pub async fn label_rows(&self, texts: Vec<String>, rule: &str, mode: MatchMode) -> LabelingResult {
        let started = Instant::now();
        let mut labels = LabelVector::new(texts.len());

        let log = match mode {
            MatchMode::Literal => {
                let matcher = LiteralMatcher::new(rule);
                for (idx, text) in texts.iter().enumerate() {
                    if matcher.matches(text) {
                        labels.set(idx, Label::Match);
                    }
                }
                vec![format!("Literal Match: Applied search for '{}'", rule)]
            }
            MatchMode::Ai => self.label_with_model(&texts, rule, &mut labels).await,
        };

        tracing::info!(
            "Labeled {} rows, {} matched in {}ms",
            labels.len(),
            labels.match_count(),
            started.elapsed().as_millis()
        );

        let examples = texts
            .into_iter()
            .zip(labels.into_vec())
            .map(|(text, label)| LabeledExample(text, label))
            .collect();

        LabelingResult {
            examples,
            raw_response: log.join("\n\n"),
        }
    }

    /// Run every batch through the model in order; returns one log entry per batch
    async fn label_with_model(
        &self,
        texts: &[String],
        rule: &str,
        labels: &mut LabelVector,
    ) -> Vec<String> {
        let mut log = Vec::new();

        for batch in batches(texts, self.config.batch_size) {
            let request = LabelingPrompt::for_batch(rule, &batch).into_request(&self.config.model);

            tracing::debug!(
                "Batch {}: rows {}..{}",
                batch.number,
                batch.offset,
                batch.offset + batch.len()
            );

            match self.client.call(request).await {
                Ok(response) => {
                    let applied = apply_verdicts(&response.content, &batch, labels);
                    tracing::debug!(
                        "Batch {}: {} of {} rows received a verdict ({} tokens)",
                        batch.number,
                        applied,
                        batch.len(),
                        response.tokens_used
                    );
                    log.push(format!("--- Batch {} ---\n{}", batch.number, response.content));
                }
                Err(err) => {
                    tracing::warn!(
                        "Batch {} failed, rows {}..{} left unlabeled: {}",
                        batch.number,
                        batch.offset,
                        batch.offset + batch.len(),
                        err
                    );
                    log.push(format!(
                        "--- Batch {} ---\nError in batch: {}",
                        batch.number, err
                    ));
                }
            }
        }

        log
    }
}

/// Treat an empty string the same as a missing field
pub(super) fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryDatasetStore;
    use datalabel_llm::{LLMRequest, LLMResponse, MockProvider};

    /// Client that panics on every call
    struct PanickingClient;

    #[async_trait::async_trait]
    impl LLMClient for PanickingClient {
        async fn call(&self, _request: LLMRequest) -> datalabel_llm::Result<LLMResponse> {
            panic!("inference client exploded");
        }

        fn name(&self) -> &str {
            "panicking"
        }
    }

    fn engine_with(client: Arc<dyn LLMClient>) -> LabelingEngine {
        LabelingEngine::new(
            EngineConfig::default(),
            client,
            Arc::new(InMemoryDatasetStore::new()),
        )
    }

    const PAYLOAD: &str = r#"{"columns":["text"],"index":[0,1],"data":[["red car"],["blue bike"]]}"#;

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty(Some("x".to_string())), Some("x".to_string()));
        assert_eq!(non_empty(Some(String::new())), None);
        assert_eq!(non_empty(None), None);
    }

    #[test]
    fn test_panic_message() {
        let payload: Box<dyn Any + Send> = Box::new("static message");
        assert_eq!(panic_message(payload.as_ref()), "static message");

        let payload: Box<dyn Any + Send> = Box::new(String::from("owned message"));
        assert_eq!(panic_message(payload.as_ref()), "owned message");

        let payload: Box<dyn Any + Send> = Box::new(42_u8);
        assert_eq!(panic_message(payload.as_ref()), "unknown panic");
    }

    #[tokio::test]
    async fn test_panic_becomes_labeling_failure() {
        let engine = engine_with(Arc::new(PanickingClient));
        let request = LabelingRequest::new("text", "mentions red").with_inline_dataset(PAYLOAD);

        let err = engine.label(request).await.unwrap_err();
        assert!(matches!(err, SdkError::LabelingFailed(ref m) if m.contains("exploded")));
    }

    #[tokio::test]
    async fn test_empty_inline_payload_falls_back_to_active() {
        let store = Arc::new(InMemoryDatasetStore::new());
        store.insert("cars", Dataset::from_split_json(PAYLOAD).unwrap());
        let engine = LabelingEngine::new(
            EngineConfig::default(),
            Arc::new(MockProvider::new()),
            store,
        );

        let request = LabelingRequest::new("text", "red")
            .with_inline_dataset("")
            .with_mode(MatchMode::Literal);
        let result = engine.label(request).await.unwrap();
        assert_eq!(result.labels(), vec![1, 0]);
    }

    #[tokio::test]
    async fn test_malformed_inline_payload_is_request_error() {
        let engine = engine_with(Arc::new(MockProvider::new()));
        let request = LabelingRequest::new("text", "red").with_inline_dataset("{oops");

        let err = engine.label(request).await.unwrap_err();
        assert!(matches!(err, SdkError::InvalidDataset(_)));
    }
}
