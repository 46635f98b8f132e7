//! Free-form questions answered from a dataset sample

use super::engine::{non_empty, LabelingEngine};
use super::types::InsightRequest;
use crate::error::{Result, SdkError};
use datalabel_llm::prompt::{
    insight_user_message, INSIGHT_SAMPLE_ROWS, INSIGHT_SYSTEM_MESSAGE, TEMPERATURE,
};
use datalabel_llm::{LLMError, LLMRequest};

impl LabelingEngine {
    /// Answer a question about the requested dataset
    ///
    /// The model sees the header and the first rows as CSV. Inference
    /// failures come back as an `Ok` diagnostic message rather than an error.
    pub async fn ask(&self, request: InsightRequest) -> Result<String> {
        let question = non_empty(request.question).ok_or(SdkError::MissingQuestion)?;
        let dataset = self.resolve_dataset(request.inline_dataset.as_deref())?;

        let sample = dataset.head_csv(INSIGHT_SAMPLE_ROWS);
        let llm_request = LLMRequest::new(
            insight_user_message(&sample, dataset.columns(), &question),
            self.config.model.clone(),
        )
        .with_system(INSIGHT_SYSTEM_MESSAGE.to_string())
        .with_temperature(TEMPERATURE);

        tracing::info!(
            "Answering question over {} rows ({} in sample)",
            dataset.len(),
            dataset.len().min(INSIGHT_SAMPLE_ROWS)
        );

        match self.client.call(llm_request).await {
            Ok(response) => Ok(response.content),
            Err(err) => {
                tracing::warn!("Insight request failed: {}", err);
                Ok(diagnostic(&err))
            }
        }
    }
}

fn diagnostic(err: &LLMError) -> String {
    match err {
        LLMError::ModelNotFound { .. } => format!("Error: {}", err),
        other => format!("Error communicating with local model: {}", other),
    }
}
