//! Prompt templates for labeling and dataset questions

use crate::client::LLMRequest;
use datalabel_core::Batch;

/// System message for batch labeling
pub const LABELING_SYSTEM_MESSAGE: &str = "You are an expert data annotator. Apply the labeling rule to each example. \
For each example, respond with the number followed by ': LABEL' or ': NO LABEL'. \
Example:\n1: LABEL\n2: NO LABEL\n\
Do NOT include any other text or explanation.";

/// System message for questions about a dataset
pub const INSIGHT_SYSTEM_MESSAGE: &str = "You are a data analyst. Provide direct, objective, and concise answers based on the provided CSV data sample. \
Do not use conversational filler, greetings, or elaborate introductions. Focus only on the facts and relevant patterns in the data \
that directly answer the user's question. Keep your response to 1-3 sentences.";

/// Rows included as context for a dataset question
pub const INSIGHT_SAMPLE_ROWS: usize = 100;

/// Sampling temperature sent with every prompt
pub const TEMPERATURE: f32 = 0.0;

/// Render batch members as `1. text` lines, numbered from 1 within the batch
pub fn render_examples(batch: &Batch<'_>) -> String {
    batch
        .texts
        .iter()
        .enumerate()
        .map(|(idx, text)| format!("{}. {}", idx + 1, text))
        .collect::<Vec<_>>()
        .join("\n")
}

/// System and user messages for one labeling batch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelingPrompt {
    pub system: String,
    pub user: String,
}

impl LabelingPrompt {
    pub fn for_batch(rule: &str, batch: &Batch<'_>) -> Self {
        Self {
            system: LABELING_SYSTEM_MESSAGE.to_string(),
            user: format!(
                "Labeling Rule: '{}'\nExamples:\n{}",
                rule,
                render_examples(batch)
            ),
        }
    }

    /// Build the client request for this prompt
    pub fn into_request(self, model: &str) -> LLMRequest {
        LLMRequest::new(self.user, model.to_string())
            .with_system(self.system)
            .with_temperature(TEMPERATURE)
    }
}

/// User message for a question over a CSV sample of a dataset
pub fn insight_user_message(sample_csv: &str, columns: &[String], question: &str) -> String {
    format!(
        "Context (first {} rows of CSV):\n{}\n\nColumns: {}\n\nUser Question: {}",
        INSIGHT_SAMPLE_ROWS,
        sample_csv,
        columns.join(", "),
        question
    )
}
