//! Request/result types for LabelingEngine

use datalabel_core::Label;
use serde::{Deserialize, Deserializer, Serialize};

/// How rows are matched against the rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// Case-insensitive substring search, no model involved
    Literal,
    /// Batched delegation to the chat model
    #[default]
    Ai,
}

/// Labeling request
///
/// Field names follow the wire format (`df_json`, `column`, `prompt`,
/// `match_type`). Presence of column, rule and a dataset source is checked
/// by the engine before any work starts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LabelingRequest {
    /// Inline dataset in the "split" JSON layout; takes priority over the
    /// active dataset
    #[serde(default, rename = "df_json")]
    pub inline_dataset: Option<String>,

    /// Target column name, or "All Columns"
    #[serde(default)]
    pub column: Option<String>,

    /// Natural-language labeling rule (or search term in literal mode)
    #[serde(default, rename = "prompt")]
    pub rule: Option<String>,

    /// Match mode; absent or `null` means AI mode
    #[serde(default, rename = "match_type", deserialize_with = "null_as_default")]
    pub mode: MatchMode,
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl LabelingRequest {
    /// Create a request against the active dataset
    pub fn new(column: impl Into<String>, rule: impl Into<String>) -> Self {
        Self {
            inline_dataset: None,
            column: Some(column.into()),
            rule: Some(rule.into()),
            mode: MatchMode::default(),
        }
    }

    /// Supply the dataset inline
    pub fn with_inline_dataset(mut self, payload: impl Into<String>) -> Self {
        self.inline_dataset = Some(payload.into());
        self
    }

    /// Set the match mode
    pub fn with_mode(mut self, mode: MatchMode) -> Self {
        self.mode = mode;
        self
    }
}

/// One row text with its final label; serializes as `[text, 0|1]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledExample(pub String, pub Label);

impl LabeledExample {
    pub fn text(&self) -> &str {
        &self.0
    }

    pub fn label(&self) -> Label {
        self.1
    }
}

/// Labeling result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelingResult {
    /// Every row, in dataset order
    pub examples: Vec<LabeledExample>,

    /// Audit log: raw model output or error text per batch
    pub raw_response: String,
}

impl LabelingResult {
    /// Labels as 0/1 values, in row order
    pub fn labels(&self) -> Vec<u8> {
        self.examples.iter().map(|e| e.label().as_u8()).collect()
    }

    pub fn match_count(&self) -> usize {
        self.examples.iter().filter(|e| e.label().is_match()).count()
    }

    pub fn len(&self) -> usize {
        self.examples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.examples.is_empty()
    }
}

/// Question about a dataset
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InsightRequest {
    /// Inline dataset in the "split" JSON layout
    #[serde(default, rename = "df_json")]
    pub inline_dataset: Option<String>,

    #[serde(default, rename = "prompt")]
    pub question: Option<String>,
}

impl InsightRequest {
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            inline_dataset: None,
            question: Some(question.into()),
        }
    }

    pub fn with_inline_dataset(mut self, payload: impl Into<String>) -> Self {
        self.inline_dataset = Some(payload.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_wire_format() {
        let request: LabelingRequest = serde_json::from_str(
            r#"{"df_json":"{}","column":"All Columns","prompt":"mentions red","match_type":"literal"}"#,
        )
        .unwrap();

        assert_eq!(request.inline_dataset.as_deref(), Some("{}"));
        assert_eq!(request.column.as_deref(), Some("All Columns"));
        assert_eq!(request.rule.as_deref(), Some("mentions red"));
        assert_eq!(request.mode, MatchMode::Literal);
    }

    #[test]
    fn test_request_defaults_to_ai_mode() {
        let request: LabelingRequest =
            serde_json::from_str(r#"{"column":"text","prompt":"x"}"#).unwrap();
        assert_eq!(request.mode, MatchMode::Ai);
        assert!(request.inline_dataset.is_none());
    }

    #[test]
    fn test_null_match_type_is_ai_mode() {
        let request: LabelingRequest =
            serde_json::from_str(r#"{"column":"text","prompt":"x","match_type":null}"#).unwrap();
        assert_eq!(request.mode, MatchMode::Ai);

        let err = serde_json::from_str::<LabelingRequest>(r#"{"match_type":"fuzzy"}"#);
        assert!(err.is_err());
    }

    #[test]
    fn test_result_wire_format() {
        let result = LabelingResult {
            examples: vec![
                LabeledExample("red car".to_string(), Label::Match),
                LabeledExample("blue bike".to_string(), Label::NoMatch),
            ],
            raw_response: "log".to_string(),
        };

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "examples": [["red car", 1], ["blue bike", 0]],
                "raw_response": "log"
            })
        );
        assert_eq!(result.labels(), vec![1, 0]);
        assert_eq!(result.match_count(), 1);
    }
}
