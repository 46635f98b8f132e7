//! SDK error types

use datalabel_core::CoreError;
use thiserror::Error;

/// SDK error type
#[derive(Error, Debug)]
pub enum SdkError {
    /// No inline dataset was supplied and no dataset is active
    #[error("Missing data: no dataset supplied and no active dataset")]
    MissingDataset,

    /// Target column was not supplied
    #[error("Missing column")]
    MissingColumn,

    /// Labeling rule was not supplied
    #[error("Missing prompt: a labeling rule is required")]
    MissingRule,

    /// Question for a dataset insight was not supplied
    #[error("Missing prompt: a question is required")]
    MissingQuestion,

    /// Selected column does not exist in the dataset
    #[error("Column not found: {0}")]
    UnknownColumn(String),

    /// Inline dataset payload could not be decoded
    #[error("Invalid dataset: {0}")]
    InvalidDataset(String),

    /// Named dataset is not in the store
    #[error("Dataset not found: {0}")]
    UnknownDataset(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Anything else that went wrong while labeling
    #[error("Labeling failed: {0}")]
    LabelingFailed(String),
}

impl SdkError {
    /// True for errors the caller fixes by resubmitting a valid request
    pub fn is_request_error(&self) -> bool {
        matches!(
            self,
            SdkError::MissingDataset
                | SdkError::MissingColumn
                | SdkError::MissingRule
                | SdkError::MissingQuestion
                | SdkError::UnknownColumn(_)
                | SdkError::InvalidDataset(_)
                | SdkError::UnknownDataset(_)
        )
    }
}

impl From<CoreError> for SdkError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::UnknownColumn(column) => SdkError::UnknownColumn(column),
            other => SdkError::InvalidDataset(other.to_string()),
        }
    }
}

/// Result type for SDK operations
pub type Result<T> = std::result::Result<T, SdkError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_errors() {
        let errors = vec![
            SdkError::MissingDataset,
            SdkError::MissingColumn,
            SdkError::MissingRule,
            SdkError::MissingQuestion,
            SdkError::UnknownColumn("body".to_string()),
            SdkError::InvalidDataset("bad".to_string()),
            SdkError::UnknownDataset("a.csv".to_string()),
        ];
        assert!(errors.iter().all(SdkError::is_request_error));
    }

    #[test]
    fn test_non_request_errors() {
        assert!(!SdkError::ConfigError("batch_size".to_string()).is_request_error());
        assert!(!SdkError::LabelingFailed("panic".to_string()).is_request_error());
    }

    #[test]
    fn test_core_error_conversion() {
        let err: SdkError = CoreError::UnknownColumn("text".to_string()).into();
        assert!(matches!(err, SdkError::UnknownColumn(ref c) if c == "text"));

        let err: SdkError = CoreError::RaggedRow {
            row: 2,
            expected: 3,
            found: 1,
        }
        .into();
        assert!(matches!(err, SdkError::InvalidDataset(_)));
        assert!(err.to_string().contains("Row 2 has 1 cells, expected 3"));
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            SdkError::LabelingFailed("boom".to_string()).to_string(),
            "Labeling failed: boom"
        );
        assert!(SdkError::MissingDataset.to_string().contains("Missing data"));
    }
}
