//! Error types for datalabel Core

use thiserror::Error;

/// Core error type
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid dataset: {0}")]
    InvalidDataset(String),

    #[error("Column not found: {0}")]
    UnknownColumn(String),

    #[error("Row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
}

pub type Result<T> = std::result::Result<T, CoreError>;
