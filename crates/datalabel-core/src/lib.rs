//! datalabel Core - Core types for the datalabel labeling pipeline
//!
//! This crate provides the synchronous building blocks shared by the rest of
//! the workspace:
//! - Tabular datasets and their row-text projections
//! - Order-preserving batching
//! - Label vectors
//! - Literal (substring) matching
//! - Error types

pub mod batch;
pub mod dataset;
pub mod error;
pub mod labels;
pub mod literal;

// Re-export commonly used types
pub use batch::{batches, Batch, DEFAULT_BATCH_SIZE};
pub use dataset::{ColumnSelection, Dataset, ALL_COLUMNS};
pub use error::{CoreError, Result};
pub use labels::{Label, LabelVector};
pub use literal::{literal_match, LiteralMatcher};
