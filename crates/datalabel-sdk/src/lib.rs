//! datalabel SDK
//!
//! High-level API for labeling the rows of a tabular dataset against a
//! natural-language rule, either by literal substring search or by batched
//! delegation to a chat model.

pub mod builder;
pub mod config;
pub mod error;
pub mod labeling_engine;
pub mod store;

// Re-export main types
pub use builder::LabelingEngineBuilder;
pub use config::EngineConfig;
pub use error::{Result, SdkError};
pub use labeling_engine::{
    InsightRequest, LabeledExample, LabelingEngine, LabelingRequest, LabelingResult, MatchMode,
};
pub use store::{DatasetResolver, InMemoryDatasetStore};

// Re-export commonly used types from dependencies
pub use datalabel_core::{ColumnSelection, Dataset, Label, ALL_COLUMNS};
pub use datalabel_llm::{LLMClient, MockProvider, MockReply, OllamaProvider};
