//! LabelingEngine - Main API for labeling dataset rows
//!
//! The module is organized into:
//! - `types`: Request/result types (LabelingRequest, LabelingResult, MatchMode)
//! - `engine`: Core LabelingEngine implementation (literal and AI modes)
//! - `insight`: Free-form questions over a dataset sample

mod engine;
mod insight;
mod types;

// Re-export public types
pub use engine::LabelingEngine;
pub use types::{InsightRequest, LabeledExample, LabelingRequest, LabelingResult, MatchMode};
