//! datalabel LLM Integration
//!
//! This crate connects the labeling pipeline to a chat-style model:
//! - Inference: an async client trait with an Ollama provider and a scripted mock
//! - Prompting: labeling and dataset-question prompt templates
//! - Parsing: tolerant extraction of `N: LABEL` / `N: NO LABEL` verdicts
//!
//! Inference failures are returned as [`LLMError`] values; deciding whether a
//! failure is fatal is left to the caller.

// Re-export core types
pub use client::{LLMClient, LLMRequest, LLMResponse};
pub use error::{LLMError, Result};

// Re-export providers
pub use provider::{MockProvider, MockReply, OllamaProvider};

pub use prompt::LabelingPrompt;
pub use verdict::{apply_verdicts, parse_verdicts, Verdict};

pub mod client;
pub mod error;
pub mod prompt;
pub mod provider;
pub mod verdict;
