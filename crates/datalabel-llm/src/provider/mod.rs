//! LLM provider implementations

mod mock;
mod ollama;

pub use mock::{MockProvider, MockReply};
pub use ollama::{OllamaProvider, DEFAULT_AVAILABLE_MODELS, DEFAULT_OLLAMA_URL};
