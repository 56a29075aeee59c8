//! Text-generation provider abstraction and the Gemini implementation.

pub mod gemini;
pub mod provider;

pub use gemini::GeminiProvider;
pub use provider::{LLMError, LLMProvider, LLMRequest, LLMResponse};
