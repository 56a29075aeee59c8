//! Provider trait for hosted text-generation endpoints.
//!
//! The product needs exactly one capability: send a prompt, get text back.
//! The trait keeps that surface small while leaving room for other hosted
//! providers behind the same seam.

use async_trait::async_trait;

/// A single text-generation request.
#[derive(Debug, Clone)]
pub struct LLMRequest {
    /// Model identifier, e.g. `gemini-2.5-flash`.
    pub model: String,
    /// The complete instruction prompt. No other generation parameters are
    /// configured; endpoint defaults apply.
    pub prompt: String,
}

/// Plain-text completion returned by the endpoint.
#[derive(Debug, Clone)]
pub struct LLMResponse {
    pub content: String,
}

#[derive(Debug, thiserror::Error)]
pub enum LLMError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
    #[error("Provider error: {0}")]
    Provider(String),
}

/// Hosted text-generation endpoint.
#[async_trait]
pub trait LLMProvider: Send + Sync {
    /// Provider name, e.g. "gemini".
    fn name(&self) -> &str;

    /// Generate a completion for the request. One call per submission; no
    /// retry, timeout, or streaming.
    async fn generate(&self, request: LLMRequest) -> Result<LLMResponse, LLMError>;

    /// Models this provider accepts.
    fn supported_models(&self) -> Vec<String>;
}
