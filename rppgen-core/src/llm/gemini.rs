//! Gemini `generateContent` client.

use crate::config::constants::models;
use crate::llm::provider::{LLMError, LLMProvider, LLMRequest, LLMResponse};
use async_trait::async_trait;
use reqwest::Client as HttpClient;
use serde_json::{Value, json};

pub struct GeminiProvider {
    api_key: String,
    http_client: HttpClient,
    base_url: String,
}

impl GeminiProvider {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            http_client: HttpClient::new(),
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
        }
    }

    /// Point the provider at a different endpoint, for tests against a stub
    /// server.
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            api_key,
            http_client: HttpClient::new(),
            base_url,
        }
    }

    fn parse_response(response: Value) -> Result<LLMResponse, LLMError> {
        let parts = response
            .get("candidates")
            .and_then(|c| c.get(0))
            .and_then(|candidate| candidate.get("content"))
            .and_then(|content| content.get("parts"))
            .and_then(|parts| parts.as_array())
            .ok_or_else(|| LLMError::Provider("No candidates in Gemini response".to_string()))?;

        let mut text = String::new();
        for part in parts {
            if let Some(chunk) = part.get("text").and_then(|t| t.as_str()) {
                text.push_str(chunk);
            }
        }

        if text.is_empty() {
            return Err(LLMError::Provider(
                "Gemini response contained no text".to_string(),
            ));
        }

        Ok(LLMResponse { content: text })
    }
}

#[async_trait]
impl LLMProvider for GeminiProvider {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn generate(&self, request: LLMRequest) -> Result<LLMResponse, LLMError> {
        if !self.supported_models().contains(&request.model) {
            return Err(LLMError::InvalidRequest(format!(
                "Unsupported model: {}",
                request.model
            )));
        }

        let body = json!({
            "contents": [{
                "role": "user",
                "parts": [{ "text": request.prompt }]
            }]
        });

        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, request.model, self.api_key
        );

        let response = self
            .http_client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| LLMError::Network(format!("Gemini request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(LLMError::Provider(format!(
                "Gemini HTTP {status}: {error_text}"
            )));
        }

        let payload: Value = response
            .json()
            .await
            .map_err(|e| LLMError::Provider(format!("Failed to parse Gemini response: {e}")))?;

        Self::parse_response(payload)
    }

    fn supported_models(&self) -> Vec<String> {
        models::SUPPORTED_MODELS
            .iter()
            .map(|m| m.to_string())
            .collect()
    }
}
