//! Owns the form state and the single in-flight generation request.
//!
//! Mirrors the event-driven shape of the product: one request record, one
//! result string, one error slot, and a boolean busy flag that prevents
//! overlapping submissions. Submission is split into begin/complete so the
//! guard is enforced before anything leaves the process.

use crate::config::constants::messages;
use crate::form::{MissingField, RppRequest};
use crate::llm::provider::{LLMError, LLMProvider, LLMRequest, LLMResponse};
use crate::prompt::build_prompt;
use once_cell::sync::Lazy;
use regex::Regex;

static MAPEL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Mata Pelajaran\s*:\s*(.*)").expect("mapel pattern"));

/// Why a submission could not be started.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("permintaan sebelumnya masih diproses")]
    Busy,
    #[error(transparent)]
    Invalid(#[from] MissingField),
}

#[derive(Debug, Default)]
pub struct GeneratorSession {
    request: RppRequest,
    output: Option<String>,
    error: Option<String>,
    busy: bool,
}

impl GeneratorSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request(&self) -> &RppRequest {
        &self.request
    }

    pub fn request_mut(&mut self) -> &mut RppRequest {
        &mut self.request
    }

    /// Generated plan text, if the last submission succeeded.
    pub fn output(&self) -> Option<&str> {
        self.output.as_deref()
    }

    /// The single user-visible error message, if the last submission failed.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Restore the fixed defaults and clear any previous result or error.
    pub fn reset(&mut self) {
        self.request = RppRequest::default();
        self.output = None;
        self.error = None;
    }

    /// Start a submission: rejects overlapping submissions and unpopulated
    /// requests, marks the session busy, clears previous state, and returns
    /// the built prompt.
    pub fn begin_submit(&mut self) -> Result<String, SubmitError> {
        if self.busy {
            return Err(SubmitError::Busy);
        }
        self.request.validate()?;
        self.busy = true;
        self.output = None;
        self.error = None;
        Ok(build_prompt(&self.request))
    }

    /// Record the outcome of the outbound call and clear the busy flag.
    ///
    /// Every failure collapses into the one fixed user-facing message; the
    /// underlying error only goes to the log. A failure leaves no partial
    /// result text behind.
    pub fn complete_submit(&mut self, result: Result<LLMResponse, LLMError>) {
        self.busy = false;
        match result {
            Ok(response) => {
                self.output = Some(response.content);
            }
            Err(err) => {
                tracing::error!(error = %err, "generation request failed");
                self.output = None;
                self.error = Some(messages::GENERATION_FAILED.to_string());
            }
        }
    }

    /// Full submission round trip against a provider.
    pub async fn submit(
        &mut self,
        provider: &dyn LLMProvider,
        model: &str,
    ) -> Result<(), SubmitError> {
        let prompt = self.begin_submit()?;
        let result = provider
            .generate(LLMRequest {
                model: model.to_string(),
                prompt,
            })
            .await;
        self.complete_submit(result);
        Ok(())
    }

    /// Title for the result view, derived from the generated text the same
    /// way the subject line is echoed in the identity block.
    pub fn title(&self) -> String {
        if let Some(output) = &self.output {
            if let Some(caps) = MAPEL_RE.captures(output) {
                let mapel = caps[1].trim();
                if !mapel.is_empty() {
                    return format!("RPP {mapel}");
                }
            }
        }
        "Hasil RPP".to_string()
    }

    /// Best-effort copy of the raw generated text to the system clipboard.
    /// Returns whether the copy succeeded; failures are logged only and never
    /// surfaced to the user.
    pub fn copy_output_to_clipboard(&self) -> bool {
        let Some(text) = &self.output else {
            return false;
        };
        match arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(text.clone())) {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!(error = %err, "clipboard copy failed");
                false
            }
        }
    }
}
