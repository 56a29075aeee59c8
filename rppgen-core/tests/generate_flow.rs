//! End-to-end submission flow against a mock provider.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

use rppgen_core::config::constants::messages;
use rppgen_core::form::Kurikulum;
use rppgen_core::llm::provider::{LLMError, LLMProvider, LLMRequest, LLMResponse};
use rppgen_core::render::{Block, render_blocks};
use rppgen_core::session::{GeneratorSession, SubmitError};

struct MockProvider {
    calls: AtomicUsize,
    fail: bool,
}

impl MockProvider {
    fn ok() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            fail: false,
        }
    }

    fn failing() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            fail: true,
        }
    }

    fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LLMProvider for MockProvider {
    fn name(&self) -> &str {
        "mock"
    }

    async fn generate(&self, request: LLMRequest) -> Result<LLMResponse, LLMError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(LLMError::Network("connection reset".to_string()));
        }
        assert!(request.prompt.contains("Rencana Pelaksanaan Pembelajaran"));
        Ok(LLMResponse {
            content: "# RENCANA PELAKSANAAN PEMBELAJARAN (RPP)\n\
                      **Identitas RPP**\n\
                      - Mata Pelajaran: Informatika\n\
                      ---\n\
                      Materi dengan **penekanan** penting."
                .to_string(),
        })
    }

    fn supported_models(&self) -> Vec<String> {
        vec!["mock".to_string()]
    }
}

#[tokio::test]
async fn successful_submission_stores_renderable_text() {
    let provider = MockProvider::ok();
    let mut session = GeneratorSession::new();

    session.submit(&provider, "mock").await.expect("submit");

    assert_eq!(provider.call_count(), 1);
    assert!(!session.is_busy());
    assert_eq!(session.error(), None);
    assert_eq!(session.title(), "RPP Informatika");

    let blocks = render_blocks(session.output().expect("output"));
    assert!(matches!(blocks[0], Block::Heading(_)));
    assert!(blocks.contains(&Block::Divider));
}

#[tokio::test]
async fn outstanding_request_blocks_a_second_submission() {
    let provider = MockProvider::ok();
    let mut session = GeneratorSession::new();

    // Simulate the submit control staying disabled while a request is in
    // flight: begin the first submission, then try to submit again before it
    // completes.
    let prompt = session.begin_submit().expect("first begin");
    assert!(session.is_busy());

    let second = session.submit(&provider, "mock").await;
    assert_eq!(second, Err(SubmitError::Busy));
    assert_eq!(provider.call_count(), 0);

    let result = provider
        .generate(LLMRequest {
            model: "mock".to_string(),
            prompt,
        })
        .await;
    session.complete_submit(result);
    assert_eq!(provider.call_count(), 1);
    assert!(!session.is_busy());
    assert!(session.output().is_some());
}

#[tokio::test]
async fn failed_submission_surfaces_one_message_and_no_text() {
    let provider = MockProvider::failing();
    let mut session = GeneratorSession::new();

    session.submit(&provider, "mock").await.expect("submit");

    assert_eq!(provider.call_count(), 1);
    assert_eq!(session.error(), Some(messages::GENERATION_FAILED));
    assert_eq!(session.output(), None);
    assert_eq!(session.title(), "Hasil RPP");
}

#[tokio::test]
async fn track_switch_then_submit_uses_grade_terminology() {
    let provider = MockProvider::ok();
    let mut session = GeneratorSession::new();
    session.request_mut().set_kurikulum(Kurikulum::K2013);
    assert_eq!(session.request().kelas, "1");

    let prompt = session.begin_submit().expect("begin");
    assert!(prompt.contains("Kompetensi Inti (KI)"));
    assert!(prompt.contains("- Kelas         : 1"));

    let result = provider
        .generate(LLMRequest {
            model: "mock".to_string(),
            prompt,
        })
        .await;
    session.complete_submit(result);
    assert!(session.output().is_some());
}
