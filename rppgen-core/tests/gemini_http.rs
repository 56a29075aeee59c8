//! HTTP-level tests for the Gemini client against a local stub server.

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::thread;

use rppgen_core::config::constants::{messages, models};
use rppgen_core::llm::provider::{LLMError, LLMProvider, LLMRequest};
use rppgen_core::llm::GeminiProvider;
use rppgen_core::session::GeneratorSession;

/// Serve exactly one canned HTTP response, then close the connection.
fn serve_once(status_line: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind stub listener");
    let addr = listener.local_addr().expect("stub addr");
    thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            read_request(&mut stream);
            let response = format!(
                "{status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            let _ = stream.write_all(response.as_bytes());
        }
    });
    format!("http://{addr}")
}

/// Drain the request (headers plus Content-Length body) so the client sees a
/// well-behaved peer before the response is written.
fn read_request(stream: &mut TcpStream) {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    loop {
        match stream.read(&mut chunk) {
            Ok(0) => break,
            Ok(n) => {
                buf.extend_from_slice(&chunk[..n]);
                if let Some(pos) = header_end(&buf) {
                    let headers = String::from_utf8_lossy(&buf[..pos]);
                    let content_length = headers
                        .lines()
                        .find_map(|line| {
                            let (name, value) = line.split_once(':')?;
                            if name.eq_ignore_ascii_case("content-length") {
                                value.trim().parse::<usize>().ok()
                            } else {
                                None
                            }
                        })
                        .unwrap_or(0);
                    if buf.len() >= pos + 4 + content_length {
                        break;
                    }
                }
            }
            Err(_) => break,
        }
    }
}

fn header_end(buf: &[u8]) -> Option<usize> {
    buf.windows(4).position(|w| w == b"\r\n\r\n")
}

fn request() -> LLMRequest {
    LLMRequest {
        model: models::GEMINI_2_5_FLASH.to_string(),
        prompt: "tes".to_string(),
    }
}

#[tokio::test]
async fn successful_call_returns_candidate_text() {
    let base_url = serve_once(
        "HTTP/1.1 200 OK",
        r##"{"candidates":[{"content":{"parts":[{"text":"# RPP\nisi"}]}}]}"##,
    );
    let provider = GeminiProvider::with_base_url("test-key".to_string(), base_url);

    let response = provider.generate(request()).await.expect("generate");
    assert_eq!(response.content, "# RPP\nisi");
}

#[tokio::test]
async fn non_success_status_maps_to_provider_error() {
    let base_url = serve_once(
        "HTTP/1.1 500 Internal Server Error",
        r#"{"error":{"message":"boom"}}"#,
    );
    let provider = GeminiProvider::with_base_url("test-key".to_string(), base_url);

    let err = provider.generate(request()).await;
    match err {
        Err(LLMError::Provider(message)) => {
            assert!(message.contains("500"), "unexpected message: {message}");
        }
        other => panic!("expected provider error, got {other:?}"),
    }
}

#[tokio::test]
async fn unreachable_endpoint_maps_to_network_error() {
    // Bind then drop, so the port is very likely to refuse connections.
    let addr = {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
        listener.local_addr().expect("addr")
    };
    let provider = GeminiProvider::with_base_url("test-key".to_string(), format!("http://{addr}"));

    let err = provider.generate(request()).await;
    assert!(matches!(err, Err(LLMError::Network(_))), "got {err:?}");
}

#[tokio::test]
async fn server_failure_surfaces_the_single_user_message() {
    let base_url = serve_once(
        "HTTP/1.1 500 Internal Server Error",
        r#"{"error":{"message":"boom"}}"#,
    );
    let provider = GeminiProvider::with_base_url("test-key".to_string(), base_url);

    let mut session = GeneratorSession::new();
    let prompt = session.begin_submit().expect("begin");
    let result = provider
        .generate(LLMRequest {
            model: models::GEMINI_2_5_FLASH.to_string(),
            prompt,
        })
        .await;
    session.complete_submit(result);

    assert_eq!(session.error(), Some(messages::GENERATION_FAILED));
    assert_eq!(session.output(), None);
    assert!(!session.is_busy());
}
