//! Loopback tests for the generate client.
//!
//! A minimal one-shot HTTP responder on 127.0.0.1 stands in for the
//! inference endpoint, so the full network path is exercised without a
//! running model server.

use dash_lens_lib::error::AnalysisError;
use dash_lens_lib::llm::{generate, FALLBACK_OUTPUT};
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};

const MODEL: &str = "llama3.2-vision:latest";
const IMAGE_B64: &str = "aGVsbG8=";

fn find_subsequence(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}

/// Read the request headers plus the content-length body, so the client
/// never sees the connection drop mid-send.
fn drain_request(stream: &mut TcpStream) {
    let mut data = Vec::new();
    let mut buf = [0u8; 8192];
    let header_end = loop {
        match stream.read(&mut buf) {
            Ok(0) => return,
            Ok(n) => {
                data.extend_from_slice(&buf[..n]);
                if let Some(pos) = find_subsequence(&data, b"\r\n\r\n") {
                    break pos + 4;
                }
            }
            Err(_) => return,
        }
    };
    let headers = String::from_utf8_lossy(&data[..header_end]).to_lowercase();
    let content_length: usize = headers
        .lines()
        .find_map(|line| line.strip_prefix("content-length:"))
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(0);
    let mut remaining = content_length.saturating_sub(data.len() - header_end);
    while remaining > 0 {
        match stream.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => remaining = remaining.saturating_sub(n),
            Err(_) => break,
        }
    }
}

/// Serve exactly one request with a canned response, then exit.
/// Returns the endpoint URL to point the client at.
fn one_shot_server(status_line: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind loopback");
    let addr = listener.local_addr().expect("local addr");
    std::thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            drain_request(&mut stream);
            let response = format!(
                "{}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            let _ = stream.write_all(response.as_bytes());
        }
    });
    format!("http://{}/api/generate", addr)
}

#[tokio::test]
async fn successful_reply_yields_the_response_field() {
    let endpoint = one_shot_server(
        "HTTP/1.1 200 OK",
        r#"{"response":"This dashboard shows rising volume."}"#,
    );
    let output = generate(&endpoint, MODEL, "Summarize.", IMAGE_B64)
        .await
        .unwrap();
    assert_eq!(output, "This dashboard shows rising volume.");
}

#[tokio::test]
async fn non_json_reply_is_reported_as_malformed() {
    let endpoint = one_shot_server("HTTP/1.1 200 OK", "not json");
    let err = generate(&endpoint, MODEL, "Summarize.", IMAGE_B64)
        .await
        .unwrap_err();
    assert!(matches!(err, AnalysisError::MalformedResponse(_)));
}

#[tokio::test]
async fn missing_response_field_degrades_to_fallback_text() {
    let endpoint = one_shot_server("HTTP/1.1 200 OK", "{}");
    let output = generate(&endpoint, MODEL, "Summarize.", IMAGE_B64)
        .await
        .unwrap();
    assert_eq!(output, FALLBACK_OUTPUT);
}

#[tokio::test]
async fn json_error_body_degrades_to_fallback_text() {
    // Ollama reports a missing model as a JSON error body with a non-2xx
    // status; the panel shows the fallback rather than failing hard.
    let endpoint = one_shot_server(
        "HTTP/1.1 404 Not Found",
        r#"{"error":"model 'llama3.2-vision:latest' not found"}"#,
    );
    let output = generate(&endpoint, MODEL, "Summarize.", IMAGE_B64)
        .await
        .unwrap();
    assert_eq!(output, FALLBACK_OUTPUT);
}

#[tokio::test]
async fn unreachable_endpoint_is_a_network_failure() {
    // Bind an ephemeral port, then drop the listener so nothing answers.
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind loopback");
        listener.local_addr().expect("local addr").port()
    };
    let endpoint = format!("http://127.0.0.1:{}/api/generate", port);
    let err = generate(&endpoint, MODEL, "Summarize.", IMAGE_B64)
        .await
        .unwrap_err();
    assert!(matches!(err, AnalysisError::Network(_)));
}
