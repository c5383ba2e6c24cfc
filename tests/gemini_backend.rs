use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use anyhow::Result;
use humanoide::config::AppConfig;
use humanoide::generation::schema::GenerationRequest;
use humanoide::generation::{ErrorKind, GeminiBackend, GenerationBackend, Humanizer};
use humanoide::types::HumanizeOptions;

const MODEL: &str = "gemini-3-flash-preview";
const API_KEY: &str = "test-key";

/// Serves one canned HTTP response and hands back the raw request it received.
fn serve_once(status_line: &'static str, body: String) -> Result<(u16, JoinHandle<String>)> {
    let listener = TcpListener::bind("127.0.0.1:0")?;
    let port = listener.local_addr()?.port();
    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().expect("accept connection");
        let request = read_request(&mut stream);
        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );
        stream
            .write_all(response.as_bytes())
            .expect("write response");
        request
    });
    Ok((port, handle))
}

fn read_request(stream: &mut impl Read) -> String {
    let mut data = Vec::new();
    let mut buf = [0u8; 4096];
    loop {
        let read = stream.read(&mut buf).expect("read request");
        if read == 0 {
            break;
        }
        data.extend_from_slice(&buf[..read]);
        let text = String::from_utf8_lossy(&data);
        if let Some(header_end) = text.find("\r\n\r\n") {
            let body_len = content_length(&text[..header_end]);
            if data.len() >= header_end + 4 + body_len {
                break;
            }
        }
    }
    String::from_utf8_lossy(&data).into_owned()
}

fn content_length(headers: &str) -> usize {
    headers
        .lines()
        .filter_map(|line| line.split_once(':'))
        .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
        .and_then(|(_, value)| value.trim().parse().ok())
        .unwrap_or(0)
}

fn config_for(port: u16) -> AppConfig {
    AppConfig {
        api_key: Some(API_KEY.to_string()),
        endpoint: format!("http://127.0.0.1:{}/v1beta", port),
        timeout: Duration::from_secs(5),
        ..AppConfig::default()
    }
}

fn envelope(payload: &str) -> String {
    serde_json::json!({
        "candidates": [{ "content": { "role": "model", "parts": [{ "text": payload }] } }]
    })
    .to_string()
}

#[test]
fn server_error_maps_to_status() -> Result<()> {
    let (port, server) = serve_once(
        "500 Internal Server Error",
        r#"{"error":{"code":500,"message":"backend exploded"}}"#.to_string(),
    )?;
    let backend = GeminiBackend::new(&config_for(port))?;
    let err = backend
        .generate(&GenerationRequest::new(MODEL, "prompt"))
        .unwrap_err();
    server.join().expect("server thread");

    assert_eq!(err.kind(), ErrorKind::Status);
    assert!(err.message().contains("500"));
    assert!(err.message().contains("backend exploded"));
    Ok(())
}

#[test]
fn successful_reply_is_parsed_end_to_end() -> Result<()> {
    let payload = r#"{"humanizedText":"Bonjour le monde","humanScore":82,"readabilityScore":90}"#;
    let (port, server) = serve_once("200 OK", envelope(payload))?;
    let humanizer = Humanizer::new(GeminiBackend::new(&config_for(port))?, MODEL);
    let result = humanizer.humanize("Hello world", &HumanizeOptions::default())?;
    let request = server.join().expect("server thread");

    assert_eq!(result.humanized_text, "Bonjour le monde");
    assert_eq!(result.word_count, 3);
    assert_eq!(result.human_score, 82.0);
    assert_eq!(result.original_text, "Hello world");

    let lowered = request.to_ascii_lowercase();
    assert!(request.starts_with(&format!(
        "POST /v1beta/models/{}:generateContent",
        MODEL
    )));
    assert!(lowered.contains(&format!("x-goog-api-key: {}", API_KEY)));
    assert!(request.contains("\"topP\":0.95"));
    assert!(request.contains("\"responseMimeType\":\"application/json\""));
    Ok(())
}

#[test]
fn malformed_payload_from_server_is_rejected() -> Result<()> {
    let (port, server) = serve_once("200 OK", envelope(r#"{"humanizedText":"x"}"#))?;
    let humanizer = Humanizer::new(GeminiBackend::new(&config_for(port))?, MODEL);
    let err = humanizer
        .humanize("Texte", &HumanizeOptions::default())
        .unwrap_err();
    server.join().expect("server thread");

    assert_eq!(err.kind(), ErrorKind::MalformedResponse);
    Ok(())
}

#[test]
fn unreachable_endpoint_maps_to_transport() -> Result<()> {
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0")?;
        listener.local_addr()?.port()
    };
    let backend = GeminiBackend::new(&config_for(port))?;
    let err = backend
        .generate(&GenerationRequest::new(MODEL, "prompt"))
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Transport);
    Ok(())
}
