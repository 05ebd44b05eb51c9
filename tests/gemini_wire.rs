//! Gemini client against a local stub of the `generateContent` endpoint.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    routing::post,
    Json, Router,
};
use tokio::net::TcpListener;
use word_analyzer::llm::gemini_client::GeminiClient;
use word_analyzer::LlmClient;

#[derive(Clone, Default)]
struct Captured {
    calls: Arc<Mutex<Vec<(String, Option<String>, serde_json::Value)>>>,
}

/// Start a stub server and return its base URL.
async fn spawn_stub(status: StatusCode, reply: serde_json::Value, captured: Captured) -> String {
    let handler = move |State(captured): State<Captured>,
                        Path(model_call): Path<String>,
                        headers: HeaderMap,
                        Json(body): Json<serde_json::Value>| {
        let reply = reply.clone();
        async move {
            let key = headers
                .get("x-goog-api-key")
                .and_then(|v| v.to_str().ok())
                .map(str::to_string);
            captured.calls.lock().unwrap().push((model_call, key, body));
            (status, Json(reply))
        }
    };

    let app = Router::new()
        .route("/v1beta/models/:model_call", post(handler))
        .with_state(captured);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}/v1beta")
}

#[tokio::test]
async fn test_gemini_invoke_round_trip() {
    let captured = Captured::default();
    let base = spawn_stub(
        StatusCode::OK,
        serde_json::json!({
            "candidates": [{
                "content": {"role": "model", "parts": [{"text": "meaning: swift\ncontext: racing"}]},
                "finishReason": "STOP"
            }]
        }),
        captured.clone(),
    )
    .await;

    let client = GeminiClient::new("secret".to_string(), "gemini-2.5-flash").with_base_url(&base);
    let reply = client.invoke("describe 'swift'").await.unwrap();
    assert_eq!(reply.content, "meaning: swift\ncontext: racing");

    let calls = captured.calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    let (model_call, key, body) = &calls[0];
    assert_eq!(model_call, "gemini-2.5-flash:generateContent");
    assert_eq!(key.as_deref(), Some("secret"));
    assert_eq!(body["contents"][0]["parts"][0]["text"], "describe 'swift'");
    assert_eq!(body["contents"][0]["role"], "user");
}

#[tokio::test]
async fn test_gemini_error_status_is_reported() {
    let base = spawn_stub(
        StatusCode::FORBIDDEN,
        serde_json::json!({"error": {"message": "API key not valid"}}),
        Captured::default(),
    )
    .await;

    let client = GeminiClient::new("bad".to_string(), "gemini-2.5-flash").with_base_url(&base);
    let err = client.invoke("hi").await.unwrap_err().to_string();
    assert!(err.starts_with("Gemini API error 403"), "got {err}");
    assert!(err.contains("API key not valid"));
}

#[tokio::test]
async fn test_gemini_unreachable_is_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = GeminiClient::new("k".to_string(), "gemini-2.5-flash")
        .with_base_url(&format!("http://{addr}/v1beta"));
    assert!(client.invoke("hi").await.is_err());
}
