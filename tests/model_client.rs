//! HttpModelClient against a mock HTTP server.

use std::time::Duration;

use mockito::Server;
use wordbloom::model::{HttpModelClient, TextModel};
use wordbloom::ModelConfig;

fn config_for(base_url: &str) -> ModelConfig {
    ModelConfig {
        base_url: base_url.to_string(),
        model: "llama-3-8b-instruct".to_string(),
        api_key: Some("test-key".to_string()),
        timeout: Duration::from_secs(5),
    }
}

#[tokio::test]
async fn reads_bare_response_field() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/chat/completions")
        .match_header("authorization", "Bearer test-key")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"response": "cat, dog, sun"}"#)
        .create_async()
        .await;

    let client = HttpModelClient::new(&config_for(&server.url())).unwrap();
    let text = client.generate("system", "user").await.unwrap();
    assert_eq!(text, "cat, dog, sun");
    mock.assert_async().await;
}

#[tokio::test]
async fn reads_chat_completions_shape() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/v1/chat/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"choices": [{"message": {"role": "assistant", "content": "The cat sat."}}]}"#)
        .create_async()
        .await;

    let client = HttpModelClient::new(&config_for(&server.url())).unwrap();
    let text = client.generate("system", "user").await.unwrap();
    assert_eq!(text, "The cat sat.");
}

#[tokio::test]
async fn sends_fixed_model_and_message_pair() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/chat/completions")
        .match_body(mockito::Matcher::PartialJson(serde_json::json!({
            "model": "llama-3-8b-instruct",
            "messages": [
                { "role": "system", "content": "be brief" },
                { "role": "user", "content": "three words" }
            ]
        })))
        .with_status(200)
        .with_body(r#"{"response": "ok"}"#)
        .create_async()
        .await;

    let client = HttpModelClient::new(&config_for(&server.url())).unwrap();
    client.generate("be brief", "three words").await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn error_status_is_a_model_error() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/v1/chat/completions")
        .with_status(500)
        .with_body("internal error")
        .create_async()
        .await;

    let client = HttpModelClient::new(&config_for(&server.url())).unwrap();
    let err = client.generate("system", "user").await.unwrap_err();
    assert!(matches!(err, wordbloom::Error::Model(_)));
    assert!(err.to_string().contains("500"));
}

#[tokio::test]
async fn missing_text_content_is_a_model_error() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/v1/chat/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"usage": {"total_tokens": 3}}"#)
        .create_async()
        .await;

    let client = HttpModelClient::new(&config_for(&server.url())).unwrap();
    let err = client.generate("system", "user").await.unwrap_err();
    assert!(err.to_string().contains("missing text content"));
}

#[tokio::test]
async fn unreachable_endpoint_is_a_transport_error() {
    // Port 9 (discard) with nothing listening.
    let client = HttpModelClient::new(&config_for("http://127.0.0.1:9")).unwrap();
    let err = client.generate("system", "user").await.unwrap_err();
    assert!(matches!(err, wordbloom::Error::Transport(_)));
}
