use httpmock::Method::POST;
use httpmock::MockServer;
use serde_json::json;

use dayplan_agent::openai::OpenAiProvider;
use dayplan_agent::provider::{ChatRequest, LlmProvider, Message, ProviderError, Role};

fn request() -> ChatRequest {
    ChatRequest {
        model: "gpt-3.5-turbo".to_string(),
        system: "You are an AI daily planner.".to_string(),
        messages: vec![Message {
            role: Role::User,
            content: "gym at 7pm, meetings 9-5".to_string(),
        }],
        max_tokens: 1000,
        temperature: 0.7,
    }
}

#[tokio::test]
async fn returns_first_choice_content() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/v1/chat/completions")
                .json_body_partial(r#"{"model": "gpt-3.5-turbo", "max_tokens": 1000}"#);
            then.status(200).json_body(json!({
                "model": "gpt-3.5-turbo",
                "choices": [{
                    "message": {"role": "assistant", "content": "3:00 PM: deep work block"},
                    "finish_reason": "stop"
                }]
            }));
        })
        .await;

    let provider = OpenAiProvider::new("key".to_string(), Some(server.base_url()));
    let resp = provider.send(&request()).await.expect("send");
    assert_eq!(resp.content, "3:00 PM: deep work block");
    assert_eq!(resp.model, "gpt-3.5-turbo");
    mock.assert_async().await;
}

#[tokio::test]
async fn non_success_status_maps_to_api_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/v1/chat/completions");
            then.status(401).body("invalid api key");
        })
        .await;

    let provider = OpenAiProvider::new("bad-key".to_string(), Some(server.base_url()));
    let err = provider.send(&request()).await.unwrap_err();
    match err {
        ProviderError::Api { status, message } => {
            assert_eq!(status, 401);
            assert!(message.contains("invalid api key"));
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_body_maps_to_parse_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/v1/chat/completions");
            then.status(200).body("not json at all");
        })
        .await;

    let provider = OpenAiProvider::new("key".to_string(), Some(server.base_url()));
    let err = provider.send(&request()).await.unwrap_err();
    assert!(matches!(err, ProviderError::Parse(_)));
}

#[tokio::test]
async fn missing_content_yields_empty_string() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/v1/chat/completions");
            then.status(200).json_body(json!({
                "model": "gpt-3.5-turbo",
                "choices": [{"message": {"role": "assistant", "content": null}}]
            }));
        })
        .await;

    let provider = OpenAiProvider::new("key".to_string(), Some(server.base_url()));
    let resp = provider.send(&request()).await.expect("send");
    assert!(resp.content.is_empty());
}
