//! # OpenAI Provider Tests
//!
//! Runs `OpenAiProvider` against a `wiremock` server to verify the request
//! body it sends and how each kind of upstream failure is reported.

use ayni::errors::UpstreamError;
use ayni::providers::ai::{
    openai::{CompletionSettings, OpenAiProvider},
    AiProvider,
};
use ayni::types::Instruction;
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn provider(server: &MockServer, api_key: Option<&str>) -> OpenAiProvider {
    OpenAiProvider::new(
        format!("{}/v1/chat/completions", server.uri()),
        api_key.map(String::from),
        CompletionSettings::default(),
    )
    .expect("client builds")
}

#[tokio::test]
async fn test_complete_sends_ordered_messages_and_trims_reply() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("authorization", "Bearer sk-test"))
        .and(body_partial_json(json!({
            "model": "gpt-3.5-turbo-0125",
            "temperature": 0.7,
            "max_tokens": 400,
            "messages": [
                {"role": "system", "content": "base"},
                {"role": "system", "content": "tag"},
                {"role": "user", "content": "¿cada cuánto debo regar?"}
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{"message": {"role": "assistant", "content": "  Riega cada 3 días.  \n"}}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let instructions = vec![Instruction::system("base"), Instruction::system("tag")];
    let reply = provider(&server, Some("sk-test"))
        .complete(&instructions, "  ¿cada cuánto debo regar?  ")
        .await
        .expect("completion succeeds");

    assert_eq!(reply, "Riega cada 3 días.");
}

#[tokio::test]
async fn test_non_success_status_is_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid api key"))
        .mount(&server)
        .await;

    let err = provider(&server, None)
        .complete(&[Instruction::system("base")], "hola")
        .await
        .unwrap_err();

    match err {
        UpstreamError::Api { status, body } => {
            assert_eq!(status, 401);
            assert_eq!(body, "invalid api key");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_empty_choices_is_no_choices_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "choices": [] })))
        .mount(&server)
        .await;

    let err = provider(&server, None)
        .complete(&[Instruction::system("base")], "hola")
        .await
        .unwrap_err();

    assert!(matches!(err, UpstreamError::NoChoices));
}

#[tokio::test]
async fn test_malformed_body_is_deserialization_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = provider(&server, None)
        .complete(&[Instruction::system("base")], "hola")
        .await
        .unwrap_err();

    assert!(matches!(err, UpstreamError::Deserialization(_)));
}

#[tokio::test]
async fn test_unreachable_host_is_request_error() {
    let provider = OpenAiProvider::new(
        "http://127.0.0.1:9/v1/chat/completions".to_string(),
        None,
        CompletionSettings::default(),
    )
    .unwrap();

    let err = provider
        .complete(&[Instruction::system("base")], "hola")
        .await
        .unwrap_err();

    assert!(matches!(err, UpstreamError::Request(_)));
}
