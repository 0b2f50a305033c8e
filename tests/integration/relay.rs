//! Relay endpoint integration tests
//!
//! Drives POST {RELAY_PATH} through the real router with the Gemini API
//! replaced by wiremock.

use axum::http::StatusCode;
use gemini_relay::StaticSecret;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::common::{constants, test_config, test_server, RelayTestHarness};
use crate::mocks::gemini::{GeminiTestData, MockGemini, MOCK_API_KEY};

#[tokio::test]
async fn test_success_returns_upstream_body_verbatim() {
    let harness = RelayTestHarness::new().await;
    let upstream_body = r#"{"candidates":[{"content":{"parts":[{"text":"Hi there"}]}}]}"#;
    harness
        .gemini
        .mock_generate_success_for_prompt("Hello", upstream_body)
        .await;

    let response = harness
        .server
        .post(constants::RELAY_PATH)
        .json(&json!({ "prompt": "Hello" }))
        .await;

    response.assert_status_ok();
    assert_eq!(response.text(), upstream_body);
    assert_eq!(response.header("content-type"), "application/json");
    assert_eq!(response.header("access-control-allow-origin"), "*");
}

#[tokio::test]
async fn test_success_keeps_upstream_field_order_and_layout() {
    let harness = RelayTestHarness::new().await;
    let upstream_body = GeminiTestData::full_response("Olá!");
    harness.gemini.mock_generate_success(&upstream_body).await;

    let response = harness
        .server
        .post(constants::RELAY_PATH)
        .json(&json!({ "prompt": "Diga olá" }))
        .await;

    response.assert_status_ok();
    assert_eq!(response.text(), upstream_body);

    let json: Value = response.json();
    assert_eq!(json["candidates"][0]["content"]["parts"][0]["text"], "Olá!");
}

#[tokio::test]
async fn test_upstream_request_carries_key_and_payload() {
    let harness = RelayTestHarness::new().await;
    harness
        .gemini
        .mock_generate_success(&GeminiTestData::simple_response("ok"))
        .await;

    harness
        .server
        .post(constants::RELAY_PATH)
        .json(&json!({ "prompt": "Hello" }))
        .await
        .assert_status_ok();

    let requests = harness.gemini.received_requests().await;
    assert_eq!(requests.len(), 1);

    let request = &requests[0];
    assert_eq!(request.url.path(), MockGemini::generate_path());
    let key = request
        .url
        .query_pairs()
        .find(|(name, _)| name == "key")
        .map(|(_, value)| value.into_owned());
    assert_eq!(key.as_deref(), Some(MOCK_API_KEY));

    let payload: Value = serde_json::from_slice(&request.body).unwrap();
    assert_eq!(
        payload,
        json!({ "contents": [ { "parts": [ { "text": "Hello" } ] } ] })
    );
}

#[tokio::test]
async fn test_upstream_error_status_is_mirrored() {
    let harness = RelayTestHarness::new().await;
    harness.gemini.mock_generate_error(503, "rate limited").await;

    let response = harness
        .server
        .post(constants::RELAY_PATH)
        .json(&json!({ "prompt": "Hello" }))
        .await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(response.header("access-control-allow-origin"), "*");

    let json: Value = response.json();
    assert_eq!(json["error"], "Falha ao comunicar com a API do Gemini.");
    assert!(json["details"].as_str().unwrap().contains("rate limited"));
}

#[tokio::test]
async fn test_upstream_json_error_is_returned_as_raw_details() {
    let harness = RelayTestHarness::new().await;
    let error_body = GeminiTestData::invalid_key_error();
    harness.gemini.mock_generate_error(400, &error_body).await;

    let response = harness
        .server
        .post(constants::RELAY_PATH)
        .json(&json!({ "prompt": "Hello" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let json: Value = response.json();
    assert_eq!(json["details"], error_body);
}

#[tokio::test]
async fn test_non_post_methods_never_reach_upstream() {
    let harness = RelayTestHarness::new().await;
    harness.gemini.expect_no_calls().await;

    let responses = [
        harness.server.get(constants::RELAY_PATH).await,
        harness
            .server
            .put(constants::RELAY_PATH)
            .json(&json!({ "prompt": "Hello" }))
            .await,
        harness.server.delete(constants::RELAY_PATH).await,
    ];

    for response in responses {
        response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(response.text(), r#"{"error":"Método não permitido."}"#);
    }

    assert!(harness.gemini.received_requests().await.is_empty());
}

#[tokio::test]
async fn test_missing_prompt_is_bad_request() {
    let harness = RelayTestHarness::new().await;
    harness.gemini.expect_no_calls().await;

    for body in [json!({}), json!({ "prompt": "" }), json!({ "message": "Hello" })] {
        let response = harness.server.post(constants::RELAY_PATH).json(&body).await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(response.text(), r#"{"error":"Nenhum prompt foi fornecido."}"#);
    }
}

#[tokio::test]
async fn test_unparseable_body_is_internal_error() {
    let harness = RelayTestHarness::new().await;
    harness.gemini.expect_no_calls().await;

    let response = harness
        .server
        .post(constants::RELAY_PATH)
        .text("prompt=Hello")
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.text(), constants::INTERNAL_ERROR_BODY);
}

#[tokio::test]
async fn test_missing_key_is_configuration_error() {
    let harness = RelayTestHarness::with_secret(StaticSecret::missing()).await;
    harness.gemini.expect_no_calls().await;

    let response = harness
        .server
        .post(constants::RELAY_PATH)
        .json(&json!({ "prompt": "Hello" }))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.text(),
        r#"{"error":"Configuração do servidor incompleta."}"#
    );
}

#[tokio::test]
async fn test_unreachable_upstream_is_generic_internal_error() {
    // Nothing listens on the discard port
    let server = test_server(
        test_config("http://127.0.0.1:9"),
        StaticSecret::new(MOCK_API_KEY),
    );

    let response = server
        .post(constants::RELAY_PATH)
        .json(&json!({ "prompt": "Hello" }))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body = response.text();
    assert_eq!(body, constants::INTERNAL_ERROR_BODY);
    assert!(!body.contains(MOCK_API_KEY));
}

#[tokio::test]
async fn test_identical_requests_give_identical_responses() {
    let harness = RelayTestHarness::new().await;
    harness
        .gemini
        .mock_generate_success(&GeminiTestData::simple_response("Hi there"))
        .await;

    let first = harness
        .server
        .post(constants::RELAY_PATH)
        .json(&json!({ "prompt": "Hello" }))
        .await;
    let second = harness
        .server
        .post(constants::RELAY_PATH)
        .json(&json!({ "prompt": "Hello" }))
        .await;

    assert_eq!(first.status_code(), second.status_code());
    assert_eq!(first.text(), second.text());
    assert_eq!(harness.gemini.received_requests().await.len(), 2);
}
