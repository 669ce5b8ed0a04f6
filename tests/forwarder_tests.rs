//! Discord forwarder integration tests against a mock upstream

use model_hub::webhook::{DiscordForwarder, WebhookHandler, WebhookRequest};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn request_with_json(body: serde_json::Value) -> WebhookRequest {
    WebhookRequest {
        headers: vec![("content-type".to_string(), "application/json".to_string())],
        body: body.to_string().into_bytes(),
    }
}

#[tokio::test]
async fn forwards_body_and_content_type_verbatim() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/hook"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({"model": "aurora-xl"})))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let forwarder = DiscordForwarder::new(format!("{}/hook", server.uri()), 5000).unwrap();
    let response = forwarder
        .handle(request_with_json(json!({"model": "aurora-xl"})))
        .await
        .unwrap();

    assert_eq!(response.status, 204);
}

#[tokio::test]
async fn returns_upstream_status_and_body_unchanged() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/hook"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"ok": true})))
        .mount(&server)
        .await;

    let forwarder = DiscordForwarder::new(format!("{}/hook", server.uri()), 5000).unwrap();
    let response = forwarder
        .handle(request_with_json(json!({"anything": 1})))
        .await
        .unwrap();

    assert_eq!(response.status, 201);
    assert_eq!(response.body, json!({"ok": true}).to_string().into_bytes());
    assert!(response
        .content_type
        .unwrap()
        .starts_with("application/json"));
}

#[tokio::test]
async fn upstream_error_statuses_pass_through() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(429).set_body_string("rate limited"))
        .mount(&server)
        .await;

    let forwarder = DiscordForwarder::new(server.uri(), 5000).unwrap();
    let response = forwarder
        .handle(request_with_json(json!({})))
        .await
        .unwrap();

    // The boundary does not reinterpret upstream failures
    assert_eq!(response.status, 429);
    assert_eq!(response.body, b"rate limited".to_vec());
}

#[tokio::test]
async fn unreachable_target_is_an_error() {
    let forwarder = DiscordForwarder::new("http://127.0.0.1:9/hook".to_string(), 500).unwrap();
    let result = forwarder.handle(request_with_json(json!({}))).await;

    assert!(result.is_err());
}

#[tokio::test]
async fn sends_exactly_one_upstream_request() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let forwarder = DiscordForwarder::new(server.uri(), 5000).unwrap();
    let response = forwarder
        .handle(request_with_json(json!({})))
        .await
        .unwrap();

    // A 500 from upstream comes back as-is, with no retry
    assert_eq!(response.status, 500);
}
