//! Database client tests against a mock REST endpoint

use model_hub::config::DatabaseConfig;
use model_hub::db::DbClient;
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(server: &MockServer) -> DatabaseConfig {
    DatabaseConfig {
        url: server.uri(),
        key: "test-key".to_string(),
        timeout_ms: 5000,
    }
}

#[tokio::test]
async fn select_all_returns_rows() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/models"))
        .and(query_param("select", "*"))
        .and(header("apikey", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"name": "aurora-xl"},
            {"name": "verdant-7b"}
        ])))
        .mount(&server)
        .await;

    let client = DbClient::new(&config_for(&server)).unwrap();
    let rows = client.select_all("models").await.unwrap();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["name"], json!("aurora-xl"));
}

#[tokio::test]
async fn select_all_surfaces_error_statuses() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/models"))
        .respond_with(ResponseTemplate::new(403).set_body_string("permission denied"))
        .mount(&server)
        .await;

    let client = DbClient::new(&config_for(&server)).unwrap();
    assert!(client.select_all("models").await.is_err());
}

#[tokio::test]
async fn health_check_reports_reachable_endpoint() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let client = DbClient::new(&config_for(&server)).unwrap();
    assert!(client.health_check().await);
}

#[tokio::test]
async fn health_check_reports_unreachable_endpoint() {
    let config = DatabaseConfig {
        url: "http://127.0.0.1:9".to_string(),
        key: "test-key".to_string(),
        timeout_ms: 500,
    };

    let client = DbClient::new(&config).unwrap();
    assert!(!client.health_check().await);
}
