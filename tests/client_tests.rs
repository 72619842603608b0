//! Integration tests for the HTTP client.
//!
//! These tests run the full request path against a mock server: header
//! construction, query merging, success decoding, and normalization of the
//! platform's error body shapes.

use serde_json::json;
use shoplazza_api::client::Error;
use shoplazza_api::{Client, ListOptions};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a token-authenticated client pointed at the mock server.
fn test_client(server: &MockServer) -> Client {
    Client::builder("theshop")
        .token("test-token")
        .base_url(server.uri())
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_get_sends_token_auth_and_standard_headers() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/openapi/products"))
        .and(header("Access-Token", "test-token"))
        .and(header("Token-Type", "Bearer"))
        .and(header("Accept", "application/json"))
        .and(header("Content-Type", "application/json"))
        .and(header(
            "User-Agent",
            shoplazza_api::client::USER_AGENT,
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"products": []})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let products = client.products().list(None).await.unwrap();
    assert!(products.is_empty());
}

#[tokio::test]
async fn test_basic_auth_is_used_when_no_token_is_configured() {
    let mock_server = MockServer::start().await;

    // "key:password" in base64
    Mock::given(method("GET"))
        .and(path("/openapi/products"))
        .and(header("Authorization", "Basic a2V5OnBhc3N3b3Jk"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"products": []})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::builder("theshop")
        .basic_auth("key", "password")
        .base_url(mock_server.uri())
        .build()
        .unwrap();

    client.products().list(None).await.unwrap();
}

#[tokio::test]
async fn test_options_are_appended_to_query_already_on_the_path() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/openapi/products"))
        .and(query_param("vendor", "acme"))
        .and(query_param("limit", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"products": []})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let options = ListOptions {
        limit: Some(10),
        ..ListOptions::default()
    };
    let client = test_client(&mock_server);
    let _: serde_json::Value = client
        .get("openapi/products?vendor=acme", Some(&options))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_count_decodes_the_count_envelope() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/openapi/products/count"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"count": 42})))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let count = client.products().count(None).await.unwrap();
    assert_eq!(count, 42);
}

#[tokio::test]
async fn test_post_wraps_the_resource_in_its_envelope() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/openapi/products"))
        .and(body_json(json!({"product": {"title": "IPod Nano"}})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "product": {"id": "1234", "title": "IPod Nano"}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let product = shoplazza_api::Product {
        title: Some("IPod Nano".to_string()),
        ..shoplazza_api::Product::default()
    };
    let client = test_client(&mock_server);
    let created = client.products().create(&product).await.unwrap();
    assert_eq!(created.id.as_deref(), Some("1234"));
}

#[tokio::test]
async fn test_delete_ignores_the_response_body() {
    let mock_server = MockServer::start().await;

    // Delete responses are not decoded, so a non-JSON body is fine.
    Mock::given(method("DELETE"))
        .and(path("/openapi/products/1234"))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    client.products().delete("1234").await.unwrap();
}

#[tokio::test]
async fn test_field_map_error_body_is_normalized() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/openapi/products"))
        .respond_with(
            ResponseTemplate::new(422)
                .set_body_json(json!({"errors": {"title": ["can't be blank"]}})),
        )
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let err = client.products().list(None).await.unwrap_err();

    match err {
        Error::Response(e) => {
            assert_eq!(e.status, 422);
            assert_eq!(e.message, "title: can't be blank");
            assert_eq!(e.errors, vec!["title: can't be blank".to_string()]);
        }
        other => panic!("expected response error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_list_error_body_joins_messages() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/openapi/orders"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({"errors": ["first", "second"]})),
        )
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let err = client.orders().list(None).await.unwrap_err();

    match err {
        Error::Response(e) => {
            assert_eq!(e.message, "first, second");
            assert_eq!(e.errors, vec!["first", "second"]);
        }
        other => panic!("expected response error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_rate_limit_response_carries_truncated_retry_after() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/openapi/products"))
        .respond_with(
            ResponseTemplate::new(429)
                .insert_header("Retry-After", "2.5")
                .set_body_json(json!({"error": "Exceeded 2 calls per second"})),
        )
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let err = client.products().list(None).await.unwrap_err();

    match err {
        Error::RateLimit(e) => {
            assert_eq!(e.retry_after, 2);
            assert_eq!(e.response.status, 429);
            assert_eq!(e.response.message, "Exceeded 2 calls per second");
        }
        other => panic!("expected rate limit error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_not_acceptable_status_forces_its_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/openapi/products"))
        .respond_with(ResponseTemplate::new(406).set_body_json(json!({"error": "whatever"})))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let err = client.products().list(None).await.unwrap_err();

    match err {
        Error::Response(e) => assert_eq!(e.message, "Not acceptable"),
        other => panic!("expected response error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_non_json_error_body_surfaces_raw_bytes() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/openapi/products"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>bad gateway</html>"))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let err = client.products().list(None).await.unwrap_err();

    match err {
        Error::Decoding(e) => {
            assert_eq!(e.status, 502);
            assert_eq!(e.body, b"<html>bad gateway</html>");
        }
        other => panic!("expected decoding error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_success_body_is_a_decoding_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/openapi/products"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let err = client.products().list(None).await.unwrap_err();

    match err {
        Error::Decoding(e) => {
            assert_eq!(e.status, 200);
            assert_eq!(e.body, b"not json");
        }
        other => panic!("expected decoding error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_unreachable_server_is_a_transport_error() {
    let client = Client::builder("theshop")
        .token("test-token")
        .base_url("http://127.0.0.1:1")
        .build()
        .unwrap();

    let err = client.products().list(None).await.unwrap_err();
    assert!(matches!(err, Error::Transport(_)));
}
