//! Integration tests for the resource façades.
//!
//! These tests verify the paths each façade composes, including version
//! prefixes and order-scoped fulfillment nesting, and the decoding of
//! resource payloads.

use serde_json::json;
use shoplazza_api::{
    ApiVersion, Client, Dimension, Fulfillment, OrderListOptions, Variant,
};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn unversioned_client(server: &MockServer) -> Client {
    Client::builder("theshop")
        .token("test-token")
        .base_url(server.uri())
        .build()
        .unwrap()
}

fn versioned_client(server: &MockServer, version: &str) -> Client {
    Client::builder("theshop")
        .token("test-token")
        .api_version(ApiVersion::new(version).unwrap())
        .base_url(server.uri())
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_product_get_hits_the_item_path() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/openapi/products/632910392"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "product": {"id": "632910392", "title": "IPod Nano", "handle": "ipod-nano"}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = unversioned_client(&mock_server);
    let product = client.products().get("632910392", None).await.unwrap();
    assert_eq!(product.title.as_deref(), Some("IPod Nano"));
}

#[tokio::test]
async fn test_product_update_puts_to_the_item_path() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/openapi/products/632910392"))
        .and(body_json(json!({"product": {"title": "New Title"}})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "product": {"id": "632910392", "title": "New Title"}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = unversioned_client(&mock_server);
    let product = shoplazza_api::Product {
        title: Some("New Title".to_string()),
        ..shoplazza_api::Product::default()
    };
    let updated = client
        .products()
        .update("632910392", &product)
        .await
        .unwrap();
    assert_eq!(updated.title.as_deref(), Some("New Title"));
}

#[tokio::test]
async fn test_variant_collection_lives_under_its_product() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/openapi/products/632910392/variants"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "variants": [{"id": "808950810", "price": "199.00"}]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    // A single variant is addressed at the top level.
    Mock::given(method("GET"))
        .and(path("/openapi/variants/808950810"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "variant": {"id": "808950810", "sku": "IPOD2008PINK"}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = unversioned_client(&mock_server);
    let variants = client.variants().list("632910392", None).await.unwrap();
    assert_eq!(variants[0].price.as_deref(), Some("199.00"));

    let variant = client.variants().get("808950810", None).await.unwrap();
    assert_eq!(variant.sku.as_deref(), Some("IPOD2008PINK"));
}

#[tokio::test]
async fn test_variant_create_posts_under_the_product() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/openapi/products/632910392/variants"))
        .and(body_json(json!({"variant": {"option1": "Pink"}})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "variant": {"id": "1", "option1": "Pink"}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = unversioned_client(&mock_server);
    let variant = Variant {
        option1: Some("Pink".to_string()),
        ..Variant::default()
    };
    let created = client
        .variants()
        .create("632910392", &variant)
        .await
        .unwrap();
    assert_eq!(created.id.as_deref(), Some("1"));
}

#[tokio::test]
async fn test_image_dimensions_decode_in_both_wire_forms() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/openapi/products/632910392/images"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "images": [
                {"id": "850703190", "width": 220, "height": "220"}
            ]
        })))
        .mount(&mock_server)
        .await;

    let client = unversioned_client(&mock_server);
    let images = client.images().list("632910392", None).await.unwrap();

    let image = &images[0];
    assert_eq!(image.width, Some(Dimension::Number(220)));
    assert_eq!(image.height, Some(Dimension::Text("220".to_string())));
    assert_eq!(image.width.as_ref().unwrap().as_pixels(), Some(220));
    assert_eq!(image.height.as_ref().unwrap().as_pixels(), Some(220));
}

#[tokio::test]
async fn test_order_list_sends_order_specific_options() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/openapi/orders"))
        .and(query_param("status", "any"))
        .and(query_param("financial_status", "paid"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "orders": [{"id": "450789469", "total_price": "409.94"}]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let options = OrderListOptions {
        status: Some("any".to_string()),
        financial_status: Some("paid".to_string()),
        ..OrderListOptions::default()
    };
    let client = unversioned_client(&mock_server);
    let orders = client.orders().list(Some(&options)).await.unwrap();
    assert_eq!(orders[0].total_price.as_deref(), Some("409.94"));
}

#[tokio::test]
async fn test_order_scoped_fulfillments_nest_under_the_order() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(
            "/admin/api/2022-01/orders/450789469/fulfillments",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "fulfillments": [{"id": "255858046", "status": "pending"}]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = versioned_client(&mock_server, "2022-01");
    let fulfillments = client
        .orders()
        .fulfillments("450789469")
        .list(None)
        .await
        .unwrap();
    assert_eq!(fulfillments[0].status.as_deref(), Some("pending"));
}

#[tokio::test]
async fn test_fulfillment_transition_posts_to_the_open_action() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(
            "/openapi/orders/450789469/fulfillments/255858046/open",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "fulfillment": {"id": "255858046", "status": "open"}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = unversioned_client(&mock_server);
    let fulfillment = client
        .orders()
        .fulfillments("450789469")
        .transition("255858046")
        .await
        .unwrap();
    assert_eq!(fulfillment.status.as_deref(), Some("open"));
}

#[tokio::test]
async fn test_fulfillment_create_posts_the_wrapped_resource() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/openapi/orders/450789469/fulfillments"))
        .and(body_json(json!({
            "fulfillment": {
                "tracking_number": "123456789",
                "line_item_ids": ["466157049"]
            }
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "fulfillment": {"id": "255858047", "tracking_number": "123456789"}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = unversioned_client(&mock_server);
    let fulfillment = Fulfillment {
        tracking_number: Some("123456789".to_string()),
        line_item_ids: vec!["466157049".to_string()],
        ..Fulfillment::default()
    };
    let created = client
        .orders()
        .fulfillments("450789469")
        .create(&fulfillment)
        .await
        .unwrap();
    assert_eq!(created.id.as_deref(), Some("255858047"));
}

#[tokio::test]
async fn test_top_level_fulfillments_skip_the_parent_segment() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/openapi/fulfillments/count"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"count": 3})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = unversioned_client(&mock_server);
    let count = client.fulfillments().count(None).await.unwrap();
    assert_eq!(count, 3);
}

#[tokio::test]
async fn test_two_clients_keep_independent_version_prefixes() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/openapi/products/count"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"count": 1})))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/admin/api/2023-06/products/count"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"count": 2})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let unversioned = unversioned_client(&mock_server);
    let versioned = versioned_client(&mock_server, "2023-06");

    assert_eq!(unversioned.products().count(None).await.unwrap(), 1);
    assert_eq!(versioned.products().count(None).await.unwrap(), 2);
}
