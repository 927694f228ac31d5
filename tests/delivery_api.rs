//! Integration tests against a mocked Delivery API.

use httpmock::prelude::*;
use kentico_delivery::prelude::*;
use serde_json::json;

const PROJECT_ID: &str = "975bf280-fd91-488c-994c-2f04416e5ee3";
const PREVIEW_KEY: &str = "ew0KICJhbGciOiJIUzI1NiIs";

fn production_client(server: &MockServer) -> DeliveryClient {
    let options = DeliveryOptions::builder()
        .project_id(PROJECT_ID)
        .production_endpoint(format!("{}/{{project_id}}", server.base_url()))
        .build();
    DeliveryClient::new(options).unwrap()
}

fn preview_client(server: &MockServer) -> DeliveryClient {
    let options = DeliveryOptions::builder()
        .project_id(PROJECT_ID)
        .preview_api_key(PREVIEW_KEY)
        .preview_endpoint(format!("{}/{{project_id}}", server.base_url()))
        .build();
    DeliveryClient::new(options).unwrap()
}

fn items_listing_body() -> serde_json::Value {
    json!({
        "items": [{
            "system": {
                "id": "f4b3fc05-e988-4dae-9ac1-a94aba566474",
                "name": "On Roasts",
                "codename": "on_roasts",
                "language": "en-US",
                "type": "article",
                "sitemap_locations": [],
                "last_modified": "2017-04-04T07:00:00Z"
            },
            "elements": {
                "title": { "type": "text", "name": "Title", "value": "On Roasts" }
            }
        }],
        "modular_content": {},
        "pagination": { "skip": 0, "limit": 10, "count": 1, "next_page": "" }
    })
}

#[tokio::test]
async fn items_listing_round_trips() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path(format!("/{}/items", PROJECT_ID))
            .header("accept", "application/json");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(items_listing_body());
    });

    let client = production_client(&server);
    let listing = client.items().await.unwrap();

    mock.assert();
    assert_eq!(listing.items.len(), 1);
    let item = &listing.items[0];
    assert_eq!(item.system.codename.as_str(), "on_roasts");
    assert_eq!(item.system.name, "On Roasts");
    assert_eq!(item.elements["title"].value, serde_json::Value::from("On Roasts"));
    assert_eq!(listing.pagination.count, 1);
    assert_eq!(listing.pagination.next_page.as_deref(), Some(""));
}

#[tokio::test]
async fn query_parameters_are_forwarded() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path(format!("/{}/items", PROJECT_ID))
            .query_param("limit", "2");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(items_listing_body());
    });

    let client = production_client(&server);
    client.items_with(&[("limit", "2")]).await.unwrap();

    mock.assert();
}

#[tokio::test]
async fn preview_mode_sends_bearer_authorization() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path(format!("/{}/items", PROJECT_ID))
            .header("authorization", format!("Bearer {}", PREVIEW_KEY));
        then.status(200)
            .header("content-type", "application/json")
            .json_body(items_listing_body());
    });

    let client = preview_client(&server);
    client.items().await.unwrap();

    mock.assert();
}

#[tokio::test]
async fn production_mode_sends_no_authorization() {
    let server = MockServer::start();
    let authed = server.mock(|when, then| {
        when.method(GET)
            .path(format!("/{}/items", PROJECT_ID))
            .header_exists("authorization");
        then.status(500);
    });
    let plain = server.mock(|when, then| {
        when.method(GET).path(format!("/{}/items", PROJECT_ID));
        then.status(200)
            .header("content-type", "application/json")
            .json_body(items_listing_body());
    });

    let client = production_client(&server);
    client.items().await.unwrap();

    assert_eq!(authed.hits(), 0);
    assert_eq!(plain.hits(), 1);
}

#[tokio::test]
async fn not_found_surfaces_the_api_error_message() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path(format!("/{}/items/x", PROJECT_ID));
        then.status(404)
            .header("content-type", "application/json")
            .json_body(json!({
                "message": "not found",
                "request_id": "iWQEtS_k-qA=",
                "error_code": 100,
                "specific_code": 0
            }));
    });

    let client = production_client(&server);
    let err = client.item("x").await.unwrap_err();

    match err {
        DeliveryError::Api { status, error } => {
            assert_eq!(status, 404);
            assert_eq!(error.message, "not found");
            assert_eq!(error.error_code, Some(100));
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn server_errors_skip_body_parsing() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path(format!("/{}/types", PROJECT_ID));
        then.status(503).body("<html>upstream unavailable</html>");
    });

    let client = production_client(&server);
    let err = client.types().await.unwrap_err();

    assert!(matches!(err, DeliveryError::Server { status: 503 }));
}

#[tokio::test]
async fn zero_parameter_form_equals_empty_params() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path(format!("/{}/types/article", PROJECT_ID));
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!({
                "system": {
                    "id": "b2c14f2c-6467-460b-a70b-bca17972a33a",
                    "name": "Article",
                    "codename": "article",
                    "last_modified": "2017-09-07T08:00:00Z"
                },
                "elements": {}
            }));
    });

    let client = production_client(&server);
    let a = client.content_type("article").await.unwrap();
    let b = client.content_type_with("article", &[]).await.unwrap();

    assert_eq!(mock.hits(), 2);
    assert_eq!(a, b);
}

#[tokio::test]
async fn element_path_includes_both_codenames() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path(format!("/{}/types/coffee/elements/processing", PROJECT_ID));
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!({
                "type": "multiple_choice",
                "name": "Processing",
                "codename": "processing",
                "options": [
                    { "name": "Washed", "codename": "washed" }
                ]
            }));
    });

    let client = production_client(&server);
    let element = client
        .content_type_element("coffee", "processing")
        .await
        .unwrap();

    mock.assert();
    assert_eq!(element.element_type, "multiple_choice");
    assert_eq!(element.codename.as_ref().unwrap().as_str(), "processing");
}

#[tokio::test]
async fn mismatched_success_body_is_a_deserialization_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path(format!("/{}/items", PROJECT_ID));
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!({ "unexpected": true }));
    });

    let client = production_client(&server);
    let err = client.items().await.unwrap_err();

    assert!(matches!(err, DeliveryError::Deserialization(_)));
}

#[tokio::test]
async fn unreachable_host_is_a_transport_error() {
    let options = DeliveryOptions::builder()
        .project_id(PROJECT_ID)
        .production_endpoint("http://127.0.0.1:9/{project_id}")
        .build();
    let client = DeliveryClient::new(options).unwrap();

    let err = client.items().await.unwrap_err();
    assert!(matches!(err, DeliveryError::Transport(_)));
}
