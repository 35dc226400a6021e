//! Integration tests for the GraphQL client against a mock endpoint.
//!
//! These tests verify token selection, URL construction, response reshaping,
//! delivery-delay behavior, and the pass-through handling of non-2xx JSON
//! responses.

use std::time::{Duration, Instant};

use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use contentful_graphql::{
    AccessToken, ContentfulClient, ContentfulConfig, Environment, GraphqlError, HostUrl,
    QueryName, QueryOptions, SpaceId,
};

/// Creates a client pointed at the given mock server.
fn create_test_client(server: &MockServer) -> ContentfulClient {
    let config = ContentfulConfig::builder()
        .space_id(SpaceId::new("space1").unwrap())
        .delivery_token(AccessToken::new("cda-token").unwrap())
        .preview_token(AccessToken::new("cpa-token").unwrap())
        .api_host(HostUrl::new(server.uri()).unwrap())
        .build()
        .unwrap();
    ContentfulClient::new(config)
}

fn topic_fixture() -> serde_json::Value {
    json!({
        "data": {
            "topicProductCollection": {
                "items": [
                    {
                        "sys": { "id": "t1" },
                        "name": "Widgets",
                        "featuredImage": { "url": "https://images.example/widgets.png" }
                    },
                    {
                        "sys": { "id": "t2" },
                        "name": "Gadgets",
                        "featuredImage": { "url": "https://images.example/gadgets.png" }
                    }
                ]
            }
        }
    })
}

fn portfolio_fixture() -> serde_json::Value {
    json!({
        "data": {
            "portfolioCollection": {
                "items": [
                    {
                        "sys": { "id": "p1" },
                        "name": "Site",
                        "description": "A site",
                        "techs": ["rust", "wasm"],
                        "url": "https://site.example",
                        "previewImage": { "url": "https://images.example/site.png" },
                        "categoriesCollection": { "items": [{ "name": "Web" }] }
                    },
                    {
                        "sys": { "id": "p2" },
                        "name": "Tool",
                        "description": "A tool",
                        "techs": ["rust"],
                        "url": "https://tool.example",
                        "previewImage": null,
                        "categoriesCollection": { "items": [] }
                    }
                ]
            },
            "portfolioCategoryCollection": {
                "items": [{ "name": "Web" }, { "name": "CLI" }]
            }
        }
    })
}

// ============================================================================
// Token Selection Tests
// ============================================================================

#[tokio::test]
async fn test_published_token_sent_by_default() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/content/v1/spaces/space1/environments/master"))
        .and(header("Authorization", "Bearer cda-token"))
        .and(header("Content-Type", "application/json"))
        .and(body_partial_json(json!({ "variables": { "preview": false } })))
        .respond_with(ResponseTemplate::new(200).set_body_json(topic_fixture()))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let items = client
        .get_topic_product_collection(&QueryOptions::default())
        .await
        .unwrap();

    assert_eq!(items.len(), 2);
}

#[tokio::test]
async fn test_preview_token_sent_when_preview_requested() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/content/v1/spaces/space1/environments/master"))
        .and(header("Authorization", "Bearer cpa-token"))
        .and(body_partial_json(json!({ "variables": { "preview": true } })))
        .respond_with(ResponseTemplate::new(200).set_body_json(topic_fixture()))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let options = QueryOptions::new().preview(true);
    client.get_topic_product_collection(&options).await.unwrap();
}

// ============================================================================
// URL Construction Tests
// ============================================================================

#[tokio::test]
async fn test_environment_defaults_to_master_path_segment() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/content/v1/spaces/space1/environments/master"))
        .respond_with(ResponseTemplate::new(200).set_body_json(topic_fixture()))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    client
        .get_topic_product_collection(&QueryOptions::default())
        .await
        .unwrap();
}

#[tokio::test]
async fn test_dev_environment_uses_dev_path_segment() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/content/v1/spaces/space1/environments/dev"))
        .respond_with(ResponseTemplate::new(200).set_body_json(topic_fixture()))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let options = QueryOptions::new().environment(Environment::Dev);
    client.get_topic_product_collection(&options).await.unwrap();
}

#[tokio::test]
async fn test_request_body_carries_the_static_document() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(portfolio_fixture()))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    client.get_portfolio(&QueryOptions::default()).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);

    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    let query = body["query"].as_str().unwrap();
    assert_eq!(query, QueryName::Portfolio.document());
    assert_eq!(body["variables"], json!({ "preview": false }));
}

// ============================================================================
// Round-Trip Tests
// ============================================================================

#[tokio::test]
async fn test_topic_collection_round_trip_preserves_order_and_values() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(topic_fixture()))
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let items = client
        .get_topic_product_collection(&QueryOptions::default())
        .await
        .unwrap();

    assert_eq!(items.len(), 2);
    assert_eq!(items[0].id, "t1");
    assert_eq!(items[0].name, "Widgets");
    assert_eq!(
        items[0].featured_image_url,
        "https://images.example/widgets.png"
    );
    assert_eq!(items[1].id, "t2");
    assert_eq!(items[1].name, "Gadgets");
}

#[tokio::test]
async fn test_portfolio_round_trip_reshapes_both_collections() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(portfolio_fixture()))
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let content = client.get_portfolio(&QueryOptions::default()).await.unwrap();

    assert_eq!(content.portfolios.len(), 2);

    let site = &content.portfolios[0];
    assert_eq!(site.id, "p1");
    assert_eq!(site.technologies, vec!["rust", "wasm"]);
    assert_eq!(
        site.preview_image_url.as_deref(),
        Some("https://images.example/site.png")
    );
    assert_eq!(site.categories.len(), 1);
    assert_eq!(site.categories[0].name, "Web");

    let tool = &content.portfolios[1];
    assert_eq!(tool.id, "p2");
    assert!(tool.preview_image_url.is_none());
    assert!(tool.categories.is_empty());

    assert_eq!(content.portfolio_categories.len(), 2);
    assert_eq!(content.portfolio_categories[0].name, "Web");
    assert_eq!(content.portfolio_categories[1].name, "CLI");
}

// ============================================================================
// Delivery Delay Tests
// ============================================================================

#[tokio::test]
async fn test_delay_defers_delivery_by_at_least_the_configured_duration() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(topic_fixture()))
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let options = QueryOptions::new().delay(Duration::from_millis(250));

    let start = Instant::now();
    client.get_topic_product_collection(&options).await.unwrap();
    let elapsed = start.elapsed();

    assert!(
        elapsed >= Duration::from_millis(250),
        "resolved after {elapsed:?}, expected at least 250ms"
    );
}

#[tokio::test]
async fn test_delay_does_not_defer_dispatch() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(topic_fixture()))
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let options = QueryOptions::new().delay(Duration::from_millis(200));
    let dispatched = Instant::now();

    let handle = {
        let client = client.clone();
        tokio::spawn(async move { client.get_topic_product_collection(&options).await })
    };

    // The request must reach the server well before the delay elapses.
    let mut request_seen_after = None;
    for _ in 0..20 {
        tokio::time::sleep(Duration::from_millis(5)).await;
        if !server.received_requests().await.unwrap().is_empty() {
            request_seen_after = Some(dispatched.elapsed());
            break;
        }
    }
    let seen = request_seen_after.expect("request never reached the mock server");
    assert!(
        seen < Duration::from_millis(200),
        "request dispatched after {seen:?}, expected before the 200ms delay"
    );

    handle.await.unwrap().unwrap();
}

// ============================================================================
// Error Pass-Through Tests
// ============================================================================

#[tokio::test]
async fn test_non_2xx_json_response_resolves_instead_of_erroring() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "errors": [{ "message": "The access token you sent could not be found" }]
        })))
        .mount(&server)
        .await;

    let client = create_test_client(&server);

    // get() resolves with a null data payload, not an error
    let data = client
        .get(QueryName::TopicProductCollection, &QueryOptions::default())
        .await
        .unwrap();
    assert!(data.is_null());

    // execute() exposes status and errors for callers that care
    let response = client
        .execute(QueryName::TopicProductCollection, &QueryOptions::default())
        .await
        .unwrap();
    assert_eq!(response.status, 401);
    assert!(!response.is_ok());
    assert!(response.errors().is_some());
}

#[tokio::test]
async fn test_typed_accessor_reports_decode_error_for_error_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "errors": [{ "message": "denied" }]
        })))
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let result = client
        .get_topic_product_collection(&QueryOptions::default())
        .await;

    assert!(matches!(result, Err(GraphqlError::Decode { .. })));
}

#[tokio::test]
async fn test_non_json_body_is_a_malformed_response_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway</html>"))
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let result = client
        .get(QueryName::Portfolio, &QueryOptions::default())
        .await;

    assert!(matches!(result, Err(GraphqlError::MalformedResponse(_))));
}

// ============================================================================
// Independence Tests
// ============================================================================

#[tokio::test]
async fn test_sequential_identical_calls_issue_independent_requests() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(topic_fixture()))
        .expect(2)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let options = QueryOptions::default();

    client.get_topic_product_collection(&options).await.unwrap();
    client.get_topic_product_collection(&options).await.unwrap();

    // expect(2) verifies exactly two requests were received on drop
}
