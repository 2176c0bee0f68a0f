//! Integration tests for catalog operations.

use meplato_store::resources::catalogs::CreateCatalog;
use meplato_store::{Area, BaseUrl, Credentials, StoreClient, StoreConfig, StoreError};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a client whose base URL points at the mock server.
fn create_test_client(server: &MockServer) -> StoreClient {
    let config = StoreConfig::builder()
        .base_url(BaseUrl::new(server.uri()).unwrap())
        .credentials(Credentials::new("test-token", "").unwrap())
        .build();
    StoreClient::new(config)
}

// ============================================================================
// Get and Search
// ============================================================================

#[tokio::test]
async fn test_get_catalog_by_pin() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/catalogs/AD8CCDD5F9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": 81,
            "pin": "AD8CCDD5F9",
            "kind": "store#catalog",
            "name": "Demo catalog",
            "numProductsWork": 130
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let catalog = client.catalogs().get("AD8CCDD5F9").await.unwrap();

    assert_eq!(catalog.pin.as_deref(), Some("AD8CCDD5F9"));
    assert_eq!(catalog.num_products_work, Some(130));
}

#[tokio::test]
async fn test_search_passes_query_parameters() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/catalogs"))
        .and(query_param("q", "office"))
        .and(query_param("skip", "10"))
        .and(query_param("take", "20"))
        .and(query_param("sort", "-created"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "kind": "store#catalogs",
            "totalItems": 2,
            "items": [{"pin": "A"}, {"pin": "B"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let response = client
        .catalogs()
        .search()
        .q("office")
        .skip(10)
        .take(20)
        .sort("-created")
        .send()
        .await
        .unwrap();

    assert_eq!(response.total_items, 2);
    assert_eq!(response.items.len(), 2);
}

#[tokio::test]
async fn test_search_without_parameters_has_bare_path() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/catalogs"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"kind": "store#catalogs"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let response = client.catalogs().search().send().await.unwrap();

    assert!(response.items.is_empty());

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.query(), None);
}

// ============================================================================
// Create
// ============================================================================

#[tokio::test]
async fn test_create_catalog_posts_payload() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/catalogs"))
        .and(body_json(serde_json::json!({
            "name": "Winter catalog",
            "merchantId": 4
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": 99,
            "pin": "5094310527",
            "kind": "store#catalog",
            "name": "Winter catalog"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let create = CreateCatalog {
        name: "Winter catalog".to_string(),
        merchant_id: Some(4),
        ..Default::default()
    };
    let catalog = client.catalogs().create(&create).await.unwrap();

    assert_eq!(catalog.pin.as_deref(), Some("5094310527"));
}

// ============================================================================
// Publish Lifecycle
// ============================================================================

#[tokio::test]
async fn test_publish_posts_without_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/catalogs/AD8CCDD5F9/publish"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "kind": "store#catalogPublish",
            "statusLink": "https://store.meplato.com/api/v2/catalogs/AD8CCDD5F9/publish/status"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let response = client.catalogs().publish("AD8CCDD5F9").await.unwrap();

    assert_eq!(response.kind.as_deref(), Some("store#catalogPublish"));
    assert!(response.status_link.is_some());

    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].body.is_empty());
}

#[tokio::test]
async fn test_publish_status_reports_progress() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/catalogs/AD8CCDD5F9/publish/status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "kind": "store#catalogPublishStatus",
            "busy": true,
            "currentStep": 3,
            "totalSteps": 6,
            "percent": 50
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let status = client.catalogs().publish_status("AD8CCDD5F9").await.unwrap();

    assert!(status.busy);
    assert!(!status.done);
    assert_eq!(status.percent, Some(50));
}

#[tokio::test]
async fn test_publish_conflict_surfaces_status_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/catalogs/AD8CCDD5F9/publish"))
        .respond_with(ResponseTemplate::new(409).set_body_json(serde_json::json!({
            "error": {"code": 409, "message": "A publish is already running"}
        })))
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let error = client.catalogs().publish("AD8CCDD5F9").await.unwrap_err();

    match error {
        StoreError::Status(status) => {
            assert_eq!(status.code, 409);
            assert_eq!(status.message, "A publish is already running");
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

// ============================================================================
// Purge
// ============================================================================

#[tokio::test]
async fn test_purge_deletes_area() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/catalogs/AD8CCDD5F9/work"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"kind": "store#catalogPurge"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let response = client
        .catalogs()
        .purge("AD8CCDD5F9", Area::Work)
        .await
        .unwrap();

    assert_eq!(response.kind.as_deref(), Some("store#catalogPurge"));
}
