//! Integration tests for job monitoring.

use meplato_store::{BaseUrl, Credentials, StoreClient, StoreConfig};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a client whose base URL points at the mock server.
fn create_test_client(server: &MockServer) -> StoreClient {
    let config = StoreConfig::builder()
        .base_url(BaseUrl::new(server.uri()).unwrap())
        .credentials(Credentials::new("test-token", "").unwrap())
        .build();
    StoreClient::new(config)
}

#[tokio::test]
async fn test_get_job_by_id() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/jobs/58097dc3-b279-49b5-a5da-23eb1c77d840"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "kind": "store#job",
            "id": "58097dc3-b279-49b5-a5da-23eb1c77d840",
            "state": "succeeded",
            "topic": "import",
            "catalogId": 81,
            "catalogName": "Demo catalog",
            "created": "2015-09-13T08:09:37Z"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let job = client
        .jobs()
        .get("58097dc3-b279-49b5-a5da-23eb1c77d840")
        .await
        .unwrap();

    assert_eq!(
        job.id.as_deref(),
        Some("58097dc3-b279-49b5-a5da-23eb1c77d840")
    );
    assert_eq!(job.state.as_deref(), Some("succeeded"));
    assert_eq!(job.catalog_id, Some(81));
    assert!(job.created.is_some());
}

#[tokio::test]
async fn test_search_jobs_passes_filters() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/jobs"))
        .and(query_param("merchantId", "4"))
        .and(query_param("state", "failed"))
        .and(query_param("take", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "kind": "store#jobs",
            "totalItems": 1,
            "items": [{
                "kind": "store#job",
                "id": "58097dc3-b279-49b5-a5da-23eb1c77d840",
                "state": "failed",
                "topic": "validation"
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let response = client
        .jobs()
        .search()
        .merchant_id(4)
        .state("failed")
        .take(10)
        .send()
        .await
        .unwrap();

    assert_eq!(response.total_items, 1);
    assert_eq!(response.items[0].topic.as_deref(), Some("validation"));
}

#[tokio::test]
async fn test_search_jobs_without_filters_has_bare_path() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/jobs"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"kind": "store#jobs"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let response = client.jobs().search().send().await.unwrap();

    assert!(response.items.is_empty());

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.query(), None);
}
