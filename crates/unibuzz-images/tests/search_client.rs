//! Integration tests for `ImageSearchClient::search` using wiremock HTTP mocks.

use serde_json::json;
use unibuzz_core::SearchParams;
use unibuzz_images::{ImageSearchClient, SearchError};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(endpoint: &str) -> ImageSearchClient {
    let params = SearchParams {
        license: Some("ShareCommercially".to_string()),
        image_filters: Some("Size:Medium+Size:Large".to_string()),
    };
    ImageSearchClient::with_endpoint("test-key", params, 5, "unibuzz-test/0.1", endpoint)
        .expect("client construction should not fail")
}

fn endpoint(server: &MockServer) -> String {
    format!("{}/v7.0/images/search", server.uri())
}

fn hits(urls: &[&str]) -> serde_json::Value {
    let value: Vec<serde_json::Value> = urls
        .iter()
        .map(|u| json!({ "contentUrl": u, "name": "hit" }))
        .collect();
    json!({ "_type": "Images", "value": value })
}

#[tokio::test]
async fn search_sends_credential_and_params_and_returns_urls_in_rank_order() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v7.0/images/search"))
        .and(header("Ocp-Apim-Subscription-Key", "test-key"))
        .and(query_param("q", "logo of Acme U college"))
        .and(query_param("count", "10"))
        .and(query_param("license", "ShareCommercially"))
        .and(query_param("imageFilters", "Size:Medium+Size:Large"))
        .respond_with(ResponseTemplate::new(200).set_body_json(hits(&[
            "https://img.example/a.png",
            "https://img.example/b.png",
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&endpoint(&server));
    let urls = client
        .search("logo of Acme U college", 10)
        .await
        .expect("search should succeed");

    assert_eq!(
        urls,
        vec![
            "https://img.example/a.png".to_string(),
            "https://img.example/b.png".to_string()
        ]
    );
}

#[tokio::test]
async fn search_truncates_to_requested_count() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(hits(&["u1", "u2", "u3", "u4", "u5"])),
        )
        .mount(&server)
        .await;

    let client = test_client(&endpoint(&server));
    let urls = client.search("Acme U college", 3).await.unwrap();
    assert_eq!(urls, vec!["u1", "u2", "u3"]);
}

#[tokio::test]
async fn search_returns_empty_vec_when_provider_has_no_hits() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(hits(&[])))
        .mount(&server)
        .await;

    let client = test_client(&endpoint(&server));
    let urls = client.search("Nowhere college", 10).await.unwrap();
    assert!(urls.is_empty());
}

#[tokio::test]
async fn search_maps_non_success_status_to_unexpected_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401).set_body_string("bad key"))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&endpoint(&server));
    let err = client.search("Acme U college", 30).await.unwrap_err();
    assert!(
        matches!(err, SearchError::UnexpectedStatus { status: 401, ref query } if query == "Acme U college"),
        "expected UnexpectedStatus(401), got: {err:?}"
    );
}

#[tokio::test]
async fn search_does_not_retry_server_errors() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&endpoint(&server));
    let result = client.search("Acme U college", 30).await;
    assert!(matches!(
        result,
        Err(SearchError::UnexpectedStatus { status: 503, .. })
    ));
}

#[tokio::test]
async fn search_maps_malformed_payload_to_deserialize_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "results": [] })))
        .mount(&server)
        .await;

    let client = test_client(&endpoint(&server));
    let err = client.search("Acme U college", 30).await.unwrap_err();
    assert!(
        matches!(err, SearchError::Deserialize { .. }),
        "expected Deserialize, got: {err:?}"
    );
}

#[tokio::test]
async fn search_rejects_blank_query_and_zero_count_without_a_request() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(hits(&["u1"])))
        .expect(0)
        .mount(&server)
        .await;

    let client = test_client(&endpoint(&server));
    assert!(matches!(
        client.search("   ", 10).await,
        Err(SearchError::InvalidRequest(_))
    ));
    assert!(matches!(
        client.search("Acme U college", 0).await,
        Err(SearchError::InvalidRequest(_))
    ));
}

#[tokio::test]
async fn identical_queries_fetch_again() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(hits(&["u1"])))
        .expect(2)
        .mount(&server)
        .await;

    let client = test_client(&endpoint(&server));
    client.search("Acme U college", 1).await.unwrap();
    client.search("Acme U college", 1).await.unwrap();
}
