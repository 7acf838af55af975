use super::*;

fn test_client(params: SearchParams) -> ImageSearchClient {
    ImageSearchClient::with_endpoint(
        "test-key",
        params,
        5,
        "unibuzz-test/0.1",
        "https://api.bing.microsoft.com/v7.0/images/search",
    )
    .expect("client construction should not fail")
}

fn default_params() -> SearchParams {
    SearchParams {
        license: Some("ShareCommercially".to_string()),
        image_filters: Some("Size:Medium+Size:Large".to_string()),
    }
}

#[test]
fn build_url_includes_query_count_and_filters() {
    let client = test_client(default_params());
    let url = client.build_url("logo of Acme U college", 10);
    let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
    assert_eq!(
        pairs,
        vec![
            ("q".to_string(), "logo of Acme U college".to_string()),
            ("count".to_string(), "10".to_string()),
            ("license".to_string(), "ShareCommercially".to_string()),
            (
                "imageFilters".to_string(),
                "Size:Medium+Size:Large".to_string()
            ),
        ]
    );
}

#[test]
fn build_url_encodes_plus_in_filters() {
    let client = test_client(default_params());
    let url = client.build_url("Acme U college", 30);
    assert!(
        url.as_str().contains("imageFilters=Size%3AMedium%2BSize%3ALarge"),
        "filter value should be percent-encoded: {url}"
    );
}

#[test]
fn build_url_omits_disabled_filters() {
    let client = test_client(SearchParams::default());
    let url = client.build_url("Acme U college", 30);
    assert_eq!(
        url.as_str(),
        "https://api.bing.microsoft.com/v7.0/images/search?q=Acme+U+college&count=30"
    );
}

#[test]
fn with_endpoint_rejects_invalid_url() {
    let result =
        ImageSearchClient::with_endpoint("k", SearchParams::default(), 5, "ua", "not a url");
    assert!(
        matches!(result, Err(SearchError::InvalidEndpoint { .. })),
        "expected InvalidEndpoint"
    );
}

#[test]
fn response_skips_hits_without_content_url() {
    let parsed: ImageSearchResponse = serde_json::from_str(
        r#"{"_type": "Images", "value": [{"contentUrl": "https://a"}, {"name": "no url"}]}"#,
    )
    .unwrap();
    let urls: Vec<String> = parsed
        .value
        .into_iter()
        .filter_map(|h| h.content_url)
        .collect();
    assert_eq!(urls, vec!["https://a".to_string()]);
}
