//! HTTP client for the Bing Image Search v7 REST endpoint.

mod types;

use std::time::Duration;

use reqwest::{Client, Url};
use unibuzz_core::{Locator, SearchParams};

use crate::error::SearchError;
use types::ImageSearchResponse;

pub use unibuzz_core::config::DEFAULT_SEARCH_ENDPOINT;

const SUBSCRIPTION_KEY_HEADER: &str = "Ocp-Apim-Subscription-Key";

/// Client for an image-search endpoint.
///
/// Every call is exactly one outbound request: no retries and no caching, so
/// identical queries fetch again. Use [`ImageSearchClient::new`] for production
/// or [`ImageSearchClient::with_endpoint`] to point at a mock server in tests.
pub struct ImageSearchClient {
    client: Client,
    api_key: String,
    endpoint: Url,
    params: SearchParams,
}

impl ImageSearchClient {
    /// Creates a client pointed at the production Bing endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(
        api_key: &str,
        params: SearchParams,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, SearchError> {
        Self::with_endpoint(
            api_key,
            params,
            timeout_secs,
            user_agent,
            DEFAULT_SEARCH_ENDPOINT,
        )
    }

    /// Creates a client with a custom endpoint URL.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`SearchError::InvalidEndpoint`] if
    /// `endpoint` is not a valid URL.
    pub fn with_endpoint(
        api_key: &str,
        params: SearchParams,
        timeout_secs: u64,
        user_agent: &str,
        endpoint: &str,
    ) -> Result<Self, SearchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        let endpoint = Url::parse(endpoint).map_err(|e| SearchError::InvalidEndpoint {
            endpoint: endpoint.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            endpoint,
            params,
        })
    }

    /// Searches for images matching `query` and returns their content URLs in
    /// rank order.
    ///
    /// `count` is a hint: the provider may return fewer results, and any
    /// surplus beyond `count` is dropped. Results without a `contentUrl` are
    /// skipped.
    ///
    /// # Errors
    ///
    /// - [`SearchError::InvalidRequest`] if `query` is blank or `count` is 0
    ///   (no request is sent).
    /// - [`SearchError::UnexpectedStatus`] on any non-2xx status.
    /// - [`SearchError::Http`] on network failure.
    /// - [`SearchError::Deserialize`] if the body is not a search result document.
    pub async fn search(&self, query: &str, count: u32) -> Result<Vec<Locator>, SearchError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(SearchError::InvalidRequest(
                "query must be non-empty".to_string(),
            ));
        }
        if count == 0 {
            return Err(SearchError::InvalidRequest(
                "count must be at least 1".to_string(),
            ));
        }

        let url = self.build_url(query, count);
        let response = self
            .client
            .get(url)
            .header(SUBSCRIPTION_KEY_HEADER, &self.api_key)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::UnexpectedStatus {
                status: status.as_u16(),
                query: query.to_owned(),
            });
        }

        let body = response.text().await?;
        let parsed = serde_json::from_str::<ImageSearchResponse>(&body).map_err(|e| {
            SearchError::Deserialize {
                context: format!("image search for \"{query}\""),
                source: e,
            }
        })?;

        let limit = usize::try_from(count).unwrap_or(usize::MAX);
        let locators: Vec<Locator> = parsed
            .value
            .into_iter()
            .filter_map(|hit| hit.content_url)
            .filter(|url| !url.trim().is_empty())
            .take(limit)
            .collect();

        tracing::debug!(query, count, returned = locators.len(), "image search complete");
        Ok(locators)
    }

    /// Builds the request URL with percent-encoded query parameters.
    fn build_url(&self, query: &str, count: u32) -> Url {
        let mut url = self.endpoint.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("q", query);
            pairs.append_pair("count", &count.to_string());
            if let Some(license) = &self.params.license {
                pairs.append_pair("license", license);
            }
            if let Some(filters) = &self.params.image_filters {
                pairs.append_pair("imageFilters", filters);
            }
        }
        url
    }
}

#[cfg(test)]
#[path = "../search_test.rs"]
mod tests;
