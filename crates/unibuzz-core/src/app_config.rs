use std::path::PathBuf;

/// Fixed filter parameters sent with every image search.
///
/// `None` leaves the parameter off the request entirely.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchParams {
    pub license: Option<String>,
    pub image_filters: Option<String>,
}

#[derive(Clone)]
pub struct AppConfig {
    pub bing_api_key: String,
    pub search_endpoint: String,
    pub search_params: SearchParams,
    pub records_path: PathBuf,
    pub output_dir: PathBuf,
    pub log_level: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub max_concurrent_colleges: usize,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("bing_api_key", &"[redacted]")
            .field("search_endpoint", &self.search_endpoint)
            .field("search_params", &self.search_params)
            .field("records_path", &self.records_path)
            .field("output_dir", &self.output_dir)
            .field("log_level", &self.log_level)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("max_concurrent_colleges", &self.max_concurrent_colleges)
            .finish()
    }
}
