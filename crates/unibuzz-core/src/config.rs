use crate::app_config::{AppConfig, SearchParams};
use crate::ConfigError;

pub const DEFAULT_SEARCH_ENDPOINT: &str = "https://api.bing.microsoft.com/v7.0/images/search";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if `BING_API_KEY` is missing or a value is invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if `BING_API_KEY` is missing or a value is invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so it can be tested with a `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    // A blank key is as useless as a missing one.
    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let optional = |var: &str, default: &str| -> Option<String> {
        let raw = or_default(var, default);
        let trimmed = raw.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let bing_api_key = require("BING_API_KEY")?;

    let search_endpoint = or_default("UNIBUZZ_SEARCH_ENDPOINT", DEFAULT_SEARCH_ENDPOINT);
    let search_params = SearchParams {
        license: optional("UNIBUZZ_SEARCH_LICENSE", "ShareCommercially"),
        image_filters: optional("UNIBUZZ_SEARCH_IMAGE_FILTERS", "Size:Medium+Size:Large"),
    };

    let records_path = PathBuf::from(or_default("UNIBUZZ_RECORDS_PATH", "university_data.json"));
    let output_dir = PathBuf::from(or_default("UNIBUZZ_OUTPUT_DIR", "."));
    let log_level = or_default("UNIBUZZ_LOG_LEVEL", "info");

    let request_timeout_secs = parse_u64("UNIBUZZ_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("UNIBUZZ_USER_AGENT", "unibuzz/0.1 (image-enrichment)");
    let max_concurrent_colleges = parse_usize("UNIBUZZ_MAX_CONCURRENT_COLLEGES", "1")?.max(1);

    Ok(AppConfig {
        bing_api_key,
        search_endpoint,
        search_params,
        records_path,
        output_dir,
        log_level,
        request_timeout_secs,
        user_agent,
        max_concurrent_colleges,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
