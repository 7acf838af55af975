pub mod app_config;
pub mod colleges;
pub mod config;
pub mod report;

pub use app_config::{AppConfig, SearchParams};
pub use colleges::{derive_college_id, load_colleges, parse_colleges, College};
pub use config::{load_app_config, load_app_config_from_env};
pub use report::{BatchReport, EnrichmentResult};

use thiserror::Error;

/// Image URL returned by the search provider.
pub type Locator = String;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read records file {path}: {source}")]
    RecordsFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse records file {path}: {source}")]
    RecordsFileParse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("records validation failed: {0}")]
    Validation(String),
}
