pub mod download;
pub mod error;
pub mod search;

pub use download::Downloader;
pub use error::{DownloadError, SearchError};
pub use search::ImageSearchClient;
