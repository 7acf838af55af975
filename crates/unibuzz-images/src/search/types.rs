//! Response types for the image search endpoint.
//!
//! Only `value[].contentUrl` is read. The envelope carries much more
//! (`_type`, `webSearchUrl`, `totalEstimatedMatches`, thumbnails, sizes) which
//! serde ignores.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(crate) struct ImageSearchResponse {
    pub value: Vec<ImageHit>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ImageHit {
    #[serde(rename = "contentUrl", default)]
    pub content_url: Option<String>,
}
