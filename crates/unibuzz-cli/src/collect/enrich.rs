//! Per-college enrichment: two searches, one download per hit.
//!
//! Search failures degrade the affected list to empty and download failures
//! drop the single locator; both are logged with the college id and name.
//! The only error that escapes [`Enricher::enrich`] is failing to create the
//! college's image directories.

use std::path::PathBuf;

use thiserror::Error;
use unibuzz_core::{College, EnrichmentResult, Locator};
use unibuzz_images::{Downloader, ImageSearchClient};

use super::paths::CollegeDirs;

pub(crate) const LOGO_RESULT_COUNT: u32 = 10;
pub(crate) const IMAGE_RESULT_COUNT: u32 = 30;

#[derive(Debug, Error)]
pub(crate) enum EnrichError {
    #[error("failed to prepare image directories under {path}: {source}")]
    PrepareDirs {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ImageKind {
    Logo,
    Campus,
}

impl ImageKind {
    pub(crate) fn query(self, college_name: &str) -> String {
        match self {
            ImageKind::Logo => format!("logo of {college_name} college"),
            ImageKind::Campus => format!("{college_name} college"),
        }
    }

    pub(crate) fn result_count(self) -> u32 {
        match self {
            ImageKind::Logo => LOGO_RESULT_COUNT,
            ImageKind::Campus => IMAGE_RESULT_COUNT,
        }
    }

    fn destination(self, dirs: &CollegeDirs, college_name: &str, rank: usize) -> PathBuf {
        match self {
            ImageKind::Logo => dirs.logo_path(rank),
            ImageKind::Campus => dirs.image_path(college_name, rank),
        }
    }

    fn label(self) -> &'static str {
        match self {
            ImageKind::Logo => "logo",
            ImageKind::Campus => "image",
        }
    }
}

/// Looks up and downloads logos and campus images for one college at a time.
pub(crate) struct Enricher {
    search: ImageSearchClient,
    downloader: Downloader,
    output_dir: PathBuf,
}

impl Enricher {
    pub(crate) fn new(
        search: ImageSearchClient,
        downloader: Downloader,
        output_dir: PathBuf,
    ) -> Self {
        Self {
            search,
            downloader,
            output_dir,
        }
    }

    /// Enrich one college.
    ///
    /// Always returns a result carrying the college's id and name once its
    /// directories exist, even if every search and download failed.
    ///
    /// # Errors
    ///
    /// Returns [`EnrichError::PrepareDirs`] if the image directories cannot
    /// be created. No search or download is attempted in that case.
    pub(crate) async fn enrich(&self, college: &College) -> Result<EnrichmentResult, EnrichError> {
        let dirs = CollegeDirs::new(&self.output_dir, &college.id);
        dirs.prepare().await.map_err(|e| EnrichError::PrepareDirs {
            path: dirs.root.display().to_string(),
            source: e,
        })?;

        let mut result = EnrichmentResult::for_college(college);
        result.logo_locators = self.fetch_kind(college, ImageKind::Logo, &dirs).await;
        result.image_locators = self.fetch_kind(college, ImageKind::Campus, &dirs).await;

        tracing::info!(
            college_id = %college.id,
            college = %college.name,
            logos = result.logo_locators.len(),
            images = result.image_locators.len(),
            "college enriched"
        );
        Ok(result)
    }

    /// Search for one kind of image and download every hit in rank order,
    /// returning the locators that were saved.
    async fn fetch_kind(
        &self,
        college: &College,
        kind: ImageKind,
        dirs: &CollegeDirs,
    ) -> Vec<Locator> {
        let query = kind.query(&college.name);
        let locators = match self.search.search(&query, kind.result_count()).await {
            Ok(locators) => locators,
            Err(e) => {
                tracing::warn!(
                    college_id = %college.id,
                    college = %college.name,
                    kind = kind.label(),
                    error = %e,
                    "image search failed; continuing with no results"
                );
                return Vec::new();
            }
        };

        let mut saved = Vec::with_capacity(locators.len());
        for (index, locator) in locators.into_iter().enumerate() {
            let rank = index + 1;
            let destination = kind.destination(dirs, &college.name, rank);
            match self.downloader.fetch(&locator, &destination).await {
                Ok(bytes) => {
                    tracing::debug!(
                        college_id = %college.id,
                        kind = kind.label(),
                        rank,
                        bytes,
                        path = %destination.display(),
                        "image saved"
                    );
                    saved.push(locator);
                }
                Err(e) => {
                    tracing::warn!(
                        college_id = %college.id,
                        college = %college.name,
                        kind = kind.label(),
                        rank,
                        url = %locator,
                        error = %e,
                        "failed to save {}; skipping",
                        kind.label()
                    );
                }
            }
        }
        saved
    }
}
