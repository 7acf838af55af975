//! On-disk layout for downloaded images.
//!
//! ```text
//! {output_dir}/img/{college_id}/logos/logo_{rank}.jpg
//! {output_dir}/img/{college_id}/images/{name}_{rank}.jpg
//! ```
//!
//! Ranks are 1-based search positions.

use std::path::{Path, PathBuf};

pub(crate) const IMG_DIR: &str = "img";

/// Per-college image directories.
#[derive(Debug, Clone)]
pub(crate) struct CollegeDirs {
    pub root: PathBuf,
    pub logos: PathBuf,
    pub images: PathBuf,
}

impl CollegeDirs {
    pub(crate) fn new(output_dir: &Path, college_id: &str) -> Self {
        let root = output_dir.join(IMG_DIR).join(college_id);
        Self {
            logos: root.join("logos"),
            images: root.join("images"),
            root,
        }
    }

    /// Create both directories. Idempotent.
    pub(crate) async fn prepare(&self) -> std::io::Result<()> {
        tokio::fs::create_dir_all(&self.logos).await?;
        tokio::fs::create_dir_all(&self.images).await
    }

    pub(crate) fn logo_path(&self, rank: usize) -> PathBuf {
        self.logos.join(format!("logo_{rank}.jpg"))
    }

    pub(crate) fn image_path(&self, college_name: &str, rank: usize) -> PathBuf {
        self.images
            .join(format!("{}_{rank}.jpg", sanitize_file_stem(college_name)))
    }
}

/// Make a college name safe to use as a file-name stem.
///
/// Path separators, characters Windows rejects, and control characters become
/// `_`. Spaces are kept (`"Acme U"` stays `"Acme U"`). Falls back to `image`
/// when nothing usable is left.
pub(crate) fn sanitize_file_stem(name: &str) -> String {
    let replaced: String = name
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();

    let trimmed = replaced.trim().trim_matches('.');
    if trimmed.is_empty() {
        "image".to_string()
    } else {
        trimmed.to_string()
    }
}
