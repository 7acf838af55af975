//! Input records: the colleges to enrich.
//!
//! The records file is the JSON array produced by the university scraper.
//! Only `id` and `name` are read; every other field is ignored.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct College {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(u64),
}

#[derive(Debug, Deserialize)]
struct RawCollege {
    #[serde(default)]
    id: Option<RawId>,
    name: String,
}

/// Derive a stable college id from its name: the first 16 hex chars of
/// SHA-256 over the name, the same scheme the scraper uses when it writes ids.
#[must_use]
pub fn derive_college_id(name: &str) -> String {
    use sha2::{Digest, Sha256};

    let mut hex = format!("{:x}", Sha256::digest(name.as_bytes()));
    hex.truncate(16);
    hex
}

/// Load and validate colleges from a JSON records file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_colleges(path: &Path) -> Result<Vec<College>, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::RecordsFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_colleges(&content).map_err(|e| match e {
        ConfigError::RecordsFileParse { source, .. } => ConfigError::RecordsFileParse {
            path: path.display().to_string(),
            source,
        },
        other => other,
    })
}

/// Parse and validate colleges from JSON text.
///
/// Records without an `id` get one from [`derive_college_id`].
///
/// # Errors
///
/// Returns `ConfigError::RecordsFileParse` for malformed JSON and
/// `ConfigError::Validation` for empty names, unusable ids, or duplicate ids.
pub fn parse_colleges(json: &str) -> Result<Vec<College>, ConfigError> {
    let raw: Vec<RawCollege> =
        serde_json::from_str(json).map_err(|e| ConfigError::RecordsFileParse {
            path: "<inline>".to_string(),
            source: e,
        })?;

    let colleges: Vec<College> = raw
        .into_iter()
        .map(|r| {
            let name = r.name.trim().to_string();
            let id = match r.id {
                Some(RawId::Text(id)) => id.trim().to_string(),
                Some(RawId::Number(n)) => n.to_string(),
                None => derive_college_id(&name),
            };
            College { id, name }
        })
        .collect();

    validate_colleges(&colleges)?;
    Ok(colleges)
}

fn validate_colleges(colleges: &[College]) -> Result<(), ConfigError> {
    let mut seen_ids = HashSet::new();

    for (index, college) in colleges.iter().enumerate() {
        if college.name.is_empty() {
            return Err(ConfigError::Validation(format!(
                "record {index} has an empty name"
            )));
        }

        // The id becomes a directory under img/.
        if college.id.is_empty()
            || college.id == "."
            || college.id == ".."
            || college.id.contains(['/', '\\'])
        {
            return Err(ConfigError::Validation(format!(
                "college '{}' has unusable id '{}'",
                college.name, college.id
            )));
        }

        if !seen_ids.insert(college.id.as_str()) {
            return Err(ConfigError::Validation(format!(
                "duplicate college id: '{}' (from college '{}')",
                college.id, college.name
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "colleges_test.rs"]
mod tests;
