use serde::{Deserialize, Serialize};

use crate::{College, Locator};

/// Locators retrieved for one college.
///
/// Both lists keep search-rank order and hold only locators whose download
/// succeeded, so gaps in rank are expected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrichmentResult {
    pub id: String,
    pub name: String,
    #[serde(rename = "logo")]
    pub logo_locators: Vec<Locator>,
    #[serde(rename = "images")]
    pub image_locators: Vec<Locator>,
}

impl EnrichmentResult {
    /// An empty result carrying the college's identity.
    #[must_use]
    pub fn for_college(college: &College) -> Self {
        Self {
            id: college.id.clone(),
            name: college.name.clone(),
            logo_locators: Vec::new(),
            image_locators: Vec::new(),
        }
    }
}

/// All results of one run, in input order. Serializes as a bare JSON array.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BatchReport {
    pub results: Vec<EnrichmentResult>,
}

impl BatchReport {
    #[must_use]
    pub fn len(&self) -> usize {
        self.results.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn acme() -> EnrichmentResult {
        EnrichmentResult {
            id: "1".to_string(),
            name: "Acme U".to_string(),
            logo_locators: vec!["https://img.example/l1.png".to_string()],
            image_locators: vec![
                "https://img.example/i1.jpg".to_string(),
                "https://img.example/i2.jpg".to_string(),
            ],
        }
    }

    #[test]
    fn serializes_with_manifest_keys() {
        let value = serde_json::to_value(BatchReport {
            results: vec![acme()],
        })
        .unwrap();
        assert_eq!(
            value,
            serde_json::json!([{
                "id": "1",
                "name": "Acme U",
                "logo": ["https://img.example/l1.png"],
                "images": ["https://img.example/i1.jpg", "https://img.example/i2.jpg"]
            }])
        );
    }

    #[test]
    fn json_round_trip_preserves_order() {
        let report = BatchReport {
            results: vec![
                acme(),
                EnrichmentResult {
                    id: "2".to_string(),
                    name: "Beta".to_string(),
                    logo_locators: vec![],
                    image_locators: vec!["b".to_string(), "a".to_string()],
                },
            ],
        };
        let text = serde_json::to_string_pretty(&report).unwrap();
        let back: BatchReport = serde_json::from_str(&text).unwrap();
        assert_eq!(back, report);
    }

    #[test]
    fn for_college_starts_empty() {
        let college = College {
            id: "7".to_string(),
            name: "Gamma College".to_string(),
        };
        let result = EnrichmentResult::for_college(&college);
        assert_eq!(result.id, "7");
        assert_eq!(result.name, "Gamma College");
        assert!(result.logo_locators.is_empty());
        assert!(result.image_locators.is_empty());
    }
}
