use std::sync::Arc;

use constants::category::PARTNER_CATEGORY;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::portfolio::Filter;

/// One portfolio entry as shipped in `catalog.json`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ProjectRecord {
    pub title: String,
    pub category: String,
    /// Image locator, fetched lazily once the item nears the viewport.
    pub image: String,
}

/// On-disk catalog layout written by the catalog builder.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogFile {
    pub projects: Vec<ProjectRecord>,
}

/// Fixed, ordered sequence of project records.
///
/// Cloning is cheap and never copies records; there is no way to mutate a
/// catalog once built.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: Arc<[ProjectRecord]>,
}

impl Catalog {
    pub fn new(records: Vec<ProjectRecord>) -> Self {
        Self {
            records: records.into(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let file: CatalogFile = serde_json::from_str(json).map_err(|source| ConfigError::Parse {
            what: "catalog",
            source,
        })?;
        Ok(Self::new(file.projects))
    }

    pub fn records(&self) -> &[ProjectRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records matching `filter`, in catalog order.
    pub fn matching<'a, 'f>(
        &'a self,
        filter: &'f Filter,
    ) -> impl Iterator<Item = &'a ProjectRecord> {
        self.records.iter().filter(move |record| filter.matches(record))
    }

    pub fn matching_count(&self, filter: &Filter) -> usize {
        self.matching(filter).count()
    }

    /// Records shown in the partners strip.
    pub fn partners(&self) -> Vec<&ProjectRecord> {
        self.records
            .iter()
            .filter(|record| record.category == PARTNER_CATEGORY)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_catalog_file_in_order() {
        let json = r#"{"projects": [
            {"title": "A", "category": "web", "image": "a.webp"},
            {"title": "B", "category": "branding", "image": "b.webp"}
        ]}"#;
        let catalog = Catalog::from_json(json).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.records()[0].title, "A");
        assert_eq!(catalog.records()[1].category, "branding");
    }

    #[test]
    fn rejects_malformed_catalog() {
        let err = Catalog::from_json(r#"{"projects": [{"title": 3}]}"#).unwrap_err();
        assert!(err.to_string().starts_with("invalid catalog"));
    }

    #[test]
    fn partners_are_branding_records() {
        let catalog = Catalog::new(vec![
            ProjectRecord {
                title: "Logo".into(),
                category: "branding".into(),
                image: "logo.webp".into(),
            },
            ProjectRecord {
                title: "Site".into(),
                category: "web".into(),
                image: "site.webp".into(),
            },
        ]);
        let partners = catalog.partners();
        assert_eq!(partners.len(), 1);
        assert_eq!(partners[0].title, "Logo");
    }
}
