/// Catalog manifest output consumed by the web binary.
use crate::converter::ConvertedImage;
use constants::catalog::CATALOG_FILE_NAME;
use constants::category::{CATEGORY_MAP, get_category_label};
use portfolio_core::catalog::CatalogFile;
use std::fs;
use std::path::{Path, PathBuf};

pub struct CatalogWriter {
    output_dir: PathBuf,
}

impl CatalogWriter {
    pub fn new(output_dir: &Path) -> Self {
        Self {
            output_dir: output_dir.to_path_buf(),
        }
    }

    pub fn catalog_path(&self) -> PathBuf {
        self.output_dir.join(CATALOG_FILE_NAME)
    }

    /// Writes `catalog.json` with records grouped in category display order,
    /// then prints a per-category summary.
    pub fn write(&self, images: &[ConvertedImage]) -> Result<CatalogFile, Box<dyn std::error::Error>> {
        let catalog = build_catalog(images);

        fs::create_dir_all(&self.output_dir)?;
        let path = self.catalog_path();
        fs::write(&path, serde_json::to_string_pretty(&catalog)?)?;

        println!("Catalog written: {}", path.display());
        println!("  Projects: {}", catalog.projects.len());
        for info in CATEGORY_MAP {
            let count = catalog
                .projects
                .iter()
                .filter(|record| record.category == info.tag)
                .count();
            if count > 0 {
                println!("  {}: {}", get_category_label(info.tag), count);
            }
        }

        Ok(catalog)
    }
}

/// Orders records by their category's position in the filter bar, keeping
/// the incoming order within a category.
pub fn build_catalog(images: &[ConvertedImage]) -> CatalogFile {
    let rank = |tag: &str| {
        CATEGORY_MAP
            .iter()
            .position(|info| info.tag == tag)
            .unwrap_or(CATEGORY_MAP.len())
    };

    let mut projects: Vec<_> = images.iter().map(|image| image.record.clone()).collect();
    projects.sort_by_key(|record| rank(&record.category));

    CatalogFile { projects }
}

#[cfg(test)]
mod tests {
    use super::*;
    use portfolio_core::{Catalog, ProjectRecord};
    use tempfile::tempdir;

    fn converted(title: &str, category: &str) -> ConvertedImage {
        ConvertedImage {
            record: ProjectRecord {
                title: title.into(),
                category: category.into(),
                image: format!("images/portfolio/{category}/{title}.jpg"),
            },
            width: 10,
            height: 10,
        }
    }

    #[test]
    fn records_follow_category_order() {
        let catalog = build_catalog(&[
            converted("site", "web"),
            converted("box", "packaging"),
            converted("logo", "branding"),
            converted("landing", "web"),
        ]);
        let titles: Vec<&str> = catalog.projects.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["logo", "site", "landing", "box"]);
    }

    #[test]
    fn written_catalog_loads_in_the_site() {
        let dir = tempdir().unwrap();
        let writer = CatalogWriter::new(&dir.path().join("out"));
        writer
            .write(&[converted("flyer", "print"), converted("logo", "branding")])
            .unwrap();

        let json = fs::read_to_string(writer.catalog_path()).unwrap();
        let catalog = Catalog::from_json(&json).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.records()[0].title, "logo");
        assert_eq!(catalog.partners().len(), 1);
    }
}
