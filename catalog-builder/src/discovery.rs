/// Source image discovery for category-organised input folders.
use constants::catalog::SOURCE_EXTENSIONS;
use constants::category::is_known_category;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// One source image found under `<input>/<category>/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceImage {
    pub path: PathBuf,
    pub category: String,
    /// File name without extension, used for the output name and title.
    pub stem: String,
}

fn has_source_extension(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .is_some_and(|ext| SOURCE_EXTENSIONS.contains(&ext.as_str()))
}

/// Scans every known category folder directly under `input_dir`.
/// Unknown folders and stray files are skipped with a note.
pub fn discover_sources(input_dir: &Path) -> io::Result<Vec<SourceImage>> {
    let mut sources = Vec::new();

    for entry in fs::read_dir(input_dir)? {
        let path = entry?.path();
        if !path.is_dir() {
            continue;
        }

        let category = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        if !is_known_category(&category) {
            println!("Skipping unknown category folder: {}", path.display());
            continue;
        }

        for file in fs::read_dir(&path)? {
            let file_path = file?.path();
            if !file_path.is_file() || !has_source_extension(&file_path) {
                continue;
            }

            let stem = file_path
                .file_stem()
                .unwrap_or_default()
                .to_string_lossy()
                .to_string();
            sources.push(SourceImage {
                path: file_path,
                category: category.clone(),
                stem,
            });
        }
    }

    // Stable output regardless of directory iteration order.
    sources.sort_by(|a, b| (&a.category, &a.stem).cmp(&(&b.category, &b.stem)));

    println!("Found {} source images", sources.len());
    Ok(sources)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, b"").unwrap();
    }

    #[test]
    fn finds_images_in_known_categories_only() {
        let dir = tempdir().unwrap();
        touch(&dir.path().join("web/site-b.PNG"));
        touch(&dir.path().join("web/site-a.jpg"));
        touch(&dir.path().join("branding/logo.webp"));
        touch(&dir.path().join("branding/notes.txt"));
        touch(&dir.path().join("drafts/sketch.jpg"));
        touch(&dir.path().join("loose.jpg"));

        let sources = discover_sources(dir.path()).unwrap();
        let found: Vec<(&str, &str)> = sources
            .iter()
            .map(|s| (s.category.as_str(), s.stem.as_str()))
            .collect();

        assert_eq!(
            found,
            vec![("branding", "logo"), ("web", "site-a"), ("web", "site-b")]
        );
    }

    #[test]
    fn empty_input_yields_nothing() {
        let dir = tempdir().unwrap();
        assert!(discover_sources(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn missing_input_is_an_error() {
        let dir = tempdir().unwrap();
        assert!(discover_sources(&dir.path().join("absent")).is_err());
    }
}
