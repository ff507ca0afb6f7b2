/// Image resizing and re-encoding for the web catalog.
use crate::discovery::SourceImage;
use constants::catalog::{IMAGE_URL_PREFIX, JPEG_QUALITY, MAX_IMAGE_EDGE};
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use indicatif::{ProgressBar, ProgressStyle};
use portfolio_core::ProjectRecord;
use rayon::prelude::*;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

/// A source image after it has been written to the output tree.
#[derive(Debug, Clone)]
pub struct ConvertedImage {
    pub record: ProjectRecord,
    pub width: u32,
    pub height: u32,
}

/// Writes resized JPEGs under `<output>/images/portfolio/<category>/`.
pub struct ImageConverter {
    output_dir: PathBuf,
}

impl ImageConverter {
    pub fn new(output_dir: &Path) -> Self {
        Self {
            output_dir: output_dir.to_path_buf(),
        }
    }

    /// Converts every source in parallel. Output keeps the input order.
    pub fn convert_all(
        &self,
        sources: &[SourceImage],
    ) -> Result<Vec<ConvertedImage>, Box<dyn std::error::Error>> {
        let pb = ProgressBar::new(sources.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{bar:40.green/blue}] {pos}/{len} images ({percent}%) {msg}")
                .unwrap()
                .progress_chars("█▉▊▋▌▍▎▏"),
        );
        pb.set_message("Resizing images");

        let converted = sources
            .par_iter()
            .map(|source| {
                let result = self
                    .convert_one(source)
                    .map_err(|err| format!("{}: {}", source.path.display(), err));
                pb.inc(1);
                result
            })
            .collect::<Result<Vec<_>, String>>()?;

        pb.finish_with_message("Images resized");
        Ok(converted)
    }

    fn convert_one(
        &self,
        source: &SourceImage,
    ) -> Result<ConvertedImage, Box<dyn std::error::Error>> {
        let image = image::open(&source.path)?;
        let (width, height) = fit_within(image.width(), image.height(), MAX_IMAGE_EDGE);
        let resized = if (width, height) == (image.width(), image.height()) {
            image
        } else {
            image.resize_exact(width, height, FilterType::Lanczos3)
        };

        let category_dir = self
            .output_dir
            .join(IMAGE_URL_PREFIX)
            .join(&source.category);
        fs::create_dir_all(&category_dir)?;

        let file_name = format!("{}.jpg", source.stem);
        let writer = BufWriter::new(File::create(category_dir.join(&file_name))?);
        // JPEG has no alpha channel.
        JpegEncoder::new_with_quality(writer, JPEG_QUALITY).encode_image(&resized.to_rgb8())?;

        Ok(ConvertedImage {
            record: ProjectRecord {
                title: title_from_stem(&source.stem),
                category: source.category.clone(),
                image: format!("{}/{}/{}", IMAGE_URL_PREFIX, source.category, file_name),
            },
            width,
            height,
        })
    }
}

/// Scales `(width, height)` down so the longer edge is at most `max_edge`.
/// Smaller images are never enlarged.
pub fn fit_within(width: u32, height: u32, max_edge: u32) -> (u32, u32) {
    let longest = width.max(height);
    if longest <= max_edge || longest == 0 {
        return (width, height);
    }
    let scale = max_edge as f64 / longest as f64;
    let scaled = |v: u32| ((v as f64 * scale).round() as u32).max(1);
    (scaled(width), scaled(height))
}

/// `brand-identity_02` becomes `Brand Identity 02`.
pub fn title_from_stem(stem: &str) -> String {
    stem.split(['-', '_', ' '])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};
    use tempfile::tempdir;

    #[test]
    fn fit_within_preserves_aspect_and_never_upscales() {
        assert_eq!(fit_within(2400, 1200, 1200), (1200, 600));
        assert_eq!(fit_within(900, 3600, 1200), (300, 1200));
        assert_eq!(fit_within(640, 480, 1200), (640, 480));
        assert_eq!(fit_within(5000, 1, 1200), (1200, 1));
    }

    #[test]
    fn titles_are_derived_from_file_names() {
        assert_eq!(title_from_stem("brand-identity_02"), "Brand Identity 02");
        assert_eq!(title_from_stem("nile--cafe"), "Nile Cafe");
        assert_eq!(title_from_stem(""), "");
    }

    #[test]
    fn converts_png_with_alpha_to_jpeg() {
        let input = tempdir().unwrap();
        let output = tempdir().unwrap();

        let source_path = input.path().join("poster-one.png");
        RgbaImage::from_pixel(40, 20, Rgba([200, 40, 40, 128]))
            .save(&source_path)
            .unwrap();

        let converter = ImageConverter::new(output.path());
        let converted = converter
            .convert_all(&[SourceImage {
                path: source_path,
                category: "print".into(),
                stem: "poster-one".into(),
            }])
            .unwrap();

        assert_eq!(converted.len(), 1);
        let record = &converted[0].record;
        assert_eq!(record.title, "Poster One");
        assert_eq!(record.image, "images/portfolio/print/poster-one.jpg");
        assert_eq!((converted[0].width, converted[0].height), (40, 20));

        let written = image::open(output.path().join(&record.image)).unwrap();
        assert_eq!((written.width(), written.height()), (40, 20));
    }

    #[test]
    fn unreadable_source_reports_its_path() {
        let input = tempdir().unwrap();
        let output = tempdir().unwrap();
        let bogus = input.path().join("broken.jpg");
        fs::write(&bogus, b"not an image").unwrap();

        let err = ImageConverter::new(output.path())
            .convert_all(&[SourceImage {
                path: bogus,
                category: "web".into(),
                stem: "broken".into(),
            }])
            .unwrap_err();
        assert!(err.to_string().contains("broken.jpg"));
    }
}
