/// Longest edge, in pixels, of images written by the catalog builder.
pub const MAX_IMAGE_EDGE: u32 = 1200;

/// JPEG quality used for resized portfolio images.
pub const JPEG_QUALITY: u8 = 82;

/// Source extensions picked up when scanning a category folder.
pub const SOURCE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp"];

/// Locator prefix written into `catalog.json`, relative to the site root.
pub const IMAGE_URL_PREFIX: &str = "images/portfolio";

pub const CATALOG_FILE_NAME: &str = "catalog.json";
