// build.rs
use std::{env, fs, path::PathBuf};

use serde_json::Value;

/// Checks the project catalog before it is embedded and writes a compact copy
/// to OUT_DIR for `include_str!`.
fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=assets/catalog.json");

    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").unwrap());
    let catalog_path = manifest_dir.join("assets").join("catalog.json");
    let raw = fs::read_to_string(&catalog_path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {e}", catalog_path.display()));

    let catalog: Value = serde_json::from_str(&raw).expect("catalog.json is not valid JSON");
    let projects = catalog["projects"]
        .as_array()
        .expect("catalog.json must contain a 'projects' array");

    for (index, project) in projects.iter().enumerate() {
        for field in ["title", "category", "image"] {
            let value = project[field].as_str().unwrap_or_else(|| {
                panic!("project {index} is missing string field '{field}'")
            });
            if value.trim().is_empty() {
                panic!("project {index} has an empty '{field}'");
            }
        }
    }

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let json_content = serde_json::to_string(&catalog).unwrap();
    fs::write(out_dir.join("catalog.json"), json_content)
        .expect("Failed to write catalog.json to OUT_DIR");

    println!(
        "cargo:warning=Embedded catalog with {} projects",
        projects.len()
    );
}
