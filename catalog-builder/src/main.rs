/// Portfolio catalog builder entry point.
mod converter;
mod discovery;
mod manifest;

use converter::ImageConverter;
use manifest::CatalogWriter;
use std::env;
use std::path::Path;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <input_dir> <output_dir>", args[0]);
        std::process::exit(1);
    }

    let input_dir = Path::new(&args[1]);
    let output_dir = Path::new(&args[2]);

    let sources = discovery::discover_sources(input_dir)?;
    if sources.is_empty() {
        return Err(format!("No portfolio images found under {}", input_dir.display()).into());
    }

    let converter = ImageConverter::new(output_dir);
    let converted = converter.convert_all(&sources)?;

    let writer = CatalogWriter::new(output_dir);
    writer.write(&converted)?;

    Ok(())
}
