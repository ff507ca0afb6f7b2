//! Catalog and site configuration embedded at compile time.

use bevy::prelude::*;
use portfolio_core::error::ConfigError;
use portfolio_core::{Catalog, SiteConfig};

/// Written by build.rs after validation.
const CATALOG_JSON: &str = include_str!(concat!(env!("OUT_DIR"), "/catalog.json"));
const SITE_CONFIG_JSON: &str = include_str!("../assets/site_config.json");

#[derive(Resource, Clone)]
pub struct SiteData {
    pub catalog: Catalog,
    pub config: SiteConfig,
}

impl SiteData {
    /// A catalog that fails to parse is reported and replaced by an empty one.
    pub fn embedded() -> Result<Self, ConfigError> {
        let catalog = Catalog::from_json(CATALOG_JSON).unwrap_or_else(|err| {
            error!("{err}");
            Catalog::default()
        });
        Ok(Self {
            catalog,
            config: SiteConfig::from_json(SITE_CONFIG_JSON)?,
        })
    }
}

pub fn load_site_data(mut commands: Commands) {
    match SiteData::embedded() {
        Ok(site) => {
            info!(
                "Loaded {} catalog records for {}",
                site.catalog.len(),
                site.config.studio.name
            );
            commands.insert_resource(site);
        }
        Err(err) => error!("Site data unavailable, page stays static: {err}"),
    }
}
