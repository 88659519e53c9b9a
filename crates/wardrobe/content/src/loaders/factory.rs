//! Content factory for loading wardrobe data from a directory.

use std::path::{Path, PathBuf};

use wardrobe_core::{Catalog, WardrobeConfig};

use crate::loaders::{CatalogLoader, ConfigLoader, LoadResult};

/// Content factory that loads all wardrobe content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── wardrobe.ron   catalog (required)
/// └── config.toml    engine tuning (optional)
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub const CATALOG_FILE: &'static str = "wardrobe.ron";
    pub const CONFIG_FILE: &'static str = "config.toml";

    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load the catalog from `wardrobe.ron`.
    pub fn load_catalog(&self) -> LoadResult<Catalog> {
        let path = self.data_dir.join(Self::CATALOG_FILE);
        let catalog = CatalogLoader::load(&path)?;
        tracing::info!(
            "loaded catalog from {} ({} rods, {} zones)",
            path.display(),
            catalog.rods.len(),
            catalog.zones.len()
        );
        Ok(catalog)
    }

    /// Load engine configuration from `config.toml`.
    ///
    /// A missing file yields the default configuration; a malformed one is
    /// an error.
    pub fn load_config(&self) -> LoadResult<WardrobeConfig> {
        let path = self.data_dir.join(Self::CONFIG_FILE);
        if !path.exists() {
            tracing::info!("{} not found; using default configuration", path.display());
            return Ok(WardrobeConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
