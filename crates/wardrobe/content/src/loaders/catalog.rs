//! Wardrobe catalog loader.

use std::path::Path;

use anyhow::Context;
use wardrobe_core::Catalog;

use crate::loaders::{LoadResult, read_file};

/// Loader for the wardrobe catalog from RON files.
///
/// ```ron
/// (
///     rods: [
///         (name: "hats", items: [
///             (name: "cap", category: Hat, position: (x: -8.0, y: 10.0)),
///         ]),
///     ],
///     zones: [
///         (name: "head", accepts: [Hat], anchor: (x: 4.0, y: 10.0), size: (x: 2.0, y: 2.0)),
///     ],
///     visible_when_dormant: [Glasses],
/// )
/// ```
pub struct CatalogLoader;

impl CatalogLoader {
    /// Load a catalog from a RON file.
    pub fn load(path: &Path) -> LoadResult<Catalog> {
        let content = read_file(path)?;
        Self::parse(&content)
            .with_context(|| format!("Failed to load catalog {}", path.display()))
    }

    /// Parse a catalog from RON text.
    pub fn parse(content: &str) -> LoadResult<Catalog> {
        let catalog: Catalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse catalog RON: {}", e))?;
        tracing::debug!(
            "parsed catalog: {} rods, {} items, {} zones",
            catalog.rods.len(),
            catalog.item_count(),
            catalog.zones.len()
        );
        Ok(catalog)
    }
}
