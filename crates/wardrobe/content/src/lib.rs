//! Data-driven wardrobe content.
//!
//! Loads the static catalog (which rods, items and zones exist) from RON and
//! the engine configuration from TOML. Content is consumed once when a
//! [`wardrobe_core::Wardrobe`] is built and never read again.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{CatalogLoader, ConfigLoader, ContentFactory, LoadResult};
