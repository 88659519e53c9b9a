//! Engine configuration loader.

use std::path::Path;

use anyhow::Context;
use wardrobe_core::WardrobeConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for [`WardrobeConfig`] from TOML files.
///
/// Every field is optional; missing ones keep their defaults. The result is
/// validated before it is returned.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    pub fn load(path: &Path) -> LoadResult<WardrobeConfig> {
        let content = read_file(path)?;
        Self::parse(&content).with_context(|| format!("Failed to load config {}", path.display()))
    }

    /// Parse config data from TOML text.
    pub fn parse(content: &str) -> LoadResult<WardrobeConfig> {
        let config: WardrobeConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;
        config.validate().context("Invalid wardrobe configuration")?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wardrobe_core::{GestureThresholds, SlowClickPolicy};

    #[test]
    fn empty_file_yields_defaults() {
        assert_eq!(ConfigLoader::parse("").unwrap(), WardrobeConfig::default());
    }

    #[test]
    fn partial_tables_keep_remaining_defaults() {
        let config = ConfigLoader::parse(
            r#"
            slow_click = "snap_back"

            [gesture]
            short_tap_ms = 180
            "#,
        )
        .unwrap();
        assert_eq!(config.slow_click, SlowClickPolicy::SnapBack);
        assert_eq!(config.gesture.short_tap_ms, 180);
        assert_eq!(
            config.gesture.long_press_ms,
            GestureThresholds::DEFAULT_LONG_PRESS_MS
        );
        assert_eq!(
            config.settle_delay_ticks,
            WardrobeConfig::DEFAULT_SETTLE_DELAY_TICKS
        );
    }

    #[test]
    fn invalid_values_are_rejected() {
        let error = ConfigLoader::parse("[gesture]\ndrag_distance = -1.0\n").unwrap_err();
        assert!(format!("{error:#}").contains("drag distance"));
    }
}
