//! CLI runtime configuration read from the environment.
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

/// Configuration required to start the terminal client.
#[derive(Clone, Debug)]
pub struct CliConfig {
    /// Directory holding `wardrobe.ron` and `config.toml`.
    pub data_dir: PathBuf,
    pub session_id: Option<String>,
    /// Milliseconds between engine frames.
    pub frame_interval_ms: u64,
    pub message_capacity: usize,
}

impl CliConfig {
    pub const DEFAULT_DATA_DIR: &'static str = "data";
    pub const DEFAULT_FRAME_INTERVAL_MS: u64 = 16;
    pub const DEFAULT_MESSAGE_CAPACITY: usize = 64;

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `WARDROBE_DATA_DIR` - Content directory (default: `data`)
    /// - `WARDROBE_SESSION_ID` - Session identifier for the log directory (default: auto-generated)
    /// - `CLI_FRAME_INTERVAL_MS` - Frame interval (default: 16)
    /// - `CLI_MESSAGE_CAPACITY` - Message log capacity (default: 64)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(dir) = lookup("WARDROBE_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }

        config.session_id = lookup("WARDROBE_SESSION_ID").filter(|id| !id.trim().is_empty());

        if let Some(interval) = parse::<u64>(&lookup, "CLI_FRAME_INTERVAL_MS") {
            config.frame_interval_ms = interval.max(1);
        }

        if let Some(capacity) = parse::<usize>(&lookup, "CLI_MESSAGE_CAPACITY") {
            config.message_capacity = capacity.max(1);
        }

        config
    }
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(Self::DEFAULT_DATA_DIR),
            session_id: None,
            frame_interval_ms: Self::DEFAULT_FRAME_INTERVAL_MS,
            message_capacity: Self::DEFAULT_MESSAGE_CAPACITY,
        }
    }
}

fn parse<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!("ignoring {}={:?}: not a valid value", key, raw);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> CliConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        CliConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_without_environment() {
        let config = config_from(&[]);
        assert_eq!(config.data_dir, PathBuf::from("data"));
        assert_eq!(config.frame_interval_ms, 16);
        assert!(config.session_id.is_none());
    }

    #[test]
    fn overrides_and_clamps() {
        let config = config_from(&[
            ("WARDROBE_DATA_DIR", "/srv/wardrobe"),
            ("WARDROBE_SESSION_ID", "demo"),
            ("CLI_FRAME_INTERVAL_MS", "0"),
            ("CLI_MESSAGE_CAPACITY", "many"),
        ]);
        assert_eq!(config.data_dir, PathBuf::from("/srv/wardrobe"));
        assert_eq!(config.session_id.as_deref(), Some("demo"));
        assert_eq!(config.frame_interval_ms, 1);
        assert_eq!(config.message_capacity, CliConfig::DEFAULT_MESSAGE_CAPACITY);
    }
}
