use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Configuration from stint.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Store name prefix: `<prefix>_backlog.<extension>`
    #[serde(default = "default_prefix")]
    pub prefix: String,
    #[serde(default = "default_extension")]
    pub extension: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            prefix: default_prefix(),
            extension: default_extension(),
        }
    }
}

fn default_prefix() -> String {
    "todo".to_string()
}

fn default_extension() -> String {
    "txt".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// How many completed todos the Completed tab shows
    #[serde(default = "default_completed_limit")]
    pub completed_limit: usize,
    /// Whether `a` inserts at the top (`A` then inserts at the bottom)
    #[serde(default)]
    pub add_to_top: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            completed_limit: default_completed_limit(),
            add_to_top: false,
        }
    }
}

fn default_completed_limit() -> usize {
    10
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UiConfig {
    /// Hex color overrides keyed by theme slot name
    #[serde(default)]
    pub colors: HashMap<String, String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.store.prefix, "todo");
        assert_eq!(config.store.extension, "txt");
        assert_eq!(config.display.completed_limit, 10);
        assert!(!config.display.add_to_top);
        assert!(config.ui.colors.is_empty());
    }

    #[test]
    fn partial_tables_keep_other_defaults() {
        let config: Config = toml::from_str(
            r##"
[store]
prefix = "work"

[display]
add_to_top = true

[ui.colors]
highlight = "#FF0000"
"##,
        )
        .unwrap();
        assert_eq!(config.store.prefix, "work");
        assert_eq!(config.store.extension, "txt");
        assert_eq!(config.display.completed_limit, 10);
        assert!(config.display.add_to_top);
        assert_eq!(config.ui.colors.get("highlight").unwrap(), "#FF0000");
    }
}
