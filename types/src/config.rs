//! User configuration.
//!
//! Persisted as TOML by `tactidex_core::config`. Every field has a default so
//! a partial (or missing) file still yields a usable configuration.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub const DEFAULT_TARGET_SET: i64 = 16;
pub const DEFAULT_MUTATOR_PREFIX: &str = "TFTSet";
pub const DEFAULT_DATA_URL: &str = "https://raw.communitydragon.org/latest/cdragon/tft/en_us.json";
pub const DEFAULT_ASSET_BASE_URL: &str = "https://raw.communitydragon.org/latest/game/";
pub const DEFAULT_DDRAGON_VERSION: &str = "16.4.1";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodexConfig {
    /// Set number to display
    pub target_set: i64,

    /// Prefix of the main game-mode mutator; the set number is appended
    pub mutator_prefix: String,

    /// Upstream export document
    pub data_url: String,

    /// Prefix for rewritten icon paths
    pub asset_base_url: String,

    /// Data Dragon patch used by the alternate augment source
    pub ddragon_version: String,

    /// Internal set name -> display name
    pub set_display_names: BTreeMap<String, String>,

    /// Augment apiNames to hide on top of the builtin blacklist
    pub extra_blacklist: Vec<String>,

    /// Request timeout in seconds. `None` leaves it to the HTTP stack.
    pub request_timeout_secs: Option<u64>,
}

impl Default for CodexConfig {
    fn default() -> Self {
        Self {
            target_set: DEFAULT_TARGET_SET,
            mutator_prefix: DEFAULT_MUTATOR_PREFIX.to_string(),
            data_url: DEFAULT_DATA_URL.to_string(),
            asset_base_url: DEFAULT_ASSET_BASE_URL.to_string(),
            ddragon_version: DEFAULT_DDRAGON_VERSION.to_string(),
            set_display_names: BTreeMap::from([(
                "Set16".to_string(),
                "Lore and Legends".to_string(),
            )]),
            extra_blacklist: Vec::new(),
            request_timeout_secs: None,
        }
    }
}

impl CodexConfig {
    /// Mutator string of the main game mode, e.g. `TFTSet16`
    pub fn expected_mutator(&self) -> String {
        format!("{}{}", self.mutator_prefix, self.target_set)
    }

    /// Display name for an internal set name, passing unknown names through
    pub fn display_set_name<'a>(&'a self, internal: &'a str) -> &'a str {
        self.set_display_names
            .get(internal)
            .map(String::as_str)
            .unwrap_or(internal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_toml_keeps_defaults() {
        let config: CodexConfig = toml::from_str(
            r#"
target_set = 17
extra_blacklist = ["TFT17_Augment_Broken"]
"#,
        )
        .unwrap();

        assert_eq!(config.target_set, 17);
        assert_eq!(config.expected_mutator(), "TFTSet17");
        assert_eq!(config.extra_blacklist, vec!["TFT17_Augment_Broken"]);
        assert_eq!(config.data_url, DEFAULT_DATA_URL);
        assert_eq!(config.request_timeout_secs, None);
    }

    #[test]
    fn display_set_name_substitutes_known_placeholder() {
        let config = CodexConfig::default();
        assert_eq!(config.display_set_name("Set16"), "Lore and Legends");
        assert_eq!(config.display_set_name("Set15"), "Set15");
    }
}
