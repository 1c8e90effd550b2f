//! Theme manager configuration

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Theme manager configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ThemeConfig {
    /// Key the preference is persisted under
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// Root element attribute set to the resolved scheme
    #[serde(default = "default_attribute")]
    pub attribute: String,

    /// Whether scheme changes get a transient transition class
    #[serde(default = "default_true")]
    pub enable_transitions: bool,

    /// How long the transition class stays on the root element (ms)
    #[serde(default = "default_transition_ms")]
    pub transition_duration_ms: u64,

    /// Whether the manager follows the system color scheme
    #[serde(default = "default_true")]
    pub enable_system_detection: bool,
}

fn default_storage_key() -> String {
    "theme-preference".to_string()
}

fn default_attribute() -> String {
    "data-theme".to_string()
}

fn default_transition_ms() -> u64 {
    300
}

fn default_true() -> bool {
    true
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            attribute: default_attribute(),
            enable_transitions: true,
            transition_duration_ms: default_transition_ms(),
            enable_system_detection: true,
        }
    }
}

impl ThemeConfig {
    pub fn transition_duration(&self) -> Duration {
        Duration::from_millis(self.transition_duration_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_contract() {
        let config = ThemeConfig::default();
        assert_eq!(config.storage_key, "theme-preference");
        assert_eq!(config.attribute, "data-theme");
        assert!(config.enable_transitions);
        assert_eq!(config.transition_duration(), Duration::from_millis(300));
        assert!(config.enable_system_detection);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let config: ThemeConfig = toml::from_str("storage_key = \"site-theme\"").unwrap();
        assert_eq!(config.storage_key, "site-theme");
        assert_eq!(config.attribute, "data-theme");
        assert_eq!(config.transition_duration_ms, 300);
    }
}
