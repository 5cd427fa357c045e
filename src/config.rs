//! Working copy of the launcher configuration
//!
//! The host process owns the persisted record; the UI holds this in-memory
//! copy, discards it on cancel and pushes it back wholesale on save. Field
//! names on the wire match the host's JSON store.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::engines::Engine;

/// UI color theme
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

/// Full launcher configuration as exchanged with the host
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub shortcut: String,
    #[serde(rename = "aiEngines", default)]
    pub engines: Vec<Engine>,
    #[serde(rename = "defaultAi", default)]
    pub default_engine: usize,
    #[serde(default = "default_theme")]
    pub theme: Theme,
    #[serde(rename = "autoStart", default)]
    pub auto_start: bool,
}

fn default_theme() -> Theme {
    Theme::Dark
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            shortcut: "Alt+Space".to_string(),
            engines: vec![],
            default_engine: 0,
            theme: Theme::Dark,
            auto_start: false,
        }
    }
}

impl AppConfig {
    /// Clamp the default-engine index into range after receiving a record
    /// from the host. A stale index is recoverable host data, not a caller
    /// bug, so it is corrected rather than asserted.
    pub fn clamp_default_engine(&mut self) {
        if self.engines.is_empty() {
            self.default_engine = 0;
        } else if self.default_engine >= self.engines.len() {
            warn!(
                default_engine = self.default_engine,
                engines = self.engines.len(),
                "default engine index out of range, resetting to 0"
            );
            self.default_engine = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::DEFAULT_LOGO;

    #[test]
    fn test_wire_shape_matches_host_store() {
        let json = r#"{
            "shortcut": "Alt+Space",
            "theme": "dark",
            "autoStart": true,
            "aiEngines": [
                {"name": "Claude", "url": "https://claude.ai/new?q=", "logo": "askbar_logo.png"}
            ],
            "defaultAi": 0
        }"#;

        let config: AppConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.shortcut, "Alt+Space");
        assert_eq!(config.theme, Theme::Dark);
        assert!(config.auto_start);
        assert_eq!(config.engines.len(), 1);
        assert_eq!(config.engines[0].name, "Claude");
        assert_eq!(config.default_engine, 0);
    }

    #[test]
    fn test_serializes_camel_case_keys() {
        let config = AppConfig {
            engines: vec![Engine::new("Claude", "https://claude.ai/new?q=", DEFAULT_LOGO)],
            default_engine: 0,
            auto_start: true,
            ..AppConfig::default()
        };

        let value: serde_json::Value = serde_json::to_value(&config).unwrap();
        assert!(value.get("aiEngines").is_some());
        assert!(value.get("defaultAi").is_some());
        assert!(value.get("autoStart").is_some());
        assert_eq!(value["theme"], "dark");
    }

    #[test]
    fn test_missing_optional_fields_use_defaults() {
        let config: AppConfig = serde_json::from_str(r#"{"shortcut": "Ctrl+K"}"#).unwrap();
        assert_eq!(config.theme, Theme::Dark);
        assert!(!config.auto_start);
        assert!(config.engines.is_empty());
        assert_eq!(config.default_engine, 0);
    }

    #[test]
    fn test_clamp_default_engine_out_of_range() {
        let mut config = AppConfig {
            engines: vec![Engine::new("a", "https://a.example/?q=", DEFAULT_LOGO)],
            default_engine: 5,
            ..AppConfig::default()
        };
        config.clamp_default_engine();
        assert_eq!(config.default_engine, 0);
    }

    #[test]
    fn test_clamp_default_engine_empty_list() {
        let mut config = AppConfig {
            engines: vec![],
            default_engine: 3,
            ..AppConfig::default()
        };
        config.clamp_default_engine();
        assert_eq!(config.default_engine, 0);
    }

    #[test]
    fn test_clamp_default_engine_in_range_untouched() {
        let mut config = AppConfig {
            engines: vec![
                Engine::new("a", "https://a.example/?q=", DEFAULT_LOGO),
                Engine::new("b", "https://b.example/?q=", DEFAULT_LOGO),
            ],
            default_engine: 1,
            ..AppConfig::default()
        };
        config.clamp_default_engine();
        assert_eq!(config.default_engine, 1);
    }
}
