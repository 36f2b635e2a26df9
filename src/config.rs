//! Configuration file support for the gallery.
//!
//! This module provides serialization and deserialization of gallery settings:
//! where the data document lives, which element hosts the gallery, transition
//! timings, user-facing text, lightbox keybindings and log verbosity.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::keybindings::LightboxKeyBindings;
use crate::message::LightboxMessage;

/// Log level setting for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Show only errors
    Error,
    /// Show errors and warnings
    Warn,
    /// Show errors, warnings, and info messages
    #[default]
    Info,
    /// Show debug-level logging
    Debug,
    /// Show all log messages including trace
    Trace,
}

impl LogLevel {
    /// Convert to log crate's LevelFilter.
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }

    /// Convert to log crate's Level.
    pub fn to_level(&self) -> log::Level {
        match self {
            LogLevel::Error => log::Level::Error,
            LogLevel::Warn => log::Level::Warn,
            LogLevel::Info => log::Level::Info,
            LogLevel::Debug => log::Level::Debug,
            LogLevel::Trace => log::Level::Trace,
        }
    }
}

/// Current configuration file format version.
/// Increment this when making breaking changes to the config format.
pub const CONFIG_VERSION: u32 = 1;

/// Gallery configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GalleryConfig {
    /// Version of the configuration file format
    pub version: u32,

    /// Relative path of the site data document
    #[serde(default = "default_data_path")]
    pub data_path: String,

    /// Id of the element hosting the project cards
    #[serde(default = "default_container_id")]
    pub container_id: String,

    /// Length of the fade-out before a filtered re-render, in milliseconds
    #[serde(default = "default_transition_ms")]
    pub transition_ms: u64,

    /// Entrance delay added per card index, in milliseconds
    #[serde(default = "default_stagger_ms")]
    pub stagger_ms: u64,

    /// User-facing text
    #[serde(default)]
    pub text: GalleryText,

    /// Lightbox keybindings
    #[serde(default)]
    pub keybindings: LightboxKeyBindings,

    /// Log verbosity level
    #[serde(default)]
    pub log_level: LogLevel,
}

fn default_data_path() -> String {
    crate::constants::DEFAULT_DATA_PATH.to_string()
}

fn default_container_id() -> String {
    crate::constants::ids::PROJECTS_GRID.to_string()
}

fn default_transition_ms() -> u64 {
    300
}

fn default_stagger_ms() -> u64 {
    100
}

/// Text shown to visitors. Defaults match the site's language (Portuguese).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryText {
    /// Replaces the gallery content when the data document is unavailable
    pub load_failed: String,
    /// Shown instead of cards when a filter matches nothing
    pub no_results: String,
    /// Label of the lightbox trigger on each card
    pub view_project: String,
    /// Accessible name of the lightbox dialog
    pub lightbox_label: String,
    /// Accessible name of the close control
    pub close_label: String,
    /// Visible glyph of the close control
    pub close_symbol: String,
    /// Accessible name of the previous-image control
    pub previous_label: String,
    /// Accessible name of the next-image control
    pub next_label: String,
}

impl Default for GalleryText {
    fn default() -> Self {
        Self {
            load_failed: "Erro ao carregar os projetos.".to_string(),
            no_results: "Nenhum projeto encontrado nesta categoria.".to_string(),
            view_project: "Ver Projeto".to_string(),
            lightbox_label: "Galeria de imagens".to_string(),
            close_label: "Fechar galeria".to_string(),
            close_symbol: "×".to_string(),
            previous_label: "Imagem anterior".to_string(),
            next_label: "Próxima imagem".to_string(),
        }
    }
}

impl GalleryConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self {
            version: CONFIG_VERSION,
            data_path: default_data_path(),
            container_id: default_container_id(),
            transition_ms: default_transition_ms(),
            stagger_ms: default_stagger_ms(),
            text: GalleryText::default(),
            keybindings: LightboxKeyBindings::default(),
            log_level: LogLevel::default(),
        }
    }

    /// Fade-out duration before a filtered re-render.
    pub fn transition(&self) -> Duration {
        Duration::from_millis(self.transition_ms)
    }

    /// Entrance delay of the card at `index`.
    pub fn stagger_delay(&self, index: usize) -> Duration {
        Duration::from_millis(self.stagger_ms.saturating_mul(index as u64))
    }

    /// Serialize the configuration to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;

        // Validate version compatibility
        if config.version > CONFIG_VERSION {
            return Err(ConfigError::VersionTooNew {
                file_version: config.version,
                supported_version: CONFIG_VERSION,
            });
        }

        let bindings = &config.keybindings;
        for (action, key) in [
            (LightboxMessage::Close, bindings.close),
            (LightboxMessage::Previous, bindings.previous),
            (LightboxMessage::Next, bindings.next),
        ] {
            if let Some(other) = bindings.key_conflict(key, Some(action)) {
                return Err(ConfigError::KeyConflict {
                    key: format!("{:?}", key),
                    used_by: other,
                });
            }
        }

        Ok(config)
    }

    /// Get the default filename for the config file.
    pub fn default_filename() -> &'static str {
        "folio-config.json"
    }

    /// Get the default config file path.
    /// Returns None on WASM (no filesystem access).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn default_path() -> Option<std::path::PathBuf> {
        // Try to use XDG config directory, fall back to home directory
        if let Some(config_dir) = dirs::config_dir() {
            Some(config_dir.join("folio").join(Self::default_filename()))
        } else {
            dirs::home_dir().map(|home_dir| {
                home_dir
                    .join(".config")
                    .join("folio")
                    .join(Self::default_filename())
            })
        }
    }

    /// Try to load configuration from a file.
    /// Returns None if the file doesn't exist or can't be read.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_path(path: &std::path::Path) -> Option<Self> {
        if !path.exists() {
            log::debug!("No config file found at {:?}", path);
            return None;
        }

        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(config) => {
                    log::info!("Loaded configuration from {:?}", path);
                    Some(config)
                }
                Err(e) => {
                    log::warn!("Failed to parse config file {:?}: {}", path, e);
                    None
                }
            },
            Err(e) => {
                log::warn!("Failed to read config file {:?}: {}", path, e);
                None
            }
        }
    }

    /// Try to load configuration from the default path.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_default_path() -> Option<Self> {
        Self::load_from_path(&Self::default_path()?)
    }
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// JSON parsing error
    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Configuration version is newer than supported
    #[error(
        "Configuration file version {file_version} is newer than supported version {supported_version}"
    )]
    VersionTooNew {
        file_version: u32,
        supported_version: u32,
    },

    /// Two lightbox actions share one key
    #[error("Key {key} is bound more than once (also used by: {used_by})")]
    KeyConflict { key: String, used_by: &'static str },
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_ui::Key;

    #[test]
    fn test_config_defaults() {
        let config = GalleryConfig::default();
        assert_eq!(config.version, CONFIG_VERSION);
        assert_eq!(config.data_path, "data/projetos.json");
        assert_eq!(config.container_id, "projects-grid");
        assert_eq!(config.transition(), Duration::from_millis(300));
        assert_eq!(config.stagger_delay(3), Duration::from_millis(300));
        assert_eq!(config.text.no_results, "Nenhum projeto encontrado nesta categoria.");
    }

    #[test]
    fn test_config_roundtrip() {
        let mut config = GalleryConfig::new();
        config.data_path = "assets/site.json".to_string();
        config.log_level = LogLevel::Debug;

        let json = config.to_json().unwrap();
        let loaded = GalleryConfig::from_json(&json).unwrap();
        assert_eq!(loaded.data_path, "assets/site.json");
        assert_eq!(loaded.log_level, LogLevel::Debug);
        assert_eq!(loaded.keybindings, LightboxKeyBindings::default());
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let loaded =
            GalleryConfig::from_json(r#"{ "version": 1, "text": { "no_results": "Nada" } }"#)
                .unwrap();
        assert_eq!(loaded.data_path, "data/projetos.json");
        assert_eq!(loaded.text.no_results, "Nada");
        assert_eq!(loaded.text.view_project, "Ver Projeto");
    }

    #[test]
    fn test_version_too_new() {
        let err = GalleryConfig::from_json(r#"{ "version": 99 }"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::VersionTooNew {
                file_version: 99,
                supported_version: CONFIG_VERSION
            }
        ));
    }

    #[test]
    fn test_key_conflict_rejected() {
        let mut config = GalleryConfig::new();
        config.keybindings.next = Key::Escape;
        let json = config.to_json().unwrap();
        let err = GalleryConfig::from_json(&json).unwrap_err();
        assert!(matches!(err, ConfigError::KeyConflict { used_by: "Next image", .. }));
    }

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(LogLevel::Warn.to_level_filter(), log::LevelFilter::Warn);
        assert_eq!(LogLevel::Trace.to_level(), log::Level::Trace);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_load_from_missing_path() {
        let path = std::env::temp_dir().join("folio-config-does-not-exist.json");
        assert!(GalleryConfig::load_from_path(&path).is_none());
    }
}
