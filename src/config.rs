//! Configuration file support for the lvscroll demo.
//!
//! The demo reads its scroller style, list shape and log level from a JSON
//! file in the user's config directory, falling back to defaults.

use std::path::{Path, PathBuf};

use lvscroll_ui::{FastScrollStyle, Size};
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_ITEM_HEIGHT, DEFAULT_LAST_ITEM, DEFAULT_VIEWPORT};

/// Log level setting for the demo.
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
}

/// Current configuration file format version.
/// Increment this when making breaking changes to the config format.
pub const CONFIG_VERSION: u32 = 1;

/// Demo configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemoConfig {
    /// Version of the configuration file format
    pub version: u32,

    /// Scroller appearance
    #[serde(default)]
    pub style: FastScrollStyle,

    /// The list shows the numbers `0..=last_item`
    #[serde(default = "default_last_item")]
    pub last_item: usize,

    /// Height of one list row
    #[serde(default = "default_item_height")]
    pub item_height: f32,

    /// Size of the demo screen
    #[serde(default = "default_viewport")]
    pub viewport: Size,

    /// Log verbosity level
    #[serde(default)]
    pub log_level: LogLevel,
}

fn default_last_item() -> usize {
    DEFAULT_LAST_ITEM
}

fn default_item_height() -> f32 {
    DEFAULT_ITEM_HEIGHT
}

fn default_viewport() -> Size {
    DEFAULT_VIEWPORT
}

impl DemoConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self {
            version: CONFIG_VERSION,
            style: FastScrollStyle::default(),
            last_item: default_last_item(),
            item_height: default_item_height(),
            viewport: default_viewport(),
            log_level: LogLevel::default(),
        }
    }

    /// Serialize the configuration to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;

        if config.version > CONFIG_VERSION {
            return Err(ConfigError::VersionTooNew {
                file_version: config.version,
                supported_version: CONFIG_VERSION,
            });
        }

        Ok(config)
    }

    /// Get the default filename for the config file.
    pub fn default_filename() -> &'static str {
        "lvscroll-config.json"
    }

    /// Get the default config file path.
    pub fn default_path() -> Option<PathBuf> {
        if let Some(config_dir) = dirs::config_dir() {
            Some(config_dir.join("lvscroll").join(Self::default_filename()))
        } else {
            dirs::home_dir().map(|home_dir| {
                home_dir
                    .join(".config")
                    .join("lvscroll")
                    .join(Self::default_filename())
            })
        }
    }

    /// Read and parse a config file.
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Write the config as JSON, creating parent directories as needed.
    pub fn save_to_path(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }

    /// Load the config at `path`, or write the defaults there on first run.
    ///
    /// A file that exists but cannot be read or parsed is left alone and the
    /// defaults are used for this run.
    pub fn load_or_create(path: &Path) -> Self {
        if !path.exists() {
            let config = Self::new();
            match config.save_to_path(path) {
                Ok(()) => log::info!("Wrote default configuration to {:?}", path),
                Err(e) => log::warn!("Could not write default config {:?}: {}", path, e),
            }
            return config;
        }

        match Self::load_from_path(path) {
            Ok(config) => {
                log::info!("Loaded configuration from {:?}", path);
                config
            }
            Err(e) => {
                log::warn!("Ignoring config file {:?}: {}", path, e);
                Self::new()
            }
        }
    }

    /// [`Self::load_or_create`] at [`Self::default_path`], or plain defaults
    /// when there is no config directory.
    pub fn load_or_create_default() -> Self {
        match Self::default_path() {
            Some(path) => Self::load_or_create(&path),
            None => {
                log::debug!("No config directory, using defaults");
                Self::new()
            }
        }
    }
}

impl Default for DemoConfig {
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

    /// I/O error when reading/writing config
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}
