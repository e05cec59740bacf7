//! Configuration management (config.toml)
//!
//! Handles loading, saving, and providing defaults for client settings.
//! Settings are stored in TOML format in the platform-specific config directory,
//! or in an explicit file handed over by the launcher.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

use romm_shared::DEFAULT_ROM_ROOT;

/// File name of the configuration inside [`config_dir`].
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Client configuration.
///
/// Every section has defaults, so a partial file is valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    /// RomM server location and credentials
    #[serde(default)]
    pub server: ServerConfig,
    /// HTTP timeouts
    #[serde(default)]
    pub network: NetworkConfig,
    /// Display geometry and frame cadence
    #[serde(default)]
    pub display: DisplayConfig,
    /// On-device storage layout
    #[serde(default)]
    pub storage: StorageConfig,
}

/// Server location and credentials.
///
/// The values are opaque: only emptiness of `url` is ever checked.
#[derive(Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ServerConfig {
    /// Base URL, e.g. `http://romm.local:8080`
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

impl std::fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerConfig")
            .field("url", &self.url)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// HTTP timeout configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// Time allowed to establish a connection (default: 5)
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
    /// Time allowed for a whole request including the body (default: 30)
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

/// Display geometry and frame cadence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Window width in pixels (default: 640)
    #[serde(default = "default_width")]
    pub width: u32,
    /// Window height in pixels (default: 480)
    #[serde(default = "default_height")]
    pub height: u32,
    /// Rows shown at once (default: 10)
    #[serde(default = "default_visible_items")]
    pub visible_items: usize,
    /// Height of one row in pixels (default: 40)
    #[serde(default = "default_item_height")]
    pub item_height: f32,
    /// Font size in points (default: 16)
    #[serde(default = "default_font_size")]
    pub font_size: f32,
    /// Maximum repaint rate (default: 60)
    #[serde(default = "default_frame_rate")]
    pub frame_rate: u32,
}

/// On-device storage layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding one subdirectory per platform (default: /Roms)
    #[serde(default = "default_rom_root")]
    pub rom_root: PathBuf,
}

fn default_connect_timeout() -> u64 {
    5
}
fn default_request_timeout() -> u64 {
    30
}

fn default_width() -> u32 {
    640
}
fn default_height() -> u32 {
    480
}
fn default_visible_items() -> usize {
    10
}
fn default_item_height() -> f32 {
    40.0
}
fn default_font_size() -> f32 {
    16.0
}
fn default_frame_rate() -> u32 {
    60
}

fn default_rom_root() -> PathBuf {
    PathBuf::from(DEFAULT_ROM_ROOT)
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: default_connect_timeout(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

impl NetworkConfig {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            visible_items: default_visible_items(),
            item_height: default_item_height(),
            font_size: default_font_size(),
            frame_rate: default_frame_rate(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            rom_root: default_rom_root(),
        }
    }
}

/// Failure to load an explicitly named config file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Returns the platform-specific configuration directory.
///
/// On Windows: `%APPDATA%\RomM Handheld\config`
/// On macOS: `~/Library/Application Support/app.romm.RomM-Handheld`
/// On Linux: `~/.config/romm-handheld`
///
/// Returns `None` if the home directory cannot be determined.
pub fn config_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("app.romm", "", "RomM Handheld")
        .map(|dirs| dirs.config_dir().to_path_buf())
}

/// Loads the configuration from the platform config directory.
///
/// Returns default values if the file doesn't exist or cannot be parsed.
pub fn load() -> Config {
    let Some(path) = config_dir().map(|dir| dir.join(CONFIG_FILE_NAME)) else {
        return Config::default();
    };
    if !path.exists() {
        return Config::default();
    }
    match load_from(&path) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Using default configuration: {}", e);
            Config::default()
        }
    }
}

/// Loads the configuration from an explicit file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid TOML.
pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Saves the configuration to the platform config directory.
///
/// Creates the directory if it doesn't exist.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or the file
/// cannot be written.
pub fn save(config: &Config) -> std::io::Result<()> {
    if let Some(dir) = config_dir() {
        save_to(config, &dir.join(CONFIG_FILE_NAME))?;
    }
    Ok(())
}

/// Saves the configuration to an explicit file, creating parent directories.
pub fn save_to(config: &Config, path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(std::io::Error::other)?;
    std::fs::write(path, content)
}
