/// Viewer configuration
///
/// Loaded from `config.toml` in the user's config directory:
/// - Linux: ~/.config/shop-viewer/config.toml
/// - macOS: ~/Library/Application Support/shop-viewer/config.toml
/// - Windows: %APPDATA%\shop-viewer\config.toml
///
/// Every key is optional. Command line flags override the file.

use serde::Deserialize;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::data::ViewMode;
use crate::error::{Error, Result};

/// Delay between starting the fade-out and requesting the new image
pub const DEFAULT_FADE_DELAY_MS: u64 = 300;

/// Length of one fade (out or in)
pub const DEFAULT_FADE_DURATION_MS: u64 = 300;

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Directory holding `shop-{hash}.jpg`, `og/` and `archive/`
    pub shops_dir: PathBuf,
    /// JSON file holding the current shop hash
    pub hash_file: PathBuf,
    /// Mode selected when the viewer starts
    pub initial_mode: ViewMode,
    pub fade_delay_ms: u64,
    pub fade_duration_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            shops_dir: PathBuf::from("shops"),
            hash_file: PathBuf::from("hash.json"),
            initial_mode: ViewMode::ItemShop,
            fade_delay_ms: DEFAULT_FADE_DELAY_MS,
            fade_duration_ms: DEFAULT_FADE_DURATION_MS,
        }
    }
}

impl Config {
    /// Get the path where the config file is expected
    pub fn default_path() -> Option<PathBuf> {
        let mut path = dirs::config_dir()?;
        path.push("shop-viewer");
        path.push("config.toml");
        Some(path)
    }

    /// Load the config file at `path`, falling back to defaults if it doesn't exist
    pub fn load(path: &Path) -> Result<Self> {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!("no config at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(Error::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        let config = Self::from_toml(&contents).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::info!("⚙️  Loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse from a TOML string
    pub fn from_toml(contents: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    pub fn fade_delay(&self) -> Duration {
        Duration::from_millis(self.fade_delay_ms)
    }

    pub fn fade_duration(&self) -> Duration {
        Duration::from_millis(self.fade_duration_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.shops_dir, PathBuf::from("shops"));
        assert_eq!(config.hash_file, PathBuf::from("hash.json"));
        assert_eq!(config.initial_mode, ViewMode::ItemShop);
        assert_eq!(config.fade_delay(), Duration::from_millis(300));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = Config::from_toml("initial_mode = \"og\"\nfade_delay_ms = 150\n").unwrap();
        assert_eq!(config.initial_mode, ViewMode::OriginalGallery);
        assert_eq!(config.fade_delay_ms, 150);
        assert_eq!(config.shops_dir, PathBuf::from("shops"));
        assert_eq!(config.fade_duration_ms, DEFAULT_FADE_DURATION_MS);
    }

    #[test]
    fn test_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_invalid_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "initial_mode = \"sideways\"").unwrap();

        assert!(matches!(Config::load(&path), Err(Error::Config { .. })));
    }
}
