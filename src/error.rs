/// Application-level errors
///
/// These abort startup. Image load failures at runtime are reported
/// separately through `shop::loader::LoadError` so the UI can recover.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid hash file {}: {source}", .path.display())]
    HashFile {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("no shop hash given; pass --hash or write one to {}", .0.display())]
    MissingHash(PathBuf),

    #[error("invalid shop hash {0:?}")]
    InvalidHash(String),

    #[error("failed to scan archive {}: {source}", .path.display())]
    Archive {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error(transparent)]
    Gui(#[from] iced::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
