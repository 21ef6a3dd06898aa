/// Shop image loader
///
/// Reads a shop JPEG from disk and decodes it to RGBA on the blocking
/// pool, so the UI thread never waits on I/O or decoding.

use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;
use tokio::task;

use crate::state::data::LoadedImage;

/// Why a shop image could not be shown
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("image not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read {}: {message}", .path.display())]
    Io { path: PathBuf, message: String },

    #[error("failed to decode {}: {message}", .path.display())]
    Decode { path: PathBuf, message: String },

    #[error("load task failed: {0}")]
    Task(String),
}

/// Load and decode the shop image at `path`
///
/// # Returns
/// * `Ok(LoadedImage)` - Decoded image and its dimensions
/// * `Err(LoadError)` - Missing file, read failure or undecodable data
pub async fn load_shop_image(path: PathBuf) -> Result<LoadedImage, LoadError> {
    let bytes = match tokio::fs::read(&path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => return Err(LoadError::NotFound(path)),
        Err(e) => {
            return Err(LoadError::Io {
                path,
                message: e.to_string(),
            })
        }
    };

    // Spawn blocking because JPEG decoding is CPU-intensive
    task::spawn_blocking(move || decode_blocking(path, &bytes))
        .await
        .map_err(|e| LoadError::Task(e.to_string()))?
}

/// Blocking implementation of image decoding
fn decode_blocking(path: PathBuf, bytes: &[u8]) -> Result<LoadedImage, LoadError> {
    let decoded = image::load_from_memory(bytes).map_err(|e| LoadError::Decode {
        path: path.clone(),
        message: e.to_string(),
    })?;

    let rgba = decoded.to_rgba8();
    let (width, height) = rgba.dimensions();

    tracing::debug!("📷 decoded {} ({}x{})", path.display(), width, height);

    Ok(LoadedImage::from_rgba(path, width, height, rgba.into_raw()))
}
