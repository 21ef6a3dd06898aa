/// Shared data structures for the viewer state
///
/// These types flow between the controller (viewer.rs), the
/// shop image loader and the UI layer.

use iced::widget::image::Handle;
use serde::Deserialize;
use std::fmt;
use std::path::PathBuf;

use crate::error::{Error, Result};

/// Which image variant of a shop is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ViewMode {
    /// The regular item shop image
    #[default]
    ItemShop,
    /// The "OG items" image (items not seen in a long time)
    #[serde(rename = "og")]
    #[value(name = "og")]
    OriginalGallery,
}

impl ViewMode {
    /// Both modes, in toggle-button order
    pub const ALL: [ViewMode; 2] = [ViewMode::ItemShop, ViewMode::OriginalGallery];

    /// Button / title label
    pub fn label(self) -> &'static str {
        match self {
            ViewMode::ItemShop => "Item Shop",
            ViewMode::OriginalGallery => "OG Items",
        }
    }
}

/// Opaque per-shop key (the shop "hash") used to build image paths
///
/// It ends up inside a file name, so anything that could escape the
/// shops directory is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ShopIdentifier(String);

impl ShopIdentifier {
    pub fn new(raw: impl Into<String>) -> Result<Self> {
        let raw = raw.into();
        let trimmed = raw.trim();

        let invalid = trimmed.is_empty()
            || trimmed.contains(['/', '\\'])
            || trimmed.contains("..");

        if invalid {
            return Err(Error::InvalidHash(raw));
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ShopIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Where a shop's images live: the live shops directory or its archive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShopSource {
    #[default]
    Current,
    Archive,
}

/// A decoded shop image, ready to hand to the `image` widget
#[derive(Debug, Clone)]
pub struct LoadedImage {
    /// Path the image was read from
    pub path: PathBuf,
    /// GPU-uploadable RGBA handle
    pub handle: Handle,
    pub width: u32,
    pub height: u32,
}

impl LoadedImage {
    /// Build from raw RGBA8 pixels
    pub fn from_rgba(path: PathBuf, width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self {
            path,
            handle: Handle::from_rgba(width, height, pixels),
            width,
            height,
        }
    }
}

/// Target visibility of the main image (the fade animates towards it)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Visible,
    Hidden,
}

impl Visibility {
    pub fn opacity(self) -> f32 {
        match self {
            Visibility::Visible => 1.0,
            Visibility::Hidden => 0.0,
        }
    }
}

/// The image currently rendered in the main area
///
/// `image` keeps the previous source while a new one is loading, the
/// same way an `<img>` keeps its old `src` until it is replaced.
#[derive(Debug, Clone)]
pub struct DisplayedImage {
    pub image: Option<LoadedImage>,
    pub visibility: Visibility,
}

impl Default for DisplayedImage {
    fn default() -> Self {
        Self {
            image: None,
            visibility: Visibility::Hidden,
        }
    }
}

/// Lightbox state. When open it holds a copy of the image taken at open time.
#[derive(Debug, Clone, Default)]
pub enum ModalState {
    #[default]
    Closed,
    Open(LoadedImage),
}

impl ModalState {
    pub fn is_open(&self) -> bool {
        matches!(self, ModalState::Open(_))
    }
}

/// Identifies one load; completions from older generations are stale
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Generation(u64);

impl Generation {
    pub fn next(self) -> Self {
        Generation(self.0 + 1)
    }
}

/// A request for the shell to load one shop image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadRequest {
    pub mode: ViewMode,
    pub path: PathBuf,
    pub generation: Generation,
}
