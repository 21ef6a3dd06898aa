use std::path::{Path, PathBuf};

use crate::state::data::{ShopIdentifier, ShopSource, ViewMode};

/// Subdirectory holding images of superseded shops
pub const ARCHIVE_DIR: &str = "archive";

/// Subdirectory holding the OG items images
pub const OG_DIR: &str = "og";

/// Resolves the image path of each view mode for one shop.
///
/// Layout (relative to the shops directory):
/// - `shop-{hash}.jpg` and `og/og-{hash}.jpg` for the current shop
/// - the same names under `archive/` for archived shops
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShopPaths {
    root: PathBuf,
    shop: ShopIdentifier,
    source: ShopSource,
}

impl ShopPaths {
    pub fn new(root: impl Into<PathBuf>, shop: ShopIdentifier, source: ShopSource) -> Self {
        Self {
            root: root.into(),
            shop,
            source,
        }
    }

    pub fn shop(&self) -> &ShopIdentifier {
        &self.shop
    }

    pub fn source(&self) -> ShopSource {
        self.source
    }

    /// Directory the two variants are resolved against
    pub fn base_dir(&self) -> PathBuf {
        match self.source {
            ShopSource::Current => self.root.clone(),
            ShopSource::Archive => self.root.join(ARCHIVE_DIR),
        }
    }

    /// Path of the image for `mode`
    pub fn image_path(&self, mode: ViewMode) -> PathBuf {
        image_path_in(&self.base_dir(), mode, self.shop.as_str())
    }
}

fn image_path_in(base: &Path, mode: ViewMode, hash: &str) -> PathBuf {
    match mode {
        ViewMode::ItemShop => base.join(item_shop_file_name(hash)),
        ViewMode::OriginalGallery => base.join(OG_DIR).join(og_file_name(hash)),
    }
}

/// File name prefix of item shop images
pub const ITEM_SHOP_PREFIX: &str = "shop-";

/// File name prefix of OG items images
pub const OG_PREFIX: &str = "og-";

/// Extension of every shop image
pub const IMAGE_EXTENSION: &str = ".jpg";

pub fn item_shop_file_name(hash: &str) -> String {
    format!("{}{}{}", ITEM_SHOP_PREFIX, hash, IMAGE_EXTENSION)
}

pub fn og_file_name(hash: &str) -> String {
    format!("{}{}{}", OG_PREFIX, hash, IMAGE_EXTENSION)
}

/// Hash inside an item shop file name (`shop-{hash}.jpg`)
pub fn parse_item_shop_file_name(file_name: &str) -> Option<&str> {
    hash_between(file_name, ITEM_SHOP_PREFIX)
}

/// Hash inside an OG file name (`og-{hash}.jpg`)
pub fn parse_og_file_name(file_name: &str) -> Option<&str> {
    hash_between(file_name, OG_PREFIX)
}

fn hash_between<'a>(file_name: &'a str, prefix: &str) -> Option<&'a str> {
    file_name
        .strip_prefix(prefix)?
        .strip_suffix(IMAGE_EXTENSION)
        .filter(|hash| !hash.is_empty())
}
