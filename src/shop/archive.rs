/// Archived shops
///
/// When a new shop is generated, the images of the previous one are moved
/// to `{shops_dir}/archive/shop-{hash}.jpg` and
/// `{shops_dir}/archive/og/og-{hash}.jpg`. This module lists them.

use std::collections::BTreeMap;
use std::path::Path;
use walkdir::WalkDir;

use super::paths::{parse_item_shop_file_name, parse_og_file_name, ARCHIVE_DIR, OG_DIR};
use crate::error::{Error, Result};

/// One archived shop and the variants found for it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchivedShop {
    pub hash: String,
    pub has_item_shop: bool,
    pub has_og: bool,
}

/// List archived shops under `shops_dir`, sorted by hash.
///
/// A missing archive directory yields an empty list.
pub fn list_archived(shops_dir: &Path) -> Result<Vec<ArchivedShop>> {
    let archive_dir = shops_dir.join(ARCHIVE_DIR);
    if !archive_dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut shops: BTreeMap<String, ArchivedShop> = BTreeMap::new();

    for entry in WalkDir::new(&archive_dir).min_depth(1).max_depth(2) {
        let entry = entry.map_err(|source| Error::Archive {
            path: archive_dir.clone(),
            source,
        })?;

        if !entry.file_type().is_file() {
            continue;
        }

        let file_name = entry.file_name().to_string_lossy();
        let in_og_dir = entry.depth() == 2
            && entry
                .path()
                .parent()
                .and_then(|p| p.file_name())
                .is_some_and(|name| name == OG_DIR);

        let (hash, is_og) = if entry.depth() == 1 {
            match parse_item_shop_file_name(&file_name) {
                Some(hash) => (hash, false),
                None => continue,
            }
        } else if in_og_dir {
            match parse_og_file_name(&file_name) {
                Some(hash) => (hash, true),
                None => continue,
            }
        } else {
            continue;
        };

        let shop = shops.entry(hash.to_string()).or_insert_with(|| ArchivedShop {
            hash: hash.to_string(),
            has_item_shop: false,
            has_og: false,
        });

        if is_og {
            shop.has_og = true;
        } else {
            shop.has_item_shop = true;
        }
    }

    tracing::debug!("found {} archived shops in {}", shops.len(), archive_dir.display());

    Ok(shops.into_values().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_missing_archive_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        assert!(list_archived(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn test_lists_both_variants() {
        let dir = tempfile::tempdir().unwrap();
        let archive = dir.path().join("archive");
        fs::create_dir_all(archive.join("og")).unwrap();

        fs::write(archive.join("shop-aaa.jpg"), b"").unwrap();
        fs::write(archive.join("og").join("og-aaa.jpg"), b"").unwrap();
        fs::write(archive.join("shop-bbb.jpg"), b"").unwrap();
        fs::write(archive.join("og").join("og-ccc.jpg"), b"").unwrap();
        // Ignored: wrong names, wrong place
        fs::write(archive.join("notes.txt"), b"").unwrap();
        fs::write(archive.join("og-ddd.jpg"), b"").unwrap();
        fs::write(archive.join("og").join("shop-eee.jpg"), b"").unwrap();

        let shops = list_archived(dir.path()).unwrap();
        assert_eq!(
            shops,
            vec![
                ArchivedShop { hash: "aaa".into(), has_item_shop: true, has_og: true },
                ArchivedShop { hash: "bbb".into(), has_item_shop: true, has_og: false },
                ArchivedShop { hash: "ccc".into(), has_item_shop: false, has_og: true },
            ]
        );
    }

    #[test]
    fn test_lists_names_built_by_paths() {
        use crate::shop::paths::{item_shop_file_name, og_file_name};

        let dir = tempfile::tempdir().unwrap();
        let archive = dir.path().join("archive");
        fs::create_dir_all(archive.join("og")).unwrap();
        fs::write(archive.join(item_shop_file_name("f00d")), b"").unwrap();
        fs::write(archive.join("og").join(og_file_name("f00d")), b"").unwrap();

        let shops = list_archived(dir.path()).unwrap();
        assert_eq!(
            shops,
            vec![ArchivedShop { hash: "f00d".into(), has_item_shop: true, has_og: true }]
        );
    }

    #[test]
    fn test_current_shop_is_not_archived() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("archive")).unwrap();
        fs::write(dir.path().join("shop-live.jpg"), b"").unwrap();

        assert!(list_archived(dir.path()).unwrap().is_empty());
    }
}
