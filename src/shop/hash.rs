/// The hash file written by the shop generator
///
/// Format: `{"hash": "<shop hash>"}`. The generator initialises it with
/// an empty hash before the first shop has been fetched.

use serde::Deserialize;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::{Error, Result};
use crate::state::data::ShopIdentifier;

#[derive(Debug, Deserialize)]
struct HashFile {
    #[serde(default)]
    hash: String,
}

/// Read the current shop hash.
///
/// Returns `Ok(None)` if the file does not exist or holds an empty hash.
pub fn read_hash_file(path: &Path) -> Result<Option<ShopIdentifier>> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(Error::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let parsed: HashFile = serde_json::from_str(&contents).map_err(|source| Error::HashFile {
        path: path.to_path_buf(),
        source,
    })?;

    if parsed.hash.trim().is_empty() {
        return Ok(None);
    }

    ShopIdentifier::new(parsed.hash).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_reads_hash() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hash.json");
        fs::write(&path, r#"{"hash": "abc123"}"#).unwrap();

        let hash = read_hash_file(&path).unwrap().unwrap();
        assert_eq!(hash.as_str(), "abc123");
    }

    #[test]
    fn test_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        assert!(read_hash_file(&dir.path().join("hash.json")).unwrap().is_none());
    }

    #[test]
    fn test_empty_hash_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hash.json");
        fs::write(&path, r#"{"hash": ""}"#).unwrap();

        assert!(read_hash_file(&path).unwrap().is_none());
    }

    #[test]
    fn test_malformed_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hash.json");
        fs::write(&path, "not json").unwrap();

        assert!(matches!(read_hash_file(&path), Err(Error::HashFile { .. })));
    }
}
