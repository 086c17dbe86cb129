//! Dictionary file loading and saving.
//!
//! Dictionaries are flat JSON objects; key order is preserved on the way
//! in and on the way out. Nested values are rejected at load rather than
//! recursed into, so diff and merge semantics stay unambiguous.

use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// An ordered message dictionary (key -> translated string).
pub type Dictionary = serde_json::Map<String, Value>;

/// Message dictionary errors
#[derive(Debug, Error)]
pub enum MessageError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("dictionary parsing error in `{0}`")]
    Parse(PathBuf, #[source] serde_json::Error),

    #[error("`{0}` is not a JSON object")]
    NotAnObject(PathBuf),

    #[error("key `{key}` in `{path}` is not a string")]
    NotAString { path: PathBuf, key: String },
}

/// Load a dictionary from a JSON file.
///
/// The top level must be an object and every value must be a string.
pub fn load_dictionary(path: &Path) -> Result<Dictionary, MessageError> {
    let raw = fs::read_to_string(path).map_err(|e| MessageError::Io(path.to_path_buf(), e))?;

    let value: Value =
        serde_json::from_str(&raw).map_err(|e| MessageError::Parse(path.to_path_buf(), e))?;

    let Value::Object(dict) = value else {
        return Err(MessageError::NotAnObject(path.to_path_buf()));
    };

    for (key, value) in &dict {
        if !value.is_string() {
            return Err(MessageError::NotAString {
                path: path.to_path_buf(),
                key: key.clone(),
            });
        }
    }

    Ok(dict)
}

/// Save a dictionary as pretty-printed JSON with a trailing newline.
pub fn save_dictionary(path: &Path, dict: &Dictionary) -> Result<(), MessageError> {
    let mut out = serde_json::to_string_pretty(dict)
        .map_err(|e| MessageError::Parse(path.to_path_buf(), e))?;
    out.push('\n');
    fs::write(path, out).map_err(|e| MessageError::Io(path.to_path_buf(), e))
}

#[cfg(test)]
pub(crate) fn dict_from_pairs(pairs: &[(&str, &str)]) -> Dictionary {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), Value::String(v.to_string())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_save_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("en.json");

        let dict = dict_from_pairs(&[("title", "My Blog"), ("nav.home", "Home")]);
        save_dictionary(&path, &dict).unwrap();

        let loaded = load_dictionary(&path).unwrap();
        assert_eq!(loaded, dict);

        // key order survives the roundtrip
        let keys: Vec<_> = loaded.keys().collect();
        assert_eq!(keys, vec!["title", "nav.home"]);
    }

    #[test]
    fn test_saved_file_ends_with_newline() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("en.json");
        save_dictionary(&path, &dict_from_pairs(&[("a", "b")])).unwrap();
        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.ends_with('\n'));
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_dictionary(Path::new("/nonexistent/en.json")).unwrap_err();
        assert!(matches!(err, MessageError::Io(..)));
    }

    #[test]
    fn test_load_rejects_non_object() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "[1, 2, 3]").unwrap();
        let err = load_dictionary(&path).unwrap_err();
        assert!(matches!(err, MessageError::NotAnObject(..)));
    }

    #[test]
    fn test_load_rejects_nested_values() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested.json");
        fs::write(&path, r#"{"title": "ok", "nav": {"home": "Home"}}"#).unwrap();
        let err = load_dictionary(&path).unwrap_err();
        match err {
            MessageError::NotAString { key, .. } => assert_eq!(key, "nav"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_load_rejects_invalid_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();
        let err = load_dictionary(&path).unwrap_err();
        assert!(matches!(err, MessageError::Parse(..)));
    }
}
