//! # Input Loader
//!
//! Reads a JSON input file into a list of raw records. Record fields are
//! checked later, by `sales_core`, so this layer only cares about the file
//! and the top-level shape.

use std::io::ErrorKind;
use std::path::Path;

use serde_json::Value;
use tracing::debug;

use crate::error::{AppError, AppResult};

/// Loads a JSON file holding an array of records.
///
/// A top-level `null` is read as an empty list, which the caller reports as
/// empty input.
pub fn load_json_file(path: &Path) -> AppResult<Vec<Value>> {
    let contents = std::fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => AppError::FileNotFound(path.to_path_buf()),
        _ => AppError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let value: Value = serde_json::from_str(&contents).map_err(|source| AppError::InvalidJson {
        path: path.to_path_buf(),
        source,
    })?;

    let records = match value {
        Value::Array(records) => records,
        Value::Null => Vec::new(),
        _ => return Err(AppError::NotAnArray(path.to_path_buf())),
    };

    debug!(?path, records = records.len(), "Loaded JSON input");
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_loads_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prices.json");
        fs::write(&path, r#"[{"title": "Widget", "price": 2.5}, {"title": "Gizmo", "price": 1}]"#)
            .unwrap();

        let records = load_json_file(&path).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["title"], "Widget");
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_json_file(&dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, AppError::FileNotFound(_)));
    }

    #[test]
    fn test_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "[{\"title\": ").unwrap();

        let err = load_json_file(&path).unwrap_err();
        assert!(matches!(err, AppError::InvalidJson { .. }));
    }

    #[test]
    fn test_object_is_not_an_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("object.json");
        fs::write(&path, r#"{"title": "Widget"}"#).unwrap();

        let err = load_json_file(&path).unwrap_err();
        assert!(matches!(err, AppError::NotAnArray(_)));
    }

    #[test]
    fn test_null_and_empty_array_load_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let null = dir.path().join("null.json");
        let empty = dir.path().join("empty.json");
        fs::write(&null, "null").unwrap();
        fs::write(&empty, "[]").unwrap();

        assert!(load_json_file(&null).unwrap().is_empty());
        assert!(load_json_file(&empty).unwrap().is_empty());
    }
}
