//! Document loading and serialization
//!
//! Reads YAML files into a generic [`serde_yaml::Value`] tree and serializes
//! resolved trees back to YAML or JSON. Alias expansion happens at parse time:
//! `serde_yaml` replaces every `*alias` with an independently owned copy of the
//! anchored value, so no shared references survive loading. Merge keys (`<<`)
//! survive as literal mapping entries and are handled by the `merge` module.

use std::fs;
use std::path::Path;

use serde_yaml::Value;

use crate::error::{DeanchorError, Result};

/// Load a YAML file into a generic value tree
pub fn load(path: &Path) -> Result<Value> {
    let display = path.display().to_string();

    if !path.exists() {
        return Err(DeanchorError::FileNotFound { path: display });
    }

    let text = fs::read_to_string(path).map_err(|e| DeanchorError::FileReadFailed {
        path: display.clone(),
        reason: e.to_string(),
    })?;

    parse_str(&text, &display)
}

/// Parse YAML text into a generic value tree
///
/// `source` names the document in error diagnostics.
pub fn parse_str(text: &str, source: &str) -> Result<Value> {
    serde_yaml::from_str(text).map_err(|e| DeanchorError::ParseFailed {
        path: source.to_string(),
        reason: e.to_string(),
    })
}

/// Serialize a value tree as YAML
pub fn to_yaml(value: &Value) -> Result<String> {
    serde_yaml::to_string(value).map_err(|e| DeanchorError::SerializeFailed {
        reason: e.to_string(),
    })
}

/// Serialize a value tree as pretty-printed JSON
///
/// Scalar non-string mapping keys are stringified (`1:` becomes `"1":`).
/// Fails for documents JSON cannot represent, e.g. mappings with sequence or
/// mapping keys.
pub fn to_json(value: &Value) -> Result<String> {
    let mut text =
        serde_json::to_string_pretty(value).map_err(|e| DeanchorError::SerializeFailed {
            reason: e.to_string(),
        })?;
    text.push('\n');
    Ok(text)
}

/// Write serialized content to a file, overwriting any existing content
pub fn write(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|e| DeanchorError::FileWriteFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}
