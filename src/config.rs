//! Render data loading.
//! Data files may be written in JSON or YAML and must hold a mapping at the
//! top level.

use crate::error::{Error, Result};
use log::debug;
use std::path::Path;

/// Parses render data from `content`.
///
/// JSON is tried first, then YAML. Blank content yields an empty mapping.
///
/// # Errors
/// * `Error::ConfigError` if the content is neither JSON nor YAML, or if the
///   top-level value is not a mapping
pub fn parse_data(content: &str) -> Result<serde_json::Value> {
    if content.trim().is_empty() {
        return Ok(serde_json::Value::Object(serde_json::Map::new()));
    }

    let value: serde_json::Value = match serde_json::from_str(content) {
        Ok(v) => v,
        Err(_) => serde_yaml::from_str(content)
            .map_err(|e| Error::ConfigError(format!("Invalid data format: {e}")))?,
    };

    if !value.is_object() {
        return Err(Error::ConfigError(
            "Render data must be a mapping of names to values".to_string(),
        ));
    }
    Ok(value)
}

/// Reads and parses the render data file at `path`.
pub fn load_data<P: AsRef<Path>>(path: P) -> Result<serde_json::Value> {
    let path = path.as_ref();
    debug!("Loading render data from {}", path.display());
    let content = std::fs::read_to_string(path).map_err(Error::IoError)?;
    parse_data(&content)
}
