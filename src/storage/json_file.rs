use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::error::{EstateError, EstateResult};

/// Reads and deserializes a JSON file. A missing file is `Ok(None)`.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> EstateResult<Option<T>> {
    if !path.exists() {
        debug!(file = %path.display(), "json file not found");
        return Ok(None);
    }
    let json_str = fs::read_to_string(path)?;
    let value = serde_json::from_str(&json_str).map_err(|e| {
        EstateError::DataLoading(format!("{}: {}", path.display(), e))
    })?;
    Ok(Some(value))
}

/// Serializes `value` as pretty JSON, creating parent directories as needed.
pub fn save_json<T: Serialize>(path: &Path, value: &T) -> EstateResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let json_str = serde_json::to_string_pretty(value)?;
    fs::write(path, json_str)?;
    debug!(file = %path.display(), "json file written");
    Ok(())
}
