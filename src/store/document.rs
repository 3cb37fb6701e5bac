//! JSON document helpers shared by the stores
//!
//! Writes go to a sibling `.tmp` file which is synced and then renamed over
//! the target, so a crash leaves either the old or the new document.

use crate::errors::{ReviewError, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// Read and parse a document. `Ok(None)` when the file does not exist.
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    if !path.exists() {
        debug!(path = %path.display(), "No existing document");
        return Ok(None);
    }

    let raw = fs::read_to_string(path).map_err(|source| ReviewError::Persistence {
        path: path.to_path_buf(),
        source,
    })?;
    trace!(path = %path.display(), bytes = raw.len(), "Document read");

    let value = serde_json::from_str(&raw).map_err(|source| ReviewError::CorruptState {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(Some(value))
}

/// Serialize pretty-printed and atomically replace `path`
pub fn save_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    write_atomic(path, json.as_bytes())
}

fn write_atomic(path: &Path, content: &[u8]) -> Result<()> {
    let persistence = |source: std::io::Error| ReviewError::Persistence {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(persistence)?;
    }

    let tmp_path = temp_path_for(path);
    {
        let mut file = File::create(&tmp_path).map_err(persistence)?;
        file.write_all(content).map_err(persistence)?;
        file.sync_all().map_err(persistence)?;
    }

    fs::rename(&tmp_path, path).map_err(persistence)?;

    debug!(path = %path.display(), bytes = content.len(), "Atomic write completed");
    Ok(())
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
