//! Reference content input

use crate::errors::{ReviewError, Result};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Read the reference document the skill catalog is derived from.
///
/// A missing file is a configuration error, raised before any gateway call.
pub fn read_reference(path: &Path) -> Result<String> {
    if !path.is_file() {
        return Err(ReviewError::MissingReference {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path).map_err(|source| ReviewError::Persistence {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = content.len(), "Resources content loaded");

    Ok(content)
}
