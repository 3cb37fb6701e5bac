//! Skill catalog persistence
//!
//! The catalog is generated once from the reference content and reused by
//! every later session. It is never refreshed.

use crate::errors::Result;
use crate::store::document::{load_json, save_json};
use crate::types::Skill;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File-backed ordered list of skill names
#[derive(Debug, Clone)]
pub struct SkillCatalog {
    path: PathBuf,
}

impl SkillCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Cached catalog, or `None` if it was never generated.
    ///
    /// An empty array counts as never generated.
    pub fn load(&self) -> Result<Option<Vec<Skill>>> {
        match load_json::<Vec<Skill>>(&self.path)? {
            Some(skills) if !skills.is_empty() => {
                debug!(count = skills.len(), "Skills loaded");
                Ok(Some(skills))
            }
            _ => {
                debug!("No existing skills found");
                Ok(None)
            }
        }
    }

    pub fn save(&self, skills: &[Skill]) -> Result<()> {
        save_json(&self.path, &skills)?;
        debug!(count = skills.len(), "Skills saved");
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
