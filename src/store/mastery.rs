//! Mastery score persistence

use crate::errors::Result;
use crate::store::document::{load_json, save_json};
use crate::types::MasteryScore;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File-backed mastery scores (skill name -> count)
#[derive(Debug, Clone)]
pub struct MasteryStore {
    path: PathBuf,
}

impl MasteryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Load persisted scores; an absent file is an empty mapping
    pub fn load(&self) -> Result<MasteryScore> {
        match load_json::<MasteryScore>(&self.path)? {
            Some(score) => {
                debug!(skills = score.len(), "Skill score loaded");
                Ok(score)
            }
            None => {
                debug!("No existing skill score found");
                Ok(MasteryScore::new())
            }
        }
    }

    /// Replace the persisted scores with the full current mapping
    pub fn save(&self, score: &MasteryScore) -> Result<()> {
        save_json(&self.path, score)?;
        debug!(skills = score.len(), "Skill score saved");
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
