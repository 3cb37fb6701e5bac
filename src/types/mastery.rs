//! Skills and per-skill mastery counters
//!
//! Mastery only ever grows: the only mutation is an increment on a
//! correctly answered card. An absent skill reads as zero.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// A topic label derived from the reference material
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Skill(String);

impl Skill {
    pub fn new(name: impl Into<String>) -> Self {
        Skill(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Skill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Skill {
    fn from(name: &str) -> Self {
        Skill(name.to_string())
    }
}

impl From<String> for Skill {
    fn from(name: String) -> Self {
        Skill(name)
    }
}

impl Borrow<str> for Skill {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Baseline level assigned to every catalog skill before any history exists
pub const BASELINE_MASTERY: u64 = 1;

/// Skill name -> number of correct answers touching that skill
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MasteryScore {
    levels: BTreeMap<Skill, u64>,
}

impl MasteryScore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uniform low-mastery context for a catalog with no recorded history
    pub fn baseline<'a>(skills: impl IntoIterator<Item = &'a Skill>) -> Self {
        let levels = skills
            .into_iter()
            .map(|skill| (skill.clone(), BASELINE_MASTERY))
            .collect();
        Self { levels }
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Current level, zero when the skill has never been credited
    pub fn get(&self, skill: &str) -> u64 {
        self.levels.get(skill).copied().unwrap_or(0)
    }

    /// Add one to a skill, creating it at zero first. Returns the new level.
    pub fn increment(&mut self, skill: &Skill) -> u64 {
        let level = self.levels.entry(skill.clone()).or_insert(0);
        *level += 1;
        *level
    }

    /// Credit a correctly answered card: each distinct skill gains exactly one
    pub fn record_correct(&mut self, skills: &[Skill]) {
        let distinct: BTreeSet<&Skill> = skills.iter().collect();
        for skill in distinct {
            self.increment(skill);
        }
    }

    /// Per-skill gain relative to an earlier snapshot, omitting unchanged skills
    pub fn gains_since(&self, earlier: &MasteryScore) -> BTreeMap<Skill, u64> {
        self.levels
            .iter()
            .filter_map(|(skill, &level)| {
                let before = earlier.get(skill.as_str());
                (level > before).then(|| (skill.clone(), level - before))
            })
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Skill, u64)> {
        self.levels.iter().map(|(skill, &level)| (skill, level))
    }
}

impl FromIterator<(Skill, u64)> for MasteryScore {
    fn from_iter<I: IntoIterator<Item = (Skill, u64)>>(iter: I) -> Self {
        Self {
            levels: iter.into_iter().collect(),
        }
    }
}
