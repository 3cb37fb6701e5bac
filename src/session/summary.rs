//! End-of-session tally

use crate::types::Skill;
use std::collections::BTreeMap;
use std::fmt;

/// Outcome of a completed review session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSummary {
    /// Cards answered correctly
    pub correct: usize,
    /// Distinct cards in the generated batch
    pub total: usize,
    /// Presentations including retries
    pub attempts: usize,
    /// Mastery gained this session, per skill
    pub gains: BTreeMap<Skill, u64>,
}

impl SessionSummary {
    /// Presentations that were not first-try correct
    pub fn retries(&self) -> usize {
        self.attempts.saturating_sub(self.total)
    }
}

impl fmt::Display for SessionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "You have completed the flashcard session with {}/{} correct answers.",
            self.correct, self.total
        )
    }
}
