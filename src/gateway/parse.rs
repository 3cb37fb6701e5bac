//! Strict parsing of gateway responses
//!
//! The whole response text must be the requested JSON document. There is no
//! attempt to dig JSON out of surrounding prose or code fences.

use crate::errors::{ReviewError, Result};
use crate::types::{FeedbackResult, Flashcard, Skill};
use std::collections::HashSet;

/// Parse a JSON array of skill names, dropping blanks and duplicates
pub fn parse_skills(text: &str) -> Result<Vec<Skill>> {
    let names: Vec<String> =
        serde_json::from_str(text.trim()).map_err(|source| ReviewError::MalformedResponse {
            what: "skills",
            source,
        })?;

    let mut seen = HashSet::new();
    let skills: Vec<Skill> = names
        .into_iter()
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty() && seen.insert(name.clone()))
        .map(Skill::from)
        .collect();

    if skills.is_empty() {
        return Err(ReviewError::InvalidResponse {
            what: "skills",
            reason: "no skill names returned".to_string(),
        });
    }

    Ok(skills)
}

/// Parse a JSON array of `{question, skills}` objects
pub fn parse_flashcards(text: &str) -> Result<Vec<Flashcard>> {
    let mut cards: Vec<Flashcard> =
        serde_json::from_str(text.trim()).map_err(|source| ReviewError::MalformedResponse {
            what: "flashcards",
            source,
        })?;

    if cards.is_empty() {
        return Err(ReviewError::EmptyBatch);
    }

    for (index, card) in cards.iter_mut().enumerate() {
        if card.question.trim().is_empty() {
            return Err(ReviewError::InvalidResponse {
                what: "flashcards",
                reason: format!("card {} has an empty question", index + 1),
            });
        }
        card.skills = card
            .skills
            .iter()
            .map(|skill| skill.as_str().trim())
            .filter(|name| !name.is_empty())
            .map(Skill::from)
            .collect();
        card.dedup_skills();
        if card.skills.is_empty() {
            return Err(ReviewError::InvalidResponse {
                what: "flashcards",
                reason: format!("card {} has no skills", index + 1),
            });
        }
    }

    Ok(cards)
}

/// Parse a `{feedback, isCorrect, correctAnswer, skills}` object
pub fn parse_feedback(text: &str) -> Result<FeedbackResult> {
    serde_json::from_str(text.trim()).map_err(|source| ReviewError::MalformedResponse {
        what: "feedback",
        source,
    })
}
