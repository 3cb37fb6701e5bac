//! Flashcards and answer feedback exchanged with the gateways

use crate::types::mastery::Skill;
use serde::{Deserialize, Serialize};

/// A generated question tagged with the skills it exercises
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flashcard {
    pub question: String,
    pub skills: Vec<Skill>,
}

impl Flashcard {
    pub fn new(question: impl Into<String>, skills: Vec<Skill>) -> Self {
        Self {
            question: question.into(),
            skills,
        }
    }

    /// Drop repeated skill tags, keeping the first occurrence
    pub fn dedup_skills(&mut self) {
        let mut seen = std::collections::HashSet::new();
        self.skills.retain(|skill| seen.insert(skill.clone()));
    }
}

/// Judgment of a single answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackResult {
    pub is_correct: bool,
    pub feedback: String,
    pub correct_answer: String,
    /// Skills the evaluator confirmed; informational only
    #[serde(default)]
    pub skills: Vec<Skill>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dedup_skills_keeps_order() {
        let mut card = Flashcard::new(
            "What is a lifetime?",
            vec!["Lifetimes".into(), "Borrowing".into(), "Lifetimes".into()],
        );
        card.dedup_skills();
        assert_eq!(card.skills, vec![Skill::from("Lifetimes"), Skill::from("Borrowing")]);
    }

    #[test]
    fn test_feedback_field_names() {
        let json = r#"{
            "feedback": "Good job!",
            "isCorrect": true,
            "correctAnswer": "A runtime.",
            "skills": ["Basics"]
        }"#;
        let feedback: FeedbackResult = serde_json::from_str(json).unwrap();
        assert!(feedback.is_correct);
        assert_eq!(feedback.correct_answer, "A runtime.");
        assert_eq!(feedback.skills, vec![Skill::from("Basics")]);
    }

    #[test]
    fn test_feedback_skills_optional() {
        let json = r#"{"feedback": "No.", "isCorrect": false, "correctAnswer": "Yes."}"#;
        let feedback: FeedbackResult = serde_json::from_str(json).unwrap();
        assert!(!feedback.is_correct);
        assert!(feedback.skills.is_empty());
    }

    #[test]
    fn test_feedback_requires_verdict() {
        let json = r#"{"feedback": "Hmm.", "correctAnswer": "Yes."}"#;
        assert!(serde_json::from_str::<FeedbackResult>(json).is_err());
    }
}
