//! Type definitions module
//! 
//! Core data model for skills, mastery, flashcards, and answer feedback.

pub mod mastery;
pub mod cards;

// Re-export commonly used types
pub use mastery::{MasteryScore, Skill};
pub use cards::{FeedbackResult, Flashcard};
