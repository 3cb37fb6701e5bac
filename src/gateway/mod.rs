//! Text-generation gateways
//! 
//! The review engine talks to two external collaborators through the traits
//! below: one generates the skill catalog and flashcard batches, the other
//! judges free-text answers. `LlmGateway` implements both on top of a
//! chat-completions endpoint.

pub mod client;
pub mod prompts;
pub mod parse;
pub mod llm;

use crate::errors::Result;
use crate::types::{FeedbackResult, Flashcard, MasteryScore, Skill};
use async_trait::async_trait;

// Re-export commonly used types
pub use client::ChatClient;
pub use llm::LlmGateway;

/// Parameters for one flashcard batch
#[derive(Debug, Clone, Copy)]
pub struct BatchRequest<'a> {
    /// Mastery context used to calibrate difficulty
    pub mastery: &'a MasteryScore,
    /// Number of cards to ask for
    pub count: usize,
    /// Subject named in the prompt
    pub topic: &'a str,
}

/// Produces the skill catalog and flashcard batches
#[async_trait]
pub trait ContentGenerator: Send + Sync {
    /// Derive skill names from reference content
    async fn generate_skills(&self, reference: &str) -> Result<Vec<Skill>>;

    /// Generate one batch of flashcards calibrated to the mastery context
    async fn generate_flashcards(&self, request: BatchRequest<'_>) -> Result<Vec<Flashcard>>;
}

/// Judges a submitted answer
#[async_trait]
pub trait AnswerEvaluator: Send + Sync {
    async fn evaluate(&self, answer: &str, card: &Flashcard) -> Result<FeedbackResult>;
}
