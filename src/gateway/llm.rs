//! Chat-completions backed gateway

use crate::config::GatewayConfig;
use crate::errors::Result;
use crate::gateway::client::ChatClient;
use crate::gateway::{parse, prompts, AnswerEvaluator, BatchRequest, ContentGenerator};
use crate::types::{FeedbackResult, Flashcard, Skill};
use async_trait::async_trait;
use tracing::debug;

/// Generation and evaluation through one chat model
#[derive(Debug, Clone)]
pub struct LlmGateway {
    client: ChatClient,
    generation_max_tokens: u32,
    feedback_max_tokens: u32,
}

impl LlmGateway {
    pub fn new(config: &GatewayConfig) -> Result<Self> {
        Ok(Self {
            client: ChatClient::new(config)?,
            generation_max_tokens: config.generation_max_tokens,
            feedback_max_tokens: config.feedback_max_tokens,
        })
    }

    pub fn client(&self) -> &ChatClient {
        &self.client
    }
}

#[async_trait]
impl ContentGenerator for LlmGateway {
    async fn generate_skills(&self, reference: &str) -> Result<Vec<Skill>> {
        debug!("Generating skills");
        let text = self
            .client
            .complete(&prompts::skills_prompt(reference), self.generation_max_tokens)
            .await?;
        debug!(response = %text, "Skills generated");
        parse::parse_skills(&text)
    }

    async fn generate_flashcards(&self, request: BatchRequest<'_>) -> Result<Vec<Flashcard>> {
        debug!(count = request.count, skills = request.mastery.len(), "Generating flashcards");
        let prompt = prompts::flashcards_prompt(request.mastery, request.count, request.topic);
        let text = self
            .client
            .complete(&prompt, self.generation_max_tokens)
            .await?;
        debug!(response = %text, "Flashcards generated");
        parse::parse_flashcards(&text)
    }
}

#[async_trait]
impl AnswerEvaluator for LlmGateway {
    async fn evaluate(&self, answer: &str, card: &Flashcard) -> Result<FeedbackResult> {
        debug!("Getting feedback");
        let text = self
            .client
            .complete(&prompts::feedback_prompt(answer, card), self.feedback_max_tokens)
            .await?;
        debug!(response = %text, "Feedback received");
        parse::parse_feedback(&text)
    }
}
