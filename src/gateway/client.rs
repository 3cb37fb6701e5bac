//! Chat completions client
//!
//! Sends a single user prompt (behind a fixed system message) and returns
//! the first choice's text, trimmed. One request at a time, no retries.

use crate::config::GatewayConfig;
use crate::errors::{ReviewError, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// System message sent with every request
const SYSTEM_PROMPT: &str = "You are a helpful assistant.";

/// HTTP client for a chat-completions endpoint
#[derive(Debug, Clone)]
pub struct ChatClient {
    client: Client,
    api_url: String,
    api_key: String,
    model: String,
}

impl ChatClient {
    /// Create client from gateway configuration
    pub fn new(config: &GatewayConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(ReviewError::HttpError)?;

        Ok(Self {
            client,
            api_url: config.api_url.clone(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
        })
    }

    /// Request a completion and return its text content
    pub async fn complete(&self, prompt: &str, max_tokens: u32) -> Result<String> {
        let request = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: prompt.to_string(),
                },
            ],
            max_tokens,
        };

        debug!(model = %self.model, max_tokens, prompt_len = prompt.len(), "Sending completion request");

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| ReviewError::Gateway(format!("Failed to send request: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ReviewError::Gateway(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        let completion: ChatResponse = response
            .json()
            .await
            .map_err(|e| ReviewError::Gateway(format!("Failed to parse completion: {}", e)))?;

        let content = completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content.trim().to_string())
            .ok_or_else(|| ReviewError::Gateway("Completion contained no choices".to_string()))?;

        trace!(content = %content, "Completion received");
        Ok(content)
    }

    /// Get current model name
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Get endpoint URL
    pub fn api_url(&self) -> &str {
        &self.api_url
    }
}

/// Chat completions request body
#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

/// Chat completions response body (only the fields we read)
#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChatMessage,
}
