//! Error types for skillcards
//!
//! Every variant is fatal to a review session. Mastery already written to
//! disk by earlier cards stays valid; nothing is rolled back.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the review engine
#[derive(Error, Debug)]
pub enum ReviewError {
    /// Missing credential or invalid settings
    #[error("Configuration error: {0}")]
    Config(String),

    /// The reference content file does not exist
    #[error("Reference file not found: {}", path.display())]
    MissingReference { path: PathBuf },

    /// I/O failure while reading or writing a state file
    #[error("Failed to access {}: {source}", path.display())]
    Persistence {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Persisted state exists but is not valid JSON of the expected shape
    #[error("Corrupt state file {}: {source}", path.display())]
    CorruptState {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Transport failure or non-success status from a gateway
    #[error("Gateway error: {0}")]
    Gateway(String),

    /// Gateway answered, but the text was not the JSON we asked for
    #[error("Malformed {what} response: {source}")]
    MalformedResponse {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// Parsed JSON violated a content rule (empty question, no skills, ...)
    #[error("Invalid {what} response: {reason}")]
    InvalidResponse { what: &'static str, reason: String },

    /// Generation produced no flashcards
    #[error("Flashcard batch is empty")]
    EmptyBatch,

    /// Input stream closed while waiting for an answer
    #[error("Input closed before the session finished")]
    InputClosed,

    /// Session state machine errors
    #[error("Invalid session transition from {from} on {event}")]
    InvalidTransition { from: String, event: String },

    /// HTTP client errors
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// I/O errors
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Generic errors with context
    #[error("{0}")]
    Generic(String),
}

impl ReviewError {
    /// Startup problems the user has to fix before anything runs
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            ReviewError::Config(_) | ReviewError::MissingReference { .. }
        )
    }

    /// Process exit status for this error
    pub fn exit_code(&self) -> u8 {
        if self.is_configuration() {
            2
        } else {
            1
        }
    }
}

/// Result type alias for review operations
pub type Result<T> = std::result::Result<T, ReviewError>;

/// Convert anyhow errors to ReviewError
impl From<anyhow::Error> for ReviewError {
    fn from(err: anyhow::Error) -> Self {
        ReviewError::Generic(err.to_string())
    }
}
