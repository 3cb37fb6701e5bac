//! skillcards - adaptive flashcard review
//! 
//! Derives a skill catalog from a reference document, generates flashcards
//! calibrated to per-skill mastery, and drills them until every card has been
//! answered correctly. Mastery persists across sessions.
//! 
//! # Architecture
//! 
//! - **store**: mastery scores and skill catalog as atomic JSON documents
//! - **gateway**: content generation and answer evaluation over chat completions
//! - **session**: state machine, retry queue and the review controller
//! - **console**: terminal input/output behind the `ReviewConsole` trait

pub mod errors;
pub mod types;

// Re-export commonly used types
pub use errors::{ReviewError, Result};

pub mod cli;
pub mod config;
pub mod store;
pub mod gateway;
pub mod session;
pub mod console;

pub use config::AppConfig;
pub use session::{ReviewSession, SessionStores, SessionSummary};
