//! Session state machine
//!
//! Deterministic transitions for one review session:
//! - Bootstrapping -> AwaitingBatch (on: Bootstrapped)
//! - AwaitingBatch -> Reviewing     (on: BatchReady)
//! - Reviewing     -> Complete      (on: QueueDrained)
//! - any non-terminal -> Aborted    (on: Failure)
//! - Complete and Aborted are terminal (self-loops)

use crate::errors::{ReviewError, Result};
use serde::{Deserialize, Serialize};

/// Review session states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionState {
    /// Loading mastery, reading reference, loading or generating the catalog
    Bootstrapping,

    /// Waiting for the flashcard batch
    AwaitingBatch,

    /// Question/answer loop over the review queue
    Reviewing,

    /// Queue drained, summary emitted (terminal)
    Complete,

    /// A fatal error ended the session (terminal)
    Aborted,
}

/// Events that trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// Mastery and catalog are available
    Bootstrapped,

    /// A non-empty batch populated the queue
    BatchReady,

    /// Every card has been answered correctly
    QueueDrained,

    /// Gateway, parse, persistence or input failure
    Failure,
}

impl SessionState {
    /// Check if this is a terminal state
    pub fn is_terminal(&self) -> bool {
        matches!(self, SessionState::Complete | SessionState::Aborted)
    }

    /// Attempt state transition with validation
    pub fn transition(&self, event: SessionEvent) -> Result<SessionState> {
        use SessionEvent::*;
        use SessionState::*;

        let next_state = match (self, event) {
            (Bootstrapping, Bootstrapped) => AwaitingBatch,
            (AwaitingBatch, BatchReady) => Reviewing,
            (Reviewing, QueueDrained) => Complete,

            (Complete, _) => Complete,
            (Aborted, _) => Aborted,

            (_, Failure) => Aborted,

            (from, event) => {
                return Err(ReviewError::InvalidTransition {
                    from: format!("{:?}", from),
                    event: format!("{:?}", event),
                });
            }
        };

        Ok(next_state)
    }
}
