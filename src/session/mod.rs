//! Review session engine
//!
//! Components:
//! - State machine: Bootstrapping -> AwaitingBatch -> Reviewing -> Complete
//! - Review queue: front-pop, back-requeue work list of flashcards
//! - Controller: drives ask -> evaluate -> score/requeue until the queue drains
//! - Summary: tally reported when the session completes

pub mod state;
pub mod queue;
pub mod summary;
pub mod controller;

// Re-export key types
pub use state::{SessionEvent, SessionState};
pub use queue::{QueuedCard, ReviewQueue};
pub use summary::SessionSummary;
pub use controller::{ReviewSession, SessionStores};
