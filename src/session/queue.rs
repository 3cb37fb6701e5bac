//! Retry queue of flashcards
//!
//! Cards are consumed from the front; a card answered incorrectly goes back
//! to the end. There is no retry limit. The queue never holds two copies of
//! the same card.

use crate::types::Flashcard;
use std::collections::VecDeque;

/// A card in flight together with its batch position and attempt count
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueuedCard {
    /// Position in the generated batch (0-based)
    pub id: usize,
    pub card: Flashcard,
    /// Times this card has been presented so far
    pub attempts: u32,
}

/// Work list for one review session
#[derive(Debug, Clone, Default)]
pub struct ReviewQueue {
    pending: VecDeque<QueuedCard>,
    original_len: usize,
    presentations: usize,
}

impl ReviewQueue {
    /// Build the queue in generation order
    pub fn new(batch: Vec<Flashcard>) -> Self {
        let original_len = batch.len();
        let pending = batch
            .into_iter()
            .enumerate()
            .map(|(id, card)| QueuedCard {
                id,
                card,
                attempts: 0,
            })
            .collect();

        Self {
            pending,
            original_len,
            presentations: 0,
        }
    }

    /// Take the next card to present, counting the presentation
    pub fn next_card(&mut self) -> Option<QueuedCard> {
        let mut queued = self.pending.pop_front()?;
        queued.attempts += 1;
        self.presentations += 1;
        Some(queued)
    }

    /// Put an incorrectly answered card at the back
    pub fn requeue(&mut self, queued: QueuedCard) {
        self.pending.push_back(queued);
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Cards still waiting, including requeued ones
    pub fn remaining(&self) -> usize {
        self.pending.len()
    }

    /// Distinct cards in the original batch
    pub fn original_len(&self) -> usize {
        self.original_len
    }

    /// Total presentations so far, retries included
    pub fn presentations(&self) -> usize {
        self.presentations
    }
}
