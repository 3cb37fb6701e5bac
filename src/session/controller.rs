//! Review session controller
//!
//! Drives one session end to end:
//! 1. Bootstrapping: load mastery, read reference, load or generate the catalog
//! 2. AwaitingBatch: request exactly one flashcard batch
//! 3. Reviewing: ask -> evaluate -> credit or requeue, persisting after every answer
//! 4. Complete: entered once the summary is shown, saved and input released
//!
//! Any error aborts the session. Mastery already saved stays on disk.

use crate::config::{PathsConfig, SessionConfig};
use crate::console::ReviewConsole;
use crate::errors::{ReviewError, Result};
use crate::gateway::{AnswerEvaluator, BatchRequest, ContentGenerator};
use crate::session::queue::ReviewQueue;
use crate::session::state::{SessionEvent, SessionState};
use crate::session::summary::SessionSummary;
use crate::store::{read_reference, MasteryStore, SkillCatalog};
use crate::types::{MasteryScore, Skill};
use std::future::Future;
use std::path::PathBuf;
use tracing::{debug, info};

/// Persisted inputs and outputs of a session
#[derive(Debug, Clone)]
pub struct SessionStores {
    pub mastery: MasteryStore,
    pub catalog: SkillCatalog,
    pub reference: PathBuf,
}

impl SessionStores {
    pub fn from_paths(paths: &PathsConfig) -> Self {
        Self {
            mastery: MasteryStore::new(&paths.score),
            catalog: SkillCatalog::new(&paths.skills),
            reference: paths.resources.clone(),
        }
    }
}

/// One review session over borrowed collaborators
pub struct ReviewSession<'a, G: ?Sized, E: ?Sized> {
    config: &'a SessionConfig,
    stores: &'a SessionStores,
    generator: &'a G,
    evaluator: &'a E,
    state: SessionState,
}

impl<'a, G, E> ReviewSession<'a, G, E>
where
    G: ContentGenerator + ?Sized,
    E: AnswerEvaluator + ?Sized,
{
    pub fn new(
        config: &'a SessionConfig,
        stores: &'a SessionStores,
        generator: &'a G,
        evaluator: &'a E,
    ) -> Self {
        Self {
            config,
            stores,
            generator,
            evaluator,
            state: SessionState::Bootstrapping,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Run the session to completion or the first fatal error
    pub async fn run<C: ReviewConsole>(&mut self, console: &mut C) -> Result<SessionSummary> {
        match self.drive(console).await {
            Ok(summary) => Ok(summary),
            Err(e) => {
                console.end_activity();
                self.state = self.state.transition(SessionEvent::Failure)?;
                debug!(error = %e, "Session aborted");
                Err(e)
            }
        }
    }

    async fn drive<C: ReviewConsole>(&mut self, console: &mut C) -> Result<SessionSummary> {
        let (mut mastery, catalog) = self.bootstrap(console).await?;
        self.advance(SessionEvent::Bootstrapped)?;

        let context = if mastery.is_empty() {
            MasteryScore::baseline(&catalog)
        } else {
            mastery.clone()
        };
        let batch = activity(
            console,
            "Generating flashcards",
            self.generator.generate_flashcards(BatchRequest {
                mastery: &context,
                count: self.config.cards,
                topic: &self.config.topic,
            }),
        )
        .await?;
        if batch.is_empty() {
            return Err(ReviewError::EmptyBatch);
        }
        let mut queue = ReviewQueue::new(batch);
        info!(cards = queue.original_len(), "Flashcard batch ready");
        self.advance(SessionEvent::BatchReady)?;

        let starting = mastery.clone();
        let total = queue.original_len();
        let mut correct = 0;

        while let Some(queued) = queue.next_card() {
            console.show_question(correct + 1, total, &queued.card.question);
            let answer = console.read_answer()?;

            let feedback = activity(
                console,
                "Getting feedback",
                self.evaluator.evaluate(&answer, &queued.card),
            )
            .await?;
            console.show_feedback(&feedback);

            if feedback.is_correct {
                mastery.record_correct(&queued.card.skills);
                correct += 1;
                debug!(card = queued.id, attempts = queued.attempts, "Answered correctly");
            } else {
                debug!(card = queued.id, attempts = queued.attempts, "Answered incorrectly, requeued");
                queue.requeue(queued);
            }

            self.stores.mastery.save(&mastery)?;
        }

        let summary = SessionSummary {
            correct,
            total,
            attempts: queue.presentations(),
            gains: mastery.gains_since(&starting),
        };
        console.show_summary(&summary);
        self.stores.mastery.save(&mastery)?;
        console.close()?;
        self.advance(SessionEvent::QueueDrained)?;

        info!(correct, total, attempts = summary.attempts, "Session complete");
        Ok(summary)
    }

    async fn bootstrap<C: ReviewConsole>(
        &mut self,
        console: &mut C,
    ) -> Result<(MasteryScore, Vec<Skill>)> {
        debug!("Reading skill score");
        let mastery = self.stores.mastery.load()?;

        debug!("Reading resources content");
        let reference = read_reference(&self.stores.reference)?;

        debug!("Reading or initializing skills");
        let catalog = match self.stores.catalog.load()? {
            Some(skills) => skills,
            None => {
                info!("Generating new skills");
                let skills = activity(
                    console,
                    "Updating skills",
                    self.generator.generate_skills(&reference),
                )
                .await?;
                self.stores.catalog.save(&skills)?;
                skills
            }
        };

        Ok((mastery, catalog))
    }

    fn advance(&mut self, event: SessionEvent) -> Result<()> {
        let next = self.state.transition(event)?;
        debug!(from = ?self.state, to = ?next, "Session transition");
        self.state = next;
        Ok(())
    }
}

/// Await a gateway call behind the console's busy indicator
async fn activity<C, F, T>(console: &mut C, label: &str, call: F) -> Result<T>
where
    C: ReviewConsole,
    F: Future<Output = Result<T>>,
{
    console.begin_activity(label);
    let result = call.await;
    console.end_activity();
    result
}
