//! Scripted gateway and console doubles shared by the integration tests

#![allow(dead_code)]

use async_trait::async_trait;
use skillcards::config::{PathsConfig, SessionConfig};
use skillcards::console::ReviewConsole;
use skillcards::gateway::{AnswerEvaluator, BatchRequest, ContentGenerator};
use skillcards::types::{FeedbackResult, Flashcard, MasteryScore, Skill};
use skillcards::{ReviewError, Result, SessionStores, SessionSummary};
use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use tempfile::TempDir;

pub const CORRECT: &str = "right";
pub const WRONG: &str = "wrong";

pub fn card(question: &str, skills: &[&str]) -> Flashcard {
    Flashcard::new(question, skills.iter().map(|s| Skill::from(*s)).collect())
}

pub fn skills(names: &[&str]) -> Vec<Skill> {
    names.iter().map(|s| Skill::from(*s)).collect()
}

/// Temp data directory with a reference file in place
pub struct Workspace {
    pub dir: TempDir,
    pub stores: SessionStores,
    pub config: SessionConfig,
}

impl Workspace {
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("resources.md"), "# Notes\nSome reference text.").unwrap();
        let stores = SessionStores::from_paths(&PathsConfig::in_dir(dir.path()));
        let config = SessionConfig {
            cards: 10,
            topic: "testing".to_string(),
        };
        Self { dir, stores, config }
    }

    pub fn with_catalog(names: &[&str]) -> Self {
        let workspace = Self::new();
        workspace.stores.catalog.save(&skills(names)).unwrap();
        workspace
    }

    pub fn saved_mastery(&self) -> MasteryScore {
        self.stores.mastery.load().unwrap()
    }
}

/// Generator returning a fixed catalog and batch, counting calls
pub struct ScriptedGenerator {
    pub catalog: Vec<Skill>,
    pub batch: Vec<Flashcard>,
    pub skill_calls: AtomicUsize,
    pub batch_calls: AtomicUsize,
    pub last_context: Mutex<Option<MasteryScore>>,
    pub fail_batch: bool,
}

impl ScriptedGenerator {
    pub fn new(catalog: &[&str], batch: Vec<Flashcard>) -> Self {
        Self {
            catalog: skills(catalog),
            batch,
            skill_calls: AtomicUsize::new(0),
            batch_calls: AtomicUsize::new(0),
            last_context: Mutex::new(None),
            fail_batch: false,
        }
    }

    pub fn failing_batch(mut self) -> Self {
        self.fail_batch = true;
        self
    }

    pub fn skill_calls(&self) -> usize {
        self.skill_calls.load(Ordering::SeqCst)
    }

    pub fn batch_calls(&self) -> usize {
        self.batch_calls.load(Ordering::SeqCst)
    }

    pub fn context(&self) -> Option<MasteryScore> {
        self.last_context.lock().unwrap().clone()
    }
}

#[async_trait]
impl ContentGenerator for ScriptedGenerator {
    async fn generate_skills(&self, _reference: &str) -> Result<Vec<Skill>> {
        self.skill_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.catalog.clone())
    }

    async fn generate_flashcards(&self, request: BatchRequest<'_>) -> Result<Vec<Flashcard>> {
        self.batch_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_context.lock().unwrap() = Some(request.mastery.clone());
        if self.fail_batch {
            return Err(ReviewError::Gateway("HTTP 503: unavailable".to_string()));
        }
        Ok(self.batch.clone())
    }
}

/// Evaluator judging `CORRECT` as right and anything else as wrong.
/// After `fail_after` evaluations it returns an unparseable-response error.
pub struct KeywordEvaluator {
    pub calls: AtomicUsize,
    pub fail_after: Option<usize>,
}

impl KeywordEvaluator {
    pub fn new() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            fail_after: None,
        }
    }

    pub fn failing_after(calls: usize) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            fail_after: Some(calls),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AnswerEvaluator for KeywordEvaluator {
    async fn evaluate(&self, answer: &str, card: &Flashcard) -> Result<FeedbackResult> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_after.is_some_and(|limit| call >= limit) {
            return Err(skillcards::gateway::parse::parse_feedback("not json").unwrap_err());
        }
        let is_correct = answer == CORRECT;
        Ok(FeedbackResult {
            is_correct,
            feedback: if is_correct { "Good job!" } else { "Not quite." }.to_string(),
            correct_answer: format!("The answer to {}", card.question),
            skills: card.skills.clone(),
        })
    }
}

/// Evaluator failing each question a fixed number of times before accepting it
pub struct CountdownEvaluator {
    remaining: Mutex<HashMap<String, usize>>,
}

impl CountdownEvaluator {
    pub fn new(failures: HashMap<String, usize>) -> Self {
        Self {
            remaining: Mutex::new(failures),
        }
    }
}

#[async_trait]
impl AnswerEvaluator for CountdownEvaluator {
    async fn evaluate(&self, _answer: &str, card: &Flashcard) -> Result<FeedbackResult> {
        let mut remaining = self.remaining.lock().unwrap();
        let left = remaining.entry(card.question.clone()).or_insert(0);
        let is_correct = *left == 0;
        if !is_correct {
            *left -= 1;
        }
        Ok(FeedbackResult {
            is_correct,
            feedback: String::new(),
            correct_answer: String::new(),
            skills: Vec::new(),
        })
    }
}

/// Console replaying canned answers and recording everything shown
#[derive(Default)]
pub struct ScriptedConsole {
    pub answers: VecDeque<String>,
    pub default_answer: Option<String>,
    pub questions: Vec<(usize, usize, String)>,
    pub verdicts: Vec<bool>,
    pub activities: Vec<String>,
    pub open_activities: usize,
    pub summary: Option<SessionSummary>,
    pub closed: bool,
    pub fail_close: bool,
}

impl ScriptedConsole {
    pub fn answering(answers: &[&str]) -> Self {
        Self {
            answers: answers.iter().map(|a| a.to_string()).collect(),
            ..Default::default()
        }
    }

    /// Never runs out of answers
    pub fn always(answer: &str) -> Self {
        Self {
            default_answer: Some(answer.to_string()),
            ..Default::default()
        }
    }

    /// Releasing input fails at the end of the session
    pub fn failing_close(mut self) -> Self {
        self.fail_close = true;
        self
    }

    pub fn asked(&self) -> Vec<&str> {
        self.questions.iter().map(|(_, _, q)| q.as_str()).collect()
    }
}

impl ReviewConsole for ScriptedConsole {
    fn begin_activity(&mut self, label: &str) {
        self.activities.push(label.to_string());
        self.open_activities += 1;
    }

    fn end_activity(&mut self) {
        self.open_activities = self.open_activities.saturating_sub(1);
    }

    fn show_question(&mut self, position: usize, total: usize, question: &str) {
        self.questions.push((position, total, question.to_string()));
    }

    fn read_answer(&mut self) -> Result<String> {
        self.answers
            .pop_front()
            .or_else(|| self.default_answer.clone())
            .ok_or(ReviewError::InputClosed)
    }

    fn show_feedback(&mut self, feedback: &FeedbackResult) {
        self.verdicts.push(feedback.is_correct);
    }

    fn show_summary(&mut self, summary: &SessionSummary) {
        self.summary = Some(summary.clone());
    }

    fn close(&mut self) -> Result<()> {
        if self.fail_close {
            return Err(ReviewError::Generic("terminal already released".to_string()));
        }
        self.closed = true;
        Ok(())
    }
}
