//! Terminal interaction for review sessions
//! 
//! The session controller only sees the `ReviewConsole` trait, so it can be
//! driven by a real terminal or by a scripted double in tests.

pub mod input;
pub mod display;

use crate::errors::Result;
use crate::session::SessionSummary;
use crate::types::FeedbackResult;

pub use display::TerminalConsole;
pub use input::AnswerInput;

/// User-facing side of a review session
pub trait ReviewConsole {
    /// A gateway call is starting; show a busy indicator labelled `label`
    fn begin_activity(&mut self, label: &str);

    /// The gateway call finished (successfully or not)
    fn end_activity(&mut self);

    /// Announce a card. `position` is the correct tally + 1, `total` the batch size.
    fn show_question(&mut self, position: usize, total: usize, question: &str);

    /// Block for one free-text answer. Closed input is `ReviewError::InputClosed`.
    fn read_answer(&mut self) -> Result<String>;

    /// Show the evaluator's feedback and the stated correct answer
    fn show_feedback(&mut self, feedback: &FeedbackResult);

    /// Show the end-of-session summary
    fn show_summary(&mut self, summary: &SessionSummary);

    /// Release input resources
    fn close(&mut self) -> Result<()> {
        Ok(())
    }
}
