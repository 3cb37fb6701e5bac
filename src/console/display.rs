//! Terminal console for review sessions
//!
//! Colored question/feedback output, an indicatif spinner while a gateway
//! call is in flight, and rustyline for answers.

use crate::console::input::AnswerInput;
use crate::console::ReviewConsole;
use crate::errors::{ReviewError, Result};
use crate::session::SessionSummary;
use crate::types::FeedbackResult;
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Spinner refresh interval
const TICK_INTERVAL: Duration = Duration::from_millis(120);

/// Interactive terminal implementation of `ReviewConsole`
pub struct TerminalConsole {
    input: AnswerInput,
    spinner: Option<ProgressBar>,
    show_progress: bool,
}

impl TerminalConsole {
    pub fn new(show_progress: bool) -> Result<Self> {
        Ok(Self {
            input: AnswerInput::new()?,
            spinner: None,
            show_progress,
        })
    }

    /// Display error message
    pub fn show_error(message: &str) {
        eprintln!("{} {}", "Error:".red().bold(), message.red());
    }
}

impl ReviewConsole for TerminalConsole {
    fn begin_activity(&mut self, label: &str) {
        self.end_activity();
        if !self.show_progress {
            return;
        }

        let pb = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
            pb.set_style(style);
        }
        pb.set_message(format!("{}...", label));
        pb.enable_steady_tick(TICK_INTERVAL);
        self.spinner = Some(pb);
    }

    fn end_activity(&mut self) {
        if let Some(pb) = self.spinner.take() {
            pb.finish_and_clear();
        }
    }

    fn show_question(&mut self, position: usize, total: usize, question: &str) {
        println!("{}", format_question(position, total, question));
    }

    fn read_answer(&mut self) -> Result<String> {
        match self.input.read_line()? {
            Some(answer) => Ok(answer),
            None => Err(ReviewError::InputClosed),
        }
    }

    fn show_feedback(&mut self, feedback: &FeedbackResult) {
        for line in feedback_lines(feedback) {
            if feedback.is_correct {
                println!("{}", line.green());
            } else {
                println!("{}", line.yellow());
            }
        }
        println!();
    }

    fn show_summary(&mut self, summary: &SessionSummary) {
        println!("{}", summary.to_string().bold());
        if summary.retries() > 0 {
            println!(
                "{}",
                format!("{} attempts ({} retries)", summary.attempts, summary.retries()).dimmed()
            );
        }
        for line in gain_lines(summary) {
            println!("  {} {}", "•".cyan(), line);
        }
    }

    fn close(&mut self) -> Result<()> {
        self.end_activity();
        Ok(())
    }
}

impl Drop for TerminalConsole {
    fn drop(&mut self) {
        self.end_activity();
    }
}

fn format_question(position: usize, total: usize, question: &str) -> String {
    format!(
        "{} {}",
        format!("Flashcard {}/{}:", position, total).cyan().bold(),
        question
    )
}

fn feedback_lines(feedback: &FeedbackResult) -> [String; 2] {
    [
        format!("Feedback: {}", feedback.feedback),
        format!("Correct Answer: {}", feedback.correct_answer),
    ]
}

fn gain_lines(summary: &SessionSummary) -> Vec<String> {
    summary
        .gains
        .iter()
        .map(|(skill, gain)| format!("{} +{}", skill, gain))
        .collect()
}
