//! Answer input using rustyline
//! 
//! Provides line editing for free-text answers. History is kept in memory
//! only for the duration of a session.

use anyhow::Result;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

/// Default answer prompt
pub const ANSWER_PROMPT: &str = "Your answer: ";

/// Input handler for answers
pub struct AnswerInput {
    editor: DefaultEditor,
    prompt: String,
}

impl AnswerInput {
    /// Create new input handler
    pub fn new() -> Result<Self> {
        let editor = DefaultEditor::new()?;

        Ok(AnswerInput {
            editor,
            prompt: ANSWER_PROMPT.to_string(),
        })
    }

    /// Read one answer
    /// 
    /// Returns:
    /// - Ok(Some(answer)) for normal input (possibly empty)
    /// - Ok(None) for EOF (Ctrl-D)
    /// - Err on interrupt (Ctrl-C) or other errors
    pub fn read_line(&mut self) -> Result<Option<String>> {
        match self.editor.readline(&self.prompt) {
            Ok(line) => {
                let trimmed = line.trim();
                if !trimmed.is_empty() {
                    let _ = self.editor.add_history_entry(trimmed);
                }
                Ok(Some(trimmed.to_string()))
            }
            Err(ReadlineError::Interrupted) => Err(anyhow::anyhow!("Interrupted")),
            Err(ReadlineError::Eof) => Ok(None),
            Err(err) => Err(anyhow::anyhow!("Readline error: {}", err)),
        }
    }
}

