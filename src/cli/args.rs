//! Command-line argument parsing for skillcards
//!
//! A single run bootstraps the skill catalog if needed and drives one
//! review session to completion. There are no subcommands.

use clap::Parser;
use std::path::PathBuf;

/// skillcards - adaptive flashcards calibrated to your per-skill mastery
#[derive(Parser, Debug, Default)]
#[command(name = "skillcards")]
#[command(version)]
#[command(about = "Review generated flashcards until every one is answered correctly", long_about = None)]
pub struct Args {
    /// Directory holding resources.md, skills.json and skill_score.json
    #[arg(long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Reference content file (default: <data-dir>/resources.md)
    #[arg(long, value_name = "FILE")]
    pub resources: Option<PathBuf>,

    /// Skill catalog file (default: <data-dir>/skills.json)
    #[arg(long, value_name = "FILE")]
    pub skills_file: Option<PathBuf>,

    /// Mastery score file (default: <data-dir>/skill_score.json)
    #[arg(long, value_name = "FILE")]
    pub score_file: Option<PathBuf>,

    /// Chat model used for generation and evaluation
    #[arg(short, long)]
    pub model: Option<String>,

    /// Chat completions endpoint
    #[arg(long)]
    pub api_url: Option<String>,

    /// Subject named in the flashcard prompt
    #[arg(long)]
    pub topic: Option<String>,

    /// Number of flashcards to request per session
    #[arg(long, value_name = "N")]
    pub cards: Option<usize>,

    /// Settings file path (default: ~/.skillcards/config.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Verbosity level: default (normal), -v (debug tracing), -vv (trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Same as -v
    #[arg(long)]
    pub debug: bool,

    /// Quiet mode (no spinners)
    #[arg(short, long)]
    pub quiet: bool,
}

/// Verbosity level enum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
    VeryVerbose,
}

impl Args {
    /// Get verbosity level based on flags
    pub fn verbosity(&self) -> Verbosity {
        let level = self.verbose.max(u8::from(self.debug));
        if self.quiet && level == 0 {
            Verbosity::Quiet
        } else {
            match level {
                0 => Verbosity::Normal,
                1 => Verbosity::Verbose,
                _ => Verbosity::VeryVerbose,
            }
        }
    }

    /// Data directory (current dir if not specified)
    pub fn data_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(|| PathBuf::from("."))
    }
}

impl Verbosity {
    /// Check if should show spinners
    pub fn show_progress(&self) -> bool {
        !matches!(self, Verbosity::Quiet)
    }

    /// Tracing filter directive for this level
    pub fn log_directive(&self) -> &'static str {
        match self {
            Verbosity::Quiet | Verbosity::Normal => "skillcards=warn",
            Verbosity::Verbose => "skillcards=debug",
            Verbosity::VeryVerbose => "skillcards=trace",
        }
    }
}
