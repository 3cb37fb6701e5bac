//! CLI module for skillcards
//! 
//! Handles command-line argument parsing and verbosity control.

pub mod args;

pub use args::{Args, Verbosity};
