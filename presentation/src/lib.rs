//! Presentation layer for bender
//!
//! This crate contains CLI definitions, output formatters,
//! and the interactive quiz interface.

pub mod chat;
pub mod cli;
pub mod config;
pub mod output;

// Re-export commonly used types
pub use chat::{LineResult, QuizRepl, ScriptedQuiz};
pub use cli::commands::{Cli, Command, OutputFormat, PlayArgs, ProfileArgs};
pub use config::ReplConfig;
pub use output::console::ConsoleFormatter;
