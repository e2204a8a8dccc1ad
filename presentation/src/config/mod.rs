//! Presentation-level configuration
//!
//! Settings for the interactive REPL.

use std::path::PathBuf;

/// REPL configuration for the presentation layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplConfig {
    /// Label shown before the input cursor
    pub prompt: String,
    /// Path to history file; no history when `None`
    pub history_file: Option<PathBuf>,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            prompt: "you".to_string(),
            history_file: None,
        }
    }
}
