//! REPL configuration from TOML (`[repl]` section)

use serde::{Deserialize, Serialize};

pub const DEFAULT_PROMPT: &str = "you";

/// Raw REPL configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileReplConfig {
    /// Label shown before the input cursor
    pub prompt: String,
    /// Path to history file
    pub history_file: Option<String>,
}

impl Default for FileReplConfig {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            history_file: None,
        }
    }
}
