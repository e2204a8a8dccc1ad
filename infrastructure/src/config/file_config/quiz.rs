//! Quiz configuration from TOML (`[quiz]` section)

use serde::{Deserialize, Serialize};

/// Raw quiz configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileQuizConfig {
    /// Where to write the JSONL transcript; no transcript when unset
    pub transcript: Option<String>,
}
