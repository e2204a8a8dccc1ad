//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod output;
mod quiz;
mod repl;

pub use output::FileOutputConfig;
pub use quiz::FileQuizConfig;
pub use repl::{DEFAULT_PROMPT, FileReplConfig};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("repl.prompt cannot be empty")]
    EmptyPrompt,

    #[error("quiz.transcript cannot be an empty path")]
    EmptyTranscriptPath,

    #[error("repl.history_file cannot be an empty path")]
    EmptyHistoryPath,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Output settings
    pub output: FileOutputConfig,
    /// REPL settings
    pub repl: FileReplConfig,
    /// Quiz settings
    pub quiz: FileQuizConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.repl.prompt.trim().is_empty() {
            return Err(ConfigValidationError::EmptyPrompt);
        }

        if let Some(path) = &self.repl.history_file
            && path.trim().is_empty()
        {
            return Err(ConfigValidationError::EmptyHistoryPath);
        }

        if let Some(path) = &self.quiz.transcript
            && path.trim().is_empty()
        {
            return Err(ConfigValidationError::EmptyTranscriptPath);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bender_domain::OutputFormat;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[output]
format = "json"
color = false

[repl]
prompt = "meatbag"
history_file = "~/.local/share/bender/history.txt"

[quiz]
transcript = "bender.jsonl"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.output.format, Some(OutputFormat::Json));
        assert!(!config.output.color);
        assert_eq!(config.repl.prompt, "meatbag");
        assert_eq!(
            config.repl.history_file.as_deref(),
            Some("~/.local/share/bender/history.txt")
        );
        assert_eq!(config.quiz.transcript.as_deref(), Some("bender.jsonl"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[output]
color = false
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert!(!config.output.color);
        assert_eq!(config.repl.prompt, DEFAULT_PROMPT);
        assert!(config.quiz.transcript.is_none());
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(FileConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_prompt() {
        let mut config = FileConfig::default();
        config.repl.prompt = "  ".to_string();
        assert_eq!(config.validate(), Err(ConfigValidationError::EmptyPrompt));
    }

    #[test]
    fn test_validate_rejects_empty_paths() {
        let mut config = FileConfig::default();
        config.quiz.transcript = Some(String::new());
        assert_eq!(
            config.validate(),
            Err(ConfigValidationError::EmptyTranscriptPath)
        );

        let mut config = FileConfig::default();
        config.repl.history_file = Some(" ".to_string());
        assert_eq!(config.validate(), Err(ConfigValidationError::EmptyHistoryPath));
    }
}
