//! Configuration file loading for bender
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `BENDER_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./bender.toml` or `./.bender.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/bender/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, DEFAULT_PROMPT, FileConfig, FileOutputConfig, FileQuizConfig,
    FileReplConfig,
};
pub use loader::ConfigLoader;
