//! Infrastructure layer for bender
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod logging;
pub mod profile;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileOutputConfig, FileQuizConfig,
    FileReplConfig,
};
pub use logging::JsonlQuizLogger;
pub use profile::InMemoryProfileRepository;
