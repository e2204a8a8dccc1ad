//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Unknown status: {0}")]
    UnknownStatus(String),

    #[error("Unknown question: {0}")]
    UnknownQuestion(String),

    #[error("Unknown theme: {0}")]
    UnknownTheme(String),
}
