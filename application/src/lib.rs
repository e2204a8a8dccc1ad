//! Application layer for bender
//!
//! This crate contains use cases and port definitions.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    profile_repository::{ProfileRepository, RepositoryError},
    quiz_logger::{NoQuizLogger, QuizEvent, QuizLogger},
};
pub use use_cases::edit_profile::{EditProfileError, EditProfileUseCase, SaveOutcome};
pub use use_cases::play_quiz::PlayQuizUseCase;
