//! Domain layer for bender
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Quiz
//!
//! Bender asks a fixed sequence of questions. Every answer goes through two
//! checks:
//!
//! - **Format**: each question has its own rule (capital letter, digits only, ...).
//!   A badly formatted answer is bounced back without changing anything.
//! - **Correctness**: a well formatted but wrong answer raises Bender's
//!   [`Status`]; at [`Status::Critical`] the whole quiz starts over.
//!
//! ## Profile
//!
//! A [`Profile`] derives a Latin nickname and initials from the user's
//! names, and [`validate_repository`] checks the linked GitHub URL.

pub mod config;
pub mod core;
pub mod profile;
pub mod quiz;

// Re-export commonly used types
pub use config::OutputFormat;
pub use core::{color::Rgb, error::DomainError};
pub use profile::{
    entities::{Profile, RANK},
    repository::{RESERVED_PATHS, validate_repository},
    theme::AppTheme,
    translit::transliterate,
};
pub use quiz::{
    bender::{AnswerOutcome, Bender, Prompt, Reply},
    question::{FormatError, Question},
    status::Status,
};
