//! Use cases (application services)
//!
//! Use cases orchestrate domain logic and coordinate with ports.

pub mod edit_profile;
pub mod play_quiz;
