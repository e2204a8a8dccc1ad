//! User profile rules.
//!
//! Pure logic only: nickname derivation, initials, the repository URL rule
//! and the day/night theme toggle. Storage lives behind the application
//! layer's `ProfileRepository` port.

pub mod entities;
pub mod repository;
pub mod theme;
pub mod translit;
