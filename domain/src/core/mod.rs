//! Core domain concepts shared across all subdomains.
//!
//! - [`error::DomainError`] — domain-level errors
//! - [`color::Rgb`] — display colour attached to quiz replies

pub mod color;
pub mod error;
