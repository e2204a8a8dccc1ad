//! The Bender quiz.
//!
//! - [`status::Status`] — severity level raised by wrong answers
//! - [`question::Question`] — the fixed sequence of questions and their format rules
//! - [`bender::Bender`] — the state machine tying the two together

pub mod bender;
pub mod question;
pub mod status;
