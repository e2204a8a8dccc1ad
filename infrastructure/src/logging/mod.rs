//! Quiz transcript adapters.
//!
//! Provides [`JsonlQuizLogger`], a JSONL file writer that implements
//! the [`QuizLogger`](bender_application::QuizLogger) port.

mod jsonl_logger;

pub use jsonl_logger::JsonlQuizLogger;
