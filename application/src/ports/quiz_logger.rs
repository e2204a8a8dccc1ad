//! Port for the structured quiz transcript.
//!
//! Defines the [`QuizLogger`] trait for recording quiz events (answers,
//! restarts) to a machine-readable log.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostic messages, while this port captures the session
//! transcript (JSONL in the file adapter).

use serde_json::Value;

/// A structured quiz event for logging.
pub struct QuizEvent {
    /// Event type identifier (e.g., "quiz_started", "answer", "quiz_restarted").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl QuizEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for logging quiz events.
///
/// `log` is synchronous and non-fallible; adapters swallow their own
/// write failures so the quiz keeps going.
pub trait QuizLogger: Send + Sync {
    fn log(&self, event: QuizEvent);
}

/// No-op implementation for tests and when the transcript is disabled.
pub struct NoQuizLogger;

impl QuizLogger for NoQuizLogger {
    fn log(&self, _event: QuizEvent) {}
}
