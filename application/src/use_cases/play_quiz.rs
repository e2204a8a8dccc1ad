//! Play Quiz use case
//!
//! Drives one quiz session: feeds answers to the [`Bender`] state machine
//! and records every step in the transcript.

use crate::ports::quiz_logger::{NoQuizLogger, QuizEvent, QuizLogger};
use bender_domain::{Bender, Prompt, Question, Reply, Status};
use serde_json::json;
use std::sync::Arc;
use tracing::{debug, info};

/// Use case for playing the Bender quiz
pub struct PlayQuizUseCase {
    bender: Bender,
    quiz_logger: Arc<dyn QuizLogger>,
}

impl Default for PlayQuizUseCase {
    fn default() -> Self {
        Self::new()
    }
}

impl PlayQuizUseCase {
    pub fn new() -> Self {
        Self::from_state(Bender::new())
    }

    /// Resume a session from an existing state machine
    pub fn from_state(bender: Bender) -> Self {
        Self {
            bender,
            quiz_logger: Arc::new(NoQuizLogger),
        }
    }

    /// Create with a transcript logger.
    pub fn with_quiz_logger(mut self, logger: Arc<dyn QuizLogger>) -> Self {
        self.quiz_logger = logger;
        self
    }

    pub fn status(&self) -> Status {
        self.bender.status()
    }

    pub fn question(&self) -> Question {
        self.bender.question()
    }

    pub fn is_finished(&self) -> bool {
        self.bender.is_finished()
    }

    /// Opening prompt: the current question in the current colour.
    pub fn start(&self) -> Prompt {
        info!(
            status = %self.bender.status(),
            question = %self.bender.question(),
            "Quiz started"
        );
        self.quiz_logger.log(QuizEvent::new(
            "quiz_started",
            json!({
                "status": self.bender.status(),
                "question": self.bender.question(),
            }),
        ));

        self.bender.prompt()
    }

    /// Feed one answer to Bender.
    ///
    /// Only a trailing line break is stripped; everything else, including
    /// surrounding spaces and the empty string, is judged as typed.
    pub fn answer(&mut self, raw: &str) -> Reply {
        let answer = raw
            .strip_suffix('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .unwrap_or(raw);
        let asked = self.bender.question();
        let reply = self.bender.listen_answer(answer);

        debug!(
            question = %asked,
            outcome = ?reply.outcome,
            status = %self.bender.status(),
            "Answer processed"
        );
        self.quiz_logger.log(QuizEvent::new(
            "answer",
            json!({
                "question": asked,
                "answer": answer,
                "outcome": reply.outcome,
                "status": self.bender.status(),
                "next_question": self.bender.question(),
            }),
        ));

        reply
    }

    /// Throw away progress and start from the first question.
    pub fn restart(&mut self) -> Prompt {
        self.bender.reset();
        self.quiz_logger.log(QuizEvent::new("quiz_restarted", json!({})));
        info!("Quiz restarted");
        self.bender.prompt()
    }
}
