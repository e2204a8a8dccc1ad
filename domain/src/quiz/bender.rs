//! Bender - the quiz state machine

use super::question::{FormatError, Question};
use super::status::Status;
use crate::core::color::Rgb;
use serde::{Deserialize, Serialize};

const MSG_ACCEPTED: &str = "Отлично - ты справился";
const MSG_WRONG: &str = "Это неправильный ответ";
const MSG_RESET: &str = "Это неправильный ответ. Давай все по новой";

/// What happened to the state machine on one answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "reason", rename_all = "snake_case")]
pub enum AnswerOutcome {
    /// The quiz is over; nothing changed.
    Finished,
    /// Badly formatted answer; nothing changed.
    Rejected(FormatError),
    /// Well formatted but wrong; status went up one level.
    Wrong,
    /// Wrong at maximum severity; back to the first question.
    Reset,
    /// Correct; moved on to the next question.
    Accepted,
}

/// Bender's reply to a single answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reply {
    pub text: String,
    pub color: Rgb,
    pub outcome: AnswerOutcome,
}

impl Reply {
    fn new(text: String, color: Rgb, outcome: AnswerOutcome) -> Self {
        Self {
            text,
            color,
            outcome,
        }
    }
}

/// The current question as Bender would show it, without any answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prompt {
    pub text: String,
    pub color: Rgb,
}

/// The quiz state machine (Entity)
///
/// Holds the current [`Status`] and [`Question`]. Both fields change only
/// through [`Bender::listen_answer`] and [`Bender::reset`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bender {
    status: Status,
    question: Question,
}

impl Bender {
    /// Start a fresh quiz at (Normal, Name)
    pub fn new() -> Self {
        Self::default()
    }

    /// Resume from an arbitrary state
    pub fn with_state(status: Status, question: Question) -> Self {
        Self { status, question }
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn question(&self) -> Question {
        self.question
    }

    pub fn is_finished(&self) -> bool {
        self.question.is_terminal()
    }

    pub fn ask_question(&self) -> &'static str {
        self.question.prompt()
    }

    /// Current question in the current colour (base colour once finished)
    pub fn prompt(&self) -> Prompt {
        let color = if self.is_finished() {
            Status::Normal.color()
        } else {
            self.status.color()
        };
        Prompt {
            text: self.ask_question().to_string(),
            color,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Process one answer and return Bender's reply.
    ///
    /// The reply colour is that of the status *after* the transition, except
    /// on the terminal question which always reports the base colour.
    pub fn listen_answer(&mut self, answer: &str) -> Reply {
        if self.question.is_terminal() {
            return Reply::new(
                self.question.prompt().to_string(),
                Status::Normal.color(),
                AnswerOutcome::Finished,
            );
        }

        if let Err(reason) = self.question.validate(answer) {
            return self.reply(&reason.to_string(), AnswerOutcome::Rejected(reason));
        }

        if self.question.accepts(answer) {
            self.question = self.question.next();
            return self.reply(MSG_ACCEPTED, AnswerOutcome::Accepted);
        }

        if self.status.is_max() {
            self.reset();
            self.reply(MSG_RESET, AnswerOutcome::Reset)
        } else {
            self.status = self.status.next();
            self.reply(MSG_WRONG, AnswerOutcome::Wrong)
        }
    }

    fn reply(&self, message: &str, outcome: AnswerOutcome) -> Reply {
        Reply::new(
            format!("{}\n{}", message, self.question.prompt()),
            self.status.color(),
            outcome,
        )
    }
}
