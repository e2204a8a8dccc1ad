//! Quiz front-ends
//!
//! - [`QuizRepl`] — reedline-based interactive session
//! - [`ScriptedQuiz`] — feeds a fixed list of answers, for scripts and pipes

mod repl;
mod script;

pub use repl::{LineResult, QuizRepl};
pub use script::ScriptedQuiz;
