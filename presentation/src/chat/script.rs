//! Non-interactive quiz run

use crate::output::console::ConsoleFormatter;
use bender_application::PlayQuizUseCase;
use bender_domain::OutputFormat;

/// Feeds answers to a quiz session in order
pub struct ScriptedQuiz {
    use_case: PlayQuizUseCase,
    formatter: ConsoleFormatter,
    format: OutputFormat,
}

impl ScriptedQuiz {
    pub fn new(use_case: PlayQuizUseCase, formatter: ConsoleFormatter, format: OutputFormat) -> Self {
        Self {
            use_case,
            formatter,
            format,
        }
    }

    /// Run every answer and return one formatted block per reply.
    ///
    /// Text output starts with the opening question; JSON output has one
    /// object per answer only.
    pub fn run<S: AsRef<str>>(mut self, answers: &[S]) -> Vec<String> {
        let mut blocks = Vec::with_capacity(answers.len() + 1);

        let opening = self.use_case.start();
        if self.format == OutputFormat::Text {
            blocks.push(self.formatter.format_prompt(&opening));
        }

        for answer in answers {
            let reply = self.use_case.answer(answer.as_ref());
            let block = match self.format {
                OutputFormat::Text => self.formatter.format_reply(&reply),
                OutputFormat::Json => self.formatter.format_reply_json(
                    &reply,
                    self.use_case.status(),
                    self.use_case.question(),
                ),
            };
            blocks.push(block);
        }

        blocks
    }
}
