//! REPL (Read-Eval-Print Loop) for the interactive quiz

use crate::config::ReplConfig;
use crate::output::console::ConsoleFormatter;
use bender_application::PlayQuizUseCase;
use reedline::{DefaultPrompt, DefaultPromptSegment, FileBackedHistory, Reedline, Signal};
use tracing::warn;

const HISTORY_CAPACITY: usize = 500;

/// What the REPL should do after one input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineResult {
    /// Text to print; empty prints nothing
    pub output: String,
    pub exit: bool,
}

impl LineResult {
    fn show(output: String) -> Self {
        Self {
            output,
            exit: false,
        }
    }

    fn exit(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            exit: true,
        }
    }
}

/// Interactive quiz REPL
pub struct QuizRepl {
    use_case: PlayQuizUseCase,
    formatter: ConsoleFormatter,
    config: ReplConfig,
}

impl QuizRepl {
    pub fn new(use_case: PlayQuizUseCase, formatter: ConsoleFormatter) -> Self {
        Self {
            use_case,
            formatter,
            config: ReplConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ReplConfig) -> Self {
        self.config = config;
        self
    }

    /// Run the interactive REPL
    pub fn run(&mut self) -> std::io::Result<()> {
        let mut line_editor = Reedline::create();

        if let Some(path) = &self.config.history_file {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            match FileBackedHistory::with_file(HISTORY_CAPACITY, path.clone()) {
                Ok(history) => line_editor = line_editor.with_history(Box::new(history)),
                Err(e) => warn!("Could not open history file {}: {}", path.display(), e),
            }
        }

        let prompt = DefaultPrompt::new(
            DefaultPromptSegment::Basic(self.config.prompt.clone()),
            DefaultPromptSegment::Empty,
        );

        self.print_welcome();

        loop {
            match line_editor.read_line(&prompt) {
                Ok(Signal::Success(line)) => {
                    let result = self.handle_line(&line);
                    if !result.output.is_empty() {
                        println!("{}", result.output);
                    }
                    if result.exit {
                        break;
                    }
                }
                Ok(Signal::CtrlC) => {
                    println!("^C");
                    continue;
                }
                Ok(Signal::CtrlD) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│            Bender - Question Time           │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("Commands:");
        println!("  /help     - Show this help");
        println!("  /status   - Show Bender's mood and the current question");
        println!("  /restart  - Start over from the first question");
        println!("  /quit     - Exit");
        println!();
        println!("{}", self.formatter.format_prompt(&self.use_case.start()));
    }

    /// Process one input line: a slash command or an answer.
    ///
    /// Everything else, including an empty line, is an answer.
    pub fn handle_line(&mut self, line: &str) -> LineResult {
        let trimmed = line.trim();
        if trimmed.starts_with('/') {
            return self.handle_command(trimmed);
        }

        let reply = self.use_case.answer(line);
        LineResult::show(self.formatter.format_reply(&reply))
    }

    fn handle_command(&mut self, cmd: &str) -> LineResult {
        match cmd {
            "/quit" | "/exit" | "/q" => LineResult::exit("Bye!"),
            "/help" | "/h" | "/?" => LineResult::show(
                [
                    "Commands:",
                    "  /help, /h, /?     - Show this help",
                    "  /status           - Show Bender's mood and the current question",
                    "  /restart          - Start over from the first question",
                    "  /quit, /exit, /q  - Exit",
                ]
                .join("\n"),
            ),
            "/status" => LineResult::show(
                self.formatter
                    .format_status(self.use_case.status(), self.use_case.question()),
            ),
            "/restart" => {
                let prompt = self.use_case.restart();
                LineResult::show(self.formatter.format_prompt(&prompt))
            }
            _ => LineResult::show(format!(
                "Unknown command: {}\nType /help for available commands",
                cmd
            )),
        }
    }
}
