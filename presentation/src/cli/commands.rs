//! CLI command definitions

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for replies
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Coloured text
    Text,
    /// One JSON object per reply
    Json,
}

impl From<OutputFormat> for bender_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => bender_domain::OutputFormat::Text,
            OutputFormat::Json => bender_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for bender
#[derive(Parser, Debug)]
#[command(name = "bender")]
#[command(author, version, about = "Answer Bender's questions without making him angry")]
#[command(long_about = r#"
Bender asks five questions. Badly formatted answers are bounced back,
wrong answers make him angrier, and four wrong answers in a row start
the quiz over.

Configuration files are loaded from (in priority order):
1. BENDER_* environment variables (e.g. BENDER_OUTPUT__COLOR=false)
2. --config <path>     Explicit config file
3. ./bender.toml       Project-level config
4. ~/.config/bender/config.toml   Global config

Example:
  bender
  bender play -a Bender -a bender -a metal -a 2993 -a 2716057
  bender play -a bender --output json
  bender profile --first-name Иван --last-name Петров
  bender check-repo https://github.com/johnDoe
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Write diagnostic logs to this file instead of stderr
    #[arg(long, value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Disable coloured output
    #[arg(long, global = true)]
    pub no_color: bool,
}

/// Top-level command tree.
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Play the quiz (interactive unless answers are given)
    Play(PlayArgs),
    /// Show the nickname, rank and initials derived from a profile
    Profile(ProfileArgs),
    /// Check a GitHub repository URL; exits with 1 if it is invalid
    CheckRepo {
        /// URL to check
        url: String,
    },
}

#[derive(Args, Debug, Clone, Default)]
pub struct PlayArgs {
    /// Answer to feed in order (can be specified multiple times)
    #[arg(short, long = "answer", value_name = "ANSWER", allow_hyphen_values = true)]
    pub answers: Vec<String>,

    /// Output format (defaults to the configured one)
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Append the quiz transcript to this JSONL file
    #[arg(long, value_name = "PATH")]
    pub transcript: Option<PathBuf>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct ProfileArgs {
    #[arg(long, default_value = "")]
    pub first_name: String,

    #[arg(long, default_value = "")]
    pub last_name: String,

    #[arg(long, default_value = "")]
    pub about: String,

    /// GitHub account URL
    #[arg(long, default_value = "")]
    pub repository: String,

    /// Switch to the night theme before printing
    #[arg(long)]
    pub night: bool,

    /// Output format (defaults to the configured one)
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_means_interactive() {
        let cli = Cli::parse_from(["bender"]);
        assert!(cli.command.is_none());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_play_with_answers() {
        let cli = Cli::parse_from([
            "bender", "play", "-a", "Bender", "--answer", "bender", "-o", "json", "-vv",
        ]);
        assert_eq!(cli.verbose, 2);
        let Some(Command::Play(args)) = cli.command else {
            panic!("expected play");
        };
        assert_eq!(args.answers, vec!["Bender", "bender"]);
        assert_eq!(args.output, Some(OutputFormat::Json));
    }

    #[test]
    fn test_empty_answer_is_kept() {
        let cli = Cli::parse_from(["bender", "play", "-a", ""]);
        let Some(Command::Play(args)) = cli.command else {
            panic!("expected play");
        };
        assert_eq!(args.answers, vec![""]);
    }

    #[test]
    fn test_negative_answer_is_a_value() {
        let cli = Cli::parse_from(["bender", "play", "-a", "-1", "--answer", "-2993", "-v"]);
        assert_eq!(cli.verbose, 1);
        let Some(Command::Play(args)) = cli.command else {
            panic!("expected play");
        };
        assert_eq!(args.answers, vec!["-1", "-2993"]);
    }

    #[test]
    fn test_check_repo() {
        let cli = Cli::parse_from(["bender", "check-repo", "github.com/johnDoe"]);
        assert!(matches!(
            cli.command,
            Some(Command::CheckRepo { ref url }) if url == "github.com/johnDoe"
        ));
    }
}
