//! CLI entrypoint for Bender
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow};
use bender_application::{EditProfileUseCase, PlayQuizUseCase, QuizLogger};
use bender_domain::{OutputFormat, Profile, validate_repository};
use bender_infrastructure::{
    ConfigLoader, FileConfig, InMemoryProfileRepository, JsonlQuizLogger,
};
use bender_presentation::{
    Cli, Command, ConsoleFormatter, PlayArgs, ProfileArgs, QuizRepl, ReplConfig, ScriptedQuiz,
};
use clap::Parser;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Keep the guard alive so buffered log lines are flushed on exit
    let _log_guard = init_logging(cli.verbose, cli.log_file.as_deref())?;

    info!("Starting Bender");

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(ExitCode::SUCCESS);
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };
    config.validate().context("Invalid configuration")?;

    let formatter = ConsoleFormatter::new(config.output.color && !cli.no_color);

    match cli
        .command
        .unwrap_or_else(|| Command::Play(PlayArgs::default()))
    {
        Command::Play(args) => play(args, &config, formatter)?,
        Command::Profile(args) => profile(args, &config, formatter)?,
        Command::CheckRepo { url } => {
            let (line, valid) = check_repo(&url);
            println!("{}", line);
            if !valid {
                // Returned rather than exiting so the log guard still flushes
                return Ok(ExitCode::FAILURE);
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn check_repo(url: &str) -> (String, bool) {
    if validate_repository(url) {
        (format!("valid: {}", url), true)
    } else {
        (format!("invalid: {}", url), false)
    }
}

fn init_logging(verbose: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    // Initialize logging based on verbosity level
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let Some(path) = log_file else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
        return Ok(None);
    };

    let file_name = path
        .file_name()
        .with_context(|| format!("--log-file must name a file: {}", path.display()))?;
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));

    let appender = tracing_appender::rolling::never(dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(writer)
        .init();

    Ok(Some(guard))
}

fn play(args: PlayArgs, config: &FileConfig, formatter: ConsoleFormatter) -> Result<()> {
    let mut use_case = PlayQuizUseCase::new();

    let transcript = args
        .transcript
        .clone()
        .or_else(|| config.quiz.transcript.as_ref().map(PathBuf::from));
    if let Some(path) = transcript {
        match JsonlQuizLogger::new(&path) {
            Some(logger) => {
                info!("Writing quiz transcript to {}", logger.path().display());
                let logger: Arc<dyn QuizLogger> = Arc::new(logger);
                use_case = use_case.with_quiz_logger(logger);
            }
            None => warn!("Quiz transcript disabled: cannot open {}", path.display()),
        }
    }

    if args.answers.is_empty() {
        let repl_config = ReplConfig {
            prompt: config.repl.prompt.clone(),
            history_file: config
                .repl
                .history_file
                .as_ref()
                .map(PathBuf::from)
                .or_else(ConfigLoader::default_history_path),
        };
        let mut repl = QuizRepl::new(use_case, formatter).with_config(repl_config);
        repl.run().context("Interactive session failed")?;
        return Ok(());
    }

    let format = output_format(args.output, config);
    for block in ScriptedQuiz::new(use_case, formatter, format).run(&args.answers) {
        println!("{}", block);
    }

    Ok(())
}

fn profile(args: ProfileArgs, config: &FileConfig, formatter: ConsoleFormatter) -> Result<()> {
    let repository = Arc::new(InMemoryProfileRepository::new());
    let mut use_case = EditProfileUseCase::load(repository)?;

    let edited = Profile::new(args.first_name, args.last_name)
        .with_about(args.about)
        .with_repository(args.repository);
    let outcome = use_case.save_profile(edited)?;
    if args.night {
        use_case.switch_theme()?;
    }

    let output = match output_format(args.output, config) {
        OutputFormat::Text => {
            formatter.format_profile(use_case.profile(), use_case.theme(), &outcome)
        }
        OutputFormat::Json => {
            formatter.format_profile_json(use_case.profile(), use_case.theme(), &outcome)
        }
    };
    print!("{}", output);
    if !output.ends_with('\n') {
        println!();
    }

    Ok(())
}

/// Command-line flag, then config file, then the default
fn output_format(
    flag: Option<bender_presentation::OutputFormat>,
    config: &FileConfig,
) -> OutputFormat {
    flag.map(Into::into).or(config.output.format).unwrap_or_default()
}
