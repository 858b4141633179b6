use crate::commands::{run_catalog, run_score, run_take, run_validate, ScoreArgs};
use crate::infra::{parse_language, parse_revision};
use clap::{Parser, Subcommand};
use sleep_assessment::assessment::{Language, Revision};
use sleep_assessment::config::AppConfig;
use sleep_assessment::error::AppError;
use sleep_assessment::telemetry;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "Sleep Self-Assessment",
    about = "Take the sleep self-assessment quiz and inspect its scoring and content",
    version
)]
struct Cli {
    /// Catalog revision to run (sleep_health or sleep_habits). Overrides QUIZ_REVISION.
    #[arg(long, global = true, value_parser = parse_revision)]
    revision: Option<Revision>,
    /// Display language (en, zh, ms). Overrides QUIZ_LANGUAGE.
    #[arg(long = "lang", global = true, value_parser = parse_language)]
    language: Option<Language>,
    /// Emit JSON instead of text where the command supports it
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Take the quiz interactively on the terminal (default command)
    Take,
    /// Score a full or partial answer set given in catalog order
    Score(ScoreArgs),
    /// List the localized questions and their option values
    Catalog,
    /// Check every built-in revision's content against its catalog
    Validate,
}

/// Settings shared by every command after env config and flags are merged.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RunContext {
    pub(crate) revision: Revision,
    pub(crate) language: Language,
    pub(crate) json: bool,
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let mut config = AppConfig::load()?;

    if let Some(revision) = cli.revision {
        config.assessment.revision = revision;
    }
    if let Some(language) = cli.language {
        config.assessment.language = language;
    }

    telemetry::init(&config.telemetry)?;
    info!(
        environment = ?config.environment,
        revision = %config.assessment.revision,
        language = %config.assessment.language,
        "sleep assessment ready"
    );

    let context = RunContext {
        revision: config.assessment.revision,
        language: config.assessment.language,
        json: cli.json,
    };

    match cli.command.unwrap_or(Command::Take) {
        Command::Take => run_take(context),
        Command::Score(args) => run_score(context, args),
        Command::Catalog => run_catalog(context),
        Command::Validate => run_validate(context),
    }
}
