use crate::cli::RunContext;
use crate::infra::load_revision;
use crate::interactive;
use crate::render;
use clap::Args;
use serde::Serialize;
use sleep_assessment::analytics::LogAnalytics;
use sleep_assessment::assessment::{
    AssessmentDefinition, AssessmentService, AssessmentServiceError, CategoryId, ChartPoint,
    Language, ProgressView, QuizError, ResultView, Revision,
};
use sleep_assessment::content::{ContentError, ContentIssue, LocalizationTable};
use sleep_assessment::error::AppError;
use std::io::{self, Write};
use tracing::{info, warn};

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Option values in catalog order, e.g. `--answers 1,0,2,3`
    #[arg(long, value_delimiter = ',', required = true)]
    pub(crate) answers: Vec<u8>,
}

pub(crate) fn run_take(context: RunContext) -> Result<(), AppError> {
    let (definition, content) = load_revision(context.revision)?;
    let mut service =
        AssessmentService::start(definition, content, context.language, LogAnalytics)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    interactive::run(&mut service, stdin.lock(), &mut out)
}

#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub(crate) enum ScoreReport {
    Completed(ResultView),
    Incomplete {
        answered: usize,
        progress: ProgressView,
        chart: Vec<ChartPoint>,
    },
}

/// Replays `answers` against a fresh session. Extra answers past the last question fail.
pub(crate) fn score_answers(
    revision: Revision,
    language: Language,
    answers: &[u8],
) -> Result<ScoreReport, AppError> {
    let (definition, content) = load_revision(revision)?;
    let mut service = AssessmentService::start(definition, content, language, LogAnalytics)?;

    for value in answers {
        let category = service
            .session()
            .current_question()
            .filter(|_| !service.state().is_completed())
            .map(|question| question.category.clone())
            .ok_or(AssessmentServiceError::Quiz(QuizError::AlreadyCompleted))?;
        service.submit_answer(&category, *value)?;
    }

    if let Some(result) = service.result()? {
        return Ok(ScoreReport::Completed(result));
    }

    warn!(
        answered = answers.len(),
        total = service.session().definition().catalog().len(),
        "answer set is incomplete"
    );
    Ok(ScoreReport::Incomplete {
        answered: answers.len(),
        progress: service.progress()?,
        chart: service.chart()?,
    })
}

pub(crate) fn run_score(context: RunContext, args: ScoreArgs) -> Result<(), AppError> {
    let report = score_answers(context.revision, context.language, &args.answers)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if context.json {
        serde_json::to_writer_pretty(&mut out, &report)?;
        writeln!(out)?;
        return Ok(());
    }

    match &report {
        ScoreReport::Completed(result) => render::result(&mut out, result)?,
        ScoreReport::Incomplete {
            progress, chart, ..
        } => {
            render::progress(&mut out, progress)?;
            render::chart(&mut out, chart)?;
        }
    }
    Ok(())
}

#[derive(Debug, Serialize)]
pub(crate) struct CatalogEntry {
    pub(crate) index: usize,
    pub(crate) category: CategoryId,
    pub(crate) category_name: String,
    pub(crate) text: String,
    pub(crate) options: Vec<CatalogOption>,
}

#[derive(Debug, Serialize)]
pub(crate) struct CatalogOption {
    pub(crate) value: u8,
    pub(crate) text: String,
}

pub(crate) fn catalog_entries(
    definition: &AssessmentDefinition,
    content: &LocalizationTable,
    language: Language,
) -> Result<Vec<CatalogEntry>, ContentError> {
    definition
        .catalog()
        .questions()
        .iter()
        .enumerate()
        .map(|(index, question)| {
            let category = &question.category;
            let options = question
                .options
                .iter()
                .enumerate()
                .map(|(option_index, option)| {
                    Ok(CatalogOption {
                        value: option.value,
                        text: content
                            .option_text(category, option_index, language)?
                            .to_string(),
                    })
                })
                .collect::<Result<Vec<_>, ContentError>>()?;

            Ok(CatalogEntry {
                index,
                category: category.clone(),
                category_name: content.category_name(category, language)?.to_string(),
                text: content.question_text(category, language)?.to_string(),
                options,
            })
        })
        .collect()
}

pub(crate) fn run_catalog(context: RunContext) -> Result<(), AppError> {
    let (definition, content) = load_revision(context.revision)?;
    let entries = catalog_entries(&definition, content, context.language)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if context.json {
        serde_json::to_writer_pretty(&mut out, &entries)?;
        writeln!(out)?;
        return Ok(());
    }

    render::title(&mut out, content.quiz_title(context.language)?)?;
    render::catalog(&mut out, &entries)?;
    Ok(())
}

#[derive(Debug, Serialize)]
pub(crate) struct ValidationReport {
    pub(crate) revision: Revision,
    pub(crate) issues: Vec<ContentIssue>,
}

pub(crate) fn validate_builtin() -> Result<Vec<ValidationReport>, AppError> {
    Revision::ordered()
        .into_iter()
        .map(|revision| {
            let (definition, content) = load_revision(revision)?;
            let issues = content.validate(&definition);
            info!(%revision, issues = issues.len(), "validated content");
            Ok(ValidationReport { revision, issues })
        })
        .collect()
}

pub(crate) fn run_validate(context: RunContext) -> Result<(), AppError> {
    let reports = validate_builtin()?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if context.json {
        serde_json::to_writer_pretty(&mut out, &reports)?;
        writeln!(out)?;
    } else {
        for report in &reports {
            render::validation(&mut out, report.revision, &report.issues)?;
        }
    }

    match reports.into_iter().find(|report| !report.issues.is_empty()) {
        Some(report) => Err(ContentError::Invalid {
            revision: report.revision,
            issues: report.issues,
        }
        .into()),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sleep_assessment::assessment::DiagnosisCategory;

    #[test]
    fn complete_answer_set_yields_result() {
        let report = score_answers(Revision::SleepHealth, Language::En, &[3; 12]).expect("scores");
        match report {
            ScoreReport::Completed(result) => {
                assert_eq!(result.score, 100);
                assert_eq!(result.diagnosis.category, DiagnosisCategory::Severe);
            }
            other => panic!("expected completed report, got {other:?}"),
        }
    }

    #[test]
    fn partial_answer_set_reports_progress() {
        let report =
            score_answers(Revision::SleepHabits, Language::En, &[2, 1]).expect("scores");
        match report {
            ScoreReport::Incomplete {
                answered,
                progress,
                chart,
            } => {
                assert_eq!(answered, 2);
                assert_eq!(progress.position, 3);
                assert_eq!(chart[1].value, 1);
                assert_eq!(chart[2].value, 0);
            }
            other => panic!("expected incomplete report, got {other:?}"),
        }
    }

    #[test]
    fn surplus_or_invalid_answers_are_rejected() {
        let surplus = score_answers(Revision::SleepHabits, Language::En, &[2; 8]);
        assert!(matches!(
            surplus,
            Err(AppError::Assessment(AssessmentServiceError::Quiz(
                QuizError::AlreadyCompleted
            )))
        ));

        let invalid = score_answers(Revision::SleepHabits, Language::En, &[3]);
        assert!(matches!(
            invalid,
            Err(AppError::Assessment(AssessmentServiceError::Quiz(
                QuizError::InvalidOptionValue { value: 3, .. }
            )))
        ));
    }

    #[test]
    fn catalog_lists_every_question_with_localized_options() {
        let (definition, content) = load_revision(Revision::SleepHealth).expect("loads");
        let entries = catalog_entries(&definition, content, Language::Zh).expect("content");

        assert_eq!(entries.len(), 12);
        assert_eq!(entries[0].category_name, "入睡时间");
        assert!(entries.iter().all(|entry| entry.options.len() == 4));
        assert_eq!(entries[11].options[3].value, 3);
    }

    #[test]
    fn builtin_content_validates_cleanly() {
        let reports = validate_builtin().expect("content loads");
        assert_eq!(reports.len(), 2);
        assert!(reports.iter().all(|report| report.issues.is_empty()));
    }
}
