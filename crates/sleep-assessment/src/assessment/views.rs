use super::chart::ChartDatum;
use super::domain::{CategoryId, DiagnosisCategory, Language, SeverityTier};
use super::scoring::ScoreOutcome;
use super::session::QuizSession;
use crate::content::{ContentError, LocalizationTable, Product};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptionView {
    pub index: usize,
    pub value: u8,
    pub text: String,
    /// Previously recorded answer for this question, shown after going back.
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuestionView {
    pub index: usize,
    pub category: CategoryId,
    pub category_name: String,
    pub text: String,
    pub options: Vec<OptionView>,
    pub can_go_back: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressView {
    pub position: usize,
    pub total: usize,
    pub percent: f64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartPoint {
    pub category: CategoryId,
    pub subject: String,
    pub value: u8,
    pub max: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiagnosisView {
    pub category: DiagnosisCategory,
    pub title: String,
    pub message: String,
    pub severity: SeverityTier,
    pub severity_label: &'static str,
    pub color: &'static str,
    pub icon: &'static str,
    pub tips: Vec<String>,
    pub products: Vec<Product>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultView {
    pub quiz_title: String,
    pub score_summary: String,
    pub score: u32,
    pub max_score: u32,
    pub raw_score: u32,
    pub raw_max: u32,
    pub diagnosis: DiagnosisView,
    pub report_title: String,
    pub chart: Vec<ChartPoint>,
    pub chart_caption: String,
    pub tips_title: String,
    pub products_title: String,
    pub disclaimer: String,
}

pub(crate) fn question_view(
    session: &QuizSession,
    content: &LocalizationTable,
    language: Language,
) -> Result<Option<QuestionView>, ContentError> {
    let state = session.state();
    if state.is_completed() {
        return Ok(None);
    }
    let Some(question) = session.current_question() else {
        return Ok(None);
    };

    let category = &question.category;
    let recorded = state.answers().get(category.as_str());
    let options = question
        .options
        .iter()
        .enumerate()
        .map(|(index, option)| {
            Ok(OptionView {
                index,
                value: option.value,
                text: content.option_text(category, index, language)?.to_string(),
                selected: recorded == Some(option.value),
            })
        })
        .collect::<Result<Vec<_>, ContentError>>()?;

    Ok(Some(QuestionView {
        index: state.current_index(),
        category: category.clone(),
        category_name: content.category_name(category, language)?.to_string(),
        text: content.question_text(category, language)?.to_string(),
        options,
        can_go_back: state.current_index() > 0,
    }))
}

pub(crate) fn progress_view(
    session: &QuizSession,
    content: &LocalizationTable,
    language: Language,
) -> Result<ProgressView, ContentError> {
    let progress = session.progress();
    let interface = content.interface(language)?;

    Ok(ProgressView {
        position: progress.position,
        total: progress.total,
        percent: progress.percent,
        label: format!(
            "{} {} {} {}",
            interface.progress, progress.position, interface.of, progress.total
        ),
    })
}

pub(crate) fn chart_points(
    data: Vec<ChartDatum>,
    content: &LocalizationTable,
    language: Language,
) -> Result<Vec<ChartPoint>, ContentError> {
    data.into_iter()
        .map(|datum| {
            Ok(ChartPoint {
                subject: content.category_name(&datum.category, language)?.to_string(),
                category: datum.category,
                value: datum.value,
                max: datum.max,
            })
        })
        .collect()
}

pub(crate) fn diagnosis_view(
    category: DiagnosisCategory,
    content: &LocalizationTable,
    language: Language,
) -> Result<DiagnosisView, ContentError> {
    let copy = content.diagnosis_copy(category, language)?;
    let severity = category.severity();

    Ok(DiagnosisView {
        category,
        title: copy.title.clone(),
        message: copy.message.clone(),
        severity,
        severity_label: severity.label(),
        color: severity.color(),
        icon: severity.icon(),
        tips: copy.tips.clone(),
        products: copy.products.clone(),
    })
}

pub(crate) fn result_view(
    outcome: ScoreOutcome,
    session: &QuizSession,
    content: &LocalizationTable,
    language: Language,
) -> Result<ResultView, ContentError> {
    let interface = content.interface(language)?;

    Ok(ResultView {
        quiz_title: content.quiz_title(language)?.to_string(),
        score_summary: interface.score_summary.clone(),
        score: outcome.score.value,
        max_score: outcome.score.range.max,
        raw_score: outcome.score.raw,
        raw_max: outcome.score.raw_max,
        diagnosis: diagnosis_view(outcome.category, content, language)?,
        report_title: interface.report_title.clone(),
        chart: chart_points(session.chart(), content, language)?,
        chart_caption: interface.chart_caption.clone(),
        tips_title: interface.tips_title.clone(),
        products_title: interface.products_title.clone(),
        disclaimer: interface.disclaimer.clone(),
    })
}
