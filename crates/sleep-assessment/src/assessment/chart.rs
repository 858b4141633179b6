use super::catalog::QuestionCatalog;
use super::domain::{AnswerMap, CategoryId};
use serde::Serialize;

/// One spoke of the radar chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartDatum {
    pub category: CategoryId,
    pub value: u8,
    pub max: u8,
}

/// Projects answers onto every catalog category in catalog order. Unanswered categories
/// project to 0. Recompute after every answer change; nothing is cached.
pub fn project(catalog: &QuestionCatalog, answers: &AnswerMap) -> Vec<ChartDatum> {
    catalog
        .questions()
        .iter()
        .map(|question| ChartDatum {
            category: question.category.clone(),
            value: answers.get(question.category.as_str()).unwrap_or(0),
            max: question.max_value(),
        })
        .collect()
}
