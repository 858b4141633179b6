use sleep_assessment::assessment::{AssessmentDefinition, Language, Revision};
use sleep_assessment::content::LocalizationTable;
use sleep_assessment::error::AppError;
use std::sync::Arc;

pub(crate) fn parse_revision(raw: &str) -> Result<Revision, String> {
    raw.parse::<Revision>().map_err(|err| err.to_string())
}

pub(crate) fn parse_language(raw: &str) -> Result<Language, String> {
    raw.parse::<Language>().map_err(|err| err.to_string())
}

/// Built-in definition and content for `revision`, checked against each other.
pub(crate) fn load_revision(
    revision: Revision,
) -> Result<(Arc<AssessmentDefinition>, &'static LocalizationTable), AppError> {
    let definition = Arc::new(AssessmentDefinition::builtin(revision)?);
    let content = LocalizationTable::builtin(revision)?;
    Ok((definition, content))
}
