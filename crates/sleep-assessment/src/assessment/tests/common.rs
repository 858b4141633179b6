use std::sync::{Arc, Mutex};

use crate::analytics::{AnalyticsEvent, AnalyticsSink};
use crate::assessment::{
    AssessmentDefinition, AssessmentService, CategoryId, Language, QuizSession, Revision,
};
use crate::content::LocalizationTable;

pub(super) fn definition(revision: Revision) -> Arc<AssessmentDefinition> {
    Arc::new(AssessmentDefinition::builtin(revision).expect("builtin definition is valid"))
}

pub(super) fn sleep_health_session() -> QuizSession {
    QuizSession::new(definition(Revision::SleepHealth))
}

pub(super) fn sleep_habits_session() -> QuizSession {
    QuizSession::new(definition(Revision::SleepHabits))
}

/// Answers every remaining question in catalog order with the given values.
pub(super) fn answer_all(session: &mut QuizSession, values: &[u8]) {
    for value in values {
        let category = current_category(session);
        session
            .submit_answer(&category, *value)
            .expect("answer accepted");
    }
}

pub(super) fn current_category(session: &QuizSession) -> CategoryId {
    session
        .current_question()
        .expect("question available")
        .category
        .clone()
}

#[derive(Default)]
pub(super) struct RecordingAnalytics {
    events: Mutex<Vec<AnalyticsEvent>>,
}

impl AnalyticsSink for RecordingAnalytics {
    fn record(&self, event: &AnalyticsEvent) {
        self.events
            .lock()
            .expect("analytics mutex poisoned")
            .push(event.clone());
    }
}

impl RecordingAnalytics {
    pub(super) fn events(&self) -> Vec<AnalyticsEvent> {
        self.events.lock().expect("analytics mutex poisoned").clone()
    }
}

pub(super) fn service(
    revision: Revision,
    language: Language,
) -> (
    AssessmentService<'static, Arc<RecordingAnalytics>>,
    Arc<RecordingAnalytics>,
) {
    let analytics = Arc::new(RecordingAnalytics::default());
    let content = LocalizationTable::builtin(revision).expect("builtin content loads");
    let service = AssessmentService::start(definition(revision), content, language, analytics.clone())
        .expect("service starts");
    (service, analytics)
}
