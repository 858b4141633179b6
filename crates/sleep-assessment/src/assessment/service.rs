use std::sync::Arc;

use super::definition::AssessmentDefinition;
use super::domain::{CategoryId, Language, QuizError};
use super::session::{QuizSession, QuizState};
use super::views::{self, ChartPoint, ProgressView, QuestionView, ResultView};
use crate::analytics::{AnalyticsEvent, AnalyticsSink};
use crate::content::{ContentError, InterfaceCopy, LocalizationTable};
use tracing::info;

/// Service composing a quiz session, its localized content and the analytics sink.
///
/// This is the surface a presentation layer binds to: it reads localized views and forwards
/// the control operations.
pub struct AssessmentService<'c, A> {
    session: QuizSession,
    content: &'c LocalizationTable,
    language: Language,
    analytics: A,
}

impl<'c, A> AssessmentService<'c, A>
where
    A: AnalyticsSink,
{
    /// Starts a session and emits the session-started signal.
    pub fn start(
        definition: Arc<AssessmentDefinition>,
        content: &'c LocalizationTable,
        language: Language,
        analytics: A,
    ) -> Result<Self, AssessmentServiceError> {
        if content.revision() != definition.revision() {
            return Err(ContentError::RevisionMismatch {
                expected: definition.revision(),
                found: content.revision(),
            }
            .into());
        }
        content.pack(language)?;

        let revision = definition.revision();
        analytics.record(&AnalyticsEvent::session_started(revision, language));
        info!(%revision, %language, "assessment session started");

        Ok(Self {
            session: QuizSession::new(definition),
            content,
            language,
            analytics,
        })
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn state(&self) -> &QuizState {
        self.session.state()
    }

    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    pub fn analytics(&self) -> &A {
        &self.analytics
    }

    pub fn quiz_title(&self) -> Result<&str, AssessmentServiceError> {
        Ok(self.content.quiz_title(self.language)?)
    }

    pub fn disclaimer(&self) -> Result<&str, AssessmentServiceError> {
        Ok(&self.interface()?.disclaimer)
    }

    /// Button and section labels in the current language.
    pub fn interface(&self) -> Result<&'c InterfaceCopy, AssessmentServiceError> {
        Ok(self.content.interface(self.language)?)
    }

    /// Switches displayed text only; position and answers are untouched.
    pub fn change_language(&mut self, language: Language) -> Result<(), AssessmentServiceError> {
        self.content.pack(language)?;
        if language != self.language {
            info!(from = %self.language, to = %language, "language changed");
            self.language = language;
        }
        Ok(())
    }

    /// The localized current question, or `None` once completed.
    pub fn current_question(&self) -> Result<Option<QuestionView>, AssessmentServiceError> {
        Ok(views::question_view(
            &self.session,
            self.content,
            self.language,
        )?)
    }

    pub fn progress(&self) -> Result<ProgressView, AssessmentServiceError> {
        Ok(views::progress_view(
            &self.session,
            self.content,
            self.language,
        )?)
    }

    pub fn chart(&self) -> Result<Vec<ChartPoint>, AssessmentServiceError> {
        Ok(views::chart_points(
            self.session.chart(),
            self.content,
            self.language,
        )?)
    }

    /// Final score and diagnosis card, or `None` while questions remain.
    pub fn result(&self) -> Result<Option<ResultView>, AssessmentServiceError> {
        let Some(outcome) = self.session.outcome() else {
            return Ok(None);
        };
        let view = views::result_view(outcome, &self.session, self.content, self.language)?;
        Ok(Some(view))
    }

    pub fn submit_answer(
        &mut self,
        category: &CategoryId,
        value: u8,
    ) -> Result<&QuizState, AssessmentServiceError> {
        let completed = self.session.submit_answer(category, value)?.is_completed();
        self.note_completion(completed);
        Ok(self.session.state())
    }

    pub fn select_option(
        &mut self,
        option_index: usize,
    ) -> Result<&QuizState, AssessmentServiceError> {
        let completed = self.session.select_option(option_index)?.is_completed();
        self.note_completion(completed);
        Ok(self.session.state())
    }

    pub fn go_back(&mut self) -> Result<&QuizState, AssessmentServiceError> {
        Ok(self.session.go_back()?)
    }

    pub fn reset(&mut self) -> &QuizState {
        info!(revision = %self.session.definition().revision(), "assessment retaken");
        self.session.reset()
    }

    fn note_completion(&self, completed: bool) {
        if completed {
            if let Some(outcome) = self.session.outcome() {
                info!(
                    revision = %self.session.definition().revision(),
                    score = outcome.score.value,
                    diagnosis = %outcome.category,
                    "assessment completed"
                );
            }
        }
    }
}

/// Error raised by the assessment service.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AssessmentServiceError {
    #[error(transparent)]
    Quiz(#[from] QuizError),
    #[error(transparent)]
    Content(#[from] ContentError),
}
