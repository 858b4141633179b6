use std::sync::Arc;

use sleep_assessment::analytics::LogAnalytics;
use sleep_assessment::assessment::{
    AssessmentDefinition, AssessmentService, DiagnosisCategory, Language, QuizPhase, QuizSession,
    Revision, SeverityTier,
};
use sleep_assessment::content::LocalizationTable;

fn sleep_health() -> Arc<AssessmentDefinition> {
    Arc::new(AssessmentDefinition::builtin(Revision::SleepHealth).expect("builtin definition"))
}

#[test]
fn full_run_with_mixed_answers_produces_struggling_report() {
    let content = LocalizationTable::builtin(Revision::SleepHealth).expect("content loads");
    let mut service =
        AssessmentService::start(sleep_health(), content, Language::En, LogAnalytics)
            .expect("service starts");

    // raw 23 -> 64 on the 0-100 scale.
    let picks = [2, 2, 2, 2, 1, 2, 2, 2, 2, 2, 2, 2];
    for pick in picks {
        let question = service
            .current_question()
            .expect("content")
            .expect("question pending");
        assert_eq!(question.options.len(), 4, "{} offers four options", question.category);
        service.select_option(pick).expect("answer accepted");
    }

    assert_eq!(service.state().phase(), QuizPhase::Completed);
    let result = service.result().expect("content").expect("result ready");
    assert_eq!(result.raw_score, 23);
    assert_eq!(result.score, 64);
    assert_eq!(result.max_score, 100);
    assert_eq!(result.diagnosis.category, DiagnosisCategory::Struggling);
    assert_eq!(result.diagnosis.severity, SeverityTier::Warning);
    assert_eq!(result.chart.len(), 12);
    assert_eq!(result.chart[0].subject, "Falling Asleep");
    assert!(!result.disclaimer.is_empty());
}

#[test]
fn worst_answers_produce_severe_card_in_every_language() {
    let content = LocalizationTable::builtin(Revision::SleepHealth).expect("content loads");
    let mut service =
        AssessmentService::start(sleep_health(), content, Language::En, LogAnalytics)
            .expect("service starts");
    for _ in 0..12 {
        service.select_option(3).expect("answer accepted");
    }

    let english = service.result().expect("content").expect("result ready");
    assert_eq!(english.diagnosis.title, "Severe Sleep Issues");
    assert_eq!(english.diagnosis.color, "red");

    for language in [Language::Zh, Language::Ms] {
        service.change_language(language).expect("language available");
        let localized = service.result().expect("content").expect("result ready");
        assert_eq!(localized.score, english.score);
        assert_eq!(localized.diagnosis.category, DiagnosisCategory::Severe);
        assert_ne!(localized.diagnosis.title, english.diagnosis.title);
    }
}

#[test]
fn session_can_revise_an_earlier_answer_before_finishing() {
    let mut session = QuizSession::new(sleep_health());
    for _ in 0..11 {
        session.select_option(0).expect("answer accepted");
    }
    session.go_back().expect("step back");
    session.go_back().expect("step back");
    session.select_option(3).expect("overwrite");
    session.select_option(0).expect("answer accepted");
    session.select_option(0).expect("final answer");

    let outcome = session.outcome().expect("completed");
    assert_eq!(outcome.score.raw, 3);
    assert_eq!(outcome.score.value, 8);
    assert_eq!(outcome.category, DiagnosisCategory::Healthy);
}
