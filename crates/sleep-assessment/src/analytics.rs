use crate::assessment::{Language, Revision};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum AnalyticsEvent {
    SessionStarted {
        revision: Revision,
        language: Language,
        occurred_at: DateTime<Utc>,
    },
}

impl AnalyticsEvent {
    pub fn session_started(revision: Revision, language: Language) -> Self {
        Self::SessionStarted {
            revision,
            language,
            occurred_at: Utc::now(),
        }
    }
}

/// Receives the single "session started" signal. Implementations must not block.
pub trait AnalyticsSink: Send + Sync {
    fn record(&self, event: &AnalyticsEvent);
}

impl<T: AnalyticsSink + ?Sized> AnalyticsSink for Arc<T> {
    fn record(&self, event: &AnalyticsEvent) {
        (**self).record(event)
    }
}

/// Logs events locally; nothing leaves the process.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogAnalytics;

impl AnalyticsSink for LogAnalytics {
    fn record(&self, event: &AnalyticsEvent) {
        match event {
            AnalyticsEvent::SessionStarted {
                revision,
                language,
                occurred_at,
            } => info!(
                %revision,
                %language,
                occurred_at = %occurred_at.to_rfc3339(),
                "analytics: session started"
            ),
        }
    }
}
