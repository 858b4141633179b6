use crate::assessment::{Language, Revision};
use std::env;
use std::fmt;

/// Distinguishes runtime behavior for different stages of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub assessment: AssessmentConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let revision = match env::var("QUIZ_REVISION") {
            Ok(raw) => raw
                .parse::<Revision>()
                .map_err(|_| ConfigError::InvalidRevision(raw))?,
            Err(_) => Revision::default(),
        };
        let language = match env::var("QUIZ_LANGUAGE") {
            Ok(raw) => raw
                .parse::<Language>()
                .map_err(|_| ConfigError::InvalidLanguage(raw))?,
            Err(_) => Language::default(),
        };

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
        let format = match env::var("APP_LOG_FORMAT") {
            Ok(raw) => LogFormat::parse(&raw).ok_or(ConfigError::InvalidLogFormat(raw))?,
            Err(_) => LogFormat::Compact,
        };

        Ok(Self {
            environment,
            assessment: AssessmentConfig { revision, language },
            telemetry: TelemetryConfig { log_level, format },
        })
    }
}

/// Which catalog revision to run and the language it starts in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssessmentConfig {
    pub revision: Revision,
    pub language: Language,
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Json,
}

impl LogFormat {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Compact => "compact",
            Self::Json => "json",
        }
    }

    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "compact" | "pretty" | "text" => Some(Self::Compact),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidRevision(String),
    InvalidLanguage(String),
    InvalidLogFormat(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidRevision(value) => write!(
                f,
                "QUIZ_REVISION '{}' must be sleep_health or sleep_habits",
                value
            ),
            ConfigError::InvalidLanguage(value) => {
                write!(f, "QUIZ_LANGUAGE '{}' must be one of en, zh, ms", value)
            }
            ConfigError::InvalidLogFormat(value) => {
                write!(f, "APP_LOG_FORMAT '{}' must be compact or json", value)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
