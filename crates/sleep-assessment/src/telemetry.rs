use crate::config::{LogFormat, TelemetryConfig};
use std::fmt;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

#[derive(Debug)]
pub enum TelemetryError {
    InvalidFilter {
        directive: String,
        source: ParseError,
    },
    /// A global subscriber was already set, or the formatter could not be installed.
    Install {
        format: LogFormat,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl fmt::Display for TelemetryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TelemetryError::InvalidFilter { directive, .. } => {
                write!(f, "APP_LOG_LEVEL '{}' is not a valid log filter", directive)
            }
            TelemetryError::Install { format, source } => {
                write!(f, "unable to install {} log output: {}", format.as_str(), source)
            }
        }
    }
}

impl std::error::Error for TelemetryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TelemetryError::InvalidFilter { source, .. } => Some(source),
            TelemetryError::Install { source, .. } => Some(&**source),
        }
    }
}

/// Installs the global subscriber. `RUST_LOG` wins over the configured level.
///
/// Logs go to stderr so interactive output on stdout stays clean.
pub fn init(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => {
            EnvFilter::try_new(&config.log_level).map_err(|source| {
                TelemetryError::InvalidFilter {
                    directive: config.log_level.clone(),
                    source,
                }
            })?
        }
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false);

    let installed = match config.format {
        LogFormat::Json => builder.json().with_target(true).try_init(),
        LogFormat::Compact => builder.with_target(false).compact().try_init(),
    };
    installed.map_err(|source| TelemetryError::Install {
        format: config.format,
        source,
    })
}
