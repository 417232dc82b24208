//! Logging setup for hosts embedding the session core.
//!
//! The library itself only emits `tracing` events; installing a subscriber is
//! the host's call.

use tracing_subscriber::{fmt, EnvFilter};

pub const LOG_FORMAT_ENV: &str = "POLLFRONT_LOG_FORMAT";
const DEFAULT_DIRECTIVES: &str = "warn,pollfront=info";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Compact,
    Json,
}

impl LogFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Pretty => "pretty",
            LogFormat::Compact => "compact",
            LogFormat::Json => "json",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "pretty" => Some(LogFormat::Pretty),
            "compact" => Some(LogFormat::Compact),
            "json" => Some(LogFormat::Json),
            _ => None,
        }
    }

    /// `POLLFRONT_LOG_FORMAT`, falling back to pretty when unset or unknown.
    pub fn from_env() -> Self {
        std::env::var(LOG_FORMAT_ENV)
            .ok()
            .and_then(|value| Self::from_str(&value))
            .unwrap_or_default()
    }
}

/// Installs the global subscriber in the format named by the environment.
pub fn init_logging() -> bool {
    init_logging_with(LogFormat::from_env())
}

/// Installs a stderr subscriber. `RUST_LOG` replaces the default filter.
/// Returns false when a global subscriber was already set.
pub fn init_logging_with(format: LogFormat) -> bool {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES));
    let builder = fmt::Subscriber::builder().with_env_filter(filter).with_writer(std::io::stderr);
    let installed = match format {
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Compact => builder.compact().try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
    installed.is_ok()
}
