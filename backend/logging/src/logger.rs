//! Structured Logger
//!
//! Wraps `tracing` with a console layer on stderr (stdout carries rendered
//! output), optional JSON formatting, an optional daily NDJSON file and
//! environment-based level control.

use std::path::PathBuf;

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Prefix of the rolling log file: `priorart.log.YYYY-MM-DD`.
pub const LOG_FILE_PREFIX: &str = "priorart.log";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    /// Filter directive used when `RUST_LOG` is unset.
    pub level: String,
    /// Emit console lines as JSON instead of human-readable text.
    pub json: bool,
    /// Directory for the rolling NDJSON file; no file when `None`.
    pub dir: Option<PathBuf>,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
            dir: None,
        }
    }
}

/// Resolves the filter: `RUST_LOG` wins, then `level`, then `info`.
pub fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Initialize the global structured logger.
///
/// Returns `false` if a global subscriber was already installed.
pub fn init_logger(settings: &LogSettings) -> bool {
    let console_json = settings.json.then(|| {
        fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_ansi(false)
    });
    let console_text = (!settings.json).then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
    });

    let file_layer = settings.dir.as_ref().map(|dir| {
        let appender = RollingFileAppender::new(Rotation::DAILY, dir, LOG_FILE_PREFIX);
        fmt::layer().json().with_writer(appender).with_ansi(false)
    });

    tracing_subscriber::registry()
        .with(env_filter(&settings.level))
        .with(console_json)
        .with(console_text)
        .with(file_layer)
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings() {
        let settings = LogSettings::default();
        assert_eq!(settings.level, "info");
        assert!(!settings.json);
        assert!(settings.dir.is_none());
    }

    #[test]
    fn invalid_level_falls_back() {
        // Must not panic on a malformed directive.
        let _ = env_filter("not a [valid directive");
    }

    #[test]
    fn second_init_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let settings = LogSettings {
            level: "debug".to_string(),
            json: true,
            dir: Some(dir.path().to_path_buf()),
        };
        init_logger(&settings);
        assert!(!init_logger(&settings));
    }
}
