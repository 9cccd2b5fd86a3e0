//! Config validation: schema checks with user-friendly error messages.

use crate::schema::PriorArtConfig;
use priorart_markdown::Dialect;
use thiserror::Error;

/// A config validation error with field path and message.
#[derive(Debug, Error)]
#[error("Config validation error at '{path}': {message}")]
pub struct ConfigValidationError {
    pub path: String,
    pub message: String,
}

/// A collection of validation errors found in one pass.
#[derive(Debug, Default)]
pub struct ValidationReport {
    pub errors: Vec<ConfigValidationError>,
    pub warnings: Vec<ConfigValidationError>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    fn error(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.errors.push(ConfigValidationError {
            path: path.into(),
            message: message.into(),
        });
    }

    fn warn(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(ConfigValidationError {
            path: path.into(),
            message: message.into(),
        });
    }
}

/// Validate the config and return a report of all errors and warnings.
pub fn validate(config: &PriorArtConfig) -> ValidationReport {
    let mut report = ValidationReport::default();
    validate_render(config, &mut report);
    validate_export(config, &mut report);
    validate_logging(config, &mut report);
    report
}

fn validate_render(config: &PriorArtConfig, report: &mut ValidationReport) {
    let Some(render) = &config.render else { return };
    if let Some(marker) = &render.commentary_marker {
        if marker.trim().is_empty() {
            report.warn(
                "render.commentaryMarker",
                "Empty marker; no column will be classified",
            );
        }
    }
    if let Some(dialect) = &render.dialect {
        if let Err(message) = dialect.parse::<Dialect>() {
            report.error("render.dialect", message);
        }
    }
}

fn validate_export(config: &PriorArtConfig, report: &mut ValidationReport) {
    let Some(export) = &config.export else { return };
    if export.fallback_title.as_deref().is_some_and(|t| t.trim().is_empty()) {
        report.error("export.fallbackTitle", "Fallback title cannot be empty");
    }
    if export.document_title.as_deref().is_some_and(|t| t.trim().is_empty()) {
        report.warn("export.documentTitle", "Empty page title");
    }
    if let Some(name) = &export.file_name {
        if name.trim().is_empty() {
            report.error("export.fileName", "File name cannot be empty");
        } else if !(name.ends_with(".html") || name.ends_with(".htm")) {
            report.warn(
                "export.fileName",
                format!("'{name}' has no .html extension; browsers may not open it"),
            );
        }
    }
}

fn validate_logging(config: &PriorArtConfig, report: &mut ValidationReport) {
    let Some(logging) = &config.logging else { return };
    if let Some(level) = &logging.level {
        let base = level.split(',').next().unwrap_or_default().trim().to_ascii_lowercase();
        let plain_level = matches!(
            base.as_str(),
            "trace" | "debug" | "info" | "warn" | "error" | "off"
        );
        if !plain_level && !base.contains('=') {
            report.warn(
                "logging.level",
                format!("'{level}' is not a known level; falling back to info"),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults::apply_all_defaults;
    use crate::schema::{ExportConfig, LoggingConfig, RenderConfig};

    #[test]
    fn defaulted_config_is_valid() {
        let report = validate(&apply_all_defaults(PriorArtConfig::default()));
        assert!(report.is_valid(), "errors: {:?}", report.errors);
        assert!(report.warnings.is_empty(), "warnings: {:?}", report.warnings);
    }

    #[test]
    fn unknown_dialect_is_error() {
        let mut cfg = PriorArtConfig::default();
        cfg.render = Some(RenderConfig {
            dialect: Some("chat".to_string()),
            ..Default::default()
        });
        let report = validate(&cfg);
        assert!(!report.is_valid());
        assert_eq!(report.errors[0].path, "render.dialect");
    }

    #[test]
    fn empty_fallback_title_is_error() {
        let mut cfg = PriorArtConfig::default();
        cfg.export = Some(ExportConfig {
            fallback_title: Some("  ".to_string()),
            ..Default::default()
        });
        assert!(!validate(&cfg).is_valid());
    }

    #[test]
    fn non_html_file_name_is_warning() {
        let mut cfg = PriorArtConfig::default();
        cfg.export = Some(ExportConfig {
            file_name: Some("analysis.txt".to_string()),
            ..Default::default()
        });
        let report = validate(&cfg);
        assert!(report.is_valid());
        assert_eq!(report.warnings[0].path, "export.fileName");
    }

    #[test]
    fn filter_directives_are_accepted() {
        let mut cfg = PriorArtConfig::default();
        cfg.logging = Some(LoggingConfig {
            level: Some("priorart_markdown=debug,info".to_string()),
            ..Default::default()
        });
        assert!(validate(&cfg).warnings.is_empty());
    }
}
