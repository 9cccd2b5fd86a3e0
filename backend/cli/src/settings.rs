use std::path::PathBuf;

use anyhow::{anyhow, Result};
use priorart_config::defaults::DEFAULT_LOG_LEVEL;
use priorart_config::PriorArtConfig;
use priorart_logging::LogSettings;
use priorart_markdown::{Dialect, ExportRenderer, RenderOptions};

/// Runtime settings resolved from a prepared config and CLI flags.
#[derive(Debug, Clone)]
pub struct Settings {
    pub options: RenderOptions,
    pub document_title: String,
    pub fallback_title: String,
    /// Export target when `-o` is not given.
    pub file_name: PathBuf,
    pub log: LogSettings,
}

impl Settings {
    /// Expects a config that went through `load_and_prepare`, so every field
    /// is populated; missing ones still fall back to renderer defaults.
    pub fn from_config(config: &PriorArtConfig) -> Result<Self> {
        let defaults = ExportRenderer::default();

        let dialect = match config.dialect() {
            Some(name) => name.parse::<Dialect>().map_err(|e| anyhow!(e))?,
            None => Dialect::default(),
        };
        let mut options = RenderOptions {
            dialect,
            ..RenderOptions::default()
        };
        if let Some(marker) = config.commentary_marker() {
            options.commentary_marker = marker.to_string();
        }

        Ok(Self {
            options,
            document_title: config
                .document_title()
                .map(str::to_string)
                .unwrap_or(defaults.document_title),
            fallback_title: config
                .fallback_title()
                .map(str::to_string)
                .unwrap_or(defaults.fallback_title),
            file_name: PathBuf::from(
                config
                    .file_name()
                    .unwrap_or(priorart_markdown::export::DEFAULT_FILE_NAME),
            ),
            log: LogSettings {
                level: config.log_level().unwrap_or(DEFAULT_LOG_LEVEL).to_string(),
                json: config.log_json(),
                dir: config.log_dir().map(PathBuf::from),
            },
        })
    }

    pub fn with_dialect(mut self, dialect: Option<Dialect>) -> Self {
        if let Some(dialect) = dialect {
            self.options.dialect = dialect;
        }
        self
    }

    pub fn exporter(&self) -> ExportRenderer {
        ExportRenderer::new(self.options.clone())
            .with_titles(self.document_title.clone(), self.fallback_title.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use priorart_config::{apply_all_defaults, ExportConfig, RenderConfig};

    #[test]
    fn maps_defaulted_config() {
        let settings = Settings::from_config(&apply_all_defaults(PriorArtConfig::default())).unwrap();
        assert_eq!(settings.options, RenderOptions::default());
        assert_eq!(settings.file_name, PathBuf::from("patent-analysis.html"));
        assert_eq!(settings.fallback_title, "Analysis Result");
        assert_eq!(settings.log.level, "info");
    }

    #[test]
    fn maps_custom_values() {
        let config = PriorArtConfig {
            render: Some(RenderConfig {
                commentary_marker: Some("reviewer".to_string()),
                dialect: Some("understanding".to_string()),
            }),
            export: Some(ExportConfig {
                fallback_title: Some("Claim Chart".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        };
        let settings = Settings::from_config(&config).unwrap();
        assert_eq!(settings.options.dialect, Dialect::Understanding);
        assert_eq!(settings.options.commentary_marker, "reviewer");
        assert!(settings.exporter().render("x").contains("<h2>Claim Chart</h2>"));
    }

    #[test]
    fn flag_overrides_dialect() {
        let settings = Settings::from_config(&PriorArtConfig::default())
            .unwrap()
            .with_dialect(Some(Dialect::Understanding));
        assert_eq!(settings.options.dialect, Dialect::Understanding);
    }
}
