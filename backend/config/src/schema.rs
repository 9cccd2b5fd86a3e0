//! priorart configuration schema.
//!
//! Every section is optional in the YAML file; [`crate::apply_all_defaults`]
//! fills what the user left out.

use serde::{Deserialize, Serialize};

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriorArtConfig {
    /// Parsing behaviour shared by both renderers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub render: Option<RenderConfig>,

    /// Standalone HTML export
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export: Option<ExportConfig>,

    /// Logging configuration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderConfig {
    /// Header substring marking the commentary column ("analyst").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commentary_marker: Option<String>,

    /// "analysis" | "understanding"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dialect: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportConfig {
    /// Text of the exported page's `<title>`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_title: Option<String>,

    /// Heading used when the reply has no report title line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback_title: Option<String>,

    /// Default output file name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggingConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,

    /// Directory for the rolling NDJSON log file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub json: Option<bool>,
}

impl PriorArtConfig {
    pub fn commentary_marker(&self) -> Option<&str> {
        self.render.as_ref()?.commentary_marker.as_deref()
    }

    pub fn dialect(&self) -> Option<&str> {
        self.render.as_ref()?.dialect.as_deref()
    }

    pub fn document_title(&self) -> Option<&str> {
        self.export.as_ref()?.document_title.as_deref()
    }

    pub fn fallback_title(&self) -> Option<&str> {
        self.export.as_ref()?.fallback_title.as_deref()
    }

    pub fn file_name(&self) -> Option<&str> {
        self.export.as_ref()?.file_name.as_deref()
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref()?.level.as_deref()
    }

    pub fn log_dir(&self) -> Option<&str> {
        self.logging.as_ref()?.dir.as_deref()
    }

    pub fn log_json(&self) -> bool {
        self.logging.as_ref().and_then(|l| l.json).unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_camel_case_yaml() {
        let yaml = "\
render:
  commentaryMarker: reviewer
export:
  fallbackTitle: Claim Chart
  fileName: chart.html
logging:
  level: debug
  json: true
";
        let config: PriorArtConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.commentary_marker(), Some("reviewer"));
        assert_eq!(config.fallback_title(), Some("Claim Chart"));
        assert_eq!(config.file_name(), Some("chart.html"));
        assert_eq!(config.log_level(), Some("debug"));
        assert!(config.log_json());
        assert_eq!(config.document_title(), None);
    }

    #[test]
    fn empty_yaml_is_default() {
        let config: PriorArtConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, PriorArtConfig::default());
    }

    #[test]
    fn skips_unset_sections_when_serializing() {
        let json = serde_json::to_value(PriorArtConfig::default()).unwrap();
        assert_eq!(json, serde_json::json!({}));
    }
}
