//! `PRIORART_*` environment overrides.
//!
//! Applied after the YAML file is read and before defaults, so an exported
//! variable always beats the file and the file always beats the defaults.

use std::collections::HashMap;

use thiserror::Error;

use crate::schema::{ExportConfig, LoggingConfig, PriorArtConfig, RenderConfig};

pub const ENV_COMMENTARY_MARKER: &str = "PRIORART_COMMENTARY_MARKER";
pub const ENV_DIALECT: &str = "PRIORART_DIALECT";
pub const ENV_DOCUMENT_TITLE: &str = "PRIORART_DOCUMENT_TITLE";
pub const ENV_FALLBACK_TITLE: &str = "PRIORART_FALLBACK_TITLE";
pub const ENV_FILE_NAME: &str = "PRIORART_EXPORT_FILE";
pub const ENV_LOG_LEVEL: &str = "PRIORART_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "PRIORART_LOG_DIR";
pub const ENV_LOG_JSON: &str = "PRIORART_LOG_JSON";

#[derive(Debug, Error)]
#[error("Invalid value {value:?} for env var {var_name}: expected true/false/1/0")]
pub struct InvalidEnvVarError {
    pub var_name: String,
    pub value: String,
}

/// Apply overrides from the process environment.
pub fn apply_env_overrides(config: PriorArtConfig) -> Result<PriorArtConfig, InvalidEnvVarError> {
    apply_env_overrides_with(config, &std::env::vars().collect())
}

/// Apply overrides from a provided map (useful for testing).
pub fn apply_env_overrides_with(
    mut config: PriorArtConfig,
    env: &HashMap<String, String>,
) -> Result<PriorArtConfig, InvalidEnvVarError> {
    let get = |name: &str| env.get(name).filter(|v| !v.is_empty()).cloned();

    if let Some(marker) = get(ENV_COMMENTARY_MARKER) {
        config.render.get_or_insert_with(RenderConfig::default).commentary_marker = Some(marker);
    }
    if let Some(dialect) = get(ENV_DIALECT) {
        config.render.get_or_insert_with(RenderConfig::default).dialect = Some(dialect);
    }

    if let Some(title) = get(ENV_DOCUMENT_TITLE) {
        config.export.get_or_insert_with(ExportConfig::default).document_title = Some(title);
    }
    if let Some(title) = get(ENV_FALLBACK_TITLE) {
        config.export.get_or_insert_with(ExportConfig::default).fallback_title = Some(title);
    }
    if let Some(name) = get(ENV_FILE_NAME) {
        config.export.get_or_insert_with(ExportConfig::default).file_name = Some(name);
    }

    if let Some(level) = get(ENV_LOG_LEVEL) {
        config.logging.get_or_insert_with(LoggingConfig::default).level = Some(level);
    }
    if let Some(dir) = get(ENV_LOG_DIR) {
        config.logging.get_or_insert_with(LoggingConfig::default).dir = Some(dir);
    }
    if let Some(raw) = get(ENV_LOG_JSON) {
        let json = parse_bool(&raw).ok_or_else(|| InvalidEnvVarError {
            var_name: ENV_LOG_JSON.to_string(),
            value: raw.clone(),
        })?;
        config.logging.get_or_insert_with(LoggingConfig::default).json = Some(json);
    }

    Ok(config)
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
