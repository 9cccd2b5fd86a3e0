//! `priorart-config`: runtime configuration for the priorart tools.
//!
//! Provides:
//! - Typed config schema (render, export, logging)
//! - YAML loading
//! - `PRIORART_*` environment overrides
//! - Default value application
//! - Schema validation

pub mod defaults;
pub mod env;
pub mod io;
pub mod schema;
pub mod validation;

// Re-export most-used types at crate root.
pub use defaults::apply_all_defaults;
pub use env::{apply_env_overrides, apply_env_overrides_with, InvalidEnvVarError};
pub use io::{config_dir, config_file_path, load_config};
pub use schema::{ExportConfig, LoggingConfig, PriorArtConfig, RenderConfig};
pub use validation::{validate, ConfigValidationError, ValidationReport};

use anyhow::{bail, Context, Result};
use std::path::Path;

/// A config ready for use, with the warnings raised while validating it.
#[derive(Debug)]
pub struct PreparedConfig {
    pub config: PriorArtConfig,
    pub warnings: Vec<ConfigValidationError>,
}

/// Load, apply env overrides, apply defaults and validate a config file.
///
/// This is the main entry point for loading a config at runtime. Any
/// validation error fails the load; warnings are handed back to the caller,
/// which may not have a log subscriber yet.
pub async fn load_and_prepare(path: &Path) -> Result<PreparedConfig> {
    let config = load_config(path).await?;
    let config = apply_env_overrides(config).context("Failed to apply environment overrides")?;
    let config = apply_all_defaults(config);

    let report = validate(&config);
    if let Some(first) = report.errors.into_iter().next() {
        bail!(first);
    }

    Ok(PreparedConfig {
        config,
        warnings: report.warnings,
    })
}
