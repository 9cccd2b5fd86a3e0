//! Config defaults: applies sensible default values to parsed config.

use crate::schema::{ExportConfig, LoggingConfig, PriorArtConfig, RenderConfig};

pub use priorart_markdown::export::{
    DEFAULT_DOCUMENT_TITLE, DEFAULT_FALLBACK_TITLE, DEFAULT_FILE_NAME,
};
pub use priorart_markdown::options::DEFAULT_COMMENTARY_MARKER;

pub const DEFAULT_DIALECT: &str = "analysis";

pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Apply all defaults to a freshly loaded config.
pub fn apply_all_defaults(config: PriorArtConfig) -> PriorArtConfig {
    let config = apply_render_defaults(config);
    let config = apply_export_defaults(config);
    apply_logging_defaults(config)
}

fn apply_render_defaults(mut config: PriorArtConfig) -> PriorArtConfig {
    let render = config.render.get_or_insert_with(RenderConfig::default);
    render
        .commentary_marker
        .get_or_insert_with(|| DEFAULT_COMMENTARY_MARKER.to_string());
    render.dialect.get_or_insert_with(|| DEFAULT_DIALECT.to_string());
    config
}

fn apply_export_defaults(mut config: PriorArtConfig) -> PriorArtConfig {
    let export = config.export.get_or_insert_with(ExportConfig::default);
    export
        .document_title
        .get_or_insert_with(|| DEFAULT_DOCUMENT_TITLE.to_string());
    export
        .fallback_title
        .get_or_insert_with(|| DEFAULT_FALLBACK_TITLE.to_string());
    export.file_name.get_or_insert_with(|| DEFAULT_FILE_NAME.to_string());
    config
}

/// Logging level defaults to info; file logging stays off unless a dir is set.
fn apply_logging_defaults(mut config: PriorArtConfig) -> PriorArtConfig {
    let logging = config.logging.get_or_insert_with(LoggingConfig::default);
    logging.level.get_or_insert_with(|| DEFAULT_LOG_LEVEL.to_string());
    logging.json.get_or_insert(false);
    config
}
