//! Telemetry and structured logging for the priorart tools.
//!
//! Console output goes to stderr so rendered documents can be piped from
//! stdout. An optional rolling NDJSON file mirrors every event.

pub mod logger;

pub use logger::{init_logger, LogSettings, LOG_FILE_PREFIX};
