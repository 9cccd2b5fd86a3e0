//! Render options shared by the walker and both renderers.

use serde::{Deserialize, Serialize};

/// Header substring that marks the commentary column.
pub const DEFAULT_COMMENTARY_MARKER: &str = "analyst";

/// Which reply flavour is being rendered.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// Overlap/combination analysis: normalized cells, bold spans and
    /// support-level badges.
    #[default]
    Analysis,
    /// Patent understanding reply: cells and paragraphs kept as written.
    Understanding,
}

impl std::str::FromStr for Dialect {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "analysis" => Ok(Dialect::Analysis),
            "understanding" => Ok(Dialect::Understanding),
            other => Err(format!("unknown dialect '{other}' (expected analysis or understanding)")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub dialect: Dialect,
    /// Matched case-insensitively against header text.
    pub commentary_marker: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            dialect: Dialect::Analysis,
            commentary_marker: DEFAULT_COMMENTARY_MARKER.to_string(),
        }
    }
}

impl RenderOptions {
    pub fn understanding() -> Self {
        Self {
            dialect: Dialect::Understanding,
            ..Self::default()
        }
    }

    pub fn with_commentary_marker(mut self, marker: impl Into<String>) -> Self {
        self.commentary_marker = marker.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_dialect_names() {
        assert_eq!("Analysis".parse::<Dialect>(), Ok(Dialect::Analysis));
        assert_eq!(" understanding ".parse::<Dialect>(), Ok(Dialect::Understanding));
        assert!("chat".parse::<Dialect>().is_err());
    }
}
