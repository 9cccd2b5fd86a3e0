//! Classification extractor for the commentary column.
//!
//! The model opens every commentary cell with one of four support levels on
//! its own line. Stray emphasis around the label is tolerated by dropping
//! every asterisk before matching.

use crate::ir::{Cell, ClassifiedCell, SupportLevel};
use crate::segment::tokenize;

/// Whether a header names the commentary column.
pub fn is_commentary_header(header: &str, marker: &str) -> bool {
    if marker.is_empty() {
        return false;
    }
    header.to_lowercase().contains(&marker.to_lowercase())
}

/// Matches the start of a line against the fixed vocabulary.
///
/// Returns at most one level: candidates are tried in
/// [`SupportLevel::MATCH_ORDER`] and the first prefix hit wins.
pub fn match_label(line: &str) -> Option<SupportLevel> {
    let line = line.trim();
    SupportLevel::MATCH_ORDER
        .into_iter()
        .find(|level| line.starts_with(level.label()))
}

/// Splits a normalized commentary cell into badge and body.
pub fn classify(raw: &str, normalized: &str) -> ClassifiedCell {
    let stripped = normalized.replace('*', "");
    let (first_line, rest) = match stripped.split_once('\n') {
        Some((first, rest)) => (first, rest),
        None => (stripped.as_str(), ""),
    };

    match match_label(first_line) {
        Some(level) => ClassifiedCell {
            label: Some(level),
            badge: Some(first_line.trim().to_string()),
            body: Cell {
                raw_text: raw.to_string(),
                segments: tokenize(rest),
            },
        },
        None => ClassifiedCell {
            label: None,
            badge: None,
            body: Cell {
                raw_text: raw.to_string(),
                segments: tokenize(&stripped),
            },
        },
    }
}
