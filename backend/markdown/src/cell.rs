//! Cell normalizer.
//!
//! Table cells arrive with three competing spellings of a line break: real
//! newlines, `<br>` markup and the two-character `\n` escape. All of them
//! become a real `\n`. Nothing else is touched, so quoted patent text keeps
//! its inner spacing.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::ir::{Cell, TextSegment};
use crate::segment::tokenize;

/// `<br>`, `<br/>`, `<br />` in any letter case.
static BREAK_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<br\s*/?>").unwrap());

/// Backslash followed by the letter n, as the model writes it inside cells.
const ESCAPED_NEWLINE: &str = "\\n";

/// Resolves break markup, then escaped newlines, into real line breaks.
pub fn normalize(raw: &str) -> String {
    let with_breaks = BREAK_TAG.replace_all(raw, "\n");
    with_breaks.replace(ESCAPED_NEWLINE, "\n")
}

/// Normalizes and bold-tokenizes one raw cell.
pub fn build_cell(raw: &str) -> Cell {
    Cell {
        raw_text: raw.to_string(),
        segments: tokenize(&normalize(raw)),
    }
}

/// A cell taken as written: one plain segment, no normalization.
pub fn verbatim_cell(raw: &str) -> Cell {
    let segments = if raw.is_empty() {
        Vec::new()
    } else {
        vec![TextSegment::Plain(raw.to_string())]
    };
    Cell {
        raw_text: raw.to_string(),
        segments,
    }
}
