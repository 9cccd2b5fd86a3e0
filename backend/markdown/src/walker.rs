//! Document walker.
//!
//! Scans a reply line by line. Per line, in priority order: a table row goes
//! to the [`TableBlockBuilder`], a line wrapped in `**` is a heading, any
//! other non-blank line is a paragraph. Blank lines only separate blocks.

use tracing::debug;

use crate::ir::{Block, Document, TitledDocument};
use crate::options::{Dialect, RenderOptions};
use crate::table::{Feed, TableBlockBuilder};

/// Report titles the export lifts off the first non-blank line.
pub const REPORT_TITLES: [&str; 2] = ["COMBINATION ANALYSIS", "OVERLAP ANALYSIS"];

const EMPHASIS: &str = "**";

/// Parses a reply into an ordered list of blocks.
pub fn parse(reply: &str, options: &RenderOptions) -> Document {
    let mut blocks = Vec::new();
    let mut tables = TableBlockBuilder::new(options);

    for line in reply.split('\n') {
        let Feed::Passed { flushed } = tables.feed(line) else {
            continue;
        };
        if let Some(table) = flushed {
            blocks.push(Block::Table(table));
        }
        if let Some(block) = classify_line(line.trim(), options.dialect) {
            blocks.push(block);
        }
    }
    if let Some(table) = tables.finish() {
        blocks.push(Block::Table(table));
    }

    debug!(
        dialect = ?options.dialect,
        blocks = blocks.len(),
        tables = blocks.iter().filter(|b| matches!(b, Block::Table(_))).count(),
        "parsed reply"
    );
    Document { blocks }
}

/// Lifts a report title off the first non-blank line, then parses the rest.
pub fn parse_titled(reply: &str, options: &RenderOptions) -> TitledDocument {
    let (title, body) = split_title(reply);
    TitledDocument {
        title: title.map(str::to_string),
        document: parse(body, options),
    }
}

/// Returns the report title and the text after it, or `(None, reply)` when
/// the first non-blank line is not one of [`REPORT_TITLES`].
pub fn split_title(reply: &str) -> (Option<&str>, &str) {
    let mut offset = 0;
    for line in reply.split_inclusive('\n') {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            offset += line.len();
            continue;
        }
        if REPORT_TITLES.contains(&trimmed) {
            return (Some(trimmed), &reply[offset + line.len()..]);
        }
        break;
    }
    (None, reply)
}

fn classify_line(trimmed: &str, dialect: Dialect) -> Option<Block> {
    if trimmed.is_empty() {
        return None;
    }
    if trimmed.starts_with(EMPHASIS) && trimmed.ends_with(EMPHASIS) {
        let text = heading_text(trimmed, dialect);
        (!text.is_empty()).then_some(Block::Heading(text))
    } else {
        let text = paragraph_text(trimmed, dialect);
        (!text.is_empty()).then_some(Block::Paragraph(text))
    }
}

fn heading_text(trimmed: &str, dialect: Dialect) -> String {
    match dialect {
        Dialect::Analysis => trimmed.replace('*', ""),
        Dialect::Understanding => trimmed
            .get(EMPHASIS.len()..trimmed.len().saturating_sub(EMPHASIS.len()))
            .unwrap_or_default()
            .to_string(),
    }
}

fn paragraph_text(trimmed: &str, dialect: Dialect) -> String {
    match dialect {
        Dialect::Analysis => trimmed.replace('*', ""),
        Dialect::Understanding => trimmed.to_string(),
    }
}
