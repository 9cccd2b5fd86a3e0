//! Analysis Document Intermediate Representation
//!
//! Parses a model reply into a strongly-typed tree so that every renderer
//! works from the same interpretation of tables, headings and emphasis.

use serde::{Deserialize, Serialize};

/// A maximal run of text, either plain or emphasized.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum TextSegment {
    Plain(String),
    Bold(String),
}

impl TextSegment {
    pub fn text(&self) -> &str {
        match self {
            TextSegment::Plain(text) | TextSegment::Bold(text) => text,
        }
    }

    pub fn is_bold(&self) -> bool {
        matches!(self, TextSegment::Bold(_))
    }
}

/// Normalized, segment-tokenized content of one table position.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Cell {
    /// Cell text exactly as sliced from the row, outer whitespace trimmed.
    pub raw_text: String,
    pub segments: Vec<TextSegment>,
}

impl Cell {
    /// Concatenated segment text, emphasis markers excluded.
    pub fn text(&self) -> String {
        self.segments.iter().map(TextSegment::text).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.iter().all(|segment| segment.text().is_empty())
    }
}

/// Fixed vocabulary the commentary column opens with.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum SupportLevel {
    Supported,
    InferentiallySupported,
    PartiallySupported,
    NotSupported,
}

impl SupportLevel {
    /// Every level, in the order labels must be tried when prefix matching.
    /// Qualified labels come before the bare "Supported".
    pub const MATCH_ORDER: [SupportLevel; 4] = [
        SupportLevel::InferentiallySupported,
        SupportLevel::PartiallySupported,
        SupportLevel::NotSupported,
        SupportLevel::Supported,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SupportLevel::Supported => "Supported",
            SupportLevel::InferentiallySupported => "Inferentially Supported",
            SupportLevel::PartiallySupported => "Partially Supported",
            SupportLevel::NotSupported => "Not Supported",
        }
    }

    /// Style class shared by the on-screen badge and the exported badge.
    pub fn css_class(self) -> &'static str {
        match self {
            SupportLevel::Supported => "supported",
            SupportLevel::InferentiallySupported => "inferentially-supported",
            SupportLevel::PartiallySupported => "partially-supported",
            SupportLevel::NotSupported => "not-supported",
        }
    }
}

/// Commentary cell split into its classification badge and free text.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClassifiedCell {
    pub label: Option<SupportLevel>,
    /// First line of the cell as written, present whenever `label` is.
    pub badge: Option<String>,
    pub body: Cell,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum TableCell {
    Plain(Cell),
    Commentary(ClassifiedCell),
}

impl TableCell {
    /// The bold-tokenized portion of the cell.
    pub fn body(&self) -> &Cell {
        match self {
            TableCell::Plain(cell) => cell,
            TableCell::Commentary(classified) => &classified.body,
        }
    }

    pub fn label(&self) -> Option<SupportLevel> {
        match self {
            TableCell::Plain(_) => None,
            TableCell::Commentary(classified) => classified.label,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Table {
    pub header: Vec<String>,
    pub rows: Vec<Vec<TableCell>>,
}

/// One top-level structural unit of a reply.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum Block {
    Heading(String),
    Paragraph(String),
    Table(Table),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Document {
    pub blocks: Vec<Block>,
}

impl Document {
    pub fn tables(&self) -> impl Iterator<Item = &Table> {
        self.blocks.iter().filter_map(|block| match block {
            Block::Table(table) => Some(table),
            _ => None,
        })
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// A document plus the report title lifted off its first line, if any.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TitledDocument {
    pub title: Option<String>,
    pub document: Document,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_text_joins_segments() {
        let cell = Cell {
            raw_text: "a **b** c".into(),
            segments: vec![
                TextSegment::Plain("a ".into()),
                TextSegment::Bold("b".into()),
                TextSegment::Plain(" c".into()),
            ],
        };
        assert_eq!(cell.text(), "a b c");
        assert!(!cell.is_empty());
    }

    #[test]
    fn match_order_lists_every_level_once() {
        let mut seen = std::collections::HashSet::new();
        for level in SupportLevel::MATCH_ORDER {
            assert!(seen.insert(level));
        }
        assert_eq!(seen.len(), 4);
        assert_eq!(SupportLevel::MATCH_ORDER[3], SupportLevel::Supported);
    }

    #[test]
    fn document_serializes_to_json() {
        let doc = Document {
            blocks: vec![Block::Heading("Overall Summary".into())],
        };
        let json = doc.to_json().unwrap();
        assert!(json.contains("Overall Summary"));
        let back: Document = serde_json::from_str(&json).unwrap();
        assert_eq!(back, doc);
    }
}
