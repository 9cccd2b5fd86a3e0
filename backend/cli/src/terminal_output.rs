//! Terminal output utilities: ANSI formatting, notes, and painting rendered
//! analysis nodes.

use std::io::Write;

use priorart_markdown::{RenderNode, Tag};

// ---------------------------------------------------------------------------
// ANSI Color/Style helpers
// ---------------------------------------------------------------------------

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";
pub const UNDERLINE: &str = "\x1b[4m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const MAGENTA: &str = "\x1b[35m";
pub const CYAN: &str = "\x1b[36m";

/// Check if the terminal supports color output.
pub fn supports_color() -> bool {
    std::env::var("NO_COLOR").is_err()
        && (std::env::var("COLORTERM").is_ok()
            || std::env::var("TERM")
                .map(|t| t != "dumb")
                .unwrap_or(false))
}

// ---------------------------------------------------------------------------
// Formatted notes (stderr, so stdout stays clean for piping)
// ---------------------------------------------------------------------------

/// Print a formatted SUCCESS note.
pub fn note_success(msg: &str) {
    if supports_color() {
        eprintln!("{GREEN}{BOLD}✓{RESET} {msg}");
    } else {
        eprintln!("OK: {msg}");
    }
}

/// Print a formatted WARNING note.
pub fn note_warn(msg: &str) {
    if supports_color() {
        eprintln!("{YELLOW}{BOLD}⚠{RESET} {msg}");
    } else {
        eprintln!("WARN: {msg}");
    }
}

// ---------------------------------------------------------------------------
// Node painting
// ---------------------------------------------------------------------------

/// Paints interactive render nodes as terminal text.
///
/// Tables are drawn as one card per body row, each cell under its header
/// name, since patent paragraphs are far wider than any terminal column.
pub struct Painter {
    color: bool,
}

impl Painter {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn style(&self, codes: &str, text: &str) -> String {
        if self.color {
            format!("{codes}{text}{RESET}")
        } else {
            text.to_string()
        }
    }

    pub fn paint(&self, nodes: &[RenderNode]) -> String {
        let mut out = String::new();
        for node in nodes {
            match node.tag() {
                Some(Tag::Heading) => {
                    let heading = self.style(&format!("{BOLD}{CYAN}{UNDERLINE}"), &node.text_content());
                    out.push_str(&heading);
                    out.push_str("\n\n");
                }
                Some(Tag::Table) => self.table(node, &mut out),
                _ => {
                    out.push_str(&self.inline(node));
                    out.push_str("\n\n");
                }
            }
        }
        out
    }

    fn inline(&self, node: &RenderNode) -> String {
        match node {
            RenderNode::Text(text) => text.clone(),
            RenderNode::Element(element) => {
                let inner: String = element.children.iter().map(|c| self.inline(c)).collect();
                match element.tag {
                    Tag::Strong => self.style(BOLD, &inner),
                    Tag::Badge => {
                        let class = element.class.as_deref().unwrap_or_default();
                        self.style(&format!("{BOLD}{}", badge_color(class)), &format!("[{inner}]"))
                    }
                    _ => inner,
                }
            }
        }
    }

    fn table(&self, node: &RenderNode, out: &mut String) {
        let [head, body] = node.children() else {
            return;
        };
        let headers: Vec<String> = head
            .children()
            .iter()
            .flat_map(|row| row.children())
            .map(RenderNode::text_content)
            .collect();

        if body.children().is_empty() {
            out.push_str(&self.style(BOLD, &headers.join(" | ")));
            out.push_str("\n\n");
            return;
        }

        for (index, row) in body.children().iter().enumerate() {
            out.push_str(&self.style(DIM, &format!("── Row {} ──", index + 1)));
            out.push('\n');
            for (column, cell) in row.children().iter().enumerate() {
                let name = headers.get(column).map(String::as_str).unwrap_or("");
                out.push_str(&self.style(BOLD, &format!("{name}:")));
                out.push('\n');
                for line in self.inline(cell).split('\n') {
                    out.push_str("    ");
                    out.push_str(line);
                    out.push('\n');
                }
            }
            out.push('\n');
        }
    }
}

fn badge_color(class: &str) -> &'static str {
    if class.contains("not-supported") {
        RED
    } else if class.contains("partially-supported") {
        MAGENTA
    } else if class.contains("inferentially-supported") {
        YELLOW
    } else {
        GREEN
    }
}

// ---------------------------------------------------------------------------
// Streaming writer
// ---------------------------------------------------------------------------

/// Write chunks to a buffered writer, flushing after each.
pub fn stream_write(writer: &mut impl Write, chunk: &str) -> std::io::Result<()> {
    writer.write_all(chunk.as_bytes())?;
    writer.flush()
}
