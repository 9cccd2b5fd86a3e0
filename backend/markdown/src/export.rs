//! Export renderer.
//!
//! Serializes a parsed reply into one self-contained HTML page with inline
//! styling and no external references. Output is a pure function of the
//! reply and renderer settings, so repeated exports are byte-identical.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use crate::ir::{Block, Cell, ClassifiedCell, Document, Table, TableCell, TextSegment};
use crate::options::RenderOptions;
use crate::walker::parse_titled;

pub const DEFAULT_DOCUMENT_TITLE: &str = "Patent Analysis Export";
pub const DEFAULT_FALLBACK_TITLE: &str = "Analysis Result";
pub const DEFAULT_FILE_NAME: &str = "patent-analysis.html";

const LINE_BREAK: &str = "<br>";

const STYLESHEET: &str = "\
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Helvetica, Arial, sans-serif; line-height: 1.6; color: #333; max-width: 1200px; margin: 2rem auto; padding: 1rem; }
h2 { font-size: 1.75rem; border-bottom: 2px solid #7cc4ef; padding-bottom: 0.75rem; margin-bottom: 1.5rem; color: #154D71; }
h3 { font-size: 1.3rem; color: #154D71; margin-top: 2rem; margin-bottom: 1rem; }
p { color: #5A7A90; margin-bottom: 1rem; white-space: pre-wrap; }
table { width: 100%; border-collapse: collapse; margin-top: 1rem; margin-bottom: 2rem; font-size: 0.95rem; }
td, th { border: 1px solid #d1e3f3; padding: 0.85rem; text-align: left; vertical-align: top; }
th { background-color: #1C6EA4; color: #F2F2F2; font-weight: 700; }
tbody tr:nth-child(even) { background-color: #f8fcff; }
strong { font-weight: bold; }
.support-level { display: inline-block; font-weight: 700; font-size: 0.85rem; padding: 0.15rem 0.6rem; border-radius: 999px; margin-bottom: 0.35rem; }
.support-level.supported { background-color: #e3f6e8; color: #1e7b3a; }
.support-level.inferentially-supported { background-color: #fff6dc; color: #8a6200; }
.support-level.partially-supported { background-color: #ffeede; color: #a4510b; }
.support-level.not-supported { background-color: #fde7e7; color: #a12626; }
";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to create export directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write export file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone)]
pub struct ExportRenderer {
    pub options: RenderOptions,
    /// Text of the page's `<title>` element.
    pub document_title: String,
    /// Heading used when the reply carries no report title.
    pub fallback_title: String,
}

impl Default for ExportRenderer {
    fn default() -> Self {
        Self::new(RenderOptions::default())
    }
}

impl ExportRenderer {
    pub fn new(options: RenderOptions) -> Self {
        Self {
            options,
            document_title: DEFAULT_DOCUMENT_TITLE.to_string(),
            fallback_title: DEFAULT_FALLBACK_TITLE.to_string(),
        }
    }

    pub fn with_titles(mut self, document_title: impl Into<String>, fallback_title: impl Into<String>) -> Self {
        self.document_title = document_title.into();
        self.fallback_title = fallback_title.into();
        self
    }

    /// Renders a reply into a complete HTML page.
    pub fn render(&self, reply: &str) -> String {
        let titled = parse_titled(reply, &self.options);
        let title = titled.title.as_deref().unwrap_or(&self.fallback_title);
        self.render_document(title, &titled.document)
    }

    pub fn render_document(&self, title: &str, document: &Document) -> String {
        let body = document
            .blocks
            .iter()
            .map(render_block)
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"UTF-8\">\n<title>{document_title}</title>\n<style>\n{STYLESHEET}</style>\n</head>\n<body>\n<h2>{title}</h2>\n{body}\n</body>\n</html>\n",
            document_title = html_escape(&self.document_title),
            title = html_escape(title),
        )
    }

    /// Renders a reply and saves it, creating parent directories as needed.
    pub async fn write_to(&self, reply: &str, path: &Path) -> Result<PathBuf, ExportError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|source| ExportError::CreateDir {
                    path: parent.to_path_buf(),
                    source,
                })?;
        }
        let html = self.render(reply);
        tokio::fs::write(path, html.as_bytes())
            .await
            .map_err(|source| ExportError::Write {
                path: path.to_path_buf(),
                source,
            })?;
        info!(path = %path.display(), bytes = html.len(), "Exported analysis");
        Ok(path.to_path_buf())
    }
}

fn render_block(block: &Block) -> String {
    match block {
        Block::Heading(text) => format!("<h3>{}</h3>", html_escape(text)),
        Block::Paragraph(text) => format!("<p>{}</p>", html_escape(text)),
        Block::Table(table) => render_table(table),
    }
}

fn render_table(table: &Table) -> String {
    let mut parts = vec!["<table>".to_string(), "<thead><tr>".to_string()];
    parts.extend(table.header.iter().map(|h| format!("<th>{}</th>", html_escape(h))));
    parts.push("</tr></thead>".to_string());
    parts.push("<tbody>".to_string());
    for row in &table.rows {
        parts.push("<tr>".to_string());
        parts.extend(row.iter().map(|cell| format!("<td>{}</td>", render_cell(cell))));
        parts.push("</tr>".to_string());
    }
    parts.push("</tbody></table>".to_string());
    parts.join("\n")
}

fn render_cell(cell: &TableCell) -> String {
    match cell {
        TableCell::Plain(cell) => render_segments(cell),
        TableCell::Commentary(classified) => render_commentary(classified),
    }
}

fn render_commentary(classified: &ClassifiedCell) -> String {
    let (Some(level), Some(badge)) = (classified.label, &classified.badge) else {
        return render_segments(&classified.body);
    };
    let mut out = format!(
        "<span class=\"support-level {}\">{}</span>",
        level.css_class(),
        html_escape(badge)
    );
    if !classified.body.is_empty() {
        out.push_str(LINE_BREAK);
        out.push_str(&render_segments(&classified.body));
    }
    out
}

fn render_segments(cell: &Cell) -> String {
    cell.segments
        .iter()
        .map(|segment| match segment {
            TextSegment::Plain(text) => escape_with_breaks(text),
            TextSegment::Bold(text) => format!("<strong>{}</strong>", escape_with_breaks(text)),
        })
        .collect()
}

fn escape_with_breaks(text: &str) -> String {
    html_escape(text).replace('\n', LINE_BREAK)
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
