//! Interactive renderer.
//!
//! Turns a [`Document`] into display nodes for on-screen placement, one root
//! node per block. [`ResultView`] holds the nodes for a reply that may still
//! be growing and rebuilds them only when the text changes.

use serde::{Deserialize, Serialize};

use crate::ir::{Block, Cell, ClassifiedCell, Document, Table, TableCell, TextSegment};
use crate::options::RenderOptions;
use crate::walker::parse;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Tag {
    Heading,
    Paragraph,
    Table,
    TableHead,
    TableBody,
    Row,
    HeaderCell,
    DataCell,
    Strong,
    Badge,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Element {
    pub tag: Tag,
    /// Stable identity among siblings, for consumers that diff on redraw.
    pub key: String,
    pub class: Option<String>,
    pub children: Vec<RenderNode>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum RenderNode {
    Element(Element),
    /// Text run; may contain `\n`, which consumers display as a line break.
    Text(String),
}

impl RenderNode {
    fn element(tag: Tag, key: impl Into<String>, children: Vec<RenderNode>) -> Self {
        RenderNode::Element(Element {
            tag,
            key: key.into(),
            class: None,
            children,
        })
    }

    pub fn tag(&self) -> Option<Tag> {
        match self {
            RenderNode::Element(element) => Some(element.tag),
            RenderNode::Text(_) => None,
        }
    }

    pub fn children(&self) -> &[RenderNode] {
        match self {
            RenderNode::Element(element) => &element.children,
            RenderNode::Text(_) => &[],
        }
    }

    /// All text below this node, in display order.
    pub fn text_content(&self) -> String {
        match self {
            RenderNode::Text(text) => text.clone(),
            RenderNode::Element(element) => {
                element.children.iter().map(RenderNode::text_content).collect()
            }
        }
    }
}

/// Builds display nodes from parsed documents.
pub struct InteractiveRenderer;

impl InteractiveRenderer {
    /// Parses and renders a reply in one step. The body is rendered from the
    /// first line; report titles are not lifted off.
    pub fn render_reply(reply: &str, options: &RenderOptions) -> Vec<RenderNode> {
        Self::render(&parse(reply, options))
    }

    pub fn render(document: &Document) -> Vec<RenderNode> {
        let mut tables = 0;
        document
            .blocks
            .iter()
            .enumerate()
            .map(|(index, block)| match block {
                Block::Heading(text) => RenderNode::element(
                    Tag::Heading,
                    format!("h3-{index}"),
                    vec![RenderNode::Text(text.clone())],
                ),
                Block::Paragraph(text) => RenderNode::element(
                    Tag::Paragraph,
                    format!("p-{index}"),
                    vec![RenderNode::Text(text.clone())],
                ),
                Block::Table(table) => {
                    tables += 1;
                    Self::table(table, format!("table-{}", tables - 1))
                }
            })
            .collect()
    }

    fn table(table: &Table, key: String) -> RenderNode {
        let header_cells = table
            .header
            .iter()
            .enumerate()
            .map(|(i, name)| {
                RenderNode::element(Tag::HeaderCell, i.to_string(), vec![RenderNode::Text(name.clone())])
            })
            .collect();
        let head = RenderNode::element(
            Tag::TableHead,
            "thead",
            vec![RenderNode::element(Tag::Row, "0", header_cells)],
        );

        let rows = table
            .rows
            .iter()
            .enumerate()
            .map(|(i, row)| {
                let cells = row
                    .iter()
                    .enumerate()
                    .map(|(j, cell)| RenderNode::element(Tag::DataCell, j.to_string(), Self::cell(cell)))
                    .collect();
                RenderNode::element(Tag::Row, i.to_string(), cells)
            })
            .collect();
        let body = RenderNode::element(Tag::TableBody, "tbody", rows);

        RenderNode::element(Tag::Table, key, vec![head, body])
    }

    fn cell(cell: &TableCell) -> Vec<RenderNode> {
        match cell {
            TableCell::Plain(cell) => Self::segments(cell),
            TableCell::Commentary(classified) => Self::commentary(classified),
        }
    }

    fn commentary(classified: &ClassifiedCell) -> Vec<RenderNode> {
        let (Some(level), Some(badge)) = (classified.label, &classified.badge) else {
            return Self::segments(&classified.body);
        };
        let mut nodes = vec![RenderNode::Element(Element {
            tag: Tag::Badge,
            key: "badge".to_string(),
            class: Some(format!("support-level {}", level.css_class())),
            children: vec![RenderNode::Text(badge.clone())],
        })];
        if !classified.body.is_empty() {
            nodes.push(RenderNode::Text("\n".to_string()));
            nodes.extend(Self::segments(&classified.body));
        }
        nodes
    }

    fn segments(cell: &Cell) -> Vec<RenderNode> {
        cell.segments
            .iter()
            .enumerate()
            .map(|(i, segment)| match segment {
                TextSegment::Plain(text) => RenderNode::Text(text.clone()),
                TextSegment::Bold(text) => RenderNode::element(
                    Tag::Strong,
                    i.to_string(),
                    vec![RenderNode::Text(text.clone())],
                ),
            })
            .collect()
    }
}

/// Rendered view of one reply, rebuilt only when the reply text changes.
#[derive(Debug, Clone, Default)]
pub struct ResultView {
    options: RenderOptions,
    source: String,
    nodes: Vec<RenderNode>,
    revision: u64,
}

impl ResultView {
    pub fn new(options: RenderOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Feeds the latest reply text. Returns `true` when the nodes changed and
    /// the consumer should redraw.
    pub fn update(&mut self, content: &str) -> bool {
        if self.revision > 0 && self.source == content {
            return false;
        }
        self.nodes = InteractiveRenderer::render_reply(content, &self.options);
        self.source.clear();
        self.source.push_str(content);
        self.revision += 1;
        true
    }

    pub fn nodes(&self) -> &[RenderNode] {
        &self.nodes
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Number of rebuilds so far.
    pub fn revision(&self) -> u64 {
        self.revision
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_root_node_per_block() {
        let nodes = InteractiveRenderer::render_reply(
            "**Summary**\ntext\n| A |\n|---|\n| 1 |",
            &RenderOptions::default(),
        );
        let tags: Vec<_> = nodes.iter().map(RenderNode::tag).collect();
        assert_eq!(tags, vec![Some(Tag::Heading), Some(Tag::Paragraph), Some(Tag::Table)]);
    }

    #[test]
    fn title_line_is_rendered_as_body() {
        let nodes = InteractiveRenderer::render_reply("COMBINATION ANALYSIS\nx", &RenderOptions::default());
        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[0].text_content(), "COMBINATION ANALYSIS");
    }

    #[test]
    fn bold_segments_become_strong_nodes() {
        let nodes = InteractiveRenderer::render_reply(
            "| A |\n|---|\n| x **y** z |",
            &RenderOptions::default(),
        );
        let body = &nodes[0].children()[1];
        let cell = &body.children()[0].children()[0];
        let tags: Vec<_> = cell.children().iter().map(RenderNode::tag).collect();
        assert_eq!(tags, vec![None, Some(Tag::Strong), None]);
        assert_eq!(cell.text_content(), "x y z");
    }

    #[test]
    fn commentary_renders_badge_then_body() {
        let nodes = InteractiveRenderer::render_reply(
            "| Analyst comments |\n|---|\n| Partially Supported\\nGap in color. |",
            &RenderOptions::default(),
        );
        let cell = &nodes[0].children()[1].children()[0].children()[0];
        let RenderNode::Element(badge) = &cell.children()[0] else {
            panic!("expected badge element");
        };
        assert_eq!(badge.tag, Tag::Badge);
        assert_eq!(badge.class.as_deref(), Some("support-level partially-supported"));
        assert_eq!(cell.text_content(), "Partially Supported\nGap in color.");
    }

    #[test]
    fn badge_without_body_has_no_break() {
        let nodes = InteractiveRenderer::render_reply(
            "| Analyst |\n|---|\n| Supported |",
            &RenderOptions::default(),
        );
        let cell = &nodes[0].children()[1].children()[0].children()[0];
        assert_eq!(cell.children().len(), 1);
    }

    #[test]
    fn view_rebuilds_only_on_change() {
        let mut view = ResultView::new(RenderOptions::default());
        assert!(view.update(""));
        assert!(view.nodes().is_empty());
        assert!(!view.update(""));
        assert!(view.update("| A |\n|---|\n| 1"));
        assert!(view.update("| A |\n|---|\n| 1 |"));
        assert!(!view.update("| A |\n|---|\n| 1 |"));
        assert_eq!(view.revision(), 3);
        assert_eq!(view.nodes().len(), 1);
    }
}
