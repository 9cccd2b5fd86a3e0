use priorart_markdown::{
    Block, ExportRenderer, InteractiveRenderer, RenderNode, RenderOptions, SupportLevel, Table,
    TableCell, Tag, TextSegment, parse,
};

const SCENARIO_A: &str = "| Claim Clause | Martin | Analyst comments |\n|---|---|---|\n| 1a. Claim. | [Para 0001]\\nText **bold part**. | Supported\\nGood match. |";

const FULL_REPLY: &str = "COMBINATION ANALYSIS

**Overlap Table**

| Claim Clause | Martin | George | Analyst comments |
|---|---|---|---|
| 1a. A widget with a gear. | [Para 0042]\\nThe apparatus **contains a widget and a corresponding gear.** The gear is made of steel. | [Page 0003]\\nA **gear** is shown. | Supported\\nBoth references disclose the feature. |
| 1b. The gear being red. | | | **Not Supported**\\nThe color of the gear is not mentioned. |
| 1c. A handle attached to the widget. | [Para 0012]\\nSome text. **The widget includes a handle.**<br>[Para 0055]\\nFurther, **the handle is polymer**. | | Inferentially Supported\\nThe handle is implied by Martin. |

**Overall Summary**

**Summary of Combination:**
Martin teaches the widget; George adds the gear.
";

fn only_table(blocks: &[Block]) -> &Table {
    let tables: Vec<&Table> = blocks
        .iter()
        .filter_map(|b| match b {
            Block::Table(t) => Some(t),
            _ => None,
        })
        .collect();
    assert_eq!(tables.len(), 1);
    tables[0]
}

#[test]
fn scenario_a_table_cells() {
    let doc = parse(SCENARIO_A, &RenderOptions::default());
    let table = only_table(&doc.blocks);
    assert_eq!(table.header, vec!["Claim Clause", "Martin", "Analyst comments"]);
    assert_eq!(table.rows.len(), 1);

    let martin = table.rows[0][1].body();
    assert_eq!(
        martin.segments,
        vec![
            TextSegment::Plain("[Para 0001]\nText ".into()),
            TextSegment::Bold("bold part".into()),
            TextSegment::Plain(".".into()),
        ]
    );

    let TableCell::Commentary(comment) = &table.rows[0][2] else {
        panic!("analyst column was not classified");
    };
    assert_eq!(comment.label, Some(SupportLevel::Supported));
    assert_eq!(comment.body.text(), "Good match.");
}

#[test]
fn scenario_b_empty_commentary() {
    let reply = "| Claim Clause | Analyst comments |\n|---|---|\n| 1b. ||";
    let doc = parse(reply, &RenderOptions::default());
    let table = only_table(&doc.blocks);
    let TableCell::Commentary(comment) = &table.rows[0][1] else {
        panic!("analyst column was not classified");
    };
    assert_eq!(comment.label, None);
    assert_eq!(comment.body.text(), "");
}

#[test]
fn scenario_c_two_tables_stay_separate() {
    let reply = "| A | B |\n|---|---|\n| 1 | 2 |\n\n| C | D |\n|---|---|\n| 3 | 4 |\n| 5 | 6 |";
    let doc = parse(reply, &RenderOptions::default());
    assert_eq!(doc.blocks.len(), 2);
    let (Block::Table(first), Block::Table(second)) = (&doc.blocks[0], &doc.blocks[1]) else {
        panic!("expected two tables");
    };
    assert_eq!(first.header, vec!["A", "B"]);
    assert_eq!(first.rows.len(), 1);
    assert_eq!(second.header, vec!["C", "D"]);
    assert_eq!(second.rows.len(), 2);
}

#[test]
fn scenario_d_heading() {
    let doc = parse("**Overall Summary**", &RenderOptions::default());
    assert_eq!(doc.blocks, vec![Block::Heading("Overall Summary".into())]);
}

#[test]
fn full_reply_structure() {
    let doc = parse(FULL_REPLY, &RenderOptions::default());
    let table = only_table(&doc.blocks);
    assert_eq!(table.rows.len(), 3);

    let labels: Vec<_> = table.rows.iter().map(|row| row[3].label()).collect();
    assert_eq!(
        labels,
        vec![
            Some(SupportLevel::Supported),
            Some(SupportLevel::NotSupported),
            Some(SupportLevel::InferentiallySupported),
        ]
    );

    let handle = table.rows[2][1].body().text();
    assert_eq!(
        handle,
        "[Para 0012]\nSome text. The widget includes a handle.\n[Para 0055]\nFurther, the handle is polymer."
    );
    assert!(table.rows[1][1].body().is_empty());
}

#[test]
fn renderers_agree_on_body() {
    let options = RenderOptions::default();
    let nodes = InteractiveRenderer::render_reply(FULL_REPLY, &options);
    let html = ExportRenderer::new(options).render(FULL_REPLY);

    // Interactive keeps the title line as a paragraph; export lifts it.
    assert_eq!(nodes[0].tag(), Some(Tag::Paragraph));
    assert_eq!(nodes[0].text_content(), "COMBINATION ANALYSIS");
    assert!(html.contains("<h2>COMBINATION ANALYSIS</h2>"));
    assert!(!html.contains("<p>COMBINATION ANALYSIS</p>"));

    let body_nodes = &nodes[1..];
    let headings: Vec<String> = body_nodes
        .iter()
        .filter(|n| n.tag() == Some(Tag::Heading))
        .map(RenderNode::text_content)
        .collect();
    for heading in &headings {
        assert!(html.contains(&format!("<h3>{heading}</h3>")), "missing {heading}");
    }
    assert_eq!(html.matches("<h3>").count(), headings.len());

    let badges = html.matches("class=\"support-level").count();
    assert_eq!(badges, 3);
    assert!(html.contains("<strong>the handle is polymer</strong>"));
}

fn collect_tagged(nodes: &[RenderNode], tag: Tag, out: &mut Vec<String>) {
    for node in nodes {
        if node.tag() == Some(tag) {
            out.push(node.text_content());
        } else {
            collect_tagged(node.children(), tag, out);
        }
    }
}

/// Text of every `<td>` in document order, breaks read back as newlines.
fn exported_data_cells(html: &str) -> Vec<String> {
    html.split("<td>")
        .skip(1)
        .map(|rest| {
            let inner = rest.split("</td>").next().unwrap_or_default();
            let mut text = String::new();
            let mut in_tag = false;
            for c in inner.replace("<br>", "\n").chars() {
                match c {
                    '<' => in_tag = true,
                    '>' => in_tag = false,
                    c if !in_tag => text.push(c),
                    _ => {}
                }
            }
            text
        })
        .collect()
}

#[test]
fn renderers_agree_on_cell_and_paragraph_text() {
    let options = RenderOptions::default();
    let nodes = InteractiveRenderer::render_reply(FULL_REPLY, &options);
    let html = ExportRenderer::new(options).render(FULL_REPLY);
    let body_nodes = &nodes[1..];

    let mut cells = Vec::new();
    collect_tagged(body_nodes, Tag::DataCell, &mut cells);
    assert_eq!(cells.len(), 12);
    assert_eq!(cells, exported_data_cells(&html));
    assert_eq!(
        cells[3],
        "Supported\nBoth references disclose the feature."
    );

    let mut paragraphs = Vec::new();
    collect_tagged(body_nodes, Tag::Paragraph, &mut paragraphs);
    assert!(!paragraphs.is_empty());
    for paragraph in &paragraphs {
        assert!(html.contains(&format!("<p>{paragraph}</p>")), "missing {paragraph}");
    }
    assert_eq!(html.matches("<p>").count(), paragraphs.len());
}

#[test]
fn export_is_byte_identical_across_calls() {
    let renderer = ExportRenderer::default();
    let first = renderer.render(FULL_REPLY);
    for _ in 0..3 {
        assert_eq!(renderer.render(FULL_REPLY), first);
    }
}

#[test]
fn error_text_renders_as_paragraph() {
    let doc = parse(
        "An error occurred during analysis: quota exceeded",
        &RenderOptions::default(),
    );
    assert_eq!(
        doc.blocks,
        vec![Block::Paragraph(
            "An error occurred during analysis: quota exceeded".into()
        )]
    );
}

#[test]
fn understanding_reply() {
    let reply = "**Patent Understanding**\n| Problem | Solution |\n|---|---|\n| Cases crack. | A **steel** frame. |\n\n**Understand the Claim in Focus**\n| Claim Clause | Simplified Explanation |\n|---|---|\n| 1a. A housing. | The outer shell. |";
    let doc = parse(reply, &RenderOptions::understanding());
    assert_eq!(doc.blocks.len(), 4);
    let Block::Table(first) = &doc.blocks[1] else {
        panic!("expected table");
    };
    assert_eq!(first.rows[0][1].body().text(), "A **steel** frame.");
}
