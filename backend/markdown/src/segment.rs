//! Bold-span tokenizer.
//!
//! Splits text into alternating plain and `**emphasized**` runs. Delimiters
//! pair greedily within a line and never nest; a marker left without a
//! partner is kept as literal text.

use crate::ir::TextSegment;

const DELIMITER: &str = "**";

/// Tokenizes `text` into maximal plain/bold segments, left to right.
pub fn tokenize(text: &str) -> Vec<TextSegment> {
    let mut segments = Vec::new();
    for (index, line) in text.split('\n').enumerate() {
        if index > 0 {
            push_plain(&mut segments, "\n");
        }
        tokenize_line(line, &mut segments);
    }
    segments
}

fn tokenize_line(line: &str, out: &mut Vec<TextSegment>) {
    let mut rest = line;
    while let Some(open) = rest.find(DELIMITER) {
        let inner = &rest[open + DELIMITER.len()..];
        let Some(close) = inner.find(DELIMITER) else {
            break;
        };
        push_plain(out, &rest[..open]);
        out.push(TextSegment::Bold(inner[..close].to_string()));
        rest = &inner[close + DELIMITER.len()..];
    }
    push_plain(out, rest);
}

fn push_plain(out: &mut Vec<TextSegment>, text: &str) {
    if text.is_empty() {
        return;
    }
    match out.last_mut() {
        Some(TextSegment::Plain(last)) => last.push_str(text),
        _ => out.push(TextSegment::Plain(text.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(s: &str) -> TextSegment {
        TextSegment::Plain(s.to_string())
    }

    fn bold(s: &str) -> TextSegment {
        TextSegment::Bold(s.to_string())
    }

    #[test]
    fn splits_bold_runs() {
        assert_eq!(
            tokenize("Text **bold part**."),
            vec![plain("Text "), bold("bold part"), plain(".")]
        );
    }

    #[test]
    fn empty_input_has_no_segments() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn empty_span_is_kept() {
        assert_eq!(tokenize("a****b"), vec![plain("a"), bold(""), plain("b")]);
    }

    #[test]
    fn unmatched_marker_stays_literal() {
        assert_eq!(
            tokenize("**one** and ** dangling"),
            vec![bold("one"), plain(" and ** dangling")]
        );
    }

    #[test]
    fn spans_do_not_cross_lines() {
        assert_eq!(
            tokenize("**open\nclose** then **x"),
            vec![plain("**open\nclose"), bold(" then "), plain("x")]
        );
    }

    #[test]
    fn third_asterisk_lands_inside_span() {
        assert_eq!(tokenize("***x**"), vec![bold("*x")]);
    }

    #[test]
    fn plain_text_round_trips() {
        let text = "[Para 0001]\n  indented quote  \ntrailing";
        let joined: String = tokenize(text).iter().map(TextSegment::text).collect();
        assert_eq!(joined, text);
    }

    #[test]
    fn segments_cover_text_minus_paired_markers() {
        let text = "[Para 0012]\nSome **handle** text.\n[Para 0055]\n**polymer** and ** left";
        let joined: String = tokenize(text).iter().map(TextSegment::text).collect();
        assert_eq!(
            joined,
            "[Para 0012]\nSome handle text.\n[Para 0055]\npolymer and ** left"
        );
    }
}
