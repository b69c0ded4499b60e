use crate::parsing::{mentions::Mentions, segment::Segment, source::Span};

use super::scan::{scan_all, select_spans};

/// Parses one line (or the content of a list item) into segments.
///
/// # Arguments
/// - `base`: Byte offset in the message where `s` begins (for absolute spans)
/// - `s`: The line content; must not contain `\n`
/// - `mentions`: names used to render mention tokens
///
/// # Returns
/// Segments covering the whole of `s`. Text between recognized patterns is
/// emitted as [`Segment::Text`]; an empty `s` yields no segments.
pub fn parse_inline(base: usize, s: &str, mentions: &Mentions) -> Vec<Segment> {
    let mut out = vec![];
    let mut text_start = base;

    // Helper to flush accumulated text as a Text segment
    fn flush_text(out: &mut Vec<Segment>, s: &str, base: usize, start: usize, end: usize) {
        if end > start {
            out.push(Segment::Text {
                span: Span::new(start, end),
                text: s.get(start - base..end - base).unwrap_or_default().to_string(),
            });
        }
    }

    for m in select_spans(scan_all(base, s, mentions)) {
        flush_text(&mut out, s, base, text_start, m.span.start);
        text_start = m.span.end;
        out.push(Segment::Styled {
            span: m.span,
            node: m.node,
        });
    }

    flush_text(&mut out, s, base, text_start, base + s.len());
    out
}
