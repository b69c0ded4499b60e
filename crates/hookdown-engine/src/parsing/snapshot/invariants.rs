use crate::parsing::{segment::Segment, source::slice};

/// Validates parser output invariants.
///
/// Asserts that:
/// - Top-level segment spans tile the message from 0 to its length, in order
/// - Text segments hold exactly the bytes of their span
/// - List item content spans lie inside their line and tile its tail
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(src: &str, segments: &[Segment]) {
    let mut expected = 0usize;
    for seg in segments {
        let sp = seg.span();
        assert_eq!(
            sp.start, expected,
            "segment {seg:?} does not start where the previous one ended"
        );
        assert!(
            sp.start <= sp.end && sp.end <= src.len(),
            "segment span out of bounds: {sp:?} (len: {})",
            src.len()
        );
        check_segment(src, seg);
        expected = sp.end;
    }
    assert_eq!(expected, src.len(), "segments do not cover the whole message");
}

fn check_segment(src: &str, seg: &Segment) {
    match seg {
        Segment::Text { span, text } => {
            assert_eq!(slice(src, *span), text, "text segment differs from its span");
        }
        Segment::LineBreak { span } => {
            assert_eq!(slice(src, *span), "\n", "line break span is not a newline");
        }
        Segment::Styled { span, .. } => {
            assert!(!span.is_empty(), "styled segment with empty span: {span:?}");
        }
        Segment::ListItem { span, content, .. } => {
            let mut pos = content.first().map_or(span.end, |c| c.span().start);
            assert!(
                pos >= span.start,
                "list content starts before its line: {span:?}"
            );
            for child in content {
                assert_eq!(child.span().start, pos, "list content has a gap at {pos}");
                check_segment(src, child);
                pos = child.span().end;
            }
            assert_eq!(pos, span.end, "list content does not reach the end of its line");
        }
    }
}
