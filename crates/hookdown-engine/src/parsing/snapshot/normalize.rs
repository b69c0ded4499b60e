use std::fmt::Write;

use crate::parsing::{
    inline::Inline,
    segment::Segment,
    source::preview,
};

/// Renders segments as one line per segment, children indented under their
/// list item. Stable across runs, so it is suitable for `insta` snapshots.
///
/// ```text
/// Text (0, 6) "hello "
/// Styled Bold (6, 14) "**bold**" => "bold"
/// ```
pub fn normalize(src: &str, segments: &[Segment]) -> String {
    let mut out = String::new();
    for seg in segments {
        write_segment(&mut out, src, seg, 0);
    }
    out
}

fn write_segment(out: &mut String, src: &str, seg: &Segment, indent: usize) {
    let pad = "  ".repeat(indent);
    let sp = seg.span();
    let source = preview(src, sp, 60);
    // Writing to a String cannot fail
    let _ = match seg {
        Segment::Text { .. } => writeln!(out, "{pad}Text ({}, {}) {source:?}", sp.start, sp.end),
        Segment::LineBreak { .. } => writeln!(out, "{pad}LineBreak ({}, {})", sp.start, sp.end),
        Segment::Styled { node, .. } => writeln!(
            out,
            "{pad}Styled {} ({}, {}) {source:?} => {:?}",
            node_kind(node),
            sp.start,
            sp.end,
            node.display_text()
        ),
        Segment::ListItem { depth, .. } => writeln!(
            out,
            "{pad}ListItem depth={depth} ({}, {}) {source:?}",
            sp.start, sp.end
        ),
    };
    if let Segment::ListItem { content, .. } = seg {
        for child in content {
            write_segment(out, src, child, indent + 1);
        }
    }
}

fn node_kind(node: &Inline) -> &'static str {
    match node {
        Inline::UserMention { .. } => "UserMention",
        Inline::ChannelMention { .. } => "ChannelMention",
        Inline::RoleMention { .. } => "RoleMention",
        Inline::Everyone => "Everyone",
        Inline::Here => "Here",
        Inline::Link { .. } => "Link",
        Inline::BoldItalic { .. } => "BoldItalic",
        Inline::Bold { .. } => "Bold",
        Inline::Italic { .. } => "Italic",
        Inline::Underline { .. } => "Underline",
        Inline::Strikethrough { .. } => "Strikethrough",
        Inline::Code { .. } => "Code",
        Inline::Spoiler { .. } => "Spoiler",
    }
}
