use crate::parsing::segment::Segment;

use super::RenderOptions;

/// The text a reader sees: delimiters dropped, mentions resolved, list
/// markers replaced by the bullet glyph. Indentation is kept as spaces.
pub fn to_plain_text(segments: &[Segment], opts: &RenderOptions) -> String {
    let mut out = String::new();
    for seg in segments {
        push_plain(&mut out, seg, opts);
    }
    out
}

fn push_plain(out: &mut String, seg: &Segment, opts: &RenderOptions) {
    match seg {
        Segment::Text { text, .. } => out.push_str(text),
        Segment::LineBreak { .. } => out.push('\n'),
        Segment::Styled { node, .. } => out.push_str(&node.display_text()),
        Segment::ListItem { depth, content, .. } => {
            out.push_str(&" ".repeat(*depth));
            out.push_str(&opts.bullet);
            out.push(' ');
            for child in content {
                push_plain(out, child, opts);
            }
        }
    }
}
