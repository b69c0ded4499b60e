use serde::Serialize;

use super::{
    inline::Inline,
    source::{Span, slice},
};

/// One renderable piece of a parsed message.
///
/// Top-level segments appear in source order and their spans tile the whole
/// message: slicing the source with each span and concatenating gives the
/// input back byte for byte.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Segment {
    /// Unstyled text, copied verbatim.
    Text { span: Span, text: String },
    /// A recognized inline pattern.
    Styled { span: Span, node: Inline },
    /// A `- ` or `* ` line. `span` covers the whole line including the
    /// indentation and marker; `content` covers only the text after them.
    ListItem {
        span: Span,
        /// Number of leading whitespace characters before the marker.
        depth: usize,
        content: Vec<Segment>,
    },
    /// The `\n` between two lines.
    LineBreak { span: Span },
}

impl Segment {
    pub fn span(&self) -> Span {
        match self {
            Segment::Text { span, .. }
            | Segment::Styled { span, .. }
            | Segment::ListItem { span, .. }
            | Segment::LineBreak { span } => *span,
        }
    }

    /// The exact source bytes this segment was built from.
    pub fn source_text<'a>(&self, src: &'a str) -> &'a str {
        slice(src, self.span())
    }
}

/// Reconstructs the message from top-level segments with styling stripped.
pub fn source_text(src: &str, segments: &[Segment]) -> String {
    segments.iter().map(|s| s.source_text(src)).collect()
}
