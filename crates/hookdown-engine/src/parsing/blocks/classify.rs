use crate::parsing::source::{LineRef, Span};

use super::kinds::ListItem;

/// Classification of a single line containing only local facts.
///
/// Each line is classified independently before any inline matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass {
    /// An ordinary line; the whole line is inline-parsed.
    Plain {
        /// Byte span of the line in the message.
        line: Span,
    },
    /// A bullet list line.
    ListItem {
        /// Byte span of the whole line, indentation and marker included.
        line: Span,
        /// Leading whitespace characters before the marker.
        depth: usize,
        /// Byte span of the content after the marker and its spaces.
        content: Span,
    },
}

/// Classifies individual lines for segmentation.
pub struct LineClassifier;

impl LineClassifier {
    /// Classifies a line into a [`LineClass`].
    pub fn classify(&self, lr: &LineRef<'_>) -> LineClass {
        match ListItem::strip_marker(lr.text) {
            Some(prefix) => LineClass::ListItem {
                line: lr.span,
                depth: prefix.depth,
                content: Span::new(lr.span.start + prefix.content_offset, lr.span.end),
            },
            None => LineClass::Plain { line: lr.span },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::source::lines_with_spans;

    #[test]
    fn classify_mixed_lines() {
        let classes: Vec<_> = lines_with_spans("intro\n  * nested")
            .map(|lr| LineClassifier.classify(&lr))
            .collect();
        assert_eq!(
            classes,
            vec![
                LineClass::Plain {
                    line: Span::new(0, 5)
                },
                LineClass::ListItem {
                    line: Span::new(6, 16),
                    depth: 2,
                    content: Span::new(10, 16),
                },
            ]
        );
    }
}
