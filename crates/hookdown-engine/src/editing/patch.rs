use std::ops::Range;

/// Result of wrapping a selection in markdown tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Insertion {
    /// The whole message after the edit.
    pub content: String,
    /// Byte offset of the caret: after the wrapped text, before the closing token.
    pub cursor: usize,
    /// Byte range of `content` that was replaced or inserted.
    pub changed: Range<usize>,
}
