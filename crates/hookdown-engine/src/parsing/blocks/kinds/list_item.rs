use crate::parsing::blocks::cursor::Cursor;

/// Bullet list item type with owned marker constants.
///
/// A list line is optional leading whitespace, one marker, at least one
/// space, then the content. Numbered lists are not part of the dialect.
pub struct ListItem;

/// The facts [`ListItem::strip_marker`] extracts from a list line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListPrefix {
    /// Leading whitespace characters before the marker.
    pub depth: usize,
    /// The marker byte (`-` or `*`).
    pub marker: u8,
    /// Byte index into the line where the content starts.
    pub content_offset: usize,
}

impl ListItem {
    pub const DASH: u8 = b'-';
    pub const STAR: u8 = b'*';
    /// Glyph shown in place of the indentation and marker.
    pub const BULLET: &'static str = "•";

    /// Recognizes a list line, returning `None` for anything else.
    pub fn strip_marker(line: &str) -> Option<ListPrefix> {
        let mut cur = Cursor::new(line, 0);
        let depth = cur.eat_while(|b| b.is_ascii_whitespace());

        let marker = cur.peek().filter(|&b| b == Self::DASH || b == Self::STAR)?;
        cur.bump();

        if cur.eat_while(|b| b == b' ') == 0 {
            return None;
        }

        Some(ListPrefix {
            depth,
            marker,
            content_offset: cur.pos(),
        })
    }
}
