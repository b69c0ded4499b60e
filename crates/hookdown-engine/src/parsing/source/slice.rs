use super::span::Span;

/// Extracts the text for a span from the message.
///
/// Out-of-range or non-boundary spans yield an empty string rather than
/// panicking; spans produced by the parser are always valid.
pub fn slice(src: &str, sp: Span) -> &str {
    src.get(sp.start..sp.end).unwrap_or_default()
}

/// Extracts text for a span, truncating to `max` bytes with "..." suffix if needed.
///
/// Used for human-readable snapshot output.
pub fn preview(src: &str, sp: Span, max: usize) -> String {
    let mut s = slice(src, sp).to_string();
    if s.len() > max {
        let mut cut = max;
        while !s.is_char_boundary(cut) {
            cut -= 1;
        }
        s.truncate(cut);
        s.push_str("...");
    }
    s
}
