use super::span::Span;

/// A reference to a single line of the message with its byte span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRef<'a> {
    /// Byte span of this line in the message (excludes the `\n`).
    pub span: Span,
    /// The line text.
    pub text: &'a str,
}

/// Returns an iterator over `\n`-separated lines with their byte spans.
///
/// Unlike [`str::lines`], a trailing `\n` yields a final empty line and `\r`
/// is left in place, so the spans plus one byte per separator cover the
/// whole input. Empty input yields a single empty line.
pub fn lines_with_spans(s: &str) -> impl Iterator<Item = LineRef<'_>> + '_ {
    let mut offset = 0usize;
    s.split('\n').map(move |text| {
        let start = offset;
        offset += text.len() + 1;
        LineRef {
            span: Span::new(start, start + text.len()),
            text,
        }
    })
}
