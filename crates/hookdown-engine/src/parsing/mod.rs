pub mod blocks;
pub mod inline;
pub mod mentions;
pub mod segment;
pub mod snapshot;
pub mod source;

#[cfg(test)]
mod tests;

use std::collections::HashMap;

use blocks::{LineClass, LineClassifier};
use inline::parse_inline;
use source::{Span, lines_with_spans, slice};

pub use mentions::Mentions;
pub use segment::{Segment, source_text};

/// Parses a message with a user-id → display-name lookup.
///
/// Users missing from `users` render as `@user`. Channel and role mentions
/// use their default fallbacks; see [`parse_with`] for full control.
pub fn parse(text: &str, users: &HashMap<String, String>) -> Vec<Segment> {
    parse_with(text, &Mentions::with_users(users.clone()))
}

/// Parses a message into segments.
///
/// Lines are processed independently; a [`Segment::LineBreak`] separates
/// consecutive lines (none after the last). List lines become a single
/// [`Segment::ListItem`] wrapping the inline segments of their content.
/// Empty input yields no segments. Never fails: unbalanced delimiters stay
/// literal text.
pub fn parse_with(text: &str, mentions: &Mentions) -> Vec<Segment> {
    let classifier = LineClassifier;
    let mut out = Vec::new();

    for (i, lr) in lines_with_spans(text).enumerate() {
        if i > 0 {
            out.push(Segment::LineBreak {
                span: Span::new(lr.span.start - 1, lr.span.start),
            });
        }

        match classifier.classify(&lr) {
            LineClass::Plain { line } => {
                out.extend(parse_inline(line.start, lr.text, mentions));
            }
            LineClass::ListItem {
                line,
                depth,
                content,
            } => out.push(Segment::ListItem {
                span: line,
                depth,
                content: parse_inline(content.start, slice(text, content), mentions),
            }),
        }
    }

    log::debug!(
        "parsed {} bytes into {} top-level segments",
        text.len(),
        out.len()
    );
    out
}
