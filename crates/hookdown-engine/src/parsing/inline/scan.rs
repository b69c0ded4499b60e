use crate::parsing::{mentions::Mentions, source::Span};

use super::{pattern::PatternKind, types::Inline};

/// A region of the message claimed by one recognized pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchSpan {
    /// Absolute byte span including delimiters.
    pub span: Span,
    pub kind: PatternKind,
    /// The node produced by the kind's render function.
    pub node: Inline,
}

/// Runs one pattern over `s` and returns all of its matches.
///
/// Matches of a single pattern never overlap each other (leftmost-first,
/// resuming after each match). `base` is added to every span so offsets are
/// absolute in the message.
pub fn scan_pattern(kind: PatternKind, base: usize, s: &str, mentions: &Mentions) -> Vec<MatchSpan> {
    kind.recognizer()
        .captures_iter(s)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            Some(MatchSpan {
                span: Span::new(whole.start(), whole.end()).offset(base),
                kind,
                node: kind.render(&caps, mentions),
            })
        })
        .collect()
}

/// Runs every pattern over `s` and pools the candidates, unsorted and
/// possibly overlapping, in registration order.
pub fn scan_all(base: usize, s: &str, mentions: &Mentions) -> Vec<MatchSpan> {
    PatternKind::ALL
        .iter()
        .flat_map(|&kind| scan_pattern(kind, base, s, mentions))
        .collect()
}

/// Resolves overlaps between candidates: earliest start wins.
///
/// Candidates are stable-sorted by start offset, so a tie goes to the kind
/// registered first. A candidate is kept only if it starts at or after the
/// end of the last kept span; anything else is dropped whole, never trimmed.
pub fn select_spans(mut candidates: Vec<MatchSpan>) -> Vec<MatchSpan> {
    candidates.sort_by_key(|m| m.span.start);

    let mut accepted: Vec<MatchSpan> = Vec::with_capacity(candidates.len());
    let mut last_end = 0usize;
    for m in candidates {
        if m.span.start >= last_end {
            last_end = m.span.end;
            accepted.push(m);
        } else {
            log::trace!(
                "dropping {:?} at {:?}: overlaps span ending at {last_end}",
                m.kind,
                m.span
            );
        }
    }
    accepted
}
