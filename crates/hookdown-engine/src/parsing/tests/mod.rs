//! Tests for whole-message parsing: line handling, list items, mentions and
//! the round-trip and overlap properties.

use std::collections::HashMap;

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;

use crate::parsing::{
    Mentions,
    inline::{
        Inline,
        scan::{scan_all, select_spans},
    },
    parse, parse_with,
    segment::{Segment, source_text},
    snapshot,
    source::{Span, lines_with_spans},
};

fn no_users() -> HashMap<String, String> {
    HashMap::new()
}

fn styled(segment: &Segment) -> &Inline {
    match segment {
        Segment::Styled { node, .. } => node,
        other => panic!("expected Styled, got {other:?}"),
    }
}

#[test]
fn empty_message_has_no_segments() {
    assert!(parse("", &no_users()).is_empty());
}

#[test]
fn plain_text_is_one_raw_segment() {
    let segments = parse("just some words", &no_users());
    assert_eq!(
        segments,
        vec![Segment::Text {
            span: Span::new(0, 15),
            text: "just some words".into()
        }]
    );
}

#[test]
fn user_mention_falls_back_to_user() {
    let segments = parse("<@123>", &no_users());
    assert_eq!(segments.len(), 1);
    assert_eq!(styled(&segments[0]).display_text(), "@user");
}

#[test]
fn user_mention_uses_lookup() {
    let users = HashMap::from([("123".to_string(), "Alice".to_string())]);
    let segments = parse("<@123>", &users);
    assert_eq!(
        styled(&segments[0]),
        &Inline::UserMention {
            id: "123".into(),
            name: "Alice".into()
        }
    );
    assert_eq!(styled(&segments[0]).display_text(), "@Alice");
}

#[test]
fn channel_and_role_mentions_use_directory() {
    let mentions = Mentions {
        channels: HashMap::from([("9".to_string(), "general".to_string())]),
        ..Mentions::default()
    };
    let segments = parse_with("<#9> <@&4> @everyone @here", &mentions);
    let shown: Vec<String> = segments
        .iter()
        .filter_map(|s| match s {
            Segment::Styled { node, .. } => Some(node.display_text()),
            _ => None,
        })
        .collect();
    assert_eq!(shown, vec!["#general", "@role", "@everyone", "@here"]);
}

#[test]
fn list_lines_become_list_items() {
    let segments = parse("- item one\n- item two", &no_users());
    assert_eq!(segments.len(), 3);
    assert!(matches!(segments[1], Segment::LineBreak { .. }));

    for (seg, expected) in [(&segments[0], "item one"), (&segments[2], "item two")] {
        match seg {
            Segment::ListItem { depth, content, .. } => {
                assert_eq!(*depth, 0);
                assert_eq!(
                    content,
                    &vec![Segment::Text {
                        span: content[0].span(),
                        text: expected.into()
                    }]
                );
            }
            other => panic!("expected ListItem, got {other:?}"),
        }
    }
}

#[test]
fn list_content_is_inline_parsed() {
    let segments = parse("    * **hot** take", &no_users());
    match &segments[0] {
        Segment::ListItem {
            span,
            depth,
            content,
        } => {
            assert_eq!(*span, Span::new(0, 18));
            assert_eq!(*depth, 4);
            assert_eq!(content.len(), 2);
            assert_eq!(content[0].span(), Span::new(6, 13));
            assert_eq!(styled(&content[0]), &Inline::Bold { text: "hot".into() });
        }
        other => panic!("expected ListItem, got {other:?}"),
    }
}

#[test]
fn star_without_space_is_not_a_list() {
    let segments = parse("*emphasis* here", &no_users());
    assert_eq!(
        styled(&segments[0]),
        &Inline::Italic {
            text: "emphasis".into()
        }
    );
}

#[test]
fn nested_emphasis_keeps_outer_span() {
    let segments = parse("**a*b*c**", &no_users());
    assert_eq!(
        segments,
        vec![Segment::Styled {
            span: Span::new(0, 9),
            node: Inline::Bold {
                text: "a*b*c".into()
            }
        }]
    );
}

#[test]
fn earlier_italic_candidate_shadows_a_later_one() {
    // The italic scan claims "* *" across the bold closer, so the real
    // "*i*" is never a candidate; bold wins and the rest stays text.
    let segments = parse("**b** *i*", &no_users());
    assert_eq!(
        segments,
        vec![
            Segment::Styled {
                span: Span::new(0, 5),
                node: Inline::Bold { text: "b".into() }
            },
            Segment::Text {
                span: Span::new(5, 9),
                text: " *i*".into()
            },
        ]
    );
}

#[test]
fn line_breaks_separate_lines_but_do_not_trail() {
    let segments = parse("a\nb", &no_users());
    assert_eq!(segments.len(), 3);
    assert_eq!(segments[1], Segment::LineBreak {
        span: Span::new(1, 2)
    });

    let trailing = parse("a\n", &no_users());
    assert_eq!(trailing.len(), 2);
    assert!(matches!(trailing[1], Segment::LineBreak { .. }));
}

#[test]
fn patterns_do_not_cross_lines() {
    let segments = parse("**open\nclose**", &no_users());
    assert!(segments.iter().all(|s| !matches!(s, Segment::Styled { .. })));
}

#[test]
fn link_captures_label_and_url() {
    let segments = parse("see [docs](https://example.com/a?b=c) now", &no_users());
    assert_eq!(
        styled(&segments[1]),
        &Inline::Link {
            label: "docs".into(),
            url: "https://example.com/a?b=c".into()
        }
    );
}

#[rstest]
#[case("hello world")]
#[case("**bold** and *it* and __u__ ~~s~~ `c` ||sp||")]
#[case("- a\n  * b\nc <@1> <#2> <@&3>")]
#[case("\n\n")]
#[case("crlf\r\n- item\r\n")]
#[case("***")]
#[case("[unterminated](link")]
#[case("émoji 🎉 *ünïcode*")]
fn fixtures_round_trip_and_hold_invariants(#[case] src: &str) {
    let segments = parse(src, &no_users());
    snapshot::invariants(src, &segments);
    assert_eq!(source_text(src, &segments), src);
}

#[test]
fn per_line_round_trip() {
    let src = "- **x**\nplain <@7>";
    let segments = parse(src, &no_users());
    let lines: Vec<_> = lines_with_spans(src).collect();
    let first: String = segments
        .iter()
        .filter(|s| s.span().end <= lines[0].span.end)
        .map(|s| s.source_text(src))
        .collect();
    assert_eq!(first, lines[0].text);
}

proptest! {
    #[test]
    fn parse_never_panics_and_round_trips(src in r"[a-z *_~`|<>@#&0-9\[\]()\n-]{0,60}") {
        let segments = parse(&src, &no_users());
        prop_assert_eq!(source_text(&src, &segments), src.clone());
        snapshot::invariants(&src, &segments);
    }

    #[test]
    fn selected_spans_never_overlap(src in r"[a-z *_~`|<>@&0-9\[\]()]{0,60}") {
        let selected = select_spans(scan_all(0, &src, &Mentions::default()));
        for pair in selected.windows(2) {
            prop_assert!(pair[0].span.end <= pair[1].span.start);
        }
    }

    #[test]
    fn text_without_delimiters_is_untouched(src in "[a-z ,.!?]{1,60}") {
        let segments = parse(&src, &no_users());
        prop_assert_eq!(segments.len(), 1);
        let is_whole_text = matches!(&segments[0], Segment::Text { text, .. } if *text == src);
        prop_assert!(is_whole_text);
    }
}
