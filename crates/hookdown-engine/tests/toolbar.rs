//! Toolbar edits followed by a re-parse, the way a composer uses the engine.

use std::collections::HashMap;

use hookdown_engine::{Inline, Preset, Segment, insert_markdown, parse};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn styled_nodes(src: &str) -> Vec<Inline> {
    parse(src, &HashMap::new())
        .into_iter()
        .filter_map(|s| match s {
            Segment::Styled { node, .. } => Some(node),
            _ => None,
        })
        .collect()
}

#[rstest]
#[case(Preset::Bold, Inline::Bold { text: "world".into() })]
#[case(Preset::Italic, Inline::Italic { text: "world".into() })]
#[case(Preset::Code, Inline::Code { text: "world".into() })]
#[case(Preset::Strikethrough, Inline::Strikethrough { text: "world".into() })]
#[case(Preset::Underline, Inline::Underline { text: "world".into() })]
#[case(Preset::Spoiler, Inline::Spoiler { text: "world".into() })]
fn preset_output_parses_back_to_its_style(#[case] preset: Preset, #[case] expected: Inline) {
    let edit = preset.apply("hello world", 6, 11);
    assert_eq!(styled_nodes(&edit.content), vec![expected]);
}

#[test]
fn typing_at_the_cursor_stays_inside_the_tokens() {
    let edit = Preset::Bold.apply("hi ", 3, 3);
    let cursor = edit.cursor;
    let mut content = edit.content;
    content.insert_str(cursor, "!");
    assert_eq!(content, "hi **bold text!**");
    assert_eq!(
        styled_nodes(&content),
        vec![Inline::Bold {
            text: "bold text!".into()
        }]
    );
}

#[test]
fn code_block_puts_fences_on_their_own_lines() {
    let edit = Preset::CodeBlock.apply("let x = 1;", 0, 10);
    assert_eq!(edit.content, "```\nlet x = 1;\n```");
    assert_eq!(edit.content.lines().count(), 3);
    assert_eq!(edit.cursor, 14);
}

#[test]
fn raw_insert_wraps_and_places_cursor() {
    let a = insert_markdown("hello world", 0, 5, "**", "**", "");
    assert_eq!((a.content.as_str(), a.cursor), ("**hello** world", 9));

    let b = insert_markdown("hello", 5, 5, "*", "*", "");
    assert_eq!((b.content.as_str(), b.cursor), ("hello**", 6));
}
