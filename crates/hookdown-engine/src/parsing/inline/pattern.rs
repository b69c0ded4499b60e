use std::sync::OnceLock;

use regex::{Captures, Regex, escape};
use serde::Serialize;

use crate::parsing::mentions::Mentions;

use super::{
    kinds::{CodeSpan, Emphasis, Link, Mention, Spoiler},
    types::Inline,
};

/// The fixed table of inline patterns.
///
/// Declaration order is registration order: when two patterns produce spans
/// starting at the same offset, the earlier kind wins (see
/// [`select_spans`](super::scan::select_spans)).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum PatternKind {
    UserMention,
    ChannelMention,
    RoleMention,
    Everyone,
    Here,
    Link,
    BoldItalic,
    Bold,
    Italic,
    Underline,
    Strikethrough,
    Code,
    Spoiler,
}

impl PatternKind {
    /// Every kind in registration order.
    pub const ALL: [PatternKind; 13] = [
        PatternKind::UserMention,
        PatternKind::ChannelMention,
        PatternKind::RoleMention,
        PatternKind::Everyone,
        PatternKind::Here,
        PatternKind::Link,
        PatternKind::BoldItalic,
        PatternKind::Bold,
        PatternKind::Italic,
        PatternKind::Underline,
        PatternKind::Strikethrough,
        PatternKind::Code,
        PatternKind::Spoiler,
    ];

    /// The compiled recognizer for this kind. Group 1 (and group 2 for links)
    /// capture the content between the delimiters.
    pub fn recognizer(self) -> &'static Regex {
        static RECOGNIZERS: OnceLock<Vec<Regex>> = OnceLock::new();
        let table = RECOGNIZERS.get_or_init(|| {
            Self::ALL
                .iter()
                .map(|kind| Regex::new(&kind.source()).expect("Invalid inline pattern"))
                .collect()
        });
        &table[self as usize]
    }

    /// Regex source built from the delimiter constants in [`super::kinds`].
    fn source(self) -> String {
        fn mention(open: &str) -> String {
            format!("{}([0-9]+){}", escape(open), escape(Mention::CLOSE))
        }
        fn symmetric(delim: &str) -> String {
            let d = escape(delim);
            format!("{d}(.+?){d}")
        }

        match self {
            PatternKind::UserMention => mention(Mention::USER_OPEN),
            PatternKind::ChannelMention => mention(Mention::CHANNEL_OPEN),
            PatternKind::RoleMention => mention(Mention::ROLE_OPEN),
            PatternKind::Everyone => escape(Mention::EVERYONE),
            PatternKind::Here => escape(Mention::HERE),
            PatternKind::Link => format!(
                "{}([^{}]+){}{}([^{}]+){}",
                escape(Link::LABEL_OPEN),
                escape(Link::LABEL_CLOSE),
                escape(Link::LABEL_CLOSE),
                escape(Link::URL_OPEN),
                escape(Link::URL_CLOSE),
                escape(Link::URL_CLOSE),
            ),
            PatternKind::BoldItalic => symmetric(Emphasis::BOLD_ITALIC),
            PatternKind::Bold => symmetric(Emphasis::BOLD),
            PatternKind::Italic => symmetric(Emphasis::ITALIC),
            PatternKind::Underline => symmetric(Emphasis::UNDERLINE),
            PatternKind::Strikethrough => symmetric(Emphasis::STRIKETHROUGH),
            PatternKind::Code => {
                let t = escape(CodeSpan::TICK);
                format!("{t}([^{t}]+){t}")
            }
            PatternKind::Spoiler => symmetric(Spoiler::BARS),
        }
    }

    /// Maps one match of this kind's recognizer to its styled node.
    pub fn render(self, caps: &Captures<'_>, mentions: &Mentions) -> Inline {
        let group = |i: usize| caps.get(i).map_or("", |m| m.as_str()).to_string();

        match self {
            PatternKind::UserMention => {
                let id = group(1);
                let name = mentions.user_name(&id).to_string();
                Inline::UserMention { id, name }
            }
            PatternKind::ChannelMention => {
                let id = group(1);
                let name = mentions.channel_name(&id).to_string();
                Inline::ChannelMention { id, name }
            }
            PatternKind::RoleMention => {
                let id = group(1);
                let name = mentions.role_name(&id).to_string();
                Inline::RoleMention { id, name }
            }
            PatternKind::Everyone => Inline::Everyone,
            PatternKind::Here => Inline::Here,
            PatternKind::Link => Inline::Link {
                label: group(1),
                url: group(2),
            },
            PatternKind::BoldItalic => Inline::BoldItalic { text: group(1) },
            PatternKind::Bold => Inline::Bold { text: group(1) },
            PatternKind::Italic => Inline::Italic { text: group(1) },
            PatternKind::Underline => Inline::Underline { text: group(1) },
            PatternKind::Strikethrough => Inline::Strikethrough { text: group(1) },
            PatternKind::Code => Inline::Code { text: group(1) },
            PatternKind::Spoiler => Inline::Spoiler { text: group(1) },
        }
    }
}
