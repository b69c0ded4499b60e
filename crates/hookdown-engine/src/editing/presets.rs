use std::{fmt, str::FromStr};

use thiserror::Error;

use crate::parsing::inline::kinds::{CodeSpan, Emphasis, Spoiler};

use super::{insert::insert_markdown, patch::Insertion};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PresetError {
    #[error("Unknown markdown preset: {0}")]
    Unknown(String),
}

/// Toolbar styles that wrap the current selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preset {
    Bold,
    Italic,
    Code,
    CodeBlock,
    Strikethrough,
    Underline,
    Spoiler,
}

/// The tokens a preset inserts around the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Wrap {
    pub before: &'static str,
    pub after: &'static str,
    pub placeholder: &'static str,
}

impl Preset {
    pub const ALL: [Preset; 7] = [
        Preset::Bold,
        Preset::Italic,
        Preset::Code,
        Preset::CodeBlock,
        Preset::Strikethrough,
        Preset::Underline,
        Preset::Spoiler,
    ];

    pub fn wrap(self) -> Wrap {
        match self {
            Preset::Bold => symmetric(Emphasis::BOLD, "bold text"),
            Preset::Italic => symmetric(Emphasis::ITALIC, "italic text"),
            Preset::Code => symmetric(CodeSpan::TICK, "code"),
            Preset::CodeBlock => Wrap {
                before: CodeSpan::BLOCK_OPEN,
                after: CodeSpan::BLOCK_CLOSE,
                placeholder: "code block",
            },
            Preset::Strikethrough => symmetric(Emphasis::STRIKETHROUGH, "strikethrough text"),
            Preset::Underline => symmetric(Emphasis::UNDERLINE, "underlined text"),
            Preset::Spoiler => symmetric(Spoiler::BARS, "spoiler"),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Preset::Bold => "bold",
            Preset::Italic => "italic",
            Preset::Code => "code",
            Preset::CodeBlock => "code-block",
            Preset::Strikethrough => "strikethrough",
            Preset::Underline => "underline",
            Preset::Spoiler => "spoiler",
        }
    }

    /// Applies this preset to a selection of `content`.
    pub fn apply(self, content: &str, selection_start: usize, selection_end: usize) -> Insertion {
        let w = self.wrap();
        insert_markdown(
            content,
            selection_start,
            selection_end,
            w.before,
            w.after,
            w.placeholder,
        )
    }
}

fn symmetric(delim: &'static str, placeholder: &'static str) -> Wrap {
    Wrap {
        before: delim,
        after: delim,
        placeholder,
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = PresetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace('_', "-");
        Preset::ALL
            .into_iter()
            .find(|p| p.name() == key || (key == "codeblock" && *p == Preset::CodeBlock))
            .ok_or_else(|| PresetError::Unknown(s.to_string()))
    }
}
