use serde::Serialize;

/// A styled inline node produced by a pattern's render function.
///
/// Nodes own their rendered text: mention names are already resolved and
/// delimiters are already stripped. The source bytes stay reachable through
/// the span of the enclosing [`Segment`](crate::parsing::Segment).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Inline {
    /// `<@id>` with the display name looked up (or the fallback).
    UserMention { id: String, name: String },
    /// `<#id>`.
    ChannelMention { id: String, name: String },
    /// `<@&id>`.
    RoleMention { id: String, name: String },
    /// `@everyone`.
    Everyone,
    /// `@here`.
    Here,
    /// `[label](url)`. The url is opaque here; see [`crate::render::html`].
    Link { label: String, url: String },
    BoldItalic { text: String },
    Bold { text: String },
    Italic { text: String },
    Underline { text: String },
    Strikethrough { text: String },
    /// Inline code. This is a "raw zone": nothing inside is styled.
    Code { text: String },
    /// `||text||`, hidden until clicked.
    Spoiler { text: String },
}

impl Inline {
    /// The text a reader sees for this node, without styling.
    pub fn display_text(&self) -> String {
        match self {
            Inline::UserMention { name, .. } | Inline::RoleMention { name, .. } => {
                format!("@{name}")
            }
            Inline::ChannelMention { name, .. } => format!("#{name}"),
            Inline::Everyone => "@everyone".to_string(),
            Inline::Here => "@here".to_string(),
            Inline::Link { label, .. } => label.clone(),
            Inline::BoldItalic { text }
            | Inline::Bold { text }
            | Inline::Italic { text }
            | Inline::Underline { text }
            | Inline::Strikethrough { text }
            | Inline::Code { text }
            | Inline::Spoiler { text } => text.clone(),
        }
    }

    /// True for the five mention forms.
    pub fn is_mention(&self) -> bool {
        matches!(
            self,
            Inline::UserMention { .. }
                | Inline::ChannelMention { .. }
                | Inline::RoleMention { .. }
                | Inline::Everyone
                | Inline::Here
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mentions_render_with_sigils() {
        let user = Inline::UserMention {
            id: "1".into(),
            name: "Alice".into(),
        };
        let channel = Inline::ChannelMention {
            id: "2".into(),
            name: "general".into(),
        };
        assert_eq!(user.display_text(), "@Alice");
        assert_eq!(channel.display_text(), "#general");
        assert_eq!(Inline::Here.display_text(), "@here");
        assert!(Inline::Everyone.is_mention());
    }

    #[test]
    fn link_displays_its_label() {
        let link = Inline::Link {
            label: "docs".into(),
            url: "https://example.com".into(),
        };
        assert_eq!(link.display_text(), "docs");
        assert!(!link.is_mention());
    }
}
