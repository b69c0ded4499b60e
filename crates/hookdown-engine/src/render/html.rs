use std::fmt::Write;

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::parsing::{inline::Inline, segment::Segment};

use super::RenderOptions;

/// URL schemes that may become a navigable `href`.
pub const SAFE_SCHEMES: [&str; 3] = ["http", "https", "mailto"];

/// Renders segments as an HTML fragment.
///
/// All text is escaped. Links whose URL fails [`is_safe_url`] render as their
/// escaped label only.
pub fn to_html(segments: &[Segment], opts: &RenderOptions) -> String {
    let mut out = String::new();
    for seg in segments {
        write_segment(&mut out, seg, opts);
    }
    out
}

/// True if `url` has an allowed scheme. Relative and scheme-less URLs are
/// rejected.
pub fn is_safe_url(url: &str) -> bool {
    let Some((scheme, rest)) = url.trim().split_once(':') else {
        return false;
    };
    !rest.is_empty()
        && SAFE_SCHEMES
            .iter()
            .any(|s| s.eq_ignore_ascii_case(scheme))
}

fn write_segment(out: &mut String, seg: &Segment, opts: &RenderOptions) {
    match seg {
        Segment::Text { text, .. } => out.push_str(&encode_text(text)),
        Segment::LineBreak { .. } => out.push_str("<br>"),
        Segment::ListItem { depth, content, .. } => {
            let _ = write!(
                out,
                "<div class=\"list-item\" style=\"padding-left: {}px\">{} ",
                depth * opts.indent_px,
                encode_text(&opts.bullet)
            );
            for child in content {
                write_segment(out, child, opts);
            }
            out.push_str("</div>");
        }
        Segment::Styled { node, .. } => write_inline(out, node),
    }
}

fn write_inline(out: &mut String, node: &Inline) {
    let wrap = |out: &mut String, open: &str, close: &str, text: &str| {
        out.push_str(open);
        out.push_str(&encode_text(text));
        out.push_str(close);
    };

    match node {
        Inline::UserMention { .. }
        | Inline::ChannelMention { .. }
        | Inline::RoleMention { .. }
        | Inline::Everyone
        | Inline::Here => wrap(
            out,
            "<span class=\"mention\">",
            "</span>",
            &node.display_text(),
        ),
        Inline::Link { label, url } => {
            if is_safe_url(url) {
                let _ = write!(
                    out,
                    "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a>",
                    encode_double_quoted_attribute(url.trim()),
                    encode_text(label)
                );
            } else {
                log::debug!("rendering link with unsafe url as text: {url:?}");
                out.push_str(&encode_text(label));
            }
        }
        Inline::BoldItalic { text } => wrap(out, "<strong><em>", "</em></strong>", text),
        Inline::Bold { text } => wrap(out, "<strong>", "</strong>", text),
        Inline::Italic { text } => wrap(out, "<em>", "</em>", text),
        Inline::Underline { text } => wrap(out, "<u>", "</u>", text),
        Inline::Strikethrough { text } => wrap(out, "<s>", "</s>", text),
        Inline::Code { text } => wrap(out, "<code>", "</code>", text),
        Inline::Spoiler { text } => wrap(out, "<span class=\"spoiler\">", "</span>", text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::{Mentions, parse_with};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn html(src: &str) -> String {
        to_html(&parse_with(src, &Mentions::default()), &RenderOptions::default())
    }

    #[rstest]
    #[case("**b**", "<strong>b</strong>")]
    #[case("*i*", "<em>i</em>")]
    #[case("***bi***", "<strong><em>bi</em></strong>")]
    #[case("__u__", "<u>u</u>")]
    #[case("~~s~~", "<s>s</s>")]
    #[case("`c`", "<code>c</code>")]
    #[case("||p||", "<span class=\"spoiler\">p</span>")]
    #[case("x __u__ and ~~s~~", "x <u>u</u> and <s>s</s>")]
    fn styles_map_to_tags(#[case] src: &str, #[case] expected: &str) {
        assert_eq!(html(src), expected);
    }

    #[test]
    fn text_is_escaped() {
        assert_eq!(html("<b>&</b>"), "&lt;b&gt;&amp;&lt;/b&gt;");
        assert_eq!(html("`<script>`"), "<code>&lt;script&gt;</code>");
    }

    #[test]
    fn mentions_render_names() {
        assert_eq!(html("hi <@1>"), "hi <span class=\"mention\">@user</span>");
    }

    #[test]
    fn safe_links_become_anchors() {
        assert_eq!(
            html("[site](https://example.com/?a=1&b=\"2\")"),
            "<a href=\"https://example.com/?a=1&amp;b=&quot;2&quot;\" target=\"_blank\" \
             rel=\"noopener noreferrer\">site</a>"
        );
    }

    #[test]
    fn unsafe_links_render_label_only() {
        assert_eq!(html("[click](javascript:alert`1`)"), "click");
    }

    #[test]
    fn list_items_and_breaks() {
        assert_eq!(
            html("a\n  - b"),
            "a<br><div class=\"list-item\" style=\"padding-left: 16px\">• b</div>"
        );
    }

    #[rstest]
    #[case("https://discord.com", true)]
    #[case("HTTP://x.y", true)]
    #[case("mailto:a@b.c", true)]
    #[case("javascript:alert(1)", false)]
    #[case("data:text/html,hi", false)]
    #[case("/relative/path", false)]
    #[case("https:", false)]
    #[case("", false)]
    fn url_safety(#[case] url: &str, #[case] safe: bool) {
        assert_eq!(is_safe_url(url), safe);
    }
}
