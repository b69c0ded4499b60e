//! # Render Boundary
//!
//! Turns parsed segments into something a reader sees. The parser treats link
//! URLs as opaque strings; sanitizing them happens here.
//!
//! - **`html`**: escaped HTML fragment with sanitized links
//! - **`plain`**: the visual text with delimiters removed and mentions resolved

pub mod html;
pub mod plain;

pub use html::{is_safe_url, to_html};
pub use plain::to_plain_text;

use crate::parsing::blocks::ListItem;

/// Presentation knobs shared by the renderers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Glyph that replaces a list line's indentation and marker.
    pub bullet: String,
    /// Left padding in pixels per leading whitespace character of a list line.
    pub indent_px: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            bullet: ListItem::BULLET.to_string(),
            indent_px: 8,
        }
    }
}
