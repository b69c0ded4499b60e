pub mod editing;
pub mod io;
pub mod limits;
pub mod parsing;
pub mod render;

// Re-export key types for easier usage
pub use editing::{Insertion, Preset, PresetError, insert_markdown};
pub use limits::{MESSAGE_CHAR_LIMIT, char_count, exceeds_limit};
pub use parsing::{Mentions, Segment, inline::Inline, parse, parse_with, source::Span};
pub use render::{RenderOptions, to_html, to_plain_text};
