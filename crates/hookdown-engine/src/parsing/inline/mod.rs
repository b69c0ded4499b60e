//! # Inline Parsing
//!
//! Pattern-table inline parsing for the Discord markdown dialect.
//!
//! ## Architecture
//!
//! Inline parsing runs per line, over a whole line or over the content of a
//! list item. It never crosses a `\n`.
//!
//! 1. Every [`PatternKind`] scans the line independently and exhaustively
//!    ([`scan::scan_all`]), producing candidate [`MatchSpan`]s.
//! 2. Candidates are pooled and resolved by earliest start
//!    ([`scan::select_spans`]); overlapping latecomers are dropped whole.
//! 3. [`parse_inline`] fills the gaps with text segments.
//!
//! ## Modules
//!
//! - **`types`**: `Inline` enum (mentions, link, emphasis, code, spoiler)
//! - **`kinds`**: delimiter constants owned per construct
//! - **`pattern`**: `PatternKind` table with recognizers and render functions
//! - **`scan`**: candidate scanning and overlap resolution
//! - **`parser`**: `parse_inline()` main entry point
//!
//! ## No Nesting
//!
//! Spans never overlap, so `**bold *italic* text**` yields one bold node with
//! the asterisks of the inner italic left in its text.

pub mod kinds;
pub mod parser;
pub mod pattern;
pub mod scan;
pub mod types;

pub use parser::parse_inline;
pub use pattern::PatternKind;
pub use scan::MatchSpan;
pub use types::Inline;
