//! # Snapshot Testing Support
//!
//! Utilities for testing the parser via snapshot assertions and invariant checks.
//!
//! ## Modules
//!
//! - **`normalize`**: Converts parsed segments to a stable, line-oriented text
//!   dump for `insta` snapshot testing
//! - **`invariants`**: Runtime checks for parser correctness (spans in bounds,
//!   top-level spans tile the message, list content contained in its line)
//!
//! ## Testing Strategy
//!
//! Parsing behavior is defined by fixture snapshots rather than a formal
//! grammar. Snapshots assert segment kinds, spans, and rendered node text.

pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use normalize::normalize;
