//! # Line Segmentation
//!
//! Each line of a message is classified on its own before inline matching.
//!
//! ## Modules
//!
//! - **`cursor`**: `Cursor` for byte-by-byte scanning with position tracking
//! - **`kinds`**: line-level types with owned delimiters (`ListItem`)
//! - **`classify`**: `LineClassifier` produces a `LineClass` for each line
//!
//! ## Key Invariants
//!
//! - A list line's indentation and marker never reach the inline matcher
//! - All classes store byte spans into the message

pub mod classify;
pub mod cursor;
pub mod kinds;

pub use classify::{LineClass, LineClassifier};
pub use kinds::{ListItem, ListPrefix};
