//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! ## Types
//!
//! - **`Mention`**: `<@id>`, `<#id>`, `<@&id>`, `@everyone`, `@here`
//! - **`Link`**: `[label](url)`
//! - **`Emphasis`**: `***`, `**`, `*`, `__`, `~~`
//! - **`CodeSpan`**: `` ` `` and the ```` ``` ```` fence used by code blocks
//! - **`Spoiler`**: `||`
//!
//! ## Design Principle
//!
//! All delimiter constants live here, not scattered in parser code. The
//! pattern table and the toolbar presets both read these constants; neither
//! hardcodes `**` or `||`.

pub mod code_span;
pub mod emphasis;
pub mod link;
pub mod mention;
pub mod spoiler;

pub use code_span::CodeSpan;
pub use emphasis::Emphasis;
pub use link::Link;
pub use mention::Mention;
pub use spoiler::Spoiler;
