/*!
 * # Toolbar Editing
 *
 * Selection-aware insertion of markdown tokens for an editing toolbar.
 *
 * A toolbar click hands over the textarea content and its selection; the
 * engine returns the new content and where the caret should go. Nothing is
 * kept between calls.
 *
 * ## Module Structure
 *
 * - **`insert`**: `insert_markdown` and the `SelectionInsert` request
 * - **`presets`**: the fixed `Preset` registry (bold, italic, code, ...)
 * - **`patch`**: `Insertion` result with the new caret and changed range
 *
 * ## Usage Pattern
 *
 * ```rust
 * use hookdown_engine::editing::Preset;
 *
 * let edit = Preset::Bold.apply("hello world", 0, 5);
 * assert_eq!(edit.content, "**hello** world");
 * assert_eq!(edit.cursor, 9);
 * ```
 */

pub mod insert;
pub mod patch;
pub mod presets;

pub use insert::{SelectionInsert, insert_markdown, normalize_selection};
pub use patch::Insertion;
pub use presets::{Preset, PresetError, Wrap};
