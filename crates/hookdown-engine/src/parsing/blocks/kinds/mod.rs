pub mod list_item;

pub use list_item::{ListItem, ListPrefix};
