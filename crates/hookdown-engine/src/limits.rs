//! Discord message length limits.

/// Maximum characters in one Discord message body.
pub const MESSAGE_CHAR_LIMIT: usize = 2000;

/// Counts Unicode scalar values, which is how the limit is measured.
pub fn char_count(text: &str) -> usize {
    text.chars().count()
}

pub fn exceeds_limit(text: &str) -> bool {
    char_count(text) > MESSAGE_CHAR_LIMIT
}

/// Characters left before the limit; negative once over it.
pub fn remaining(text: &str) -> isize {
    MESSAGE_CHAR_LIMIT as isize - char_count(text) as isize
}
