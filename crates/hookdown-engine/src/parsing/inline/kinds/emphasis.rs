/// Symmetric emphasis delimiters.
pub struct Emphasis;

impl Emphasis {
    pub const BOLD_ITALIC: &'static str = "***";
    pub const BOLD: &'static str = "**";
    pub const ITALIC: &'static str = "*";
    pub const UNDERLINE: &'static str = "__";
    pub const STRIKETHROUGH: &'static str = "~~";
}
