/// Markdown link `[label](url)`.
pub struct Link;

impl Link {
    pub const LABEL_OPEN: &'static str = "[";
    pub const LABEL_CLOSE: &'static str = "]";
    pub const URL_OPEN: &'static str = "(";
    pub const URL_CLOSE: &'static str = ")";
}
