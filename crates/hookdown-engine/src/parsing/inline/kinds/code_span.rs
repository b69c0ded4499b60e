/// Code span inline type with owned delimiter constants.
///
/// Inline code is a single-backtick span. Fenced code blocks are only produced
/// by the toolbar; the line-based parser never sees a whole fence.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick that delimits inline code.
    pub const TICK: &'static str = "`";
    /// Fence that opens and closes a code block.
    pub const FENCE: &'static str = "```";
    /// Code block opener: the fence, then a newline so content starts on its own line.
    pub const BLOCK_OPEN: &'static str = "```\n";
    /// Code block closer: a newline, then the fence.
    pub const BLOCK_CLOSE: &'static str = "\n```";
}
