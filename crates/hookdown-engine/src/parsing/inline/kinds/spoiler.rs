/// Spoiler `||hidden||`, revealed on click by Discord clients.
pub struct Spoiler;

impl Spoiler {
    pub const BARS: &'static str = "||";
}
