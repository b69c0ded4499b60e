/// Mention tokens. Ids are runs of ASCII digits between the opener and `>`.
pub struct Mention;

impl Mention {
    pub const USER_OPEN: &'static str = "<@";
    pub const CHANNEL_OPEN: &'static str = "<#";
    pub const ROLE_OPEN: &'static str = "<@&";
    pub const CLOSE: &'static str = ">";
    pub const EVERYONE: &'static str = "@everyone";
    pub const HERE: &'static str = "@here";
}
