use std::collections::HashMap;

/// Display names used when rendering mention tokens.
///
/// Usually populated from a previously fetched guild member, channel and role
/// list. Ids missing from a map render with the matching fallback name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mentions {
    pub users: HashMap<String, String>,
    pub channels: HashMap<String, String>,
    pub roles: HashMap<String, String>,
    pub fallback_user: String,
    pub fallback_channel: String,
    pub fallback_role: String,
}

impl Mentions {
    pub const DEFAULT_USER: &'static str = "user";
    pub const DEFAULT_CHANNEL: &'static str = "channel";
    pub const DEFAULT_ROLE: &'static str = "role";

    /// A directory that only knows user names.
    pub fn with_users(users: HashMap<String, String>) -> Self {
        Self {
            users,
            ..Self::default()
        }
    }

    pub fn user_name(&self, id: &str) -> &str {
        self.users.get(id).unwrap_or(&self.fallback_user)
    }

    pub fn channel_name(&self, id: &str) -> &str {
        self.channels.get(id).unwrap_or(&self.fallback_channel)
    }

    pub fn role_name(&self, id: &str) -> &str {
        self.roles.get(id).unwrap_or(&self.fallback_role)
    }
}

impl Default for Mentions {
    fn default() -> Self {
        Self {
            users: HashMap::new(),
            channels: HashMap::new(),
            roles: HashMap::new(),
            fallback_user: Self::DEFAULT_USER.to_string(),
            fallback_channel: Self::DEFAULT_CHANNEL.to_string(),
            fallback_role: Self::DEFAULT_ROLE.to_string(),
        }
    }
}
