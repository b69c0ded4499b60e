use hookdown_engine::{Mentions, RenderOptions};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Where the composer keeps the message being drafted.
    pub draft_path: PathBuf,

    /// Glyph drawn in place of list markers. Engine default when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bullet: Option<String>,

    #[serde(default = "default_user")]
    pub fallback_user: String,
    #[serde(default = "default_channel")]
    pub fallback_channel: String,
    #[serde(default = "default_role")]
    pub fallback_role: String,

    /// Snowflake id to display name.
    #[serde(default)]
    pub users: HashMap<String, String>,
    #[serde(default)]
    pub channels: HashMap<String, String>,
    #[serde(default)]
    pub roles: HashMap<String, String>,
}

fn default_user() -> String {
    Mentions::DEFAULT_USER.to_string()
}

fn default_channel() -> String {
    Mentions::DEFAULT_CHANNEL.to_string()
}

fn default_role() -> String {
    Mentions::DEFAULT_ROLE.to_string()
}

impl Config {
    /// A config with only a draft location and default names.
    pub fn new(draft_path: impl Into<PathBuf>) -> Self {
        Self {
            draft_path: draft_path.into(),
            bullet: None,
            fallback_user: default_user(),
            fallback_channel: default_channel(),
            fallback_role: default_role(),
            users: HashMap::new(),
            channels: HashMap::new(),
            roles: HashMap::new(),
        }
    }

    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Expand shell variables and tilde in the draft location
        config.draft_path = Self::expand_path(&config.draft_path).unwrap_or(config.draft_path);

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/hookdown");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// The mention directory handed to the parser.
    pub fn mentions(&self) -> Mentions {
        Mentions {
            users: self.users.clone(),
            channels: self.channels.clone(),
            roles: self.roles.clone(),
            fallback_user: self.fallback_user.clone(),
            fallback_channel: self.fallback_channel.clone(),
            fallback_role: self.fallback_role.clone(),
        }
    }

    pub fn render_options(&self) -> RenderOptions {
        let mut options = RenderOptions::default();
        if let Some(bullet) = &self.bullet {
            options.bullet = bullet.clone();
        }
        options
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}
