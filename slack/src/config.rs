//! Per-team settings for talking to Slack.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_API_BASE: &str = "https://slack.com/api/";
pub const DEFAULT_USER_AGENT: &str = "APIPuncher-v1.0.0;";
pub const DEFAULT_REDIRECT_LIMIT: usize = 3;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unable to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("no Slack API token configured (set SLACK_API_TOKEN)")]
    MissingToken,
}

/// Everything a [`Client`](crate::http::Client) needs to know about one
/// Slack team.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct SlackConfig {
    /// Authentication token sent as the `token` parameter.
    pub token: String,
    #[serde(default = "default_api_base")]
    pub api_base: String,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// How many redirects a GET request may follow. Other verbs follow none.
    #[serde(default = "default_redirect_limit")]
    pub redirect_limit: usize,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_api_base() -> String {
    DEFAULT_API_BASE.to_string()
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

fn default_redirect_limit() -> usize {
    DEFAULT_REDIRECT_LIMIT
}

impl SlackConfig {
    pub fn new<T: Into<String>>(token: T) -> Self {
        SlackConfig {
            token: token.into(),
            api_base: default_api_base(),
            user_agent: default_user_agent(),
            redirect_limit: DEFAULT_REDIRECT_LIMIT,
            timeout_secs: None,
        }
    }

    pub fn with_api_base<T: Into<String>>(mut self, api_base: T) -> Self {
        self.api_base = api_base.into();
        self
    }

    /// Reads `SLACK_API_TOKEN`, and `SLACK_API_BASE` if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        let token = std::env::var("SLACK_API_TOKEN")
            .ok()
            .filter(|t| !t.trim().is_empty())
            .ok_or(ConfigError::MissingToken)?;
        let mut config = SlackConfig::new(token.trim());
        if let Ok(base) = std::env::var("SLACK_API_BASE") {
            config.api_base = base;
        }
        Ok(config)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: SlackConfig = toml::from_str(contents)?;
        if config.token.trim().is_empty() {
            return Err(ConfigError::MissingToken);
        }
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// `api_base` with exactly one trailing slash.
    pub fn base_url(&self) -> String {
        format!("{}/", self.api_base.trim_end_matches('/'))
    }
}

impl fmt::Debug for SlackConfig {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("SlackConfig")
            .field("token", &"<redacted>")
            .field("api_base", &self.api_base)
            .field("user_agent", &self.user_agent)
            .field("redirect_limit", &self.redirect_limit)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}
