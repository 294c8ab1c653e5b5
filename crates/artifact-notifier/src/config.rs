use std::env::VarError;
use std::fmt;

use crate::error::ConfigError;

pub const DEFAULT_API_BASE: &str = "https://api.telegram.org";

pub const TOKEN_VAR: &str = "TELEGRAM_BOT_TOKEN";
pub const CHAT_ID_VAR: &str = "TELEGRAM_CHAT_ID";
pub const VERSION_VAR: &str = "VERSION_NAME";
pub const REPOSITORY_VAR: &str = "GITHUB_REPOSITORY";
pub const SHA_VAR: &str = "GITHUB_SHA";
pub const COMMIT_MESSAGE_VAR: &str = "GITHUB_COMMIT_MESSAGE";
pub const API_BASE_VAR: &str = "TELEGRAM_API_BASE";

/// Everything one upload needs, collected once at startup.
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    pub token: String,
    pub chat_id: String,
    pub version: String,
    pub repository: String,
    pub sha: String,
    pub commit_message: String,
    /// Bot API root, overridable for self-hosted Bot API servers.
    pub api_base: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var))
    }

    /// Build from any variable source shaped like `std::env::var`. Required values
    /// must be present, valid UTF-8 and non-empty; the first bad one (in declaration
    /// order) is reported.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Result<String, VarError>,
    {
        let optional = |var: &'static str| -> Result<Option<String>, ConfigError> {
            match lookup(var) {
                Ok(v) if v.is_empty() => Ok(None),
                Ok(v) => Ok(Some(v)),
                Err(VarError::NotPresent) => Ok(None),
                Err(VarError::NotUnicode(_)) => Err(ConfigError::NotUnicode { var }),
            }
        };
        let required = |var: &'static str| -> Result<String, ConfigError> {
            optional(var)?.ok_or(ConfigError::Missing { var })
        };

        Ok(Config {
            token: required(TOKEN_VAR)?,
            chat_id: required(CHAT_ID_VAR)?,
            version: required(VERSION_VAR)?,
            repository: required(REPOSITORY_VAR)?,
            sha: required(SHA_VAR)?,
            commit_message: required(COMMIT_MESSAGE_VAR)?,
            api_base: optional(API_BASE_VAR)?.unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
        })
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("token", &"<redacted>")
            .field("chat_id", &self.chat_id)
            .field("version", &self.version)
            .field("repository", &self.repository)
            .field("sha", &self.sha)
            .field("commit_message", &self.commit_message)
            .field("api_base", &self.api_base)
            .finish()
    }
}
