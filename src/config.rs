use serenity::all::ChannelId;

use crate::error::{config::ConfigError, AppError};

/// Environment variable holding the Discord bot token
const TOKEN_ENV_VAR: &str = "GEOKYLE_TOKEN";

/// Announcement channel whose messages are crossposted to following servers
const VIDEOS_CHANNEL_ID: u64 = 926212070242942986;

/// Immutable bot configuration, built once at startup and handed to the bot
pub struct Config {
    pub discord_bot_token: String,

    pub videos_channel_id: ChannelId,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_token(std::env::var(TOKEN_ENV_VAR).ok())
    }

    /// Builds the configuration from an optional token value.
    ///
    /// A blank token is treated the same as a missing one.
    fn from_token(token: Option<String>) -> Result<Self, AppError> {
        let discord_bot_token = token
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar(TOKEN_ENV_VAR.to_string()))?;

        Ok(Self {
            discord_bot_token,
            videos_channel_id: ChannelId::new(VIDEOS_CHANNEL_ID),
        })
    }
}
