//! Error types for the bot.
//!
//! `AppError` is the top-level error type. Startup code propagates it out of
//! `main`, while the event handlers catch it at the point of the remote call and
//! turn it into either an ephemeral reply or a log entry. No error crosses a
//! handler boundary.

pub mod config;
pub mod internal;

use thiserror::Error;

use crate::error::{config::ConfigError, internal::InternalError};

/// Top-level application error type.
///
/// Every variant is transparent so the user-facing failure reply shows the
/// underlying error text as-is.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    ///
    /// Always fatal: the process exits before connecting to the gateway.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Discord API or gateway error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Malformed input that could not be turned into a Discord ID.
    #[error(transparent)]
    InternalErr(#[from] InternalError),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
