//! Startup confirmation for the gateway session.
//!
//! Serenity dispatches `ready` once the token is accepted and the session is
//! established. The bot keeps no state, so all this does is tell the operator
//! which bot user logged in and that role buttons and crossposting are live.

use dioxus_logger::tracing;
use serenity::all::{Context, Ready};

/// Handles the ready event when the bot connects to Discord.
///
/// # Arguments
/// - `ctx` - Discord context (unused)
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(_ctx: Context, ready: Ready) {
    tracing::info!("{} is connected to Discord", ready.user.name);
    tracing::info!("geokyle bot is now running");
}
