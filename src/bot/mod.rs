//! Discord gateway integration.
//!
//! This module connects the bot to Discord's gateway and routes the two events
//! it cares about to their services: button presses toggle roles, and new
//! messages in the videos channel are crossposted. Each event type has its own
//! narrow handler, registered with the client individually, and Serenity runs
//! every dispatch in its own task.
//!
//! # Gateway Intents
//!
//! The bot only requests `GUILD_MESSAGES`. Interactions are delivered to every
//! bot regardless of intents, so nothing else is needed. The message content
//! intent is not required since crossposting only needs the message ID.

pub mod handler;
pub mod start;
