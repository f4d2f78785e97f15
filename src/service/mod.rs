//! Event handling logic.
//!
//! Services hold the decision logic behind each gateway event and talk to
//! Discord only through the `DiscordApi` trait, so they can be exercised
//! without a live connection. Services are built per event and hold no state
//! between invocations.

pub mod crosspost;
pub mod discord;
pub mod role_toggle;

#[cfg(test)]
pub mod mock;
