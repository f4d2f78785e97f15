//! Request model for announcement crossposting.

use serenity::all::{ChannelId, Message, MessageId};

/// A newly created message that may need publishing to following channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrosspostRequest {
    /// Channel the message was posted in.
    pub channel_id: ChannelId,
    /// The posted message.
    pub message_id: MessageId,
}

impl CrosspostRequest {
    pub fn from_message(message: &Message) -> Self {
        Self {
            channel_id: message.channel_id,
            message_id: message.id,
        }
    }
}

/// Result of handling a new message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrosspostOutcome {
    /// The message was not posted in the announcement channel.
    Skipped,
    /// The message was published to following channels.
    Published,
}
