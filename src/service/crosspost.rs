//! Announcement crossposting.
//!
//! Messages posted in the videos announcement channel are published so they
//! reach every server following that channel. Messages anywhere else are left
//! alone.

use serenity::all::ChannelId;

use crate::{
    error::AppError,
    model::crosspost::{CrosspostOutcome, CrosspostRequest},
    service::discord::DiscordApi,
};

/// Service for publishing messages from the announcement channel.
pub struct CrosspostService<'a> {
    discord: &'a dyn DiscordApi,
    /// The only channel whose messages are crossposted
    channel_id: ChannelId,
}

impl<'a> CrosspostService<'a> {
    /// Creates a new CrosspostService instance.
    ///
    /// # Arguments
    /// - `discord` - Discord API client, normally the gateway context's `Http`
    /// - `channel_id` - Announcement channel to publish messages from
    ///
    /// # Returns
    /// - `CrosspostService` - New service instance
    pub fn new(discord: &'a dyn DiscordApi, channel_id: ChannelId) -> Self {
        Self {
            discord,
            channel_id,
        }
    }

    /// Publishes the message if it was posted in the announcement channel.
    ///
    /// Makes at most one remote call and never replies in the channel.
    ///
    /// # Arguments
    /// - `request` - Channel and message IDs of the new message
    ///
    /// # Returns
    /// - `Ok(CrosspostOutcome::Skipped)` - Message is from another channel, no call made
    /// - `Ok(CrosspostOutcome::Published)` - Message was crossposted
    /// - `Err(AppError::DiscordErr)` - Discord rejected the crosspost
    pub async fn crosspost(&self, request: &CrosspostRequest) -> Result<CrosspostOutcome, AppError> {
        if request.channel_id != self.channel_id {
            return Ok(CrosspostOutcome::Skipped);
        }

        self.discord
            .crosspost_message(self.channel_id, request.message_id)
            .await?;

        Ok(CrosspostOutcome::Published)
    }
}

#[cfg(test)]
mod tests {
    use serenity::all::MessageId;

    use super::*;
    use crate::service::mock::{DiscordCall, MockDiscordApi};

    const VIDEOS_CHANNEL_ID: u64 = 926212070242942986;

    fn request(channel_id: u64, message_id: u64) -> CrosspostRequest {
        CrosspostRequest {
            channel_id: ChannelId::new(channel_id),
            message_id: MessageId::new(message_id),
        }
    }

    /// Tests a message posted in the announcement channel.
    ///
    /// Expected: Published with exactly one CrosspostMessage call for that message
    #[tokio::test]
    async fn publishes_announcement() {
        let discord = MockDiscordApi::new();
        let service = CrosspostService::new(&discord, ChannelId::new(VIDEOS_CHANNEL_ID));

        let outcome = service
            .crosspost(&request(VIDEOS_CHANNEL_ID, 555))
            .await
            .unwrap();

        assert_eq!(outcome, CrosspostOutcome::Published);
        assert_eq!(
            discord.calls(),
            vec![DiscordCall::CrosspostMessage {
                channel_id: ChannelId::new(VIDEOS_CHANNEL_ID),
                message_id: MessageId::new(555),
            }]
        );
    }

    /// Tests a message posted in any other channel.
    ///
    /// Expected: Skipped with no remote calls
    #[tokio::test]
    async fn skips_other_channels() {
        let discord = MockDiscordApi::new();
        let service = CrosspostService::new(&discord, ChannelId::new(VIDEOS_CHANNEL_ID));

        let outcome = service.crosspost(&request(123, 555)).await.unwrap();

        assert_eq!(outcome, CrosspostOutcome::Skipped);
        assert!(discord.calls().is_empty());
    }

    /// Tests a crosspost that Discord rejects.
    ///
    /// Verifies the error is returned for logging, nothing is posted back to the
    /// channel and the call is not retried.
    ///
    /// Expected: Err(DiscordErr) after a single CrosspostMessage call
    #[tokio::test]
    async fn returns_crosspost_failure() {
        let discord = MockDiscordApi::new().failing_crosspost("Message already crossposted");
        let service = CrosspostService::new(&discord, ChannelId::new(VIDEOS_CHANNEL_ID));

        let result = service.crosspost(&request(VIDEOS_CHANNEL_ID, 555)).await;

        match result {
            Err(e @ AppError::DiscordErr(_)) => {
                assert_eq!(e.to_string(), "Message already crossposted");
            }
            other => panic!("expected DiscordErr, got {:?}", other),
        }
        assert_eq!(discord.calls().len(), 1);
    }
}
