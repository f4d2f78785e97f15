//! Remote Discord operations used by the bot.
//!
//! `DiscordApi` is the seam between the services and the Discord REST API. The
//! production implementation is Serenity's `Http` client shared by the gateway
//! `Context`; tests substitute a recording mock.

use serenity::{
    all::{
        ChannelId, CreateInteractionResponse, CreateInteractionResponseMessage, GuildId, MessageId,
        RoleId, UserId,
    },
    async_trait,
    http::Http,
};

use crate::{error::AppError, model::role_toggle::InteractionTarget};

/// Discord REST operations consumed by the event handlers.
#[async_trait]
pub trait DiscordApi: Send + Sync {
    /// Grants a role to a guild member.
    async fn add_member_role(
        &self,
        guild_id: GuildId,
        user_id: UserId,
        role_id: RoleId,
    ) -> Result<(), AppError>;

    /// Revokes a role from a guild member.
    async fn remove_member_role(
        &self,
        guild_id: GuildId,
        user_id: UserId,
        role_id: RoleId,
    ) -> Result<(), AppError>;

    /// Publishes a message in an announcement channel to all following channels.
    async fn crosspost_message(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
    ) -> Result<(), AppError>;

    /// Responds to an interaction with a message.
    ///
    /// Ephemeral messages are only visible to the user who triggered the
    /// interaction.
    async fn create_interaction_reply(
        &self,
        interaction: &InteractionTarget,
        content: &str,
        ephemeral: bool,
    ) -> Result<(), AppError>;
}

#[async_trait]
impl DiscordApi for Http {
    async fn add_member_role(
        &self,
        guild_id: GuildId,
        user_id: UserId,
        role_id: RoleId,
    ) -> Result<(), AppError> {
        Http::add_member_role(self, guild_id, user_id, role_id, None).await?;

        Ok(())
    }

    async fn remove_member_role(
        &self,
        guild_id: GuildId,
        user_id: UserId,
        role_id: RoleId,
    ) -> Result<(), AppError> {
        Http::remove_member_role(self, guild_id, user_id, role_id, None).await?;

        Ok(())
    }

    async fn crosspost_message(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
    ) -> Result<(), AppError> {
        Http::crosspost_message(self, channel_id, message_id).await?;

        Ok(())
    }

    async fn create_interaction_reply(
        &self,
        interaction: &InteractionTarget,
        content: &str,
        ephemeral: bool,
    ) -> Result<(), AppError> {
        let response = CreateInteractionResponse::Message(
            CreateInteractionResponseMessage::new()
                .content(content)
                .ephemeral(ephemeral),
        );

        self.create_interaction_response(interaction.id, &interaction.token, &response, vec![])
            .await?;

        Ok(())
    }
}
