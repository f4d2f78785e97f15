//! Recording `DiscordApi` implementation for service tests.

use std::sync::Mutex;

use serenity::{
    all::{ChannelId, GuildId, InteractionId, MessageId, RoleId, UserId},
    async_trait,
};

use crate::{
    error::AppError, model::role_toggle::InteractionTarget, service::discord::DiscordApi,
};

/// A single remote call observed by the mock, in the order it was made.
#[derive(Debug, Clone, PartialEq)]
pub enum DiscordCall {
    AddMemberRole {
        guild_id: GuildId,
        user_id: UserId,
        role_id: RoleId,
    },
    RemoveMemberRole {
        guild_id: GuildId,
        user_id: UserId,
        role_id: RoleId,
    },
    CrosspostMessage {
        channel_id: ChannelId,
        message_id: MessageId,
    },
    InteractionReply {
        interaction_id: InteractionId,
        content: String,
        ephemeral: bool,
    },
}

/// Mock Discord API that records calls and optionally fails them.
///
/// Successful role mutations are applied to an in-memory role set so that a
/// following request can be built from the state Discord would now report.
#[derive(Default)]
pub struct MockDiscordApi {
    calls: Mutex<Vec<DiscordCall>>,
    roles: Mutex<Vec<(UserId, RoleId)>>,
    fail_role_mutations: Option<&'static str>,
    fail_crosspost: Option<&'static str>,
    fail_reply: Option<&'static str>,
}

impl MockDiscordApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every add/remove role call fail with the given message.
    pub fn failing_role_mutations(mut self, message: &'static str) -> Self {
        self.fail_role_mutations = Some(message);
        self
    }

    pub fn failing_crosspost(mut self, message: &'static str) -> Self {
        self.fail_crosspost = Some(message);
        self
    }

    pub fn failing_reply(mut self, message: &'static str) -> Self {
        self.fail_reply = Some(message);
        self
    }

    pub fn calls(&self) -> Vec<DiscordCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Roles the mock currently believes the user holds.
    pub fn member_roles(&self, user_id: UserId) -> Vec<RoleId> {
        self.roles
            .lock()
            .unwrap()
            .iter()
            .filter(|(user, _)| *user == user_id)
            .map(|(_, role)| *role)
            .collect()
    }

    fn record(&self, call: DiscordCall) {
        self.calls.lock().unwrap().push(call);
    }

    fn fail(message: Option<&'static str>) -> Result<(), AppError> {
        match message {
            Some(message) => Err(serenity::Error::Other(message).into()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl DiscordApi for MockDiscordApi {
    async fn add_member_role(
        &self,
        guild_id: GuildId,
        user_id: UserId,
        role_id: RoleId,
    ) -> Result<(), AppError> {
        self.record(DiscordCall::AddMemberRole {
            guild_id,
            user_id,
            role_id,
        });
        Self::fail(self.fail_role_mutations)?;

        let mut roles = self.roles.lock().unwrap();
        if !roles.contains(&(user_id, role_id)) {
            roles.push((user_id, role_id));
        }

        Ok(())
    }

    async fn remove_member_role(
        &self,
        guild_id: GuildId,
        user_id: UserId,
        role_id: RoleId,
    ) -> Result<(), AppError> {
        self.record(DiscordCall::RemoveMemberRole {
            guild_id,
            user_id,
            role_id,
        });
        Self::fail(self.fail_role_mutations)?;

        self.roles
            .lock()
            .unwrap()
            .retain(|held| *held != (user_id, role_id));

        Ok(())
    }

    async fn crosspost_message(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
    ) -> Result<(), AppError> {
        self.record(DiscordCall::CrosspostMessage {
            channel_id,
            message_id,
        });
        Self::fail(self.fail_crosspost)
    }

    async fn create_interaction_reply(
        &self,
        interaction: &InteractionTarget,
        content: &str,
        ephemeral: bool,
    ) -> Result<(), AppError> {
        self.record(DiscordCall::InteractionReply {
            interaction_id: interaction.id,
            content: content.to_string(),
            ephemeral,
        });
        Self::fail(self.fail_reply)
    }
}
