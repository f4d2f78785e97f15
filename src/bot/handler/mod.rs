use serenity::all::{ChannelId, Context, EventHandler, Interaction, Message, Ready};
use serenity::async_trait;

pub mod interaction;
pub mod message;
pub mod ready;

/// Logs the gateway handshake
pub struct ReadyHandler;

#[async_trait]
impl EventHandler for ReadyHandler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(ctx, ready).await;
    }
}

/// Toggles roles when members press role buttons
pub struct RoleToggleHandler;

#[async_trait]
impl EventHandler for RoleToggleHandler {
    /// Called when an interaction is created (buttons, commands, modals, ...)
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        if let Interaction::Component(component) = interaction {
            interaction::handle_component_interaction(ctx, component).await;
        }
    }
}

/// Crossposts new messages from the videos announcement channel
pub struct CrosspostHandler {
    pub videos_channel_id: ChannelId,
}

impl CrosspostHandler {
    pub fn new(videos_channel_id: ChannelId) -> Self {
        Self { videos_channel_id }
    }
}

#[async_trait]
impl EventHandler for CrosspostHandler {
    /// Called when a message is sent in a channel
    async fn message(&self, ctx: Context, message: Message) {
        message::handle_message(self.videos_channel_id, ctx, message).await;
    }
}
