//! Self-service role toggling.
//!
//! Members press a button whose custom ID is a role ID. If the member already
//! holds that role it is removed, otherwise it is added. The outcome is always
//! reported back to the member with an ephemeral reply on the same interaction.

use dioxus_logger::tracing;
use serenity::all::Mentionable;

use crate::{
    error::AppError,
    model::role_toggle::{RoleToggleAction, RoleToggleOutcome, RoleToggleRequest},
    service::discord::DiscordApi,
    util::parse::parse_role_id,
};

/// Service for toggling a member's roles from button presses.
pub struct RoleToggleService<'a> {
    /// Discord API used for role mutations and interaction replies
    discord: &'a dyn DiscordApi,
}

impl<'a> RoleToggleService<'a> {
    /// Creates a new RoleToggleService instance.
    ///
    /// # Arguments
    /// - `discord` - Discord API client, normally the gateway context's `Http`
    ///
    /// # Returns
    /// - `RoleToggleService` - New service instance
    pub fn new(discord: &'a dyn DiscordApi) -> Self {
        Self { discord }
    }

    /// Toggles the requested role and replies to the member.
    ///
    /// The toggle result, success or failure, becomes the ephemeral reply. The
    /// toggle is never retried.
    ///
    /// # Arguments
    /// - `request` - Role toggle request built from the component interaction
    ///
    /// # Returns
    /// - `Ok(())` - The reply was delivered, whatever the toggle result
    /// - `Err(AppError::DiscordErr)` - Discord rejected the reply
    pub async fn toggle_and_reply(&self, request: &RoleToggleRequest) -> Result<(), AppError> {
        let result = self.toggle(request).await;

        if let Ok(outcome) = &result {
            tracing::debug!(
                "{:?} role {} for user {} in guild {}",
                outcome.action,
                outcome.role_id,
                request.user_id,
                request.guild_id
            );
        }

        self.discord
            .create_interaction_reply(&request.interaction, &reply_content(&result), true)
            .await
    }

    /// Adds or removes the role named by the request's custom ID.
    ///
    /// Membership is decided from the role snapshot attached to the request. A
    /// custom ID that is not a role ID aborts the toggle before any mutation is
    /// issued.
    ///
    /// # Arguments
    /// - `request` - Role toggle request built from the component interaction
    ///
    /// # Returns
    /// - `Ok(RoleToggleOutcome)` - The role and the mutation that was applied
    /// - `Err(AppError::InternalErr)` - The custom ID is not a valid role ID
    /// - `Err(AppError::DiscordErr)` - Discord rejected the role mutation
    pub async fn toggle(&self, request: &RoleToggleRequest) -> Result<RoleToggleOutcome, AppError> {
        let role_id = parse_role_id(&request.custom_id)?;

        let action = if request.has_role(role_id) {
            self.discord
                .remove_member_role(request.guild_id, request.user_id, role_id)
                .await?;
            RoleToggleAction::Removed
        } else {
            self.discord
                .add_member_role(request.guild_id, request.user_id, role_id)
                .await?;
            RoleToggleAction::Added
        };

        Ok(RoleToggleOutcome { role_id, action })
    }
}

/// Builds the reply shown to the member after a toggle attempt.
fn reply_content(result: &Result<RoleToggleOutcome, AppError>) -> String {
    match result {
        Ok(outcome) => format!(
            "✅ Successfully toggled role {}.",
            outcome.role_id.mention()
        ),
        Err(e) => format!("❌ There was an error while toggling your role: {}", e),
    }
}
