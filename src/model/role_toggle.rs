//! Request models for the self-service role toggle.
//!
//! These models are built from a serenity `ComponentInteraction` when a member
//! presses a role button. They carry only what the toggle needs and are dropped
//! once the reply has been sent. The member's role set is the snapshot attached
//! to the interaction; it is never re-fetched.

use serenity::all::{ComponentInteraction, GuildId, InteractionId, Member, RoleId, UserId};

/// Identifies an interaction that can be responded to.
///
/// Discord authenticates interaction responses with the per-interaction token
/// rather than the bot token, so both are needed to reply.
#[derive(Debug, Clone, PartialEq)]
pub struct InteractionTarget {
    /// Discord interaction ID.
    pub id: InteractionId,
    /// Interaction token used to authenticate the response.
    pub token: String,
}

/// A role button activation by a guild member.
#[derive(Debug, Clone, PartialEq)]
pub struct RoleToggleRequest {
    /// The interaction to reply to.
    pub interaction: InteractionTarget,
    /// Guild the button was pressed in.
    pub guild_id: GuildId,
    /// User who pressed the button.
    pub user_id: UserId,
    /// Custom ID of the button, expected to hold a role ID.
    pub custom_id: String,
    /// Roles held by the member when the interaction was created.
    pub member_role_ids: Vec<RoleId>,
}

impl RoleToggleRequest {
    /// Converts a component interaction into a role toggle request.
    ///
    /// Interactions outside of a guild (DMs) carry no member and cannot be
    /// toggled.
    ///
    /// # Arguments
    /// - `interaction` - Component interaction received from the gateway
    ///
    /// # Returns
    /// - `Some(RoleToggleRequest)` - The interaction came from a guild member
    /// - `None` - The interaction has no guild or no member attached
    pub fn from_interaction(interaction: &ComponentInteraction) -> Option<Self> {
        let guild_id = interaction.guild_id?;
        let member = interaction.member.as_ref()?;

        Some(Self::from_member(
            InteractionTarget {
                id: interaction.id,
                token: interaction.token.clone(),
            },
            guild_id,
            interaction.data.custom_id.clone(),
            member,
        ))
    }

    /// Builds a request from the parts of an interaction.
    pub fn from_member(
        interaction: InteractionTarget,
        guild_id: GuildId,
        custom_id: String,
        member: &Member,
    ) -> Self {
        Self {
            interaction,
            guild_id,
            user_id: member.user.id,
            custom_id,
            member_role_ids: member.roles.clone(),
        }
    }

    /// Checks whether the member already holds the role.
    ///
    /// Reads the role set exactly as it was attached to the interaction.
    pub fn has_role(&self, role_id: RoleId) -> bool {
        self.member_role_ids.contains(&role_id)
    }
}

/// Result of a successful role toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleToggleOutcome {
    /// Role parsed from the button's custom ID.
    pub role_id: RoleId,
    /// Mutation that was applied.
    pub action: RoleToggleAction,
}

/// Which mutation a role toggle performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleToggleAction {
    /// The member lacked the role and it was granted.
    Added,
    /// The member held the role and it was revoked.
    Removed,
}
