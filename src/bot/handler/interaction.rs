use dioxus_logger::tracing;
use serenity::all::{ComponentInteraction, Context};
use serenity::http::Http;

use crate::{model::role_toggle::RoleToggleRequest, service::role_toggle::RoleToggleService};

/// Handles a component interaction by toggling the role named by its custom ID
///
/// Toggle failures are reported to the member by the service. Only a failure to
/// deliver that reply ends up here, and it is logged.
pub async fn handle_component_interaction(ctx: Context, interaction: ComponentInteraction) {
    // Role toggles only make sense for guild members, not DMs
    let Some(request) = RoleToggleRequest::from_interaction(&interaction) else {
        tracing::debug!(
            "Ignoring component interaction {} outside of a guild",
            interaction.id
        );
        return;
    };

    let http: &Http = &ctx.http;
    let role_toggle_service = RoleToggleService::new(http);

    if let Err(e) = role_toggle_service.toggle_and_reply(&request).await {
        tracing::warn!(
            "Failed to reply to role toggle interaction {} from user {}: {}",
            request.interaction.id,
            request.user_id,
            e
        );
    }
}
