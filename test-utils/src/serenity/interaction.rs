//! Test factory for creating Serenity ComponentInteraction objects.
//!
//! Button presses reach the bot as component interactions. In a guild Discord
//! attaches the pressing member (with their roles) and the guild ID; in a DM it
//! attaches only the user. The message the button belongs to is always included.

use serde_json::Value;
use serenity::all::ComponentInteraction;

use super::member::{member_json, user_json};

/// Interaction ID given to every test interaction.
pub const TEST_INTERACTION_ID: u64 = 800000000000000001;

/// Interaction token given to every test interaction.
pub const TEST_INTERACTION_TOKEN: &str = "test-interaction-token";

/// Creates a test button press.
///
/// # Arguments
/// - `custom_id` - Custom ID of the pressed button
/// - `user_id` - Discord user ID (snowflake) of the presser
/// - `guild` - `Some((guild_id, role_ids))` for a press by a guild member holding
///   those roles, `None` for a press in a DM
///
/// # Returns
/// - `ComponentInteraction` - A valid Serenity ComponentInteraction for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into a ComponentInteraction (indicates
///   invalid test data)
///
/// # Examples
///
/// ```rust,ignore
/// use test_utils::serenity::interaction::create_test_component_interaction;
///
/// // Member of guild 1 holding role 100 presses the "200" button
/// let press = create_test_component_interaction("200", 42, Some((1, &[100][..])));
///
/// // Same button pressed in a DM
/// let dm_press = create_test_component_interaction("200", 42, None);
/// assert!(dm_press.member.is_none());
/// ```
pub fn create_test_component_interaction(
    custom_id: &str,
    user_id: u64,
    guild: Option<(u64, &[u64])>,
) -> ComponentInteraction {
    let channel_id = "700000000000000001";

    let mut interaction = serde_json::json!({
        "id": TEST_INTERACTION_ID.to_string(),
        "application_id": "600000000000000001",
        "type": 3,
        "data": {
            "custom_id": custom_id,
            "component_type": 2,
        },
        "channel_id": channel_id,
        "token": TEST_INTERACTION_TOKEN,
        "version": 1,
        "message": message_json(channel_id),
        "app_permissions": "0",
        "locale": "en-US",
        "entitlements": [],
        "authorizing_integration_owners": {},
        "attachment_size_limit": 10485760,
    });

    match guild {
        Some((guild_id, role_ids)) => {
            interaction["guild_id"] = Value::from(guild_id.to_string());
            interaction["guild_locale"] = Value::from("en-US");
            interaction["member"] = member_json(guild_id, user_id, role_ids);
        }
        None => {
            interaction["user"] = user_json(user_id);
        }
    }

    serde_json::from_value(interaction)
        .expect("Failed to create test component interaction - invalid JSON structure")
}

/// JSON for the bot message carrying the pressed button.
fn message_json(channel_id: &str) -> Value {
    serde_json::json!({
        "id": "700000000000000002",
        "channel_id": channel_id,
        "author": user_json(600000000000000001),
        "content": "Pick your roles",
        "timestamp": "2020-01-01T00:00:00.000000+00:00",
        "edited_timestamp": null,
        "tts": false,
        "mention_everyone": false,
        "mentions": [],
        "mention_roles": [],
        "mention_channels": [],
        "attachments": [],
        "embeds": [],
        "reactions": [],
        "pinned": false,
        "type": 0,
        "flags": 0,
        "components": [],
        "sticker_items": [],
    })
}
