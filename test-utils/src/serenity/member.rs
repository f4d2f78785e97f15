//! Test factory for creating Serenity Member objects.
//!
//! Members arrive attached to component interactions, carrying the role IDs the
//! member held when the interaction was created. These factories create valid
//! Member objects by deserializing JSON, simulating what Discord's API would
//! return.

use serde_json::Value;
use serenity::all::Member;

/// Creates a test Serenity Member holding the given roles.
///
/// All other fields are set to reasonable defaults (no nickname, no avatar,
/// not muted or deafened, not pending).
///
/// # Arguments
/// - `guild_id` - Discord guild ID (snowflake) the member belongs to
/// - `user_id` - Discord user ID (snowflake)
/// - `role_ids` - Role IDs (snowflakes) the member holds, in order
///
/// # Returns
/// - `Member` - A valid Serenity Member struct for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into a Member (indicates invalid test data)
///
/// # Examples
///
/// ```rust,ignore
/// use test_utils::serenity::member::create_test_member;
///
/// let member = create_test_member(1, 42, &[100, 200]);
/// assert_eq!(member.user.id.get(), 42);
/// assert_eq!(member.roles.len(), 2);
/// ```
pub fn create_test_member(guild_id: u64, user_id: u64, role_ids: &[u64]) -> Member {
    serde_json::from_value(member_json(guild_id, user_id, role_ids))
        .expect("Failed to create test member - invalid JSON structure")
}

/// JSON for a user object as Discord sends it.
pub(crate) fn user_json(user_id: u64) -> Value {
    serde_json::json!({
        "id": user_id.to_string(),
        "username": format!("user{}", user_id),
        "discriminator": "0001",
        "global_name": null,
        "avatar": null,
        "bot": false,
    })
}

/// JSON for a guild member object as Discord sends it.
pub(crate) fn member_json(guild_id: u64, user_id: u64, role_ids: &[u64]) -> Value {
    let roles: Vec<String> = role_ids.iter().map(|id| id.to_string()).collect();

    serde_json::json!({
        "guild_id": guild_id.to_string(),
        "user": user_json(user_id),
        "nick": null,
        "avatar": null,
        "roles": roles,
        "joined_at": "2020-01-01T00:00:00.000000+00:00",
        "premium_since": null,
        "deaf": false,
        "mute": false,
        "flags": 0,
        "pending": false,
        "permissions": "0",
        "communication_disabled_until": null,
    })
}
