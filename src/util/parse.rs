use std::num::NonZeroU64;

use serenity::all::RoleId;

use crate::error::{internal::InternalError, AppError};

/// Parses a role ID from a component custom ID
///
/// Snowflakes are non-zero, so `"0"` is rejected along with anything that is
/// not an unsigned 64-bit integer.
///
/// # Arguments
/// - `value` - The custom ID attached to the activated component
///
/// # Returns
/// - `Ok(RoleId)` - Successfully parsed the custom ID
/// - `Err(AppError::InternalErr(ParseRoleId))` - The custom ID is not a valid
///   role snowflake
pub fn parse_role_id(value: &str) -> Result<RoleId, AppError> {
    let id = value
        .parse::<NonZeroU64>()
        .map_err(|e| InternalError::ParseRoleId {
            value: value.to_string(),
            source: e,
        })?;

    Ok(RoleId::from(id))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests parsing a well-formed snowflake.
    ///
    /// Expected: Ok with the matching RoleId
    #[test]
    fn parses_snowflake() {
        let role_id = parse_role_id("926212070242942986").unwrap();

        assert_eq!(role_id, RoleId::new(926212070242942986));
    }

    /// Tests parsing a custom ID that is not numeric.
    ///
    /// Expected: Err(InternalErr(ParseRoleId)) carrying the original value
    #[test]
    fn rejects_non_numeric() {
        let result = parse_role_id("subscribe-button");

        match result {
            Err(AppError::InternalErr(InternalError::ParseRoleId { value, .. })) => {
                assert_eq!(value, "subscribe-button");
            }
            other => panic!("expected ParseRoleId error, got {:?}", other),
        }
    }

    /// Tests parsing zero, which is never a valid snowflake.
    ///
    /// Expected: Err(InternalErr(ParseRoleId))
    #[test]
    fn rejects_zero() {
        assert!(matches!(
            parse_role_id("0"),
            Err(AppError::InternalErr(InternalError::ParseRoleId { .. }))
        ));
    }

    /// Tests parsing an empty custom ID.
    ///
    /// Expected: Err(InternalErr(ParseRoleId))
    #[test]
    fn rejects_empty() {
        assert!(parse_role_id("").is_err());
    }

    /// Tests that the error message names the offending value.
    ///
    /// Expected: Display output contains the custom ID
    #[test]
    fn error_message_contains_value() {
        let err = parse_role_id("-5").unwrap_err();

        assert!(err.to_string().contains("'-5'"));
    }
}
