use std::num::ParseIntError;
use thiserror::Error;

/// Input that could not be interpreted as a Discord entity
#[derive(Error, Debug)]
pub enum InternalError {
    /// Failure to parse a role ID from a component custom ID
    ///
    /// Raised for anything that is not a non-zero unsigned 64-bit snowflake.
    /// The role toggle is aborted and the error is shown to the invoking user.
    #[error("Failed to parse role ID from '{value}': {source}")]
    ParseRoleId {
        /// The custom ID that failed to parse
        value: String,
        /// The underlying parse error
        #[source]
        source: ParseIntError,
    },
}
