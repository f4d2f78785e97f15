//! Test factories for creating Serenity API objects.
//!
//! When testing code that reads data off Discord gateway events, you need
//! Serenity structs that look like what Discord sends. These factories build
//! them by deserializing JSON with sensible defaults while allowing
//! customization of the fields the bot actually reads.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::create_test_member;
//!
//! #[test]
//! fn reads_member_roles() {
//!     let member = create_test_member(1, 42, &[100, 200]);
//!
//!     // Use in your tests...
//! }
//! ```
//!
//! # Available Factories
//!
//! - `member::create_test_member` - Create Serenity Member objects
//! - `interaction::create_test_component_interaction` - Create button presses,
//!   in a guild or in a DM

pub mod interaction;
pub mod member;

// Re-export commonly used functions for convenience
pub use interaction::create_test_component_interaction;
pub use member::create_test_member;
