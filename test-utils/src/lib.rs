//! Geokyle Test Utils
//!
//! Provides shared testing utilities for the geokyle bot. The bot keeps no
//! local state, so the only shared fixtures are Serenity objects shaped like
//! the ones Discord attaches to gateway events.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::create_test_member;
//!
//! let member = create_test_member(1, 42, &[100]);
//! ```

pub mod serenity;
