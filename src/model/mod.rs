//! Event-scoped request models.
//!
//! Each model is converted from a serenity gateway type when an event arrives,
//! consumed once by a service and then dropped. Nothing here is persisted.

pub mod crosspost;
pub mod role_toggle;
