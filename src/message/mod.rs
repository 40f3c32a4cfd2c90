//! Decoded IRC message records and tag block handling.

pub mod tags;
mod types;

pub use self::tags::Tags;
pub use self::types::Message;
