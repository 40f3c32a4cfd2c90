//! IRC message prefix (source) decomposition.

mod types;

pub use self::types::{parse_prefix, Prefix};
