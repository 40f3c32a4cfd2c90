//! The decoded [`Message`] record.

use std::fmt;

use super::tags::{unescape_tag_value, Tags};
use crate::prefix::Prefix;

/// A single IRC message as decoded by the [`Scanner`](crate::Scanner).
///
/// Field values are exactly what the scanner consumed; nothing is normalized
/// beyond splitting the line into its segments.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Message {
    /// The message text as consumed, including its CRLF terminator.
    pub raw: String,
    /// IRCv3 tags, `None` when the message carried no tag block.
    pub tags: Option<Tags>,
    /// Undecomposed prefix text, empty when absent.
    pub prefix: String,
    /// Command verb or numeric. Never empty.
    pub command: String,
    /// Parameters in wire order. The trailing parameter, if any, is last.
    pub params: Vec<String>,
}

impl Message {
    /// Raw wire value of a tag. Flag-style tags yield `Some("")`.
    pub fn tag(&self, key: &str) -> Option<&str> {
        self.tags.as_ref()?.get(key).map(String::as_str)
    }

    /// Whether the tag block contained `key`.
    pub fn has_tag(&self, key: &str) -> bool {
        self.tag(key).is_some()
    }

    /// Tag value with IRCv3 escapes resolved.
    pub fn tag_unescaped(&self, key: &str) -> Option<String> {
        self.tag(key).map(unescape_tag_value)
    }

    /// Decompose the prefix into its source components.
    ///
    /// Returns `None` when there is no prefix or it cannot be decomposed.
    pub fn source(&self) -> Option<Prefix> {
        Prefix::parse(&self.prefix)
    }

    /// Parameter at `index`.
    pub fn param(&self, index: usize) -> Option<&str> {
        self.params.get(index).map(String::as_str)
    }

    /// The last parameter, which is where trailing text ends up.
    pub fn trailing(&self) -> Option<&str> {
        self.params.last().map(String::as_str)
    }

    /// Whether the command is a three-digit numeric reply.
    pub fn is_numeric(&self) -> bool {
        self.command.len() == 3 && self.command.bytes().all(|b| b.is_ascii_digit())
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.raw.strip_suffix("\r\n").unwrap_or(&self.raw))
    }
}
