//! IRCv3 message tag block decoding.
//!
//! The tag block is the `key=value;key2` text between the leading `@` and the
//! first space of a message. Values are stored exactly as they appeared on the
//! wire; [`unescape_tag_value`] undoes the IRCv3 escaping on demand.

use std::collections::HashMap;

use crate::error::{MalformedKind, Result};

/// Tag key to tag value. Flag-style tags map to an empty string.
pub type Tags = HashMap<String, String>;

/// Split a tag block (without its `@` marker) into a [`Tags`] map.
///
/// Every `;`-separated token becomes an entry, empty ones included, so `a;;b`
/// and an empty block both carry an empty key. A token with more than one `=`
/// rejects the whole block. Duplicate keys are not an error: the last
/// occurrence wins.
pub(crate) fn parse_tag_block(block: &str) -> Result<Tags> {
    let mut tags = Tags::new();
    for token in block.split(';') {
        let mut pair = token.split('=');
        let key = pair.next().unwrap_or_default();
        let value = pair.next().unwrap_or_default();
        if pair.next().is_some() {
            return Err(MalformedKind::InvalidTag.into());
        }
        tags.insert(key.to_owned(), value.to_owned());
    }
    Ok(tags)
}

/// Undo IRCv3 tag value escaping.
///
/// Scanned tags keep their wire text; this is the on-demand decode behind
/// [`Message::tag_unescaped`](crate::Message::tag_unescaped). `\:` `\s` `\\`
/// `\r` `\n` map to `;`, space, backslash, CR and LF. Any other escaped
/// character stands for itself and a dangling backslash at the end is dropped.
pub fn unescape_tag_value(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut escaped = false;
    for ch in value.chars() {
        if !escaped {
            if ch == '\\' {
                escaped = true;
            } else {
                out.push(ch);
            }
            continue;
        }
        escaped = false;
        out.push(match ch {
            ':' => ';',
            's' => ' ',
            'r' => '\r',
            'n' => '\n',
            other => other,
        });
    }
    out
}
