//! Prefix record and the decomposer that builds it.

use std::fmt;
use std::str::FromStr;

use crate::error::PrefixError;

/// The source of a message, split into its identity components.
///
/// Server prefixes only carry `host`. User prefixes carry `nickname` and
/// whatever of `user` and `host` the string held. Empty components are
/// reported as `None`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Prefix {
    /// The prefix string this was decomposed from.
    pub raw: String,
    /// True when the prefix names a server rather than a user.
    pub is_server: bool,
    /// Nickname component.
    pub nickname: Option<String>,
    /// User (ident) component.
    pub user: Option<String>,
    /// Host component, or the server name for server prefixes.
    pub host: Option<String>,
}

impl Prefix {
    /// Decompose a prefix string. See [`parse_prefix`].
    pub fn parse(s: &str) -> Option<Prefix> {
        parse_prefix(s)
    }

    /// Whether this prefix identifies a user rather than a server.
    pub fn is_user(&self) -> bool {
        !self.is_server
    }
}

/// Decompose `s` into nickname, user and host components.
///
/// Positions are found once: the first `!`, the first `@` after that `!`
/// (or the first `@` anywhere when there is no `!`), and the first `.`.
///
/// - `nick!user@host` and `nick!user` split around the `!` and `@`.
/// - `nick@host` has no user.
/// - Without `!` or `@`, a string containing `.` is a server name.
/// - Anything else is a bare nickname.
///
/// Returns `None` for an empty string or one starting with `!` or `@`.
///
/// ```
/// use slirc_scanner::parse_prefix;
///
/// let p = parse_prefix("nick!user@host").unwrap();
/// assert_eq!(p.nickname.as_deref(), Some("nick"));
/// assert_eq!(p.user.as_deref(), Some("user"));
/// assert_eq!(p.host.as_deref(), Some("host"));
///
/// assert!(parse_prefix("irc.example.com").unwrap().is_server);
/// assert!(parse_prefix("!user@host").is_none());
/// ```
pub fn parse_prefix(s: &str) -> Option<Prefix> {
    split_prefix(s).ok()
}

fn split_prefix(s: &str) -> Result<Prefix, PrefixError> {
    match s.chars().next() {
        None => return Err(PrefixError::Empty),
        Some(c @ ('!' | '@')) => return Err(PrefixError::InvalidStart(c)),
        Some(_) => {}
    }

    let bang = s.find('!');
    let at = match bang {
        Some(b) => s[b + 1..].find('@').map(|i| b + 1 + i),
        None => s.find('@'),
    };

    let mut prefix = Prefix {
        raw: s.to_owned(),
        ..Prefix::default()
    };

    match (bang, at) {
        (Some(b), Some(a)) => {
            prefix.nickname = component(&s[..b]);
            prefix.user = component(&s[b + 1..a]);
            prefix.host = component(&s[a + 1..]);
        }
        (Some(b), None) => {
            prefix.nickname = component(&s[..b]);
            prefix.user = component(&s[b + 1..]);
        }
        (None, Some(a)) => {
            prefix.nickname = component(&s[..a]);
            prefix.host = component(&s[a + 1..]);
        }
        (None, None) if s.contains('.') => {
            prefix.is_server = true;
            prefix.host = component(s);
        }
        (None, None) => {
            prefix.nickname = component(s);
        }
    }

    Ok(prefix)
}

fn component(s: &str) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s.to_owned())
    }
}

impl FromStr for Prefix {
    type Err = PrefixError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        split_prefix(s)
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
