//! # slirc-scanner
//!
//! An incremental scanner for RFC 1459 IRC messages with IRCv3 message tags.
//!
//! ## Features
//!
//! - Pull-based decoding of one message per call from any [`std::io::Read`]
//! - IRCv3 tag blocks, prefixes, commands, middle and trailing parameters
//! - Independent 512-byte budgets for the tag segment and the message body
//! - Prefix decomposition into nickname, user and host
//! - Optional `tokio_util` codec (feature `codec`, on by default)

#![deny(clippy::all)]
#![warn(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! ## Quick Start
//!
//! ```rust
//! use slirc_scanner::Scanner;
//!
//! let input = "@test=super;single :test!me@test.ing FOO bar baz quux :This is a test\r\n";
//! let mut scanner = Scanner::new(input.as_bytes());
//!
//! let message = scanner.next_message().unwrap().unwrap();
//! assert_eq!(message.tag("test"), Some("super"));
//! assert_eq!(message.tag("single"), Some(""));
//! assert_eq!(message.command, "FOO");
//! assert_eq!(message.params, ["bar", "baz", "quux", "This is a test"]);
//!
//! let source = message.source().unwrap();
//! assert_eq!(source.nickname.as_deref(), Some("test"));
//! assert_eq!(source.host.as_deref(), Some("test.ing"));
//!
//! // A stream that ends on a message boundary simply runs out.
//! assert!(scanner.next_message().unwrap().is_none());
//! ```

#[cfg(feature = "codec")]
#[cfg_attr(docsrs, doc(cfg(feature = "codec")))]
pub mod codec;
pub mod error;
pub mod message;
pub mod prefix;
pub mod scanner;

#[cfg(feature = "codec")]
pub use self::codec::IrcCodec;
pub use self::error::{MalformedKind, PrefixError, Result, ScanError};
pub use self::message::{Message, Tags};
pub use self::prefix::{parse_prefix, Prefix};
pub use self::scanner::{Scanner, ScannerConfig, MAX_BODY_SEGMENT, MAX_TAG_SEGMENT};
