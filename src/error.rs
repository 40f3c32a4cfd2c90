//! Error types for the IRC message scanner.
//!
//! Every failure surfaced by [`Scanner`](crate::Scanner) is fatal to the
//! stream it was reading. Clean end of input is not an error and never shows
//! up here.

use thiserror::Error;

/// Convenience type alias for Results using [`ScanError`].
pub type Result<T, E = ScanError> = std::result::Result<T, E>;

/// Errors that stop a scan.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ScanError {
    /// A hard structural rule was violated.
    #[error("message malformed: {0}")]
    Malformed(#[from] MalformedKind),

    /// The stream ended before a required terminator was seen.
    #[error("unexpected end of input")]
    UnexpectedEof,

    /// I/O error from the underlying reader, passed through verbatim.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The cursor was asked to unread twice without an intervening read.
    #[error("cannot unread more than one character")]
    InvalidUnread,
}

impl ScanError {
    /// Returns true for the malformed-message family of errors.
    pub fn is_malformed(&self) -> bool {
        matches!(self, ScanError::Malformed(_))
    }

    /// Returns true if the stream ended in the middle of a message.
    pub fn is_unexpected_eof(&self) -> bool {
        matches!(self, ScanError::UnexpectedEof)
    }
}

/// The specific rule a malformed message broke.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum MalformedKind {
    /// The tag segment ran past its budget without reaching a space.
    #[error("tag segment exceeds {limit} bytes")]
    TagSegmentTooLong {
        /// Configured budget in bytes.
        limit: usize,
    },

    /// Everything after the tag segment ran past its budget.
    #[error("message body exceeds {limit} bytes")]
    BodyTooLong {
        /// Configured budget in bytes.
        limit: usize,
    },

    /// A tag token contained more than one `=`.
    #[error("ill-formed tag pair")]
    InvalidTag,

    /// No line terminator arrived within the combined segment budgets.
    #[error("unterminated line exceeds {limit} bytes")]
    LineTooLong {
        /// Combined tag and body budget in bytes.
        limit: usize,
    },

    /// The line carried no command token.
    #[error("missing command")]
    MissingCommand,
}

/// Errors from decomposing a prefix string.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PrefixError {
    /// The prefix string was empty.
    #[error("empty prefix")]
    Empty,

    /// The prefix started with a character that cannot begin a source.
    #[error("invalid prefix start: {0:?}")]
    InvalidStart(char),
}
