//! Incremental IRC message scanner.
//!
//! A [`Scanner`] pulls one message at a time from any [`Read`] source:
//!
//! ```text
//! [@tag1=val1;tag2 ][:prefix ]command[ param1 param2 ...[ :trailing]]\r\n
//! ```
//!
//! Scanning stops for good at clean end of input, the first I/O error, or the
//! first malformed message. After a stop the reader may have advanced past the
//! last message by an unspecified amount.

mod config;
mod cursor;
mod segments;

use std::io::Read;

use tracing::{debug, trace};

pub use self::config::{ScannerConfig, MAX_BODY_SEGMENT, MAX_TAG_SEGMENT};

use self::cursor::Cursor;
use self::segments::LineEnd;
use crate::error::{MalformedKind, Result, ScanError};
use crate::message::Message;

/// Where the scanner stands between advances.
#[derive(Debug)]
enum State {
    Ready,
    /// No further messages. Holds the failure, if any, until it is taken.
    Exhausted(Option<ScanError>),
}

/// Pull-based decoder that turns a character stream into [`Message`]s.
///
/// One scanner serves one stream. It can be driven in the bufio style with
/// [`scan`](Scanner::scan), [`message`](Scanner::message) and
/// [`err`](Scanner::err), or used as an [`Iterator`].
///
/// ```
/// use slirc_scanner::Scanner;
///
/// let input = "@time=12345 :nick!user@host PRIVMSG #chan :Hello there\r\nPING :srv\r\n";
/// let mut scanner = Scanner::new(input.as_bytes());
///
/// let mut commands = Vec::new();
/// while Scanner::scan(&mut scanner) {
///     let message = scanner.message().unwrap();
///     commands.push(message.command.clone());
/// }
/// assert!(scanner.err().is_none());
/// assert_eq!(commands, ["PRIVMSG", "PING"]);
/// ```
pub struct Scanner<R> {
    cursor: Cursor<R>,
    config: ScannerConfig,
    message: Option<Message>,
    state: State,
}

impl<R: Read> Scanner<R> {
    /// Create a scanner with the default 512-byte segment budgets.
    pub fn new(reader: R) -> Self {
        Self::with_config(reader, ScannerConfig::new())
    }

    /// Create a scanner with custom budgets.
    pub fn with_config(reader: R, config: ScannerConfig) -> Self {
        Self {
            cursor: Cursor::new(reader, config),
            config,
            message: None,
            state: State::Ready,
        }
    }

    /// Advance to the next message.
    ///
    /// Returns false once scanning has stopped, either at clean end of input
    /// or on an error retrievable through [`err`](Scanner::err).
    pub fn scan(&mut self) -> bool {
        match self.step() {
            Some(Ok(message)) => {
                self.message = Some(message);
                true
            }
            Some(Err(e)) => {
                self.state = State::Exhausted(Some(e));
                false
            }
            None => false,
        }
    }

    /// The message produced by the most recent successful [`scan`](Scanner::scan).
    pub fn message(&self) -> Option<&Message> {
        self.message.as_ref()
    }

    /// The error that stopped [`scan`](Scanner::scan), `None` on clean end of input.
    pub fn err(&self) -> Option<&ScanError> {
        match &self.state {
            State::Exhausted(err) => err.as_ref(),
            State::Ready => None,
        }
    }

    /// Take ownership of the stopping error. Later calls return `None`.
    pub fn take_err(&mut self) -> Option<ScanError> {
        match &mut self.state {
            State::Exhausted(err) => err.take(),
            State::Ready => None,
        }
    }

    /// Whether the scanner has stopped.
    pub fn is_exhausted(&self) -> bool {
        matches!(self.state, State::Exhausted(_))
    }

    /// Decode the next message. `Ok(None)` marks clean end of input.
    ///
    /// An error is returned once; afterwards the scanner yields `Ok(None)`.
    pub fn next_message(&mut self) -> Result<Option<Message>> {
        self.step().transpose()
    }

    /// The configuration this scanner was built with.
    pub fn config(&self) -> &ScannerConfig {
        &self.config
    }

    /// Recover the underlying reader. Bytes buffered but not yet scanned are lost.
    pub fn into_inner(self) -> R {
        self.cursor.into_inner()
    }

    fn step(&mut self) -> Option<Result<Message>> {
        if self.is_exhausted() {
            return None;
        }
        match self.read_message() {
            Ok(Some(message)) => {
                trace!(
                    command = %message.command,
                    bytes = message.raw.len(),
                    "scanned message"
                );
                Some(Ok(message))
            }
            Ok(None) => {
                trace!("end of input");
                self.state = State::Exhausted(None);
                None
            }
            Err(e) => {
                debug!(error = %e, "scanner stopped");
                self.state = State::Exhausted(None);
                Some(Err(e))
            }
        }
    }

    fn read_message(&mut self) -> Result<Option<Message>> {
        let cursor = &mut self.cursor;
        cursor.begin_message();

        let mut ch = match cursor.read()? {
            Some(ch) => ch,
            None => return Ok(None),
        };

        let mut tags = None;
        if ch == '@' {
            cursor.enter_tags();
            tags = Some(cursor.read_tags(self.config.tag_budget)?);
            cursor.reset_checkpoint();
            ch = cursor.read_required()?;
        }

        let prefix = if ch == ':' {
            cursor.read_prefix()?
        } else {
            cursor.unread()?;
            String::new()
        };

        let command = cursor.read_command()?;
        if command.is_empty() {
            return Err(MalformedKind::MissingCommand.into());
        }

        let params = match cursor.line_end()? {
            LineEnd::End => Vec::new(),
            LineEnd::NotEnd => cursor.read_params(String::new())?,
            LineEnd::StrayCr => cursor.read_params("\r".to_owned())?,
        };

        Ok(Some(Message {
            raw: cursor.take_raw(),
            tags,
            prefix,
            command,
            params,
        }))
    }
}

impl<R: Read> Iterator for Scanner<R> {
    type Item = Result<Message>;

    fn next(&mut self) -> Option<Self::Item> {
        self.step()
    }
}

impl<R: Read> std::iter::FusedIterator for Scanner<R> {}
