//! Tokio codec that frames CRLF-terminated lines and decodes them as messages.

use bytes::BytesMut;
use tokio_util::codec::Decoder;
use tracing::debug;

use crate::error::{MalformedKind, ScanError};
use crate::message::Message;
use crate::scanner::{Scanner, ScannerConfig};

/// Decoder for use with `tokio_util::codec::FramedRead`.
///
/// Frames end at the first CRLF in the buffer. Each frame is decoded by a
/// [`Scanner`], so the same segment budgets and error kinds apply. A buffer
/// that grows past both budgets combined without a CRLF is rejected.
#[derive(Clone, Debug, Default)]
pub struct IrcCodec {
    config: ScannerConfig,
    /// Offset from which to resume searching for CRLF.
    next_index: usize,
}

impl IrcCodec {
    /// Codec with the default 512-byte segment budgets.
    pub fn new() -> Self {
        Self::with_config(ScannerConfig::new())
    }

    /// Codec with custom budgets.
    pub fn with_config(config: ScannerConfig) -> Self {
        Self {
            config,
            next_index: 0,
        }
    }
}

impl Decoder for IrcCodec {
    type Item = Message;
    type Error = ScanError;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Message>, ScanError> {
        let start = self.next_index.min(src.len());
        let found = src[start..]
            .windows(2)
            .position(|w| w == b"\r\n")
            .map(|pos| start + pos + 2);

        let end = match found {
            Some(end) => end,
            None => {
                let limit = self.config.line_budget();
                if src.len() > limit {
                    debug!(buffered = src.len(), limit, "unterminated line");
                    return Err(MalformedKind::LineTooLong { limit }.into());
                }
                // Keep the last byte in range in case it is the CR of a split CRLF.
                self.next_index = src.len().saturating_sub(1);
                return Ok(None);
            }
        };

        self.next_index = 0;
        let line = src.split_to(end);
        Scanner::with_config(&line[..], self.config)
            .next_message()?
            .map(Some)
            .ok_or(ScanError::UnexpectedEof)
    }

    fn decode_eof(&mut self, buf: &mut BytesMut) -> Result<Option<Message>, ScanError> {
        match self.decode(buf)? {
            Some(message) => Ok(Some(message)),
            None if buf.is_empty() => Ok(None),
            None => Err(ScanError::UnexpectedEof),
        }
    }
}
