//! Character cursor over a byte stream.
//!
//! Decodes UTF-8 one character at a time, keeps a single character of
//! pushback, records the raw text of the message in progress and charges every
//! byte against the budget of the current segment.

use std::io::{self, BufRead, BufReader, Read};

use crate::error::{MalformedKind, Result, ScanError};

use super::config::{ScannerConfig, MAX_BODY_SEGMENT, MAX_TAG_SEGMENT};

/// Initial capacity of the raw buffer. Larger budgets grow it on demand.
const RAW_CAPACITY: usize = MAX_TAG_SEGMENT + MAX_BODY_SEGMENT;

/// The segment whose budget is currently being charged.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Segment {
    Tags,
    Body,
}

/// A decoded character and the number of source bytes it occupied.
type Unit = (char, usize);

pub(crate) struct Cursor<R> {
    src: BufReader<R>,
    config: ScannerConfig,
    segment: Segment,
    /// Bytes read since the last checkpoint.
    size: usize,
    raw: String,
    /// Most recent unit, available to `unread`.
    last: Option<Unit>,
    /// Unit handed back by `unread`, returned by the next `read`.
    pending: Option<Unit>,
    /// Continuation bytes of a rejected sequence still owed as U+FFFD.
    stray: usize,
}

impl<R: Read> Cursor<R> {
    pub(crate) fn new(src: R, config: ScannerConfig) -> Self {
        Self {
            src: BufReader::new(src),
            config,
            segment: Segment::Body,
            size: 0,
            raw: String::with_capacity(config.line_budget().min(RAW_CAPACITY)),
            last: None,
            pending: None,
            stray: 0,
        }
    }

    /// Start a fresh message: clears the raw text and the size counter.
    pub(crate) fn begin_message(&mut self) {
        self.raw.clear();
        self.size = 0;
        self.segment = Segment::Body;
        self.last = None;
    }

    /// Charge subsequent reads against the tag budget.
    pub(crate) fn enter_tags(&mut self) {
        self.segment = Segment::Tags;
    }

    /// Zero the size counter and switch to the body budget.
    pub(crate) fn reset_checkpoint(&mut self) {
        self.size = 0;
        self.segment = Segment::Body;
    }

    /// Read one character. `Ok(None)` means the source is drained.
    pub(crate) fn read(&mut self) -> Result<Option<char>> {
        let (ch, width) = match self.pending.take() {
            Some(unit) => unit,
            None => match self.decode()? {
                Some(unit) => unit,
                None => {
                    self.last = None;
                    return Ok(None);
                }
            },
        };

        self.last = Some((ch, width));
        self.raw.push(ch);
        self.size += width;

        let limit = self.budget();
        if self.size > limit {
            return Err(match self.segment {
                Segment::Tags => MalformedKind::TagSegmentTooLong { limit },
                Segment::Body => MalformedKind::BodyTooLong { limit },
            }
            .into());
        }
        Ok(Some(ch))
    }

    /// Read one character where end of input would cut a message short.
    pub(crate) fn read_required(&mut self) -> Result<char> {
        self.read()?.ok_or(ScanError::UnexpectedEof)
    }

    /// Look at the next character without consuming or charging it.
    pub(crate) fn peek(&mut self) -> Result<Option<char>> {
        if self.pending.is_none() {
            self.pending = self.decode()?;
        }
        Ok(self.pending.map(|(ch, _)| ch))
    }

    /// Push the last read character back. Only one level deep.
    pub(crate) fn unread(&mut self) -> Result<()> {
        if self.pending.is_some() {
            return Err(ScanError::InvalidUnread);
        }
        let (ch, width) = self.last.take().ok_or(ScanError::InvalidUnread)?;
        self.raw.pop();
        self.size -= width;
        self.pending = Some((ch, width));
        Ok(())
    }

    /// Hand over the raw text of the finished message.
    pub(crate) fn take_raw(&mut self) -> String {
        std::mem::take(&mut self.raw)
    }

    pub(crate) fn into_inner(self) -> R {
        self.src.into_inner()
    }

    fn budget(&self) -> usize {
        match self.segment {
            Segment::Tags => self.config.tag_budget,
            Segment::Body => self.config.body_budget,
        }
    }

    /// Decode the next character from the source.
    ///
    /// A byte that does not start or complete a valid sequence decodes to
    /// U+FFFD of width 1. Continuation bytes already consumed for a rejected
    /// sequence each follow as their own U+FFFD, so every invalid byte yields
    /// one replacement character.
    fn decode(&mut self) -> io::Result<Option<Unit>> {
        if self.stray > 0 {
            self.stray -= 1;
            return Ok(Some((char::REPLACEMENT_CHARACTER, 1)));
        }

        let lead = match self.peek_byte()? {
            Some(b) => b,
            None => return Ok(None),
        };
        self.src.consume(1);

        let width = utf8_width(lead);
        match width {
            0 => return Ok(Some((char::REPLACEMENT_CHARACTER, 1))),
            1 => return Ok(Some((char::from(lead), 1))),
            _ => {}
        }

        let mut bytes = [lead, 0, 0, 0];
        let mut filled = 1;
        while filled < width {
            match self.peek_byte()? {
                Some(b) if b & 0xC0 == 0x80 => {
                    bytes[filled] = b;
                    self.src.consume(1);
                    filled += 1;
                }
                _ => break,
            }
        }

        let decoded = std::str::from_utf8(&bytes[..filled])
            .ok()
            .and_then(|s| s.chars().next());
        match decoded {
            Some(ch) if filled == width => Ok(Some((ch, width))),
            _ => {
                self.stray = filled - 1;
                Ok(Some((char::REPLACEMENT_CHARACTER, 1)))
            }
        }
    }

    fn peek_byte(&mut self) -> io::Result<Option<u8>> {
        loop {
            match self.src.fill_buf() {
                Ok(buf) => return Ok(buf.first().copied()),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }
}

/// Encoded length implied by a UTF-8 lead byte, 0 for an invalid lead.
fn utf8_width(lead: u8) -> usize {
    match lead {
        0x00..=0x7F => 1,
        0xC2..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF4 => 4,
        _ => 0,
    }
}
