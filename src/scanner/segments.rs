//! Segment readers: tag block, prefix, command, line end and parameters.
//!
//! Each reader drives the [`Cursor`] up to its own delimiter and leaves the
//! cursor positioned at the first character of the next segment.

use std::io::Read;

use crate::error::{MalformedKind, Result};
use crate::message::tags::{parse_tag_block, Tags};

use super::cursor::Cursor;

/// Outcome of probing for a CRLF terminator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum LineEnd {
    /// CRLF was found and consumed.
    End,
    /// The next character is not CR. Nothing was consumed.
    NotEnd,
    /// A CR not followed by LF. The CR stays consumed and belongs to the
    /// caller's content; the character after it was pushed back.
    StrayCr,
}

impl<R: Read> Cursor<R> {
    /// Skip a run of spaces. The first non-space is peeked, not consumed, so
    /// it is charged to whichever segment reads it next.
    pub(crate) fn skip_spaces(&mut self) -> Result<()> {
        while self.peek()? == Some(' ') {
            self.read()?;
        }
        Ok(())
    }

    /// Read the tag block after its `@` marker, up to the first space.
    ///
    /// `cap` bounds the accumulated tag text on its own, in addition to the
    /// cursor's segment budget.
    pub(crate) fn read_tags(&mut self, cap: usize) -> Result<Tags> {
        let mut block = String::new();
        loop {
            let ch = self.read_required()?;
            if ch == ' ' {
                break;
            }
            if block.len() >= cap {
                return Err(MalformedKind::TagSegmentTooLong { limit: cap }.into());
            }
            block.push(ch);
        }
        let tags = parse_tag_block(&block)?;
        self.skip_spaces()?;
        Ok(tags)
    }

    /// Read the prefix after its `:` marker, up to the first space.
    pub(crate) fn read_prefix(&mut self) -> Result<String> {
        let mut prefix = String::new();
        loop {
            match self.read_required()? {
                ' ' => break,
                ch => prefix.push(ch),
            }
        }
        self.skip_spaces()?;
        Ok(prefix)
    }

    /// Read the command, stopping at a space or before a CR.
    pub(crate) fn read_command(&mut self) -> Result<String> {
        let mut command = String::new();
        loop {
            match self.read_required()? {
                ' ' => break,
                '\r' => {
                    self.unread()?;
                    break;
                }
                ch => command.push(ch),
            }
        }
        self.skip_spaces()?;
        Ok(command)
    }

    /// Probe for CRLF, consuming it only when both characters match.
    pub(crate) fn line_end(&mut self) -> Result<LineEnd> {
        if self.read_required()? != '\r' {
            self.unread()?;
            return Ok(LineEnd::NotEnd);
        }
        if self.read_required()? == '\n' {
            return Ok(LineEnd::End);
        }
        self.unread()?;
        Ok(LineEnd::StrayCr)
    }

    /// Read parameters through the line terminator.
    ///
    /// `text` holds anything already consumed that belongs to the parameter
    /// text, such as a stray CR found while probing for the line end.
    pub(crate) fn read_params(&mut self, mut text: String) -> Result<Vec<String>> {
        loop {
            match self.line_end()? {
                LineEnd::End => break,
                LineEnd::NotEnd => text.push(self.read_required()?),
                LineEnd::StrayCr => text.push('\r'),
            }
        }
        Ok(split_params(&text))
    }
}

/// Split parameter text on single spaces.
///
/// Empty tokens from repeated spaces are dropped. The first token starting
/// with `:` begins the trailing parameter, which runs verbatim to the end of
/// the text.
pub(crate) fn split_params(text: &str) -> Vec<String> {
    let mut params = Vec::new();
    let mut offset = 0;
    for token in text.split(' ') {
        if token.starts_with(':') {
            params.push(text[offset + 1..].to_owned());
            break;
        }
        if !token.is_empty() {
            params.push(token.to_owned());
        }
        offset += token.len() + 1;
    }
    params
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScanError;
    use crate::scanner::ScannerConfig;

    fn cursor(input: &str) -> Cursor<&[u8]> {
        Cursor::new(input.as_bytes(), ScannerConfig::new())
    }

    #[test]
    fn test_split_params_collapses_spaces() {
        assert_eq!(split_params("bar    baz  quux"), vec!["bar", "baz", "quux"]);
    }

    #[test]
    fn test_split_params_trailing_preserves_spacing() {
        assert_eq!(
            split_params("foo :A string  with spaces   "),
            vec!["foo", "A string  with spaces   "]
        );
    }

    #[test]
    fn test_split_params_colon_inside_middle() {
        assert_eq!(
            split_params("#fo:oo :This is a test"),
            vec!["#fo:oo", "This is a test"]
        );
    }

    #[test]
    fn test_split_params_trailing_colon_kept() {
        assert_eq!(split_params("#ch ::starts"), vec!["#ch", ":starts"]);
        assert_eq!(split_params("#ch :"), vec!["#ch", ""]);
    }

    #[test]
    fn test_read_tags_stops_at_space() {
        let mut c = cursor("a=1;b   FOO");
        let tags = c.read_tags(512).unwrap();
        assert_eq!(tags.len(), 2);
        assert_eq!(c.read().unwrap(), Some('F'));
    }

    #[test]
    fn test_read_tags_eof() {
        let mut c = cursor("a=1;b");
        assert!(matches!(c.read_tags(512), Err(ScanError::UnexpectedEof)));
    }

    #[test]
    fn test_read_tags_buffer_cap() {
        let mut c = cursor("abcdef ");
        assert!(matches!(
            c.read_tags(4),
            Err(ScanError::Malformed(MalformedKind::TagSegmentTooLong { limit: 4 }))
        ));
    }

    #[test]
    fn test_read_prefix() {
        let mut c = cursor("nick!u@h  PING");
        assert_eq!(c.read_prefix().unwrap(), "nick!u@h");
        assert_eq!(c.read().unwrap(), Some('P'));
    }

    #[test]
    fn test_read_command_stops_before_cr() {
        let mut c = cursor("PING\r\n");
        assert_eq!(c.read_command().unwrap(), "PING");
        assert_eq!(c.line_end().unwrap(), LineEnd::End);
    }

    #[test]
    fn test_read_command_eof() {
        let mut c = cursor("PIN");
        assert!(matches!(c.read_command(), Err(ScanError::UnexpectedEof)));
    }

    #[test]
    fn test_line_end_variants() {
        let mut c = cursor("x\rx");
        assert_eq!(c.line_end().unwrap(), LineEnd::NotEnd);
        assert_eq!(c.read().unwrap(), Some('x'));
        assert_eq!(c.line_end().unwrap(), LineEnd::StrayCr);
        assert_eq!(c.read().unwrap(), Some('x'));
    }

    #[test]
    fn test_read_params_consumes_terminator() {
        let mut c = cursor("a b :c d\r\nNEXT");
        assert_eq!(c.read_params(String::new()).unwrap(), vec!["a", "b", "c d"]);
        assert_eq!(c.take_raw(), "a b :c d\r\n");
    }

    #[test]
    fn test_read_params_keeps_stray_cr() {
        let mut c = cursor("a\rb\r\n");
        assert_eq!(c.read_params(String::new()).unwrap(), vec!["a\rb"]);
    }

    #[test]
    fn test_read_params_eof() {
        let mut c = cursor("a b");
        assert!(matches!(
            c.read_params(String::new()),
            Err(ScanError::UnexpectedEof)
        ));
    }
}
