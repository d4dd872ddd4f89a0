//! Byte-stream tokenizer for the punch card input format.
//!
//! Wraps any `Read` source with a single byte of lookahead and exposes the
//! handful of primitives the time parser and session loop need: whitespace
//! skipping, integer scanning, and a three-way "skip until" used both for
//! the `-` between a start and end time and for the `,` between intervals
//! on the same day.
//!
//! The cursor advances strictly left to right and never rewinds, matching
//! the single-pass console reading model of the program. Input is treated
//! as ASCII; bytes outside the expected vocabulary count as junk and are
//! skipped or reported by the callers.

use std::io::{self, Bytes, Read};

/// Result of skipping forward through the stream.
///
/// Every scan that can stop for more than one reason reports which
/// boundary it actually hit, because the session loop branches three ways
/// on it: found the delimiter (keep parsing), hit the end of the line
/// (resynchronize or finish the day), or ran out of input (terminate).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scan {
    /// The requested delimiter was found and consumed.
    Delimiter,
    /// A line feed was found and consumed before the delimiter.
    LineEnd,
    /// The stream ended before the delimiter or a line feed.
    EndOfInput,
}

/// A single-lookahead byte scanner over a readable stream.
pub struct Scanner<R: Read> {
    bytes: Bytes<R>,
    peeked: Option<u8>,
}

impl<R: Read> Scanner<R> {
    pub fn new(reader: R) -> Self {
        Self { bytes: reader.bytes(), peeked: None }
    }

    /// Returns the next byte without consuming it.
    pub fn peek(&mut self) -> io::Result<Option<u8>> {
        if self.peeked.is_none() {
            self.peeked = self.bytes.next().transpose()?;
        }
        Ok(self.peeked)
    }

    /// Consumes and returns the next byte.
    pub fn next_byte(&mut self) -> io::Result<Option<u8>> {
        match self.peeked.take() {
            Some(byte) => Ok(Some(byte)),
            None => self.bytes.next().transpose(),
        }
    }

    /// Skips spaces, tabs, carriage returns, and line feeds.
    ///
    /// Returns the first non-whitespace byte without consuming it, or
    /// `None` at end of input.
    pub fn skip_whitespace(&mut self) -> io::Result<Option<u8>> {
        while let Some(byte) = self.peek()? {
            if byte.is_ascii_whitespace() {
                self.next_byte()?;
            } else {
                return Ok(Some(byte));
            }
        }
        Ok(None)
    }

    /// Scans a decimal integer with an optional leading minus sign.
    ///
    /// Returns `None` without consuming anything when the cursor is not
    /// positioned at a sign or digit. The value saturates rather than
    /// overflowing on absurdly long digit runs; range validation happens
    /// in the time parser.
    pub fn read_integer(&mut self) -> io::Result<Option<i64>> {
        let mut negative = false;
        match self.peek()? {
            Some(b'-') => {
                // Only commit to the sign if a digit follows.
                self.next_byte()?;
                negative = true;
                match self.peek()? {
                    Some(byte) if byte.is_ascii_digit() => {}
                    _ => return Ok(None),
                }
            }
            Some(byte) if byte.is_ascii_digit() => {}
            _ => return Ok(None),
        }

        let mut value: i64 = 0;
        while let Some(byte) = self.peek()? {
            if !byte.is_ascii_digit() {
                break;
            }
            self.next_byte()?;
            value = value
                .saturating_mul(10)
                .saturating_add(i64::from(byte - b'0'));
        }
        Ok(Some(if negative { -value } else { value }))
    }

    /// Consumes bytes through the first `delim`, line feed, or end of
    /// input, whichever comes first, and reports which one was hit.
    ///
    /// The matched byte itself is consumed. Everything skipped over is
    /// discarded junk, which is exactly how the input format treats stray
    /// characters between a time and its delimiter.
    pub fn skip_until(&mut self, delim: u8) -> io::Result<Scan> {
        loop {
            match self.next_byte()? {
                Some(byte) if byte == delim => return Ok(Scan::Delimiter),
                Some(b'\n') => return Ok(Scan::LineEnd),
                Some(_) => {}
                None => return Ok(Scan::EndOfInput),
            }
        }
    }

    /// Discards the rest of the current line.
    ///
    /// Used to resynchronize after a malformed entry. Reports whether a
    /// line feed was found or the stream ended first.
    pub fn flush_line(&mut self) -> io::Result<Scan> {
        loop {
            match self.next_byte()? {
                Some(b'\n') => return Ok(Scan::LineEnd),
                Some(_) => {}
                None => return Ok(Scan::EndOfInput),
            }
        }
    }
}
