//! Look-ahead Line Source
//!
//! Reads the header one normalized line at a time and keeps a one-line
//! look-ahead buffer. Typedef and define translation peek at the next line
//! to decide between a single declaration and the start of a block; the
//! peeked line is not consumed until the loop asks for it.

use std::io::{self, BufRead};

use crate::helpers::starts_with_keyword;

pub struct LineSource<R> {
    reader: R,
    peeked: Option<Option<String>>,
    line_number: usize,
}

impl<R: BufRead> LineSource<R> {
    pub fn new(reader: R) -> Self {
        LineSource {
            reader,
            peeked: None,
            line_number: 0,
        }
    }

    /// 1-based number of the line most recently returned by [`next_line`](Self::next_line)
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Next trimmed line, or `None` at end of input
    pub fn next_line(&mut self) -> io::Result<Option<String>> {
        let line = match self.peeked.take() {
            Some(line) => line,
            None => self.read_normalized()?,
        };
        if line.is_some() {
            self.line_number += 1;
        }
        Ok(line)
    }

    /// Look at the next trimmed line without consuming it
    pub fn peek_line(&mut self) -> io::Result<Option<&str>> {
        if self.peeked.is_none() {
            let line = self.read_normalized()?;
            self.peeked = Some(line);
        }
        Ok(self.peeked.as_ref().and_then(|line| line.as_deref()))
    }

    fn read_normalized(&mut self) -> io::Result<Option<String>> {
        // Headers are not always UTF-8 (Latin-1 author names in comments);
        // invalid bytes become U+FFFD instead of failing the file.
        let mut buf = Vec::new();
        if self.reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&buf).trim().to_string()))
    }
}

/// Does the peeked line continue a run of typedefs?
pub fn check_next_is_typedef(next: Option<&str>) -> bool {
    next.map(|line| starts_with_keyword(line, "typedef"))
        .unwrap_or(false)
}

/// Does the peeked line continue a run of defines?
pub fn check_next_is_define(next: Option<&str>) -> bool {
    let Some(rest) = next.and_then(|line| line.strip_prefix('#')) else {
        return false;
    };
    let rest = rest.trim_start();
    starts_with_keyword(rest, "define") || starts_with_keyword(rest, "DEFINE")
}
