//! Buffered line cursor

use std::fs::File;
use std::io::{self, BufRead, BufReader, Cursor};
use std::path::Path;

use crate::features::parsing::ports::LineReader;

const UTF8_BOM: char = '\u{feff}';

/// `LineReader` over any buffered byte source.
///
/// Strips `\n` / `\r\n` terminators and a leading UTF-8 byte-order mark.
/// Invalid UTF-8 surfaces as an `InvalidData` I/O error.
pub struct BufLineReader<R> {
    inner: R,
    line_number: usize,
}

impl<R: BufRead> BufLineReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            line_number: 0,
        }
    }
}

impl BufLineReader<BufReader<File>> {
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        Ok(Self::new(BufReader::new(File::open(path)?)))
    }
}

impl BufLineReader<Cursor<String>> {
    pub fn from_text(text: impl Into<String>) -> Self {
        Self::new(Cursor::new(text.into()))
    }
}

impl<R: BufRead + Send> LineReader for BufLineReader<R> {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.inner.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        self.line_number += 1;

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        if self.line_number == 1 && line.starts_with(UTF8_BOM) {
            line.remove(0);
        }

        Ok(Some(line))
    }

    fn line_number(&self) -> usize {
        self.line_number
    }
}
