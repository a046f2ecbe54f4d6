//! Line-oriented response framing shared by every multi-line daemon query.
//!
//! A response block is a run of `key value` lines terminated by a blank line.
//! Each line may carry a `set ` or `tag ` prefix (in that order), which is
//! dropped before the key is looked at.

use std::io;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};

const SET_PREFIX: &str = "set ";
const TAG_PREFIX: &str = "tag ";

/// Classification of a single response line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseLine<'a> {
    /// Blank line, the block is complete
    End,
    /// A `key value` pair; `value` is everything after the first space
    Entry { key: &'a str, value: &'a str },
    /// Non-blank line without a space
    Skip,
}

impl<'a> ResponseLine<'a> {
    pub fn classify(raw: &'a str) -> Self {
        let line = raw.strip_prefix(SET_PREFIX).unwrap_or(raw);
        let line = line.strip_prefix(TAG_PREFIX).unwrap_or(line);
        let line = line.trim();

        if line.is_empty() {
            return ResponseLine::End;
        }

        match line.split_once(' ') {
            Some((key, value)) => ResponseLine::Entry { key, value },
            None => ResponseLine::Skip,
        }
    }
}

/// A complete blank-line-terminated response, terminator excluded
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseBlock {
    lines: Vec<String>,
}

impl ResponseBlock {
    /// Read lines until the terminating blank line.
    ///
    /// EOF before the terminator (including a final line without a newline)
    /// is reported as `UnexpectedEof`; nothing read so far is returned.
    ///
    /// Lines are raw bytes on the wire (file paths and tags need not be
    /// UTF-8); invalid sequences are replaced rather than failing the block.
    pub async fn read_from<R: AsyncBufRead + Unpin>(reader: &mut R) -> io::Result<Self> {
        let mut block = ResponseBlock::default();
        let mut raw = Vec::new();
        loop {
            raw.clear();
            let n = reader.read_until(b'\n', &mut raw).await?;
            if n == 0 || raw.last() != Some(&b'\n') {
                return Err(unterminated());
            }
            if block.accept(String::from_utf8_lossy(&raw).into_owned()) {
                return Ok(block);
            }
        }
    }

    /// Frame an already captured response. Text after the terminator is ignored.
    pub fn from_text(text: &str) -> io::Result<Self> {
        let mut block = ResponseBlock::default();
        for line in text.split_inclusive('\n') {
            if !line.ends_with('\n') {
                break;
            }
            if block.accept(line.to_string()) {
                return Ok(block);
            }
        }
        Err(unterminated())
    }

    /// Returns true once the terminator has been seen
    fn accept(&mut self, line: String) -> bool {
        if ResponseLine::classify(&line) == ResponseLine::End {
            return true;
        }
        self.lines.push(line);
        false
    }

    /// `key value` pairs in arrival order; lines without a space are skipped
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.lines
            .iter()
            .filter_map(|line| match ResponseLine::classify(line) {
                ResponseLine::Entry { key, value } => Some((key, value)),
                _ => None,
            })
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

fn unterminated() -> io::Error {
    io::Error::new(
        io::ErrorKind::UnexpectedEof,
        "connection closed before the end of the response block",
    )
}
