//! Sequential line reader with one line of lookahead
//!
//!     A [`LineSource`] wraps a [`LineStream`] and keeps exactly one buffered
//!     ("peeked") line. Refilling the buffer is the only operation that advances
//!     the underlying stream, so the parser can look at the next line, decide
//!     which matcher owns it, and only then consume it.
//!
//!     Two streams are provided: [`ListLines`] over in-memory text and
//!     [`FileLines`] over a file. The file stream releases its handle as soon as
//!     it reaches the end and keeps returning `None` afterwards.

use crate::error::{Error, Result};
use std::collections::VecDeque;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::warn;

/// A source of raw lines (without trailing newline).
pub trait LineStream {
    /// Returns the next line, or `None` once the stream is exhausted.
    fn next_line(&mut self) -> Option<String>;
}

/// Lines held in memory.
#[derive(Debug, Default, Clone)]
pub struct ListLines {
    lines: VecDeque<String>,
}

impl ListLines {
    pub fn new(lines: Vec<String>) -> Self {
        Self {
            lines: lines.into(),
        }
    }
}

impl LineStream for ListLines {
    fn next_line(&mut self) -> Option<String> {
        self.lines.pop_front()
    }
}

/// Lines read lazily from a file.
#[derive(Debug)]
pub struct FileLines {
    reader: Option<BufReader<File>>,
}

impl FileLines {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| Error::io(path, e))?;
        Ok(Self {
            reader: Some(BufReader::new(file)),
        })
    }
}

impl LineStream for FileLines {
    fn next_line(&mut self) -> Option<String> {
        let reader = self.reader.as_mut()?;
        let mut line = String::new();
        match reader.read_line(&mut line) {
            Ok(0) => {
                self.reader = None;
                None
            }
            Ok(_) => {
                if line.ends_with('\n') {
                    line.pop();
                    if line.ends_with('\r') {
                        line.pop();
                    }
                }
                Some(line)
            }
            Err(err) => {
                warn!(error = %err, "stopped reading file early");
                self.reader = None;
                None
            }
        }
    }
}

/// One-line lookahead reader over a [`LineStream`].
#[derive(Debug)]
pub struct LineSource<S> {
    stream: S,
    peeked: Option<String>,
}

impl LineSource<ListLines> {
    /// Reader over an owned list of lines.
    pub fn from_lines(lines: Vec<String>) -> Self {
        Self::new(ListLines::new(lines))
    }

    /// Reader over the lines of a string.
    pub fn from_text(text: &str) -> Self {
        Self::from_lines(text.lines().map(str::to_string).collect())
    }
}

impl LineSource<FileLines> {
    /// Reader over a file. A missing file yields [`Error::DocumentNotFound`].
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::new(FileLines::open(path)?))
    }
}

impl<S: LineStream> LineSource<S> {
    pub fn new(mut stream: S) -> Self {
        let peeked = stream.next_line();
        Self { stream, peeked }
    }

    /// True once every line has been consumed.
    pub fn at_end(&self) -> bool {
        self.peeked.is_none()
    }

    /// The next line, without consuming it.
    pub fn peek(&self) -> Option<&str> {
        self.peeked.as_deref()
    }

    /// Discards the next line.
    pub fn skip(&mut self) {
        if self.peeked.is_some() {
            self.refill();
        }
    }

    /// Consumes and returns the next line. With `skip_blank`, whitespace-only
    /// lines in front of it are discarded first.
    pub fn read(&mut self, skip_blank: bool) -> Option<String> {
        if skip_blank {
            while self.peek().is_some_and(|line| line.trim().is_empty()) {
                self.refill();
            }
        }
        let line = self.peeked.take()?;
        self.refill();
        Some(line)
    }

    /// Reads up to `count` lines (fewer at the end of input).
    pub fn read_n(&mut self, count: usize, skip_blank: bool) -> Vec<String> {
        let mut lines = Vec::with_capacity(count);
        while lines.len() < count {
            match self.read(skip_blank) {
                Some(line) => lines.push(line),
                None => break,
            }
        }
        lines
    }

    /// Reads lines until one satisfies `stop`. The stopping line is consumed and
    /// returned last when `include_stop` is set, otherwise it stays buffered.
    /// Always terminates at the end of input, with or without a match.
    pub fn read_until<P>(&mut self, stop: P, include_stop: bool) -> Vec<String>
    where
        P: Fn(&str) -> bool,
    {
        let mut lines = Vec::new();
        while let Some(line) = self.peek() {
            if stop(line) {
                if include_stop {
                    if let Some(line) = self.read(false) {
                        lines.push(line);
                    }
                }
                break;
            }
            if let Some(line) = self.read(false) {
                lines.push(line);
            }
        }
        lines
    }

    fn refill(&mut self) {
        self.peeked = self.stream.next_line();
    }
}
