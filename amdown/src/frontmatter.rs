//! Front matter and `key: value` metadata
//!
//! A document may open with a block delimited by two `---` lines. Each line of
//! the block of the form `key: value` becomes one metadata entry; everything
//! else in the block is ignored. Directory metadata files use the same
//! extractor.

use crate::line_source::{LineSource, LineStream};
use std::collections::BTreeMap;
use tracing::debug;

/// String-keyed document metadata.
pub type Metadata = BTreeMap<String, String>;

const DELIMITER: &str = "---";

fn is_delimiter(line: &str) -> bool {
    line.trim() == DELIMITER
}

/// Consumes a leading front matter block, if the source starts with one.
///
/// A block without its closing delimiter consumes the rest of the input and
/// yields empty metadata.
pub fn read_front_matter<S: LineStream>(source: &mut LineSource<S>) -> Metadata {
    if !source.peek().is_some_and(is_delimiter) {
        return Metadata::new();
    }
    source.skip();
    let mut block = source.read_until(is_delimiter, true);
    match block.pop() {
        Some(last) if is_delimiter(&last) => parse_metadata_lines(&block),
        _ => {
            debug!("front matter is not terminated, ignoring it");
            Metadata::new()
        }
    }
}

/// Parses metadata from a whole text: either a `---` block or, when the text
/// does not open with one, bare `key: value` lines.
pub fn parse_metadata_text(text: &str) -> Metadata {
    let mut source = LineSource::from_text(text);
    while source.peek().is_some_and(|line| line.trim().is_empty()) {
        source.skip();
    }
    if source.peek().is_some_and(is_delimiter) {
        return read_front_matter(&mut source);
    }
    let lines = source.read_until(|_| false, false);
    parse_metadata_lines(&lines)
}

/// Extracts `key: value` pairs. Quotes around values are dropped and lines
/// without a key are skipped.
pub fn parse_metadata_lines<L: AsRef<str>>(lines: &[L]) -> Metadata {
    lines
        .iter()
        .filter_map(|line| {
            let (key, value) = line.as_ref().split_once(':')?;
            let key = key.trim();
            if key.is_empty() {
                return None;
            }
            let value = value.trim().trim_matches(|c| c == '\'' || c == '"');
            Some((key.to_string(), value.trim().to_string()))
        })
        .collect()
}
