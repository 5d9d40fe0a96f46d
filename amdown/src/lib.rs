//! Parser and HTML renderers for an extended, line-oriented markdown dialect
//!
//!     The dialect is markdown plus callouts (`> [!warning]`), custom blocks
//!     (`> [!!card|Title]`), tags (`#word`, `#[two words]`), wiki links and
//!     embeds, task lists, pipe tables and `$LaTeX$` spans. Documents are
//!     parsed line by line into an immutable element tree, then rendered to
//!     HTML in one of several output modes.
//!
//!     This is a pure lib: it powers the amdown CLI but never assumes a shell,
//!     so nothing in here prints, reads environment settings (other than the
//!     Chrome lookup of the PDF backend) or exits.
//!
//! Pipeline
//!
//!     line_source ──► parser ──► elements ──► render ──► formats
//!                       ▲                        ▲
//!                  frontmatter                 fs (FileContext)
//!
//!     .
//!     ├── error.rs          # Error enum
//!     ├── line_source.rs    # one-line lookahead over text or a file
//!     ├── frontmatter.rs    # `---` metadata block and key: value extraction
//!     ├── elements          # the document tree (block, inline, table)
//!     ├── parser            # ordered matcher tables and block parsers
//!     ├── render            # generic tree walk + html / menu / print strategies
//!     ├── format.rs         # OutputFormat trait
//!     ├── registry.rs       # FormatRegistry, selection by name
//!     ├── formats           # html, menu, print, pdf
//!     ├── fs                # FileContext, Directory, MarkdownDoc
//!     ├── inspect.rs        # treeviz output
//!     └── publish.rs        # render-and-write in one call
//!
//! Parsing
//!
//!     Matching is by priority, not position: the parser walks three ordered
//!     tables (line matchers, block matchers, inline matchers) and the first
//!     entry that matches anywhere wins. Malformed input never fails; it
//!     degrades to literal text. See [`parser`].
//!
//! Rendering
//!
//!     [`render::Renderer`] is one tree walk shared by all output modes. A
//!     [`render::RenderStrategy`] overrides the few node handlers a mode
//!     changes. Relative addresses go through a [`render::UrlMapper`], which
//!     [`fs::FileContext`] implements.
//!
//! Testing
//!
//!     tests
//!     ├── lib.rs          # mounts the modules below
//!     ├── parser/
//!     ├── render/
//!     ├── fs/
//!     └── pdf/
//!
//!     Rust does not discover tests in subdirectories on its own, hence the
//!     explicit mounts in `tests/lib.rs`.

pub mod elements;
pub mod error;
pub mod format;
pub mod formats;
pub mod frontmatter;
pub mod fs;
pub mod inspect;
pub mod line_source;
pub mod parser;
pub mod publish;
pub mod registry;
pub mod render;

pub use elements::{Document, Element, InlineNode, InlineText};
pub use error::{Error, Result};
pub use format::{OutputFormat, RenderOptions, SerializedDocument};
pub use fs::{FileContext, MarkdownDoc};
pub use registry::FormatRegistry;

use line_source::LineSource;
use std::path::Path;

/// Parses a document held in memory.
pub fn parse_str(text: &str) -> Document {
    parser::parse_document(&mut LineSource::from_text(text))
}

/// Parses a document from disk, streaming it line by line.
pub fn parse_file(path: impl AsRef<Path>) -> Result<Document> {
    let mut source = LineSource::open(path)?;
    Ok(parser::parse_document(&mut source))
}
