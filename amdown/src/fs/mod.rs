//! Filesystem collaborators
//!
//!     [`FileContext`] maps document-relative paths to disk paths and to site
//!     URLs. [`Directory`] carries the metadata shared by a folder of documents
//!     and [`MarkdownDoc`] ties a file, its metadata and its renderer together.
//!
//!     Nothing here is global: callers construct the context they need, and
//!     `FileContext::default()` is the empty one.

mod context;
mod directory;
mod document;

pub use context::{filename_to_title, simplify_path, FileContext, LocalPaths};
pub use directory::{find_file, Directory, METADATA_FILE};
pub use document::MarkdownDoc;
