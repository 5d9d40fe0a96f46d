//! Error types for parse, render and export operations

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading, rendering or exporting documents.
///
/// Malformed markdown is never an error: the parser always degrades to literal
/// text. The variants here cover the I/O boundary and the output backends.
#[derive(Debug, Error)]
pub enum Error {
    /// The requested document does not exist
    #[error("Document not found: {}", .0.display())]
    DocumentNotFound(PathBuf),
    /// The document exists but could not be read or written
    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Format not found in registry
    #[error("Format '{0}' not found")]
    FormatNotFound(String),
    /// Format does not support the requested operation
    #[error("Operation not supported: {0}")]
    NotSupported(String),
    /// Error while assembling output
    #[error("Render error: {0}")]
    Render(String),
    /// An external backend (PDF, rasterizer) failed
    #[error("Backend error: {0}")]
    Backend(String),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Error::DocumentNotFound(path)
        } else {
            Error::Io { path, source }
        }
    }

    /// True when the error signals an absent document rather than a failure.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::DocumentNotFound(_))
    }
}
