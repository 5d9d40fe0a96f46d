//! Document publishing pipeline.
//!
//! One call that picks a format, serializes and optionally writes the result.
//! Text formats return their content in memory unless an output path is
//! given; binary formats (PDF) need one.
//!
//! For more control over the conversion process, use [`FormatRegistry`] directly.

use crate::elements::Document;
use crate::error::{Error, Result};
use crate::format::SerializedDocument;
use crate::registry::FormatRegistry;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// What to publish and where.
///
/// ```ignore
/// let spec = PublishSpec::new(&document, "html")
///     .with_output_path("output.html")
///     .with_option("title", "Guide");
/// ```
#[derive(Debug)]
pub struct PublishSpec<'a> {
    pub document: &'a Document,
    /// Target format name. `None` uses the document's `format` metadata.
    pub format: Option<&'a str>,
    pub output: Option<PathBuf>,
    /// Format options, as passed by `--extra-<key>`.
    pub options: HashMap<String, String>,
}

impl<'a> PublishSpec<'a> {
    pub fn new(document: &'a Document, format: &'a str) -> Self {
        Self {
            document,
            format: Some(format),
            output: None,
            options: HashMap::new(),
        }
    }

    /// Publishes with the format the document's metadata asks for.
    pub fn from_metadata(document: &'a Document) -> Self {
        Self {
            document,
            format: None,
            output: None,
            options: HashMap::new(),
        }
    }

    pub fn with_output_path(mut self, path: impl AsRef<Path>) -> Self {
        self.output = Some(path.as_ref().to_path_buf());
        self
    }

    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PublishArtifact {
    InMemory(String),
    File(PathBuf),
}

/// Publishes with the default registry.
pub fn publish(spec: PublishSpec<'_>) -> Result<PublishArtifact> {
    publish_with(&FormatRegistry::with_defaults(), spec)
}

pub fn publish_with(registry: &FormatRegistry, spec: PublishSpec<'_>) -> Result<PublishArtifact> {
    let format = match spec.format {
        Some(name) => registry.get(name)?,
        None => registry.format_for(spec.document)?,
    };
    match format.serialize_with_options(spec.document, &spec.options)? {
        SerializedDocument::Text(text) => match spec.output {
            Some(path) => write_to_path(path, text.as_bytes()),
            None => Ok(PublishArtifact::InMemory(text)),
        },
        SerializedDocument::Binary(bytes) => {
            let path = spec.output.ok_or_else(|| {
                Error::NotSupported(format!(
                    "Format '{}' is binary and needs an output path",
                    format.name()
                ))
            })?;
            write_to_path(path, &bytes)
        }
    }
}

fn write_to_path(path: PathBuf, bytes: &[u8]) -> Result<PublishArtifact> {
    fs::write(&path, bytes).map_err(|err| Error::io(&path, err))?;
    Ok(PublishArtifact::File(path))
}
