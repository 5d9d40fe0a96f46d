//! Format registry for renderer discovery and selection
//!
//! Formats are registered under their name; documents choose one through
//! their `format` metadata or the caller picks one by name or output file
//! extension.

use crate::elements::Document;
use crate::error::{Error, Result};
use crate::format::{OutputFormat, SerializedDocument};
use std::collections::HashMap;
use std::path::Path;

pub struct FormatRegistry {
    formats: HashMap<String, Box<dyn OutputFormat>>,
}

impl FormatRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        FormatRegistry {
            formats: HashMap::new(),
        }
    }

    /// Register a format, replacing any format of the same name.
    pub fn register<F: OutputFormat + 'static>(&mut self, format: F) {
        self.formats
            .insert(format.name().to_string(), Box::new(format));
    }

    pub fn get(&self, name: &str) -> Result<&dyn OutputFormat> {
        self.formats
            .get(name)
            .map(|f| f.as_ref())
            .ok_or_else(|| Error::FormatNotFound(name.to_string()))
    }

    pub fn has(&self, name: &str) -> bool {
        self.formats.contains_key(name)
    }

    /// All format names, sorted.
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formats.keys().cloned().collect();
        names.sort();
        names
    }

    /// Format whose extensions include the file's extension.
    pub fn detect_format_from_filename(&self, filename: &str) -> Option<String> {
        let extension = Path::new(filename).extension().and_then(|ext| ext.to_str())?;
        let mut names: Vec<&String> = self
            .formats
            .iter()
            .filter(|(_, format)| format.file_extensions().contains(&extension))
            .map(|(name, _)| name)
            .collect();
        names.sort();
        names.first().map(|name| name.to_string())
    }

    /// Format named by the document's `format` metadata; `html` otherwise,
    /// and for names nothing is registered under.
    pub fn format_for(&self, doc: &Document) -> Result<&dyn OutputFormat> {
        match doc.meta("format") {
            Some(name) if self.has(name) => self.get(name),
            _ => self.get("html"),
        }
    }

    /// Serialize to text with default options.
    pub fn serialize(&self, doc: &Document, format: &str) -> Result<String> {
        self.get(format)?.serialize(doc)
    }

    pub fn serialize_with_options(
        &self,
        doc: &Document,
        format: &str,
        options: &HashMap<String, String>,
    ) -> Result<SerializedDocument> {
        self.get(format)?.serialize_with_options(doc, options)
    }

    /// Create a registry with the built-in formats.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(crate::formats::HtmlFormat);
        registry.register(crate::formats::MenuFormat);
        registry.register(crate::formats::PrintFormat::new());
        #[cfg(feature = "native-export")]
        registry.register(crate::formats::PdfFormat::default());
        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
