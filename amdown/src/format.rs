//! Output format trait definition
//!
//! Every output mode is an [`OutputFormat`]: it takes a parsed [`Document`]
//! and produces text or bytes. Formats read their settings from a flat
//! string map so the CLI can pass `--extra-<key>` values straight through;
//! [`RenderOptions`] decodes the keys every HTML-producing format shares.

use crate::elements::Document;
use crate::error::{Error, Result};
use crate::fs::FileContext;
use std::collections::HashMap;

/// Serialized output produced by an [`OutputFormat`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SerializedDocument {
    /// UTF-8 text output (HTML fragments and pages)
    Text(String),
    /// Binary output (PDF)
    Binary(Vec<u8>),
}

impl SerializedDocument {
    /// Consume the serialized output and return the underlying bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        match self {
            SerializedDocument::Text(text) => text.into_bytes(),
            SerializedDocument::Binary(bytes) => bytes,
        }
    }
}

/// A named output mode.
pub trait OutputFormat: Send + Sync {
    /// The name of this format (e.g. "html", "menu", "pdf")
    fn name(&self) -> &str;

    fn description(&self) -> &str {
        ""
    }

    /// File extensions without the leading dot, used to pick a format from an
    /// output file name.
    fn file_extensions(&self) -> &[&str] {
        &[]
    }

    /// Serialize with default options.
    fn serialize(&self, doc: &Document) -> Result<String> {
        match self.serialize_with_options(doc, &HashMap::new())? {
            SerializedDocument::Text(text) => Ok(text),
            SerializedDocument::Binary(_) => Err(Error::NotSupported(format!(
                "Format '{}' produces binary output",
                self.name()
            ))),
        }
    }

    fn serialize_with_options(
        &self,
        doc: &Document,
        options: &HashMap<String, String>,
    ) -> Result<SerializedDocument>;
}

/// Options shared by the HTML-producing formats.
///
/// Keys: `standalone` (wrap in a full page, default true), `title`,
/// `custom-css` (a stylesheet path), `working-dir`, `url-path`, `media-path`.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    pub standalone: bool,
    pub title: Option<String>,
    pub custom_css: Option<String>,
    pub context: FileContext,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            standalone: true,
            title: None,
            custom_css: None,
            context: FileContext::default(),
        }
    }
}

impl RenderOptions {
    pub fn from_map(options: &HashMap<String, String>) -> Result<Self> {
        let custom_css = match options.get("custom-css").filter(|p| !p.is_empty()) {
            Some(path) => Some(std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?),
            None => None,
        };
        let mut context = FileContext::default();
        if let Some(dir) = options.get("working-dir") {
            context.working_dir = dir.into();
        }
        if let Some(url) = options.get("url-path") {
            context.url_path = url.clone();
        }
        if let Some(media) = options.get("media-path") {
            context.media_path = media.clone();
        }
        Ok(Self {
            standalone: parse_bool_flag(options, "standalone", true)?,
            title: options.get("title").cloned().filter(|t| !t.is_empty()),
            custom_css,
            context,
        })
    }

    /// Page title: the option, then the document's `title` metadata.
    pub fn title_for(&self, doc: &Document) -> String {
        self.title
            .clone()
            .or_else(|| doc.meta("title").map(str::to_string))
            .unwrap_or_default()
    }
}

/// Reads a boolean option. A key given without a value counts as true.
pub fn parse_bool_flag(
    options: &HashMap<String, String>,
    key: &str,
    default: bool,
) -> Result<bool> {
    let Some(value) = options.get(key) else {
        return Ok(default);
    };
    if value.is_empty() {
        return Ok(true);
    }
    match value.to_lowercase().as_str() {
        "true" | "1" | "yes" | "y" => Ok(true),
        "false" | "0" | "no" | "n" => Ok(false),
        other => Err(Error::NotSupported(format!(
            "Invalid boolean value '{other}' for --extra-{key}"
        ))),
    }
}
