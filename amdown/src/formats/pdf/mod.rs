//! PDF export built on top of the print format + an HTML-to-PDF backend.
//!
//! The document is rendered as a standalone print page, page-size specific
//! CSS is picked from `--extra-size` (`a4` or `mobile`), and the backend turns
//! the page into PDF bytes. The default backend shells out to a headless
//! Chrome/Chromium binary.

mod chrome;

pub use chrome::{resolve_chrome_binary, ChromePdfBackend};

use super::print::PrintFormat;
use crate::elements::Document;
use crate::error::{Error, Result};
use crate::format::{OutputFormat, RenderOptions, SerializedDocument};
use std::collections::HashMap;
use tracing::debug;

/// Converts a complete HTML page into PDF bytes.
pub trait PdfBackend {
    /// `stylesheets` are injected into the page head before conversion.
    fn html_to_pdf(&self, html: &str, stylesheets: &[&str]) -> Result<Vec<u8>>;
}

/// Page geometry for PDF output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PageSize {
    #[default]
    A4,
    Mobile,
}

impl PageSize {
    pub fn from_options(options: &HashMap<String, String>) -> Result<Self> {
        match options.get("size").map(|s| s.to_lowercase()) {
            None => Ok(PageSize::A4),
            Some(size) => match size.as_str() {
                "" | "a4" => Ok(PageSize::A4),
                "mobile" => Ok(PageSize::Mobile),
                other => Err(Error::NotSupported(format!(
                    "Unknown PDF size '{other}' (expected a4 or mobile)"
                ))),
            },
        }
    }

    pub fn print_css(&self) -> &'static str {
        match self {
            PageSize::A4 => "@page { size: 210mm 297mm; margin: 18mm; }\nbody { margin: 0; }\n",
            PageSize::Mobile => {
                "@page { size: 90mm 160mm; margin: 5mm; }\nbody { margin: 0; }\n.content { max-width: calc(90mm - 10mm); }\n"
            }
        }
    }
}

/// Print rendering handed to a [`PdfBackend`].
pub struct PdfFormat {
    print: PrintFormat,
    backend: Box<dyn PdfBackend + Send + Sync>,
}

impl Default for PdfFormat {
    fn default() -> Self {
        Self::new(PrintFormat::new(), ChromePdfBackend::default())
    }
}

impl PdfFormat {
    pub fn new(print: PrintFormat, backend: impl PdfBackend + Send + Sync + 'static) -> Self {
        Self {
            print,
            backend: Box::new(backend),
        }
    }
}

impl OutputFormat for PdfFormat {
    fn name(&self) -> &str {
        "pdf"
    }

    fn description(&self) -> &str {
        "Print HTML converted to PDF via headless Chrome"
    }

    fn file_extensions(&self) -> &[&str] {
        &["pdf"]
    }

    fn serialize_with_options(
        &self,
        doc: &Document,
        options: &HashMap<String, String>,
    ) -> Result<SerializedDocument> {
        let size = PageSize::from_options(options)?;
        let mut render = RenderOptions::from_map(options)?;
        render.standalone = true;
        let html = self.print.render(doc, &render);
        debug!(?size, bytes = html.len(), "converting print page to PDF");
        let pdf = self.backend.html_to_pdf(&html, &[size.print_css()])?;
        Ok(SerializedDocument::Binary(pdf))
    }
}

/// Inserts a `<style>` element per stylesheet right before `</head>`.
pub fn inject_page_css(html: &str, stylesheets: &[&str]) -> String {
    let style_tags: String = stylesheets
        .iter()
        .map(|css| format!("<style data-amdown-pdf>\n{css}\n</style>"))
        .collect();
    match html.find("</head>") {
        Some(idx) => {
            let mut output = String::with_capacity(html.len() + style_tags.len());
            output.push_str(&html[..idx]);
            output.push_str(&style_tags);
            output.push_str(&html[idx..]);
            output
        }
        None => format!("{style_tags}{html}"),
    }
}
