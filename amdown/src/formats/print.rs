//! Print format
//!
//! HTML meant for paper: relative links become plain text, media resolve to
//! local files under the working directory and `css/print.css` is inlined
//! after the baseline styles. This is also the input of the PDF format.

use super::html::wrap_page;
use crate::elements::Document;
use crate::error::Result;
use crate::format::{OutputFormat, RenderOptions, SerializedDocument};
use crate::render::{LatexRasterizer, PrintStrategy, Renderer};
use std::collections::HashMap;

pub const PRINT_CSS: &str = include_str!("../../css/print.css");

/// Print rendering, with an optional LaTeX rasteriser for math spans.
#[derive(Default)]
pub struct PrintFormat {
    rasterizer: Option<Box<dyn LatexRasterizer + Send + Sync>>,
}

impl PrintFormat {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rasterizer(rasterizer: impl LatexRasterizer + Send + Sync + 'static) -> Self {
        Self {
            rasterizer: Some(Box::new(rasterizer)),
        }
    }

    pub fn render(&self, doc: &Document, options: &RenderOptions) -> String {
        let strategy = match self.rasterizer.as_deref() {
            Some(raster) => PrintStrategy::with_rasterizer(raster),
            None => PrintStrategy::new(),
        };
        let local = options.context.local();
        let body = Renderer::with_mapper(strategy, &local).render(&doc.elements);
        if options.standalone {
            wrap_page(doc, options, &body, &[PRINT_CSS])
        } else {
            body
        }
    }
}

impl OutputFormat for PrintFormat {
    fn name(&self) -> &str {
        "print"
    }

    fn description(&self) -> &str {
        "Printable HTML (plain internal links, percent table widths)"
    }

    fn serialize_with_options(
        &self,
        doc: &Document,
        options: &HashMap<String, String>,
    ) -> Result<SerializedDocument> {
        let options = RenderOptions::from_map(options)?;
        Ok(SerializedDocument::Text(self.render(doc, &options)))
    }
}
