//! HTML page format
//!
//! Renders with the base strategy. In standalone mode (the default) the body
//! is wrapped in a full HTML5 page:
//!
//! - `css/baseline.css` is always inlined
//! - `--extra-custom-css <path>` appends a stylesheet after it
//! - the title comes from `--extra-title`, then the `title` metadata
//!
//! With `--extra-standalone false` only the body fragment is emitted, for
//! embedding into an existing page.

use crate::elements::Document;
use crate::error::Result;
use crate::format::{OutputFormat, RenderOptions, SerializedDocument};
use crate::render::{templates, HtmlStrategy, Renderer};
use std::collections::HashMap;

pub const BASELINE_CSS: &str = include_str!("../../../css/baseline.css");

/// Wraps `body` in a page with the baseline styles, any `extra` styles and
/// the custom stylesheet, in that order.
pub(crate) fn wrap_page(
    doc: &Document,
    options: &RenderOptions,
    body: &str,
    extra: &[&str],
) -> String {
    let mut styles = vec![BASELINE_CSS];
    styles.extend_from_slice(extra);
    if let Some(css) = options.custom_css.as_deref() {
        styles.push(css);
    }
    templates::document(&options.title_for(doc), body, &styles, &[])
}

#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlFormat;

impl HtmlFormat {
    pub fn render(&self, doc: &Document, options: &RenderOptions) -> String {
        let body = Renderer::with_mapper(HtmlStrategy, &options.context).render(&doc.elements);
        if options.standalone {
            wrap_page(doc, options, &body, &[])
        } else {
            body
        }
    }
}

impl OutputFormat for HtmlFormat {
    fn name(&self) -> &str {
        "html"
    }

    fn description(&self) -> &str {
        "HTML5 page with embedded CSS"
    }

    fn file_extensions(&self) -> &[&str] {
        &["html", "htm"]
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
