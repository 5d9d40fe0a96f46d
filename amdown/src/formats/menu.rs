//! Navigation menu format
//!
//! Always a fragment: the menu is meant to be inserted into the pages it
//! links, so the standalone wrapper does not apply.

use crate::elements::Document;
use crate::error::Result;
use crate::format::{OutputFormat, RenderOptions, SerializedDocument};
use crate::render::render_menu;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, Default)]
pub struct MenuFormat;

impl OutputFormat for MenuFormat {
    fn name(&self) -> &str {
        "menu"
    }

    fn description(&self) -> &str {
        "Navigation menu fragment (title, logo and link buttons)"
    }

    fn serialize_with_options(
        &self,
        doc: &Document,
        options: &HashMap<String, String>,
    ) -> Result<SerializedDocument> {
        let options = RenderOptions::from_map(options)?;
        Ok(SerializedDocument::Text(render_menu(
            &doc.elements,
            &options.context,
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_lines;

    #[test]
    fn menu_ignores_standalone() {
        let doc = Document::new(
            Default::default(),
            parse_lines(vec!["# Site".into(), "- [A](a.md)".into()]),
        );
        let html = MenuFormat.serialize(&doc).unwrap();
        assert!(!html.contains("<!DOCTYPE"));
        assert!(html.contains("menu-btn depth-0"));
    }
}
