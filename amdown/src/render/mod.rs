//! HTML rendering
//!
//!     A [`Renderer`] walks the element tree and renders each node to a string,
//!     joining block siblings with newlines and concatenating inline nodes.
//!     Output modes differ only in a handful of node handlers, which live on a
//!     [`RenderStrategy`]:
//!
//!     - [`HtmlStrategy`]: the base web page rendering.
//!     - [`MenuStrategy`]: navigation menu (title, logo and buttons are captured).
//!     - [`PrintStrategy`]: print and PDF output (percent table widths, plain
//!       internal links, rasterised LaTeX).
//!
//!     Every strategy hook defaults to the base handler in [`html`], so a
//!     strategy overrides only what it changes.
//!
//!     Relative link and image addresses pass through the renderer's
//!     [`UrlMapper`]; external ones are emitted as written.
//!
//!     Code block newlines are swapped for a placeholder while blocks are
//!     assembled and indented, and restored once the whole output is built.

pub mod html;
mod menu;
mod print;
pub mod templates;
pub mod url;

pub use html::HtmlStrategy;
pub use menu::{render_menu, MenuStrategy};
pub use print::{LatexRasterizer, PrintStrategy};
pub use url::{is_relative, Unmapped, UrlMapper};

use crate::elements::{
    Element, Heading, Hyperlink, Image, InlineNode, InlineText, LinkedImage, ListBlock, Table,
};
use std::path::Path;
use tracing::warn;

/// Stands in for newlines inside code while output is assembled.
pub(crate) const NEWLINE_PLACEHOLDER: &str = "\u{1}NL\u{1}";

/// Handlers that differ between output modes.
pub trait RenderStrategy: Sized {
    fn heading(&self, r: &Renderer<'_, Self>, heading: &Heading) -> String {
        html::heading(r, heading)
    }

    fn image(&self, r: &Renderer<'_, Self>, image: &Image) -> String {
        html::image(r, image)
    }

    fn linked_image(&self, r: &Renderer<'_, Self>, linked: &LinkedImage) -> String {
        html::linked_image(r, linked)
    }

    fn list_block(&self, r: &Renderer<'_, Self>, list: &ListBlock) -> String {
        html::list_block(r, list)
    }

    fn hyperlink(&self, r: &Renderer<'_, Self>, link: &Hyperlink) -> String {
        html::hyperlink(r, link)
    }

    /// Per-column style for a table.
    fn table_widths(&self, table: &Table) -> Vec<String> {
        html::flex_widths(table)
    }

    fn latex(&self, r: &Renderer<'_, Self>, expr: &str, rendered: Option<&Path>) -> String {
        html::latex(r, expr, rendered)
    }
}

/// Tree walker parameterised by an output strategy and an address mapper.
pub struct Renderer<'m, S> {
    strategy: S,
    mapper: &'m dyn UrlMapper,
}

impl<S: RenderStrategy> Renderer<'static, S> {
    /// Renderer that leaves addresses untouched.
    pub fn new(strategy: S) -> Self {
        Renderer {
            strategy,
            mapper: &Unmapped,
        }
    }
}

impl<'m, S: RenderStrategy> Renderer<'m, S> {
    pub fn with_mapper(strategy: S, mapper: &'m dyn UrlMapper) -> Self {
        Renderer { strategy, mapper }
    }

    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    /// Renders a sequence of blocks into a finished HTML fragment.
    pub fn render(&self, elements: &[Element]) -> String {
        restore_newlines(&self.render_blocks(elements))
    }

    /// Renders blocks without restoring code newlines; for nesting.
    pub fn render_blocks(&self, elements: &[Element]) -> String {
        elements
            .iter()
            .map(|el| self.render_element(el))
            .filter(|html| !html.is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn render_element(&self, element: &Element) -> String {
        match element {
            Element::Heading(h) => self.strategy.heading(self, h),
            Element::HorizontalRule => "<hr>".to_string(),
            Element::Paragraph(p) => templates::paragraph(&self.render_inline(&p.inline)),
            Element::CodeBlock(code) => html::code_block(code),
            Element::BlockQuote(q) => {
                templates::block("blockquote", None, &self.render_blocks(&q.children))
            }
            Element::Callout(c) => templates::callout(
                c.kind.as_str(),
                &c.symbol,
                &self.render_inline(&c.title),
                &self.render_blocks(&c.children),
            ),
            Element::Card(card) => {
                templates::card(&card.title, &self.render_blocks(&card.children))
            }
            Element::LinkList(list) => {
                templates::block("div", Some("link-list"), &self.render_blocks(&list.children))
            }
            Element::ListBlock(list) => self.strategy.list_block(self, list),
            Element::TaskList(tasks) => html::task_list(self, tasks),
            Element::Table(table) => html::table(self, table),
            Element::Image(img) => self.strategy.image(self, img),
            Element::LinkedImage(li) => self.strategy.linked_image(self, li),
            Element::HtmlComment(comment) => html::html_comment(comment),
            Element::ListItem(_) | Element::TaskItem(_) => self.unrendered(element),
        }
    }

    pub fn render_inline(&self, text: &InlineText) -> String {
        text.children.iter().map(|n| self.render_node(n)).collect()
    }

    pub fn render_node(&self, node: &InlineNode) -> String {
        match node {
            InlineNode::RawText { text } => text.clone(),
            InlineNode::Bold { inner } => format!("<b>{}</b>", self.render_inline(inner)),
            InlineNode::Italics { inner } => format!("<i>{}</i>", self.render_inline(inner)),
            InlineNode::BoldItalics { inner } => {
                format!("<b><i>{}</i></b>", self.render_inline(inner))
            }
            InlineNode::Code { text } => format!("<code>{}</code>", templates::escape(text)),
            InlineNode::Strikethrough { inner } => format!("<s>{}</s>", self.render_inline(inner)),
            InlineNode::Highlight { inner } => {
                format!("<mark>{}</mark>", self.render_inline(inner))
            }
            InlineNode::LatexMath {
                expr,
                rendered_image,
            } => self.strategy.latex(self, expr, rendered_image.as_deref()),
            InlineNode::Tag { title } => format!(
                "<a class=\"tag\" href=\"\">{}</a>",
                templates::escape(title)
            ),
            InlineNode::Hyperlink(link) => self.strategy.hyperlink(self, link),
            InlineNode::LineBreak => "<br>".to_string(),
        }
    }

    /// Output address for a link.
    pub fn link_addr(&self, addr: &str) -> String {
        if is_relative(addr) {
            self.mapper.map_link(addr)
        } else {
            addr.to_string()
        }
    }

    /// Output address for an image or other media file.
    pub fn media_addr(&self, addr: &str) -> String {
        if is_relative(addr) {
            self.mapper.map_media(addr)
        } else {
            addr.to_string()
        }
    }

    fn unrendered(&self, element: &Element) -> String {
        warn!(
            kind = element.kind_name(),
            "no handler for element in this position"
        );
        let dump = format!("{element:#?}");
        templates::unrendered(&dump).replace('\n', NEWLINE_PLACEHOLDER)
    }
}

pub(crate) fn restore_newlines(html: &str) -> String {
    html.replace(NEWLINE_PLACEHOLDER, "\n")
}
