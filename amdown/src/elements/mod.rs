//! Document tree
//!
//!     A parsed document is a list of block-level [`Element`]s. Text inside
//!     blocks is [`InlineText`], a sequence of [`InlineNode`]s that nest for
//!     formatting. The tree is built once by the parser and only read after.
//!
//!     Every inline node can project itself to raw text (formatting stripped,
//!     whitespace collapsed) and every element lists its children as [`Node`]s
//!     for generic traversal.

mod block;
mod inline;
mod table;

pub use block::{
    BlockQuote, Callout, CalloutKind, Card, CodeBlock, Element, Heading, HtmlComment, Image,
    LayoutDirective, LinkList, LinkedImage, ListBlock, ListItem, ListOrdering, Node, Paragraph,
    TaskItem, TaskList, TaskStatus,
};
pub use inline::{Hyperlink, InlineNode, InlineText, LINE_BREAK_MARKER};
pub use table::Table;

use crate::frontmatter::Metadata;
use serde::Serialize;

/// A parsed document: its front matter and its block elements.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Document {
    pub metadata: Metadata,
    pub elements: Vec<Element>,
}

impl Document {
    pub fn new(metadata: Metadata, elements: Vec<Element>) -> Self {
        Self { metadata, elements }
    }

    /// Front matter value for `key`.
    pub fn meta(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).map(String::as_str)
    }
}
