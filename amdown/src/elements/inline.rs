//! Inline-level nodes
//!
//!     Inline text is a flat list of [`InlineNode`]s, each of which may wrap a
//!     nested [`InlineText`]. The parser builds it by splitting text around the
//!     highest-priority match, so the tree depth follows the number of nested
//!     formatting spans.

use serde::Serialize;
use std::path::PathBuf;

/// Text of the hard line break marker. Also what a [`InlineNode::LineBreak`]
/// contributes to raw text, so table widths can split on it.
pub const LINE_BREAK_MARKER: &str = "<br>";

/// A run of inline content.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InlineText {
    pub children: Vec<InlineNode>,
}

/// A hyperlink, produced by `[text](addr)`, `[text](addr "title")` and `[[target|alias]]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Hyperlink {
    pub text: InlineText,
    pub addr: String,
    pub title: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InlineNode {
    RawText {
        text: String,
    },
    Bold {
        inner: InlineText,
    },
    Italics {
        inner: InlineText,
    },
    BoldItalics {
        inner: InlineText,
    },
    Code {
        text: String,
    },
    Strikethrough {
        inner: InlineText,
    },
    Highlight {
        inner: InlineText,
    },
    LatexMath {
        expr: String,
        rendered_image: Option<PathBuf>,
    },
    Tag {
        title: String,
    },
    Hyperlink(Hyperlink),
    LineBreak,
}

impl InlineText {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inline text holding a single raw text leaf (or nothing, for an empty string).
    pub fn raw(text: impl Into<String>) -> Self {
        let mut inline = Self::new();
        inline.push(InlineNode::RawText { text: text.into() });
        inline
    }

    /// Concatenates several runs, flattening them into one.
    pub fn concat(parts: impl IntoIterator<Item = InlineText>) -> Self {
        let mut inline = Self::new();
        for part in parts {
            for node in part.children {
                inline.push(node);
            }
        }
        inline
    }

    /// Appends a node. Empty raw text is dropped.
    pub fn push(&mut self, node: InlineNode) {
        if let InlineNode::RawText { text } = &node {
            if text.is_empty() {
                return;
            }
        }
        self.children.push(node);
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Literal text with all formatting stripped and whitespace collapsed.
    pub fn raw_text(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            child.collect_raw(&mut out);
        }
        collapse_whitespace(&out)
    }

    /// Every hyperlink in this run, depth first.
    pub fn hyperlinks(&self) -> Vec<&Hyperlink> {
        let mut links = Vec::new();
        self.collect_links(&mut links);
        links
    }

    fn collect_links<'a>(&'a self, links: &mut Vec<&'a Hyperlink>) {
        for child in &self.children {
            match child {
                InlineNode::Hyperlink(link) => links.push(link),
                other => {
                    if let Some(inner) = other.inner() {
                        inner.collect_links(links);
                    }
                }
            }
        }
    }
}

impl InlineNode {
    /// The nested run for wrapping nodes (bold, italics, links, ...).
    pub fn inner(&self) -> Option<&InlineText> {
        match self {
            InlineNode::Bold { inner }
            | InlineNode::Italics { inner }
            | InlineNode::BoldItalics { inner }
            | InlineNode::Strikethrough { inner }
            | InlineNode::Highlight { inner } => Some(inner),
            InlineNode::Hyperlink(link) => Some(&link.text),
            InlineNode::RawText { .. }
            | InlineNode::Code { .. }
            | InlineNode::LatexMath { .. }
            | InlineNode::Tag { .. }
            | InlineNode::LineBreak => None,
        }
    }

    pub fn raw_text(&self) -> String {
        let mut out = String::new();
        self.collect_raw(&mut out);
        collapse_whitespace(&out)
    }

    fn collect_raw(&self, out: &mut String) {
        match self {
            InlineNode::RawText { text } | InlineNode::Code { text } => out.push_str(text),
            InlineNode::LatexMath { expr, .. } => out.push_str(expr),
            InlineNode::Tag { title } => out.push_str(title),
            InlineNode::LineBreak => out.push_str(LINE_BREAK_MARKER),
            other => {
                if let Some(inner) = other.inner() {
                    for child in &inner.children {
                        child.collect_raw(out);
                    }
                }
            }
        }
    }

    /// Short label used by the tree inspector.
    pub fn kind_name(&self) -> &'static str {
        match self {
            InlineNode::RawText { .. } => "text",
            InlineNode::Bold { .. } => "bold",
            InlineNode::Italics { .. } => "italics",
            InlineNode::BoldItalics { .. } => "bold-italics",
            InlineNode::Code { .. } => "code",
            InlineNode::Strikethrough { .. } => "strikethrough",
            InlineNode::Highlight { .. } => "highlight",
            InlineNode::LatexMath { .. } => "latex",
            InlineNode::Tag { .. } => "tag",
            InlineNode::Hyperlink(_) => "link",
            InlineNode::LineBreak => "break",
        }
    }
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
