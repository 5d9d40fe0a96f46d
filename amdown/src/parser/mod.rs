//! Markdown parser
//!
//!     The parser walks a [`LineSource`] once, top to bottom. For each line it
//!     tries, in this order:
//!
//!     1. the line matchers (blank line, heading, rule, images, comment), which
//!        consume exactly that line;
//!     2. the block matchers (custom block, callout, code, quote, task list,
//!        bulleted list, numbered list, table), which consume as many lines as
//!        the block needs;
//!     3. otherwise the line is literal text and joins the open paragraph.
//!
//!     Both kinds of match close the open paragraph first. Within each table the
//!     first registered matcher wins. Nothing in here fails: unrecognised syntax
//!     stays literal text.
//!
//!     Quote-like blocks and indented list content are parsed by calling back
//!     into [`parse_lines`] on the collected lines, so nesting depth follows the
//!     document.

mod blocks;
mod inline;
mod lines;
mod lists;
mod paragraph;

pub use inline::parse_inline;

use crate::elements::{Document, Element};
use crate::frontmatter::read_front_matter;
use crate::line_source::{LineSource, LineStream};
use blocks::BlockKind;
use lines::{match_line, LineMatch};
use paragraph::ParagraphBuilder;
use regex::Regex;

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|err| panic!("invalid matcher pattern {pattern:?}: {err}"))
}

/// Parses a whole document: leading front matter, then the body.
pub fn parse_document<S: LineStream>(source: &mut LineSource<S>) -> Document {
    let metadata = read_front_matter(source);
    let elements = parse_elements(source);
    Document::new(metadata, elements)
}

/// Parses every remaining line of `source` as block content.
pub fn parse_elements<S: LineStream>(source: &mut LineSource<S>) -> Vec<Element> {
    let mut elements = Vec::new();
    let mut paragraph = ParagraphBuilder::default();

    while let Some(line) = source.peek() {
        if let LineMatch::Matched(element) = match_line(line) {
            paragraph.flush_into(&mut elements);
            elements.extend(element);
            source.skip();
        } else if let Some(kind) = BlockKind::detect(line) {
            paragraph.flush_into(&mut elements);
            elements.push(kind.parse(source));
        } else {
            paragraph.push_line(line);
            source.skip();
        }
    }
    paragraph.flush_into(&mut elements);
    elements
}

/// Parses lines collected from an enclosing block as a nested document.
pub fn parse_lines(lines: Vec<String>) -> Vec<Element> {
    parse_elements(&mut LineSource::from_lines(lines))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::InlineText;

    fn parse(text: &str) -> Document {
        parse_document(&mut LineSource::from_text(text))
    }

    #[test]
    fn paragraphs_are_split_by_blank_lines_and_matchers() {
        let doc = parse("one\ntwo\n\nthree\n# Head\nfour");
        let kinds: Vec<_> = doc.elements.iter().map(Element::kind_name).collect();
        assert_eq!(kinds, vec!["paragraph", "paragraph", "heading", "paragraph"]);
        let Element::Paragraph(p) = &doc.elements[0] else {
            panic!("expected paragraph");
        };
        assert_eq!(p.inline.raw_text(), "one two");
    }

    #[test]
    fn block_closes_open_paragraph() {
        let doc = parse("intro\n- item");
        let kinds: Vec<_> = doc.elements.iter().map(Element::kind_name).collect();
        assert_eq!(kinds, vec!["paragraph", "list"]);
    }

    #[test]
    fn comments_are_dropped() {
        let doc = parse("// note to self\nvisible");
        assert_eq!(doc.elements.len(), 1);
    }

    #[test]
    fn front_matter_is_split_off() {
        let doc = parse("---\ntitle: Hello\n---\n# Body");
        assert_eq!(doc.meta("title"), Some("Hello"));
        assert_eq!(doc.elements.len(), 1);
    }

    #[test]
    fn later_rule_is_not_front_matter() {
        let doc = parse("text\n---\nmore");
        let kinds: Vec<_> = doc.elements.iter().map(Element::kind_name).collect();
        assert_eq!(kinds, vec!["paragraph", "rule", "paragraph"]);
        assert!(doc.metadata.is_empty());
    }

    #[test]
    fn nested_callout_inside_quote() {
        let doc = parse("> outer\n> > [!tip]\n> > inner");
        let Element::BlockQuote(q) = &doc.elements[0] else {
            panic!("expected quote");
        };
        assert!(matches!(q.children[1], Element::Callout(_)));
    }

    #[test]
    fn empty_input_gives_empty_document() {
        let doc = parse("");
        assert!(doc.elements.is_empty());
        assert_eq!(parse_lines(Vec::new()), Vec::<Element>::new());
        assert!(InlineText::new().is_empty());
    }
}
