//! Line matcher table
//!
//! Elements that occupy exactly one line. A matcher returning `None` consumes
//! the line without producing anything (blank lines, `//` comments).

use super::compile;
use super::inline::parse_inline;
use crate::elements::{Element, Heading, HtmlComment, Image, LinkedImage};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use tracing::trace;

pub(super) struct LineMatcher {
    pub name: &'static str,
    pattern: Regex,
    build: fn(&Captures<'_>) -> Option<Element>,
}

impl LineMatcher {
    fn new(name: &'static str, pattern: &str, build: fn(&Captures<'_>) -> Option<Element>) -> Self {
        Self {
            name,
            pattern: compile(pattern),
            build,
        }
    }
}

fn text(caps: &Captures<'_>, i: usize) -> Option<String> {
    caps.get(i)
        .map(|m| m.as_str().trim().to_string())
        .filter(|s| !s.is_empty())
}

fn image(caps: &Captures<'_>, alt: usize, src: usize, title: usize, width: usize) -> Image {
    Image {
        alt: text(caps, alt).unwrap_or_default(),
        src: text(caps, src).unwrap_or_default(),
        title: text(caps, title),
        width: text(caps, width),
    }
}

pub(super) static LINE_MATCHERS: Lazy<Vec<LineMatcher>> = Lazy::new(|| {
    vec![
        LineMatcher::new("empty", r"^\s*$|^//", |_| None),
        LineMatcher::new(
            "heading",
            r"^(#{1,6})\s+(.*?)(?:\s*\{#([\w-]+)\})?\s*$",
            |c| {
                Some(Element::Heading(Heading {
                    weight: c[1].len() as u8,
                    title: parse_inline(c[2].trim()),
                    anchor_id: text(c, 3),
                }))
            },
        ),
        LineMatcher::new("rule", r"^(?:-{3,}|={3,}|\*{3,})\s*$", |_| {
            Some(Element::HorizontalRule)
        }),
        LineMatcher::new(
            "linked-image",
            r#"^\s*\[!\[([^\]]*)\]\(([^)\s]+)(?:\s+"([^"]*)")?\)(?:\{width=([^}]*)\})?\]\(([^)]*)\)\s*$"#,
            |c| {
                Some(Element::LinkedImage(LinkedImage {
                    image: image(c, 1, 2, 3, 4),
                    link_addr: text(c, 5).unwrap_or_default(),
                }))
            },
        ),
        LineMatcher::new(
            "image",
            r#"^\s*!\[([^\]|]*)\]\(([^)\s]+)(?:\s+"([^"]*)")?\)(?:\{width=([^}]*)\})?\s*$"#,
            |c| Some(Element::Image(image(c, 1, 2, 3, 4))),
        ),
        LineMatcher::new(
            "image-sized",
            r#"^\s*!\[([^\]|]*)\|([^\]]*)\]\(([^)\s]+)(?:\s+"([^"]*)")?\)\s*$"#,
            |c| Some(Element::Image(image(c, 1, 3, 4, 2))),
        ),
        LineMatcher::new("embed", r"^\s*!\[\[([^\]|]+)(?:\|([^\]]*))?\]\]\s*$", |c| {
            let src = text(c, 1).unwrap_or_default();
            Some(Element::Image(Image {
                alt: src.clone(),
                src,
                title: None,
                width: text(c, 2),
            }))
        }),
        LineMatcher::new("comment", r"^\s*<!--(.*)-->\s*$", |c| {
            Some(Element::HtmlComment(HtmlComment {
                raw: c[1].trim().to_string(),
            }))
        }),
    ]
});

/// Outcome of trying the line matchers on one line.
pub(super) enum LineMatch {
    /// No line matcher applies.
    NoMatch,
    /// The line was recognised; it produced an element or nothing at all.
    Matched(Option<Element>),
}

pub(super) fn match_line(line: &str) -> LineMatch {
    for matcher in LINE_MATCHERS.iter() {
        if let Some(caps) = matcher.pattern.captures(line) {
            trace!(matcher = matcher.name, "line matched");
            return LineMatch::Matched((matcher.build)(&caps));
        }
    }
    LineMatch::NoMatch
}
