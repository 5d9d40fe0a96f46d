//! Inline matcher table
//!
//!     Matchers are tried in table order against the whole text. The first one
//!     with a match anywhere wins, even when a lower-priority pattern would
//!     match earlier in the text. The text is split into `before | span | after`,
//!     `before` is parsed on its own, the span becomes one node and the table
//!     runs again over `after`.
//!
//!     A constructor decides which capture groups are parsed recursively (link
//!     text, bold content, ...) and which are kept verbatim (addresses, tag
//!     names, code, LaTeX). Recursion only follows nesting and `before` parts,
//!     each strictly shorter than their parent.

use super::compile;
use crate::elements::{Hyperlink, InlineNode, InlineText};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use tracing::trace;

pub(super) struct InlineMatcher {
    pub name: &'static str,
    pattern: Regex,
    /// Capture group covering the text replaced by the node.
    span: usize,
    build: fn(&Captures<'_>) -> InlineNode,
    accept: fn(&Captures<'_>) -> bool,
}

impl InlineMatcher {
    fn new(
        name: &'static str,
        pattern: &str,
        span: usize,
        build: fn(&Captures<'_>) -> InlineNode,
    ) -> Self {
        Self {
            name,
            pattern: compile(pattern),
            span,
            build,
            accept: |_| true,
        }
    }

    /// Skips matches `accept` rejects; the search goes on from the next character.
    fn accepting(mut self, accept: fn(&Captures<'_>) -> bool) -> Self {
        self.accept = accept;
        self
    }

    /// Leftmost accepted match in `text` starting at or after `start`.
    fn find_at<'t>(&self, text: &'t str, mut start: usize) -> Option<Captures<'t>> {
        while start <= text.len() {
            let caps = self.pattern.captures_at(text, start)?;
            if (self.accept)(&caps) {
                return Some(caps);
            }
            let from = caps.get(0)?.start();
            start = from + text[from..].chars().next().map_or(1, char::len_utf8);
        }
        None
    }
}

/// Emphasis runs that cannot appear inside a LaTeX span.
const MATH_BREAKERS: [&str; 3] = ["**", "__", "~~"];

/// First present group out of `groups`, for patterns with alternative delimiters.
fn group<'t>(caps: &Captures<'t>, groups: &[usize]) -> &'t str {
    groups
        .iter()
        .find_map(|&i| caps.get(i))
        .map_or("", |m| m.as_str())
}

fn parsed(caps: &Captures<'_>, groups: &[usize]) -> InlineText {
    parse_inline(group(caps, groups))
}

fn verbatim(caps: &Captures<'_>, groups: &[usize]) -> String {
    group(caps, groups).trim().to_string()
}

pub(super) static INLINE_MATCHERS: Lazy<Vec<InlineMatcher>> = Lazy::new(|| {
    vec![
        InlineMatcher::new(
            "titled-link",
            r#"\[([^\]]*)\]\(([^)\s]+)\s+"([^"]*)"\)"#,
            0,
            |c| {
                InlineNode::Hyperlink(Hyperlink {
                    text: parsed(c, &[1]),
                    addr: verbatim(c, &[2]),
                    title: Some(group(c, &[3]).to_string()),
                })
            },
        ),
        InlineMatcher::new("link", r"\[([^\]]*)\]\(([^)]*)\)", 0, |c| {
            InlineNode::Hyperlink(Hyperlink {
                text: parsed(c, &[1]),
                addr: verbatim(c, &[2]),
                title: None,
            })
        }),
        InlineMatcher::new(
            "wiki-link",
            r"\[\[([^\]|]+)(?:\|([^\]]+))?\]\]",
            0,
            |c| {
                let target = verbatim(c, &[1]);
                let text = match c.get(2) {
                    Some(alias) => parse_inline(alias.as_str().trim()),
                    None => InlineText::raw(target.clone()),
                };
                InlineNode::Hyperlink(Hyperlink {
                    text,
                    addr: target,
                    title: None,
                })
            },
        ),
        InlineMatcher::new("bracket-tag", r"#\[([^\]]+)\]", 0, |c| InlineNode::Tag {
            title: verbatim(c, &[1]),
        }),
        InlineMatcher::new("hashtag", r"(?:^|\s)(#([A-Za-z][\w/-]*))", 1, |c| {
            InlineNode::Tag {
                title: verbatim(c, &[2]),
            }
        }),
        InlineMatcher::new("latex", r"\$([^\s$](?:[^$]*[^\s$])?)\$", 0, |c| {
            InlineNode::LatexMath {
                expr: group(c, &[1]).to_string(),
                rendered_image: None,
            }
        })
        .accepting(|c| {
            let expr = group(c, &[1]);
            !MATH_BREAKERS.iter().any(|run| expr.contains(run))
        }),
        InlineMatcher::new(
            "bold-italics",
            r"\*\*\*([^*]+)\*\*\*|___([^_]+)___",
            0,
            |c| InlineNode::BoldItalics {
                inner: parsed(c, &[1, 2]),
            },
        ),
        InlineMatcher::new("bold", r"\*\*([^*]+)\*\*|__([^_]+)__", 0, |c| {
            InlineNode::Bold {
                inner: parsed(c, &[1, 2]),
            }
        }),
        InlineMatcher::new("italics", r"\*([^*]+)\*|_([^_]+)_", 0, |c| {
            InlineNode::Italics {
                inner: parsed(c, &[1, 2]),
            }
        }),
        InlineMatcher::new("strikethrough", r"~~([^~]+)~~", 0, |c| {
            InlineNode::Strikethrough {
                inner: parsed(c, &[1]),
            }
        }),
        InlineMatcher::new("highlight", r"==([^=]+)==", 0, |c| InlineNode::Highlight {
            inner: parsed(c, &[1]),
        }),
        InlineMatcher::new("double-code", r"``(.+?)``", 0, |c| InlineNode::Code {
            text: verbatim(c, &[1]),
        }),
        InlineMatcher::new("code", r"`([^`]+)`", 0, |c| InlineNode::Code {
            text: group(c, &[1]).to_string(),
        }),
        InlineMatcher::new("break", r"<br\s*/?>", 0, |_| InlineNode::LineBreak),
    ]
});

/// Parses a run of text into inline nodes.
///
/// Spans are taken left to right in a loop. Each matcher's next match is
/// kept until the scan passes its start, so a long run of spans costs one
/// search per span rather than one per matcher per span.
pub fn parse_inline(text: &str) -> InlineText {
    let mut inline = InlineText::new();
    let mut found: Vec<Option<Captures<'_>>> =
        INLINE_MATCHERS.iter().map(|m| m.find_at(text, 0)).collect();
    let mut pos = 0;
    while pos < text.len() {
        let winner = INLINE_MATCHERS
            .iter()
            .zip(found.iter_mut())
            .enumerate()
            .find_map(|(i, (matcher, slot))| {
                let stale = slot
                    .as_ref()
                    .and_then(|caps| caps.get(0))
                    .is_some_and(|m| m.start() < pos);
                if stale {
                    *slot = matcher.find_at(text, pos);
                }
                let span = slot.as_ref()?.get(matcher.span)?;
                Some((i, span))
            });
        let Some((i, span)) = winner else {
            break;
        };
        let matcher = &INLINE_MATCHERS[i];
        trace!(matcher = matcher.name, "inline span matched");
        if let Some(caps) = &found[i] {
            for before in parse_inline(&text[pos..span.start()]).children {
                inline.push(before);
            }
            inline.push((matcher.build)(caps));
        }
        pos = span.end();
        found[i] = matcher.find_at(text, pos);
    }
    if pos < text.len() {
        inline.push(InlineNode::RawText {
            text: text[pos..].to_string(),
        });
    }
    inline
}
