use super::inline::parse_inline;
use crate::elements::{Element, Paragraph, LINE_BREAK_MARKER};

/// Collects the literal lines of one paragraph.
///
/// Lines are joined with a single space. A line ending in `\` or `<br>` ends
/// with a hard break instead. The text is parsed once, in [`finish`](Self::finish).
#[derive(Debug, Default)]
pub(super) struct ParagraphBuilder {
    text: String,
}

impl ParagraphBuilder {
    pub fn push_line(&mut self, line: &str) {
        let line = line.trim();
        let (content, hard_break) = match line
            .strip_suffix('\\')
            .or_else(|| line.strip_suffix(LINE_BREAK_MARKER))
        {
            Some(content) => (content.trim_end(), true),
            None => (line, false),
        };
        if !self.text.is_empty() && !self.text.ends_with(LINE_BREAK_MARKER) {
            self.text.push(' ');
        }
        self.text.push_str(content);
        if hard_break {
            self.text.push_str(LINE_BREAK_MARKER);
        }
    }

    /// Parses the collected text. Empty builders yield nothing.
    pub fn finish(self) -> Option<Element> {
        let text = self.text.trim_end_matches(LINE_BREAK_MARKER).trim_end();
        if text.is_empty() {
            return None;
        }
        Some(Element::Paragraph(Paragraph {
            inline: parse_inline(text),
        }))
    }

    /// Finishes the open paragraph, if any, into `out` and starts a new one.
    pub fn flush_into(&mut self, out: &mut Vec<Element>) {
        if let Some(paragraph) = std::mem::take(self).finish() {
            out.push(paragraph);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::InlineNode;

    fn finish(lines: &[&str]) -> Option<Element> {
        let mut builder = ParagraphBuilder::default();
        for line in lines {
            builder.push_line(line);
        }
        builder.finish()
    }

    #[test]
    fn lines_join_with_a_space() {
        let Some(Element::Paragraph(p)) = finish(&["one", "  two  "]) else {
            panic!("expected paragraph");
        };
        assert_eq!(p.inline.raw_text(), "one two");
    }

    #[test]
    fn backslash_and_br_force_breaks() {
        let Some(Element::Paragraph(p)) = finish(&["one\\", "two<br>", "three"]) else {
            panic!("expected paragraph");
        };
        let breaks = p
            .inline
            .children
            .iter()
            .filter(|n| matches!(n, InlineNode::LineBreak))
            .count();
        assert_eq!(breaks, 2);
        assert_eq!(p.inline.raw_text(), "one<br>two<br>three");
    }

    #[test]
    fn trailing_break_is_dropped() {
        let Some(Element::Paragraph(p)) = finish(&["last\\"]) else {
            panic!("expected paragraph");
        };
        assert_eq!(p.inline.children.len(), 1);
    }

    #[test]
    fn empty_builder_finishes_to_nothing() {
        assert_eq!(ParagraphBuilder::default().finish(), None);
    }
}
