//! Task lists, bulleted lists and numbered lists

use super::blocks::{BULLET_ITEM, NUMBERED_ITEM, TASK_ITEM};
use super::inline::parse_inline;
use super::parse_lines;
use crate::elements::{Element, ListBlock, ListItem, ListOrdering, TaskItem, TaskList, TaskStatus};
use crate::line_source::{LineSource, LineStream};
use regex::Regex;
use tracing::debug;

fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Reads consecutive task lines, skipping blank lines between them.
pub(super) fn parse_task_list<S: LineStream>(source: &mut LineSource<S>) -> Element {
    let mut items = Vec::new();
    while let Some(line) = source.peek() {
        if let Some(caps) = TASK_ITEM.captures(line) {
            let marker = caps[1].chars().next().unwrap_or(' ');
            items.push(TaskItem {
                text: parse_inline(caps.get(2).map_or("", |m| m.as_str()).trim()),
                status: TaskStatus::from_marker(marker),
            });
        } else if !is_blank(line) {
            break;
        }
        source.skip();
    }
    Element::TaskList(TaskList { items })
}

pub(super) fn parse_bulleted_list<S: LineStream>(source: &mut LineSource<S>) -> Element {
    parse_list(source, ListOrdering::Unordered, &BULLET_ITEM)
}

pub(super) fn parse_numbered_list<S: LineStream>(source: &mut LineSource<S>) -> Element {
    parse_list(source, ListOrdering::Ordered, &NUMBERED_ITEM)
}

/// Strips one level of indentation (a tab or four spaces).
fn dedent(line: &str) -> Option<&str> {
    line.strip_prefix('\t').or_else(|| line.strip_prefix("    "))
}

fn parse_list<S: LineStream>(
    source: &mut LineSource<S>,
    ordering: ListOrdering,
    item: &Regex,
) -> Element {
    let mut items = Vec::new();
    let mut nested: Vec<String> = Vec::new();

    while let Some(line) = source.peek() {
        if let Some(caps) = item.captures(line).filter(|_| !TASK_ITEM.is_match(line)) {
            let text = parse_inline(caps[1].trim());
            flush_nested(&mut nested, &mut items);
            items.push(Element::ListItem(ListItem { ordering, text }));
        } else if is_blank(line) {
            if !nested.is_empty() {
                nested.push(String::new());
            }
        } else if let Some(inner) = dedent(line) {
            nested.push(inner.to_string());
        } else {
            break;
        }
        source.skip();
    }
    flush_nested(&mut nested, &mut items);

    Element::ListBlock(ListBlock { ordering, items })
}

/// Parses buffered indented lines and appends them as siblings of the items.
fn flush_nested(nested: &mut Vec<String>, items: &mut Vec<Element>) {
    if nested.is_empty() {
        return;
    }
    let lines = std::mem::take(nested);
    debug!(lines = lines.len(), "parsing nested list content");
    items.extend(parse_lines(lines));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(text: &str) -> ListBlock {
        let mut src = LineSource::from_text(text);
        let el = if NUMBERED_ITEM.is_match(text) {
            parse_numbered_list(&mut src)
        } else {
            parse_bulleted_list(&mut src)
        };
        match el {
            Element::ListBlock(block) => block,
            other => panic!("expected list, got {other:?}"),
        }
    }

    #[test]
    fn nested_lines_become_sibling_blocks() {
        let block = list("- a\n\tNested line\n- b");
        assert_eq!(block.items.len(), 3);
        assert!(matches!(block.items[0], Element::ListItem(_)));
        let Element::Paragraph(p) = &block.items[1] else {
            panic!("expected paragraph, got {:?}", block.items[1]);
        };
        assert_eq!(p.inline.raw_text(), "Nested line");
        assert!(matches!(block.items[2], Element::ListItem(_)));
    }

    #[test]
    fn indented_items_form_a_nested_list() {
        let block = list("1. one\n    - sub a\n    - sub b\n2. two");
        assert_eq!(block.ordering, ListOrdering::Ordered);
        assert_eq!(block.items.len(), 3);
        let Element::ListBlock(inner) = &block.items[1] else {
            panic!("expected nested list");
        };
        assert_eq!(inner.ordering, ListOrdering::Unordered);
        assert_eq!(inner.items.len(), 2);
    }

    #[test]
    fn blank_lines_inside_are_skipped_and_text_ends_the_list() {
        let mut src = LineSource::from_text("* a\n\n+ b\nafter");
        let Element::ListBlock(block) = parse_bulleted_list(&mut src) else {
            panic!("expected list");
        };
        assert_eq!(block.items.len(), 2);
        assert_eq!(src.peek(), Some("after"));
    }

    #[test]
    fn task_lines_end_a_bulleted_list() {
        let mut src = LineSource::from_text("- a\n- [ ] task");
        let Element::ListBlock(block) = parse_bulleted_list(&mut src) else {
            panic!("expected list");
        };
        assert_eq!(block.items.len(), 1);
        assert_eq!(src.peek(), Some("- [ ] task"));
    }

    #[test]
    fn task_statuses() {
        let mut src = LineSource::from_text("- [x] Done\n* [?] Maybe\n- [ ] Todo\n\n- [X] Also");
        let Element::TaskList(tasks) = parse_task_list(&mut src) else {
            panic!("expected tasks");
        };
        let checked: Vec<bool> = tasks.items.iter().map(TaskItem::is_checked).collect();
        assert_eq!(checked, vec![true, true, false, true]);
        assert_eq!(tasks.items[0].text.raw_text(), "Done");
        assert!(src.at_end());
    }
}
