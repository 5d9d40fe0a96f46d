//! Treeviz: a text picture of a parsed document
//!
//! One node per line, nesting drawn with box connectors, two columns per
//! level:
//!
//! ```text
//! ⧉ document
//! ├─ § h1 Getting started
//! ├─ ¶ Install the tool, then run…
//! └─ ☰ 2 items
//!   ├─ • First
//!   └─ • Second
//! ```
//!
//! Labels are cut to 30 characters. With `show_inlines` each text run is
//! expanded into its inline nodes as well.

use crate::elements::{Document, Element, InlineNode, InlineText, Node, TaskItem};

const LABEL_WIDTH: usize = 30;

/// Icon for a node kind, as named by `kind_name()`.
pub fn get_icon(kind: &str) -> &'static str {
    match kind {
        "document" => "⧉",
        "heading" => "§",
        "rule" => "⎯",
        "paragraph" => "¶",
        "code" => "𝒱",
        "quote" => "❝",
        "callout" => "ⓘ",
        "card" => "▭",
        "link-list" => "⛓",
        "list" => "☰",
        "item" => "•",
        "tasks" => "☑",
        "task" => "☐",
        "table" => "▦",
        "image" | "linked-image" => "▣",
        "comment" => "\"",
        "inline" => "↵",
        "text" => "◦",
        "bold" => "𝐁",
        "italics" | "bold-italics" => "𝐼",
        "code-span" => "ƒ",
        "math" => "√",
        "tag" => "#",
        "link" => "⊕",
        _ => "○",
    }
}

pub fn treeviz(doc: &Document, show_inlines: bool) -> String {
    let mut out = format!("{} document\n", get_icon("document"));
    let nodes: Vec<Node<'_>> = doc.elements.iter().map(Node::Element).collect();
    write_nodes(&nodes, "", show_inlines, &mut out);
    out
}

fn write_nodes(nodes: &[Node<'_>], prefix: &str, show_inlines: bool, out: &mut String) {
    let visible: Vec<&Node<'_>> = nodes
        .iter()
        .filter(|node| show_inlines || !matches!(node, Node::Inline(_)))
        .collect();
    for (i, node) in visible.iter().enumerate() {
        let last = i + 1 == visible.len();
        let child_prefix = push_line(out, prefix, last, describe(node));
        match node {
            Node::Element(el) => write_nodes(&el.children(), &child_prefix, show_inlines, out),
            Node::TaskItem(task) => {
                write_nodes(&[Node::Inline(&task.text)], &child_prefix, show_inlines, out)
            }
            Node::Inline(text) => write_inlines(text, &child_prefix, out),
        }
    }
}

fn write_inlines(text: &InlineText, prefix: &str, out: &mut String) {
    for (i, node) in text.children.iter().enumerate() {
        let last = i + 1 == text.children.len();
        let label = match node {
            InlineNode::Hyperlink(link) => format!("{} → {}", link.text.raw_text(), link.addr),
            other => other.raw_text(),
        };
        let child_prefix = push_line(out, prefix, last, (inline_icon_kind(node), label));
        if let Some(inner) = node.inner() {
            write_inlines(inner, &child_prefix, out);
        }
    }
}

/// Writes one node line and returns the prefix for its children.
fn push_line(out: &mut String, prefix: &str, last: bool, (kind, label): (&str, String)) -> String {
    let connector = if last { "└─" } else { "├─" };
    out.push_str(&format!(
        "{prefix}{connector} {} {}\n",
        get_icon(kind),
        truncate(&label)
    ));
    format!("{prefix}{}", if last { "  " } else { "│ " })
}

fn inline_icon_kind(node: &InlineNode) -> &'static str {
    match node {
        InlineNode::Code { .. } => "code-span",
        InlineNode::LatexMath { .. } => "math",
        other => other.kind_name(),
    }
}

fn describe(node: &Node<'_>) -> (&'static str, String) {
    match node {
        Node::Element(el) => (el.kind_name(), element_label(el)),
        Node::TaskItem(task) => ("task", task_label(task)),
        Node::Inline(text) => ("inline", text.raw_text()),
    }
}

fn task_label(task: &TaskItem) -> String {
    format!("[{}] {}", task.status.marker(), task.text.raw_text())
}

fn element_label(element: &Element) -> String {
    match element {
        Element::Heading(h) => match &h.anchor_id {
            Some(id) => format!("h{} {} #{id}", h.weight, h.title.raw_text()),
            None => format!("h{} {}", h.weight, h.title.raw_text()),
        },
        Element::HorizontalRule => String::new(),
        Element::Paragraph(p) => p.inline.raw_text(),
        Element::CodeBlock(code) => format!(
            "{} ({} lines)",
            code.language.as_deref().unwrap_or("text"),
            code.text.lines().count()
        ),
        Element::BlockQuote(q) => format!("{} blocks", q.children.len()),
        Element::Callout(c) => format!("{} {}", c.kind.as_str(), c.title.raw_text()),
        Element::Card(card) => card.title.clone(),
        Element::LinkList(list) => format!("{} blocks", list.children.len()),
        Element::ListBlock(list) => format!("{} items", list.items.len()),
        Element::ListItem(item) => item.text.raw_text(),
        Element::TaskList(tasks) => format!("{} tasks", tasks.items.len()),
        Element::TaskItem(task) => task_label(task),
        Element::Table(table) => format!("{}×{}", table.num_columns(), table.rows().len()),
        Element::Image(img) => img.src.clone(),
        Element::LinkedImage(li) => format!("{} → {}", li.image.src, li.link_addr),
        Element::HtmlComment(c) => c.raw.clone(),
    }
}

fn truncate(label: &str) -> String {
    let label = label.trim();
    if label.chars().count() <= LABEL_WIDTH {
        label.to_string()
    } else {
        let cut: String = label.chars().take(LABEL_WIDTH - 1).collect();
        format!("{cut}…")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_lines;

    fn tree(text: &str, show_inlines: bool) -> String {
        let doc = Document::new(
            Default::default(),
            parse_lines(text.lines().map(str::to_string).collect()),
        );
        treeviz(&doc, show_inlines)
    }

    #[test]
    fn block_tree() {
        let out = tree("# Getting started\n- First\n- Second", false);
        insta::assert_snapshot!(out, @r"
        ⧉ document
        ├─ § h1 Getting started
        └─ ☰ 2 items
          ├─ • First
          └─ • Second
        ");
    }

    #[test]
    fn inline_nodes_when_asked() {
        let out = tree("Some **bold** text", true);
        insta::assert_snapshot!(out, @r"
        ⧉ document
        └─ ¶ Some bold text
          └─ ↵ Some bold text
            ├─ ◦ Some
            ├─ 𝐁 bold
            │ └─ ◦ bold
            └─ ◦ text
        ");
    }

    #[test]
    fn long_labels_are_cut() {
        let out = tree(&"word ".repeat(20), false);
        let line = out.lines().nth(1).unwrap();
        assert!(line.ends_with('…'));
        assert_eq!(line.chars().count(), "└─ ¶ ".chars().count() + LABEL_WIDTH);
    }

    #[test]
    fn tasks_show_their_marker() {
        let out = tree("- [x] Done\n- [ ] Todo", false);
        assert!(out.contains("☐ [x] Done"));
        assert!(out.contains("☐ [ ] Todo"));
    }
}
