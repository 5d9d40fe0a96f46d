use amdown::elements::{CalloutKind, Element, InlineNode, ListOrdering, TaskStatus};
use amdown::parse_str;

fn kinds(text: &str) -> Vec<&'static str> {
    parse_str(text)
        .elements
        .iter()
        .map(Element::kind_name)
        .collect()
}

#[test]
fn mixed_document_block_sequence() {
    let text = "---\ntitle: Guide\nformat: html\n---\n\
        # Guide {#top}\n\
        Intro line one\n\
        line two.\n\
        \n\
        > [!note] Remember\n\
        > Save often.\n\
        \n\
        - [x] write\n\
        - [ ] review\n\
        \n\
        | Name | Value |\n\
        | --- | --- |\n\
        | a | 1 |\n\
        \n\
        ![Chart](chart.png)\n\
        <!-- page-break -->\n\
        ***\n\
        1. first\n\
        2. second";
    assert_eq!(
        kinds(text),
        vec![
            "heading", "paragraph", "callout", "tasks", "table", "image", "comment", "rule",
            "list"
        ]
    );

    let doc = parse_str(text);
    assert_eq!(doc.meta("title"), Some("Guide"));
    let Element::Heading(h) = &doc.elements[0] else {
        panic!("expected heading");
    };
    assert_eq!(h.anchor_id.as_deref(), Some("top"));
    let Element::Paragraph(p) = &doc.elements[1] else {
        panic!("expected paragraph");
    };
    assert_eq!(p.inline.raw_text(), "Intro line one line two.");
}

#[test]
fn callout_kinds_and_titles() {
    let doc = parse_str("> [!warning]\n> Hot.\n\n> [!tip] Try `this`\n> ok");
    let callouts: Vec<_> = doc
        .elements
        .iter()
        .filter_map(|el| match el {
            Element::Callout(c) => Some((c.kind, c.title.raw_text())),
            _ => None,
        })
        .collect();
    assert_eq!(
        callouts,
        vec![
            (CalloutKind::Warning, "Warning".to_string()),
            (CalloutKind::Tip, "Try this".to_string()),
        ]
    );
}

#[test]
fn custom_blocks_nest_documents() {
    let doc = parse_str("> [!!card|Pricing]\n> ## Plans\n> - basic\n> - pro");
    let Element::Card(card) = &doc.elements[0] else {
        panic!("expected card");
    };
    assert_eq!(card.title, "Pricing");
    let child_kinds: Vec<_> = card.children.iter().map(Element::kind_name).collect();
    assert_eq!(child_kinds, vec!["heading", "list"]);
}

#[test]
fn indented_lines_nest_under_list_items() {
    let doc = parse_str("- top\n    1. inner\n    2. inner two\n- next\nafter");
    assert_eq!(kinds("- top\n    1. inner\n- next\nafter"), vec!["list", "paragraph"]);
    let Element::ListBlock(list) = &doc.elements[0] else {
        panic!("expected list");
    };
    assert_eq!(list.ordering, ListOrdering::Unordered);
    let item_kinds: Vec<_> = list.items.iter().map(Element::kind_name).collect();
    assert_eq!(item_kinds, vec!["item", "list", "item"]);
    let Element::ListBlock(inner) = &list.items[1] else {
        panic!("expected nested list");
    };
    assert_eq!(inner.ordering, ListOrdering::Ordered);
    assert_eq!(inner.items.len(), 2);
}

#[test]
fn task_line_ends_bullet_list() {
    assert_eq!(kinds("- plain\n- [x] done"), vec!["list", "tasks"]);
}

#[test]
fn task_statuses() {
    let doc = parse_str("- [x] done\n- [X] also done\n- [ ] open\n- [?] unsure");
    let Element::TaskList(tasks) = &doc.elements[0] else {
        panic!("expected task list");
    };
    let statuses: Vec<_> = tasks.items.iter().map(|t| t.status).collect();
    assert_eq!(statuses[0], TaskStatus::from_marker('x'));
    assert_eq!(statuses[1], TaskStatus::from_marker('x'));
    assert_eq!(statuses[2], TaskStatus::from_marker(' '));
    assert!(tasks.items[0].is_checked());
    assert!(!tasks.items[2].is_checked());
    assert_eq!(tasks.items.len(), 4);
}

#[test]
fn wiki_embed_and_sized_image() {
    let doc = parse_str("![[diagram.png|300]]\n![Logo|120](logo.png)");
    let images: Vec<_> = doc
        .elements
        .iter()
        .filter_map(|el| match el {
            Element::Image(img) => Some((img.src.as_str(), img.width.as_deref())),
            _ => None,
        })
        .collect();
    assert_eq!(
        images,
        vec![("diagram.png", Some("300")), ("logo.png", Some("120"))]
    );
}

#[test]
fn linked_image_keeps_both_addresses() {
    let doc = parse_str("[![Badge](badge.svg)](https://ci.example.com)");
    let Element::LinkedImage(li) = &doc.elements[0] else {
        panic!("expected linked image");
    };
    assert_eq!(li.image.src, "badge.svg");
    assert_eq!(li.link_addr, "https://ci.example.com");
}

#[test]
fn inline_tags_links_and_math() {
    let doc = parse_str("See [[notes/setup|Setup]] for #install and $x^2$ maths.");
    let Element::Paragraph(p) = &doc.elements[0] else {
        panic!("expected paragraph");
    };
    let names: Vec<_> = p.inline.children.iter().map(InlineNode::kind_name).collect();
    assert_eq!(
        names,
        vec!["text", "link", "text", "tag", "text", "latex", "text"]
    );
    assert_eq!(p.inline.hyperlinks()[0].addr, "notes/setup");
}

#[test]
fn unterminated_front_matter_consumes_input() {
    let doc = parse_str("---\ntitle: Lost\n# Heading");
    assert!(doc.metadata.is_empty());
    assert!(doc.elements.is_empty());
}

#[test]
fn hard_breaks_join_lines() {
    let doc = parse_str("first\\\nsecond<br>\nthird");
    let Element::Paragraph(p) = &doc.elements[0] else {
        panic!("expected paragraph");
    };
    let breaks = p
        .inline
        .children
        .iter()
        .filter(|n| matches!(n, InlineNode::LineBreak))
        .count();
    assert_eq!(breaks, 2);
}

#[test]
fn parse_file_reads_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("doc.md");
    std::fs::write(&path, "# On disk\ntext\n").unwrap();
    let doc = amdown::parse_file(&path).unwrap();
    assert_eq!(doc.elements.len(), 2);

    let missing = amdown::parse_file(dir.path().join("nope.md"));
    assert!(matches!(missing, Err(amdown::Error::DocumentNotFound(_))));
}
