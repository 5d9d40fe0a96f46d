use super::inline::InlineText;
use super::table::Table;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Heading {
    pub weight: u8,
    pub title: InlineText,
    pub anchor_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Paragraph {
    pub inline: InlineText,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CodeBlock {
    pub text: String,
    pub language: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlockQuote {
    pub children: Vec<Element>,
}

/// Callout flavours. Anything unrecognised reads as [`CalloutKind::Info`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CalloutKind {
    Info,
    Note,
    Summary,
    Tip,
    Success,
    Question,
    Warning,
    Failure,
    Error,
    Example,
    Quote,
}

impl CalloutKind {
    pub fn parse(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "note" => CalloutKind::Note,
            "summary" => CalloutKind::Summary,
            "tip" => CalloutKind::Tip,
            "success" => CalloutKind::Success,
            "question" => CalloutKind::Question,
            "warning" => CalloutKind::Warning,
            "failure" => CalloutKind::Failure,
            "error" => CalloutKind::Error,
            "example" => CalloutKind::Example,
            "quote" => CalloutKind::Quote,
            _ => CalloutKind::Info,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CalloutKind::Info => "info",
            CalloutKind::Note => "note",
            CalloutKind::Summary => "summary",
            CalloutKind::Tip => "tip",
            CalloutKind::Success => "success",
            CalloutKind::Question => "question",
            CalloutKind::Warning => "warning",
            CalloutKind::Failure => "failure",
            CalloutKind::Error => "error",
            CalloutKind::Example => "example",
            CalloutKind::Quote => "quote",
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            CalloutKind::Info => "ℹ",
            CalloutKind::Note => "✎",
            CalloutKind::Summary => "☰",
            CalloutKind::Tip => "★",
            CalloutKind::Success => "✔",
            CalloutKind::Question => "?",
            CalloutKind::Warning => "⚠",
            CalloutKind::Failure => "✘",
            CalloutKind::Error => "⊘",
            CalloutKind::Example => "▸",
            CalloutKind::Quote => "❝",
        }
    }

    /// Title used when the callout line gives none, e.g. `Warning`.
    pub fn default_title(self) -> String {
        let name = self.as_str();
        let mut chars = name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Callout {
    pub kind: CalloutKind,
    pub symbol: String,
    pub title: InlineText,
    pub children: Vec<Element>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Card {
    pub title: String,
    pub children: Vec<Element>,
}

/// A block of navigation links.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinkList {
    pub children: Vec<Element>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ListOrdering {
    Ordered,
    Unordered,
}

/// A bulleted or numbered list.
///
/// `items` holds [`Element::ListItem`]s and, between them, whatever block
/// content was indented under an item (nested lists, paragraphs, ...).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListBlock {
    pub ordering: ListOrdering,
    pub items: Vec<Element>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListItem {
    pub ordering: ListOrdering,
    pub text: InlineText,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    Incomplete,
    Complete,
    Unknown,
}

impl TaskStatus {
    /// Status for the character between the brackets of `- [?]`.
    pub fn from_marker(marker: char) -> Self {
        match marker {
            'x' | 'X' => TaskStatus::Complete,
            '?' => TaskStatus::Unknown,
            _ => TaskStatus::Incomplete,
        }
    }

    pub fn marker(self) -> char {
        match self {
            TaskStatus::Incomplete => ' ',
            TaskStatus::Complete => 'x',
            TaskStatus::Unknown => '?',
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskItem {
    pub text: InlineText,
    pub status: TaskStatus,
}

impl TaskItem {
    /// Unknown (`?`) counts as checked alongside complete.
    pub fn is_checked(&self) -> bool {
        matches!(self.status, TaskStatus::Complete | TaskStatus::Unknown)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskList {
    pub items: Vec<TaskItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Image {
    pub alt: String,
    pub src: String,
    pub title: Option<String>,
    pub width: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinkedImage {
    pub image: Image,
    pub link_addr: String,
}

/// An HTML comment occupying a whole line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HtmlComment {
    pub raw: String,
}

/// Layout directives written as comments, e.g. `<!-- pb -->`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutDirective {
    PageBreak,
    VerticalSpace(&'static str),
}

impl HtmlComment {
    pub fn directive(&self) -> Option<LayoutDirective> {
        match self.raw.trim() {
            "pb" | "page-break" => Some(LayoutDirective::PageBreak),
            "br:xs" => Some(LayoutDirective::VerticalSpace("xs")),
            "br:sm" => Some(LayoutDirective::VerticalSpace("sm")),
            "br:md" => Some(LayoutDirective::VerticalSpace("md")),
            "br:lg" => Some(LayoutDirective::VerticalSpace("lg")),
            "br:xl" => Some(LayoutDirective::VerticalSpace("xl")),
            "br:xxl" => Some(LayoutDirective::VerticalSpace("xxl")),
            _ => None,
        }
    }
}

/// A block-level node of the document tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Element {
    Heading(Heading),
    HorizontalRule,
    Paragraph(Paragraph),
    CodeBlock(CodeBlock),
    BlockQuote(BlockQuote),
    Callout(Callout),
    Card(Card),
    LinkList(LinkList),
    ListBlock(ListBlock),
    ListItem(ListItem),
    TaskList(TaskList),
    TaskItem(TaskItem),
    Table(Table),
    Image(Image),
    LinkedImage(LinkedImage),
    HtmlComment(HtmlComment),
}

/// A borrowed child in the document tree.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Node<'a> {
    Element(&'a Element),
    TaskItem(&'a TaskItem),
    Inline(&'a InlineText),
}

impl Element {
    /// Direct children, in source order.
    pub fn children(&self) -> Vec<Node<'_>> {
        fn blocks(children: &[Element]) -> Vec<Node<'_>> {
            children.iter().map(Node::Element).collect()
        }
        match self {
            Element::Heading(h) => vec![Node::Inline(&h.title)],
            Element::Paragraph(p) => vec![Node::Inline(&p.inline)],
            Element::BlockQuote(q) => blocks(&q.children),
            Element::Callout(c) => {
                let mut nodes = vec![Node::Inline(&c.title)];
                nodes.extend(blocks(&c.children));
                nodes
            }
            Element::Card(c) => blocks(&c.children),
            Element::LinkList(l) => blocks(&l.children),
            Element::ListBlock(l) => blocks(&l.items),
            Element::ListItem(i) => vec![Node::Inline(&i.text)],
            Element::TaskList(t) => t.items.iter().map(Node::TaskItem).collect(),
            Element::TaskItem(t) => vec![Node::Inline(&t.text)],
            Element::Table(t) => t.cells().map(Node::Inline).collect(),
            Element::HorizontalRule
            | Element::CodeBlock(_)
            | Element::Image(_)
            | Element::LinkedImage(_)
            | Element::HtmlComment(_) => Vec::new(),
        }
    }

    /// Short label used by the tree inspector.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Element::Heading(_) => "heading",
            Element::HorizontalRule => "rule",
            Element::Paragraph(_) => "paragraph",
            Element::CodeBlock(_) => "code",
            Element::BlockQuote(_) => "quote",
            Element::Callout(_) => "callout",
            Element::Card(_) => "card",
            Element::LinkList(_) => "link-list",
            Element::ListBlock(_) => "list",
            Element::ListItem(_) => "item",
            Element::TaskList(_) => "tasks",
            Element::TaskItem(_) => "task",
            Element::Table(_) => "table",
            Element::Image(_) => "image",
            Element::LinkedImage(_) => "linked-image",
            Element::HtmlComment(_) => "comment",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_callout_kind_folds_to_info() {
        assert_eq!(CalloutKind::parse("bogus"), CalloutKind::Info);
        assert_eq!(CalloutKind::parse("WARNING"), CalloutKind::Warning);
        assert_eq!(CalloutKind::Warning.default_title(), "Warning");
        assert_eq!(CalloutKind::Info.default_title(), "Info");
    }

    #[test]
    fn unknown_task_status_counts_as_checked() {
        let item = |c| TaskItem {
            text: InlineText::raw("t"),
            status: TaskStatus::from_marker(c),
        };
        assert!(item('x').is_checked());
        assert!(item('X').is_checked());
        assert!(item('?').is_checked());
        assert!(!item(' ').is_checked());
    }

    #[test]
    fn comment_directives() {
        let comment = |raw: &str| HtmlComment {
            raw: raw.to_string(),
        };
        assert_eq!(
            comment(" pb ").directive(),
            Some(LayoutDirective::PageBreak)
        );
        assert_eq!(
            comment("br:lg").directive(),
            Some(LayoutDirective::VerticalSpace("lg"))
        );
        assert_eq!(comment("a note").directive(), None);
    }

    #[test]
    fn callout_children_start_with_title() {
        let callout = Element::Callout(Callout {
            kind: CalloutKind::Tip,
            symbol: CalloutKind::Tip.symbol().to_string(),
            title: InlineText::raw("Tip"),
            children: vec![Element::HorizontalRule],
        });
        let children = callout.children();
        assert_eq!(children.len(), 2);
        assert!(matches!(children[0], Node::Inline(_)));
        assert!(matches!(children[1], Node::Element(Element::HorizontalRule)));
    }
}
