//! Base handlers, used as-is by [`HtmlStrategy`] and as defaults by the others.

use super::templates;
use super::{RenderStrategy, Renderer, NEWLINE_PLACEHOLDER};
use crate::elements::{
    CodeBlock, Element, Heading, HtmlComment, Hyperlink, Image, LayoutDirective, LinkedImage,
    ListBlock, ListOrdering, Table, TaskList,
};
use std::path::Path;

/// Web page rendering.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlStrategy;

impl RenderStrategy for HtmlStrategy {}

pub fn heading<S: RenderStrategy>(r: &Renderer<'_, S>, heading: &Heading) -> String {
    templates::heading(
        heading.weight,
        heading.anchor_id.as_deref(),
        &r.render_inline(&heading.title),
    )
}

/// CSS width for an image: bare numbers are pixels, anything else is kept.
pub fn css_width(width: &str) -> String {
    let width = width.trim();
    if !width.is_empty() && width.chars().all(|c| c.is_ascii_digit()) {
        format!("{width}px")
    } else {
        width.to_string()
    }
}

pub fn image<S: RenderStrategy>(r: &Renderer<'_, S>, image: &Image) -> String {
    templates::image(
        &r.media_addr(&image.src),
        &image.alt,
        image.title.as_deref(),
        image.width.as_deref().map(css_width).as_deref(),
    )
}

/// The strategy's image wrapped in a link. An image that renders to nothing
/// gets no link either.
pub fn linked_image<S: RenderStrategy>(r: &Renderer<'_, S>, linked: &LinkedImage) -> String {
    let image = r.strategy().image(r, &linked.image);
    if image.is_empty() {
        return image;
    }
    templates::link(&r.link_addr(&linked.link_addr), None, &image)
}

pub fn list_block<S: RenderStrategy>(r: &Renderer<'_, S>, list: &ListBlock) -> String {
    let items: Vec<String> = list
        .items
        .iter()
        .map(|item| match item {
            Element::ListItem(li) => templates::list_item(&r.render_inline(&li.text)),
            nested => r.render_element(nested),
        })
        .filter(|html| !html.is_empty())
        .collect();
    let tag = match list.ordering {
        ListOrdering::Ordered => "ol",
        ListOrdering::Unordered => "ul",
    };
    templates::block(tag, None, &items.join("\n"))
}

pub fn task_list<S: RenderStrategy>(r: &Renderer<'_, S>, tasks: &TaskList) -> String {
    let items: Vec<String> = tasks
        .items
        .iter()
        .map(|task| templates::task_item(task.is_checked(), &r.render_inline(&task.text)))
        .collect();
    templates::block("ul", Some("task-list"), &items.join("\n"))
}

pub fn code_block(code: &CodeBlock) -> String {
    let text = templates::escape(&code.text).replace('\n', NEWLINE_PLACEHOLDER);
    templates::code_block(code.language.as_deref(), &text)
}

pub fn hyperlink<S: RenderStrategy>(r: &Renderer<'_, S>, link: &Hyperlink) -> String {
    templates::link(
        &r.link_addr(&link.addr),
        link.title.as_deref(),
        &r.render_inline(&link.text),
    )
}

/// Column widths as flex proportions.
pub fn flex_widths(table: &Table) -> Vec<String> {
    table
        .column_widths()
        .iter()
        .map(|w| format!("flex: {w};"))
        .collect()
}

/// Cells hold their raw text padded to the column width, headings centred.
pub fn table<S: RenderStrategy>(r: &Renderer<'_, S>, table: &Table) -> String {
    let widths = table.column_widths();
    let headings: Vec<String> = table
        .headings()
        .iter()
        .zip(widths)
        .map(|(cell, &w)| format!("{:^w$}", cell.raw_text()))
        .collect();
    let rows: Vec<Vec<String>> = table
        .rows()
        .iter()
        .map(|row| {
            row.iter()
                .zip(widths)
                .map(|(cell, &w)| format!("{:<w$}", cell.raw_text()))
                .collect()
        })
        .collect();
    templates::table(&headings, &rows, &r.strategy().table_widths(table))
}

pub fn latex<S: RenderStrategy>(
    _r: &Renderer<'_, S>,
    expr: &str,
    _rendered: Option<&Path>,
) -> String {
    format!("<span class=\"math\">\\({}\\)</span>", templates::escape(expr))
}

pub fn html_comment(comment: &HtmlComment) -> String {
    match comment.directive() {
        Some(LayoutDirective::PageBreak) => templates::spacer("pb"),
        Some(LayoutDirective::VerticalSpace(size)) => templates::spacer(&format!("vs-{size}")),
        None => templates::comment(&comment.raw),
    }
}
