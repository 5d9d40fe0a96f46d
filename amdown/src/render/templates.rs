//! HTML snippets shared by every render strategy.
//!
//! Nested block content is indented two spaces per level. Code text reaches
//! these templates with its newlines already replaced by the renderer's
//! placeholder, so indentation never leaks into it.

pub fn indent(text: &str, levels: usize) -> String {
    let pad = "  ".repeat(levels);
    let mut out = String::with_capacity(text.len() + pad.len());
    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            out.push('\n');
        }
        if !line.is_empty() {
            out.push_str(&pad);
        }
        out.push_str(line);
    }
    out
}

/// Escapes text for element content.
pub fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Escapes text for a double-quoted attribute value.
pub fn escape_attr(text: &str) -> String {
    escape(text).replace('"', "&quot;")
}

fn attr(name: &str, value: Option<&str>) -> String {
    value
        .map(|v| format!(" {name}=\"{}\"", escape_attr(v)))
        .unwrap_or_default()
}

pub fn block(tag: &str, class: Option<&str>, body: &str) -> String {
    format!(
        "<{tag}{}>\n{}\n</{tag}>",
        attr("class", class),
        indent(body, 1)
    )
}

pub fn heading(level: u8, id: Option<&str>, inner: &str) -> String {
    format!("<h{level}{}>{inner}</h{level}>", attr("id", id))
}

pub fn paragraph(inner: &str) -> String {
    format!("<p>{inner}</p>")
}

pub fn list_item(inner: &str) -> String {
    format!("<li>{inner}</li>")
}

pub fn task_item(checked: bool, inner: &str) -> String {
    let checked = if checked { " checked" } else { "" };
    format!("<li class=\"task-item\"><input type=\"checkbox\" disabled{checked}> {inner}</li>")
}

/// `text` must already be escaped and newline-protected.
pub fn code_block(language: Option<&str>, text: &str) -> String {
    let class = language.map(|lang| format!("language-{lang}"));
    format!("<pre><code{}>{text}</code></pre>", attr("class", class.as_deref()))
}

pub fn callout(kind: &str, symbol: &str, title: &str, body: &str) -> String {
    let head = format!(
        "<div class=\"callout-title\"><span class=\"callout-symbol\">{symbol}</span> {title}</div>"
    );
    let inner = format!("{head}\n{}", block("div", Some("callout-body"), body));
    block("div", Some(&format!("callout callout-{kind}")), &inner)
}

pub fn card(title: &str, body: &str) -> String {
    let head = format!("<div class=\"card-title\">{}</div>", escape(title));
    let inner = format!("{head}\n{}", block("div", Some("card-body"), body));
    block("div", Some("card"), &inner)
}

pub fn link(href: &str, title: Option<&str>, inner: &str) -> String {
    format!(
        "<a href=\"{}\"{}>{inner}</a>",
        escape_attr(href),
        attr("title", title)
    )
}

pub fn image(src: &str, alt: &str, title: Option<&str>, width: Option<&str>) -> String {
    let style = width.map(|w| format!("width: {w};"));
    format!(
        "<img src=\"{}\" alt=\"{}\"{}{}>",
        escape_attr(src),
        escape_attr(alt),
        attr("title", title),
        attr("style", style.as_deref())
    )
}

pub fn table(headings: &[String], rows: &[Vec<String>], widths: &[String]) -> String {
    let cell = |tag: &str, i: usize, text: &String| {
        let style = widths.get(i).map(String::as_str);
        format!("<{tag}{}>{text}</{tag}>", attr("style", style))
    };
    let head: Vec<String> = headings
        .iter()
        .enumerate()
        .map(|(i, h)| cell("th", i, h))
        .collect();
    let mut body = vec![block("tr", None, &head.join("\n"))];
    for row in rows {
        let cells: Vec<String> = row
            .iter()
            .enumerate()
            .map(|(i, c)| cell("td", i, c))
            .collect();
        body.push(block("tr", None, &cells.join("\n")));
    }
    block("table", None, &body.join("\n"))
}

pub fn spacer(class: &str) -> String {
    format!("<div class=\"{class}\">&nbsp;</div>")
}

pub fn comment(text: &str) -> String {
    format!("<!-- {text} -->")
}

/// A debug dump for content that cannot be rendered where it stands.
pub fn unrendered(dump: &str) -> String {
    format!("<pre class=\"unrendered\">{}</pre>", escape(dump))
}

/// Navigation menu: logo, title and buttons.
pub fn menu(logo: &str, title: &str, buttons: &str) -> String {
    format!(
        "<img id=\"show-menu-icon\" class=\"top-menu-only\" src=\"/static/icons/menu-light.png\" alt=\"Show Menu\">\n\
         <div class=\"image side-menu-only\">\n{}\n</div>\n\
         {title}\n\
         <div id=\"menu-content\" label=\"Menu Links\">\n{}\n</div>",
        indent(logo, 1),
        indent(buttons, 1)
    )
}

pub fn menu_button(href: &str, depth: usize, text: &str) -> String {
    format!(
        "<a href=\"{}\"><button class=\"menu-btn depth-{depth}\">{text}</button></a>",
        escape_attr(href)
    )
}

/// A complete HTML page with inlined styles and scripts.
pub fn document(title: &str, body: &str, styles: &[&str], scripts: &[&str]) -> String {
    let styles: String = styles
        .iter()
        .filter(|css| !css.trim().is_empty())
        .map(|css| format!("  <style>\n{css}\n  </style>\n"))
        .collect();
    let scripts: String = scripts
        .iter()
        .map(|js| format!("  <script>\n{js}\n  </script>\n"))
        .collect();
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <meta name="generator" content="amdown">
  <title>{}</title>
{styles}{scripts}</head>
<body>
<div class="content">
{body}
</div>
</body>
</html>"#,
        escape(title)
    )
}
