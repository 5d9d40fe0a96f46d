use amdown::fs::FileContext;
use amdown::parse_str;
use amdown::render::{HtmlStrategy, Renderer};

fn html(text: &str) -> String {
    Renderer::new(HtmlStrategy).render(&parse_str(text).elements)
}

#[test]
fn heading_paragraph_and_list() {
    insta::assert_snapshot!(html("# Title\nSome **bold** and `code`.\n- one\n- two"), @r"
    <h1>Title</h1>
    <p>Some <b>bold</b> and <code>code</code>.</p>
    <ul>
      <li>one</li>
      <li>two</li>
    </ul>
    ");
}

#[test]
fn callout_markup() {
    insta::assert_snapshot!(html("> [!tip] Try it\n> Run `amdown`."), @r#"
    <div class="callout callout-tip">
      <div class="callout-title"><span class="callout-symbol">★</span> Try it</div>
      <div class="callout-body">
        <p>Run <code>amdown</code>.</p>
      </div>
    </div>
    "#);
}

#[test]
fn task_list_markup() {
    insta::assert_snapshot!(html("- [x] Done\n- [ ] Todo"), @r#"
    <ul class="task-list">
      <li class="task-item"><input type="checkbox" disabled checked> Done</li>
      <li class="task-item"><input type="checkbox" disabled> Todo</li>
    </ul>
    "#);
}

#[test]
fn code_inside_quote_is_not_indented() {
    let out = html("> ```\n> a\n>     b\n> ```");
    assert_eq!(out, "<blockquote>\n  <pre><code>a\n    b</code></pre>\n</blockquote>");
}

#[test]
fn tags_and_math() {
    assert_eq!(
        html("Filed under #rust and #[long tag]"),
        "<p>Filed under <a class=\"tag\" href=\"\">rust</a> and <a class=\"tag\" href=\"\">long tag</a></p>"
    );
    assert_eq!(
        html("Area $\\pi r^2$ here"),
        "<p>Area <span class=\"math\">\\(\\pi r^2\\)</span> here</p>"
    );
}

#[test]
fn inline_formatting_variants() {
    assert_eq!(
        html("***both*** ~~gone~~ ==marked=="),
        "<p><b><i>both</i></b> <s>gone</s> <mark>marked</mark></p>"
    );
}

#[test]
fn embeds_and_layout_comments() {
    assert_eq!(
        html("![[diagram.png|300]]"),
        "<img src=\"diagram.png\" alt=\"diagram.png\" style=\"width: 300px;\">"
    );
    assert_eq!(html("<!-- page-break -->"), "<div class=\"pb\">&nbsp;</div>");
    assert_eq!(html("<!-- reviewer: check -->"), "<!-- reviewer: check -->");
}

#[test]
fn context_maps_relative_addresses() {
    let context = FileContext::new("", "/docs", "/media");
    let doc =
        parse_str("[Next](guide/next.md) or [Site](https://example.com)\n\n![Fig](img/a.png)");
    let out = Renderer::with_mapper(HtmlStrategy, &context).render(&doc.elements);
    assert_eq!(
        out,
        "<p><a href=\"/docs/guide/next.md\">Next</a> or <a href=\"https://example.com\">Site</a></p>\n\
         <img src=\"/media/img/a.png\" alt=\"Fig\">"
    );
}

#[test]
fn linked_image_wraps_image() {
    assert_eq!(
        html("[![Badge](badge.svg)](https://ci.example.com)"),
        "<a href=\"https://ci.example.com\"><img src=\"badge.svg\" alt=\"Badge\"></a>"
    );
}

#[test]
fn table_uses_flex_widths() {
    let out = html("| A | B |\n|---|---|\n| 1 | 22 |");
    assert!(out.starts_with("<table>\n  <tr>"));
    assert!(out.contains("<th style=\"flex: 6;\">  A   </th>"));
    assert!(out.contains("<td style=\"flex: 7;\">22     </td>"));
}
