use amdown::fs::FileContext;
use amdown::parse_str;
use amdown::render::{PrintStrategy, Renderer};
use std::path::PathBuf;

#[test]
fn internal_links_become_text() {
    let doc = parse_str("Read [the guide](guide.md) or [the site](https://example.com).");
    let out = Renderer::new(PrintStrategy::new()).render(&doc.elements);
    assert_eq!(
        out,
        "<p>Read the guide or <a href=\"https://example.com\">the site</a>.</p>"
    );
}

#[test]
fn tables_use_percent_widths() {
    let doc = parse_str("| A | B |\n|---|---|\n| 1 | 22 |");
    let out = Renderer::new(PrintStrategy::new()).render(&doc.elements);
    assert!(out.contains("<th style=\"width: 46%;\">"));
    assert!(out.contains("<td style=\"width: 53%;\">"));
}

#[test]
fn media_resolves_to_local_files() {
    let context = FileContext::new("/srv/book", "/book", "/media");
    let doc = parse_str("![Figure](img/../fig.png)");
    let local = context.local();
    let out = Renderer::with_mapper(PrintStrategy::new(), &local).render(&doc.elements);
    assert_eq!(out, "<img src=\"/srv/book/fig.png\" alt=\"Figure\">");
}

#[test]
fn math_rasterized_when_possible() {
    let raster = |expr: &str| {
        (expr == "e=mc^2").then(|| PathBuf::from("math/energy.png"))
    };
    let doc = parse_str("Known $e=mc^2$ and unknown $a+b$");
    let out = Renderer::new(PrintStrategy::with_rasterizer(&raster)).render(&doc.elements);
    assert_eq!(
        out,
        "<p>Known <img class=\"math\" src=\"math/energy.png\" alt=\"e=mc^2\"> and unknown <code class=\"math\">a+b</code></p>"
    );
}
