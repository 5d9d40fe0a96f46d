use amdown::fs::FileContext;
use amdown::parse_str;
use amdown::render::render_menu;

#[test]
fn site_menu_from_markdown() {
    let doc = parse_str(
        "![Logo](logo.png)\n# Handbook\n- [Home](index.md)\n    - [Setup](guide/setup.md)\n- [Blog](https://blog.example.com)",
    );
    let html = render_menu(&doc.elements, &FileContext::site("."));

    assert!(html.contains("<h1 id=\"menu-title\"><a href=\"../\">Handbook</a></h1>"));
    assert!(html.contains("<img src=\"/media/logo.png\" alt=\"Logo\">"));
    assert!(html.contains(
        "<a href=\"/index.md\"><button class=\"menu-btn depth-0\">Home</button></a>"
    ));
    assert!(html.contains(
        "<a href=\"/guide/setup.md\"><button class=\"menu-btn depth-1\">Setup</button></a>"
    ));
    assert!(html.contains("href=\"https://blog.example.com\""));
    assert!(html.contains("<div id=\"menu-content\" label=\"Menu Links\">"));
}

#[test]
fn menu_without_title_or_logo() {
    let doc = parse_str("- [Only](only.md)");
    let html = render_menu(&doc.elements, &FileContext::default());
    assert!(!html.contains("menu-title"));
    assert!(html.contains(
        "<a href=\"only.md\"><button class=\"menu-btn depth-0\">Only</button></a>"
    ));
}
