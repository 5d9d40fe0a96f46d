use amdown::fs::{find_file, Directory, FileContext, MarkdownDoc};
use amdown::publish::{publish, PublishArtifact, PublishSpec};
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn write(dir: &Path, name: &str, text: &str) {
    fs::write(dir.join(name), text).unwrap();
}

fn site() -> tempfile::TempDir {
    let dir = tempdir().unwrap();
    write(dir.path(), "_metadata.yaml", "menu: nav\nhome: start\nauthor: Team\n");
    write(dir.path(), "nav.md", "# Docs\n- [Start](start.md)\n- [Guide](guide.md)\n");
    write(dir.path(), "start.md", "---\nauthor: Alice\n---\nWelcome, see [the guide](guide.md).\n");
    write(dir.path(), ".start.md.swp", "junk");
    dir
}

#[test]
fn directory_metadata_names_menu_and_home() {
    let dir = site();
    let directory = Directory::load(dir.path()).unwrap();
    assert_eq!(directory.menu_name(), "nav");
    assert_eq!(directory.home_name(), "start");
    assert_eq!(
        directory.find_file("start"),
        Some(dir.path().join("start.md"))
    );
    assert_eq!(find_file(dir.path(), "missing"), None);
}

#[test]
fn document_metadata_wins_over_directory() {
    let dir = site();
    let doc = MarkdownDoc::open(dir.path().join("start.md"), FileContext::default()).unwrap();
    assert_eq!(doc.meta("author"), Some("Alice"));
    assert_eq!(doc.meta("menu"), Some("nav"));
    assert_eq!(doc.title(), "Start");
}

#[test]
fn page_and_menu_share_the_context() {
    let dir = site();
    let context = FileContext::site(dir.path());
    let doc = MarkdownDoc::open(dir.path().join("start.md"), context).unwrap();

    assert_eq!(
        doc.render_html(),
        "<p>Welcome, see <a href=\"/guide.md\">the guide</a>.</p>"
    );

    let menu = doc.menu_html().unwrap().expect("menu document");
    assert!(menu.contains("<h1 id=\"menu-title\"><a href=\"../\">Docs</a></h1>"));
    assert!(menu.contains(
        "<a href=\"/guide.md\"><button class=\"menu-btn depth-0\">Guide</button></a>"
    ));
}

#[test]
fn no_menu_document_is_not_an_error() {
    let dir = tempdir().unwrap();
    write(dir.path(), "solo.md", "Alone.\n");
    let doc = MarkdownDoc::open(dir.path().join("solo.md"), FileContext::default()).unwrap();
    assert_eq!(doc.menu_html().unwrap(), None);
}

#[test]
fn publish_writes_page_to_disk() {
    let dir = site();
    let doc = MarkdownDoc::open(dir.path().join("start.md"), FileContext::default()).unwrap();
    let out = dir.path().join("start.html");

    let spec = PublishSpec::new(&doc.document, "html")
        .with_output_path(&out)
        .with_option("url-path", "/site")
        .with_option("title", doc.title());
    let artifact = publish(spec).unwrap();

    assert_eq!(artifact, PublishArtifact::File(out.clone()));
    let html = fs::read_to_string(&out).unwrap();
    assert!(html.contains("<title>Start</title>"));
    assert!(html.contains("href=\"/site/guide.md\""));
}

#[test]
fn publish_from_metadata_renders_menu() {
    let dir = tempdir().unwrap();
    write(dir.path(), "menu.md", "---\nformat: menu\n---\n- [A](a.md)\n");
    let doc = MarkdownDoc::open(dir.path().join("menu.md"), FileContext::default()).unwrap();

    let artifact = publish(PublishSpec::from_metadata(&doc.document)).unwrap();
    let PublishArtifact::InMemory(html) = artifact else {
        panic!("expected in-memory output");
    };
    assert!(html.contains("menu-btn depth-0"));
    assert!(!html.contains("<!DOCTYPE"));
}
