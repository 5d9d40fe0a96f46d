use amdown::formats::{ChromePdfBackend, PdfFormat, PrintFormat};
use amdown::{parse_str, OutputFormat, SerializedDocument};
use std::collections::HashMap;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

/// Fake Chrome: copies the page it was given next to the PDF it writes.
fn write_stub_chrome(dir: &Path) -> PathBuf {
    let script_path = dir.join("fake-chrome.sh");
    let script = r#"#!/bin/sh
OUTPUT=""
INPUT=""
for arg in "$@"; do
  case $arg in
    --print-to-pdf=*)
      OUTPUT="${arg#*=}"
      ;;
    file://*)
      INPUT="${arg#file://}"
      ;;
  esac
done
cp "$INPUT" "$(dirname "$0")/seen.html"
printf '%%PDF-1.7\n%%%%EOF\n' > "$OUTPUT"
"#;
    fs::write(&script_path, script).unwrap();
    let mut perms = fs::metadata(&script_path).unwrap().permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&script_path, perms).unwrap();
    script_path
}

fn pdf_format(stub: &Path) -> PdfFormat {
    PdfFormat::new(PrintFormat::new(), ChromePdfBackend::with_binary(stub))
}

#[test]
fn converts_print_page_with_stub() {
    let dir = tempdir().unwrap();
    let stub = write_stub_chrome(dir.path());
    let doc = parse_str("---\ntitle: Report\n---\n# Report\nSee [notes](notes.md).");

    let options = HashMap::from([("size".to_string(), "mobile".to_string())]);
    let result = pdf_format(&stub).serialize_with_options(&doc, &options).unwrap();

    let SerializedDocument::Binary(bytes) = result else {
        panic!("expected binary output");
    };
    assert!(bytes.starts_with(b"%PDF"));

    let seen = fs::read_to_string(dir.path().join("seen.html")).unwrap();
    assert!(seen.starts_with("<!DOCTYPE html>"));
    assert!(seen.contains("<title>Report</title>"));
    assert!(seen.contains("<style data-amdown-pdf>"));
    assert!(seen.contains("size: 90mm 160mm"));
    assert!(seen.contains("<p>See notes.</p>"));
}

#[test]
fn standalone_is_forced() {
    let dir = tempdir().unwrap();
    let stub = write_stub_chrome(dir.path());
    let doc = parse_str("Body");

    let options = HashMap::from([("standalone".to_string(), "false".to_string())]);
    pdf_format(&stub).serialize_with_options(&doc, &options).unwrap();

    let seen = fs::read_to_string(dir.path().join("seen.html")).unwrap();
    assert!(seen.contains("</head>"));
    assert!(seen.contains("size: 210mm 297mm"));
}

#[test]
fn failing_backend_reports_error() {
    let dir = tempdir().unwrap();
    let script_path = dir.path().join("broken-chrome.sh");
    fs::write(&script_path, "#!/bin/sh\nexit 3\n").unwrap();
    let mut perms = fs::metadata(&script_path).unwrap().permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&script_path, perms).unwrap();

    let doc = parse_str("Body");
    let err = pdf_format(&script_path)
        .serialize_with_options(&doc, &HashMap::new())
        .unwrap_err();
    assert!(matches!(err, amdown::Error::Backend(_)));
}
