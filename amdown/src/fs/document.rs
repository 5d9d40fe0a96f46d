use super::context::{filename_to_title, FileContext};
use super::directory::Directory;
use crate::elements::Document;
use crate::error::Result;
use crate::line_source::LineSource;
use crate::parser::parse_document;
use crate::render::{render_menu, HtmlStrategy, Renderer};
use std::path::{Path, PathBuf};
use tracing::debug;

/// A markdown file on disk, parsed, with its directory metadata merged in.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkdownDoc {
    pub path: PathBuf,
    pub context: FileContext,
    pub document: Document,
}

impl MarkdownDoc {
    /// Reads and parses `path`. Front matter keys override the ones from the
    /// directory's `_metadata.yaml`.
    pub fn open(path: impl Into<PathBuf>, context: FileContext) -> Result<Self> {
        let path = path.into();
        let mut source = LineSource::open(&path)?;
        let parsed = parse_document(&mut source);

        let directory = Directory::load(parent_dir(&path))?;
        let mut metadata = directory.metadata;
        metadata.extend(parsed.metadata);
        debug!(path = %path.display(), elements = parsed.elements.len(), "opened document");

        Ok(Self {
            path,
            context,
            document: Document::new(metadata, parsed.elements),
        })
    }

    pub fn meta(&self, key: &str) -> Option<&str> {
        self.document.meta(key)
    }

    /// The `title` metadata, else a title made from the file name.
    pub fn title(&self) -> String {
        match self.meta("title") {
            Some(title) => title.to_string(),
            None => filename_to_title(&self.path),
        }
    }

    /// Output format requested by the document's metadata.
    pub fn format_name(&self) -> &str {
        self.meta("format").unwrap_or("html")
    }

    /// Renders the body with the renderer its `format` names.
    pub fn render_html(&self) -> String {
        match self.format_name() {
            "menu" => render_menu(&self.document.elements, &self.context),
            _ => Renderer::with_mapper(HtmlStrategy, &self.context).render(&self.document.elements),
        }
    }

    /// Renders the sibling menu document, if the directory has one.
    pub fn menu_html(&self) -> Result<Option<String>> {
        let name = self.meta("menu").unwrap_or("menu");
        let Some(menu_path) = super::directory::find_file(&parent_dir(&self.path), name) else {
            debug!(menu = name, "no menu document");
            return Ok(None);
        };
        let menu = MarkdownDoc::open(menu_path, self.context.clone())?;
        Ok(Some(render_menu(&menu.document.elements, &self.context)))
    }
}

fn parent_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
