use crate::error::{Error, Result};
use crate::frontmatter::{parse_metadata_text, Metadata};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Name of the per-directory metadata file.
pub const METADATA_FILE: &str = "_metadata.yaml";

/// A directory of documents and its shared metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct Directory {
    pub path: PathBuf,
    pub metadata: Metadata,
}

impl Directory {
    /// Loads `_metadata.yaml` from `path`. A missing file means no metadata.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let meta_path = path.join(METADATA_FILE);
        let metadata = match fs::read_to_string(&meta_path) {
            Ok(text) => parse_metadata_text(&text),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Metadata::new(),
            Err(err) => return Err(Error::io(meta_path, err)),
        };
        debug!(dir = %path.display(), keys = metadata.len(), "loaded directory metadata");
        Ok(Self { path, metadata })
    }

    /// Name of the menu document, without extension.
    pub fn menu_name(&self) -> &str {
        self.metadata.get("menu").map_or("menu", String::as_str)
    }

    /// Name of the home document, without extension.
    pub fn home_name(&self) -> &str {
        self.metadata.get("home").map_or("home", String::as_str)
    }

    /// Finds a visible file whose name without extension is `name`.
    pub fn find_file(&self, name: &str) -> Option<PathBuf> {
        find_file(&self.path, name)
    }
}

/// Finds a visible file in `dir` whose name without extension is `name`.
/// Candidates are tried in name order.
pub fn find_file(dir: &Path, name: &str) -> Option<PathBuf> {
    let mut candidates: Vec<PathBuf> = fs::read_dir(dir)
        .ok()?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.is_file())
        .filter(|p| {
            p.file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| !n.starts_with('.'))
        })
        .filter(|p| p.file_stem().and_then(|s| s.to_str()) == Some(name))
        .collect();
    candidates.sort();
    candidates.into_iter().next()
}
