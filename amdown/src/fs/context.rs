use crate::render::UrlMapper;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Roots used to resolve document-relative paths.
///
/// `working_dir` is where files live on disk, `url_path` prefixes page links
/// and `media_path` prefixes images and other media. The default context has
/// all three empty, which leaves paths relative (only simplified).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FileContext {
    pub working_dir: PathBuf,
    pub url_path: String,
    pub media_path: String,
}

impl FileContext {
    pub fn new(
        working_dir: impl Into<PathBuf>,
        url_path: impl Into<String>,
        media_path: impl Into<String>,
    ) -> Self {
        Self {
            working_dir: working_dir.into(),
            url_path: url_path.into(),
            media_path: media_path.into(),
        }
    }

    /// Site defaults: links from `/`, media from `/media`.
    pub fn site(working_dir: impl Into<PathBuf>) -> Self {
        Self::new(working_dir, "/", "/media")
    }

    pub fn local_path(&self, path: &str) -> PathBuf {
        let joined = self.working_dir.join(path);
        PathBuf::from(simplify_path(&joined.to_string_lossy()))
    }

    pub fn url(&self, path: &str) -> String {
        simplify_path(&join_str(&self.url_path, path))
    }

    pub fn media_url(&self, path: &str) -> String {
        simplify_path(&join_str(&self.media_path, path))
    }

    /// Context for a subdirectory.
    pub fn join(&self, dir: &str) -> FileContext {
        FileContext {
            working_dir: self.working_dir.join(dir),
            url_path: join_str(&self.url_path, dir),
            media_path: join_str(&self.media_path, dir),
        }
    }

    /// Mapper resolving every address to a local file path, for print output.
    pub fn local(&self) -> LocalPaths<'_> {
        LocalPaths(self)
    }
}

impl UrlMapper for FileContext {
    fn map_link(&self, addr: &str) -> String {
        self.url(addr)
    }

    fn map_media(&self, addr: &str) -> String {
        self.media_url(addr)
    }
}

/// See [`FileContext::local`].
#[derive(Debug, Clone, Copy)]
pub struct LocalPaths<'a>(&'a FileContext);

impl UrlMapper for LocalPaths<'_> {
    fn map_link(&self, addr: &str) -> String {
        self.0.local_path(addr).to_string_lossy().into_owned()
    }
}

/// Joins like a path: an absolute `path` replaces `base`.
fn join_str(base: &str, path: &str) -> String {
    if base.is_empty() || path.starts_with('/') {
        path.to_string()
    } else {
        format!("{}/{}", base.trim_end_matches('/'), path)
    }
}

/// Resolves `.` and `..` components and collapses repeated separators.
///
/// `..` above a relative start is kept; above the root it is dropped.
pub fn simplify_path(path: &str) -> String {
    if path.is_empty() {
        return String::new();
    }
    let absolute = path.starts_with('/');
    let mut parts: Vec<&str> = Vec::new();
    for part in path.split('/') {
        match part {
            "" | "." => {}
            ".." => match parts.last() {
                Some(&last) if last != ".." => {
                    parts.pop();
                }
                _ if absolute => {}
                _ => parts.push(".."),
            },
            other => parts.push(other),
        }
    }
    let joined = parts.join("/");
    match (absolute, joined.is_empty()) {
        (true, _) => format!("/{joined}"),
        (false, true) => ".".to_string(),
        (false, false) => joined,
    }
}

/// Title derived from a file name: `my-file_name.md` becomes `My File Name`.
pub fn filename_to_title(path: &Path) -> String {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    stem.split(['-', '_'])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simplifies_paths() {
        assert_eq!(simplify_path("a/./b/../c"), "a/c");
        assert_eq!(simplify_path("/a//b/"), "/a/b");
        assert_eq!(simplify_path("/../x"), "/x");
        assert_eq!(simplify_path("../x"), "../x");
        assert_eq!(simplify_path("a/.."), ".");
        assert_eq!(simplify_path("/"), "/");
    }

    #[test]
    fn site_context_prefixes() {
        let ctx = FileContext::site("/srv/site");
        assert_eq!(ctx.url("docs/intro.md"), "/docs/intro.md");
        assert_eq!(ctx.media_url("img/a.png"), "/media/img/a.png");
        assert_eq!(ctx.local_path("img/../a.png"), PathBuf::from("/srv/site/a.png"));
    }

    #[test]
    fn joined_context_nests_every_root() {
        let ctx = FileContext::site("/srv/site").join("guide");
        assert_eq!(ctx.url("../index.md"), "/index.md");
        assert_eq!(ctx.media_url("fig.png"), "/media/guide/fig.png");
        assert_eq!(ctx.working_dir, PathBuf::from("/srv/site/guide"));
    }

    #[test]
    fn default_context_keeps_relative_paths() {
        let ctx = FileContext::default();
        assert_eq!(ctx.map_link("a/./b.md"), "a/b.md");
        assert_eq!(ctx.map_media("img.png"), "img.png");
    }

    #[test]
    fn titles_from_file_names() {
        assert_eq!(filename_to_title(Path::new("my-file_name.md")), "My File Name");
        assert_eq!(filename_to_title(Path::new("dir/README")), "Readme");
    }
}
