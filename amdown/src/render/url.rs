//! Address classification and mapping
//!
//! Links and image sources written in a document are either external (a URI
//! scheme, `www...`, `mailto`, an in-page `#anchor`) or relative to the document
//! tree. Only relative addresses go through a [`UrlMapper`].

use once_cell::sync::Lazy;
use regex::Regex;

static SCHEME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z][A-Za-z0-9+.-]*:").unwrap_or_else(|err| panic!("scheme pattern: {err}"))
});

/// True for addresses that point into the document tree.
pub fn is_relative(addr: &str) -> bool {
    let addr = addr.trim();
    !(SCHEME.is_match(addr)
        || addr.starts_with("www")
        || addr.starts_with("mailto")
        || addr.starts_with('#'))
}

/// Turns relative document addresses into output addresses.
///
/// Links and media may live under different prefixes, so they are mapped
/// separately. Any `Fn(&str) -> String` is a mapper that treats both alike.
pub trait UrlMapper {
    fn map_link(&self, addr: &str) -> String;

    fn map_media(&self, addr: &str) -> String {
        self.map_link(addr)
    }
}

impl<F> UrlMapper for F
where
    F: Fn(&str) -> String,
{
    fn map_link(&self, addr: &str) -> String {
        self(addr)
    }
}

/// Leaves every address as written.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unmapped;

impl UrlMapper for Unmapped {
    fn map_link(&self, addr: &str) -> String {
        addr.to_string()
    }
}
