//! Print and PDF rendering

use super::templates;
use super::{html, is_relative, RenderStrategy, Renderer};
use crate::elements::{Hyperlink, Table};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Turns a LaTeX expression into an image file, cropped to its content.
pub trait LatexRasterizer {
    fn rasterize(&self, expr: &str) -> Option<PathBuf>;
}

impl<F> LatexRasterizer for F
where
    F: Fn(&str) -> Option<PathBuf>,
{
    fn rasterize(&self, expr: &str) -> Option<PathBuf> {
        self(expr)
    }
}

/// Print rendering: internal links are plain text, tables use percent widths
/// and math is embedded as images where a rasteriser can provide them.
#[derive(Default)]
pub struct PrintStrategy<'a> {
    rasterizer: Option<&'a dyn LatexRasterizer>,
}

impl<'a> PrintStrategy<'a> {
    pub fn new() -> Self {
        Self { rasterizer: None }
    }

    pub fn with_rasterizer(rasterizer: &'a dyn LatexRasterizer) -> Self {
        Self {
            rasterizer: Some(rasterizer),
        }
    }
}

/// Column widths as integer percentages of the table's total width.
pub fn percent_widths(table: &Table) -> Vec<String> {
    let total: usize = table.column_widths().iter().sum();
    table
        .column_widths()
        .iter()
        .map(|w| format!("width: {}%;", (w * 100).checked_div(total).unwrap_or(0)))
        .collect()
}

impl RenderStrategy for PrintStrategy<'_> {
    fn hyperlink(&self, r: &Renderer<'_, Self>, link: &Hyperlink) -> String {
        if is_relative(&link.addr) {
            r.render_inline(&link.text)
        } else {
            html::hyperlink(r, link)
        }
    }

    fn table_widths(&self, table: &Table) -> Vec<String> {
        percent_widths(table)
    }

    fn latex(&self, r: &Renderer<'_, Self>, expr: &str, rendered: Option<&Path>) -> String {
        let image = rendered
            .map(Path::to_path_buf)
            .or_else(|| self.rasterizer.and_then(|raster| raster.rasterize(expr)));
        match image {
            Some(path) => format!(
                "<img class=\"math\" src=\"{}\" alt=\"{}\">",
                templates::escape_attr(&r.media_addr(&path.to_string_lossy())),
                templates::escape_attr(expr)
            ),
            None => {
                debug!(expr, "no raster image for math, keeping source");
                format!("<code class=\"math\">{}</code>", templates::escape(expr))
            }
        }
    }
}
