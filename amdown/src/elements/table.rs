use super::inline::{InlineText, LINE_BREAK_MARKER};
use serde::Serialize;

/// Padding added to the longest line of a cell when sizing a column.
const CELL_PADDING: usize = 5;

/// A table with one heading row and any number of body rows.
///
/// Column widths follow the widest cell seen so far and only ever grow.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Table {
    headings: Vec<InlineText>,
    rows: Vec<Vec<InlineText>>,
    column_widths: Vec<usize>,
}

impl Table {
    pub fn new(headings: Vec<InlineText>) -> Self {
        let column_widths = headings
            .iter()
            .map(|h| Self::cell_width(&h.raw_text()))
            .collect();
        Self {
            headings,
            rows: Vec::new(),
            column_widths,
        }
    }

    /// Width needed by a cell: padding plus its longest `<br>`-separated line.
    pub fn cell_width(text: &str) -> usize {
        CELL_PADDING
            + text
                .split(LINE_BREAK_MARKER)
                .map(|line| line.chars().count())
                .max()
                .unwrap_or(0)
    }

    /// Appends a row, padding or truncating it to the heading count.
    pub fn add_row(&mut self, mut row: Vec<InlineText>) {
        row.resize_with(self.headings.len(), InlineText::new);
        for (width, cell) in self.column_widths.iter_mut().zip(&row) {
            *width = (*width).max(Self::cell_width(&cell.raw_text()));
        }
        self.rows.push(row);
    }

    pub fn headings(&self) -> &[InlineText] {
        &self.headings
    }

    pub fn rows(&self) -> &[Vec<InlineText>] {
        &self.rows
    }

    pub fn column_widths(&self) -> &[usize] {
        &self.column_widths
    }

    pub fn num_columns(&self) -> usize {
        self.headings.len()
    }

    /// Headings followed by every body cell, row by row.
    pub fn cells(&self) -> impl Iterator<Item = &InlineText> {
        self.headings.iter().chain(self.rows.iter().flatten())
    }
}
