//! Table rendering utilities for CLI outputs.

use crate::utils::formatting::pad_right;
use unicode_width::UnicodeWidthStr;

pub struct Column {
    pub header: String,
    pub width: usize,
}

impl Column {
    pub fn new(header: &str) -> Self {
        Self {
            header: header.to_string(),
            width: UnicodeWidthStr::width(header),
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Add a row, widening columns to fit its cells.
    pub fn add_row(&mut self, row: Vec<String>) {
        for (col, cell) in self.columns.iter_mut().zip(&row) {
            col.width = col.width.max(UnicodeWidthStr::width(cell.as_str()));
        }
        self.rows.push(row);
    }

    /// Total width of a rendered line.
    pub fn width(&self) -> usize {
        self.columns.iter().map(|c| c.width + 1).sum()
    }

    /// Rendered header line. Cells must be plain text (no ANSI codes).
    pub fn header_line(&self) -> String {
        let mut out = String::new();
        for col in &self.columns {
            out.push_str(&pad_right(&col.header, col.width));
            out.push(' ');
        }
        out
    }

    /// One rendered line per row, so callers can color whole lines.
    pub fn row_lines(&self) -> Vec<String> {
        self.rows
            .iter()
            .map(|row| {
                let mut out = String::new();
                for (i, col) in self.columns.iter().enumerate() {
                    let cell = row.get(i).map(String::as_str).unwrap_or("");
                    out.push_str(&pad_right(cell, col.width));
                    out.push(' ');
                }
                out
            })
            .collect()
    }

}
