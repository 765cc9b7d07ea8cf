//! Table rendering utilities for CLI outputs.

use unicode_width::UnicodeWidthStr;

pub struct Column {
    pub header: String,
    pub width: usize,
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Build a table whose column widths fit the widest cell (display
    /// width, so multi-byte titles line up).
    pub fn fitted(headers: &[&str], rows: Vec<Vec<String>>) -> Self {
        let columns = headers
            .iter()
            .enumerate()
            .map(|(i, h)| {
                let cell_max = rows
                    .iter()
                    .map(|r| UnicodeWidthStr::width(r[i].as_str()))
                    .max()
                    .unwrap_or(0);
                Column {
                    header: h.to_string(),
                    width: cell_max.max(UnicodeWidthStr::width(*h)),
                }
            })
            .collect();

        Self { columns, rows }
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        // Header
        for col in &self.columns {
            out.push_str(&pad_cell(&col.header, col.width));
            out.push_str("  ");
        }
        out.push('\n');

        let total_width: usize = self.columns.iter().map(|c| c.width + 2).sum();
        out.push_str(&"-".repeat(total_width));
        out.push('\n');

        // Rows
        for row in &self.rows {
            for (i, col) in self.columns.iter().enumerate() {
                out.push_str(&pad_cell(&row[i], col.width));
                out.push_str("  ");
            }
            out.push('\n');
        }

        out
    }
}

fn pad_cell(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(UnicodeWidthStr::width(s));
    format!("{}{}", s, " ".repeat(pad))
}
