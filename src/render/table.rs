//! GitHub-flavored Markdown table rendering.
//!
//! Column widths are measured in `char`s; every cell in a column is padded
//! to the widest cell (header included) so the pipes line up.

use std::borrow::Cow;

use crate::model::{TableAlign, TableHeader};
use crate::util::fill_array;

use super::TableOptions;

/// Renders headers and rows to aligned table lines.
#[derive(Debug, Clone, Default)]
pub struct TableRenderer {
    options: TableOptions,
}

/// A column after escaping, ready for width computation.
#[derive(Debug, Clone)]
struct Column {
    text: String,
    align: TableAlign,
    width: usize,
}

impl TableRenderer {
    /// Create a new table renderer.
    pub fn new(options: TableOptions) -> Self {
        Self { options }
    }

    /// Render a header line, a separator line and one line per row.
    ///
    /// Short rows are padded with empty cells; cells beyond the header
    /// count have no column and are ignored.
    pub fn render<R, S>(&self, headers: &[TableHeader], rows: &[R]) -> Vec<String>
    where
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        let mut columns: Vec<Column> = headers
            .iter()
            .map(|header| Column {
                text: self.escape(&header.text),
                align: header.align,
                width: 0,
            })
            .collect();

        let mut body: Vec<Vec<String>> = rows
            .iter()
            .map(|row| {
                let cells: Vec<String> = row
                    .as_ref()
                    .iter()
                    .take(columns.len())
                    .map(|cell| self.escape(cell.as_ref()))
                    .collect();
                let filled = match fill_array(&cells, columns.len(), String::new()) {
                    Cow::Owned(filled) => Some(filled),
                    Cow::Borrowed(_) => None,
                };
                filled.unwrap_or(cells)
            })
            .collect();

        if self.options.remove_row_if_empty {
            let before = body.len();
            body.retain(|row| row.iter().any(|cell| !cell.is_empty()));
            if body.len() != before {
                log::debug!("Table: removed {} empty rows", before - body.len());
            }
        }

        for (index, column) in columns.iter_mut().enumerate() {
            let cell_width = body
                .iter()
                .filter_map(|row| row.get(index))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0);

            column.width = if self.options.remove_column_if_empty && cell_width == 0 {
                0
            } else {
                cell_width.max(column.text.chars().count())
            };
        }

        if self.options.remove_column_if_empty {
            self.remove_empty_columns(&mut columns, &mut body);
        }

        // Alignment markers need at least one character.
        for column in columns.iter_mut().filter(|c| c.align != TableAlign::None) {
            column.width = column.width.max(1);
        }

        log::debug!(
            "Table: rendering {} columns and {} rows",
            columns.len(),
            body.len()
        );

        let mut lines = Vec::with_capacity(body.len() + 2);
        lines.push(render_header(&columns));
        lines.push(render_separator(&columns));
        for row in &body {
            lines.push(render_row(row, &columns));
        }
        lines
    }

    fn escape(&self, text: &str) -> String {
        match self.options.escape_pipe_char {
            Some(ref replacement) => text.replace('|', replacement),
            None => text.to_string(),
        }
    }

    fn remove_empty_columns(&self, columns: &mut Vec<Column>, body: &mut [Vec<String>]) {
        let keep: Vec<bool> = columns.iter().map(|column| column.width > 0).collect();
        if keep.iter().all(|&k| k) {
            return;
        }

        log::debug!(
            "Table: removed {} empty columns",
            keep.iter().filter(|&&k| !k).count()
        );

        let mut flags = keep.iter();
        columns.retain(|_| *flags.next().unwrap_or(&true));

        for row in body.iter_mut() {
            let mut flags = keep.iter();
            row.retain(|_| *flags.next().unwrap_or(&true));
        }
    }
}

fn render_header(columns: &[Column]) -> String {
    let mut line = String::new();
    for column in columns {
        push_cell(&mut line, &column.text, column.width);
    }
    close_line(line)
}

fn render_separator(columns: &[Column]) -> String {
    let mut line = String::new();
    for column in columns {
        push_cell(&mut line, &align_marker(column.align, column.width), column.width);
    }
    close_line(line)
}

fn render_row(row: &[String], columns: &[Column]) -> String {
    let mut line = String::new();
    for (cell, column) in row.iter().zip(columns) {
        push_cell(&mut line, cell, column.width);
    }
    close_line(line)
}

/// Separator text for one column.
fn align_marker(align: TableAlign, width: usize) -> String {
    match align {
        TableAlign::Left => format!(":{}", "-".repeat(width.saturating_sub(1))),
        TableAlign::Right => format!("{}:", "-".repeat(width.saturating_sub(1))),
        TableAlign::Center if width <= 1 => ":".to_string(),
        TableAlign::Center => format!(":{}:", "-".repeat(width - 2)),
        TableAlign::None => "-".repeat(width),
    }
}

fn push_cell(line: &mut String, text: &str, width: usize) {
    line.push_str(&format!("| {:<width$} ", text.trim(), width = width));
}

fn close_line(mut line: String) -> String {
    if !line.is_empty() {
        line.push('|');
    }
    line
}
