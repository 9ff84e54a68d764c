//! Tables, lists and key/value blocks

use super::styling::StyleManager;
use console::{Alignment, Term, measure_text_width, pad_str, truncate_str};

const COLUMN_SEPARATOR: &str = " | ";

pub struct StructuredDisplay<'a> {
    styling: &'a StyleManager,
}

impl<'a> StructuredDisplay<'a> {
    pub fn new(styling: &'a StyleManager) -> Self {
        Self { styling }
    }

    pub fn table(&self, headers: &[&str], rows: &[Vec<&str>]) {
        let width = Term::stdout()
            .size_checked()
            .map(|(_, cols)| cols as usize);
        for line in render_table(self.styling, headers, rows, width) {
            println!("{line}");
        }
    }

    pub fn list(&self, items: &[&str]) {
        for item in items {
            println!("{} {}", self.styling.bullet(), item);
        }
    }

    pub fn pairs(&self, pairs: &[(&str, &str)]) {
        let key_width = pairs
            .iter()
            .map(|(key, _)| measure_text_width(key))
            .max()
            .unwrap_or(0);

        for (key, value) in pairs {
            let key = pad_str(key, key_width, Alignment::Left, None);
            println!("{}{}{}", self.styling.style_subtle(&key), COLUMN_SEPARATOR, value);
        }
    }
}

/// Lines of a `|`-separated table, shrunk to `max_width` when given
pub fn render_table(
    styling: &StyleManager,
    headers: &[&str],
    rows: &[Vec<&str>],
    max_width: Option<usize>,
) -> Vec<String> {
    let columns = headers
        .len()
        .max(rows.iter().map(Vec::len).max().unwrap_or(0));
    if columns == 0 {
        return Vec::new();
    }

    let mut widths = vec![0usize; columns];
    for row in std::iter::once(headers).chain(rows.iter().map(Vec::as_slice)) {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(measure_text_width(cell));
        }
    }

    if let Some(max_width) = max_width {
        let total = widths.iter().sum::<usize>() + (columns - 1) * COLUMN_SEPARATOR.len();
        if total > max_width {
            let reduction = (total - max_width).div_ceil(columns);
            for width in &mut widths {
                *width = width.saturating_sub(reduction).max(3);
            }
        }
    }

    let render_row = |cells: &[&str], header: bool| -> String {
        (0..columns)
            .map(|i| {
                let cell = cells.get(i).copied().unwrap_or("");
                let cell = truncate_str(cell, widths[i], "...");
                let cell = pad_str(&cell, widths[i], Alignment::Left, None).into_owned();
                if header {
                    styling.style_emphasis(&cell)
                } else {
                    cell
                }
            })
            .collect::<Vec<_>>()
            .join(COLUMN_SEPARATOR)
            .trim_end()
            .to_string()
    };

    let mut lines = Vec::with_capacity(rows.len() + 2);
    if !headers.is_empty() {
        lines.push(render_row(headers, true));
        let rule = widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("-+-");
        lines.push(styling.style_subtle(&rule));
    }
    lines.extend(rows.iter().map(|row| render_row(row, false)));
    lines
}

#[cfg(test)]
mod tests {
    include!("structured.test.rs");
}
