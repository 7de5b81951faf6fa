//! Output formatting module

use tarozi_app::{EntryForm, FormField, TableView};
use tarozi_domain::Column;
use tarozi_types::{OutputFormat, Result};

/// Highlight markers for terminal output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Markers {
    pub open: String,
    pub close: String,
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            open: "[".to_string(),
            close: "]".to_string(),
        }
    }
}

pub fn render_view(view: &TableView, format: OutputFormat, markers: &Markers) -> Result<String> {
    if format == OutputFormat::Json {
        return Ok(serde_json::to_string_pretty(view)?);
    }
    Ok(render_table(view, markers))
}

/// Plain-text table, rows numbered from 1 in display order
pub fn render_table(view: &TableView, markers: &Markers) -> String {
    let mut out = String::new();

    if view.rows.is_empty() {
        if view.total == 0 {
            out.push_str("(no entries)\n");
        } else {
            out.push_str(&format!("(no entries match \"{}\")\n", view.query));
        }
    } else {
        let body: Vec<Vec<String>> = view
            .rows
            .iter()
            .map(|row| {
                row.cells
                    .iter()
                    .map(|cell| cell.render_with(&markers.open, &markers.close))
                    .collect()
            })
            .collect();

        let mut widths: Vec<usize> = view.headers.iter().map(|h| h.chars().count()).collect();
        for cells in &body {
            for (w, cell) in widths.iter_mut().zip(cells) {
                *w = (*w).max(cell.chars().count());
            }
        }
        let num_width = view.rows.len().to_string().len().max(1);

        // Header
        let mut line = format!("  {:>num_width$}", "#");
        for (col, header) in view.headers.iter().enumerate() {
            line.push_str("  ");
            line.push_str(&pad(header, widths[col], Column::ALL[col].is_numeric()));
        }
        out.push_str(line.trim_end());
        out.push('\n');

        let rule_len = 2 + num_width + widths.iter().map(|w| w + 2).sum::<usize>();
        out.push_str(&"-".repeat(rule_len));
        out.push('\n');

        for (i, (row, cells)) in view.rows.iter().zip(&body).enumerate() {
            let mark = if row.selected { '>' } else { ' ' };
            let mut line = format!("{} {:>num_width$}", mark, i + 1);
            for (col, cell) in cells.iter().enumerate() {
                line.push_str("  ");
                line.push_str(&pad(cell, widths[col], Column::ALL[col].is_numeric()));
            }
            out.push_str(line.trim_end());
            out.push('\n');
        }
    }

    out.push_str(&format!(
        "{} of {} entries | [{}] | {}\n",
        view.shown(),
        view.total,
        view.submit_label,
        view.relay_label
    ));
    out
}

fn pad(text: &str, width: usize, right: bool) -> String {
    let fill = width.saturating_sub(text.chars().count());
    if right {
        format!("{}{}", " ".repeat(fill), text)
    } else {
        format!("{}{}", text, " ".repeat(fill))
    }
}

/// Current form contents, one field per line
pub fn render_form(form: &EntryForm, submit_label: &str) -> String {
    let mut out = String::new();
    for field in FormField::ALL {
        out.push_str(&format!(
            "{:<26} {:<8} {}\n",
            field.label(),
            format!("({})", field.name()),
            form.get(field)
        ));
    }
    out.push_str(&format!("[{}]\n", submit_label));
    out
}
