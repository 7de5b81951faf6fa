//! Printable exports of the ticket table (Excel and CSV)

use rust_xlsxwriter::{Format, Workbook, Worksheet};
use std::path::{Path, PathBuf};
use tarozi_domain::service::format_fixed;
use tarozi_domain::Column;
use tarozi_types::{Error, Result};
use tracing::info;

use crate::host::PrintFacility;
use crate::view::TableView;

/// Write the view to `output_path`, picking the format from the extension
pub fn export_view(view: &TableView, output_path: &Path) -> Result<()> {
    let ext = output_path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match ext.as_deref() {
        Some("xlsx") => export_to_excel(view, output_path),
        Some("csv") => export_to_csv(view, output_path),
        _ => Err(Error::Export(format!(
            "unsupported export file: {} (use .xlsx or .csv)",
            output_path.display()
        ))),
    }
}

/// Export visible rows to an Excel workbook
pub fn export_to_excel(view: &TableView, output_path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();

    let sheet = workbook.add_worksheet();
    write_tickets_sheet(sheet, view)?;

    workbook
        .save(output_path)
        .map_err(|e| Error::Export(e.to_string()))?;

    info!(path = %output_path.display(), rows = view.shown(), "exported xlsx");
    Ok(())
}

fn write_tickets_sheet(sheet: &mut Worksheet, view: &TableView) -> Result<()> {
    sheet
        .set_name("Tickets")
        .map_err(|e| Error::Export(e.to_string()))?;

    let header_format = Format::new().set_bold();
    let number_format = Format::new().set_num_format("#,##0.00");
    let total_format = Format::new().set_bold().set_num_format("#,##0.00");

    for (col, header) in view.headers.iter().enumerate() {
        sheet
            .write_string_with_format(0, col as u16, *header, &header_format)
            .map_err(|e| Error::Export(e.to_string()))?;
    }

    let mut net_total = 0.0;
    let mut price_total = 0.0;

    for (row_idx, row) in view.rows.iter().enumerate() {
        let r = (row_idx + 1) as u32;
        let entry = &row.entry;

        for (col, column) in Column::ALL.iter().enumerate() {
            let c = col as u16;
            let value = match column {
                Column::Gross => Some(entry.gross_weight),
                Column::Tare => Some(entry.tare_weight),
                Column::Net => Some(entry.net_weight),
                Column::Price => Some(entry.price),
                _ => None,
            };
            match value {
                Some(n) => sheet
                    .write_number_with_format(r, c, n, &number_format)
                    .map_err(|e| Error::Export(e.to_string()))?,
                None => sheet
                    .write_string(r, c, &row.cells[col].text)
                    .map_err(|e| Error::Export(e.to_string()))?,
            };
        }

        net_total += entry.net_weight;
        price_total += entry.price;
    }

    // Totals row
    let total_row = (view.rows.len() + 1) as u32;
    sheet
        .write_string_with_format(total_row, 0, "Total", &header_format)
        .map_err(|e| Error::Export(e.to_string()))?;
    sheet
        .write_number_with_format(total_row, 5, net_total, &total_format)
        .map_err(|e| Error::Export(e.to_string()))?;
    sheet
        .write_number_with_format(total_row, 6, price_total, &total_format)
        .map_err(|e| Error::Export(e.to_string()))?;

    sheet
        .set_column_width(0, 14)
        .map_err(|e| Error::Export(e.to_string()))?;
    sheet
        .set_column_width(3, 12)
        .map_err(|e| Error::Export(e.to_string()))?;

    Ok(())
}

/// Export visible rows to CSV with plain two-decimal numbers
pub fn export_to_csv(view: &TableView, output_path: &Path) -> Result<()> {
    let mut writer =
        csv::Writer::from_path(output_path).map_err(|e| Error::Export(e.to_string()))?;

    writer
        .write_record(view.headers)
        .map_err(|e| Error::Export(e.to_string()))?;

    for row in &view.rows {
        let entry = &row.entry;
        let record = [
            entry.plate_number.clone(),
            entry.check_number.clone(),
            format_fixed(entry.gross_weight),
            entry.date.format("%Y-%m-%d").to_string(),
            format_fixed(entry.tare_weight),
            format_fixed(entry.net_weight),
            format_fixed(entry.price),
        ];
        writer
            .write_record(&record)
            .map_err(|e| Error::Export(e.to_string()))?;
    }

    writer.flush()?;
    info!(path = %output_path.display(), rows = view.shown(), "exported csv");
    Ok(())
}

/// Print facility that writes the table to a file
#[derive(Debug, Clone)]
pub struct FilePrinter {
    pub path: PathBuf,
}

impl FilePrinter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl PrintFacility for FilePrinter {
    fn print(&mut self, view: &TableView) -> Result<()> {
        export_view(view, &self.path)
    }
}
