use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::service::format::format_number;

/// One weighbridge ticket
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TicketEntry {
    pub plate_number: String,
    #[serde(default)]
    pub check_number: String,
    pub gross_weight: f64, // yuk bilan
    pub tare_weight: f64,  // yuksiz
    pub net_weight: f64,   // sof vazn
    pub date: NaiveDate,
    #[serde(default)]
    pub price: f64,
}

/// Table columns in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Plate,
    Check,
    Gross,
    Date,
    Tare,
    Net,
    Price,
}

impl Column {
    pub const ALL: [Column; 7] = [
        Column::Plate,
        Column::Check,
        Column::Gross,
        Column::Date,
        Column::Tare,
        Column::Net,
        Column::Price,
    ];

    /// Header label
    pub fn label(&self) -> &'static str {
        match self {
            Column::Plate => "Plate No.",
            Column::Check => "Check No.",
            Column::Gross => "Gross",
            Column::Date => "Date",
            Column::Tare => "Tare",
            Column::Net => "Net",
            Column::Price => "Price",
        }
    }

    /// Right-aligned numeric column
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            Column::Gross | Column::Tare | Column::Net | Column::Price
        )
    }
}

impl TicketEntry {
    /// Raw string form of a field, used for search matching.
    ///
    /// Numbers use their plain value (`10000`, `6000.5`), not the grouped
    /// display string.
    pub fn raw_field(&self, column: Column) -> String {
        match column {
            Column::Plate => self.plate_number.clone(),
            Column::Check => self.check_number.clone(),
            Column::Gross => self.gross_weight.to_string(),
            Column::Date => self.date.format("%Y-%m-%d").to_string(),
            Column::Tare => self.tare_weight.to_string(),
            Column::Net => self.net_weight.to_string(),
            Column::Price => self.price.to_string(),
        }
    }

    /// Display form of a field as shown in the table
    pub fn display_field(&self, column: Column) -> String {
        match column {
            Column::Check if self.check_number.is_empty() => "-".to_string(),
            Column::Gross => format_number(self.gross_weight),
            Column::Tare => format_number(self.tare_weight),
            Column::Net => format_number(self.net_weight),
            Column::Price => format_number(self.price),
            other => self.raw_field(other),
        }
    }

    pub fn raw_fields(&self) -> [String; 7] {
        Column::ALL.map(|c| self.raw_field(c))
    }

    pub fn display_fields(&self) -> [String; 7] {
        Column::ALL.map(|c| self.display_field(c))
    }
}
