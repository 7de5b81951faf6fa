//! Ticket entry form
//!
//! Holds the raw text of every input. Nothing is parsed until submission,
//! except the net weight, which follows gross and tare as they are typed.

use std::str::FromStr;

use chrono::NaiveDate;
use tarozi_domain::service::{format_fixed, net_weight, parse_weight, resolve_price};
use tarozi_domain::TicketEntry;
use tarozi_types::{Error, ValidationError};
use tracing::debug;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Form inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    PlateNumber,
    CheckNumber,
    GrossWeight,
    TareWeight,
    NetWeight,
    Date,
    Summa30,
    Summa40,
    Price,
}

impl FormField {
    pub const ALL: [FormField; 9] = [
        FormField::PlateNumber,
        FormField::CheckNumber,
        FormField::GrossWeight,
        FormField::TareWeight,
        FormField::NetWeight,
        FormField::Date,
        FormField::Summa30,
        FormField::Summa40,
        FormField::Price,
    ];

    /// Short name used on the command line
    pub fn name(&self) -> &'static str {
        match self {
            FormField::PlateNumber => "plate",
            FormField::CheckNumber => "check",
            FormField::GrossWeight => "gross",
            FormField::TareWeight => "tare",
            FormField::NetWeight => "net",
            FormField::Date => "date",
            FormField::Summa30 => "summa30",
            FormField::Summa40 => "summa40",
            FormField::Price => "price",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FormField::PlateNumber => "Plate number",
            FormField::CheckNumber => "Check number",
            FormField::GrossWeight => "Gross weight (yuk bilan)",
            FormField::TareWeight => "Tare weight (yuksiz)",
            FormField::NetWeight => "Net weight (sof vazn)",
            FormField::Date => "Date",
            FormField::Summa30 => "Summa 30",
            FormField::Summa40 => "Summa 40",
            FormField::Price => "Price",
        }
    }

    /// Field a validation failure refers to
    pub fn from_validation(err: &ValidationError) -> FormField {
        match err.field() {
            "plate_number" => FormField::PlateNumber,
            "gross_weight" => FormField::GrossWeight,
            "tare_weight" => FormField::TareWeight,
            _ => FormField::Date,
        }
    }
}

impl FromStr for FormField {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase().replace(['-', '_'], "");
        FormField::ALL
            .into_iter()
            .find(|f| f.name() == key)
            .ok_or_else(|| Error::InvalidArgument(format!("unknown field '{}'", s)))
    }
}

/// Raw form state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryForm {
    pub plate_number: String,
    pub check_number: String,
    pub gross_weight: String,
    pub tare_weight: String,
    pub net_weight: String,
    pub date: String,
    pub summa_30: String,
    pub summa_40: String,
    pub price: String,
}

impl EntryForm {
    /// Empty form with the date defaulted to `today`
    pub fn new(today: NaiveDate) -> Self {
        Self {
            plate_number: String::new(),
            check_number: String::new(),
            gross_weight: String::new(),
            tare_weight: String::new(),
            net_weight: String::new(),
            date: today.format(DATE_FORMAT).to_string(),
            summa_30: String::new(),
            summa_40: String::new(),
            price: String::new(),
        }
    }

    /// Reset every field, date back to `today`
    pub fn clear(&mut self, today: NaiveDate) {
        *self = Self::new(today);
    }

    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::PlateNumber => &self.plate_number,
            FormField::CheckNumber => &self.check_number,
            FormField::GrossWeight => &self.gross_weight,
            FormField::TareWeight => &self.tare_weight,
            FormField::NetWeight => &self.net_weight,
            FormField::Date => &self.date,
            FormField::Summa30 => &self.summa_30,
            FormField::Summa40 => &self.summa_40,
            FormField::Price => &self.price,
        }
    }

    pub fn get_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::PlateNumber => &mut self.plate_number,
            FormField::CheckNumber => &mut self.check_number,
            FormField::GrossWeight => &mut self.gross_weight,
            FormField::TareWeight => &mut self.tare_weight,
            FormField::NetWeight => &mut self.net_weight,
            FormField::Date => &mut self.date,
            FormField::Summa30 => &mut self.summa_30,
            FormField::Summa40 => &mut self.summa_40,
            FormField::Price => &mut self.price,
        }
    }

    /// Set a field as if typed; gross and tare edits refresh the net weight
    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        *self.get_mut(field) = value.into();
        if matches!(field, FormField::GrossWeight | FormField::TareWeight) {
            self.on_weight_input();
        }
    }

    /// Recompute the net field from gross and tare.
    ///
    /// A zero result leaves the field blank.
    pub fn on_weight_input(&mut self) {
        let net = net_weight(parse_weight(&self.gross_weight), parse_weight(&self.tare_weight));
        self.net_weight = if net != 0.0 {
            format_fixed(net)
        } else {
            String::new()
        };
    }

    /// Presence checks on the required fields, then the date
    pub fn validate(&self) -> Result<NaiveDate, ValidationError> {
        let required = [
            ("plate_number", &self.plate_number),
            ("gross_weight", &self.gross_weight),
            ("tare_weight", &self.tare_weight),
            ("date", &self.date),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(ValidationError::Required { field });
            }
        }

        NaiveDate::parse_from_str(self.date.trim(), DATE_FORMAT).map_err(|_| {
            ValidationError::InvalidDate {
                value: self.date.clone(),
            }
        })
    }

    /// Build the entry to store.
    ///
    /// A net field that parses to zero or below (blank included) is
    /// recomputed from gross and tare; any positive value typed is kept.
    pub fn to_payload(&self) -> Result<TicketEntry, ValidationError> {
        let date = self.validate()?;

        let gross = parse_weight(&self.gross_weight);
        let tare = parse_weight(&self.tare_weight);
        let mut net = parse_weight(&self.net_weight);
        if net <= 0.0 {
            net = net_weight(gross, tare);
        }
        let (price, source) = resolve_price(&self.price, &self.summa_40, &self.summa_30);
        debug!(price, ?source, "price resolved");

        Ok(TicketEntry {
            plate_number: self.plate_number.trim().to_string(),
            check_number: self.check_number.trim().to_string(),
            gross_weight: gross,
            tare_weight: tare,
            net_weight: net,
            date,
            price,
        })
    }

    /// Populate from a stored entry for editing.
    ///
    /// The summa fields are left as they are; the net field is recomputed
    /// from the loaded gross and tare.
    pub fn load(&mut self, entry: &TicketEntry) {
        self.plate_number = entry.plate_number.clone();
        self.check_number = entry.check_number.clone();
        self.gross_weight = entry.gross_weight.to_string();
        self.tare_weight = entry.tare_weight.to_string();
        self.date = entry.date.format(DATE_FORMAT).to_string();
        self.price = if entry.price != 0.0 {
            entry.price.to_string()
        } else {
            String::new()
        };
        self.on_weight_input();
    }
}
