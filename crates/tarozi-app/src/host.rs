//! Host capabilities the session calls but does not implement

use chrono::{Local, NaiveDate};
use tarozi_types::Result;

use crate::view::TableView;

/// Print facility
pub trait PrintFacility {
    fn print(&mut self, view: &TableView) -> Result<()>;
}

/// Restart facility; the session resets its own state afterwards
pub trait ReloadFacility {
    fn reload(&mut self);
}

/// Source of the default ticket date
pub trait DateSource {
    fn today(&self) -> NaiveDate;
}

/// Local calendar date
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalDate;

impl DateSource for LocalDate {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always the same date
#[derive(Debug, Clone, Copy)]
pub struct FixedDate(pub NaiveDate);

impl DateSource for FixedDate {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
