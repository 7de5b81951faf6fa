//! Application layer - session state, form handling, host capabilities

pub mod alarm;
pub mod config;
pub mod export;
pub mod form;
pub mod host;
pub mod logging;
pub mod selection;
pub mod session;
pub mod view;

pub use alarm::{AlarmDevice, AlarmRelay, Playback, StartOutcome};
pub use form::{EntryForm, FormField};
pub use host::{DateSource, FixedDate, LocalDate, PrintFacility, ReloadFacility};
pub use selection::Selection;
pub use session::{Session, SubmitOutcome};
pub use view::{RowView, TableView};
