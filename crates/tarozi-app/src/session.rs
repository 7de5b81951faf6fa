//! Application state and the user actions that drive it

use tarozi_domain::TicketEntry;
use tarozi_store::EntryStore;
use tarozi_types::{Result, ValidationError};
use tracing::{debug, info};

use crate::alarm::{AlarmDevice, AlarmRelay};
use crate::form::{EntryForm, FormField};
use crate::host::{DateSource, LocalDate, PrintFacility, ReloadFacility};
use crate::selection::Selection;
use crate::view::{build_view, TableView};

/// What a successful submission did to the store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Added,
    Updated(usize),
    /// The edit target disappeared; nothing was written
    Skipped(usize),
}

/// The whole register: store, form, selection, search and alarm relay
pub struct Session {
    store: EntryStore,
    form: EntryForm,
    selection: Selection,
    search: String,
    alarm: AlarmRelay,
    focus_request: Option<FormField>,
    dates: Box<dyn DateSource>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Box::new(LocalDate), true)
    }
}

impl Session {
    /// `alarm_on_start` sets the relay for this first start only; a reload
    /// always re-arms it.
    pub fn new(dates: Box<dyn DateSource>, alarm_on_start: bool) -> Self {
        let form = EntryForm::new(dates.today());
        Self {
            store: EntryStore::new(),
            form,
            selection: Selection::Idle,
            search: String::new(),
            alarm: AlarmRelay::new(alarm_on_start),
            focus_request: None,
            dates,
        }
    }

    pub fn store(&self) -> &EntryStore {
        &self.store
    }

    pub fn form(&self) -> &EntryForm {
        &self.form
    }

    /// Direct access for adapters that bind widgets to the form.
    /// Call [`EntryForm::on_weight_input`] after editing gross or tare.
    pub fn form_mut(&mut self) -> &mut EntryForm {
        &mut self.form
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn alarm(&self) -> &AlarmRelay {
        &self.alarm
    }

    /// Type into a form field
    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        self.form.set(field, value);
    }

    /// Reset the form; an edit in progress is abandoned but the row
    /// stays selected
    pub fn clear_form(&mut self) {
        self.form.clear(self.dates.today());
        if let Some(index) = self.selection.editing_index() {
            self.selection.select(index);
        }
    }

    /// Select by position in the currently displayed (filtered) table.
    ///
    /// Returns the store index the row maps to.
    pub fn select_row(&mut self, display_row: usize) -> Option<usize> {
        let view = self.view();
        let store_index = view.rows.get(display_row)?.store_index;
        self.select_index(store_index);
        Some(store_index)
    }

    /// Select by store index; out-of-range indices are ignored
    pub fn select_index(&mut self, index: usize) -> bool {
        if index >= self.store.len() {
            debug!(index, "select ignored: no such entry");
            return false;
        }
        self.selection.select(index);
        debug!(index, "row selected");
        true
    }

    /// Load the selected entry into the form for editing.
    ///
    /// Does nothing (returns false) when no existing entry is selected.
    pub fn edit(&mut self) -> bool {
        let Some(index) = self.selection.selected_index() else {
            debug!("edit ignored: nothing selected");
            return false;
        };
        let Some(entry) = self.store.get(index) else {
            debug!(index, "edit ignored: selection no longer exists");
            return false;
        };

        self.form.load(entry);
        self.selection.begin_edit();
        self.focus_request = Some(FormField::PlateNumber);
        info!(index, "editing entry");
        true
    }

    /// Add or save the form contents.
    ///
    /// On a validation failure the store, form and selection are left
    /// untouched and the error names the field to point the user at.
    pub fn submit(&mut self, device: &mut dyn AlarmDevice) -> std::result::Result<SubmitOutcome, ValidationError> {
        let payload = match self.form.to_payload() {
            Ok(payload) => payload,
            Err(e) => {
                debug!(field = e.field(), "submission rejected");
                self.focus_request = Some(FormField::from_validation(&e));
                return Err(e);
            }
        };

        let outcome = match self.selection.editing_index() {
            Some(index) => {
                if self.store.update(index, payload) {
                    info!(index, "entry saved");
                    SubmitOutcome::Updated(index)
                } else {
                    SubmitOutcome::Skipped(index)
                }
            }
            None => {
                info!(plate = %payload.plate_number, "entry added");
                self.store.add(payload);
                SubmitOutcome::Added
            }
        };

        self.alarm.ensure_running(device);
        self.form.clear(self.dates.today());
        self.selection.reset();
        Ok(outcome)
    }

    /// Remove the selected entry; a no-op without a selection
    pub fn delete(&mut self) -> Option<TicketEntry> {
        let index = self.selection.selected_index()?;
        let removed = self.store.remove(Some(index));
        if self.selection.is_editing() {
            self.form.clear(self.dates.today());
        }
        self.selection.reset();
        if removed.is_some() {
            info!(index, "entry deleted");
        }
        removed
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search = query.into();
        debug!(query = %self.search, "search updated");
    }

    pub fn toggle_relay(&mut self, device: &mut dyn AlarmDevice) -> bool {
        self.alarm.toggle(device)
    }

    pub fn confirm_alarm_started(&mut self) {
        self.alarm.confirm_started();
    }

    pub fn confirm_alarm_blocked(&mut self) {
        self.alarm.confirm_blocked();
    }

    /// Hand the current (filtered) view to the print facility
    pub fn print(&self, printer: &mut dyn PrintFacility) -> Result<()> {
        let view = self.view();
        info!(rows = view.shown(), "printing");
        printer.print(&view)
    }

    /// Discard everything and start over
    pub fn reload(&mut self, reloader: &mut dyn ReloadFacility, device: &mut dyn AlarmDevice) {
        info!(entries = self.store.len(), "reloading session");
        self.alarm.shutdown(device);
        reloader.reload();

        let today = self.dates.today();
        self.store.clear();
        self.form.clear(today);
        self.selection.reset();
        self.search.clear();
        self.alarm = AlarmRelay::new(true);
        self.focus_request = None;
    }

    /// Pending focus request for the adapter, consumed on read
    pub fn take_focus_request(&mut self) -> Option<FormField> {
        self.focus_request.take()
    }

    pub fn view(&self) -> TableView {
        build_view(&self.store, self.selection, &self.search, &self.alarm)
    }
}
