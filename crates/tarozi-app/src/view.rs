//! View model computed from session state
//!
//! Rendering adapters (terminal, GUI, export) consume this instead of
//! reading the session directly.

use serde::Serialize;
use tarozi_domain::service::{filter, HighlightedText};
use tarozi_domain::{Column, TicketEntry};
use tarozi_store::EntryStore;

use crate::alarm::{AlarmRelay, Playback};
use crate::selection::Selection;

/// One visible table row
#[derive(Debug, Clone, Serialize)]
pub struct RowView {
    /// Position in the unfiltered store
    pub store_index: usize,
    pub selected: bool,
    /// Display cells in [`Column::ALL`] order
    pub cells: [HighlightedText; 7],
    pub entry: TicketEntry,
}

/// Whole table plus the labels that depend on state
#[derive(Debug, Clone, Serialize)]
pub struct TableView {
    pub headers: [&'static str; 7],
    pub rows: Vec<RowView>,
    pub query: String,
    pub total: usize,
    pub submit_label: &'static str,
    pub relay_label: &'static str,
    pub alarm_active: bool,
    pub playback: Playback,
}

impl TableView {
    pub fn shown(&self) -> usize {
        self.rows.len()
    }
}

pub fn build_view(
    store: &EntryStore,
    selection: Selection,
    query: &str,
    alarm: &AlarmRelay,
) -> TableView {
    let selected = selection.selected_index();
    let rows = filter(store.as_slice(), query)
        .into_iter()
        .map(|(store_index, entry)| RowView {
            store_index,
            selected: selected == Some(store_index),
            cells: entry.display_fields().map(|text| HighlightedText::new(text, query)),
            entry: entry.clone(),
        })
        .collect();

    TableView {
        headers: Column::ALL.map(|c| c.label()),
        rows,
        query: query.to_string(),
        total: store.len(),
        submit_label: selection.submit_label(),
        relay_label: alarm.label(),
        alarm_active: alarm.is_active(),
        playback: alarm.playback(),
    }
}
