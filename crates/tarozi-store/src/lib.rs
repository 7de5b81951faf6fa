//! In-memory ticket store
//!
//! Entries are kept newest-first. Position is the only identity an entry
//! has, so any index handed out is only valid until the next mutation.

use tarozi_domain::TicketEntry;
use tracing::debug;

/// Ordered sequence of tickets
#[derive(Debug, Clone, Default)]
pub struct EntryStore {
    entries: Vec<TicketEntry>,
}

impl EntryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert at the front (most recent first)
    pub fn add(&mut self, entry: TicketEntry) {
        debug!(plate = %entry.plate_number, "adding entry at front");
        self.entries.insert(0, entry);
    }

    /// Replace the entry at `index` in place.
    ///
    /// Returns false without touching the store when `index` is out of range.
    pub fn update(&mut self, index: usize, entry: TicketEntry) -> bool {
        match self.entries.get_mut(index) {
            Some(slot) => {
                debug!(index, plate = %entry.plate_number, "replacing entry");
                *slot = entry;
                true
            }
            None => {
                debug!(index, len = self.entries.len(), "update ignored: index out of range");
                false
            }
        }
    }

    /// Remove the entry at `index`.
    ///
    /// `None` means nothing is selected; that and an out-of-range index are
    /// both no-ops.
    pub fn remove(&mut self, index: Option<usize>) -> Option<TicketEntry> {
        let Some(index) = index else {
            debug!("remove ignored: no selection");
            return None;
        };
        if index >= self.entries.len() {
            debug!(index, len = self.entries.len(), "remove ignored: index out of range");
            return None;
        }
        let removed = self.entries.remove(index);
        debug!(index, plate = %removed.plate_number, "removed entry");
        Some(removed)
    }

    pub fn get(&self, index: usize) -> Option<&TicketEntry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TicketEntry> {
        self.entries.iter()
    }

    pub fn as_slice(&self) -> &[TicketEntry] {
        &self.entries
    }

    /// Drop every entry
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn entry(plate: &str) -> TicketEntry {
        TicketEntry {
            plate_number: plate.to_string(),
            check_number: String::new(),
            gross_weight: 100.0,
            tare_weight: 40.0,
            net_weight: 60.0,
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            price: 0.0,
        }
    }

    fn plates(store: &EntryStore) -> Vec<&str> {
        store.iter().map(|e| e.plate_number.as_str()).collect()
    }

    #[test]
    fn test_add_is_newest_first() {
        let mut store = EntryStore::new();
        for plate in ["A", "B", "C", "D"] {
            store.add(entry(plate));
        }
        assert_eq!(store.len(), 4);
        assert_eq!(plates(&store), vec!["D", "C", "B", "A"]);
    }

    #[test]
    fn test_update_in_place() {
        let mut store = EntryStore::new();
        for plate in ["A", "B", "C"] {
            store.add(entry(plate));
        }
        assert!(store.update(1, entry("B2")));
        assert_eq!(plates(&store), vec!["C", "B2", "A"]);
    }

    #[test]
    fn test_update_out_of_range_is_noop() {
        let mut store = EntryStore::new();
        store.add(entry("A"));
        assert!(!store.update(5, entry("Z")));
        assert_eq!(plates(&store), vec!["A"]);
    }

    #[test]
    fn test_remove_exact_entry() {
        let mut store = EntryStore::new();
        for plate in ["A", "B", "C"] {
            store.add(entry(plate));
        }
        let removed = store.remove(Some(1)).unwrap();
        assert_eq!(removed.plate_number, "B");
        assert_eq!(plates(&store), vec!["C", "A"]);
    }

    #[test]
    fn test_remove_without_selection_is_noop() {
        let mut store = EntryStore::new();
        store.add(entry("A"));
        assert!(store.remove(None).is_none());
        assert!(store.remove(Some(3)).is_none());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_clear() {
        let mut store = EntryStore::new();
        store.add(entry("A"));
        store.clear();
        assert!(store.is_empty());
        assert!(store.get(0).is_none());
    }
}
