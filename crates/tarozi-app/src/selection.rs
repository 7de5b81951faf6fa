//! Row selection and edit tracking
//!
//! Indices always refer to positions in the unfiltered store.

/// Selection/edit state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    Idle,
    Selected(usize),
    Editing(usize),
}

impl Selection {
    /// Row targeted by edit/delete; editing implies the row is selected
    pub fn selected_index(&self) -> Option<usize> {
        match *self {
            Selection::Idle => None,
            Selection::Selected(i) | Selection::Editing(i) => Some(i),
        }
    }

    /// Row the next submission overwrites
    pub fn editing_index(&self) -> Option<usize> {
        match *self {
            Selection::Editing(i) => Some(i),
            _ => None,
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, Selection::Editing(_))
    }

    /// Any state -> `Selected(index)`
    pub fn select(&mut self, index: usize) {
        *self = Selection::Selected(index);
    }

    /// `Selected(i)` -> `Editing(i)`; re-entering an edit keeps `Editing(i)`.
    ///
    /// Returns the index to load, or `None` when nothing is selected.
    pub fn begin_edit(&mut self) -> Option<usize> {
        let index = self.selected_index()?;
        *self = Selection::Editing(index);
        Some(index)
    }

    pub fn reset(&mut self) {
        *self = Selection::Idle;
    }

    /// Label of the submit action
    pub fn submit_label(&self) -> &'static str {
        if self.is_editing() {
            "Save"
        } else {
            "Add"
        }
    }
}
