//! State behind one searchable list with a create dialog.

use crate::error::ValidationError;
use crate::models::ListEntity;

/// Records whose id or search fields contain `term`, ignoring case.
///
/// Keeps the source order; an empty term keeps everything.
pub fn filter_records<'a, E: ListEntity>(records: &'a [E], term: &str) -> impl Iterator<Item = &'a E> + use<'a, E> {
    let needle = term.to_lowercase();
    records.iter().filter(move |record| record.matches(&needle))
}

/// Search box, dialog flag and draft for one list panel.
pub struct ListPanelState<E: ListEntity> {
    pub search: String,
    pub dialog_open: bool,
    pub draft: E::Draft,
}

impl<E: ListEntity> Default for ListPanelState<E> {
    fn default() -> Self {
        Self {
            search: String::new(),
            dialog_open: false,
            draft: E::Draft::default(),
        }
    }
}

impl<E: ListEntity> ListPanelState<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records matching the current search term.
    pub fn visible<'a>(&self, records: &'a [E]) -> Vec<&'a E> {
        filter_records(records, &self.search).collect()
    }

    pub fn open_dialog(&mut self) {
        self.dialog_open = true;
    }

    /// Close without submitting. The draft is kept for the next open.
    pub fn close_dialog(&mut self) {
        self.dialog_open = false;
    }

    /// Validate the draft and hand it over.
    ///
    /// On success the dialog closes and the draft resets to its defaults.
    /// On failure nothing changes.
    pub fn submit(&mut self) -> Result<E::Draft, ValidationError> {
        E::validate(&self.draft)?;
        self.dialog_open = false;
        Ok(std::mem::take(&mut self.draft))
    }
}
