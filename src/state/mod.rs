//! Application state and its transitions.
//!
//! The root window owns one [`AppState`]; panels never mutate it directly but
//! hand back [`Action`]s which are applied here.

pub mod list_panel;
pub mod menu;
pub mod seed;

#[cfg(test)]
mod tests;

use chrono::NaiveDate;

use crate::models::{Bulletin, CreateBulletin, CreateReport, CreateWarrant, ListEntity, Officer, Report, Unit, Warrant};

pub use list_panel::{ListPanelState, filter_records};
pub use menu::{MENU_ITEMS, MenuId, MenuItem};

/// A state transition requested by the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SelectMenu(MenuId),
    AddReport(CreateReport),
    AddBulletin(CreateBulletin),
    AddWarrant(CreateWarrant),
}

/// Everything the dashboard shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    pub active_menu: MenuId,
    pub officer: Officer,
    pub reports: Vec<Report>,
    pub bulletins: Vec<Bulletin>,
    pub warrants: Vec<Warrant>,
    pub units: Vec<Unit>,
}

impl AppState {
    /// State with the startup records.
    pub fn seeded(officer: Officer) -> Self {
        Self {
            active_menu: MenuId::default(),
            officer,
            reports: seed::reports(),
            bulletins: seed::bulletins(),
            warrants: seed::warrants(),
            units: seed::units(),
        }
    }

    /// Apply an action.
    ///
    /// `today` supplies the year in new ids and the warrant issue date.
    /// Returns the id of the created record, if any.
    pub fn apply(&mut self, action: Action, today: NaiveDate) -> Option<String> {
        match action {
            Action::SelectMenu(id) => {
                self.active_menu = id;
                None
            }
            Action::AddReport(draft) => Some(prepend(&mut self.reports, draft, today)),
            Action::AddBulletin(draft) => Some(prepend(&mut self.bulletins, draft, today)),
            Action::AddWarrant(draft) => Some(prepend(&mut self.warrants, draft, today)),
        }
    }
}

/// Create a record from `draft` and put it at the front of `list`.
fn prepend<E: ListEntity>(list: &mut Vec<E>, draft: E::Draft, today: NaiveDate) -> String {
    let id = E::ID_SCHEME.next(list.len(), today);
    list.insert(0, E::from_draft(draft, id.clone(), today));
    id
}
