//! Left navigation sidebar.

use eframe::egui::{RichText, Ui};
use egui_phosphor::regular::{
    BRIEFCASE, CAR, CHAT_TEXT, FILE_TEXT, HOUSE, LOCK, RADIO, SCALES, SCROLL, SHIELD, USER, USERS, WARNING,
};

use super::components::{colors, nav_button};
use crate::state::{MENU_ITEMS, MenuId};

/// Icon glyph for a menu entry.
pub fn icon(id: MenuId) -> &'static str {
    match id {
        MenuId::Home => HOUSE,
        MenuId::Dispatch => RADIO,
        MenuId::Profile => USER,
        MenuId::Vehicles => CAR,
        MenuId::Reports => FILE_TEXT,
        MenuId::Cases => BRIEFCASE,
        MenuId::Warrants => WARNING,
        MenuId::Offences => SCALES,
        MenuId::Employees => USERS,
        MenuId::Chat => CHAT_TEXT,
        MenuId::Jail => LOCK,
        MenuId::Logs => SCROLL,
    }
}

/// Show the sidebar.
///
/// Returns `Some(id)` when an entry is clicked.
pub fn show(ui: &mut Ui, active: MenuId) -> Option<MenuId> {
    let mut selected = None;

    ui.add_space(20.0);

    // Branding
    ui.horizontal(|ui| {
        ui.label(RichText::new(SHIELD).size(36.0).color(colors::PRIMARY));
        ui.vertical(|ui| {
            ui.label(RichText::new("LSPD").size(20.0).strong());
            ui.label(RichText::new("Mobile Data Terminal").small().weak());
        });
    });

    ui.add_space(28.0);

    for item in MENU_ITEMS {
        if nav_button(ui, icon(item.id), item.label, item.id == active).clicked() {
            selected = Some(item.id);
        }
        ui.add_space(2.0);
    }

    selected
}
