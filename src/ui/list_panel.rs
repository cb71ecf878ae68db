//! Generic searchable list column with a create dialog.
//!
//! Reports, bulletins and warrants all render through [`show`]; each type
//! only supplies its labels, card and form through [`PanelView`].

use eframe::egui::{self, Align, Align2, Layout, RichText, ScrollArea, Ui};
use egui_phosphor::regular::PLUS;

use super::components::{panel_card, panel_title, primary_button_with_icon, record_card, search_box, styled_button};
use crate::error::ValidationError;
use crate::models::ListEntity;
use crate::state::ListPanelState;

/// Outcome of pressing the dialog's submit button.
pub type Submission<D> = Result<D, ValidationError>;

/// How a record type looks inside a list column.
pub trait PanelView: ListEntity {
    /// Unique salt for widget ids.
    const KEY: &'static str;
    const TITLE: &'static str;
    const SEARCH_HINT: &'static str;
    /// Label of the button that opens the dialog.
    const OPEN_LABEL: &'static str;
    const DIALOG_TITLE: &'static str;
    const SUBMIT_LABEL: &'static str;
    /// Success toast description.
    const SUCCESS_MESSAGE: &'static str;

    fn show_card(&self, ui: &mut Ui);

    fn show_form(draft: &mut Self::Draft, ui: &mut Ui);
}

/// Show a list column and, when open, its create dialog.
///
/// Returns `Some` when the submit button was pressed this frame.
pub fn show<E: PanelView>(ui: &mut Ui, panel: &mut ListPanelState<E>, records: &[E]) -> Option<Submission<E::Draft>> {
    panel_card(ui, |ui| {
        ui.horizontal(|ui| {
            panel_title(ui, E::TITLE);
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                if primary_button_with_icon(ui, PLUS, E::OPEN_LABEL).clicked() {
                    panel.open_dialog();
                }
            });
        });

        ui.add_space(10.0);
        search_box(ui, &mut panel.search, E::SEARCH_HINT);
        ui.add_space(10.0);

        let visible = panel.visible(records);
        ScrollArea::vertical()
            .id_salt(E::KEY)
            .auto_shrink([false, false])
            .show(ui, |ui| {
                if visible.is_empty() {
                    ui.label(RichText::new("No matching records").weak());
                }
                for record in visible {
                    record_card(ui, |ui| record.show_card(ui));
                    ui.add_space(8.0);
                }
            });
    });

    if panel.dialog_open {
        show_dialog(ui.ctx(), panel)
    } else {
        None
    }
}

fn show_dialog<E: PanelView>(ctx: &egui::Context, panel: &mut ListPanelState<E>) -> Option<Submission<E::Draft>> {
    let mut open = true;
    let mut cancelled = false;
    let mut submission = None;

    egui::Window::new(E::DIALOG_TITLE)
        .id(egui::Id::new((E::KEY, "create_dialog")))
        .collapsible(false)
        .resizable(false)
        .default_width(420.0)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .open(&mut open)
        .show(ctx, |ui| {
            ui.add_space(10.0);

            E::show_form(&mut panel.draft, ui);

            ui.add_space(15.0);
            ui.separator();
            ui.add_space(10.0);

            ui.horizontal(|ui| {
                if styled_button(ui, "Cancel").clicked() {
                    cancelled = true;
                }

                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    if primary_button_with_icon(ui, "", E::SUBMIT_LABEL).clicked() {
                        submission = Some(panel.submit());
                    }
                });
            });
        });

    if !open || cancelled {
        panel.close_dialog();
    }

    submission
}
