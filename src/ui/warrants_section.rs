//! Recent warrants column.

use eframe::egui::{self, Align, Layout, RichText, Ui};

use super::components::badge;
use super::list_panel::PanelView;
use crate::models::{CreateWarrant, Warrant, WarrantStatus};

impl PanelView for Warrant {
    const KEY: &'static str = "warrants";
    const TITLE: &'static str = "Recent Warrants";
    const SEARCH_HINT: &'static str = "Search warrants...";
    const OPEN_LABEL: &'static str = "Create";
    const DIALOG_TITLE: &'static str = "Create New Warrant";
    const SUBMIT_LABEL: &'static str = "Create Warrant";
    const SUCCESS_MESSAGE: &'static str = "Warrant created successfully";

    fn show_card(&self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            ui.label(RichText::new(&self.id).monospace().small().weak());
            ui.with_layout(Layout::right_to_left(Align::Min), |ui| {
                badge(ui, self.status.as_str(), self.status.badge());
            });
        });
        ui.label(RichText::new(&self.name).strong());
        ui.label(RichText::new(&self.charge).small().weak());
        ui.label(RichText::new(self.date_label()).small().weak());
    }

    fn show_form(draft: &mut CreateWarrant, ui: &mut Ui) {
        egui::Grid::new("warrant_form_grid")
            .num_columns(2)
            .spacing([20.0, 10.0])
            .show(ui, |ui| {
                ui.label("Suspect Name:");
                ui.add(
                    egui::TextEdit::singleline(&mut draft.name)
                        .desired_width(260.0)
                        .hint_text("Enter suspect name..."),
                );
                ui.end_row();

                ui.label("Charge:");
                ui.add(
                    egui::TextEdit::singleline(&mut draft.charge)
                        .desired_width(260.0)
                        .hint_text("Enter charge..."),
                );
                ui.end_row();

                ui.label("Status:");
                egui::ComboBox::from_id_salt("warrant_form_status")
                    .width(260.0)
                    .selected_text(draft.status.label())
                    .show_ui(ui, |ui| {
                        for status in WarrantStatus::ALL {
                            ui.selectable_value(&mut draft.status, status, status.label());
                        }
                    });
                ui.end_row();
            });
    }
}
