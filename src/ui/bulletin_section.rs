//! Bulletin board column.

use eframe::egui::{self, Align, Layout, RichText, Ui};

use super::components::badge;
use super::list_panel::PanelView;
use crate::models::{Bulletin, BulletinPriority, CreateBulletin};

impl PanelView for Bulletin {
    const KEY: &'static str = "bulletins";
    const TITLE: &'static str = "Bulletin Board";
    const SEARCH_HINT: &'static str = "Search bulletins...";
    const OPEN_LABEL: &'static str = "Add";
    const DIALOG_TITLE: &'static str = "Add New Bulletin";
    const SUBMIT_LABEL: &'static str = "Add Bulletin";
    const SUCCESS_MESSAGE: &'static str = "Bulletin added successfully";

    fn show_card(&self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            ui.label(RichText::new(&self.id).monospace().small().weak());
            ui.with_layout(Layout::right_to_left(Align::Min), |ui| {
                badge(ui, self.priority.as_str(), self.priority.badge());
            });
        });
        ui.label(RichText::new(&self.title).strong());
        ui.add_space(4.0);
        ui.label(RichText::new(&self.time).small().weak());
    }

    fn show_form(draft: &mut CreateBulletin, ui: &mut Ui) {
        egui::Grid::new("bulletin_form_grid")
            .num_columns(2)
            .spacing([20.0, 10.0])
            .show(ui, |ui| {
                ui.label("Bulletin Title:");
                ui.add(
                    egui::TextEdit::singleline(&mut draft.title)
                        .desired_width(260.0)
                        .hint_text("Enter bulletin title..."),
                );
                ui.end_row();

                ui.label("Priority:");
                egui::ComboBox::from_id_salt("bulletin_form_priority")
                    .width(260.0)
                    .selected_text(draft.priority.label())
                    .show_ui(ui, |ui| {
                        for priority in BulletinPriority::ALL {
                            ui.selectable_value(&mut draft.priority, priority, priority.label());
                        }
                    });
                ui.end_row();

                ui.label("Description:");
                ui.add(
                    egui::TextEdit::multiline(&mut draft.description)
                        .desired_width(260.0)
                        .desired_rows(4)
                        .hint_text("Enter bulletin description..."),
                );
                ui.end_row();
            });
    }
}
