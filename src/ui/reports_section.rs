//! Recent reports column.

use eframe::egui::{self, Align, Layout, RichText, Ui};

use super::components::badge;
use super::list_panel::PanelView;
use crate::models::{CreateReport, Report, ReportStatus};

impl PanelView for Report {
    const KEY: &'static str = "reports";
    const TITLE: &'static str = "Recent Reports";
    const SEARCH_HINT: &'static str = "Search reports...";
    const OPEN_LABEL: &'static str = "Create";
    const DIALOG_TITLE: &'static str = "Create New Report";
    const SUBMIT_LABEL: &'static str = "Create Report";
    const SUCCESS_MESSAGE: &'static str = "Report created successfully";

    fn show_card(&self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            ui.label(RichText::new(&self.id).monospace().small().weak());
            ui.with_layout(Layout::right_to_left(Align::Min), |ui| {
                badge(ui, &self.status.badge_text(), self.status.badge());
            });
        });
        ui.label(RichText::new(&self.title).strong());
        ui.horizontal(|ui| {
            ui.label(RichText::new(&self.officer).small().weak());
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                ui.label(RichText::new(&self.time).small().weak());
            });
        });
    }

    fn show_form(draft: &mut CreateReport, ui: &mut Ui) {
        egui::Grid::new("report_form_grid")
            .num_columns(2)
            .spacing([20.0, 10.0])
            .show(ui, |ui| {
                ui.label("Report Title:");
                ui.add(
                    egui::TextEdit::singleline(&mut draft.title)
                        .desired_width(260.0)
                        .hint_text("Enter report title..."),
                );
                ui.end_row();

                ui.label("Officer Name:");
                ui.add(
                    egui::TextEdit::singleline(&mut draft.officer)
                        .desired_width(260.0)
                        .hint_text("Enter officer name..."),
                );
                ui.end_row();

                ui.label("Status:");
                egui::ComboBox::from_id_salt("report_form_status")
                    .width(260.0)
                    .selected_text(draft.status.label())
                    .show_ui(ui, |ui| {
                        for status in ReportStatus::ALL {
                            ui.selectable_value(&mut draft.status, status, status.label());
                        }
                    });
                ui.end_row();

                ui.label("Description:");
                ui.add(
                    egui::TextEdit::multiline(&mut draft.description)
                        .desired_width(260.0)
                        .desired_rows(4)
                        .hint_text("Enter report description..."),
                );
                ui.end_row();
            });
    }
}
