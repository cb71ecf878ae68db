//! Top bar with the logged-in officer.

use eframe::egui::{Align, Color32, Layout, RichText, Ui};

use super::components::{avatar, badge, colors};
use crate::models::{BadgeVariant, Officer};

/// Show the header.
pub fn show(ui: &mut Ui, officer: &Officer) {
    ui.add_space(10.0);
    ui.horizontal(|ui| {
        ui.heading(RichText::new("Police Dashboard").size(24.0).strong());

        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            avatar(ui, &officer.initials(), 40.0, colors::PRIMARY, Color32::WHITE);
            ui.add_space(8.0);

            ui.with_layout(Layout::top_down(Align::Max), |ui| {
                ui.label(RichText::new(&officer.name).strong());
                ui.horizontal(|ui| {
                    badge(ui, &officer.rank, BadgeVariant::Default);
                    ui.label(RichText::new(format!("#{}", officer.badge_number)).weak());
                });
            });
        });
    });
    ui.add_space(10.0);
}
