//! Active units roster.

use eframe::egui::{Align, Color32, Layout, RichText, ScrollArea, Ui};

use super::components::{avatar, badge, colors, panel_card, panel_title, record_card};
use crate::models::{Unit, UnitStatus};

/// Text color of a unit's status line.
pub fn status_color(status: &UnitStatus) -> Color32 {
    match status {
        UnitStatus::Available => colors::SUCCESS,
        UnitStatus::OnCall => colors::WARNING,
        UnitStatus::Busy => colors::ERROR,
        UnitStatus::OnBreak | UnitStatus::Other(_) => colors::NEUTRAL,
    }
}

/// Show the roster column.
pub fn show(ui: &mut Ui, units: &[Unit]) {
    panel_card(ui, |ui| {
        panel_title(ui, "Active Units");
        ui.add_space(10.0);

        ScrollArea::vertical()
            .id_salt("active_units")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for unit in units {
                    record_card(ui, |ui| show_unit(ui, unit));
                    ui.add_space(8.0);
                }
            });
    });
}

fn show_unit(ui: &mut Ui, unit: &Unit) {
    ui.horizontal(|ui| {
        avatar(
            ui,
            &unit.initials(),
            32.0,
            colors::PRIMARY.gamma_multiply(0.2),
            colors::PRIMARY,
        );
        ui.vertical(|ui| {
            ui.label(RichText::new(&unit.name).strong());
            ui.horizontal(|ui| {
                badge(ui, &unit.rank, unit.rank_color);
                ui.label(RichText::new(format!("#{}", unit.id)).small().weak());
            });
        });
    });
    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
        ui.label(
            RichText::new(format!("\u{2022} {}", unit.status.label()))
                .small()
                .color(status_color(&unit.status)),
        );
    });
}
