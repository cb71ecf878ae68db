//! Shared UI components.

use eframe::egui::{
    self, Align2, Color32, CornerRadius, CursorIcon, FontId, Margin, Response, RichText, Sense, Stroke, Ui,
};
use egui_phosphor::regular::MAGNIFYING_GLASS;

use crate::models::BadgeVariant;

/// Status indicator colors.
pub mod colors {
    use super::Color32;

    pub const SUCCESS: Color32 = Color32::from_rgb(100, 200, 100);
    pub const ERROR: Color32 = Color32::from_rgb(255, 100, 100);
    pub const WARNING: Color32 = Color32::from_rgb(255, 200, 100);
    pub const NEUTRAL: Color32 = Color32::from_rgb(150, 150, 150);

    pub const PRIMARY: Color32 = Color32::from_rgb(37, 99, 235);
    pub const SECONDARY: Color32 = Color32::from_rgb(71, 85, 105);
    pub const DESTRUCTIVE: Color32 = Color32::from_rgb(220, 38, 38);
    pub const ACCENT: Color32 = Color32::from_rgb(147, 51, 234);
}

/// Fill, text and outline colors of a badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BadgeStyle {
    pub fill: Color32,
    pub text: Color32,
    pub stroke: Color32,
}

/// Colors for a badge variant. `text_color` is used by outline badges.
pub fn badge_style(variant: BadgeVariant, text_color: Color32) -> BadgeStyle {
    let solid = |fill: Color32| BadgeStyle {
        fill,
        text: Color32::WHITE,
        stroke: fill,
    };
    match variant {
        BadgeVariant::Default | BadgeVariant::Primary => solid(colors::PRIMARY),
        BadgeVariant::Secondary => solid(colors::SECONDARY),
        BadgeVariant::Destructive => solid(colors::DESTRUCTIVE),
        BadgeVariant::Accent => solid(colors::ACCENT),
        BadgeVariant::Outline => BadgeStyle {
            fill: Color32::TRANSPARENT,
            text: text_color,
            stroke: colors::NEUTRAL,
        },
    }
}

/// Render a small pill with text.
pub fn badge(ui: &mut Ui, text: &str, variant: BadgeVariant) -> Response {
    let style = badge_style(variant, ui.visuals().text_color());
    egui::Frame::new()
        .fill(style.fill)
        .stroke(Stroke::new(1.0, style.stroke))
        .corner_radius(CornerRadius::same(10))
        .inner_margin(Margin::symmetric(8, 1))
        .show(ui, |ui| {
            ui.label(RichText::new(text).small().strong().color(style.text));
        })
        .response
}

/// Render a round avatar with initials.
pub fn avatar(ui: &mut Ui, initials: &str, diameter: f32, fill: Color32, text_color: Color32) -> Response {
    let (rect, response) = ui.allocate_exact_size(egui::vec2(diameter, diameter), Sense::hover());

    if ui.is_rect_visible(rect) {
        ui.painter().circle_filled(rect.center(), diameter / 2.0, fill);
        ui.painter().text(
            rect.center(),
            Align2::CENTER_CENTER,
            initials,
            FontId::proportional(diameter * 0.36),
            text_color,
        );
    }

    response
}

/// Render a full-width sidebar navigation entry.
///
/// Returns the response which can be checked for `.clicked()`.
pub fn nav_button(ui: &mut Ui, icon: &str, label: &str, active: bool) -> Response {
    let size = egui::vec2(ui.available_width(), 40.0);
    let (rect, response) = ui.allocate_exact_size(size, Sense::click());

    if ui.is_rect_visible(rect) {
        let visuals = ui.visuals();
        let (fill, text_color) = if active {
            (colors::PRIMARY, Color32::WHITE)
        } else if response.hovered() {
            (visuals.widgets.hovered.weak_bg_fill, visuals.strong_text_color())
        } else {
            (Color32::TRANSPARENT, visuals.weak_text_color())
        };

        ui.painter().rect_filled(rect, 8.0, fill);

        // Icon (left)
        let icon_pos = egui::pos2(rect.left() + 24.0, rect.center().y);
        ui.painter()
            .text(icon_pos, Align2::CENTER_CENTER, icon, FontId::proportional(18.0), text_color);

        // Label
        let label_pos = egui::pos2(rect.left() + 48.0, rect.center().y);
        ui.painter()
            .text(label_pos, Align2::LEFT_CENTER, label, FontId::proportional(15.0), text_color);
    }

    response.on_hover_cursor(CursorIcon::PointingHand)
}

/// Render a filled button with a leading icon.
pub fn primary_button_with_icon(ui: &mut Ui, icon: &str, label: &str) -> Response {
    let text = if icon.is_empty() {
        label.to_string()
    } else {
        format!("{icon} {label}")
    };
    ui.add(egui::Button::new(RichText::new(text).color(Color32::WHITE)).fill(colors::PRIMARY))
}

/// Render a plain outlined button.
pub fn styled_button(ui: &mut Ui, label: &str) -> Response {
    ui.add(egui::Button::new(label).stroke(Stroke::new(1.0, colors::NEUTRAL)))
}

/// Render a search input with a magnifying glass in front.
pub fn search_box(ui: &mut Ui, value: &mut String, hint: &str) -> Response {
    ui.horizontal(|ui| {
        ui.label(RichText::new(MAGNIFYING_GLASS).weak());
        ui.add(
            egui::TextEdit::singleline(value)
                .desired_width(f32::INFINITY)
                .hint_text(hint),
        )
    })
    .inner
}

/// Render the outer frame of a dashboard column.
pub fn panel_card<R>(ui: &mut Ui, add_contents: impl FnOnce(&mut Ui) -> R) -> R {
    egui::Frame::new()
        .fill(ui.style().visuals.extreme_bg_color)
        .stroke(ui.visuals().widgets.noninteractive.bg_stroke)
        .inner_margin(Margin::same(15))
        .corner_radius(CornerRadius::same(8))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.set_min_height(ui.available_height());
            add_contents(ui)
        })
        .inner
}

/// Render a single record inside a list column.
pub fn record_card(ui: &mut Ui, add_contents: impl FnOnce(&mut Ui)) -> Response {
    egui::Frame::new()
        .fill(ui.visuals().faint_bg_color)
        .inner_margin(Margin::same(12))
        .corner_radius(CornerRadius::same(8))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            add_contents(ui);
        })
        .response
        .on_hover_cursor(CursorIcon::PointingHand)
}

/// Render a column title.
pub fn panel_title(ui: &mut Ui, title: &str) {
    ui.label(RichText::new(title).size(18.0).strong());
}
