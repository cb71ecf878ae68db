//! Root window: owns the application state and wires the panels together.

use chrono::{Local, NaiveDate};
use eframe::egui::{self, Ui};
use egui_extras::{Size, StripBuilder};

use crate::config::AppConfig;
use crate::error::ValidationError;
use crate::models::{Bulletin, Report, Warrant};
use crate::state::{Action, AppState, ListPanelState};

use super::list_panel::PanelView;
use super::toast::Toasts;
use super::{active_units, header, list_panel, sidebar};

/// Width of the fixed roster column.
const UNITS_COLUMN_WIDTH: f32 = 300.0;
/// Narrowest a list column may get before the strip overflows.
const LIST_COLUMN_MIN_WIDTH: f32 = 220.0;

/// A create dialog's submit result, already turned into an action.
struct PendingSubmission {
    outcome: Result<Action, ValidationError>,
    success_message: &'static str,
}

impl PendingSubmission {
    fn new<D>(result: Result<D, ValidationError>, into_action: fn(D) -> Action, success_message: &'static str) -> Self {
        Self {
            outcome: result.map(into_action),
            success_message,
        }
    }
}

/// Apply an action to the application state.
fn dispatch(state: &mut AppState, action: Action, today: NaiveDate) {
    if let Action::SelectMenu(id) = &action {
        tracing::info!("Menu selected: {}", id.as_str());
    }

    if let Some(id) = state.apply(action, today) {
        tracing::info!("Record created: {}", id);
    }
}

/// Dispatch an accepted submission or report why it was rejected.
fn handle_submission(state: &mut AppState, toasts: &mut Toasts, submission: PendingSubmission, now: f64, today: NaiveDate) {
    match submission.outcome {
        Ok(action) => {
            dispatch(state, action, today);
            toasts.success(now, "Success", submission.success_message);
        }
        Err(e) => {
            tracing::warn!("Submission rejected: {}", e);
            toasts.error(now, e.title, e.description);
        }
    }
}

/// Main application state.
pub struct MdtApp {
    state: AppState,

    // Panel-local UI state
    reports: ListPanelState<Report>,
    bulletins: ListPanelState<Bulletin>,
    warrants: ListPanelState<Warrant>,

    toasts: Toasts,
}

impl MdtApp {
    /// Create the app. `startup_error` is shown as an error toast.
    pub fn new(cc: &eframe::CreationContext<'_>, config: AppConfig, startup_error: Option<String>) -> Self {
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);
        cc.egui_ctx.set_visuals(if config.ui.dark_mode {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        });

        let mut toasts = Toasts::new(config.ui.toast_seconds);
        if let Some(error) = startup_error {
            let now = cc.egui_ctx.input(|i| i.time);
            toasts.error(now, "Config error", format!("{error}. Using defaults."));
        }

        tracing::info!(
            "Signed in as {} ({}, #{})",
            config.officer.name,
            config.officer.rank,
            config.officer.badge_number
        );

        Self {
            state: AppState::seeded(config.officer),
            reports: ListPanelState::new(),
            bulletins: ListPanelState::new(),
            warrants: ListPanelState::new(),
            toasts,
        }
    }

    /// Render the four dashboard columns.
    fn show_home(&mut self, ui: &mut Ui) -> Option<PendingSubmission> {
        let mut submission = None;

        StripBuilder::new(ui)
            .size(Size::remainder().at_least(LIST_COLUMN_MIN_WIDTH))
            .size(Size::remainder().at_least(LIST_COLUMN_MIN_WIDTH))
            .size(Size::remainder().at_least(LIST_COLUMN_MIN_WIDTH))
            .size(Size::exact(UNITS_COLUMN_WIDTH))
            .horizontal(|mut strip| {
                strip.cell(|ui| {
                    if let Some(result) = list_panel::show(ui, &mut self.reports, &self.state.reports) {
                        submission = Some(PendingSubmission::new(result, Action::AddReport, Report::SUCCESS_MESSAGE));
                    }
                });
                strip.cell(|ui| {
                    if let Some(result) = list_panel::show(ui, &mut self.bulletins, &self.state.bulletins) {
                        submission = Some(PendingSubmission::new(
                            result,
                            Action::AddBulletin,
                            Bulletin::SUCCESS_MESSAGE,
                        ));
                    }
                });
                strip.cell(|ui| {
                    if let Some(result) = list_panel::show(ui, &mut self.warrants, &self.state.warrants) {
                        submission = Some(PendingSubmission::new(
                            result,
                            Action::AddWarrant,
                            Warrant::SUCCESS_MESSAGE,
                        ));
                    }
                });
                strip.cell(|ui| {
                    active_units::show(ui, &self.state.units);
                });
            });

        submission
    }
}

impl eframe::App for MdtApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Sidebar
        egui::SidePanel::left("sidebar")
            .resizable(false)
            .exact_width(240.0)
            .show(ctx, |ui| {
                if let Some(id) = sidebar::show(ui, self.state.active_menu) {
                    dispatch(&mut self.state, Action::SelectMenu(id), Local::now().date_naive());
                }
            });

        // Header
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            header::show(ui, &self.state.officer);
        });

        // Main content
        let mut submission = None;
        egui::CentralPanel::default().show(ctx, |ui| {
            submission = self.show_home(ui);
        });

        if let Some(submission) = submission {
            let now = ctx.input(|i| i.time);
            let today = Local::now().date_naive();
            handle_submission(&mut self.state, &mut self.toasts, submission, now, today);
        }

        // Notifications
        self.toasts.show(ctx);
    }
}
