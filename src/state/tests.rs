//! Scenario tests for state transitions.

use chrono::NaiveDate;

use super::{Action, AppState, MenuId};
use crate::models::{Bulletin, CreateBulletin, CreateReport, CreateWarrant, Officer, Report, ReportStatus, Warrant, WarrantStatus};
use crate::state::ListPanelState;

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

fn seeded() -> AppState {
    AppState::seeded(Officer::default())
}

fn noise_complaint() -> CreateReport {
    CreateReport {
        title: "Noise Complaint".to_string(),
        officer: "Officer Lee".to_string(),
        status: ReportStatus::Pending,
        description: String::new(),
    }
}

#[test]
fn test_seed_sizes() {
    let state = seeded();
    assert_eq!(state.active_menu, MenuId::Home);
    assert_eq!(state.reports.len(), 4);
    assert_eq!(state.bulletins.len(), 4);
    assert_eq!(state.warrants.len(), 4);
    assert_eq!(state.units.len(), 8);
}

#[test]
fn test_add_report_prepends_new_record() {
    let mut state = seeded();
    let before = state.clone();

    let id = state.apply(Action::AddReport(noise_complaint()), day(2024, 5, 20));

    assert_eq!(id.as_deref(), Some("RPT-2024-005"));
    assert_eq!(state.reports.len(), 5);
    let first = &state.reports[0];
    assert_eq!(first.id, "RPT-2024-005");
    assert_eq!(first.title, "Noise Complaint");
    assert_eq!(first.officer, "Officer Lee");
    assert_eq!(first.time, "Just now");
    assert_eq!(first.status, ReportStatus::Pending);
    assert_eq!(&state.reports[1..], &before.reports[..]);

    assert_eq!(state.bulletins, before.bulletins);
    assert_eq!(state.warrants, before.warrants);
    assert_eq!(state.units, before.units);
    assert_eq!(state.active_menu, before.active_menu);
}

#[test]
fn test_sequential_bulletin_ids() {
    let mut state = seeded();
    let today = day(2024, 5, 20);

    let ids: Vec<_> = ["Road Closure", "Amber Alert", "Shift Change"]
        .into_iter()
        .filter_map(|title| {
            let draft = CreateBulletin {
                title: title.to_string(),
                ..Default::default()
            };
            state.apply(Action::AddBulletin(draft), today)
        })
        .collect();

    assert_eq!(ids, ["BLT-005", "BLT-006", "BLT-007"]);
    let front: Vec<_> = state.bulletins.iter().take(3).map(|b| b.id.as_str()).collect();
    assert_eq!(front, ["BLT-007", "BLT-006", "BLT-005"]);
}

#[test]
fn test_add_warrant_uses_current_year_and_date() {
    let mut state = seeded();
    let draft = CreateWarrant {
        name: "Tom Reed".to_string(),
        charge: "Burglary".to_string(),
        status: WarrantStatus::Served,
    };

    let id = state.apply(Action::AddWarrant(draft), day(2026, 10, 16));

    assert_eq!(id.as_deref(), Some("WRT-2026-005"));
    assert_eq!(state.warrants[0].date_label(), "2026-10-16");
    assert_eq!(state.warrants[0].status, WarrantStatus::Served);
}

#[test]
fn test_select_menu_leaves_lists_alone() {
    let mut state = seeded();
    let before = state.clone();

    let id = state.apply(Action::SelectMenu(MenuId::Vehicles), day(2024, 5, 20));

    assert_eq!(id, None);
    assert_eq!(state.active_menu, MenuId::Vehicles);
    assert_eq!(state.reports, before.reports);
    assert_eq!(state.bulletins, before.bulletins);
    assert_eq!(state.warrants, before.warrants);
    assert_eq!(state.units, before.units);
}

#[test]
fn test_rejected_submission_changes_nothing() {
    let mut state = seeded();
    let before = state.clone();
    let mut panel = ListPanelState::<Warrant>::default();
    panel.open_dialog();
    panel.draft = CreateWarrant {
        name: "Tom Reed".to_string(),
        ..Default::default()
    };

    let outcome = panel.submit().map(Action::AddWarrant);

    assert!(outcome.is_err());
    assert!(panel.dialog_open);
    assert_eq!(state, before);

    if let Ok(action) = outcome {
        state.apply(action, day(2024, 5, 20));
    }
    assert_eq!(state, before);
}

#[test]
fn test_panel_submission_flows_into_state() {
    let mut state = seeded();
    let mut panel = ListPanelState::<Report>::default();
    panel.open_dialog();
    panel.draft = noise_complaint();

    let action = panel.submit().map(Action::AddReport).expect("complete draft");
    state.apply(action, day(2024, 5, 20));

    assert!(!panel.dialog_open);
    assert_eq!(state.reports[0].id, "RPT-2024-005");
    assert_eq!(panel.visible(&state.reports).len(), 5);

    panel.search = "noise".to_string();
    assert_eq!(panel.visible(&state.reports).len(), 1);
}

#[test]
fn test_theft_search_on_seed_warrants() {
    let state = seeded();
    let mut panel = ListPanelState::<Warrant>::default();
    panel.search = "theft".to_string();

    let visible = panel.visible(&state.warrants);
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].name, "Jane Smith");
    assert_eq!(visible[0].charge, "Theft");
}

#[test]
fn test_whitespace_title_counts_as_filled_in() {
    let mut state = seeded();
    let mut panel = ListPanelState::<Bulletin>::default();
    panel.open_dialog();
    panel.draft.title = " ".to_string();

    let action = panel.submit().map(Action::AddBulletin).expect("non-empty title");
    let id = state.apply(action, day(2024, 5, 20));

    assert!(!panel.dialog_open);
    assert_eq!(id.as_deref(), Some("BLT-005"));
    assert_eq!(state.bulletins.len(), 5);
    assert_eq!(state.bulletins[0].title, " ");
}
