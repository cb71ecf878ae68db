//! Sidebar menu entries.

use serde::{Deserialize, Serialize};

/// Sidebar section key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuId {
    #[default]
    Home,
    Dispatch,
    Profile,
    Vehicles,
    Reports,
    Cases,
    Warrants,
    Offences,
    Employees,
    Chat,
    Jail,
    Logs,
}

/// One sidebar entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    pub id: MenuId,
    pub label: &'static str,
}

/// Sidebar entries in display order.
pub const MENU_ITEMS: [MenuItem; 12] = [
    MenuItem { id: MenuId::Home, label: "Home" },
    MenuItem { id: MenuId::Dispatch, label: "Dispatch" },
    MenuItem { id: MenuId::Profile, label: "Profile" },
    MenuItem { id: MenuId::Vehicles, label: "Vehicles" },
    MenuItem { id: MenuId::Reports, label: "Reports" },
    MenuItem { id: MenuId::Cases, label: "Cases" },
    MenuItem { id: MenuId::Warrants, label: "Warrants" },
    MenuItem { id: MenuId::Offences, label: "Offences" },
    MenuItem { id: MenuId::Employees, label: "Employees" },
    MenuItem { id: MenuId::Chat, label: "Chat" },
    MenuItem { id: MenuId::Jail, label: "Jail" },
    MenuItem { id: MenuId::Logs, label: "Logs" },
];

impl MenuId {
    /// Stable key, e.g. `"vehicles"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            MenuId::Home => "home",
            MenuId::Dispatch => "dispatch",
            MenuId::Profile => "profile",
            MenuId::Vehicles => "vehicles",
            MenuId::Reports => "reports",
            MenuId::Cases => "cases",
            MenuId::Warrants => "warrants",
            MenuId::Offences => "offences",
            MenuId::Employees => "employees",
            MenuId::Chat => "chat",
            MenuId::Jail => "jail",
            MenuId::Logs => "logs",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuId::Home => "Home",
            MenuId::Dispatch => "Dispatch",
            MenuId::Profile => "Profile",
            MenuId::Vehicles => "Vehicles",
            MenuId::Reports => "Reports",
            MenuId::Cases => "Cases",
            MenuId::Warrants => "Warrants",
            MenuId::Offences => "Offences",
            MenuId::Employees => "Employees",
            MenuId::Chat => "Chat",
            MenuId::Jail => "Jail",
            MenuId::Logs => "Logs",
        }
    }
}
