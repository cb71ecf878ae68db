//! Units on the active roster.

use serde::{Deserialize, Serialize};

use super::{BadgeVariant, initials};

/// Live unit status as reported by dispatch.
///
/// Statuses outside the known four are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnitStatus {
    Available,
    OnCall,
    Busy,
    OnBreak,
    Other(String),
}

impl UnitStatus {
    /// Parse a dispatch status label.
    pub fn from_label(label: &str) -> Self {
        match label {
            "Available" => Self::Available,
            "On Call" => Self::OnCall,
            "Busy" => Self::Busy,
            "On Break" => Self::OnBreak,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Available => "Available",
            Self::OnCall => "On Call",
            Self::Busy => "Busy",
            Self::OnBreak => "On Break",
            Self::Other(label) => label,
        }
    }
}

/// An officer shown in the active units roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unit {
    /// Callsign number.
    pub id: String,
    pub name: String,
    pub rank: String,
    pub rank_color: BadgeVariant,
    pub status: UnitStatus,
}

impl Unit {
    pub fn initials(&self) -> String {
        initials(&self.name)
    }
}
