//! Outstanding warrants.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{BadgeVariant, IdScheme, ListEntity};
use crate::error::ValidationError;

/// Warrant status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WarrantStatus {
    #[default]
    Active,
    Served,
}

impl WarrantStatus {
    pub const ALL: [WarrantStatus; 2] = [Self::Active, Self::Served];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Served => "served",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Served => "Served",
        }
    }

    pub fn badge(&self) -> BadgeVariant {
        match self {
            Self::Active => BadgeVariant::Destructive,
            Self::Served => BadgeVariant::Default,
        }
    }
}

/// A warrant against a named suspect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Warrant {
    pub id: String,
    /// Suspect name.
    pub name: String,
    pub charge: String,
    pub status: WarrantStatus,
    /// Issue date.
    pub date: NaiveDate,
}

impl Warrant {
    /// Issue date as `YYYY-MM-DD`.
    pub fn date_label(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

/// DTO for creating a warrant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateWarrant {
    pub name: String,
    pub charge: String,
    pub status: WarrantStatus,
}

impl ListEntity for Warrant {
    type Draft = CreateWarrant;

    const ID_SCHEME: IdScheme = IdScheme::new("WRT", true);

    fn id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.charge.as_str()]
    }

    fn validate(draft: &CreateWarrant) -> Result<(), ValidationError> {
        if draft.name.is_empty() || draft.charge.is_empty() {
            return Err(ValidationError::required("Please fill in all required fields"));
        }
        Ok(())
    }

    fn from_draft(draft: CreateWarrant, id: String, today: NaiveDate) -> Self {
        Self {
            id,
            name: draft.name,
            charge: draft.charge,
            status: draft.status,
            date: today,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, charge: &str) -> CreateWarrant {
        CreateWarrant {
            name: name.to_string(),
            charge: charge.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_draft_defaults_to_active() {
        assert_eq!(CreateWarrant::default().status, WarrantStatus::Active);
    }

    #[test]
    fn test_validate_requires_name_and_charge() {
        assert!(Warrant::validate(&draft("Tom Reed", "Burglary")).is_ok());
        assert!(Warrant::validate(&draft("Tom Reed", "")).is_err());
        assert!(Warrant::validate(&draft("", "Burglary")).is_err());
    }

    #[test]
    fn test_from_draft_stamps_issue_date() {
        let today = NaiveDate::from_ymd_opt(2024, 2, 3).expect("valid date");
        let warrant = Warrant::from_draft(draft("Tom Reed", "Burglary"), "WRT-2024-005".into(), today);
        assert_eq!(warrant.date_label(), "2024-02-03");
        assert_eq!(warrant.status, WarrantStatus::Active);
    }

    #[test]
    fn test_status_badges() {
        assert_eq!(WarrantStatus::Active.badge(), BadgeVariant::Destructive);
        assert_eq!(WarrantStatus::Served.badge(), BadgeVariant::Default);
    }
}
