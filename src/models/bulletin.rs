//! Bulletin board notices.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{BadgeVariant, IdScheme, JUST_NOW, ListEntity, optional_text};
use crate::error::ValidationError;

/// Bulletin priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BulletinPriority {
    Urgent,
    High,
    #[default]
    Medium,
    Low,
}

impl BulletinPriority {
    pub const ALL: [BulletinPriority; 4] = [Self::Urgent, Self::High, Self::Medium, Self::Low];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Urgent => "urgent",
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Urgent => "Urgent",
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }

    pub fn badge(&self) -> BadgeVariant {
        match self {
            Self::Urgent => BadgeVariant::Destructive,
            Self::High => BadgeVariant::Secondary,
            Self::Medium => BadgeVariant::Default,
            Self::Low => BadgeVariant::Outline,
        }
    }
}

/// A broadcast notice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bulletin {
    pub id: String,
    pub title: String,
    pub priority: BulletinPriority,
    pub time: String,
    pub description: Option<String>,
}

/// DTO for creating a bulletin.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateBulletin {
    pub title: String,
    pub priority: BulletinPriority,
    pub description: String,
}

impl ListEntity for Bulletin {
    type Draft = CreateBulletin;

    const ID_SCHEME: IdScheme = IdScheme::new("BLT", false);

    fn id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str()]
    }

    fn validate(draft: &CreateBulletin) -> Result<(), ValidationError> {
        if draft.title.is_empty() {
            return Err(ValidationError::required("Please enter a bulletin title"));
        }
        Ok(())
    }

    fn from_draft(draft: CreateBulletin, id: String, _today: NaiveDate) -> Self {
        Self {
            id,
            title: draft.title,
            priority: draft.priority,
            time: JUST_NOW.to_string(),
            description: optional_text(draft.description),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_defaults_to_medium() {
        assert_eq!(CreateBulletin::default().priority, BulletinPriority::Medium);
    }

    #[test]
    fn test_validate_requires_title() {
        let mut draft = CreateBulletin::default();
        let err = Bulletin::validate(&draft).unwrap_err();
        assert_eq!(err.description, "Please enter a bulletin title");

        draft.title = "Road Closure".to_string();
        assert!(Bulletin::validate(&draft).is_ok());
    }

    #[test]
    fn test_description_is_kept() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).expect("valid date");
        let draft = CreateBulletin {
            title: "Road Closure".to_string(),
            priority: BulletinPriority::Urgent,
            description: "Vinewood Blvd closed until 6pm".to_string(),
        };
        let bulletin = Bulletin::from_draft(draft, "BLT-005".into(), today);
        assert_eq!(bulletin.description.as_deref(), Some("Vinewood Blvd closed until 6pm"));
        assert_eq!(bulletin.priority, BulletinPriority::Urgent);
    }

    #[test]
    fn test_search_ignores_priority() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).expect("valid date");
        let draft = CreateBulletin {
            title: "Weather Advisory".to_string(),
            priority: BulletinPriority::Low,
            description: String::new(),
        };
        let bulletin = Bulletin::from_draft(draft, "BLT-004".into(), today);
        assert!(bulletin.matches("weather"));
        assert!(bulletin.matches("blt-004"));
        assert!(!bulletin.matches("low"));
    }

    #[test]
    fn test_priority_badges() {
        assert_eq!(BulletinPriority::Urgent.badge(), BadgeVariant::Destructive);
        assert_eq!(BulletinPriority::High.badge(), BadgeVariant::Secondary);
        assert_eq!(BulletinPriority::Medium.badge(), BadgeVariant::Default);
        assert_eq!(BulletinPriority::Low.badge(), BadgeVariant::Outline);
    }
}
