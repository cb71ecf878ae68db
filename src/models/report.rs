//! Incident reports.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{BadgeVariant, IdScheme, JUST_NOW, ListEntity, optional_text};
use crate::error::ValidationError;

/// Report workflow status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReportStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
}

impl ReportStatus {
    pub const ALL: [ReportStatus; 3] = [Self::Pending, Self::InProgress, Self::Completed];

    /// Wire/key form, e.g. `in-progress`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in-progress",
            Self::Completed => "completed",
        }
    }

    /// Option label in the create form.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
        }
    }

    /// Badge text on a report card.
    pub fn badge_text(&self) -> String {
        self.as_str().replacen('-', " ", 1)
    }

    pub fn badge(&self) -> BadgeVariant {
        match self {
            Self::Pending => BadgeVariant::Outline,
            Self::InProgress => BadgeVariant::Secondary,
            Self::Completed => BadgeVariant::Default,
        }
    }
}

/// A filed incident report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub id: String,
    pub title: String,
    pub officer: String,
    /// Relative-time label, e.g. "2 hours ago".
    pub time: String,
    pub status: ReportStatus,
    pub description: Option<String>,
}

/// DTO for creating a report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateReport {
    pub title: String,
    pub officer: String,
    pub status: ReportStatus,
    pub description: String,
}

impl ListEntity for Report {
    type Draft = CreateReport;

    const ID_SCHEME: IdScheme = IdScheme::new("RPT", true);

    fn id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.officer.as_str()]
    }

    fn validate(draft: &CreateReport) -> Result<(), ValidationError> {
        if draft.title.is_empty() || draft.officer.is_empty() {
            return Err(ValidationError::required("Please fill in all required fields"));
        }
        Ok(())
    }

    fn from_draft(draft: CreateReport, id: String, _today: NaiveDate) -> Self {
        Self {
            id,
            title: draft.title,
            officer: draft.officer,
            time: JUST_NOW.to_string(),
            status: draft.status,
            description: optional_text(draft.description),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(title: &str, officer: &str) -> CreateReport {
        CreateReport {
            title: title.to_string(),
            officer: officer.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_draft_defaults_to_pending() {
        let draft = CreateReport::default();
        assert_eq!(draft.status, ReportStatus::Pending);
        assert!(draft.title.is_empty());
    }

    #[test]
    fn test_validate_requires_title_and_officer() {
        assert!(Report::validate(&draft("Noise Complaint", "Officer Lee")).is_ok());
        assert!(Report::validate(&draft("", "Officer Lee")).is_err());
        assert!(Report::validate(&draft("Noise Complaint", "")).is_err());
        assert!(Report::validate(&draft("  ", "Officer Lee")).is_ok());
    }

    #[test]
    fn test_validate_message() {
        let err = Report::validate(&draft("", "")).unwrap_err();
        assert_eq!(err.title, "Error");
        assert_eq!(err.description, "Please fill in all required fields");
    }

    #[test]
    fn test_from_draft_stamps_just_now() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).expect("valid date");
        let report = Report::from_draft(draft("Noise Complaint", "Officer Lee"), "RPT-2024-005".into(), today);
        assert_eq!(report.time, "Just now");
        assert_eq!(report.description, None);
    }

    #[test]
    fn test_matches_title_officer_and_id() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).expect("valid date");
        let report = Report::from_draft(draft("DUI Arrest", "Officer Brown"), "RPT-2024-004".into(), today);
        assert!(report.matches("dui"));
        assert!(report.matches("brown"));
        assert!(report.matches("rpt-2024-004"));
        assert!(!report.matches("theft"));
    }

    #[test]
    fn test_status_badges() {
        assert_eq!(ReportStatus::Pending.badge(), BadgeVariant::Outline);
        assert_eq!(ReportStatus::InProgress.badge(), BadgeVariant::Secondary);
        assert_eq!(ReportStatus::Completed.badge(), BadgeVariant::Default);
        assert_eq!(ReportStatus::InProgress.badge_text(), "in progress");
    }
}
