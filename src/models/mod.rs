//! Records shown on the dashboard and the DTOs used to create them.

pub mod bulletin;
pub mod id;
pub mod officer;
pub mod report;
pub mod unit;
pub mod warrant;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

pub use bulletin::{Bulletin, BulletinPriority, CreateBulletin};
pub use id::IdScheme;
pub use officer::{Officer, initials};
pub use report::{CreateReport, Report, ReportStatus};
pub use unit::{Unit, UnitStatus};
pub use warrant::{CreateWarrant, Warrant, WarrantStatus};

/// Relative-time label stamped on freshly created reports and bulletins.
pub const JUST_NOW: &str = "Just now";

/// Visual category of a badge.
///
/// Rendering decides the actual colors; records only pick a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeVariant {
    #[default]
    Default,
    Primary,
    Secondary,
    Destructive,
    Accent,
    Outline,
}

/// A record type that lives in a searchable list with a create form.
pub trait ListEntity {
    /// Form state for a not-yet-submitted record.
    type Draft: Default + Clone;

    /// Layout of ids generated for new records.
    const ID_SCHEME: IdScheme;

    fn id(&self) -> &str;

    /// Text fields besides the id that the search box matches against.
    fn search_fields(&self) -> Vec<&str>;

    /// Check that every required draft field is filled in.
    fn validate(draft: &Self::Draft) -> Result<(), ValidationError>;

    /// Build the record from a validated draft and its generated fields.
    fn from_draft(draft: Self::Draft, id: String, today: NaiveDate) -> Self;

    /// Case-insensitive substring match on the id and search fields.
    ///
    /// `needle` must already be lowercase.
    fn matches(&self, needle: &str) -> bool {
        std::iter::once(self.id())
            .chain(self.search_fields())
            .any(|field| field.to_lowercase().contains(needle))
    }
}

/// Optional free text: blank input means no value.
pub(crate) fn optional_text(value: String) -> Option<String> {
    if value.trim().is_empty() { None } else { Some(value) }
}
