//! Selection stage model definition.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::{Rating, StageStatus};

/// Name given to the synthetic first stage of every new company.
pub const ENTRY_STAGE_NAME: &str = "Entry";

/// One round of a company's selection process.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Stage {
    /// Remote id, or a locally generated id when the insert did not complete
    pub id: String,

    /// Name of the round, e.g. "First interview"
    pub name: String,

    #[serde(default)]
    pub status: StageStatus,

    pub date: Option<Date>,

    /// Start time as entered, `HH:MM`
    pub time: Option<String>,

    /// Plain place name or an interview link
    pub location: Option<String>,

    pub feedback: Option<String>,

    pub interviewer: Option<String>,

    pub notes: Option<String>,

    /// Preparation checklist, in order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub preparation: Vec<String>,

    pub rating: Option<Rating>,

    /// Stamped when the stage moves into `passed` or `failed`
    pub completed_at: Option<Date>,
}

impl Stage {
    /// A freshly added stage: `pending` with every optional field empty.
    pub fn pending(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            status: StageStatus::Pending,
            date: None,
            time: None,
            location: None,
            feedback: None,
            interviewer: None,
            notes: None,
            preparation: Vec::new(),
            rating: None,
            completed_at: None,
        }
    }

    /// The stage every new company starts with: already passed, dated and
    /// completed today, top rating.
    pub fn entry(id: impl Into<String>, today: Date) -> Self {
        Self {
            status: StageStatus::Passed,
            date: Some(today),
            rating: Some(Rating::top()),
            completed_at: Some(today),
            ..Self::pending(id, ENTRY_STAGE_NAME)
        }
    }
}
