//! Company model definition and related functionality.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::{CompanySize, CompanyStatus, Contact, Priority, Rating, Stage};
use crate::credentials::{CredentialCodec, Credentials, TagPrefixCodec};

/// The position applied for.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct JobDetails {
    pub title: String,

    /// Salary as free text ("6-8M JPY", "negotiable")
    pub salary: Option<String>,

    pub benefits: Option<Vec<String>>,

    pub requirements: Option<Vec<String>>,

    pub description: Option<String>,
}

/// One tracked job application, the root aggregate of the data model.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    /// Remote id, or a locally generated id when the insert did not complete
    pub id: String,

    pub name: String,

    pub industry: String,

    #[serde(default)]
    pub size: CompanySize,

    pub location: String,

    pub applied_date: Date,

    #[serde(default)]
    pub status: CompanyStatus,

    /// Index into `stages`; see [`Company::current_stage`]
    #[serde(default)]
    pub current_stage: usize,

    #[serde(default)]
    pub priority: Priority,

    #[serde(default)]
    pub notes: String,

    pub last_update: Date,

    pub overall_rating: Option<Rating>,

    /// Free-text tags plus the encoded credential side-channel
    #[serde(default)]
    pub tags: Vec<String>,

    pub job_details: JobDetails,

    /// Selection rounds in chronological order
    #[serde(default)]
    pub stages: Vec<Stage>,

    #[serde(default)]
    pub contacts: Vec<Contact>,
}

impl Company {
    /// The stage the application is currently in.
    ///
    /// An out-of-range `current_stage` resolves to the last stage. Returns
    /// `None` only when the company has no stages.
    pub fn current_stage(&self) -> Option<&Stage> {
        let last = self.stages.len().checked_sub(1)?;
        self.stages.get(self.current_stage.min(last))
    }

    /// Index of the stage returned by [`Company::current_stage`].
    pub fn current_stage_index(&self) -> Option<usize> {
        let last = self.stages.len().checked_sub(1)?;
        Some(self.current_stage.min(last))
    }

    pub fn stage(&self, stage_id: &str) -> Option<&Stage> {
        self.stages.iter().find(|s| s.id == stage_id)
    }

    pub(crate) fn stage_mut(&mut self, stage_id: &str) -> Option<&mut Stage> {
        self.stages.iter_mut().find(|s| s.id == stage_id)
    }

    /// Portal credentials carried in the tag list.
    pub fn credentials(&self) -> Credentials {
        TagPrefixCodec.decode(&self.tags).credentials
    }

    /// Tags the user typed, without the credential side-channel.
    pub fn visible_tags(&self) -> Vec<String> {
        TagPrefixCodec.decode(&self.tags).ordinary
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    fn company_with_stages(count: usize, current: usize) -> Company {
        Company {
            id: "1".to_string(),
            name: "Acme".to_string(),
            industry: "Manufacturing".to_string(),
            size: CompanySize::Large,
            location: "Osaka".to_string(),
            applied_date: date(2024, 1, 10),
            status: CompanyStatus::Applied,
            current_stage: current,
            priority: Priority::Medium,
            notes: String::new(),
            last_update: date(2024, 1, 10),
            overall_rating: None,
            tags: vec![],
            job_details: JobDetails {
                title: "Engineer".to_string(),
                ..Default::default()
            },
            stages: (0..count)
                .map(|i| Stage::pending(i.to_string(), format!("Round {i}")))
                .collect(),
            contacts: vec![],
        }
    }

    #[test]
    fn test_current_stage_in_range() {
        let company = company_with_stages(3, 1);
        assert_eq!(company.current_stage().unwrap().id, "1");
    }

    #[test]
    fn test_current_stage_out_of_range_is_last() {
        let company = company_with_stages(3, 10);
        assert_eq!(company.current_stage().unwrap().id, "2");
        assert_eq!(company.current_stage_index(), Some(2));
    }

    #[test]
    fn test_current_stage_without_stages() {
        let company = company_with_stages(0, 0);
        assert!(company.current_stage().is_none());
        assert!(company.current_stage_index().is_none());
    }

    #[test]
    fn test_credentials_are_split_from_visible_tags() {
        let mut company = company_with_stages(1, 0);
        company.tags = vec![
            "remote".to_string(),
            "__account_id:me@example.com".to_string(),
        ];
        assert_eq!(company.visible_tags(), vec!["remote".to_string()]);
        assert_eq!(
            company.credentials().account_id.as_deref(),
            Some("me@example.com")
        );
    }
}
