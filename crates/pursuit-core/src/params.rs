//! Form structures for tracker mutations.
//!
//! These structures carry user input from any presentation layer (the CLI in
//! this workspace) into the [`crate::Tracker`] without framework-specific
//! derives. Interface layers build them from their own argument types, or
//! start from an existing record via the `From<&Company>` / `From<&Stage>`
//! conversions and override only what changed.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │  Core Forms     │    │    Tracker      │
//! │  (clap derives) │───▶│ (CompanyForm,   │───▶│  (validation +  │
//! │                 │    │  StageForm)     │    │   local-first)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```

use jiff::civil::{Date, Time};
use serde::{Deserialize, Serialize};

use crate::{
    credentials::{split_tag_text, CredentialCodec, Credentials, TagPrefixCodec},
    error::{Result, TrackerError},
    models::{Company, CompanySize, CompanyStatus, Priority, Rating, Stage, StageStatus},
};

/// Input for creating or editing a company.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompanyForm {
    /// Company name (required)
    pub name: String,
    pub industry: String,
    #[serde(default)]
    pub size: CompanySize,
    pub location: String,
    /// Defaults to today when creating
    pub applied_date: Option<Date>,
    #[serde(default)]
    pub status: CompanyStatus,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub notes: String,
    pub overall_rating: Option<Rating>,
    /// Comma-separated free-text tags
    #[serde(default)]
    pub tags_text: String,
    /// Job title (required)
    pub job_title: String,
    pub job_salary: Option<String>,
    pub job_benefits: Option<Vec<String>>,
    pub job_requirements: Option<Vec<String>>,
    pub job_description: Option<String>,
    /// Application portal credentials, stored in the tag side-channel
    #[serde(default)]
    pub credentials: Credentials,
}

impl CompanyForm {
    /// Checks the fields a company cannot exist without.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::InvalidInput` when the name or job title is
    /// blank.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(TrackerError::invalid_input("name").with_reason("must not be blank"));
        }
        if self.job_title.trim().is_empty() {
            return Err(TrackerError::invalid_input("job_title").with_reason("must not be blank"));
        }
        Ok(())
    }

    /// Ordinary tags typed into the free-text field.
    pub fn ordinary_tags(&self) -> Vec<String> {
        split_tag_text(&self.tags_text)
    }
}

impl From<&Company> for CompanyForm {
    /// Pre-fill a form from an existing company, decoding the tag
    /// side-channel back into the credential fields.
    fn from(company: &Company) -> Self {
        let decoded = TagPrefixCodec.decode(&company.tags);
        Self {
            name: company.name.clone(),
            industry: company.industry.clone(),
            size: company.size,
            location: company.location.clone(),
            applied_date: Some(company.applied_date),
            status: company.status,
            priority: company.priority,
            notes: company.notes.clone(),
            overall_rating: company.overall_rating,
            tags_text: decoded.ordinary.join(", "),
            job_title: company.job_details.title.clone(),
            job_salary: company.job_details.salary.clone(),
            job_benefits: company.job_details.benefits.clone(),
            job_requirements: company.job_details.requirements.clone(),
            job_description: company.job_details.description.clone(),
            credentials: decoded.credentials,
        }
    }
}

/// Input for editing a stage.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StageForm {
    pub name: String,
    #[serde(default)]
    pub status: StageStatus,
    pub date: Option<Date>,
    /// `HH:MM`
    pub time: Option<String>,
    pub location: Option<String>,
    pub feedback: Option<String>,
    pub interviewer: Option<String>,
    pub notes: Option<String>,
    #[serde(default)]
    pub preparation: Vec<String>,
    pub rating: Option<Rating>,
}

impl StageForm {
    /// Validates the stage name and the time format.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::InvalidInput` when the name is blank or the
    /// time is not `HH:MM`.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(TrackerError::invalid_input("name").with_reason("must not be blank"));
        }
        if let Some(time) = &self.time {
            if !is_clock_time(time) {
                return Err(TrackerError::invalid_input("time")
                    .with_reason(format!("expected HH:MM, got '{time}'")));
            }
        }
        Ok(())
    }
}

impl From<&Stage> for StageForm {
    fn from(stage: &Stage) -> Self {
        Self {
            name: stage.name.clone(),
            status: stage.status,
            date: stage.date,
            time: stage.time.clone(),
            location: stage.location.clone(),
            feedback: stage.feedback.clone(),
            interviewer: stage.interviewer.clone(),
            notes: stage.notes.clone(),
            preparation: stage.preparation.clone(),
            rating: stage.rating,
        }
    }
}

/// `HH:MM` with a 24-hour clock and zero-padded fields.
fn is_clock_time(value: &str) -> bool {
    value.len() == 5 && Time::strptime("%H:%M", value).is_ok()
}
