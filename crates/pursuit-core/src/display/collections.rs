//! Collection wrapper types for displaying groups of companies.

use std::{fmt, ops::Index};

use crate::models::Company;

/// Newtype wrapper for displaying a filtered, sorted company list.
///
/// Each company is rendered as a compact summary block rather than its full
/// detail view. An empty list renders a single notice line.
///
/// # Examples
///
/// ```rust
/// use jiff::civil::date;
/// use pursuit_core::{
///     display::Companies,
///     models::{Company, CompanySize, CompanyStatus, JobDetails, Priority},
/// };
///
/// let company = Company {
///     id: "1".to_string(),
///     name: "Acme".to_string(),
///     industry: "Robotics".to_string(),
///     size: CompanySize::Startup,
///     location: "Osaka".to_string(),
///     applied_date: date(2024, 4, 1),
///     status: CompanyStatus::Applied,
///     current_stage: 0,
///     priority: Priority::High,
///     notes: String::new(),
///     last_update: date(2024, 4, 1),
///     overall_rating: None,
///     tags: vec![],
///     job_details: JobDetails {
///         title: "Engineer".to_string(),
///         ..Default::default()
///     },
///     stages: vec![],
///     contacts: vec![],
/// };
///
/// let output = Companies(vec![&company]).to_string();
/// assert!(output.contains("## Acme (ID: 1)"));
/// assert_eq!(Companies(vec![]).to_string(), "No companies found.\n");
/// ```
pub struct Companies<'a>(pub Vec<&'a Company>);

impl<'a> Companies<'a> {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, index: usize) -> Option<&'a Company> {
        self.0.get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Company> + '_ {
        self.0.iter().copied()
    }
}

impl Index<usize> for Companies<'_> {
    type Output = Company;

    fn index(&self, index: usize) -> &Self::Output {
        self.0[index]
    }
}

impl<'a> IntoIterator for Companies<'a> {
    type Item = &'a Company;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl fmt::Display for Companies<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No companies found.");
        }

        for company in &self.0 {
            writeln!(f, "## {} (ID: {})", company.name, company.id)?;
            writeln!(f)?;
            writeln!(f, "- Position: {}", company.job_details.title)?;
            writeln!(
                f,
                "- Status: {} | Priority: {}",
                company.status, company.priority
            )?;
            writeln!(f, "- Applied: {}", company.applied_date)?;
            if let Some(stage) = company.current_stage() {
                writeln!(
                    f,
                    "- Current stage: {} ({})",
                    stage.name,
                    stage.status.with_icon()
                )?;
            }
            let tags = company.visible_tags();
            if !tags.is_empty() {
                writeln!(f, "- Tags: {}", tags.join(", "))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
