//! Display implementations for domain models.
//!
//! All output is markdown. A stage location that is an interview link is
//! rendered as a markdown link, anything else as plain text.

use std::fmt;

use crate::{
    models::{
        Company, CompanySize, CompanyStatus, Contact, Priority, Rating, Stage, StageStatus,
    },
    view::is_url_location,
};

impl fmt::Display for CompanySize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for CompanyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for StageStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A stage location, linked when it is a URL.
pub struct Location<'a>(pub &'a str);

impl fmt::Display for Location<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let location = self.0.trim();
        if is_url_location(location) {
            write!(f, "[{location}]({location})")
        } else {
            write!(f, "{location}")
        }
    }
}

fn optional_rating(rating: Option<Rating>) -> String {
    rating.map_or_else(|| "-".to_string(), |r| r.to_string())
}

impl fmt::Display for Company {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {} (ID: {})", self.name, self.id)?;
        writeln!(f)?;

        // Metadata section
        writeln!(f, "- Position: {}", self.job_details.title)?;
        writeln!(f, "- Status: {}", self.status)?;
        writeln!(f, "- Priority: {}", self.priority)?;
        if !self.industry.is_empty() {
            writeln!(f, "- Industry: {}", self.industry)?;
        }
        writeln!(f, "- Size: {}", self.size)?;
        if !self.location.is_empty() {
            writeln!(f, "- Location: {}", self.location)?;
        }
        writeln!(f, "- Applied: {}", self.applied_date)?;
        writeln!(f, "- Updated: {}", self.last_update)?;
        writeln!(f, "- Rating: {}", optional_rating(self.overall_rating))?;
        let tags = self.visible_tags();
        if !tags.is_empty() {
            writeln!(f, "- Tags: {}", tags.join(", "))?;
        }

        let credentials = self.credentials();
        if !credentials.is_empty() {
            writeln!(f, "\n## Application portal")?;
            writeln!(f)?;
            if let Some(url) = &credentials.site_url {
                writeln!(f, "- Site: {}", Location(url))?;
            }
            if let Some(account) = &credentials.account_id {
                writeln!(f, "- Account: {account}")?;
            }
            if credentials.password.as_deref().is_some_and(|p| !p.is_empty()) {
                writeln!(f, "- Password: ********")?;
            }
        }

        let job = &self.job_details;
        if job.salary.is_some() || job.description.is_some() {
            writeln!(f, "\n## Job")?;
            writeln!(f)?;
            if let Some(salary) = &job.salary {
                writeln!(f, "- Salary: {salary}")?;
            }
            if let Some(description) = &job.description {
                writeln!(f)?;
                writeln!(f, "{description}")?;
            }
        }
        for (heading, items) in [("Benefits", &job.benefits), ("Requirements", &job.requirements)] {
            if let Some(items) = items.as_ref().filter(|items| !items.is_empty()) {
                writeln!(f, "\n### {heading}")?;
                writeln!(f)?;
                for item in items {
                    writeln!(f, "- {item}")?;
                }
            }
        }

        if !self.notes.is_empty() {
            writeln!(f, "\n## Notes")?;
            writeln!(f)?;
            writeln!(f, "{}", self.notes)?;
        }

        if self.stages.is_empty() {
            writeln!(f, "\nNo stages recorded.")?;
        } else {
            writeln!(f, "\n## Stages")?;
            writeln!(f)?;
            let current = self.current_stage_index();
            for (position, stage) in self.stages.iter().enumerate() {
                if current == Some(position) {
                    writeln!(f, "**Current stage**")?;
                    writeln!(f)?;
                }
                write!(f, "{stage}")?;
            }
        }

        if !self.contacts.is_empty() {
            writeln!(f, "## Contacts")?;
            writeln!(f)?;
            for contact in &self.contacts {
                writeln!(f, "{contact}")?;
            }
        }

        Ok(())
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### {}. {} ({})", self.id, self.name, self.status.with_icon())?;
        writeln!(f)?;

        if let Some(date) = self.date {
            match &self.time {
                Some(time) => writeln!(f, "- Date: {date} {time}")?,
                None => writeln!(f, "- Date: {date}")?,
            }
        }
        if let Some(location) = &self.location {
            writeln!(f, "- Location: {}", Location(location))?;
        }
        if let Some(interviewer) = &self.interviewer {
            writeln!(f, "- Interviewer: {interviewer}")?;
        }
        if self.rating.is_some() {
            writeln!(f, "- Rating: {}", optional_rating(self.rating))?;
        }
        if let Some(completed) = self.completed_at {
            writeln!(f, "- Completed: {completed}")?;
        }
        writeln!(f)?;

        if !self.preparation.is_empty() {
            writeln!(f, "#### Preparation")?;
            writeln!(f)?;
            for item in &self.preparation {
                writeln!(f, "- {item}")?;
            }
            writeln!(f)?;
        }

        for (heading, text) in [("Feedback", &self.feedback), ("Notes", &self.notes)] {
            if let Some(text) = text {
                writeln!(f, "#### {heading}")?;
                writeln!(f)?;
                writeln!(f, "{text}")?;
                writeln!(f)?;
            }
        }

        Ok(())
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "- **{}**", self.name)?;
        if !self.role.is_empty() {
            write!(f, " ({})", self.role)?;
        }
        if let Some(email) = &self.email {
            write!(f, " {email}")?;
        }
        if let Some(phone) = &self.phone {
            write!(f, " {phone}")?;
        }
        Ok(())
    }
}
