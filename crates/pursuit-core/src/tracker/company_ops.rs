//! Company operations for the Tracker.

use jiff::civil::Date;
use log::{debug, info, warn};

use super::{record, Synced, Tracker};
use crate::{
    error::{RemoteResult, Result, TrackerError},
    models::{Company, JobDetails, Stage},
    params::CompanyForm,
    remote::{
        rows::{self, assemble},
        Order, Row, RowFilter, Table,
    },
};

impl Tracker {
    /// Replaces the company list with everything the remote store holds for
    /// the current user, joining stages and contacts client-side.
    ///
    /// A user without companies loads an empty list. On failure the current
    /// list is kept, [`Tracker::load_error`] is set and the error returned.
    pub async fn load_all(&mut self) -> Result<usize> {
        match self.fetch_all().await {
            Ok(companies) => {
                info!(
                    "Loaded {} companies for user {}",
                    companies.len(),
                    self.user_id
                );
                self.companies = companies;
                self.load_error = None;
                Ok(self.companies.len())
            }
            Err(e) => {
                warn!("Failed to load companies, keeping current list: {e}");
                self.load_error = Some(e.to_string());
                Err(e.into())
            }
        }
    }

    async fn fetch_all(&self) -> RemoteResult<Vec<Company>> {
        let today = self.today();
        let company_rows = self
            .remote
            .select(
                Table::Companies,
                RowFilter::eq("user_id", self.user_id.as_str()),
                Some(Order::asc("id")),
            )
            .await?;
        if company_rows.is_empty() {
            return Ok(Vec::new());
        }

        let companies = company_rows
            .iter()
            .map(|row| rows::company_from_row(row, today))
            .collect::<RemoteResult<Vec<_>>>()?;
        let ids: Vec<String> = companies.iter().map(|c| c.id.clone()).collect();

        let stages = self
            .remote
            .select(
                Table::Stages,
                RowFilter::within("company_id", ids.clone()),
                Some(Order::asc("id")),
            )
            .await?
            .iter()
            .map(rows::stage_from_row)
            .collect::<RemoteResult<Vec<_>>>()?;
        let contacts = self
            .remote
            .select(
                Table::Contacts,
                RowFilter::within("company_id", ids),
                Some(Order::asc("id")),
            )
            .await?
            .iter()
            .map(rows::contact_from_row)
            .collect::<RemoteResult<Vec<_>>>()?;

        Ok(assemble(companies, stages, contacts))
    }

    /// Adds a company built from `form`.
    ///
    /// The company gets the id returned by the remote insert, or a local id
    /// when the insert fails. It always starts with one passed "Entry" stage
    /// dated today and is appended to the list whatever the remote outcome.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::InvalidInput` when the name or job title is
    /// blank; nothing is changed or sent in that case.
    pub async fn add_company(&mut self, form: &CompanyForm) -> Result<Synced<Company>> {
        form.validate()?;
        let today = self.today();
        let tags = self
            .codec
            .encode(&form.credentials, &form.ordinary_tags(), &[]);
        let mut company = company_from_form(form, String::new(), tags, today);
        company.applied_date = form.applied_date.unwrap_or(today);
        let mut warnings = Vec::new();

        let mut row = rows::company_to_row(&company);
        row.insert("user_id".into(), self.user_id.clone().into());
        let remote_id = record(
            self.remote.insert(Table::Companies, row).await,
            "add company",
            Table::Companies,
            &mut warnings,
        )
        .flatten();

        let mut entry = Stage::entry(String::new(), today);
        entry.id = match &remote_id {
            Some(company_id) => record(
                self.remote
                    .insert(Table::Stages, rows::stage_to_row(&entry, company_id))
                    .await,
                "add entry stage",
                Table::Stages,
                &mut warnings,
            )
            .flatten()
            .unwrap_or_else(|| self.next_local_id()),
            // The company row does not exist remotely, so neither can its stage
            None => self.next_local_id(),
        };

        company.id = remote_id.unwrap_or_else(|| self.next_local_id());
        company.stages.push(entry);
        debug!("Added company {} ({})", company.id, company.name);
        self.companies.push(company.clone());
        Ok(Synced::new(company, warnings))
    }

    /// Replaces company `id` with the values from `form`.
    ///
    /// Credential tags are re-derived from the form, unrecognised reserved
    /// tags are carried over, and `last_update` becomes today. Stages,
    /// contacts and the current stage are untouched.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::InvalidInput` for a blank name or job title and
    /// `TrackerError::CompanyNotFound` for an unknown id.
    pub async fn edit_company(&mut self, id: &str, form: &CompanyForm) -> Result<Synced<Company>> {
        form.validate()?;
        let index = self.company_index(id)?;
        let today = self.today();

        let existing = &self.companies[index];
        let preserved = self.codec.decode(&existing.tags).reserved;
        let tags = self
            .codec
            .encode(&form.credentials, &form.ordinary_tags(), &preserved);
        let edited = Company {
            applied_date: form.applied_date.unwrap_or(existing.applied_date),
            current_stage: existing.current_stage,
            stages: existing.stages.clone(),
            contacts: existing.contacts.clone(),
            ..company_from_form(form, id.to_string(), tags, today)
        };
        self.companies[index] = edited.clone();

        let mut warnings = Vec::new();
        record(
            self.remote
                .update(Table::Companies, rows::company_to_row(&edited), id)
                .await,
            "update company",
            Table::Companies,
            &mut warnings,
        );
        Ok(Synced::new(edited, warnings))
    }

    /// Points the company at stage `index` and bumps `last_update`.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::CompanyNotFound` for an unknown id and
    /// `TrackerError::InvalidInput` when `index` is not a stage index.
    pub async fn set_current_stage(&mut self, id: &str, index: usize) -> Result<Synced<Company>> {
        let company_index = self.company_index(id)?;
        let today = self.today();

        let company = &mut self.companies[company_index];
        if index >= company.stages.len() {
            return Err(TrackerError::invalid_input("current_stage").with_reason(format!(
                "company has {} stages, got index {index}",
                company.stages.len()
            )));
        }
        company.current_stage = index;
        company.last_update = today;
        let updated = company.clone();

        let mut patch = Row::new();
        patch.insert("current_stage".into(), index.into());
        patch.insert("last_update".into(), today.to_string().into());
        let mut warnings = Vec::new();
        record(
            self.remote.update(Table::Companies, patch, id).await,
            "update current stage",
            Table::Companies,
            &mut warnings,
        );
        Ok(Synced::new(updated, warnings))
    }

    /// Removes company `id` with its stages and contacts.
    ///
    /// The three remote deletes run independently; any of them failing
    /// neither stops the others nor the local removal. Asking the user for
    /// confirmation is up to the caller.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::CompanyNotFound` for an unknown id.
    pub async fn delete_company(&mut self, id: &str) -> Result<Synced<Company>> {
        let index = self.company_index(id)?;
        let removed = self.companies.remove(index);

        let (company, stages, contacts) = tokio::join!(
            self.remote.delete(Table::Companies, RowFilter::id(id)),
            self.remote
                .delete(Table::Stages, RowFilter::eq("company_id", id)),
            self.remote
                .delete(Table::Contacts, RowFilter::eq("company_id", id)),
        );

        let mut warnings = Vec::new();
        record(company, "delete company", Table::Companies, &mut warnings);
        record(stages, "delete company stages", Table::Stages, &mut warnings);
        record(
            contacts,
            "delete company contacts",
            Table::Contacts,
            &mut warnings,
        );
        debug!("Deleted company {id}");
        Ok(Synced::new(removed, warnings))
    }
}

/// A company with no stages or contacts from form values. `applied_date` and
/// `current_stage` are left for the caller to settle.
fn company_from_form(form: &CompanyForm, id: String, tags: Vec<String>, today: Date) -> Company {
    Company {
        id,
        name: form.name.trim().to_string(),
        industry: form.industry.trim().to_string(),
        size: form.size,
        location: form.location.trim().to_string(),
        applied_date: today,
        status: form.status,
        current_stage: 0,
        priority: form.priority,
        notes: form.notes.clone(),
        last_update: today,
        overall_rating: form.overall_rating,
        tags,
        job_details: JobDetails {
            title: form.job_title.trim().to_string(),
            salary: form.job_salary.clone(),
            benefits: form.job_benefits.clone(),
            requirements: form.job_requirements.clone(),
            description: form.job_description.clone(),
        },
        stages: Vec::new(),
        contacts: Vec::new(),
    }
}
