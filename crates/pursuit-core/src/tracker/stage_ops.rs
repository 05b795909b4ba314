//! Stage operations for the Tracker.

use log::debug;

use super::{record, Synced, Tracker};
use crate::{
    error::{Result, TrackerError},
    models::Stage,
    params::StageForm,
    remote::{rows, Row, RowFilter, Table},
    transition,
};

impl Tracker {
    /// Appends a new `pending` stage named `name` to company `company_id`
    /// and bumps the company's `last_update`.
    ///
    /// The stage takes the remote id when the insert succeeds and a local id
    /// otherwise; it is appended either way.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::CompanyNotFound` for an unknown company and
    /// `TrackerError::InvalidInput` for a blank name. Nothing is sent in
    /// either case.
    pub async fn add_stage(&mut self, company_id: &str, name: &str) -> Result<Synced<Stage>> {
        let name = name.trim();
        if name.is_empty() {
            return Err(TrackerError::invalid_input("name").with_reason("must not be blank"));
        }
        let index = self.company_index(company_id)?;
        let today = self.today();
        let mut warnings = Vec::new();

        let mut stage = Stage::pending(String::new(), name);
        stage.id = record(
            self.remote
                .insert(Table::Stages, rows::stage_to_row(&stage, company_id))
                .await,
            "add stage",
            Table::Stages,
            &mut warnings,
        )
        .flatten()
        .unwrap_or_else(|| self.next_local_id());

        let company = &mut self.companies[index];
        company.stages.push(stage.clone());
        company.last_update = today;

        let mut patch = Row::new();
        patch.insert("last_update".into(), today.to_string().into());
        record(
            self.remote.update(Table::Companies, patch, company_id).await,
            "update company last update",
            Table::Companies,
            &mut warnings,
        );
        debug!("Added stage {} to company {company_id}", stage.id);
        Ok(Synced::new(stage, warnings))
    }

    /// Writes the values from `form` into stage `stage_id`.
    ///
    /// Moving into `passed` or `failed` stamps `completed_at` with today; see
    /// [`transition::transition`]. The local stage is replaced whatever the
    /// remote outcome.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::InvalidInput` for an invalid form,
    /// `TrackerError::CompanyNotFound` or `TrackerError::StageNotFound` for
    /// unknown ids.
    pub async fn update_stage(
        &mut self,
        company_id: &str,
        stage_id: &str,
        form: &StageForm,
    ) -> Result<Synced<Stage>> {
        form.validate()?;
        let index = self.company_index(company_id)?;
        let today = self.today();

        let stage = self.companies[index]
            .stage_mut(stage_id)
            .ok_or_else(|| TrackerError::stage_not_found(company_id, stage_id))?;
        let updated = transition::apply_form(stage, form, today);
        *stage = updated.clone();

        let mut warnings = Vec::new();
        record(
            self.remote
                .update(Table::Stages, rows::stage_to_row(&updated, company_id), stage_id)
                .await,
            "update stage",
            Table::Stages,
            &mut warnings,
        );
        Ok(Synced::new(updated, warnings))
    }

    /// Removes stage `stage_id` from company `company_id`.
    ///
    /// The local removal happens whatever the remote outcome. Asking the
    /// user for confirmation is up to the caller. The current-stage pointer
    /// keeps pointing at the same stage when an earlier one is removed.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::CompanyNotFound` or
    /// `TrackerError::StageNotFound` for unknown ids.
    pub async fn delete_stage(&mut self, company_id: &str, stage_id: &str) -> Result<Synced<Stage>> {
        let index = self.company_index(company_id)?;
        let company = &mut self.companies[index];
        let position = company
            .stages
            .iter()
            .position(|s| s.id == stage_id)
            .ok_or_else(|| TrackerError::stage_not_found(company_id, stage_id))?;
        let removed = company.stages.remove(position);
        let shifted = position < company.current_stage;
        if shifted {
            company.current_stage -= 1;
        }
        let current_stage = company.current_stage;

        let mut warnings = Vec::new();
        record(
            self.remote
                .delete(Table::Stages, RowFilter::id(stage_id))
                .await,
            "delete stage",
            Table::Stages,
            &mut warnings,
        );
        if shifted {
            let mut patch = Row::new();
            patch.insert("current_stage".into(), current_stage.into());
            record(
                self.remote.update(Table::Companies, patch, company_id).await,
                "update current stage",
                Table::Companies,
                &mut warnings,
            );
        }
        debug!("Deleted stage {stage_id} from company {company_id}");
        Ok(Synced::new(removed, warnings))
    }
}
