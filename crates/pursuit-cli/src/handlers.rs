//! Command handlers: forward each parsed command to the tracker and render
//! the outcome.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use log::debug;
use pursuit_core::{
    display::{
        Companies, CreateResult, DeleteResult, OperationStatus, SyncWarnings, UpdateResult,
    },
    models::CompanyQuery,
    params::{CompanyForm, StageForm},
    view, Synced, Tracker,
};

use crate::{
    cli::{CompanyCommands, StageCommands},
    renderer::TerminalRenderer,
};

pub struct Cli {
    tracker: Tracker,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(tracker: Tracker, renderer: TerminalRenderer) -> Self {
        Self { tracker, renderer }
    }

    pub async fn handle_company_command(mut self, command: CompanyCommands) -> Result<()> {
        match command {
            CompanyCommands::Add(args) => {
                let form = CompanyForm::from(args);
                let added = self
                    .tracker
                    .add_company(&form)
                    .await
                    .context("Failed to add company")?;
                self.render_synced(&added, CreateResult::new(added.value.clone()))
            }
            CompanyCommands::Edit(args) => {
                let company = self
                    .tracker
                    .company(&args.id)
                    .with_context(|| format!("Company with ID {} not found", args.id))?;
                let id = company.id.clone();
                let mut form = CompanyForm::from(company);
                let changes = args.apply(&mut form);
                let edited = self
                    .tracker
                    .edit_company(&id, &form)
                    .await
                    .context("Failed to edit company")?;
                self.render_synced(
                    &edited,
                    UpdateResult::with_changes(edited.value.clone(), changes),
                )
            }
            CompanyCommands::Delete(args) => {
                let company = self
                    .tracker
                    .company(&args.id)
                    .with_context(|| format!("Company with ID {} not found", args.id))?;
                let prompt = format!(
                    "Delete company '{}' with {} stage(s)?",
                    company.name,
                    company.stages.len()
                );
                if !args.yes && !confirm(&prompt)? {
                    return self.render_status(OperationStatus::failure(
                        "Deletion cancelled".to_string(),
                    ));
                }
                let deleted = self
                    .tracker
                    .delete_company(&args.id)
                    .await
                    .context("Failed to delete company")?;
                self.render_synced(&deleted, DeleteResult::new(deleted.value.clone()))
            }
            CompanyCommands::List(args) => self.list_companies(&CompanyQuery::from(args)),
            CompanyCommands::Show(args) => {
                let company = self
                    .tracker
                    .company(&args.id)
                    .with_context(|| format!("Company with ID {} not found", args.id))?;
                self.renderer.render(&company.to_string())
            }
            CompanyCommands::Current(args) => {
                let updated = self
                    .tracker
                    .set_current_stage(&args.id, args.index)
                    .await
                    .context("Failed to set current stage")?;
                let changes = vec![format!("Current stage set to {}", args.index)];
                self.render_synced(
                    &updated,
                    UpdateResult::with_changes(updated.value.clone(), changes),
                )
            }
        }
    }

    pub async fn handle_stage_command(mut self, command: StageCommands) -> Result<()> {
        match command {
            StageCommands::Add(args) => {
                let added = self
                    .tracker
                    .add_stage(&args.company_id, &args.name)
                    .await
                    .context("Failed to add stage")?;
                self.render_synced(&added, CreateResult::new(added.value.clone()))
            }
            StageCommands::Update(args) => {
                let company_id = args.company_id.clone();
                let stage_id = args.stage_id.clone();
                let stage = self
                    .tracker
                    .company(&company_id)
                    .and_then(|c| c.stage(&stage_id))
                    .with_context(|| {
                        format!("Stage with ID {stage_id} not found in company {company_id}")
                    })?;
                let mut form = StageForm::from(stage);
                let changes = args.apply(&mut form);
                let updated = self
                    .tracker
                    .update_stage(&company_id, &stage_id, &form)
                    .await
                    .context("Failed to update stage")?;
                self.render_synced(
                    &updated,
                    UpdateResult::with_changes(updated.value.clone(), changes),
                )
            }
            StageCommands::Delete(args) => {
                let stage = self
                    .tracker
                    .company(&args.company_id)
                    .and_then(|c| c.stage(&args.stage_id))
                    .with_context(|| {
                        format!(
                            "Stage with ID {} not found in company {}",
                            args.stage_id, args.company_id
                        )
                    })?;
                let prompt = format!("Delete stage '{}'?", stage.name);
                if !args.yes && !confirm(&prompt)? {
                    return self.render_status(OperationStatus::failure(
                        "Deletion cancelled".to_string(),
                    ));
                }
                let deleted = self
                    .tracker
                    .delete_stage(&args.company_id, &args.stage_id)
                    .await
                    .context("Failed to delete stage")?;
                self.render_synced(&deleted, DeleteResult::new(deleted.value.clone()))
            }
        }
    }

    pub fn list_companies(&self, query: &CompanyQuery) -> Result<()> {
        let companies = view::query(self.tracker.companies(), query);
        debug!("Listing {} of {} companies", companies.len(), self.tracker.companies().len());
        self.renderer.render(&Companies(companies).to_string())
    }

    pub fn show_statistics(&self) -> Result<()> {
        let stats = view::statistics(self.tracker.companies());
        self.renderer.render(&stats.to_string())
    }

    pub fn show_schedule(&self) -> Result<()> {
        let schedule = view::schedule(self.tracker.companies(), self.tracker.today());
        self.renderer.render(&schedule.to_string())
    }

    /// Render the sync banner, if any, followed by the result.
    fn render_synced<T, D: std::fmt::Display>(&self, synced: &Synced<T>, result: D) -> Result<()> {
        let banner = SyncWarnings(&synced.warnings).to_string();
        if !banner.is_empty() {
            self.renderer.render(&banner)?;
        }
        self.renderer.render(&result.to_string())
    }

    fn render_status(&self, status: OperationStatus) -> Result<()> {
        self.renderer.render(&status.to_string())
    }
}

/// Ask a y/N question on stdin. Anything but "y"/"yes", including end of
/// input, is a no.
fn confirm(prompt: &str) -> Result<bool> {
    print!("{prompt} [y/N] ");
    io::stdout().flush().context("Failed to flush stdout")?;

    let mut answer = String::new();
    io::stdin()
        .lock()
        .read_line(&mut answer)
        .context("Failed to read confirmation")?;
    Ok(matches!(
        answer.trim().to_lowercase().as_str(),
        "y" | "yes"
    ))
}
