//! Command-line argument definitions using clap
//!
//! Argument structs carry the clap derives; the core forms stay free of
//! them. Each struct converts into its core counterpart:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Forms → Tracker
//! ```
//!
//! Edit-style commands start from a form pre-filled with the current record
//! and override only the flags that were given, reporting which fields
//! changed.

use clap::{Args, Subcommand, ValueEnum};
use jiff::civil::Date;
use pursuit_core::{
    models::{
        filters::parse_filter, CompanyQuery, CompanySize, CompanyStatus, Priority, Rating,
        SortKey, SortOrder, StageStatus,
    },
    params::{CompanyForm, StageForm},
};

// ============================================================================
// Value enums
// ============================================================================

/// Company size as accepted on the command line
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum SizeArg {
    Startup,
    Sme,
    Large,
    Megacorp,
}

impl From<SizeArg> for CompanySize {
    fn from(val: SizeArg) -> Self {
        match val {
            SizeArg::Startup => CompanySize::Startup,
            SizeArg::Sme => CompanySize::Sme,
            SizeArg::Large => CompanySize::Large,
            SizeArg::Megacorp => CompanySize::Megacorp,
        }
    }
}

/// Application status as accepted on the command line
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum CompanyStatusArg {
    Applied,
    InProgress,
    FinalInterview,
    Offer,
    Rejected,
    Withdrawn,
}

impl From<CompanyStatusArg> for CompanyStatus {
    fn from(val: CompanyStatusArg) -> Self {
        match val {
            CompanyStatusArg::Applied => CompanyStatus::Applied,
            CompanyStatusArg::InProgress => CompanyStatus::InProgress,
            CompanyStatusArg::FinalInterview => CompanyStatus::FinalInterview,
            CompanyStatusArg::Offer => CompanyStatus::Offer,
            CompanyStatusArg::Rejected => CompanyStatus::Rejected,
            CompanyStatusArg::Withdrawn => CompanyStatus::Withdrawn,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum PriorityArg {
    High,
    Medium,
    Low,
}

impl From<PriorityArg> for Priority {
    fn from(val: PriorityArg) -> Self {
        match val {
            PriorityArg::High => Priority::High,
            PriorityArg::Medium => Priority::Medium,
            PriorityArg::Low => Priority::Low,
        }
    }
}

/// Stage status values for `stage update --status`
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum StageStatusArg {
    /// Not scheduled yet
    Pending,
    /// Date and time fixed
    Scheduled,
    /// Cleared; records the completion date
    Passed,
    /// Not cleared; records the completion date
    Failed,
}

impl From<StageStatusArg> for StageStatus {
    fn from(val: StageStatusArg) -> Self {
        match val {
            StageStatusArg::Pending => StageStatus::Pending,
            StageStatusArg::Scheduled => StageStatus::Scheduled,
            StageStatusArg::Passed => StageStatus::Passed,
            StageStatusArg::Failed => StageStatus::Failed,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum SortKeyArg {
    Name,
    Date,
    Priority,
    Status,
}

impl From<SortKeyArg> for SortKey {
    fn from(val: SortKeyArg) -> Self {
        match val {
            SortKeyArg::Name => SortKey::Name,
            SortKeyArg::Date => SortKey::AppliedDate,
            SortKeyArg::Priority => SortKey::Priority,
            SortKeyArg::Status => SortKey::Status,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum SortOrderArg {
    Asc,
    Desc,
}

impl From<SortOrderArg> for SortOrder {
    fn from(val: SortOrderArg) -> Self {
        match val {
            SortOrderArg::Asc => SortOrder::Asc,
            SortOrderArg::Desc => SortOrder::Desc,
        }
    }
}

fn rating(value: Option<u8>) -> Option<Rating> {
    // Range is enforced by the argument parser
    value.and_then(|v| Rating::new(v).ok())
}

// ============================================================================
// Company commands
// ============================================================================

/// Fields shared by `company add` and `company edit`. All optional so edit
/// can tell which ones were given.
#[derive(Args)]
pub struct CompanyFields {
    /// Industry, e.g. "Fintech"
    #[arg(long)]
    pub industry: Option<String>,
    #[arg(long, value_enum)]
    pub size: Option<SizeArg>,
    /// Office location
    #[arg(long)]
    pub location: Option<String>,
    /// Application date (YYYY-MM-DD). Defaults to today on add
    #[arg(long)]
    pub applied: Option<Date>,
    #[arg(long, value_enum)]
    pub status: Option<CompanyStatusArg>,
    #[arg(short, long, value_enum)]
    pub priority: Option<PriorityArg>,
    #[arg(short, long)]
    pub notes: Option<String>,
    /// Overall impression from 1 to 5
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=5))]
    pub rating: Option<u8>,
    /// Comma-separated tags
    #[arg(short, long)]
    pub tags: Option<String>,
    #[arg(long)]
    pub salary: Option<String>,
    /// Benefits as a comma-separated list
    #[arg(long, value_delimiter = ',')]
    pub benefits: Option<Vec<String>>,
    /// Requirements as a comma-separated list
    #[arg(long, value_delimiter = ',')]
    pub requirements: Option<Vec<String>>,
    /// Job description
    #[arg(short, long)]
    pub description: Option<String>,
    /// Application portal account id
    #[arg(long)]
    pub account_id: Option<String>,
    /// Application portal password
    #[arg(long)]
    pub password: Option<String>,
    /// Application portal URL
    #[arg(long)]
    pub site_url: Option<String>,
}

impl CompanyFields {
    /// Write every given field into `form`, returning the names of the
    /// fields that were set.
    pub fn apply(self, form: &mut CompanyForm) -> Vec<String> {
        let mut changes = Vec::new();
        let mut set = |name: &str| changes.push(format!("Updated {name}"));

        if let Some(industry) = self.industry {
            form.industry = industry;
            set("industry");
        }
        if let Some(size) = self.size {
            form.size = size.into();
            set("size");
        }
        if let Some(location) = self.location {
            form.location = location;
            set("location");
        }
        if let Some(applied) = self.applied {
            form.applied_date = Some(applied);
            set("applied date");
        }
        if let Some(status) = self.status {
            form.status = status.into();
            set("status");
        }
        if let Some(priority) = self.priority {
            form.priority = priority.into();
            set("priority");
        }
        if let Some(notes) = self.notes {
            form.notes = notes;
            set("notes");
        }
        if self.rating.is_some() {
            form.overall_rating = rating(self.rating);
            set("rating");
        }
        if let Some(tags) = self.tags {
            form.tags_text = tags;
            set("tags");
        }
        if let Some(salary) = self.salary {
            form.job_salary = Some(salary);
            set("salary");
        }
        if let Some(benefits) = self.benefits {
            form.job_benefits = Some(benefits);
            set("benefits");
        }
        if let Some(requirements) = self.requirements {
            form.job_requirements = Some(requirements);
            set("requirements");
        }
        if let Some(description) = self.description {
            form.job_description = Some(description);
            set("description");
        }
        if let Some(account_id) = self.account_id {
            form.credentials.account_id = Some(account_id);
            set("account id");
        }
        if let Some(password) = self.password {
            form.credentials.password = Some(password);
            set("password");
        }
        if let Some(site_url) = self.site_url {
            form.credentials.site_url = Some(site_url);
            set("site url");
        }
        changes
    }
}

/// Add a company
///
/// The company starts with a passed "Entry" stage dated today.
#[derive(Args)]
pub struct AddCompanyArgs {
    /// Company name
    pub name: String,
    /// Job title applied for
    #[arg(long = "title", short = 'j')]
    pub job_title: String,
    #[command(flatten)]
    pub fields: CompanyFields,
}

impl From<AddCompanyArgs> for CompanyForm {
    fn from(val: AddCompanyArgs) -> Self {
        let mut form = CompanyForm {
            name: val.name,
            job_title: val.job_title,
            ..Default::default()
        };
        val.fields.apply(&mut form);
        form
    }
}

/// Edit a company
///
/// Only the given flags change; everything else keeps its current value.
#[derive(Args)]
pub struct EditCompanyArgs {
    /// ID of the company to edit
    pub id: String,
    /// New company name
    #[arg(long)]
    pub name: Option<String>,
    /// New job title
    #[arg(long = "title", short = 'j')]
    pub job_title: Option<String>,
    #[command(flatten)]
    pub fields: CompanyFields,
}

impl EditCompanyArgs {
    /// Apply the given flags on top of `form`, returning the change list.
    pub fn apply(self, form: &mut CompanyForm) -> Vec<String> {
        let mut changes = Vec::new();
        if let Some(name) = self.name {
            form.name = name;
            changes.push("Updated name".to_string());
        }
        if let Some(job_title) = self.job_title {
            form.job_title = job_title;
            changes.push("Updated job title".to_string());
        }
        changes.extend(self.fields.apply(form));
        changes
    }
}

/// List companies
#[derive(Args)]
pub struct ListCompaniesArgs {
    /// Case-insensitive text matched against name, industry, job title and
    /// tags
    #[arg(short, long, default_value = "")]
    pub query: String,
    /// Status to show, or "all"
    #[arg(long, default_value = "all", value_parser = parse_filter::<CompanyStatus>)]
    pub status: ::std::option::Option<CompanyStatus>,
    /// Priority to show, or "all"
    #[arg(short, long, default_value = "all", value_parser = parse_filter::<Priority>)]
    pub priority: ::std::option::Option<Priority>,
    #[arg(short, long, value_enum, default_value_t = SortKeyArg::Date)]
    pub sort: SortKeyArg,
    #[arg(short, long, value_enum, default_value_t = SortOrderArg::Desc)]
    pub order: SortOrderArg,
}

impl From<ListCompaniesArgs> for CompanyQuery {
    fn from(val: ListCompaniesArgs) -> Self {
        CompanyQuery {
            text: val.query,
            status: val.status,
            priority: val.priority,
            sort: val.sort.into(),
            order: val.order.into(),
        }
    }
}

#[derive(Args)]
pub struct CompanyIdArgs {
    /// ID of the company
    pub id: String,
}

/// Delete a company with its stages and contacts
#[derive(Args)]
pub struct DeleteCompanyArgs {
    /// ID of the company to delete
    pub id: String,
    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

/// Move the current-stage pointer
#[derive(Args)]
pub struct SetCurrentStageArgs {
    /// ID of the company
    pub id: String,
    /// 0-based stage position (0 = Entry)
    pub index: usize,
}

#[derive(Subcommand)]
pub enum CompanyCommands {
    /// Add a company
    #[command(alias = "a")]
    Add(AddCompanyArgs),
    /// Edit a company
    #[command(alias = "e")]
    Edit(EditCompanyArgs),
    /// Delete a company with its stages and contacts
    #[command(aliases = ["d", "rm"])]
    Delete(DeleteCompanyArgs),
    /// List companies
    #[command(aliases = ["l", "ls"])]
    List(ListCompaniesArgs),
    /// Show a company with its stages
    #[command(alias = "s")]
    Show(CompanyIdArgs),
    /// Set which stage the application is currently in
    Current(SetCurrentStageArgs),
}

// ============================================================================
// Stage commands
// ============================================================================

/// Append a pending stage to a company
#[derive(Args)]
pub struct AddStageArgs {
    /// ID of the company
    pub company_id: String,
    /// Stage name, e.g. "Technical interview"
    pub name: String,
}

/// Update a stage
///
/// Only the given flags change. Moving to passed or failed records today as
/// the completion date.
#[derive(Args)]
pub struct UpdateStageArgs {
    /// ID of the company
    pub company_id: String,
    /// ID of the stage
    pub stage_id: String,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(short, long, value_enum)]
    pub status: Option<StageStatusArg>,
    /// Stage date (YYYY-MM-DD)
    #[arg(short, long)]
    pub date: Option<Date>,
    /// Stage time (HH:MM)
    #[arg(short, long)]
    pub time: Option<String>,
    /// Place or meeting URL
    #[arg(short, long)]
    pub location: Option<String>,
    #[arg(short, long)]
    pub feedback: Option<String>,
    #[arg(short, long)]
    pub interviewer: Option<String>,
    #[arg(short, long)]
    pub notes: Option<String>,
    /// Preparation items as a comma-separated list
    #[arg(short, long, value_delimiter = ',')]
    pub preparation: Option<Vec<String>>,
    /// Impression from 1 to 5
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=5))]
    pub rating: Option<u8>,
}

impl UpdateStageArgs {
    /// Apply the given flags on top of `form`, returning the change list.
    pub fn apply(self, form: &mut StageForm) -> Vec<String> {
        let mut changes = Vec::new();
        let mut set = |name: &str| changes.push(format!("Updated {name}"));

        if let Some(name) = self.name {
            form.name = name;
            set("name");
        }
        if let Some(status) = self.status {
            form.status = status.into();
            set("status");
        }
        if let Some(date) = self.date {
            form.date = Some(date);
            set("date");
        }
        if let Some(time) = self.time {
            form.time = Some(time);
            set("time");
        }
        if let Some(location) = self.location {
            form.location = Some(location);
            set("location");
        }
        if let Some(feedback) = self.feedback {
            form.feedback = Some(feedback);
            set("feedback");
        }
        if let Some(interviewer) = self.interviewer {
            form.interviewer = Some(interviewer);
            set("interviewer");
        }
        if let Some(notes) = self.notes {
            form.notes = Some(notes);
            set("notes");
        }
        if let Some(preparation) = self.preparation {
            form.preparation = preparation;
            set("preparation");
        }
        if self.rating.is_some() {
            form.rating = rating(self.rating);
            set("rating");
        }
        changes
    }
}

/// Delete a stage
#[derive(Args)]
pub struct DeleteStageArgs {
    /// ID of the company
    pub company_id: String,
    /// ID of the stage
    pub stage_id: String,
    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

#[derive(Subcommand)]
pub enum StageCommands {
    /// Append a pending stage to a company
    #[command(alias = "a")]
    Add(AddStageArgs),
    /// Update a stage
    #[command(alias = "u")]
    Update(UpdateStageArgs),
    /// Delete a stage
    #[command(aliases = ["d", "rm"])]
    Delete(DeleteStageArgs),
}
