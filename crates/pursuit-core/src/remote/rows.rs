//! Mapping between domain models and persisted rows.
//!
//! Reading is lenient: every nullable or unparseable column falls back to a
//! documented default instead of failing the whole load.
//!
//! | column                             | default when null or invalid |
//! |------------------------------------|------------------------------|
//! | `companies.size`                   | `large`                      |
//! | `companies.status`                 | `applied`                    |
//! | `companies.priority`               | `medium`                     |
//! | `companies.current_stage`          | `0`                          |
//! | `companies.applied_date`           | today                        |
//! | `companies.last_update`            | today                        |
//! | `companies.overall_rating`         | none                         |
//! | `companies.tags`                   | empty list                   |
//! | `companies.job_benefits`           | none                         |
//! | `companies.job_requirements`       | none                         |
//! | other `companies` text columns     | empty string                 |
//! | `stages.status`                    | `pending`                    |
//! | `stages.preparation`               | empty list                   |
//! | `stages.name`, `contacts.*` text   | empty string                 |
//!
//! Only `id` (and `company_id` on child tables) is mandatory; a row without
//! one is reported as [`RemoteError::Malformed`].

use std::collections::HashMap;
use std::str::FromStr;

use jiff::civil::Date;
use serde_json::{Number, Value};

use super::{Row, Table};
use crate::{
    error::{RemoteError, RemoteResult},
    models::{Company, Contact, JobDetails, Rating, Stage},
};

// ----------------------------------------------------------------------------
// Writing
// ----------------------------------------------------------------------------

/// Company columns, without `id` and `user_id`.
pub fn company_to_row(company: &Company) -> Row {
    let job = &company.job_details;
    let mut row = Row::new();
    row.insert("name".into(), company.name.clone().into());
    row.insert("industry".into(), company.industry.clone().into());
    row.insert("size".into(), company.size.as_str().into());
    row.insert("location".into(), company.location.clone().into());
    row.insert("applied_date".into(), date_value(Some(company.applied_date)));
    row.insert("status".into(), company.status.as_str().into());
    row.insert("current_stage".into(), company.current_stage.into());
    row.insert("priority".into(), company.priority.as_str().into());
    row.insert("notes".into(), company.notes.clone().into());
    row.insert("last_update".into(), date_value(Some(company.last_update)));
    row.insert("overall_rating".into(), rating_value(company.overall_rating));
    row.insert("tags".into(), company.tags.clone().into());
    row.insert("job_title".into(), job.title.clone().into());
    row.insert("job_salary".into(), job.salary.clone().into());
    row.insert("job_benefits".into(), job.benefits.clone().into());
    row.insert("job_requirements".into(), job.requirements.clone().into());
    row.insert("job_description".into(), job.description.clone().into());
    row
}

/// Stage columns including `company_id`, without `id`.
pub fn stage_to_row(stage: &Stage, company_id: &str) -> Row {
    let mut row = Row::new();
    row.insert("company_id".into(), company_id.into());
    row.insert("name".into(), stage.name.clone().into());
    row.insert("status".into(), stage.status.as_str().into());
    row.insert("date".into(), date_value(stage.date));
    row.insert("time".into(), stage.time.clone().into());
    row.insert("location".into(), stage.location.clone().into());
    row.insert("feedback".into(), stage.feedback.clone().into());
    row.insert("interviewer".into(), stage.interviewer.clone().into());
    row.insert("notes".into(), stage.notes.clone().into());
    row.insert("rating".into(), rating_value(stage.rating));
    let preparation = if stage.preparation.is_empty() {
        Value::Null
    } else {
        stage.preparation.clone().into()
    };
    row.insert("preparation".into(), preparation);
    row.insert("completed_at".into(), date_value(stage.completed_at));
    row
}

/// Contact columns including `company_id`, without `id`.
pub fn contact_to_row(contact: &Contact, company_id: &str) -> Row {
    let mut row = Row::new();
    row.insert("company_id".into(), company_id.into());
    row.insert("name".into(), contact.name.clone().into());
    row.insert("role".into(), contact.role.clone().into());
    row.insert("email".into(), contact.email.clone().into());
    row.insert("phone".into(), contact.phone.clone().into());
    row
}

fn date_value(date: Option<Date>) -> Value {
    date.map_or(Value::Null, |d| Value::String(d.to_string()))
}

fn rating_value(rating: Option<Rating>) -> Value {
    rating.map_or(Value::Null, |r| Value::Number(Number::from(r.value())))
}

// ----------------------------------------------------------------------------
// Reading
// ----------------------------------------------------------------------------

/// Build a company from its row. Stages and contacts start empty; see
/// [`assemble`].
pub fn company_from_row(row: &Row, today: Date) -> RemoteResult<Company> {
    Ok(Company {
        id: required_id(row, Table::Companies, "id")?,
        name: text_or_default(row, "name"),
        industry: text_or_default(row, "industry"),
        size: parse_or_default(row, "size"),
        location: text_or_default(row, "location"),
        applied_date: date(row, "applied_date").unwrap_or(today),
        status: parse_or_default(row, "status"),
        current_stage: integer(row, "current_stage")
            .and_then(|i| usize::try_from(i).ok())
            .unwrap_or(0),
        priority: parse_or_default(row, "priority"),
        notes: text_or_default(row, "notes"),
        last_update: date(row, "last_update").unwrap_or(today),
        overall_rating: rating(row, "overall_rating"),
        tags: string_list(row, "tags").unwrap_or_default(),
        job_details: JobDetails {
            title: text_or_default(row, "job_title"),
            salary: text(row, "job_salary"),
            benefits: string_list(row, "job_benefits"),
            requirements: string_list(row, "job_requirements"),
            description: text(row, "job_description"),
        },
        stages: Vec::new(),
        contacts: Vec::new(),
    })
}

/// Build a stage from its row, returning it with its owning company id.
pub fn stage_from_row(row: &Row) -> RemoteResult<(String, Stage)> {
    let company_id = required_id(row, Table::Stages, "company_id")?;
    let stage = Stage {
        id: required_id(row, Table::Stages, "id")?,
        name: text_or_default(row, "name"),
        status: parse_or_default(row, "status"),
        date: date(row, "date"),
        time: text(row, "time"),
        location: text(row, "location"),
        feedback: text(row, "feedback"),
        interviewer: text(row, "interviewer"),
        notes: text(row, "notes"),
        preparation: string_list(row, "preparation").unwrap_or_default(),
        rating: rating(row, "rating"),
        completed_at: date(row, "completed_at"),
    };
    Ok((company_id, stage))
}

/// Build a contact from its row, returning it with its owning company id.
pub fn contact_from_row(row: &Row) -> RemoteResult<(String, Contact)> {
    let company_id = required_id(row, Table::Contacts, "company_id")?;
    let contact = Contact {
        id: required_id(row, Table::Contacts, "id")?,
        name: text_or_default(row, "name"),
        role: text_or_default(row, "role"),
        email: text(row, "email"),
        phone: text(row, "phone"),
    };
    Ok((company_id, contact))
}

/// Join stage and contact rows onto their companies by company id.
///
/// Children keep the order they were selected in. Children whose company is
/// not in `companies` are dropped.
pub fn assemble(
    mut companies: Vec<Company>,
    stages: Vec<(String, Stage)>,
    contacts: Vec<(String, Contact)>,
) -> Vec<Company> {
    let index: HashMap<String, usize> = companies
        .iter()
        .enumerate()
        .map(|(i, c)| (c.id.clone(), i))
        .collect();

    for (company_id, stage) in stages {
        if let Some(&i) = index.get(&company_id) {
            companies[i].stages.push(stage);
        }
    }
    for (company_id, contact) in contacts {
        if let Some(&i) = index.get(&company_id) {
            companies[i].contacts.push(contact);
        }
    }
    companies
}

/// Text form of a scalar cell; ids may arrive as numbers or strings.
pub fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn required_id(row: &Row, table: Table, column: &str) -> RemoteResult<String> {
    row.get(column)
        .and_then(value_text)
        .filter(|id| !id.is_empty())
        .ok_or_else(|| RemoteError::Malformed {
            table: table.to_string(),
            message: format!("missing {column}"),
        })
}

fn text(row: &Row, column: &str) -> Option<String> {
    match row.get(column)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn text_or_default(row: &Row, column: &str) -> String {
    text(row, column).unwrap_or_default()
}

fn parse_or_default<T: FromStr + Default>(row: &Row, column: &str) -> T {
    text(row, column)
        .and_then(|s| s.parse().ok())
        .unwrap_or_default()
}

fn integer(row: &Row, column: &str) -> Option<i64> {
    match row.get(column)? {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn rating(row: &Row, column: &str) -> Option<Rating> {
    integer(row, column)
        .and_then(|i| u8::try_from(i).ok())
        .and_then(|i| Rating::new(i).ok())
}

/// Dates are stored as `YYYY-MM-DD`; a trailing time part is ignored.
fn date(row: &Row, column: &str) -> Option<Date> {
    let raw = text(row, column)?;
    let day = raw.split(['T', ' ']).next().unwrap_or_default();
    day.parse().ok()
}

/// Arrays arrive either as JSON arrays or as JSON text.
fn string_list(row: &Row, column: &str) -> Option<Vec<String>> {
    match row.get(column)? {
        Value::Array(items) => Some(items.iter().filter_map(value_text).collect()),
        Value::String(s) => serde_json::from_str::<Vec<String>>(s).ok(),
        _ => None,
    }
}
