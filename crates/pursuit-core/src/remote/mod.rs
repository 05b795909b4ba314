//! Remote store adapter contract.
//!
//! The tracker persists through four generic calls against three logical
//! tables. Rows travel as JSON objects keyed by snake_case column names; the
//! mapping to and from the domain models lives in [`rows`] and nowhere else.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    Tracker      │    │   rows mapping  │    │  RemoteStore    │
//! │ (Company/Stage) │───▶│ (to_row /       │───▶│ (SqliteStore or │
//! │                 │◀───│  from_row)      │◀───│  any backend)   │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```

use std::fmt;

use async_trait::async_trait;
use serde_json::{Map, Value};

pub use crate::error::{RemoteError, RemoteResult};

pub mod rows;
pub mod sqlite;

pub use sqlite::SqliteStore;

/// A persisted row: column name to JSON value.
pub type Row = Map<String, Value>;

/// The three logical tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    Companies,
    Stages,
    Contacts,
}

impl Table {
    pub fn as_str(&self) -> &'static str {
        match self {
            Table::Companies => "companies",
            Table::Stages => "stages",
            Table::Contacts => "contacts",
        }
    }

    /// Every column the table accepts, `id` first.
    pub fn columns(&self) -> &'static [&'static str] {
        match self {
            Table::Companies => &[
                "id",
                "user_id",
                "name",
                "industry",
                "size",
                "location",
                "applied_date",
                "status",
                "current_stage",
                "priority",
                "notes",
                "last_update",
                "overall_rating",
                "tags",
                "job_title",
                "job_salary",
                "job_benefits",
                "job_requirements",
                "job_description",
            ],
            Table::Stages => &[
                "id",
                "company_id",
                "name",
                "status",
                "date",
                "time",
                "location",
                "feedback",
                "interviewer",
                "notes",
                "rating",
                "preparation",
                "completed_at",
            ],
            Table::Contacts => &["id", "company_id", "name", "role", "email", "phone"],
        }
    }

    /// Columns holding string arrays.
    pub fn array_columns(&self) -> &'static [&'static str] {
        match self {
            Table::Companies => &["tags", "job_benefits", "job_requirements"],
            Table::Stages => &["preparation"],
            Table::Contacts => &[],
        }
    }

    pub fn has_column(&self, column: &str) -> bool {
        self.columns().contains(&column)
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which rows a select or delete applies to.
#[derive(Debug, Clone, PartialEq)]
pub enum RowFilter {
    All,
    Eq { column: &'static str, value: Value },
    In { column: &'static str, values: Vec<Value> },
}

impl RowFilter {
    pub fn id(id: &str) -> Self {
        RowFilter::Eq {
            column: "id",
            value: Value::String(id.to_string()),
        }
    }

    pub fn eq(column: &'static str, value: impl Into<Value>) -> Self {
        RowFilter::Eq {
            column,
            value: value.into(),
        }
    }

    pub fn within<I, S>(column: &'static str, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Value>,
    {
        RowFilter::In {
            column,
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether `row` satisfies the filter, comparing ids as text.
    pub fn matches(&self, row: &Row) -> bool {
        let cell = |column: &str| row.get(column).and_then(rows::value_text);
        match self {
            RowFilter::All => true,
            RowFilter::Eq { column, value } => {
                cell(column).is_some() && cell(column) == rows::value_text(value)
            }
            RowFilter::In { column, values } => match cell(column) {
                Some(text) => values
                    .iter()
                    .any(|v| rows::value_text(v).as_deref() == Some(text.as_str())),
                None => false,
            },
        }
    }
}

/// Ordering of selected rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Order {
    pub column: &'static str,
    pub ascending: bool,
}

impl Order {
    pub fn asc(column: &'static str) -> Self {
        Self {
            column,
            ascending: true,
        }
    }

    pub fn desc(column: &'static str) -> Self {
        Self {
            column,
            ascending: false,
        }
    }
}

/// Create/read/update/delete against a hosted relational store.
///
/// Implementations carry no business logic. Every call either succeeds or
/// returns a [`RemoteError`]; the tracker decides what a failure means.
#[async_trait]
pub trait RemoteStore: Send + Sync {
    /// Rows of `table` matching `filter`, optionally ordered.
    async fn select(
        &self,
        table: Table,
        filter: RowFilter,
        order: Option<Order>,
    ) -> RemoteResult<Vec<Row>>;

    /// Insert `row` and return the id the store assigned, if it reports one.
    async fn insert(&self, table: Table, row: Row) -> RemoteResult<Option<String>>;

    /// Apply `patch` to the row with `id`.
    async fn update(&self, table: Table, patch: Row, id: &str) -> RemoteResult<()>;

    /// Delete every row matching `filter`.
    async fn delete(&self, table: Table, filter: RowFilter) -> RemoteResult<()>;
}
