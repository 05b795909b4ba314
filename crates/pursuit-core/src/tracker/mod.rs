//! The tracking store: the in-memory company list and every mutation of it.
//!
//! # Synchronization policy
//!
//! Every mutation is local-first. The in-memory list is updated as part of
//! the call, and the corresponding [`RemoteStore`] call is then attempted. A
//! remote failure is logged and returned as a [`SyncWarning`] inside
//! [`Synced`]; the local change is never rolled back. Local and remote state
//! may therefore diverge until a later successful write or a fresh
//! [`Tracker::load_all`].
//!
//! Only validation failures and unknown ids are errors. They are reported
//! before any state changes and before any remote call.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Presentation   │    │    Tracker      │    │  RemoteStore    │
//! │  (CLI, forms)   │───▶│ 1. validate     │    │                 │
//! │                 │    │ 2. mutate local │───▶│ 3. insert/update│
//! │                 │◀───│ 4. Synced<T>    │◀───│    /delete      │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! The tracker takes `&mut self` for every mutation, so one instance per
//! session is the single writer and needs no locks.

use std::{fmt, sync::Arc};

use jiff::{civil::Date, Timestamp};
use log::warn;

use crate::{
    credentials::CredentialCodec,
    error::{RemoteError, Result, TrackerError},
    models::Company,
    remote::{RemoteStore, Table},
};

pub mod builder;
pub mod clock;
pub mod company_ops;
pub mod stage_ops;

pub use builder::TrackerBuilder;
pub use clock::{Clock, FixedClock, SystemClock};

/// A remote call that failed while syncing a local mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncWarning {
    /// What was being synced, e.g. "delete company stages"
    pub operation: &'static str,
    pub table: Table,
    pub error: RemoteError,
}

impl fmt::Display for SyncWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "could not {} ({}): {}", self.operation, self.table, self.error)
    }
}

/// The result of a mutation: the locally applied value plus any remote
/// failures met while syncing it.
#[derive(Debug, Clone)]
pub struct Synced<T> {
    pub value: T,
    pub warnings: Vec<SyncWarning>,
}

impl<T> Synced<T> {
    fn new(value: T, warnings: Vec<SyncWarning>) -> Self {
        Self { value, warnings }
    }

    /// Whether every remote call succeeded.
    pub fn is_synced(&self) -> bool {
        self.warnings.is_empty()
    }
}

/// Single authoritative in-memory list of companies.
pub struct Tracker {
    pub(crate) remote: Arc<dyn RemoteStore>,
    pub(crate) codec: Arc<dyn CredentialCodec>,
    pub(crate) clock: Arc<dyn Clock>,
    pub(crate) user_id: String,
    pub(crate) companies: Vec<Company>,
    pub(crate) load_error: Option<String>,
    local_seq: u64,
}

impl Tracker {
    pub(crate) fn new(
        remote: Arc<dyn RemoteStore>,
        codec: Arc<dyn CredentialCodec>,
        clock: Arc<dyn Clock>,
        user_id: String,
    ) -> Self {
        Self {
            remote,
            codec,
            clock,
            user_id,
            companies: Vec::new(),
            load_error: None,
            local_seq: 0,
        }
    }

    /// All companies in insertion order.
    pub fn companies(&self) -> &[Company] {
        &self.companies
    }

    pub fn company(&self, id: &str) -> Option<&Company> {
        self.companies.iter().find(|c| c.id == id)
    }

    /// The error from the last failed [`Tracker::load_all`], cleared by the
    /// next successful one.
    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn today(&self) -> Date {
        self.clock.today()
    }

    /// Id for a record whose remote insert did not return one.
    pub(crate) fn next_local_id(&mut self) -> String {
        self.local_seq += 1;
        format!(
            "local-{}-{}",
            Timestamp::now().as_millisecond(),
            self.local_seq
        )
    }

    pub(crate) fn company_index(&self, id: &str) -> Result<usize> {
        self.companies
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| TrackerError::company_not_found(id))
    }
}

/// Keep the success value of a remote call, or log the failure and turn it
/// into a warning.
pub(crate) fn record<T>(
    result: std::result::Result<T, RemoteError>,
    operation: &'static str,
    table: Table,
    warnings: &mut Vec<SyncWarning>,
) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(error) => {
            warn!("Failed to {operation} ({table}), keeping local change: {error}");
            warnings.push(SyncWarning {
                operation,
                table,
                error,
            });
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_collects_failures() {
        let mut warnings = Vec::new();
        assert_eq!(
            record(Ok::<_, RemoteError>(3), "add stage", Table::Stages, &mut warnings),
            Some(3)
        );
        assert!(warnings.is_empty());

        let failed: std::result::Result<(), _> =
            Err(RemoteError::Unavailable("offline".to_string()));
        assert_eq!(record(failed, "delete stage", Table::Stages, &mut warnings), None);
        assert_eq!(warnings.len(), 1);
        assert_eq!(
            warnings[0].to_string(),
            "could not delete stage (stages): Remote store unavailable: offline"
        );
    }
}
