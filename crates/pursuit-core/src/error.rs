//! Error types for the tracking core.

use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all tracker operations.
///
/// Remote store failures raised while syncing a mutation are not surfaced
/// through this type; they degrade to [`crate::tracker::SyncWarning`]s.
#[derive(Error, Debug)]
pub enum TrackerError {
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// Company not found for the given ID
    #[error("Company with ID {id} not found")]
    CompanyNotFound { id: String },
    /// Stage not found for the given ID
    #[error("Stage with ID {id} not found in company {company_id}")]
    StageNotFound { company_id: String, id: String },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG base directory errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Remote store errors outside of optimistic sync (e.g. initial load)
    #[error(transparent)]
    Remote(#[from] RemoteError),
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Errors reported by a [`crate::remote::RemoteStore`] implementation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RemoteError {
    /// The store could not be reached or the call did not complete
    #[error("Remote store unavailable: {0}")]
    Unavailable(String),
    /// The store refused the request
    #[error("Remote store rejected {table} request: {message}")]
    Rejected { table: String, message: String },
    /// A returned row could not be interpreted
    #[error("Malformed row in {table}: {message}")]
    Malformed { table: String, message: String },
}

/// Result type alias for remote store calls
pub type RemoteResult<T> = std::result::Result<T, RemoteError>;

/// Builder for creating database errors with optional context.
pub struct DatabaseErrorBuilder {
    message: String,
}

impl DatabaseErrorBuilder {
    /// Create a new database error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: rusqlite::Error) -> TrackerError {
        TrackerError::Database {
            message: self.message,
            source,
        }
    }
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> TrackerError {
        TrackerError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl TrackerError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates a company-not-found error.
    pub fn company_not_found(id: impl Into<String>) -> Self {
        Self::CompanyNotFound { id: id.into() }
    }

    /// Creates a stage-not-found error.
    pub fn stage_not_found(company_id: impl Into<String>, id: impl Into<String>) -> Self {
        Self::StageNotFound {
            company_id: company_id.into(),
            id: id.into(),
        }
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| TrackerError::database(message).with_source(e))
    }
}

impl From<TrackerError> for RemoteError {
    /// Any failure of the local database counts as the store being
    /// unavailable.
    fn from(err: TrackerError) -> Self {
        RemoteError::Unavailable(err.to_string())
    }
}

/// Result type alias for tracker operations
pub type Result<T> = std::result::Result<T, TrackerError>;
