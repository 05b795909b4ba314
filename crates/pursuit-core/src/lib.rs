//! Core library for the Pursuit job-application tracker.
//!
//! This crate holds the domain model (companies, selection stages and
//! contacts), the local-first [`Tracker`] that mutates it and syncs each
//! change to a [`remote::RemoteStore`], and the pure views computed over it
//! (filtering, sorting, statistics and the seven-day schedule).
//!
//! # Layout
//!
//! - [`models`]: domain types and their enums
//! - [`params`]: input forms for mutations
//! - [`credentials`]: the credential side-channel in the tag list
//! - [`transition`]: stage status transitions and completion stamping
//! - [`remote`]: the persistence port, row mapping and the SQLite adapter
//! - [`tracker`]: the tracking store
//! - [`view`]: derived views
//! - [`display`]: markdown formatting for terminal output
//!
//! # Quick Start
//!
//! ```rust
//! use pursuit_core::{params::CompanyForm, TrackerBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut tracker = TrackerBuilder::new()
//!     .with_database_path(Some("pursuit.db"))
//!     .build()
//!     .await?;
//! tracker.load_all().await?;
//!
//! let form = CompanyForm {
//!     name: "Acme".to_string(),
//!     job_title: "Backend Engineer".to_string(),
//!     ..Default::default()
//! };
//! let added = tracker.add_company(&form).await?;
//! if !added.is_synced() {
//!     eprintln!("Saved locally only");
//! }
//! println!("{}", added.value);
//!
//! let stats = pursuit_core::view::statistics(tracker.companies());
//! println!("{}", stats);
//! # Ok(())
//! # }
//! ```

pub mod credentials;
pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod remote;
pub mod tracker;
pub mod transition;
pub mod view;

// Re-export commonly used types
pub use credentials::{CredentialCodec, Credentials, TagPrefixCodec};
pub use display::{
    Companies, CreateResult, DeleteResult, OperationStatus, SyncWarnings, UpdateResult,
};
pub use error::{RemoteError, Result, TrackerError};
pub use models::{
    Company, CompanyQuery, CompanySize, CompanyStatus, Contact, JobDetails, Priority, Rating,
    SortKey, SortOrder, Stage, StageStatus,
};
pub use params::{CompanyForm, StageForm};
pub use remote::{RemoteStore, SqliteStore};
pub use tracker::{SyncWarning, Synced, Tracker, TrackerBuilder};
