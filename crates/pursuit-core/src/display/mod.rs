//! Display formatting for models, collections and operation results.
//!
//! Domain models implement [`std::fmt::Display`] directly. Collections,
//! operation outcomes and sync failures go through wrapper types so the same
//! data can be framed differently per context. All output is markdown, ready
//! for the CLI's terminal renderer.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │    Wrappers     │    │   Formatted     │
//! │ (Company, Stage)│───▶│ & Result Types  │───▶│    Markdown     │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! - [`collections`]: the company list ([`Companies`])
//! - [`results`]: [`CreateResult`], [`UpdateResult`], [`DeleteResult`]
//! - [`status`]: [`OperationStatus`] and the [`SyncWarnings`] banner
//! - [`dashboard`]: statistics and the seven-day schedule
//! - [`models`]: companies, stages, contacts and enum values
//!
//! # Examples
//!
//! ```rust
//! use pursuit_core::{
//!     display::{CreateResult, OperationStatus},
//!     models::Stage,
//! };
//!
//! let created = CreateResult::new(Stage::pending("2", "HR interview"));
//! assert!(created.to_string().contains("Created stage with ID: 2"));
//!
//! let status = OperationStatus::failure("Deletion cancelled".to_string());
//! assert_eq!(status.to_string(), "Error: Deletion cancelled\n");
//! ```

pub mod collections;
pub mod dashboard;
pub mod models;
pub mod results;
pub mod status;

pub use collections::Companies;
pub use models::Location;
pub use results::{CreateResult, DeleteResult, UpdateResult};
pub use status::{OperationStatus, SyncWarnings};
