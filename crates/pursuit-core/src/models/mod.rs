//! Data models for companies, selection stages and contacts.
//!
//! A [`Company`] is the root aggregate: it owns its ordered [`Stage`]s and its
//! [`Contact`]s, and nothing is shared between companies. Display
//! implementations live in [`crate::display::models`]; persisted row mapping
//! lives in [`crate::remote::rows`].
//!
//! # Examples
//!
//! ```rust
//! use jiff::civil::date;
//! use pursuit_core::models::{Stage, StageStatus};
//!
//! let entry = Stage::entry("1", date(2024, 4, 1));
//! assert_eq!(entry.name, "Entry");
//! assert_eq!(entry.status, StageStatus::Passed);
//! println!("{}", entry); // Shows ✓ Passed status icon
//! ```

pub mod company;
pub mod contact;
pub mod filters;
pub mod rating;
pub mod stage;
pub mod status;

pub use company::{Company, JobDetails};
pub use contact::Contact;
pub use filters::{CompanyQuery, SortKey, SortOrder};
pub use rating::Rating;
pub use stage::{Stage, ENTRY_STAGE_NAME};
pub use status::{CompanySize, CompanyStatus, Priority, StageStatus};
