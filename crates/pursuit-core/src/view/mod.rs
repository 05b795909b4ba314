//! Derived views over the tracker's company list.
//!
//! Everything here is a pure function of a company slice (and, for the
//! schedule, a date). Nothing is persisted.
//!
//! - [`filter`]: text, status and priority predicates
//! - [`sort`]: name, applied date, priority and status ordering
//! - [`stats`]: totals and the average rating
//! - [`schedule`]: stage counts and upcoming stages for the next seven days

pub mod filter;
pub mod schedule;
pub mod sort;
pub mod stats;

pub use filter::filter_companies;
pub use schedule::{is_url_location, schedule, Schedule, ScheduleDay, UpcomingStage};
pub use sort::sort_companies;
pub use stats::{statistics, Statistics};

use crate::models::{Company, CompanyQuery};

/// Filter then sort, as shown in the company list.
pub fn query<'a>(companies: &'a [Company], query: &CompanyQuery) -> Vec<&'a Company> {
    let mut selected = filter_companies(companies, query);
    sort_companies(&mut selected, query.sort, query.order);
    selected
}
