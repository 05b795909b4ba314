//! Rolling seven-day schedule of selection stages.

use std::sync::LazyLock;

use jiff::{civil::Date, ToSpan};
use regex::Regex;
use serde::Serialize;

use crate::models::{Company, Stage};

/// Length of the schedule window, today included.
pub const SCHEDULE_DAYS: i64 = 7;

static URL_LOCATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\s*https?://\S+\s*$").unwrap());

/// Whether a stage location is an interview link rather than a place.
pub fn is_url_location(location: &str) -> bool {
    URL_LOCATION.is_match(location)
}

/// Number of stages on one day of the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScheduleDay {
    pub date: Date,
    pub count: usize,
}

/// A pending or scheduled stage inside the window.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpcomingStage {
    pub company_id: String,
    pub company_name: String,
    pub date: Date,
    pub stage: Stage,
    /// The location should be rendered as a clickable link
    pub location_is_url: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Schedule {
    /// One entry per day starting today
    pub days: Vec<ScheduleDay>,
    /// Actionable stages ordered by date, then time
    pub upcoming: Vec<UpcomingStage>,
}

/// Build the schedule for the seven days starting `today`.
///
/// Every dated stage counts towards its day regardless of status; only
/// `pending` and `scheduled` stages are listed as upcoming.
pub fn schedule(companies: &[Company], today: Date) -> Schedule {
    let days: Vec<ScheduleDay> = (0..SCHEDULE_DAYS)
        .map(|offset| ScheduleDay {
            date: today.saturating_add(offset.days()),
            count: 0,
        })
        .collect();
    let last = days.last().map_or(today, |d| d.date);

    let mut schedule = Schedule {
        days,
        upcoming: Vec::new(),
    };
    for company in companies {
        for stage in &company.stages {
            let Some(date) = stage.date.filter(|d| (today..=last).contains(d)) else {
                continue;
            };
            if let Some(day) = schedule.days.iter_mut().find(|d| d.date == date) {
                day.count += 1;
            }
            if stage.status.is_actionable() {
                schedule.upcoming.push(UpcomingStage {
                    company_id: company.id.clone(),
                    company_name: company.name.clone(),
                    date,
                    location_is_url: stage.location.as_deref().is_some_and(is_url_location),
                    stage: stage.clone(),
                });
            }
        }
    }

    schedule
        .upcoming
        .sort_by(|a, b| (a.date, &a.stage.time).cmp(&(b.date, &b.stage.time)));
    schedule
}
