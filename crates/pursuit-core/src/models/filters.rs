//! Filter and sort options for querying the company list.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{CompanyStatus, Priority};

/// Filter and ordering options for the company list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompanyQuery {
    /// Case-insensitive substring matched against name, industry, job title
    /// and tags
    #[serde(default)]
    pub text: String,

    /// Only companies in this status; `None` means all
    pub status: Option<CompanyStatus>,

    /// Only companies with this priority; `None` means all
    pub priority: Option<Priority>,

    #[serde(default)]
    pub sort: SortKey,

    #[serde(default)]
    pub order: SortOrder,
}

/// Key the company list is ordered by.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    Name,
    #[default]
    AppliedDate,
    Priority,
    Status,
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "name" => Ok(SortKey::Name),
            "date" | "applied_date" | "applieddate" => Ok(SortKey::AppliedDate),
            "priority" => Ok(SortKey::Priority),
            "status" => Ok(SortKey::Status),
            _ => Err(format!("Invalid sort key: {s}")),
        }
    }
}

/// Direction of the ordering.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortOrder::Asc),
            "desc" | "descending" => Ok(SortOrder::Desc),
            _ => Err(format!("Invalid sort order: {s}")),
        }
    }
}

/// Parse a filter value where `all` means no filter.
///
/// ```rust
/// use pursuit_core::models::{filters::parse_filter, Priority};
///
/// assert_eq!(parse_filter::<Priority>("all"), Ok(None));
/// assert_eq!(parse_filter::<Priority>("HIGH"), Ok(Some(Priority::High)));
/// assert!(parse_filter::<Priority>("urgent").is_err());
/// ```
pub fn parse_filter<T: FromStr<Err = String>>(value: &str) -> Result<Option<T>, String> {
    if value.trim().eq_ignore_ascii_case("all") {
        Ok(None)
    } else {
        value.parse().map(Some)
    }
}
