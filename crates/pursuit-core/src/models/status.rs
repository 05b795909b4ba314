//! Enumerations for companies and selection stages.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Headcount bracket of a company.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum CompanySize {
    Startup,
    Sme,
    #[default]
    Large,
    Megacorp,
}

impl FromStr for CompanySize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "startup" => Ok(CompanySize::Startup),
            "sme" => Ok(CompanySize::Sme),
            "large" => Ok(CompanySize::Large),
            "megacorp" => Ok(CompanySize::Megacorp),
            _ => Err(format!("Invalid company size: {s}")),
        }
    }
}

impl CompanySize {
    /// Convert to the persisted string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            CompanySize::Startup => "startup",
            CompanySize::Sme => "sme",
            CompanySize::Large => "large",
            CompanySize::Megacorp => "megacorp",
        }
    }
}

/// Overall state of one job application.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum CompanyStatus {
    /// Application sent, nothing heard back yet
    #[default]
    Applied,

    /// Selection is under way
    InProgress,

    /// Final round reached
    FinalInterview,

    /// Offer received
    Offer,

    /// Rejected by the company
    Rejected,

    /// Withdrawn by the applicant
    Withdrawn,
}

impl FromStr for CompanyStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "applied" => Ok(CompanyStatus::Applied),
            "in_progress" | "inprogress" | "in-progress" => Ok(CompanyStatus::InProgress),
            "final_interview" | "finalinterview" | "final-interview" => {
                Ok(CompanyStatus::FinalInterview)
            }
            "offer" => Ok(CompanyStatus::Offer),
            "rejected" => Ok(CompanyStatus::Rejected),
            "withdrawn" => Ok(CompanyStatus::Withdrawn),
            _ => Err(format!("Invalid company status: {s}")),
        }
    }
}

impl CompanyStatus {
    /// Convert to the persisted string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            CompanyStatus::Applied => "applied",
            CompanyStatus::InProgress => "in_progress",
            CompanyStatus::FinalInterview => "final_interview",
            CompanyStatus::Offer => "offer",
            CompanyStatus::Rejected => "rejected",
            CompanyStatus::Withdrawn => "withdrawn",
        }
    }

    /// Whether the application still has selection rounds ahead.
    pub fn is_active(&self) -> bool {
        matches!(self, CompanyStatus::InProgress | CompanyStatus::FinalInterview)
    }
}

/// How much the applicant cares about an application.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "high" => Ok(Priority::High),
            "medium" => Ok(Priority::Medium),
            "low" => Ok(Priority::Low),
            _ => Err(format!("Invalid priority: {s}")),
        }
    }
}

impl Priority {
    /// Convert to the persisted string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }

    /// Ordinal weight used when sorting (high=3, medium=2, low=1).
    pub fn weight(&self) -> u8 {
        match self {
            Priority::High => 3,
            Priority::Medium => 2,
            Priority::Low => 1,
        }
    }
}

/// Status of a single selection stage.
///
/// Every status may move to every other status; see
/// [`crate::transition::transition`] for the one side effect.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum StageStatus {
    /// Not scheduled yet
    #[default]
    Pending,

    /// Date and time fixed
    Scheduled,

    /// Cleared this round
    Passed,

    /// Did not clear this round
    Failed,
}

impl FromStr for StageStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Ok(StageStatus::Pending),
            "scheduled" => Ok(StageStatus::Scheduled),
            "passed" => Ok(StageStatus::Passed),
            "failed" => Ok(StageStatus::Failed),
            _ => Err(format!("Invalid stage status: {s}")),
        }
    }
}

impl StageStatus {
    /// Convert to the persisted string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            StageStatus::Pending => "pending",
            StageStatus::Scheduled => "scheduled",
            StageStatus::Passed => "passed",
            StageStatus::Failed => "failed",
        }
    }

    /// `passed` and `failed` close a stage.
    pub fn is_terminal(&self) -> bool {
        matches!(self, StageStatus::Passed | StageStatus::Failed)
    }

    /// `pending` and `scheduled` stages still need the applicant's attention.
    pub fn is_actionable(&self) -> bool {
        !self.is_terminal()
    }

    /// Get status with consistent icon formatting for display.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pursuit_core::models::StageStatus;
    ///
    /// assert_eq!(StageStatus::Passed.with_icon(), "✓ Passed");
    /// assert_eq!(StageStatus::Failed.with_icon(), "✗ Failed");
    /// assert_eq!(StageStatus::Scheduled.with_icon(), "➤ Scheduled");
    /// assert_eq!(StageStatus::Pending.with_icon(), "○ Pending");
    /// ```
    pub fn with_icon(&self) -> &'static str {
        match self {
            StageStatus::Passed => "✓ Passed",
            StageStatus::Failed => "✗ Failed",
            StageStatus::Scheduled => "➤ Scheduled",
            StageStatus::Pending => "○ Pending",
        }
    }
}
