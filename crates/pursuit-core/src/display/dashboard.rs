//! Display implementations for the dashboard views: statistics and the
//! seven-day schedule.

use std::fmt;

use super::models::Location;
use crate::view::{Schedule, Statistics};

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Statistics")?;
        writeln!(f)?;
        writeln!(f, "- Total: {}", self.total)?;
        writeln!(f, "- In progress: {}", self.in_progress)?;
        writeln!(f, "- Offers: {}", self.offers)?;
        writeln!(f, "- Rejected: {}", self.rejected)?;
        writeln!(f, "- Average rating: {:.1}", self.average_rating)
    }
}

impl fmt::Display for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Schedule")?;
        writeln!(f)?;
        writeln!(f, "| Date | Day | Stages |")?;
        writeln!(f, "|:-|:-|-:|")?;
        for day in &self.days {
            writeln!(
                f,
                "| {} | {} | {} |",
                day.date,
                day.date.strftime("%a"),
                day.count
            )?;
        }

        writeln!(f)?;
        if self.upcoming.is_empty() {
            return writeln!(f, "No upcoming stages.");
        }

        writeln!(f, "## Upcoming")?;
        writeln!(f)?;
        for item in &self.upcoming {
            write!(f, "- {}", item.date)?;
            if let Some(time) = &item.stage.time {
                write!(f, " {time}")?;
            }
            write!(
                f,
                " **{}**: {} ({})",
                item.company_name,
                item.stage.name,
                item.stage.status.with_icon()
            )?;
            if let Some(location) = &item.stage.location {
                write!(f, " @ {}", Location(location))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;
    use crate::{
        models::{Stage, StageStatus},
        view::{ScheduleDay, UpcomingStage},
    };

    #[test]
    fn test_statistics_display() {
        let stats = Statistics {
            total: 5,
            in_progress: 2,
            offers: 1,
            rejected: 1,
            average_rating: 4.7,
        };
        let output = stats.to_string();
        assert!(output.contains("- Total: 5"));
        assert!(output.contains("- Average rating: 4.7"));
    }

    #[test]
    fn test_schedule_display() {
        let mut stage = Stage::pending("5", "Technical interview");
        stage.status = StageStatus::Scheduled;
        stage.time = Some("10:00".to_string());
        stage.location = Some("https://meet.example.com/abc".to_string());

        let schedule = Schedule {
            days: vec![ScheduleDay {
                date: date(2024, 6, 3),
                count: 1,
            }],
            upcoming: vec![UpcomingStage {
                company_id: "1".to_string(),
                company_name: "Acme".to_string(),
                date: date(2024, 6, 3),
                stage,
                location_is_url: true,
            }],
        };

        let output = schedule.to_string();
        assert!(output.contains("| 2024-06-03 | Mon | 1 |"));
        assert!(output.contains("- 2024-06-03 10:00 **Acme**: Technical interview (➤ Scheduled)"));
        assert!(output.contains("[https://meet.example.com/abc](https://meet.example.com/abc)"));
    }

    #[test]
    fn test_empty_schedule() {
        let schedule = Schedule {
            days: vec![],
            upcoming: vec![],
        };
        assert!(schedule.to_string().contains("No upcoming stages."));
    }
}
