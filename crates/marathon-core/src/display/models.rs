//! Display implementations for domain models.
//!
//! Plans render as a markdown document with one table per week. A week
//! shown on its own uses the same table without the race-day marker.

use std::fmt;

use super::datetime::{LocalDateTime, LongDate};
use crate::models::{Plan, PlanSummary, TrainingDay, Week, WorkoutKind};

/// Label shown in place of the final week's long run.
const RACE_LABEL: &str = "RACE!";

impl fmt::Display for WorkoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Formats a mileage without a trailing `.0` for whole numbers.
pub(crate) fn miles(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}

fn weekday_name(day_of_week: u8) -> &'static str {
    match day_of_week {
        1 => "Mon",
        2 => "Tue",
        3 => "Wed",
        4 => "Thu",
        5 => "Fri",
        6 => "Sat",
        7 => "Sun",
        _ => "?",
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.name)?;
        writeln!(f)?;
        writeln!(f, "{}", self.description)?;
        writeln!(f)?;

        writeln!(f, "- **ID**: {}", self.id)?;
        writeln!(f, "- **Marathon**: {}", LongDate(self.marathon_date))?;
        if let Some(start) = self.start_date() {
            writeln!(f, "- **Starts**: {}", LongDate(start))?;
        }
        writeln!(f, "- **Weeks**: {}", self.total_weeks)?;
        writeln!(f, "- **Peak week**: {} mi", miles(self.peak_mileage()))?;
        writeln!(f, "- **Total**: {} mi", miles(self.total_miles()))?;
        if let Some(goal) = &self.goal_time {
            writeln!(f, "- **Goal time**: {goal}")?;
        }
        writeln!(f, "- **Created**: {}", LocalDateTime(&self.created_at))?;

        for week in &self.weeks {
            writeln!(f)?;
            week.fmt_week(f, week.week_number == self.total_weeks)?;
        }

        Ok(())
    }
}

impl Week {
    /// Writes the week header and its day table. `race_week` swaps the long
    /// run label for the race marker.
    fn fmt_week(&self, f: &mut fmt::Formatter<'_>, race_week: bool) -> fmt::Result {
        writeln!(
            f,
            "## Week {} ({} to {}): {} mi",
            self.week_number,
            self.start_date.strftime("%b %-d"),
            self.end_date().strftime("%b %-d"),
            miles(self.target_mileage)
        )?;
        writeln!(f)?;
        writeln!(f, "| Day | Date | Workout | Miles |")?;
        writeln!(f, "|:-|:-|:-|-:|")?;

        for day in &self.training_days {
            let label = if race_week && day.kind() == Some(WorkoutKind::LongRun) {
                RACE_LABEL
            } else {
                day.description.as_str()
            };
            day.fmt_row(f, label)?;
        }

        if let Some(notes) = &self.notes {
            writeln!(f)?;
            writeln!(f, "{notes}")?;
        }

        Ok(())
    }
}

impl fmt::Display for Week {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_week(f, false)
    }
}

impl TrainingDay {
    fn fmt_row(&self, f: &mut fmt::Formatter<'_>, label: &str) -> fmt::Result {
        let done = if self.completed { " ✓" } else { "" };
        let planned = if self.is_running_day() {
            miles(self.miles)
        } else {
            "-".to_string()
        };
        writeln!(
            f,
            "| {} | {} | {label}{done} | {planned} |",
            weekday_name(self.day_of_week),
            self.date.strftime("%b %-d"),
        )
    }
}

impl fmt::Display for TrainingDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}: {}",
            weekday_name(self.day_of_week),
            self.date,
            self.description
        )?;
        if self.is_running_day() {
            write!(f, " ({} mi)", miles(self.miles))?;
        }
        if self.completed {
            write!(f, " ✓")?;
        }
        Ok(())
    }
}

impl fmt::Display for PlanSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {} (ID: {})", self.name, self.id)?;
        writeln!(f)?;
        writeln!(f, "- **Marathon**: {}", LongDate(self.marathon_date))?;
        writeln!(
            f,
            "- **Length**: {} weeks, peaking at {} mi",
            self.total_weeks,
            miles(self.peak_mileage)
        )?;
        writeln!(f, "- **Created**: {}", LocalDateTime(&self.created_at))?;
        writeln!(f)?;

        Ok(())
    }
}
