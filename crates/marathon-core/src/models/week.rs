//! Week model definition.

use jiff::{civil::Date, ToSpan};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{TrainingDay, WorkoutKind};

/// Number of training days in every week.
pub const DAYS_PER_WEEK: usize = 7;

/// One week of the plan with its seven training days.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Week {
    /// Unique identifier for the week
    pub id: Uuid,

    /// ID of the owning plan
    pub plan_id: Uuid,

    /// Position in the periodization, 1 through 18
    pub week_number: u32,

    /// Monday of the week
    pub start_date: Date,

    /// Planned total distance for the week
    pub target_mileage: f64,

    #[serde(default)]
    pub actual_mileage: Option<f64>,

    #[serde(default)]
    pub notes: Option<String>,

    /// Days ordered Monday through Sunday
    pub training_days: Vec<TrainingDay>,
}

impl Week {
    /// Sum of the planned miles of every day. May differ from
    /// `target_mileage` by a mile or two after rounding.
    pub fn total_miles(&self) -> f64 {
        self.training_days.iter().map(|day| day.miles).sum()
    }

    /// Planned distance of the week's long run, if the week has one.
    pub fn long_run(&self) -> Option<f64> {
        self.training_days
            .iter()
            .find(|day| day.kind() == Some(WorkoutKind::LongRun))
            .map(|day| day.miles)
    }

    /// Day by its day-of-week number, 1 (Monday) through 7 (Sunday).
    pub fn day(&self, day_of_week: u8) -> Option<&TrainingDay> {
        self.training_days
            .iter()
            .find(|day| day.day_of_week == day_of_week)
    }

    /// Last calendar day of the week.
    pub fn end_date(&self) -> Date {
        self.start_date.saturating_add(6.days())
    }
}
