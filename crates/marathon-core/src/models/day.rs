//! Training day model definition.

use jiff::{civil::Date, Timestamp};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::WorkoutKind;

/// A single planned day within a week.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrainingDay {
    /// Unique identifier for the day
    pub id: Uuid,

    /// ID of the owning week
    pub week_id: Uuid,

    /// 1 (Monday) through 7 (Sunday)
    pub day_of_week: u8,

    /// Calendar date, `week.start_date + (day_of_week - 1)` days
    pub date: Date,

    /// Planned distance
    pub miles: f64,

    /// One of the fixed workout labels ("Easy Run", "Workout", ...)
    pub description: String,

    /// Linked workout record, assigned by the store when the plan is saved
    pub workout_id: Option<Uuid>,

    #[serde(default)]
    pub actual_miles: Option<f64>,

    #[serde(default)]
    pub actual_notes: Option<String>,

    #[serde(default)]
    pub completed: bool,

    #[serde(default)]
    pub completed_at: Option<Timestamp>,
}

impl TrainingDay {
    /// Parses the stored label back into a [`WorkoutKind`].
    pub fn kind(&self) -> Option<WorkoutKind> {
        self.description.parse().ok()
    }

    /// Whether the day has any running planned.
    pub fn is_running_day(&self) -> bool {
        self.miles != 0.0
    }
}
