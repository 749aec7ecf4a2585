//! Workout classification for training days.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of the fixed workout labels.
///
/// The day-of-week mapping is the same in every week of a plan, race week
/// included: Saturday of week 18 is still a [`WorkoutKind::LongRun`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum WorkoutKind {
    /// Monday, Wednesday and Friday
    #[serde(rename = "Easy Run")]
    EasyRun,

    /// Tuesday and Thursday
    #[serde(rename = "Workout")]
    Workout,

    /// Saturday
    #[serde(rename = "Long Run")]
    LongRun,

    /// Sunday, always zero miles
    #[serde(rename = "Rest")]
    Rest,
}

impl FromStr for WorkoutKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Easy Run" => Ok(WorkoutKind::EasyRun),
            "Workout" => Ok(WorkoutKind::Workout),
            "Long Run" => Ok(WorkoutKind::LongRun),
            "Rest" => Ok(WorkoutKind::Rest),
            _ => Err(format!("Invalid workout label: {s}")),
        }
    }
}

impl WorkoutKind {
    /// The label stored in a day's `description`.
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkoutKind::EasyRun => "Easy Run",
            WorkoutKind::Workout => "Workout",
            WorkoutKind::LongRun => "Long Run",
            WorkoutKind::Rest => "Rest",
        }
    }

    /// Classification for a day of the week, 1 (Monday) through 7 (Sunday).
    ///
    /// Returns `None` outside that range.
    pub fn for_day_of_week(day_of_week: u8) -> Option<Self> {
        match day_of_week {
            1 | 3 | 5 => Some(WorkoutKind::EasyRun),
            2 | 4 => Some(WorkoutKind::Workout),
            6 => Some(WorkoutKind::LongRun),
            7 => Some(WorkoutKind::Rest),
            _ => None,
        }
    }

    /// Whether days of this kind are quality sessions. Stored alongside the
    /// workout rows the store creates for each running day.
    pub fn is_workout(&self) -> bool {
        matches!(self, WorkoutKind::Workout)
    }
}
