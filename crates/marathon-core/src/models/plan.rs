//! Plan model definition and related functionality.

use jiff::{civil::Date, Timestamp};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Week;
use crate::error::Result;

/// Fixed name of every generated plan.
pub const PLAN_NAME: &str = "Marathon Training Plan";

/// Number of weeks in every generated plan.
pub const TOTAL_WEEKS: u32 = 18;

/// A complete marathon training plan, anchored backward from race day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Plan {
    /// Unique identifier for the plan
    pub id: Uuid,

    /// Owner of the plan as supplied by the caller
    pub user_id: String,

    pub name: String,

    /// Human-readable description embedding the marathon date
    pub description: String,

    /// Race day; equals the last day of week 18
    pub marathon_date: Date,

    /// Never set by the generator
    #[serde(default)]
    pub goal_time: Option<String>,

    pub total_weeks: u32,

    /// Timestamp when the plan was generated (UTC)
    pub created_at: Timestamp,

    /// Weeks ordered by week number
    pub weeks: Vec<Week>,
}

impl Plan {
    /// Description text for a plan ending on `marathon_date`.
    pub fn describe(marathon_date: Date) -> String {
        format!(
            "18-week training plan for the marathon on {}",
            marathon_date.strftime("%A, %B %-d, %Y")
        )
    }

    /// Monday of week 1, if the plan has any weeks.
    pub fn start_date(&self) -> Option<Date> {
        self.weeks.first().map(|week| week.start_date)
    }

    /// Week by its 1-based week number.
    pub fn week(&self, week_number: u32) -> Option<&Week> {
        self.weeks
            .iter()
            .find(|week| week.week_number == week_number)
    }

    /// Highest weekly target in the plan, i.e. the peak weekly mileage the
    /// plan was generated from.
    pub fn peak_mileage(&self) -> f64 {
        self.weeks
            .iter()
            .map(|week| week.target_mileage)
            .fold(0.0, f64::max)
    }

    /// Sum of every day's planned miles.
    pub fn total_miles(&self) -> f64 {
        self.weeks.iter().map(Week::total_miles).sum()
    }

    /// Serializes the full plan tree as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
