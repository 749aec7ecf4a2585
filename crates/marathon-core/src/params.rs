//! Parameter structures for planner operations.
//!
//! These structures are shared by every front end and carry no framework
//! derives beyond serde. The CLI defines its own clap wrappers and converts
//! into these types with `From`, so argument parsing stays out of the core.
//!
//! Input validation happens here rather than in the generator: the generator
//! accepts any number and any date, and it is the caller's job to reject
//! out-of-range mileage or malformed dates before invoking it.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    error::{PlannerError, Result},
    generator::earliest_marathon_date,
};

/// Lowest peak weekly mileage accepted from users.
pub const MIN_PEAK_WEEKLY_MILEAGE: f64 = 20.0;

/// Highest peak weekly mileage accepted from users.
pub const MAX_PEAK_WEEKLY_MILEAGE: f64 = 100.0;

/// Parses an ISO `YYYY-MM-DD` calendar date supplied by a user.
pub fn parse_marathon_date(text: &str) -> Result<Date> {
    text.trim().parse::<Date>().map_err(|e| {
        PlannerError::invalid_input("marathon_date")
            .with_reason(format!("'{text}' is not a valid YYYY-MM-DD date: {e}"))
    })
}

fn validate_user_id(user_id: &str) -> Result<()> {
    if user_id.trim().is_empty() {
        return Err(PlannerError::invalid_input("user_id").with_reason("must not be empty"));
    }
    Ok(())
}

/// Race dates too close to the minimum calendar date cannot hold 18 weeks.
pub(crate) fn validate_marathon_date(marathon_date: Date) -> Result<()> {
    let earliest = earliest_marathon_date();
    if marathon_date < earliest {
        return Err(PlannerError::invalid_input("marathon_date")
            .with_reason(format!("must be on or after {earliest}, got {marathon_date}")));
    }
    Ok(())
}

/// Parameters for generating a new marathon plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateMarathonPlan {
    /// Race day; the plan ends on this date
    pub marathon_date: Date,
    /// Target mileage of the peak week (week 16)
    pub peak_weekly_mileage: f64,
    /// Owner of the new plan
    pub user_id: String,
}

impl CreateMarathonPlan {
    /// Checks the mileage range, the race date and the owner.
    pub fn validate(&self) -> Result<()> {
        let mileage = self.peak_weekly_mileage;
        if !mileage.is_finite()
            || !(MIN_PEAK_WEEKLY_MILEAGE..=MAX_PEAK_WEEKLY_MILEAGE).contains(&mileage)
        {
            return Err(PlannerError::invalid_input("peak_weekly_mileage").with_reason(format!(
                "must be between {MIN_PEAK_WEEKLY_MILEAGE} and {MAX_PEAK_WEEKLY_MILEAGE}, got {mileage}"
            )));
        }
        validate_marathon_date(self.marathon_date)?;
        validate_user_id(&self.user_id)
    }
}

/// Reference to a saved plan on behalf of a user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanRef {
    /// The ID of the plan to operate on
    pub id: Uuid,
    /// User acting on the plan; must be its owner
    pub user_id: String,
}

/// Parameters for listing a user's plans.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListPlans {
    pub user_id: String,
}

/// Parameters for copying a saved plan onto a new race date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DuplicatePlan {
    /// Plan to copy
    pub id: Uuid,
    /// Race day of the copy
    pub marathon_date: Date,
    /// User requesting the copy; must own the source plan
    pub user_id: String,
}

impl DuplicatePlan {
    pub fn validate(&self) -> Result<()> {
        validate_marathon_date(self.marathon_date)?;
        validate_user_id(&self.user_id)
    }
}
