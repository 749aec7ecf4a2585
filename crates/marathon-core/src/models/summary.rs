//! Plan summary types and functionality.

use jiff::{civil::Date, Timestamp};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Plan;

/// Summary information about a saved plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlanSummary {
    /// Plan ID
    pub id: Uuid,
    /// Owner of the plan
    pub user_id: String,
    /// Name of the plan
    pub name: String,
    /// Race day
    pub marathon_date: Date,
    /// Number of weeks in the plan
    pub total_weeks: u32,
    /// Highest weekly target mileage
    pub peak_mileage: f64,
    /// Creation timestamp
    pub created_at: Timestamp,
}

impl From<&Plan> for PlanSummary {
    fn from(plan: &Plan) -> Self {
        Self {
            id: plan.id,
            user_id: plan.user_id.clone(),
            name: plan.name.clone(),
            marathon_date: plan.marathon_date,
            total_weeks: plan.total_weeks,
            peak_mileage: plan.peak_mileage(),
            created_at: plan.created_at,
        }
    }
}
