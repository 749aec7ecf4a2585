//! Persistence boundary for generated plans.
//!
//! The generator hands a finished [`Plan`] tree to a [`PlanStore`]; the
//! store owns atomicity, workout bookkeeping, and retrieval. [`Database`]
//! is the SQLite implementation.
//!
//! [`Database`]: crate::db::Database

use uuid::Uuid;

use crate::{
    error::Result,
    models::{Plan, PlanSummary},
};

/// Storage for complete plan trees.
pub trait PlanStore {
    /// Saves a plan with all of its weeks and days, all or nothing.
    ///
    /// One workout record is created for every day with non-zero miles and
    /// linked from that day.
    fn save_plan(&mut self, plan: &Plan) -> Result<PlanSummary>;

    /// Loads a saved plan back into the same tree shape, or `None` if no
    /// plan has that ID.
    fn get_full_plan(&self, id: Uuid) -> Result<Option<Plan>>;

    /// Summaries of every plan owned by `user_id`, latest race first.
    fn list_plans(&self, user_id: &str) -> Result<Vec<PlanSummary>>;

    /// Removes a plan, its weeks, days and workout records.
    fn delete_plan(&mut self, id: Uuid) -> Result<()>;
}
