//! Data models for marathon training plans.
//!
//! A [`Plan`] exclusively owns its eighteen [`Week`]s and every week owns its
//! seven [`TrainingDay`]s. The whole tree is produced at once by the
//! generator and handed to the store as a single value; Display
//! implementations live in [`crate::display::models`].

mod day;
mod kind;
mod plan;
mod summary;
mod week;

#[cfg(test)]
mod tests;

pub use day::TrainingDay;
pub use kind::WorkoutKind;
pub use plan::{Plan, PLAN_NAME, TOTAL_WEEKS};
pub use summary::PlanSummary;
pub use week::{Week, DAYS_PER_WEEK};
