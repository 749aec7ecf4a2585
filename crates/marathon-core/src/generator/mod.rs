//! Marathon plan generation.
//!
//! Given a race date and a target peak weekly mileage, the generator builds
//! an 18-week periodized schedule top-down: plan, then weeks, then days.
//!
//! ```text
//! weeks  1-15  build: 50% -> 95% of peak, 3-week wave, long run steps back every 4th week
//! week     16  peak:  full peak mileage, 20 or 22 mile long run
//! weeks 17-18  taper: 75% and 40% of peak
//! ```
//!
//! Generation is pure. It does no I/O and no validation: a zero or negative
//! mileage yields a well-typed but meaningless plan, so callers are expected
//! to validate input first (see [`crate::params::CreateMarathonPlan`]).
//! Identifiers and the creation timestamp come from the injected
//! [`IdGenerator`] and [`Clock`].
//!
//! # Examples
//!
//! ```rust
//! use jiff::civil::date;
//! use marathon_core::generator::create_marathon_plan;
//!
//! let plan = create_marathon_plan(date(2024, 10, 15), 50.0, "user-123");
//! assert_eq!(plan.weeks.len(), 18);
//! assert_eq!(plan.weeks[17].end_date(), date(2024, 10, 15));
//! ```

use jiff::{civil::Date, ToSpan};
use uuid::Uuid;

use crate::{
    context::{Clock, IdGenerator, SystemClock, UuidGenerator},
    models::{Plan, TrainingDay, Week, WorkoutKind, PLAN_NAME, TOTAL_WEEKS},
};

pub mod allocation;
pub mod mileage;


pub use allocation::allocate_week;
pub use mileage::{long_run_miles, peak_long_run, round_half_up, weekly_target_mileage};

/// Days from the Monday of week 1 to race day, the last day of week 18.
pub const PLAN_SPAN_DAYS: i64 = TOTAL_WEEKS as i64 * 7 - 1;

/// Earliest race date whose week 1 still falls on a representable date.
pub fn earliest_marathon_date() -> Date {
    Date::MIN.saturating_add(PLAN_SPAN_DAYS.days())
}

/// Builds training plans using injected identifier and time sources.
#[derive(Debug, Clone, Default)]
pub struct PlanGenerator<I = UuidGenerator, C = SystemClock> {
    ids: I,
    clock: C,
}

impl PlanGenerator {
    /// Creates a generator with random UUIDs and the system clock.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<I: IdGenerator, C: Clock> PlanGenerator<I, C> {
    /// Creates a generator with custom identifier and time sources.
    pub fn with_sources(ids: I, clock: C) -> Self {
        Self { ids, clock }
    }

    /// Access to the identifier source, shared with plan duplication.
    pub fn ids(&self) -> &I {
        &self.ids
    }

    /// Access to the clock, shared with plan duplication.
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Synthesizes a complete 18-week plan ending on `marathon_date`.
    ///
    /// Deterministic apart from identifiers and the creation timestamp.
    /// Race dates before [`earliest_marathon_date`] pin week 1 to
    /// [`Date::MIN`], so the last week no longer ends on race day; the
    /// planner rejects such dates before calling this.
    pub fn create_marathon_plan(
        &self,
        marathon_date: Date,
        peak_weekly_mileage: f64,
        user_id: &str,
    ) -> Plan {
        let plan_id = self.ids.next_id();
        let plan_start = marathon_date.saturating_sub(PLAN_SPAN_DAYS.days());

        let weeks = (1..=TOTAL_WEEKS)
            .map(|week_number| {
                self.build_week(plan_id, plan_start, week_number, peak_weekly_mileage)
            })
            .collect();

        Plan {
            id: plan_id,
            user_id: user_id.to_string(),
            name: PLAN_NAME.to_string(),
            description: Plan::describe(marathon_date),
            marathon_date,
            goal_time: None,
            total_weeks: TOTAL_WEEKS,
            created_at: self.clock.now(),
            weeks,
        }
    }

    fn build_week(
        &self,
        plan_id: Uuid,
        plan_start: Date,
        week_number: u32,
        peak_weekly_mileage: f64,
    ) -> Week {
        let week_id = self.ids.next_id();
        let start_date = plan_start.saturating_add((i64::from(week_number - 1) * 7).days());
        let target_mileage = weekly_target_mileage(week_number, peak_weekly_mileage);
        let long_run = long_run_miles(week_number, peak_weekly_mileage);

        let training_days = allocate_week(target_mileage, long_run)
            .into_iter()
            .zip(1u8..)
            .map(|(miles, day_of_week)| TrainingDay {
                id: self.ids.next_id(),
                week_id,
                day_of_week,
                date: start_date.saturating_add(i64::from(day_of_week - 1).days()),
                miles,
                description: WorkoutKind::for_day_of_week(day_of_week)
                    .unwrap_or(WorkoutKind::Rest)
                    .as_str()
                    .to_string(),
                workout_id: None,
                actual_miles: None,
                actual_notes: None,
                completed: false,
                completed_at: None,
            })
            .collect();

        Week {
            id: week_id,
            plan_id,
            week_number,
            start_date,
            target_mileage,
            actual_mileage: None,
            notes: None,
            training_days,
        }
    }
}

/// Generates a plan with random identifiers and the current time.
pub fn create_marathon_plan(marathon_date: Date, peak_weekly_mileage: f64, user_id: &str) -> Plan {
    PlanGenerator::new().create_marathon_plan(marathon_date, peak_weekly_mileage, user_id)
}
