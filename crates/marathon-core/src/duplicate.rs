//! Duplication of an existing plan onto a new race date.

use jiff::{civil::Date, Span};

use crate::{
    context::{Clock, IdGenerator},
    error::{PlannerError, Result},
    models::{Plan, TrainingDay, Week},
    params::validate_marathon_date,
};

/// Copies `source` for a different marathon date.
///
/// Every date moves by the number of days between the old and the new race
/// day, so the copy stays anchored on its own race. The copy gets fresh
/// identifiers, belongs to `user_id`, and starts with no progress: actual
/// mileage, notes and completion are cleared and workout links are dropped
/// so the store creates new workout rows when it is saved. Planned miles and
/// labels are kept as they are.
pub fn duplicate_plan<I, C>(
    source: &Plan,
    new_marathon_date: Date,
    user_id: &str,
    ids: &I,
    clock: &C,
) -> Result<Plan>
where
    I: IdGenerator + ?Sized,
    C: Clock + ?Sized,
{
    validate_marathon_date(new_marathon_date)?;
    let shift = day_shift(source.marathon_date, new_marathon_date)?;
    let plan_id = ids.next_id();

    let weeks = source
        .weeks
        .iter()
        .map(|week| {
            let week_id = ids.next_id();
            Week {
                id: week_id,
                plan_id,
                week_number: week.week_number,
                start_date: week.start_date.saturating_add(shift),
                target_mileage: week.target_mileage,
                actual_mileage: None,
                notes: None,
                training_days: week
                    .training_days
                    .iter()
                    .map(|day| TrainingDay {
                        id: ids.next_id(),
                        week_id,
                        day_of_week: day.day_of_week,
                        date: day.date.saturating_add(shift),
                        miles: day.miles,
                        description: day.description.clone(),
                        workout_id: None,
                        actual_miles: None,
                        actual_notes: None,
                        completed: false,
                        completed_at: None,
                    })
                    .collect(),
            }
        })
        .collect();

    Ok(Plan {
        id: plan_id,
        user_id: user_id.to_string(),
        name: source.name.clone(),
        description: Plan::describe(new_marathon_date),
        marathon_date: new_marathon_date,
        goal_time: source.goal_time.clone(),
        total_weeks: source.total_weeks,
        created_at: clock.now(),
        weeks,
    })
}

fn day_shift(from: Date, to: Date) -> Result<Span> {
    from.until(to).map_err(|e| {
        PlannerError::invalid_input("marathon_date")
            .with_reason(format!("cannot shift plan from {from} to {to}: {e}"))
    })
}
