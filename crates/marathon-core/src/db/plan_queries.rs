//! Plan tree persistence and queries.

use log::debug;
use rusqlite::{params, OptionalExtension, Row, Transaction};
use uuid::Uuid;

use super::utils::{parse_column, parse_optional_column};
use crate::{
    error::{DatabaseResultExt, PlannerError, Result},
    models::{Plan, PlanSummary, TrainingDay, Week, WorkoutKind},
    store::PlanStore,
};

const INSERT_PLAN_SQL: &str = "INSERT INTO plans (id, user_id, name, description, marathon_date, goal_time, total_weeks, created_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)";
const INSERT_WEEK_SQL: &str = "INSERT INTO weeks (id, plan_id, week_number, start_date, target_mileage, actual_mileage, notes) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)";
const INSERT_WORKOUT_SQL: &str = "INSERT INTO workouts (id, miles, description, is_workout, created_at) VALUES (?1, ?2, ?3, ?4, ?5)";
const INSERT_DAY_SQL: &str = "INSERT INTO training_days (id, week_id, day_of_week, date, miles, description, workout_id, actual_miles, actual_notes, completed, completed_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)";

const SELECT_PLAN_SQL: &str = "SELECT id, user_id, name, description, marathon_date, goal_time, total_weeks, created_at FROM plans WHERE id = ?1";
const SELECT_WEEKS_SQL: &str = "SELECT id, plan_id, week_number, start_date, target_mileage, actual_mileage, notes FROM weeks WHERE plan_id = ?1 ORDER BY week_number";
const SELECT_DAYS_SQL: &str = "SELECT id, week_id, day_of_week, date, miles, description, workout_id, actual_miles, actual_notes, completed, completed_at FROM training_days WHERE week_id = ?1 ORDER BY day_of_week";
const SELECT_SUMMARIES_SQL: &str = "SELECT id, user_id, name, marathon_date, total_weeks, peak_mileage, created_at FROM plan_summaries WHERE user_id = ?1 ORDER BY marathon_date DESC, created_at DESC";

const DELETE_PLAN_WORKOUTS_SQL: &str = "DELETE FROM workouts WHERE id IN (SELECT d.workout_id FROM training_days d JOIN weeks w ON d.week_id = w.id WHERE w.plan_id = ?1)";
const DELETE_PLAN_SQL: &str = "DELETE FROM plans WHERE id = ?1";

impl super::Database {
    /// Writes the plan row, its weeks and days, and a workout row for every
    /// running day inside one transaction.
    pub fn save_plan(&mut self, plan: &Plan) -> Result<PlanSummary> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        tx.execute(
            INSERT_PLAN_SQL,
            params![
                plan.id.to_string(),
                plan.user_id,
                plan.name,
                plan.description,
                plan.marathon_date.to_string(),
                plan.goal_time,
                plan.total_weeks,
                plan.created_at.to_string(),
            ],
        )
        .db_context("Failed to insert plan")?;

        let mut workouts = 0usize;
        for week in &plan.weeks {
            workouts += Self::insert_week(&tx, plan, week)?;
        }

        tx.commit().db_context("Failed to commit transaction")?;

        debug!(
            "Saved plan {} with {} weeks and {} workouts",
            plan.id,
            plan.weeks.len(),
            workouts
        );

        Ok(PlanSummary::from(plan))
    }

    /// Inserts one week with its days. Returns the number of workout rows
    /// created.
    fn insert_week(tx: &Transaction<'_>, plan: &Plan, week: &Week) -> Result<usize> {
        tx.execute(
            INSERT_WEEK_SQL,
            params![
                week.id.to_string(),
                plan.id.to_string(),
                week.week_number,
                week.start_date.to_string(),
                week.target_mileage,
                week.actual_mileage,
                week.notes,
            ],
        )
        .db_context("Failed to insert week")?;

        let mut workouts = 0usize;
        for day in &week.training_days {
            let workout_id = if day.is_running_day() {
                let id = Uuid::new_v4();
                let is_workout = day.kind().is_some_and(|kind| kind.is_workout());
                tx.execute(
                    INSERT_WORKOUT_SQL,
                    params![
                        id.to_string(),
                        day.miles,
                        day.description,
                        is_workout,
                        plan.created_at.to_string(),
                    ],
                )
                .db_context("Failed to insert workout")?;
                workouts += 1;
                Some(id)
            } else {
                None
            };

            tx.execute(
                INSERT_DAY_SQL,
                params![
                    day.id.to_string(),
                    week.id.to_string(),
                    day.day_of_week,
                    day.date.to_string(),
                    day.miles,
                    day.description,
                    workout_id.map(|id| id.to_string()),
                    day.actual_miles,
                    day.actual_notes,
                    day.completed,
                    day.completed_at.map(|at| at.to_string()),
                ],
            )
            .db_context("Failed to insert training day")?;
        }

        Ok(workouts)
    }

    /// Retrieves a plan with all weeks and days by its ID.
    pub fn get_full_plan(&self, id: Uuid) -> Result<Option<Plan>> {
        let plan = self
            .connection
            .query_row(SELECT_PLAN_SQL, params![id.to_string()], Self::plan_from_row)
            .optional()
            .db_context("Failed to query plan")?;

        let Some(mut plan) = plan else {
            return Ok(None);
        };

        plan.weeks = self.get_weeks(plan.id)?;
        Ok(Some(plan))
    }

    fn get_weeks(&self, plan_id: Uuid) -> Result<Vec<Week>> {
        let mut week_stmt = self
            .connection
            .prepare(SELECT_WEEKS_SQL)
            .db_context("Failed to prepare week query")?;
        let mut day_stmt = self
            .connection
            .prepare(SELECT_DAYS_SQL)
            .db_context("Failed to prepare training day query")?;

        let mut weeks = week_stmt
            .query_map(params![plan_id.to_string()], Self::week_from_row)
            .db_context("Failed to query weeks")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch weeks")?;

        for week in &mut weeks {
            week.training_days = day_stmt
                .query_map(params![week.id.to_string()], Self::day_from_row)
                .db_context("Failed to query training days")?
                .collect::<std::result::Result<Vec<_>, _>>()
                .db_context("Failed to fetch training days")?;
        }

        Ok(weeks)
    }

    /// Lists summaries of the plans owned by a user.
    pub fn list_plans(&self, user_id: &str) -> Result<Vec<PlanSummary>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_SUMMARIES_SQL)
            .db_context("Failed to prepare query")?;

        let summaries = stmt
            .query_map(params![user_id], |row| {
                Ok(PlanSummary {
                    id: parse_column(row, 0)?,
                    user_id: row.get(1)?,
                    name: row.get(2)?,
                    marathon_date: parse_column(row, 3)?,
                    total_weeks: row.get(4)?,
                    peak_mileage: row.get(5)?,
                    created_at: parse_column(row, 6)?,
                })
            })
            .db_context("Failed to query plans")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch plans")?;

        Ok(summaries)
    }

    /// Permanently deletes a plan, its weeks, days and workout records.
    pub fn delete_plan(&mut self, id: Uuid) -> Result<()> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let id_text = id.to_string();
        tx.execute(DELETE_PLAN_WORKOUTS_SQL, params![id_text])
            .db_context("Failed to delete workouts")?;
        let deleted = tx
            .execute(DELETE_PLAN_SQL, params![id_text])
            .db_context("Failed to delete plan")?;

        if deleted == 0 {
            return Err(PlannerError::PlanNotFound { id });
        }

        tx.commit().db_context("Failed to commit transaction")?;
        debug!("Deleted plan {id}");
        Ok(())
    }

    /// Counts stored workout records. Used to check workout bookkeeping.
    pub fn count_workouts(&self) -> Result<i64> {
        self.connection
            .query_row("SELECT COUNT(*) FROM workouts", [], |row| row.get(0))
            .db_context("Failed to count workouts")
    }

    fn plan_from_row(row: &Row<'_>) -> rusqlite::Result<Plan> {
        Ok(Plan {
            id: parse_column(row, 0)?,
            user_id: row.get(1)?,
            name: row.get(2)?,
            description: row.get(3)?,
            marathon_date: parse_column(row, 4)?,
            goal_time: row.get(5)?,
            total_weeks: row.get(6)?,
            created_at: parse_column(row, 7)?,
            weeks: Vec::new(),
        })
    }

    fn week_from_row(row: &Row<'_>) -> rusqlite::Result<Week> {
        Ok(Week {
            id: parse_column(row, 0)?,
            plan_id: parse_column(row, 1)?,
            week_number: row.get(2)?,
            start_date: parse_column(row, 3)?,
            target_mileage: row.get(4)?,
            actual_mileage: row.get(5)?,
            notes: row.get(6)?,
            training_days: Vec::new(),
        })
    }

    fn day_from_row(row: &Row<'_>) -> rusqlite::Result<TrainingDay> {
        let description: String = row.get(5)?;
        // Labels are free text in the table; reject anything the model
        // cannot classify
        description.parse::<WorkoutKind>().map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(
                5,
                rusqlite::types::Type::Text,
                Box::new(std::io::Error::new(std::io::ErrorKind::InvalidData, e)),
            )
        })?;

        Ok(TrainingDay {
            id: parse_column(row, 0)?,
            week_id: parse_column(row, 1)?,
            day_of_week: row.get(2)?,
            date: parse_column(row, 3)?,
            miles: row.get(4)?,
            description,
            workout_id: parse_optional_column(row, 6)?,
            actual_miles: row.get(7)?,
            actual_notes: row.get(8)?,
            completed: row.get(9)?,
            completed_at: parse_optional_column(row, 10)?,
        })
    }
}

impl PlanStore for super::Database {
    fn save_plan(&mut self, plan: &Plan) -> Result<PlanSummary> {
        super::Database::save_plan(self, plan)
    }

    fn get_full_plan(&self, id: Uuid) -> Result<Option<Plan>> {
        super::Database::get_full_plan(self, id)
    }

    fn list_plans(&self, user_id: &str) -> Result<Vec<PlanSummary>> {
        super::Database::list_plans(self, user_id)
    }

    fn delete_plan(&mut self, id: Uuid) -> Result<()> {
        super::Database::delete_plan(self, id)
    }
}
