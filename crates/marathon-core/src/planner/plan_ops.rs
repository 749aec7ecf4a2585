//! Plan operations for the Planner.

use log::{debug, info};
use tokio::task;

use super::Planner;
use crate::{
    db::Database,
    display::PlanSummaries,
    duplicate,
    error::{PlannerError, Result},
    models::{Plan, PlanSummary},
    params::{CreateMarathonPlan, DuplicatePlan, ListPlans, PlanRef},
    store::PlanStore,
};

impl Planner {
    /// Runs `operation` against a fresh store connection on the blocking
    /// pool.
    async fn with_store<T, F>(&self, operation: F) -> Result<T>
    where
        F: FnOnce(&mut dyn PlanStore) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            operation(&mut db)
        })
        .await
        .map_err(|e| PlannerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Generates an 18-week plan ending on the requested marathon date and
    /// saves it for the requesting user.
    ///
    /// The returned plan is read back from the store, so every running day
    /// carries the ID of the workout record created for it.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::InvalidInput` when the peak mileage is outside
    /// `20..=100` or the user ID is empty. Nothing is saved in that case.
    pub async fn create_marathon_plan(&self, params: &CreateMarathonPlan) -> Result<Plan> {
        let plan = self.preview_marathon_plan(params).await?;
        let plan_id = plan.id;

        let saved = self
            .with_store(move |store| {
                store.save_plan(&plan)?;
                store
                    .get_full_plan(plan.id)?
                    .ok_or(PlannerError::PlanNotFound { id: plan.id })
            })
            .await?;

        info!(
            "Created plan {plan_id} for user '{}' (race {}, peak {} mi)",
            params.user_id, params.marathon_date, params.peak_weekly_mileage
        );
        Ok(saved)
    }

    /// Validates the request and generates the plan without saving it.
    pub async fn preview_marathon_plan(&self, params: &CreateMarathonPlan) -> Result<Plan> {
        params.validate()?;
        debug!(
            "Generating plan for race on {} with peak {}",
            params.marathon_date, params.peak_weekly_mileage
        );

        Ok(self.generator.create_marathon_plan(
            params.marathon_date,
            params.peak_weekly_mileage,
            &params.user_id,
        ))
    }

    /// Loads a complete plan owned by the requesting user.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::PlanNotFound` if no plan has the ID and
    /// `PlannerError::PermissionDenied` if it belongs to someone else.
    pub async fn show_plan(&self, params: &PlanRef) -> Result<Plan> {
        let params = params.clone();
        self.with_store(move |store| owned_plan(store, &params))
            .await
    }

    /// Lists summaries of the requesting user's plans, latest race first.
    pub async fn list_plans(&self, params: &ListPlans) -> Result<PlanSummaries> {
        let user_id = params.user_id.clone();
        let summaries = self
            .with_store(move |store| store.list_plans(&user_id))
            .await?;

        debug!(
            "Found {} plans for user '{}'",
            summaries.len(),
            params.user_id
        );
        Ok(PlanSummaries(summaries))
    }

    /// Copies a saved plan onto a new marathon date and saves the copy.
    ///
    /// The copy keeps the planned miles and labels of the source, gets fresh
    /// IDs and new workout records, and starts with no recorded progress.
    pub async fn duplicate_plan(&self, params: &DuplicatePlan) -> Result<Plan> {
        params.validate()?;

        let source_ref = PlanRef {
            id: params.id,
            user_id: params.user_id.clone(),
        };
        let marathon_date = params.marathon_date;
        let generator = self.generator.clone();

        let copy = self
            .with_store(move |store| {
                let source = owned_plan(store, &source_ref)?;
                let copy = duplicate::duplicate_plan(
                    &source,
                    marathon_date,
                    &source_ref.user_id,
                    generator.ids(),
                    generator.clock(),
                )?;
                store.save_plan(&copy)?;
                store
                    .get_full_plan(copy.id)?
                    .ok_or(PlannerError::PlanNotFound { id: copy.id })
            })
            .await?;

        info!(
            "Duplicated plan {} as {} for race on {}",
            params.id, copy.id, params.marathon_date
        );
        Ok(copy)
    }

    /// Permanently deletes a plan owned by the requesting user and returns
    /// its summary for confirmation. This operation cannot be undone.
    pub async fn delete_plan(&self, params: &PlanRef) -> Result<PlanSummary> {
        let params = params.clone();
        let summary = self
            .with_store(move |store| {
                let plan = owned_plan(store, &params)?;
                store.delete_plan(plan.id)?;
                Ok(PlanSummary::from(&plan))
            })
            .await?;

        info!("Deleted plan {}", summary.id);
        Ok(summary)
    }
}

/// Loads a plan and checks that `params.user_id` owns it.
fn owned_plan(store: &dyn PlanStore, params: &PlanRef) -> Result<Plan> {
    let plan = store
        .get_full_plan(params.id)?
        .ok_or(PlannerError::PlanNotFound { id: params.id })?;

    if plan.user_id != params.user_id {
        return Err(PlannerError::PermissionDenied {
            id: params.id,
            user_id: params.user_id.clone(),
        });
    }

    Ok(plan)
}
