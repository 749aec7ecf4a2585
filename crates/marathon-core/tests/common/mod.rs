use jiff::{civil::date, Timestamp};
use marathon_core::{
    params::CreateMarathonPlan, FixedClock, Plan, PlanGenerator, Planner, PlannerBuilder,
    SequentialIds,
};
use tempfile::TempDir;

/// Helper function to create a test planner
#[allow(dead_code)]
pub async fn create_test_planner() -> (TempDir, Planner) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let planner = PlannerBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create planner");
    (temp_dir, planner)
}

/// Parameters for a plan racing on 2024-10-15.
#[allow(dead_code)]
pub fn create_params(user_id: &str, peak: f64) -> CreateMarathonPlan {
    CreateMarathonPlan {
        marathon_date: date(2024, 10, 15),
        peak_weekly_mileage: peak,
        user_id: user_id.to_string(),
    }
}

/// Deterministic plan whose IDs start after `first_id`.
#[allow(dead_code)]
pub fn generate_plan(first_id: u64, user_id: &str, peak: f64) -> Plan {
    PlanGenerator::with_sources(
        SequentialIds::starting_at(first_id),
        FixedClock(Timestamp::from_second(1_700_000_000).expect("valid timestamp")),
    )
    .create_marathon_plan(date(2024, 10, 15), peak, user_id)
}
