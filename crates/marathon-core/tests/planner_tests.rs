mod common;

use common::{create_params, create_test_planner};
use jiff::{civil::date, ToSpan};
use marathon_core::{
    params::{DuplicatePlan, ListPlans, PlanRef},
    CreateResult, DeleteResult, ErrorKind, PlannerBuilder,
};
use tempfile::TempDir;

#[tokio::test]
async fn test_plan_lifecycle() {
    let (_temp_dir, planner) = create_test_planner().await;

    let plan = planner
        .create_marathon_plan(&create_params("runner", 50.0))
        .await
        .expect("Failed to create plan");

    let plan_ref = PlanRef {
        id: plan.id,
        user_id: "runner".to_string(),
    };
    let shown = planner.show_plan(&plan_ref).await.expect("Failed to show plan");
    assert_eq!(shown, plan);

    let copy = planner
        .duplicate_plan(&DuplicatePlan {
            id: plan.id,
            marathon_date: date(2025, 4, 21),
            user_id: "runner".to_string(),
        })
        .await
        .expect("Failed to duplicate plan");

    let list = ListPlans {
        user_id: "runner".to_string(),
    };
    let summaries = planner.list_plans(&list).await.unwrap().0;
    assert_eq!(summaries.len(), 2);
    assert_eq!(summaries[0].id, copy.id);
    assert_eq!(summaries[1].id, plan.id);

    let deleted = planner.delete_plan(&plan_ref).await.unwrap();
    assert!(DeleteResult::new(deleted)
        .to_string()
        .contains("Tuesday, October 15, 2024"));

    let summaries = planner.list_plans(&list).await.unwrap().0;
    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].id, copy.id);
}

#[tokio::test]
async fn test_plans_persist_across_planners() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("nested").join("plans.db");

    let first = PlannerBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .unwrap();
    let plan = first
        .create_marathon_plan(&create_params("runner", 65.0))
        .await
        .unwrap();
    drop(first);

    let second = PlannerBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .unwrap();
    let loaded = second
        .show_plan(&PlanRef {
            id: plan.id,
            user_id: "runner".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(loaded, plan);
    assert_eq!(loaded.week(16).and_then(|w| w.long_run()), Some(22.0));
}

#[tokio::test]
async fn test_created_plan_matches_periodization() {
    let (_temp_dir, planner) = create_test_planner().await;
    let plan = planner
        .create_marathon_plan(&create_params("runner", 50.0))
        .await
        .unwrap();

    let targets: Vec<f64> = plan.weeks.iter().map(|w| w.target_mileage).collect();
    assert_eq!(
        targets,
        vec![
            25.0, 29.0, 25.0, 30.0, 34.0, 28.0, 34.0, 38.0, 32.0, 39.0, 43.0, 37.0, 43.0, 47.0,
            41.0, 50.0, 38.0, 20.0
        ]
    );

    let race_week = plan.week(18).unwrap();
    assert_eq!(race_week.end_date(), plan.marathon_date);
    assert_eq!(
        plan.start_date(),
        Some(plan.marathon_date.saturating_sub(125.days()))
    );
}

#[tokio::test]
async fn test_validation_errors() {
    let (_temp_dir, planner) = create_test_planner().await;

    for peak in [0.0, 19.0, 101.0, f64::NAN] {
        let err = planner
            .create_marathon_plan(&create_params("runner", peak))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation, "peak {peak}");
    }

    let err = planner
        .create_marathon_plan(&create_params("", 50.0))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
}

#[tokio::test]
async fn test_other_users_cannot_touch_plan() {
    let (_temp_dir, planner) = create_test_planner().await;
    let plan = planner
        .create_marathon_plan(&create_params("runner", 50.0))
        .await
        .unwrap();
    let intruder = PlanRef {
        id: plan.id,
        user_id: "intruder".to_string(),
    };

    assert_eq!(
        planner.show_plan(&intruder).await.unwrap_err().kind(),
        ErrorKind::Permission
    );
    assert_eq!(
        planner.delete_plan(&intruder).await.unwrap_err().kind(),
        ErrorKind::Permission
    );

    // still there for its owner
    let owner = PlanRef {
        id: plan.id,
        user_id: "runner".to_string(),
    };
    assert!(planner.show_plan(&owner).await.is_ok());
}

#[tokio::test]
async fn test_create_result_display() {
    let (_temp_dir, planner) = create_test_planner().await;
    let plan = planner
        .create_marathon_plan(&create_params("runner", 50.0))
        .await
        .unwrap();
    let id = plan.id;

    let output = CreateResult::new(plan).to_string();
    assert!(output.starts_with(&format!("Created plan with ID: {id}\n")));
    assert!(output.contains("# Marathon Training Plan"));
    assert!(output.contains("RACE!"));
}
