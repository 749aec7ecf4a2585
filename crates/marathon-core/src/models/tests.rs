#[cfg(test)]
mod model_tests {
    use jiff::{civil::date, Timestamp};
    use uuid::Uuid;

    use crate::{
        context::{FixedClock, SequentialIds},
        generator::PlanGenerator,
        models::{Plan, PlanSummary, TrainingDay, WorkoutKind, PLAN_NAME, TOTAL_WEEKS},
    };

    fn create_test_plan(peak: f64) -> Plan {
        PlanGenerator::with_sources(
            SequentialIds::default(),
            FixedClock(Timestamp::from_second(1_640_995_200).unwrap()),
        )
        .create_marathon_plan(date(2024, 10, 15), peak, "runner")
    }

    fn create_test_day(day_of_week: u8, miles: f64) -> TrainingDay {
        TrainingDay {
            id: Uuid::from_u128(10),
            week_id: Uuid::from_u128(1),
            day_of_week,
            date: date(2024, 6, 10),
            miles,
            description: WorkoutKind::for_day_of_week(day_of_week)
                .map(|kind| kind.as_str().to_string())
                .unwrap_or_default(),
            workout_id: None,
            actual_miles: None,
            actual_notes: None,
            completed: false,
            completed_at: None,
        }
    }

    #[test]
    fn test_workout_kind_labels() {
        for kind in [
            WorkoutKind::EasyRun,
            WorkoutKind::Workout,
            WorkoutKind::LongRun,
            WorkoutKind::Rest,
        ] {
            assert_eq!(kind.as_str().parse::<WorkoutKind>(), Ok(kind));
            assert_eq!(kind.to_string(), kind.as_str());
        }
        assert!("Tempo".parse::<WorkoutKind>().is_err());
        assert!("easy run".parse::<WorkoutKind>().is_err());
    }

    #[test]
    fn test_workout_kind_serde_uses_labels() {
        let json = serde_json::to_string(&WorkoutKind::LongRun).unwrap();
        assert_eq!(json, "\"Long Run\"");
        let kind: WorkoutKind = serde_json::from_str("\"Easy Run\"").unwrap();
        assert_eq!(kind, WorkoutKind::EasyRun);
    }

    #[test]
    fn test_day_of_week_mapping() {
        let expected = [
            WorkoutKind::EasyRun,
            WorkoutKind::Workout,
            WorkoutKind::EasyRun,
            WorkoutKind::Workout,
            WorkoutKind::EasyRun,
            WorkoutKind::LongRun,
            WorkoutKind::Rest,
        ];
        for (day, kind) in (1..=7).zip(expected) {
            assert_eq!(WorkoutKind::for_day_of_week(day), Some(kind));
        }
        assert_eq!(WorkoutKind::for_day_of_week(0), None);
        assert_eq!(WorkoutKind::for_day_of_week(8), None);
        assert!(WorkoutKind::Workout.is_workout());
        assert!(!WorkoutKind::LongRun.is_workout());
    }

    #[test]
    fn test_training_day_helpers() {
        let easy = create_test_day(1, 5.0);
        assert_eq!(easy.kind(), Some(WorkoutKind::EasyRun));
        assert!(easy.is_running_day());

        let rest = create_test_day(7, 0.0);
        assert_eq!(rest.kind(), Some(WorkoutKind::Rest));
        assert!(!rest.is_running_day());
    }

    #[test]
    fn test_plan_accessors() {
        let plan = create_test_plan(50.0);

        assert_eq!(plan.name, PLAN_NAME);
        assert_eq!(plan.total_weeks, TOTAL_WEEKS);
        assert_eq!(plan.start_date(), Some(date(2024, 6, 12)));
        assert_eq!(plan.peak_mileage(), 50.0);
        assert_eq!(plan.week(16).map(|w| w.target_mileage), Some(50.0));
        assert!(plan.week(19).is_none());

        let week = plan.week(1).unwrap();
        assert_eq!(week.end_date(), date(2024, 6, 18));
        assert_eq!(week.long_run(), Some(8.0));
        assert_eq!(week.day(7).map(|d| d.miles), Some(0.0));
        assert!(week.day(8).is_none());

        let sum: f64 = plan.weeks.iter().map(|w| w.total_miles()).sum();
        assert_eq!(plan.total_miles(), sum);
    }

    #[test]
    fn test_plan_summary_from_plan() {
        let plan = create_test_plan(65.0);
        let summary = PlanSummary::from(&plan);

        assert_eq!(summary.id, plan.id);
        assert_eq!(summary.user_id, "runner");
        assert_eq!(summary.marathon_date, date(2024, 10, 15));
        assert_eq!(summary.total_weeks, 18);
        assert_eq!(summary.peak_mileage, 65.0);
        assert_eq!(summary.created_at, plan.created_at);
    }

    #[test]
    fn test_plan_json_round_trip() {
        let plan = create_test_plan(50.0);
        let json = plan.to_json_pretty().unwrap();
        assert!(json.contains("\"marathon_date\": \"2024-10-15\""));

        let parsed: Plan = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, plan);
    }

    #[test]
    fn test_plan_display() {
        let plan = create_test_plan(50.0);
        let output = plan.to_string();

        assert!(output.starts_with("# Marathon Training Plan\n"));
        assert!(output.contains(
            "18-week training plan for the marathon on Tuesday, October 15, 2024"
        ));
        assert!(output.contains("- **Marathon**: Tuesday, October 15, 2024"));
        assert!(output.contains("- **Peak week**: 50 mi"));
        assert_eq!(output.matches("## Week ").count(), 18);
        assert!(output.contains("## Week 1 (Jun 12 to Jun 18): 25 mi"));
        assert!(output.contains("| Day | Date | Workout | Miles |"));
    }

    #[test]
    fn test_race_marker_is_display_only() {
        let plan = create_test_plan(50.0);
        let output = plan.to_string();

        assert_eq!(output.matches("RACE!").count(), 1);
        let race_week = &output[output.find("## Week 18").unwrap()..];
        assert!(race_week.contains("| Sat | Oct 14 | RACE! | 5 |"));

        let saturday = plan.week(18).unwrap().day(6).unwrap();
        assert_eq!(saturday.description, "Long Run");

        // a week rendered on its own keeps the stored label
        let week_output = plan.week(18).unwrap().to_string();
        assert!(!week_output.contains("RACE!"));
        assert!(week_output.contains("| Sat | Oct 14 | Long Run | 5 |"));
    }

    #[test]
    fn test_training_day_display() {
        let mut day = create_test_day(2, 6.5);
        assert_eq!(day.to_string(), "Tue 2024-06-10: Workout (6.5 mi)");

        day.completed = true;
        assert!(day.to_string().ends_with('✓'));

        let rest = create_test_day(7, 0.0);
        assert_eq!(rest.to_string(), "Sun 2024-06-10: Rest");
    }
}
