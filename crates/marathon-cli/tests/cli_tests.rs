use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a temporary directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Command with --no-color and a database inside `temp_dir`
fn marathon_cmd(temp_dir: &TempDir) -> Command {
    let db_path = temp_dir.path().join("cli_test.db");
    let mut cmd = Command::cargo_bin("marathon").expect("Failed to find marathon binary");
    cmd.env_remove("MARATHON_USER")
        .arg("--no-color")
        .arg("--database-file")
        .arg(db_path);
    cmd
}

/// Creates a plan and returns its ID as printed by the CLI.
fn create_plan(temp_dir: &TempDir, user: &str, date: &str, peak: &str) -> String {
    let output = marathon_cmd(temp_dir)
        .args(["--user", user, "plan", "create", "--date", date, "--peak", peak])
        .output()
        .expect("Failed to run marathon");
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).expect("stdout is UTF-8");
    stdout
        .lines()
        .find_map(|line| line.strip_prefix("Created plan with ID: "))
        .expect("plan ID in output")
        .trim()
        .to_string()
}

#[test]
fn test_cli_create_plan_success() {
    let temp_dir = create_cli_test_environment();

    marathon_cmd(&temp_dir)
        .args(["plan", "create", "--date", "2024-10-15", "--peak", "50"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created plan with ID:"))
        .stdout(predicate::str::contains(
            "18-week training plan for the marathon on Tuesday, October 15, 2024",
        ))
        .stdout(predicate::str::contains("## Week 16 (Sep 25 to Oct 1): 50 mi"))
        .stdout(predicate::str::contains("RACE!"));
}

#[test]
fn test_cli_create_rejects_out_of_range_peak() {
    let temp_dir = create_cli_test_environment();

    marathon_cmd(&temp_dir)
        .args(["plan", "create", "--date", "2024-10-15", "--peak", "150"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("peak_weekly_mileage"));

    marathon_cmd(&temp_dir)
        .args(["plan", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No plans found."));
}

#[test]
fn test_cli_rejects_malformed_date() {
    let temp_dir = create_cli_test_environment();

    marathon_cmd(&temp_dir)
        .args(["plan", "create", "--date", "2024-13-01", "--peak", "50"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("YYYY-MM-DD"));
}

#[test]
fn test_cli_preview_does_not_save() {
    let temp_dir = create_cli_test_environment();

    marathon_cmd(&temp_dir)
        .args(["plan", "preview", "--date", "2024-10-15", "--peak", "50"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Marathon Training Plan"))
        .stdout(predicate::str::contains("Note: Preview only"));

    marathon_cmd(&temp_dir)
        .args(["plan", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No plans found."));
}

#[test]
fn test_cli_preview_json() {
    let temp_dir = create_cli_test_environment();

    marathon_cmd(&temp_dir)
        .args([
            "plan",
            "preview",
            "--date",
            "2024-10-15",
            "--peak",
            "50",
            "--json",
        ])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("{"))
        .stdout(predicate::str::contains("\"marathon_date\": \"2024-10-15\""))
        .stdout(predicate::str::contains("\"description\": \"Long Run\""))
        .stdout(predicate::str::contains("RACE!").not());
}

#[test]
fn test_cli_list_and_default_command() {
    let temp_dir = create_cli_test_environment();
    let id = create_plan(&temp_dir, "local", "2024-10-15", "50");

    marathon_cmd(&temp_dir)
        .args(["plan", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains(id.as_str()))
        .stdout(predicate::str::contains("18 weeks, peaking at 50 mi"));

    // no subcommand lists plans too
    marathon_cmd(&temp_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains(id.as_str()));
}

#[test]
fn test_cli_plans_are_per_user() {
    let temp_dir = create_cli_test_environment();
    let id = create_plan(&temp_dir, "alice", "2024-10-15", "50");

    marathon_cmd(&temp_dir)
        .args(["--user", "bob", "plan", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No plans found."));

    marathon_cmd(&temp_dir)
        .env("MARATHON_USER", "alice")
        .args(["plan", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains(id.as_str()));

    marathon_cmd(&temp_dir)
        .args(["--user", "bob", "plan", "show", id.as_str()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not belong to user 'bob'"));
}

#[test]
fn test_cli_show_plan() {
    let temp_dir = create_cli_test_environment();
    let id = create_plan(&temp_dir, "local", "2024-10-15", "65");

    marathon_cmd(&temp_dir)
        .args(["plan", "show", id.as_str()])
        .assert()
        .success()
        .stdout(predicate::str::contains("- **Peak week**: 65 mi"))
        .stdout(predicate::str::contains("| Sat | Sep 30 | Long Run | 22 |"));

    marathon_cmd(&temp_dir)
        .args(["plan", "show", id.as_str(), "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("\"id\": \"{id}\"")));
}

#[test]
fn test_cli_show_missing_plan() {
    let temp_dir = create_cli_test_environment();

    marathon_cmd(&temp_dir)
        .args(["plan", "show", "00000000-0000-0000-0000-000000000001"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));

    marathon_cmd(&temp_dir)
        .args(["plan", "show", "not-a-uuid"])
        .assert()
        .failure();
}

#[test]
fn test_cli_duplicate_plan() {
    let temp_dir = create_cli_test_environment();
    let id = create_plan(&temp_dir, "local", "2024-10-15", "50");

    marathon_cmd(&temp_dir)
        .args(["plan", "duplicate", id.as_str(), "--date", "2025-04-21"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created plan with ID:"))
        .stdout(predicate::str::contains("Monday, April 21, 2025"));

    marathon_cmd(&temp_dir)
        .args(["plan", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Monday, April 21, 2025"))
        .stdout(predicate::str::contains("Tuesday, October 15, 2024"));
}

#[test]
fn test_cli_delete_plan() {
    let temp_dir = create_cli_test_environment();
    let id = create_plan(&temp_dir, "local", "2024-10-15", "50");

    marathon_cmd(&temp_dir)
        .args(["plan", "delete", id.as_str()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted plan"))
        .stdout(predicate::str::contains(id.as_str()));

    marathon_cmd(&temp_dir)
        .args(["plan", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No plans found."));

    marathon_cmd(&temp_dir)
        .args(["plan", "delete", id.as_str()])
        .assert()
        .failure();
}

#[test]
fn test_cli_logs_database_in_use() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    marathon_cmd(&temp_dir)
        .env("RUST_LOG", "info")
        .args(["plan", "list"])
        .assert()
        .success()
        .stderr(predicate::str::contains(format!(
            "with database {}",
            db_path.display()
        )));
}
