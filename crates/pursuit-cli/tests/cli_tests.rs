use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A temp dir plus a command factory pointed at a database inside it
struct CliTestEnvironment {
    _temp_dir: TempDir,
    db_path: String,
}

impl CliTestEnvironment {
    fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temporary directory");
        let db_path = temp_dir
            .path()
            .join("cli_test.db")
            .to_string_lossy()
            .into_owned();
        Self {
            _temp_dir: temp_dir,
            db_path,
        }
    }

    /// `pursuit --no-color --database-file <db>`
    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("pursuit").expect("Failed to find pursuit binary");
        cmd.args(["--no-color", "--database-file", &self.db_path]);
        cmd
    }

    fn add_company(&self, name: &str) {
        self.cmd()
            .args(["company", "add", name, "--title", "Engineer"])
            .assert()
            .success();
    }
}

#[test]
fn test_cli_add_company() {
    let env = CliTestEnvironment::new();

    env.cmd()
        .args([
            "company",
            "add",
            "Acme",
            "--title",
            "Backend Engineer",
            "--industry",
            "Robotics",
            "--priority",
            "high",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created company with ID: 1"))
        .stdout(predicate::str::contains("# Acme (ID: 1)"))
        .stdout(predicate::str::contains("- Position: Backend Engineer"))
        .stdout(predicate::str::contains("- Priority: high"))
        .stdout(predicate::str::contains("### 1. Entry (✓ Passed)"));
}

#[test]
fn test_cli_add_company_requires_name() {
    let env = CliTestEnvironment::new();

    env.cmd()
        .args(["company", "add", "  ", "--title", "Engineer"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid input for field 'name'"));

    env.cmd()
        .args(["company", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No companies found."));
}

#[test]
fn test_cli_list_is_default_command() {
    let env = CliTestEnvironment::new();

    env.cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("No companies found."));

    env.add_company("Acme");
    env.cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("## Acme (ID: 1)"))
        .stdout(predicate::str::contains("- Current stage: Entry"));
}

#[test]
fn test_cli_list_filters_and_sorts() {
    let env = CliTestEnvironment::new();
    env.add_company("Beta");
    env.add_company("alpha");
    env.cmd()
        .args(["company", "edit", "1", "--status", "offer"])
        .assert()
        .success();

    env.cmd()
        .args(["company", "list", "--status", "offer"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Beta"))
        .stdout(predicate::str::contains("alpha").not());

    env.cmd()
        .args(["company", "list", "--query", "ALP"])
        .assert()
        .success()
        .stdout(predicate::str::contains("alpha"))
        .stdout(predicate::str::contains("Beta").not());

    env.cmd()
        .args(["company", "list", "--sort", "name", "--order", "asc"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"(?s)alpha.*Beta").unwrap());

    env.cmd()
        .args(["company", "list", "--status", "bogus"])
        .assert()
        .failure();
}

#[test]
fn test_cli_edit_company() {
    let env = CliTestEnvironment::new();
    env.add_company("Acme");

    env.cmd()
        .args([
            "company",
            "edit",
            "1",
            "--status",
            "final-interview",
            "--rating",
            "5",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated company 1"))
        .stdout(predicate::str::contains("- Updated status"))
        .stdout(predicate::str::contains("- Status: final_interview"))
        .stdout(predicate::str::contains("- Rating: 5/5"))
        .stdout(predicate::str::contains("- Position: Engineer"));
}

#[test]
fn test_cli_credentials_are_masked() {
    let env = CliTestEnvironment::new();

    env.cmd()
        .args([
            "company",
            "add",
            "Acme",
            "--title",
            "Engineer",
            "--tags",
            "remote",
            "--account-id",
            "me@example.com",
            "--password",
            "hunter2",
        ])
        .assert()
        .success();

    env.cmd()
        .args(["company", "show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- Account: me@example.com"))
        .stdout(predicate::str::contains("- Tags: remote"))
        .stdout(predicate::str::contains("hunter2").not());
}

#[test]
fn test_cli_show_unknown_company() {
    let env = CliTestEnvironment::new();

    env.cmd()
        .args(["company", "show", "42"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Company with ID 42 not found"));
}

#[test]
fn test_cli_delete_requires_confirmation() {
    let env = CliTestEnvironment::new();
    env.add_company("Acme");

    env.cmd()
        .args(["company", "delete", "1"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Deletion cancelled"));
    env.cmd()
        .args(["company", "show", "1"])
        .assert()
        .success();

    env.cmd()
        .args(["company", "delete", "1"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted company 'Acme' (ID: 1)"));
    env.cmd()
        .args(["company", "show", "1"])
        .assert()
        .failure();
}

#[test]
fn test_cli_delete_with_yes() {
    let env = CliTestEnvironment::new();
    env.add_company("Acme");

    env.cmd()
        .args(["company", "delete", "1", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Deleted company 'Acme' (ID: 1) with 1 stage(s)",
        ));
}

#[test]
fn test_cli_stage_lifecycle() {
    let env = CliTestEnvironment::new();
    env.add_company("Acme");

    env.cmd()
        .args(["stage", "add", "1", "Technical interview"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created stage with ID: 2"))
        .stdout(predicate::str::contains("### 2. Technical interview (○ Pending)"));

    env.cmd()
        .args([
            "stage",
            "update",
            "1",
            "2",
            "--status",
            "scheduled",
            "--date",
            "2024-06-03",
            "--time",
            "14:00",
            "--location",
            "https://meet.example.com/x",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("➤ Scheduled"))
        .stdout(predicate::str::contains("- Date: 2024-06-03 14:00"))
        .stdout(predicate::str::contains(
            "[https://meet.example.com/x](https://meet.example.com/x)",
        ));

    env.cmd()
        .args(["stage", "update", "1", "2", "--status", "passed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ Passed"))
        .stdout(predicate::str::contains("- Completed:"));

    env.cmd()
        .args(["company", "current", "1", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Current stage set to 1"));

    env.cmd()
        .args(["stage", "delete", "1", "2", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Deleted stage 'Technical interview' (ID: 2)",
        ));
}

#[test]
fn test_cli_stage_update_rejects_bad_time() {
    let env = CliTestEnvironment::new();
    env.add_company("Acme");
    env.cmd()
        .args(["stage", "add", "1", "Interview"])
        .assert()
        .success();

    env.cmd()
        .args(["stage", "update", "1", "2", "--time", "3pm"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected HH:MM"));
}

#[test]
fn test_cli_current_stage_out_of_range() {
    let env = CliTestEnvironment::new();
    env.add_company("Acme");

    env.cmd()
        .args(["company", "current", "1", "3"])
        .assert()
        .failure();
}

#[test]
fn test_cli_stats() {
    let env = CliTestEnvironment::new();
    env.add_company("Acme");
    env.cmd()
        .args(["company", "add", "Beta", "--title", "SRE", "--status", "offer", "--rating", "4"])
        .assert()
        .success();

    env.cmd()
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("- Total: 2"))
        .stdout(predicate::str::contains("- Offers: 1"))
        .stdout(predicate::str::contains("- Average rating: 4.0"));
}

#[test]
fn test_cli_schedule() {
    let env = CliTestEnvironment::new();

    env.cmd()
        .arg("schedule")
        .assert()
        .success()
        .stdout(predicate::str::contains("# Schedule"))
        .stdout(predicate::str::contains("| Date | Day | Stages |"))
        .stdout(predicate::str::contains("No upcoming stages."));
}

#[test]
fn test_cli_users_are_separate() {
    let env = CliTestEnvironment::new();
    env.cmd()
        .args(["--user", "alice", "company", "add", "Acme", "--title", "Engineer"])
        .assert()
        .success();

    env.cmd()
        .args(["--user", "bob", "company", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No companies found."));
    env.cmd()
        .args(["--user", "alice", "company", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Acme"));
}
