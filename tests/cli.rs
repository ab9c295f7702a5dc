use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn budget(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("budget").unwrap();
    cmd.env("BUDGET_SHARE_DATA_DIR", data_dir.path())
        .env_remove("BUDGET_SHARE_USER");
    cmd
}

/// Create a budget as `owner` and return its short id
fn create(data_dir: &TempDir, owner: &str, name: &str, amount: &str) -> String {
    let output = budget(data_dir)
        .args(["--as", owner, "create", name, amount])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let start = stdout.find("(bud-").unwrap() + 1;
    stdout[start..start + 12].to_string()
}

#[test]
fn test_create_edit_and_show() {
    let data_dir = TempDir::new().unwrap();
    let id = create(&data_dir, "a@x.com", "Groceries", "100");

    budget(&data_dir)
        .args(["--as", "a@x.com", "edit", &id, "--name", "Food", "--amount", "150.00"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated budget: Food"))
        .stdout(predicate::str::contains("Left: $150.00"));

    budget(&data_dir)
        .args(["--as", "a@x.com", "show", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Budget:  $150.00"));
}

#[test]
fn test_edit_rejects_out_of_range_amount() {
    let data_dir = TempDir::new().unwrap();
    let id = create(&data_dir, "a@x.com", "Groceries", "100");

    budget(&data_dir)
        .args(["--as", "a@x.com", "edit", &id, "--amount", "5000001"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Amount cannot exceed"));

    budget(&data_dir)
        .args(["--as", "a@x.com", "create", "Rent", "12abc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Amount is not a number"));

    budget(&data_dir)
        .args(["--as", "a@x.com", "edit", &id, "--amount", "150.999"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("more than two decimal places"));
}

#[test]
fn test_share_and_remove() {
    let data_dir = TempDir::new().unwrap();
    let id = create(&data_dir, "a@x.com", "Groceries", "100");

    budget(&data_dir)
        .args(["--as", "a@x.com", "share", "add", &id, "b@x.com"])
        .assert()
        .success();

    budget(&data_dir)
        .args(["--as", "b@x.com", "share", "list", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("(a@x.com (Owner))"))
        .stdout(predicate::str::contains("* b@x.com"))
        .stdout(predicate::str::contains("Only owner can share"));

    // guests cannot share
    budget(&data_dir)
        .args(["--as", "b@x.com", "share", "add", &id, "c@x.com"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Permission denied"));

    // without --yes the removal is only previewed
    budget(&data_dir)
        .args(["--as", "b@x.com", "share", "remove", &id, "b@x.com"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Remove b@x.com?"))
        .stdout(predicate::str::contains("Cancelled"));

    budget(&data_dir)
        .args(["--as", "b@x.com", "share", "remove", &id, "b@x.com", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed b@x.com"));

    budget(&data_dir)
        .args(["--as", "a@x.com", "share", "list", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("b@x.com").not());
}

#[test]
fn test_reset_confirmation_and_audit() {
    let data_dir = TempDir::new().unwrap();
    let id = create(&data_dir, "a@x.com", "Groceries", "100");

    budget(&data_dir)
        .args(["--as", "a@x.com", "reset", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Reset Groceries"))
        .stdout(predicate::str::contains("Cancelled"));

    budget(&data_dir)
        .args(["--as", "b@x.com", "reset", &id, "--yes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("only the owner can reset"));

    budget(&data_dir)
        .args(["--as", "a@x.com", "reset", &id, "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Reset budget: Groceries ($100.00 left)"));

    budget(&data_dir)
        .arg("audit")
        .assert()
        .success()
        .stdout(predicate::str::contains("RESET Budget"));
}

#[test]
fn test_user_required() {
    let data_dir = TempDir::new().unwrap();

    budget(&data_dir)
        .args(["list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No user email set"));

    budget(&data_dir)
        .args(["config", "--user-email", "a@x.com"])
        .assert()
        .success();

    budget(&data_dir)
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No budgets found."));
}
