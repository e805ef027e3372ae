use assert_cmd::Command;
use predicates::str::contains;

fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("fintro").unwrap();
    // Keep the test hermetic: never pick up a real user config
    cmd.env("FINTRO_CONFIG_DIR", env!("CARGO_TARGET_TMPDIR"));
    cmd
}

#[test]
fn no_subcommand_prints_usage_hint() {
    cmd()
        .assert()
        .success()
        .stdout(contains("Run 'fintro --help' for usage information."));
}

#[test]
fn snapshot_prints_balances() {
    cmd()
        .arg("snapshot")
        .assert()
        .success()
        .stdout(contains("Checking Balance: $1500.00"))
        .stdout(contains("Savings Balance: $5000.00"))
        .stdout(contains("Total Cash: $6500.00"));
}

#[test]
fn snapshot_prints_transaction_record() {
    cmd()
        .arg("snapshot")
        .assert()
        .success()
        .stdout(contains("Merchant: Cumberland Fuel"))
        .stdout(contains("Amount:   $50.00"))
        .stdout(contains("Category: Fuel"));
}

#[test]
fn drills_classifies_sample_literals() {
    cmd()
        .arg("drills")
        .assert()
        .success()
        .stdout(contains("Balance $300.00: Low Balance Warning"))
        .stdout(contains("Amount -$300.00: Expense"));
}

#[test]
fn drills_totals_monthly_expenses() {
    cmd()
        .arg("drills")
        .assert()
        .success()
        .stdout(contains("Jan: -$10.00"))
        .stdout(contains("Jun: -$200.00"))
        .stdout(contains("Total: -$1190.00"));
}

#[test]
fn drills_reaches_goal_in_ten_months() {
    cmd()
        .arg("drills")
        .assert()
        .success()
        .stdout(contains("Goal reached in 10 months"));
}

#[test]
fn drills_accepts_plan_overrides() {
    cmd()
        .args(["drills", "--goal", "1000", "--deposit", "250"])
        .assert()
        .success()
        .stdout(contains("Goal reached in 4 months"));
}

#[test]
fn drills_rejects_bad_amount() {
    cmd()
        .args(["drills", "--goal", "lots"])
        .assert()
        .failure()
        .stderr(contains("Validation error"));
}

#[test]
fn config_shows_settings() {
    cmd()
        .arg("config")
        .assert()
        .success()
        .stdout(contains("Low balance threshold:   $500.00"))
        .stdout(contains("Chart tick rate:         250ms"));
}
