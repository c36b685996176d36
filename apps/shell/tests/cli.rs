use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn inventra(dir: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_inventra"));
    cmd.current_dir(dir.path()).env_remove("RUST_LOG");
    cmd
}

#[test]
fn list_prints_builtin_table() {
    let dir = TempDir::new().unwrap();
    inventra(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Rain Jacket (E345)"))
        .stdout(predicate::str::contains("Seattle-Pike #089 -> Portland-SW #156"))
        .stdout(predicate::str::contains("5 of 5 transfers shown"));
}

#[test]
fn list_filters_by_search_and_status() {
    let dir = TempDir::new().unwrap();
    inventra(&dir)
        .args(["list", "--search", "RAIN"])
        .assert()
        .success()
        .stdout(predicate::str::contains("T001"))
        .stdout(predicate::str::contains("T003").not())
        .stdout(predicate::str::contains("1 of 5 transfers shown"));

    inventra(&dir)
        .args(["list", "--status", "rejected", "--priority", "high"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No transfers match the current filters"));
}

#[test]
fn invalid_filter_is_a_usage_error() {
    let dir = TempDir::new().unwrap();
    inventra(&dir)
        .args(["list", "--priority", "urgent"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown priority 'urgent'"));
}

#[test]
fn summary_counts_seeded_records() {
    let dir = TempDir::new().unwrap();
    inventra(&dir)
        .arg("summary")
        .assert()
        .success()
        .stdout("Total Suggestions: 5  Approved: 2  Pending: 2  Rejected: 1\n");
}

#[test]
fn session_runs_the_approval_workflow() {
    let dir = TempDir::new().unwrap();
    inventra(&dir)
        .arg("session")
        .write_stdin("toggle T001\ntoggle T003\nsavings\nreject T003\nbulk-approve\nsummary\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("2 selected, potential savings $3,350"))
        .stdout(predicate::str::contains("✖ Transfer Rejected: Transfer T003 has been rejected"))
        .stdout(predicate::str::contains("✔ Bulk Approval Complete: 1 transfers have been approved"))
        .stdout(predicate::str::contains("Approved: 3  Pending: 0  Rejected: 2"));
}

#[test]
fn seed_flag_replaces_builtin_records() {
    let dir = TempDir::new().unwrap();
    let seed = dir.path().join("seed.json");
    fs::write(
        &seed,
        r#"[{"id":"S1","fromStore":"A","toStore":"B","sku":"K1","quantity":1,"priority":"Low","costSaving":"$10"}]"#,
    )
    .unwrap();

    inventra(&dir)
        .arg("--seed")
        .arg(&seed)
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Suggestions: 1"));
}

#[test]
fn config_file_and_environment_are_layered() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("inventra.toml");
    fs::write(&config, "pages = [\"dashboard\"]\n").unwrap();

    inventra(&dir)
        .args(["--config", "inventra.toml", "summary"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing feature slice"));

    inventra(&dir)
        .args(["--config", "inventra.toml", "summary"])
        .env("INVENTRA__PAGES", "transfers")
        .assert()
        .success();
}

#[test]
fn missing_config_file_fails() {
    let dir = TempDir::new().unwrap();
    inventra(&dir)
        .args(["--config", "absent.toml", "summary"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration is malformed"));
}
