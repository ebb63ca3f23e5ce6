use assert_cmd::Command;
use predicates::prelude::PredicateBooleanExt;
use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;

fn oppdb(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("oppdb").unwrap();
    cmd.env("OPPDB_HOME", home)
        .env_remove("OPPDB_DB")
        .env("NO_COLOR", "1")
        .current_dir(home);
    cmd
}

fn add_engineer(home: &Path) {
    oppdb(home)
        .args([
            "add",
            "--type",
            "Job Opportunity",
            "--org",
            "Acme",
            "--title",
            "Engineer",
            "--address",
            "Manila",
            "--deadline",
            "March 1",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Entry saved (1): Engineer"));
}

#[test]
fn fresh_board_lists_nothing_then_first_entry_gets_id_one() {
    let home = TempDir::new().unwrap();

    oppdb(home.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No opportunities yet."));

    add_engineer(home.path());

    oppdb(home.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Engineer @ Acme"))
        .stdout(predicate::str::contains("Job Opportunity"));

    assert!(home.path().join("opportunities.db").exists());
}

#[test]
fn tldr_marks_missing_price_and_salary() {
    let home = TempDir::new().unwrap();
    add_engineer(home.path());

    oppdb(home.path())
        .args(["tldr", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Engineer (Job Opportunity)"))
        .stdout(predicate::str::contains("Price: N/A | Salary: N/A"))
        .stdout(predicate::str::contains("Deadline: March 1"));
}

#[test]
fn digest_uses_compact_layout() {
    let home = TempDir::new().unwrap();
    add_engineer(home.path());

    oppdb(home.path())
        .args(["tldr", "--digest"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[Job Opportunity] Engineer by Acme"))
        .stdout(predicate::str::contains("Reg Deadline: March 1"));
}

#[test]
fn blank_organization_is_rejected_and_nothing_is_stored() {
    let home = TempDir::new().unwrap();

    oppdb(home.path())
        .args(["add", "--org", "", "--title", "Engineer"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Validation"));

    oppdb(home.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No opportunities yet."));
}

#[test]
fn edit_changes_only_the_given_field() {
    let home = TempDir::new().unwrap();
    add_engineer(home.path());

    oppdb(home.path())
        .args(["edit", "1", "--address", "Cebu"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Entry updated (1): Engineer"));

    oppdb(home.path())
        .args(["view", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cebu"))
        .stdout(predicate::str::contains("Manila").not())
        .stdout(predicate::str::contains("Acme"))
        .stdout(predicate::str::contains("March 1"));
}

#[test]
fn editing_a_missing_entry_fails() {
    let home = TempDir::new().unwrap();

    oppdb(home.path())
        .args(["edit", "7", "--price", "100"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found: 7"));
}

#[test]
fn manual_tldr_replaces_generated_card_until_cleared() {
    let home = TempDir::new().unwrap();
    add_engineer(home.path());

    oppdb(home.path())
        .args(["edit", "1", "--tldr", "Hiring now, apply early"])
        .assert()
        .success();
    oppdb(home.path())
        .args(["tldr", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Hiring now, apply early"))
        .stdout(predicate::str::contains("Price: N/A").not());

    oppdb(home.path())
        .args(["edit", "1", "--clear-tldr"])
        .assert()
        .success();
    oppdb(home.path())
        .args(["tldr", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Price: N/A | Salary: N/A"));
}

#[test]
fn list_filters_by_type_and_search() {
    let home = TempDir::new().unwrap();
    add_engineer(home.path());
    oppdb(home.path())
        .args(["add", "--type", "ojt", "--org", "Globex", "--title", "Intern"])
        .assert()
        .success();

    oppdb(home.path())
        .args(["list", "--type", "OJT"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Intern @ Globex"))
        .stdout(predicate::str::contains("Engineer").not());

    oppdb(home.path())
        .args(["ls", "-s", "manila"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Engineer @ Acme"))
        .stdout(predicate::str::contains("Intern").not());
}

#[test]
fn export_csv_writes_header_and_rows() {
    let home = TempDir::new().unwrap();
    add_engineer(home.path());
    let out = home.path().join("board.csv");

    oppdb(home.path())
        .args(["export", "--format", "csv", "--output"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 1 entries"));

    let content = std::fs::read_to_string(&out).unwrap();
    let mut lines = content.lines();
    assert!(lines.next().unwrap().starts_with("Type,Organization,Opportunity"));
    assert!(lines.next().unwrap().starts_with("Job Opportunity,Acme,Engineer,Manila"));
}

#[test]
fn export_of_empty_board_writes_nothing() {
    let home = TempDir::new().unwrap();
    let out = home.path().join("empty.txt");

    oppdb(home.path())
        .args(["export", "-o"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("No entries to export."));

    assert!(!out.exists());
}

#[test]
fn public_board_cannot_write() {
    let home = TempDir::new().unwrap();
    add_engineer(home.path());

    oppdb(home.path())
        .args(["--public", "add", "--org", "Acme", "--title", "Second"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("read-only board"));

    oppdb(home.path())
        .args(["--public", "config", "database", "other.db"])
        .assert()
        .failure();

    oppdb(home.path())
        .args(["--public", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Engineer @ Acme"))
        .stdout(predicate::str::contains("Second").not());
}

#[test]
fn config_default_type_applies_to_new_entries() {
    let home = TempDir::new().unwrap();

    oppdb(home.path())
        .args(["config", "default-type", "ojt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("default-type set to OJT"));

    oppdb(home.path())
        .args(["add", "--org", "Globex", "--title", "Intern"])
        .assert()
        .success();

    oppdb(home.path())
        .args(["tldr", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Intern (OJT)"));
}

#[test]
fn db_flag_points_at_another_file() {
    let home = TempDir::new().unwrap();
    let other = home.path().join("nested").join("other.db");

    oppdb(home.path())
        .arg("--db")
        .arg(&other)
        .args(["add", "--org", "Acme", "--title", "Engineer"])
        .assert()
        .success();

    assert!(other.exists());
    oppdb(home.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No opportunities yet."));
}

#[test]
fn init_reports_table_creation_then_up_to_date() {
    let home = TempDir::new().unwrap();

    oppdb(home.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created opportunities table"));

    oppdb(home.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("up to date"));
}

#[test]
fn public_board_opens_a_fresh_database_but_refuses_init() {
    let home = TempDir::new().unwrap();

    oppdb(home.path())
        .args(["--public", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No opportunities yet."));
    assert!(home.path().join("opportunities.db").exists());

    oppdb(home.path())
        .args(["--public", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("read-only board"));
}

#[test]
fn whitespace_organization_is_accepted() {
    let home = TempDir::new().unwrap();

    oppdb(home.path())
        .args(["add", "--org", " ", "--title", "Volunteer"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Entry saved (1): Volunteer"));
}
