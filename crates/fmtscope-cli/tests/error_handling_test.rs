mod common;
use common::{broken_ops_snapshot, TestFixture};

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn missing_snapshot_file_fails_with_context() {
    Command::cargo_bin("fmtscope")
        .unwrap()
        .args(["report", "/nonexistent/run.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load snapshot"));
}

#[test]
fn unparseable_file_fails_with_context() {
    let fixture = TestFixture::with_snapshot(serde_json::Value::Null);
    // Overwrite with text that is not JSON at all.
    std::fs::write(fixture.snapshot_path(), "not json").unwrap();

    fixture
        .command(&["report"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load snapshot"));
}

#[test]
fn single_panel_command_fails_when_its_panel_is_broken() {
    let fixture = TestFixture::with_snapshot(broken_ops_snapshot());
    fixture
        .command(&["ops"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("ops panel"));
}

#[test]
fn other_panel_commands_still_work_with_a_broken_panel() {
    let fixture = TestFixture::with_snapshot(broken_ops_snapshot());
    let (stdout, _) = fixture.run(&["input"]);
    assert_eq!(stdout, "int x=1;int yy=22;\n");
    let (stdout, _) = fixture.run(&["doc"]);
    assert!(stdout.contains("\"assignment\""));
}

#[test]
fn help_lists_every_subcommand() {
    Command::cargo_bin("fmtscope")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("report")
                .and(predicate::str::contains("input"))
                .and(predicate::str::contains("output"))
                .and(predicate::str::contains("ops"))
                .and(predicate::str::contains("doc"))
                .and(predicate::str::contains("decisions"))
                .and(predicate::str::contains("tui")),
        );
}

#[test]
fn unknown_subcommand_is_rejected() {
    Command::cargo_bin("fmtscope")
        .unwrap()
        .arg("frobnicate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}
