mod common;

use common::trackdeck;
use predicates::prelude::*;
use trackdeck_testing::{sample_snapshot, write_snapshot_file};

#[test]
fn updates_an_existing_goal() {
    let dir = tempfile::tempdir().unwrap();
    let data = write_snapshot_file(dir.path(), &sample_snapshot());

    trackdeck(&data)
        .args([
            "goal",
            "update",
            "--cadence",
            "weekly",
            "--id",
            "50",
            "--description",
            "three coffee chats",
            "--completed",
            "true",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated weekly goal 50."));
}

#[test]
fn unknown_goal_id_fails() {
    let dir = tempfile::tempdir().unwrap();
    let data = write_snapshot_file(dir.path(), &sample_snapshot());

    trackdeck(&data)
        .args(["goal", "update", "--cadence", "daily", "--id", "999"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("daily goal 999 not found"));
}

#[test]
fn creates_a_job_application() {
    let dir = tempfile::tempdir().unwrap();
    let data = write_snapshot_file(dir.path(), &sample_snapshot());

    trackdeck(&data)
        .args([
            "add",
            "job",
            "--title",
            "Compiler Engineer",
            "--company",
            "Oxide",
            "--status",
            "applied",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Saved job application \"Compiler Engineer\".",
        ));
}
