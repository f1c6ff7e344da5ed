mod common;

use common::trackdeck;
use predicates::prelude::*;
use trackdeck_testing::{job_batch_snapshot, write_snapshot_file};

#[test]
fn out_of_range_page_clamps_to_last() {
    let dir = tempfile::tempdir().unwrap();
    let data = write_snapshot_file(dir.path(), &job_batch_snapshot(23));

    trackdeck(&data)
        .args(["list", "jobs", "--page", "5", "--page-size", "10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("page 3/3"))
        .stdout(predicate::str::contains("Role 21"))
        .stdout(predicate::str::contains("Role 23"))
        .stdout(predicate::str::contains("Role 20 ").not());
}

#[test]
fn page_index_strip_marks_the_current_page() {
    let dir = tempfile::tempdir().unwrap();
    let data = write_snapshot_file(dir.path(), &job_batch_snapshot(23));

    trackdeck(&data)
        .args(["list", "jobs", "--page", "2", "--page-size", "10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 [2] 3"));
}

#[test]
fn long_page_ranges_elide_with_ellipsis() {
    let dir = tempfile::tempdir().unwrap();
    let data = write_snapshot_file(dir.path(), &job_batch_snapshot(100));

    trackdeck(&data)
        .args(["list", "jobs", "--page", "5", "--page-size", "10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 ... 4 [5] 6 ... 10"));
}

#[test]
fn page_size_changes_the_window() {
    let dir = tempfile::tempdir().unwrap();
    let data = write_snapshot_file(dir.path(), &job_batch_snapshot(23));

    trackdeck(&data)
        .args(["list", "jobs", "--page-size", "25"])
        .assert()
        .success()
        .stdout(predicate::str::contains("page 1/1"))
        .stdout(predicate::str::contains("Role 23"));
}
