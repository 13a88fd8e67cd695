//! Check command integration tests

mod common;

use predicates::prelude::*;

#[test]
fn test_check_well_formed_document() {
    let workspace = common::TestWorkspace::new();
    let input = workspace.write_file("config.yml", "a: 1\nb: [2, 3]\n");

    common::deanchor_cmd()
        .arg("check")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("nothing to resolve"));
}

#[test]
fn test_check_reports_merge_keys() {
    let workspace = common::TestWorkspace::new();
    let input = workspace.write_file("config.yml", "base: &b {a: 1}\nderived: {<<: *b}\n");

    common::deanchor_cmd()
        .arg("check")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("contains merge keys"));
}

#[test]
fn test_check_malformed_document() {
    let workspace = common::TestWorkspace::new();
    let input = workspace.write_file("broken.yml", "a: [unclosed\n");

    common::deanchor_cmd()
        .arg("check")
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse document"));
}

#[test]
fn test_check_missing_file() {
    let workspace = common::TestWorkspace::new();

    common::deanchor_cmd()
        .arg("check")
        .arg(workspace.path.join("missing.yml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn test_check_writes_no_files() {
    let workspace = common::TestWorkspace::new();
    workspace.write_file("config.yml", "a: 1\n");

    common::deanchor_cmd()
        .arg("check")
        .arg(workspace.path.join("config.yml"))
        .assert()
        .success();

    let entries: Vec<_> = std::fs::read_dir(&workspace.path).unwrap().collect();
    assert_eq!(entries.len(), 1);
}
