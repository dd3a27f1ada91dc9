//! Tree command integration tests

mod common;

use predicates::prelude::*;

use common::TestProject;

#[test]
fn test_tree_without_project_fails() {
    let project = TestProject::new();

    project
        .cmd()
        .arg("tree")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: No packgraph project found at:"));
}

#[test]
fn test_tree_prints_folders_and_totals() {
    let project = TestProject::new();
    project.write_sized("textures/logo.png", 100);
    project.write_sized("textures/icons/save.png", 50);
    project.write_sized("scenes/intro.scene", 30);
    project.cmd().arg("scan").assert().success();

    project
        .cmd()
        .arg("tree")
        .assert()
        .success()
        .stdout(predicate::str::contains("(3 assets, 180 B)"))
        .stdout(predicate::str::contains("textures/ (2 assets, 150 B)"))
        .stdout(predicate::str::contains("icons/ (1 assets, 50 B)"))
        .stdout(predicate::str::contains("scenes/ (1 assets, 30 B)"))
        .stdout(predicate::str::contains("logo.png 100 B"))
        .stdout(predicate::str::contains("intro.scene 30 B"));
}

#[test]
fn test_tree_tags_assigned_assets() {
    let project = TestProject::new();
    project.write_sized("textures/logo.png", 100);
    project.cmd().arg("scan").assert().success();
    project
        .cmd()
        .args(["add", "ui", "textures/logo.png"])
        .assert()
        .success();

    project
        .cmd()
        .arg("tree")
        .assert()
        .success()
        .stdout(predicate::str::contains("logo.png 100 B [ui]"));
}

#[test]
fn test_tree_marks_invalid_assets() {
    let project = TestProject::new();
    project.write_sized("textures/logo.png", 10);
    project.write_sized("game.cs", 10);
    project.cmd().arg("scan").assert().success();

    project
        .cmd()
        .arg("tree")
        .assert()
        .success()
        .stdout(predicate::str::contains("game.cs 10 B (invalid)"));
}

#[test]
fn test_tree_empty_project() {
    let project = TestProject::initialized();

    project
        .cmd()
        .arg("tree")
        .assert()
        .success()
        .stdout(predicate::str::contains("No assets found."));
}
