//! Scan command integration tests

mod common;

use predicates::prelude::*;

use common::TestProject;

#[test]
fn test_scan_initializes_project() {
    let project = TestProject::new();

    project
        .cmd()
        .arg("scan")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Scanned 0 files: 0 assets (0 invalid), 0 ignored",
        ))
        .stdout(predicate::str::contains("Total size: 0 B"))
        .stdout(predicate::str::contains("Bundles: 0 (0 assets assigned)"));

    assert!(project.file_exists(".packgraph/config.yaml"));
    assert!(project.read_file(".packgraph/config.yaml").contains("ignore"));
}

#[test]
fn test_scan_counts_assets_and_sizes() {
    let project = TestProject::new();
    project.write_sized("textures/ui/ok.png", 100);
    project.write_sized("textures/bg.png", 50);
    project.write_sized("theme.ogg", 30);

    project
        .cmd()
        .arg("scan")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Scanned 3 files: 3 assets (0 invalid), 0 ignored",
        ))
        .stdout(predicate::str::contains("Total size: 180 B"));
}

#[test]
fn test_scan_prunes_blacklisted_folders() {
    let project = TestProject::new();
    project.write_sized("ok.png", 10);
    project.write_sized(".git/HEAD", 10);
    project.write_sized("Library/cache.png", 10);
    project.write_sized("Editor/tool.png", 10);

    project
        .cmd()
        .arg("scan")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Scanned 1 files: 1 assets (0 invalid), 0 ignored",
        ));
}

#[test]
fn test_scan_marks_invalid_extensions() {
    let project = TestProject::new();
    project.write_sized("ok.png", 10);
    project.write_sized("game.cs", 10);
    project.write_sized("engine.dll", 10);

    project
        .cmd()
        .arg("scan")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Scanned 3 files: 3 assets (2 invalid), 0 ignored",
        ));
}

#[test]
fn test_scan_honors_configured_ignores() {
    let project = TestProject::new();
    project.write_file(".packgraph/config.yaml", "ignore:\n  - \"drafts/**\"\n");
    project.write_sized("drafts/wip.png", 10);
    project.write_sized("final.png", 10);

    project
        .cmd()
        .arg("scan")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Scanned 2 files: 1 assets (0 invalid), 1 ignored",
        ));
}

#[test]
fn test_scan_reports_assigned_bundles() {
    let project = TestProject::new();
    project.write_sized("textures/logo.png", 40);
    project.write_sized("audio/theme.ogg", 60);

    project
        .cmd()
        .args(["add", "ui", "textures/logo.png"])
        .assert()
        .success();
    project
        .cmd()
        .args(["add", "music", "audio/theme.ogg"])
        .assert()
        .success();

    project
        .cmd()
        .arg("scan")
        .assert()
        .success()
        .stdout(predicate::str::contains("Bundles: 2 (2 assets assigned)"));
}
