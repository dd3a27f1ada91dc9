//! Redundancy detection through real files with path references

mod common;

use predicates::prelude::*;

use common::TestProject;

/// Two bundles whose scenes both reference the same texture
fn shared_texture_project() -> TestProject {
    let project = TestProject::new();
    project.write_sized("textures/shared.png", 100);

    // Pad the scenes to fixed sizes so the bundle totals are exact.
    let reference = r#"bg = "textures/shared.png""#;
    project.write_file("scenes/a.scene", &format!("{reference}{}", " ".repeat(50 - reference.len())));
    project.write_file("scenes/b.scene", &format!("{reference}{}", " ".repeat(150 - reference.len())));

    project
        .cmd()
        .args(["add", "levels", "scenes/a.scene"])
        .assert()
        .success()
        .stdout(predicate::str::contains("levels now holds 1 asset(s), 150 B"));
    project
        .cmd()
        .args(["add", "menu", "scenes/b.scene"])
        .assert()
        .success()
        .stdout(predicate::str::contains("menu now holds 1 asset(s), 250 B"));

    project
}

#[test]
fn test_shared_dependency_is_reported_redundant() {
    let project = shared_texture_project();

    project
        .cmd()
        .arg("redundant")
        .assert()
        .success()
        .stdout(predicate::str::contains("Redundant assets (1):"))
        .stdout(predicate::str::contains("textures/shared.png (100 B)"))
        .stdout(predicate::str::contains(
            "pulled into levels by 1 direct member(s)",
        ))
        .stdout(predicate::str::contains(
            "pulled into menu by 1 direct member(s)",
        ))
        .stdout(predicate::str::contains("Duplicated size: 100 B"));
}

#[test]
fn test_removing_last_referrer_clears_redundancy() {
    let project = shared_texture_project();

    project
        .cmd()
        .args(["remove", "menu", "scenes/b.scene"])
        .assert()
        .success();

    project
        .cmd()
        .arg("redundant")
        .assert()
        .success()
        .stdout(predicate::str::contains("No redundant assets."));
}

#[test]
fn test_redundancy_survives_rename() {
    let project = shared_texture_project();

    project
        .cmd()
        .args(["rename", "levels", "world"])
        .assert()
        .success();

    project
        .cmd()
        .arg("redundant")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "pulled into world by 1 direct member(s)",
        ))
        .stdout(predicate::str::contains(
            "pulled into menu by 1 direct member(s)",
        ));
}

#[test]
fn test_direct_assignment_suppresses_redundancy() {
    let project = shared_texture_project();

    // Giving the shared texture a direct owner resolves the duplication.
    project
        .cmd()
        .args(["add", "shared", "textures/shared.png"])
        .assert()
        .success();

    project
        .cmd()
        .arg("redundant")
        .assert()
        .success()
        .stdout(predicate::str::contains("No redundant assets."));
}

#[test]
fn test_show_lists_assets_pulled_in_by_dependencies() {
    let project = shared_texture_project();

    project
        .cmd()
        .args(["show", "levels"])
        .assert()
        .success()
        .stdout(predicate::str::contains("levels (1 asset(s), 150 B)"))
        .stdout(predicate::str::contains("scenes/a.scene"))
        .stdout(predicate::str::contains("Pulled in by dependencies:"))
        .stdout(predicate::str::contains("textures/shared.png"))
        .stdout(predicate::str::contains("(1 referrer(s))"));
}

#[test]
fn test_show_verbose_prints_stable_ids() {
    let project = shared_texture_project();

    project
        .cmd()
        .args(["-v", "show", "levels"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pg1:"));
}

#[test]
fn test_json_references_pull_in_dependencies() {
    let project = TestProject::new();
    project.write_sized("textures/logo.png", 30);
    project.write_sized("audio/click.ogg", 20);
    project.write_file(
        "ui/menu.json",
        r#"{"background": "textures/logo.png", "sounds": ["audio/click.ogg"], "title": "Menu"}"#,
    );

    project
        .cmd()
        .args(["add", "ui", "ui/menu.json"])
        .assert()
        .success();

    project
        .cmd()
        .args(["show", "ui"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Pulled in by dependencies:"))
        .stdout(predicate::str::contains("textures/logo.png"))
        .stdout(predicate::str::contains("audio/click.ogg"));
}

#[test]
fn test_transitive_chain_counts_into_bundle_size() {
    let project = TestProject::new();
    project.write_sized("textures/rock.png", 100);

    let material = r#"tex = "textures/rock.png""#;
    project.write_file(
        "materials/rock.material",
        &format!("{material}{}", " ".repeat(50 - material.len())),
    );
    let scene = r#"mat = "materials/rock.material""#;
    project.write_file(
        "scenes/cave.scene",
        &format!("{scene}{}", " ".repeat(40 - scene.len())),
    );

    // 40 (scene) + 50 (material) + 100 (texture), each counted once.
    project
        .cmd()
        .args(["add", "world", "scenes/cave.scene"])
        .assert()
        .success()
        .stdout(predicate::str::contains("world now holds 1 asset(s), 190 B"));
}
