//! CLI end-to-end tests that invoke the compiled `droidpatch` binary.

use assert_cmd::Command;
use droid_test_utils::TestProject;
use droid_test_utils::fixtures::{CAPACITOR_BUILD_GRADLE, GENERATED_CAPACITOR_GRADLE};
use droid_test_utils::project::{BUILD_GRADLE, VERSION_FILE};
use predicates::prelude::*;
use pretty_assertions::assert_eq;

/// `droidpatch` with a clean, colorless environment, run inside `project`.
fn droidpatch(project: &TestProject) -> Command {
    let mut cmd = Command::cargo_bin("droidpatch").unwrap();
    cmd.current_dir(project.root())
        .env("NO_COLOR", "1")
        .env_remove("DROIDPATCH_PROJECT")
        .env_remove("DROIDPATCH_CONFIG")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_help_exits_zero() {
    let project = TestProject::new();

    droidpatch(&project)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("apply"))
        .stdout(predicate::str::contains("bump-version"));
}

#[test]
fn test_version_flag() {
    let project = TestProject::new();

    droidpatch(&project)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("droidpatch"));
}

#[test]
fn test_no_command_prints_hint() {
    let project = TestProject::new();

    droidpatch(&project)
        .assert()
        .success()
        .stdout(predicate::str::contains("droidpatch --help"));
}

#[test]
fn test_apply_patches_and_is_idempotent() {
    let project = TestProject::new()
        .with_capacitor_build_gradle()
        .with_version(42, "2.3.1");

    droidpatch(&project)
        .arg("apply")
        .assert()
        .success()
        .stdout(predicate::str::contains("Signing configuration applied"));
    let first = project.read_bytes(BUILD_GRADLE);

    droidpatch(&project)
        .arg("apply")
        .assert()
        .success()
        .stdout(predicate::str::contains("already present"));

    assert_eq!(project.read_bytes(BUILD_GRADLE), first);
    project.assert_file_contains(BUILD_GRADLE, "versionCode 42");
}

#[test]
fn test_missing_build_file_exits_nonzero() {
    let project = TestProject::new();

    droidpatch(&project)
        .arg("apply")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("error"))
        .stderr(predicate::str::contains("build.gradle"));
}

#[test]
fn test_missing_release_anchor_exits_nonzero_and_writes_nothing() {
    let original = "apply plugin: 'com.android.application'\nandroid {\n    buildTypes {\n    }\n}\n";
    let project = TestProject::new().with_build_gradle(original);

    droidpatch(&project)
        .arg("signing")
        .assert()
        .failure()
        .stderr(predicate::str::contains("release build type"));

    assert_eq!(project.read_bytes(BUILD_GRADLE), original.as_bytes());
}

#[test]
fn test_java_version_reports_skipped_targets() {
    let project = TestProject::new()
        .with_file("android/app/capacitor.build.gradle", GENERATED_CAPACITOR_GRADLE);

    let assert = droidpatch(&project).arg("java-version").assert().success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).into_owned();

    assert_eq!(stdout.matches("SKIP").count(), 2, "{stdout}");
    project.assert_file_contains(
        "android/app/capacitor.build.gradle",
        "JavaVersion.VERSION_17",
    );
}

#[test]
fn test_dry_run_json_reports_without_writing() {
    let project = TestProject::new().with_capacitor_build_gradle();

    let assert = droidpatch(&project)
        .args(["apply", "--dry-run", "--json"])
        .assert()
        .success();

    let report: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(report["dry_run"], true);
    assert_eq!(report["build_file_changed"], true);
    assert_eq!(report["signing"]["status"], "applied");
    assert_eq!(report["version"]["status"], "skipped");
    assert_eq!(project.read(BUILD_GRADLE), CAPACITOR_BUILD_GRADLE);
}

#[test]
fn test_bump_version_then_stamp() {
    let project = TestProject::new()
        .with_capacitor_build_gradle()
        .with_version(41, "2.3.1");

    droidpatch(&project)
        .arg("bump-version")
        .assert()
        .success()
        .stdout(predicate::str::contains("41 -> 42"));

    droidpatch(&project).arg("stamp-version").assert().success();

    project.assert_file_contains(VERSION_FILE, "\"versionCode\": 42");
    project.assert_file_contains(BUILD_GRADLE, "versionCode 42");
    project.assert_file_contains(BUILD_GRADLE, "versionName \"2.3.1\"");
}

#[test]
fn test_project_flag_from_elsewhere() {
    let project = TestProject::new().with_capacitor_build_gradle();
    let elsewhere = TestProject::new();

    droidpatch(&elsewhere)
        .args(["check", "--json", "-C"])
        .arg(project.root())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"build_file_exists\": true"));
}

#[test]
fn test_config_file_overrides_properties_path() {
    let project = TestProject::new()
        .with_capacitor_build_gradle()
        .with_file(
            "droidpatch.toml",
            "[signing]\nproperties_file = \"keystore/upload.properties\"\n",
        );

    droidpatch(&project).arg("signing").assert().success();

    project.assert_file_contains(BUILD_GRADLE, "rootProject.file(\"keystore/upload.properties\")");
}
