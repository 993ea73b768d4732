//! Integration tests for CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write(path: &Path, content: &str) {
    fs::create_dir_all(path.parent().expect("parent")).expect("mkdir");
    fs::write(path, content).expect("write");
}

/// A project with one declared flag and a local "remote" override tree.
struct Fixture {
    project: TempDir,
    remote: TempDir,
}

impl Fixture {
    fn new() -> Self {
        let project = TempDir::new().expect("tmp project");
        let remote = TempDir::new().expect("tmp remote");
        write(
            &project.path().join("aconfig/config.aconfig"),
            "package: \"a.b\"\n\nflag {\n    name: \"my_flag\"\n}\n",
        );
        write(
            &remote
                .path()
                .join("flag_values/bp1a/RELEASE_ACONFIG_REQUIRE_ALL_READ_ONLY.textproto"),
            "name: \"RELEASE_ACONFIG_REQUIRE_ALL_READ_ONLY\"\nvalue: {\n  bool_value: true\n}\n",
        );
        Fixture { project, remote }
    }

    fn generate(&self) -> Command {
        let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("aconfig-gen"));
        cmd.args([
            "generate",
            "--project-root",
            self.project.path().to_str().expect("utf8"),
            "--repo",
            self.remote.path().to_str().expect("utf8"),
        ]);
        cmd
    }

    fn generated_flags(&self) -> std::path::PathBuf {
        self.project.path().join("build/generated/source/aconfig/a/b/Flags.java")
    }
}

#[test]
fn test_cli_version() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("aconfig-gen"));
    cmd.arg("--version");
    cmd.assert().success().stdout(predicate::str::contains("aconfig-gen"));
}

#[test]
fn test_cli_help() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("aconfig-gen"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("generate"))
        .stdout(predicate::str::contains("order"));
}

#[test]
fn test_generate_requires_repo() {
    let project = TempDir::new().expect("tmp");
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("aconfig-gen"));
    cmd.args(["generate", "--project-root", project.path().to_str().expect("utf8")]);
    cmd.assert().failure().stderr(predicate::str::contains("repo url value is not set"));
}

#[test]
fn test_release_override_generates_enabled_accessor() {
    let fixture = Fixture::new();
    write(
        &fixture.remote.path().join("aconfig/user/a.b/enable.textproto"),
        "name: \"my_flag\"\npackage: \"a.b\"\npermission: \"READ_ONLY\"\nstate: \"ENABLED\"\n",
    );

    fixture.generate().assert().success();

    let content = fs::read_to_string(fixture.generated_flags()).expect("generated file");
    assert!(content.contains("public static boolean myFlag()"));
    assert!(content.contains("return true;"));
}

#[test]
fn test_debug_mode_without_overrides_defaults_to_false() {
    let fixture = Fixture::new();

    fixture.generate().arg("--debuggable").assert().success();

    let content = fs::read_to_string(fixture.generated_flags()).expect("generated file");
    assert!(content.contains("public static boolean myFlag()"));
    assert!(content.contains("return false;"));
}

#[test]
fn test_package_mismatch_fails_and_writes_nothing() {
    let fixture = Fixture::new();
    write(
        &fixture.remote.path().join("aconfig/user/a.b/rogue.textproto"),
        "name: \"my_flag\"\npackage: \"x.y\"\nstate: \"ENABLED\"\n",
    );

    fixture
        .generate()
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not match the package name"));

    assert!(!fixture.generated_flags().exists(), "no output may be written on failure");
}

#[test]
fn test_missing_policy_file_fails() {
    let fixture = Fixture::new();
    fs::remove_file(
        fixture
            .remote
            .path()
            .join("flag_values/bp1a/RELEASE_ACONFIG_REQUIRE_ALL_READ_ONLY.textproto"),
    )
    .expect("remove policy file");

    fixture
        .generate()
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing or corrupted"));
}

#[test]
fn test_read_write_flag_rejected_when_gate_active() {
    let fixture = Fixture::new();
    // bool_value false flips the exposed gate to active.
    write(
        &fixture
            .remote
            .path()
            .join("flag_values/bp1a/RELEASE_ACONFIG_REQUIRE_ALL_READ_ONLY.textproto"),
        "name: \"RELEASE_ACONFIG_REQUIRE_ALL_READ_ONLY\"\nvalue: {\n  bool_value: false\n}\n",
    );
    write(
        &fixture.remote.path().join("aconfig/user/a.b/writable.textproto"),
        "name: \"my_flag\"\npermission: \"READ_WRITE\"\nstate: \"ENABLED\"\n",
    );

    fixture
        .generate()
        .assert()
        .failure()
        .stderr(predicate::str::contains("read-write flag"));
}

#[test]
fn test_generate_twice_produces_identical_output() {
    let fixture = Fixture::new();
    write(
        &fixture.remote.path().join("aconfig/user/a.b/enable.textproto"),
        "name: \"my_flag\"\nstate: \"ENABLED\"\n",
    );

    fixture.generate().assert().success();
    let first = fs::read_to_string(fixture.generated_flags()).expect("first run");
    fixture.generate().assert().success();
    let second = fs::read_to_string(fixture.generated_flags()).expect("second run");
    assert_eq!(first, second);
}

#[test]
fn test_report_written_without_timestamp() {
    let fixture = Fixture::new();
    let report = fixture.project.path().join("build/report.json");

    fixture
        .generate()
        .args(["--report", report.to_str().expect("utf8"), "--no-timestamp"])
        .assert()
        .success();

    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&report).expect("report")).expect("json");
    assert_eq!(value["packages"][0]["package"], "a.b");
    assert!(value["generated_at"].is_null());
}

#[test]
fn test_order_release_ends_with_user() {
    let project = TempDir::new().expect("tmp");
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("aconfig-gen"));
    cmd.args(["order", "--project-root", project.path().to_str().expect("utf8")]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("root"))
        .stdout(predicate::str::ends_with("user\n"));
}

#[test]
fn test_order_debug_includes_extras_in_order() {
    let project = TempDir::new().expect("tmp");
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("aconfig-gen"));
    cmd.args([
        "order",
        "--project-root",
        project.path().to_str().expect("utf8"),
        "--debuggable",
        "--debug-folder",
        "team_x,team_y",
    ]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("userdebug\neng\nteam_x\nteam_y\n"));
}

#[test]
fn test_config_file_supplies_repo_and_extras() {
    let fixture = Fixture::new();
    write(
        &fixture.project.path().join("aconfig.toml"),
        &format!(
            "textproto_repo = \"{}\"\ncustom_release_build_values = [\"stable\"]\n",
            fixture.remote.path().display()
        ),
    );
    write(
        &fixture.remote.path().join("aconfig/stable/a.b/enable.textproto"),
        "name: \"my_flag\"\nstate: \"ENABLED\"\n",
    );

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("aconfig-gen"));
    cmd.args(["generate", "--project-root", fixture.project.path().to_str().expect("utf8")]);
    cmd.assert().success();

    let content = fs::read_to_string(fixture.generated_flags()).expect("generated file");
    assert!(content.contains("return true;"), "stable folder override must apply");
}
