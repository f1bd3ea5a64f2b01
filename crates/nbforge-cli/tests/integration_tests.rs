//! Integration tests for nbforge-cli.
//!
//! Each test runs the real binary in a temp directory with `--config`
//! pointed at a nonexistent file, so a developer's own configuration can
//! never leak into assertions.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const NO_CONFIG: &[&str] = &["--config", "/nonexistent/nbforge-test-config.toml"];

fn nbforge() -> Command {
    let mut cmd = Command::cargo_bin("nbforge").unwrap();
    cmd.args(NO_CONFIG);
    cmd
}

#[test]
fn help_lists_subcommands() {
    let mut cmd = Command::cargo_bin("nbforge").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("new"))
        .stdout(predicate::str::contains("hook"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn version_flag() {
    let mut cmd = Command::cargo_bin("nbforge").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn new_with_defaults_creates_expected_tree() {
    let temp = TempDir::new().unwrap();

    nbforge()
        .current_dir(temp.path())
        .args(["new", "acme-dns-sync", "--author", "Jane Doe", "--yes"])
        .assert()
        .success();

    let root = temp.path().join("acme-dns-sync");
    assert!(root.join("LICENSE").exists()); // default license is Apache-2.0
    assert!(root.join("pyproject.toml").exists());
    assert!(root.join("acme_dns_sync/__init__.py").exists());
    assert!(root.join("acme_dns_sync/api/views.py").exists());
    assert!(root.join("acme_dns_sync/graphql.py").exists());
    // The dev container defaults to off, so the hook removed it.
    assert!(!root.join(".devcontainer").exists());
}

#[test]
fn new_honours_declined_options() {
    let temp = TempDir::new().unwrap();

    nbforge()
        .current_dir(temp.path())
        .args([
            "new",
            "acme-dns-sync",
            "--no-rest-api",
            "--no-graphql",
            "--devcontainer",
            "--yes",
        ])
        .assert()
        .success();

    let root = temp.path().join("acme-dns-sync");
    assert!(!root.join("acme_dns_sync/api/views.py").exists());
    assert!(!root.join("acme_dns_sync/api/urls.py").exists());
    assert!(!root.join("acme_dns_sync/tests/test_api.py").exists());
    assert!(!root.join("acme_dns_sync/graphql.py").exists());
    assert!(!root.join("acme_dns_sync/tests/test_graphql.py").exists());
    // Kept: the api package, its serializer, and the dev container.
    assert!(root.join("acme_dns_sync/api/serializers.py").exists());
    assert!(root.join(".devcontainer/configuration/plugins.py").exists());
}

#[test]
fn new_not_open_source_drops_license() {
    let temp = TempDir::new().unwrap();

    nbforge()
        .current_dir(temp.path())
        .args(["new", "acme-dns-sync", "--license", "not-open-source", "--yes"])
        .assert()
        .success();

    let root = temp.path().join("acme-dns-sync");
    assert!(!root.join("LICENSE").exists());
    assert!(root.join("README.md").exists());
}

#[test]
fn new_dry_run_creates_nothing() {
    let temp = TempDir::new().unwrap();

    nbforge()
        .current_dir(temp.path())
        .args(["new", "acme-dns-sync", "--dry-run", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run"));

    assert!(!temp.path().join("acme-dns-sync").exists());
}

#[test]
fn new_refuses_existing_directory() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("acme-dns-sync")).unwrap();

    nbforge()
        .current_dir(temp.path())
        .args(["new", "acme-dns-sync", "--yes"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn new_force_overwrites_existing_directory() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("acme-dns-sync");
    fs::create_dir(&root).unwrap();
    fs::write(root.join("stale.txt"), "old").unwrap();

    nbforge()
        .current_dir(temp.path())
        .args(["new", "acme-dns-sync", "--yes", "--force"])
        .assert()
        .success();

    assert!(!root.join("stale.txt").exists());
    assert!(root.join("pyproject.toml").exists());
}

#[test]
fn new_rejects_invalid_name() {
    let temp = TempDir::new().unwrap();

    nbforge()
        .current_dir(temp.path())
        .args(["new", ".hidden", "--yes"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Invalid plugin name"));
}

#[test]
fn new_json_report() {
    let temp = TempDir::new().unwrap();

    nbforge()
        .current_dir(temp.path())
        .args(["new", "acme-dns-sync", "--yes", "--output-format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"run_id\""))
        .stdout(predicate::str::contains("\"files_written\""));
}

#[test]
fn quiet_new_prints_nothing() {
    let temp = TempDir::new().unwrap();

    nbforge()
        .current_dir(temp.path())
        .args(["-q", "new", "acme-dns-sync", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

// ── hook ──────────────────────────────────────────────────────────────────────

fn write_answers(dir: &std::path::Path, graphql: &str) -> std::path::PathBuf {
    let path = dir.join("answers.toml");
    fs::write(
        &path,
        format!(
            "project_name = \"acme dns sync\"\n\
             open_source_license = \"MIT\"\n\
             include_rest_api = \"yes\"\n\
             include_graphql = \"{graphql}\"\n\
             devcontainer = \"True\"\n"
        ),
    )
    .unwrap();
    path
}

#[test]
fn hook_removes_declined_files_and_is_not_idempotent() {
    let temp = TempDir::new().unwrap();

    // Generate with everything enabled: the in-run hook removes nothing.
    nbforge()
        .current_dir(temp.path())
        .args([
            "new",
            "acme-dns-sync",
            "--license",
            "mit",
            "--devcontainer",
            "--yes",
        ])
        .assert()
        .success();

    let root = temp.path().join("acme-dns-sync");
    assert!(root.join("acme_dns_sync/graphql.py").exists());

    // Standalone hook with graphql declined removes the schema + test.
    let answers = write_answers(temp.path(), "no");
    nbforge()
        .args(["hook", "--answers"])
        .arg(&answers)
        .arg("--root")
        .arg(&root)
        .assert()
        .success()
        .stdout(predicate::str::contains("Cleanup complete"));

    assert!(!root.join("acme_dns_sync/graphql.py").exists());
    assert!(!root.join("acme_dns_sync/tests/test_graphql.py").exists());

    // Running the hook a second time must FAIL: the targets are gone and
    // the hook performs no existence checks (fail-fast, exit 3).
    nbforge()
        .args(["hook", "--answers"])
        .arg(&answers)
        .arg("--root")
        .arg(&root)
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("Path not found"));
}

#[test]
fn hook_with_nothing_to_remove_succeeds() {
    let temp = TempDir::new().unwrap();

    nbforge()
        .current_dir(temp.path())
        .args([
            "new",
            "acme-dns-sync",
            "--license",
            "mit",
            "--devcontainer",
            "--yes",
        ])
        .assert()
        .success();

    let answers = write_answers(temp.path(), "yes");
    nbforge()
        .args(["hook", "--answers"])
        .arg(&answers)
        .arg("--root")
        .arg(temp.path().join("acme-dns-sync"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing to remove"));
}

#[test]
fn hook_rejects_malformed_answer_values() {
    let temp = TempDir::new().unwrap();
    let answers = temp.path().join("answers.toml");
    fs::write(
        &answers,
        "project_name = \"acme\"\ndevcontainer = \"maybe\"\n",
    )
    .unwrap();

    nbforge()
        .args(["hook", "--answers"])
        .arg(&answers)
        .arg("--root")
        .arg(temp.path())
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Invalid answer"));
}

#[test]
fn hook_rejects_missing_root() {
    let temp = TempDir::new().unwrap();
    let answers = write_answers(temp.path(), "no");

    nbforge()
        .args(["hook", "--answers"])
        .arg(&answers)
        .arg("--root")
        .arg(temp.path().join("not-generated"))
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("is not a directory"));
}

// ── completions / config ──────────────────────────────────────────────────────

#[test]
fn shell_completions() {
    let mut cmd = Command::cargo_bin("nbforge").unwrap();
    cmd.args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("complete"));
}

#[test]
fn config_list_shows_defaults() {
    nbforge()
        .args(["config", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Apache-2.0"));
}

#[test]
fn config_get_unknown_key_exits_with_config_code() {
    nbforge()
        .args(["config", "get", "does.not.exist"])
        .assert()
        .failure()
        .code(4);
}
