use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;

fn clusterpath() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("clusterpath"));
    cmd.env_remove("CLUSTERPATH_SERVER")
        .env_remove("CLUSTERPATH_CONFIG")
        .env_remove("RUST_LOG");
    cmd
}

/// A command whose config lives in a fresh temp dir.
fn isolated(dir: &TempDir) -> Command {
    let mut cmd = clusterpath();
    cmd.current_dir(dir.path())
        .env("CLUSTERPATH_CONFIG", config_path(dir.path()));
    cmd
}

fn config_path(dir: &Path) -> std::path::PathBuf {
    dir.join("config.json")
}

#[test]
fn help_flag() {
    clusterpath()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("clusterpath").and(predicate::str::contains("--dry-run")));
}

#[test]
fn version_flag() {
    clusterpath()
        .args(["--version"])
        .assert()
        .success()
        .stdout(predicate::str::contains("clusterpath"));
}

#[test]
fn ws_help() {
    clusterpath()
        .args(["ws", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("current").and(predicate::str::contains("use")));
}

#[test]
fn validate_accepts_rooted_names() {
    clusterpath()
        .args(["validate", "-o", "plain", "root:foo", "system:bar"])
        .assert()
        .success()
        .stdout("root:foo\tyes\nsystem:bar\tyes\n");
}

#[test]
fn validate_fails_on_any_invalid_name() {
    clusterpath()
        .args(["validate", "-o", "json", "root", "foo:bar"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("\"valid\": false"))
        .stderr(predicate::str::contains("1 of 2 cluster name(s) invalid"));
}

#[test]
fn parse_url_plain() {
    clusterpath()
        .args([
            "parse-url",
            "-o",
            "plain",
            "https://host/clusters/root:foo/abc",
        ])
        .assert()
        .success()
        .stdout("https://host\nroot:foo\n");
}

#[test]
fn parse_url_json_for_workspaces_path() {
    clusterpath()
        .args([
            "parse-url",
            "-o",
            "json",
            "https://host/services/workspaces/root:foo:bar",
        ])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("\"base\": \"https://host\"")
                .and(predicate::str::contains("\"cluster\": \"root:foo:bar\"")),
        );
}

#[test]
fn parse_url_rejects_unrooted_cluster() {
    clusterpath()
        .args(["parse-url", "https://host/clusters/abc:def"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not pointing to a cluster workspace"));
}

#[test]
fn parse_url_rejects_garbage() {
    clusterpath()
        .args(["parse-url", "garbage"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "invalid URL: relative URL without a base",
        ));
}

#[test]
fn parse_url_keeps_base_as_written() {
    clusterpath()
        .args([
            "parse-url",
            "-o",
            "plain",
            "https://Host:443/a/../clusters/root%3Afoo",
        ])
        .assert()
        .success()
        .stdout("https://Host:443/a/..\nroot:foo\n");
}

#[test]
fn ws_set_rejects_garbage_with_library_error() {
    let dir = TempDir::new().unwrap();
    isolated(&dir)
        .args(["ws", "set", "garbage"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("invalid URL"));
}

#[test]
fn qualify_from_flags() {
    clusterpath()
        .args([
            "qualify",
            "--cluster",
            "cool-cluster",
            "--namespace",
            "cool-namespace",
            "cool-name",
        ])
        .assert()
        .success()
        .stdout("cool-cluster|cool-namespace/cool-name\n");

    clusterpath()
        .args(["qualify", "--cluster", "cool-cluster", "cool-name"])
        .assert()
        .success()
        .stdout("cool-cluster|cool-name\n");
}

#[test]
fn qualify_from_stdin() {
    clusterpath()
        .args(["qualify", "-f", "-"])
        .write_stdin(
            r#"{"metadata":{"name":"cm","namespace":"default","annotations":{"kcp.dev/cluster":"root:org"}}}"#,
        )
        .assert()
        .success()
        .stdout("root:org|default/cm\n");
}

#[test]
fn qualify_requires_name_or_file() {
    clusterpath().args(["qualify"]).assert().failure();
}

#[test]
fn selector() {
    clusterpath()
        .args(["selector", "cool-ws"])
        .assert()
        .success()
        .stdout("workspaces.kcp.dev/name=cool-ws\n");
}

#[test]
fn quiet_suppresses_output() {
    clusterpath()
        .args(["-q", "selector", "cool-ws"])
        .assert()
        .success()
        .stdout("");
}

#[test]
fn ws_current_without_config() {
    let dir = TempDir::new().unwrap();
    isolated(&dir)
        .args(["ws", "current"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No workspace configured"));
}

#[test]
fn ws_current_from_env() {
    let dir = TempDir::new().unwrap();
    isolated(&dir)
        .env("CLUSTERPATH_SERVER", "https://host:6443/clusters/root:org")
        .args(["ws", "current", "-o", "plain"])
        .assert()
        .success()
        .stdout("https://host:6443\nroot:org\n");
}

#[test]
fn ws_navigation() {
    let dir = TempDir::new().unwrap();

    isolated(&dir)
        .args(["ws", "set", "https://host/clusters/root"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"root\""));

    isolated(&dir)
        .args(["ws", "use", "org"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"root:org\""));

    isolated(&dir)
        .args(["ws", "use", "team"])
        .assert()
        .success();

    isolated(&dir)
        .args(["ws", "current", "-o", "plain"])
        .assert()
        .success()
        .stdout("https://host\nroot:org:team\n");

    isolated(&dir)
        .args(["ws", "use", ".."])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"root:org\""));

    isolated(&dir)
        .args(["ws", "use", "-"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"root:org:team\""));

    isolated(&dir)
        .args(["ws", "use", ":system:admin"])
        .assert()
        .success();

    let saved = std::fs::read_to_string(config_path(dir.path())).unwrap();
    assert!(saved.contains("https://host/clusters/system:admin"));
}

#[test]
fn ws_use_rejects_invalid_target() {
    let dir = TempDir::new().unwrap();
    isolated(&dir)
        .args(["ws", "set", "https://host/clusters/root"])
        .assert()
        .success();

    isolated(&dir)
        .args(["ws", "use", "Bad_Name"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not a valid workspace"));

    isolated(&dir)
        .args(["ws", "use", ".."])
        .assert()
        .failure()
        .stderr(predicate::str::contains("has no parent"));
}

#[test]
fn ws_dry_run_does_not_write() {
    let dir = TempDir::new().unwrap();
    isolated(&dir)
        .args(["--dry-run", "ws", "set", "https://host/clusters/root"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Would save server https://host/clusters/root"));
    assert!(!config_path(dir.path()).exists());
}

#[test]
fn ws_clear() {
    let dir = TempDir::new().unwrap();
    isolated(&dir)
        .args(["ws", "set", "https://host/clusters/root"])
        .assert()
        .success();
    isolated(&dir).args(["ws", "clear"]).assert().success();
    assert!(!config_path(dir.path()).exists());
}

#[test]
fn completions_bash() {
    clusterpath()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("clusterpath"));
}

#[test]
fn completions_zsh() {
    clusterpath()
        .args(["completions", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("clusterpath"));
}
