//! Binary-level CLI tests for `blp`.
//!
//! TUI launch itself is not covered here (it needs a terminal); these tests
//! exercise the preset and config subcommands end to end.

use assert_cmd::Command;
use predicates::prelude::*;

fn blp() -> Command {
    Command::cargo_bin("blp").expect("binary should build")
}

#[test]
fn presets_list_prints_all_names() {
    blp()
        .args(["presets", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("standard"))
        .stdout(predicate::str::contains("secret_passage"))
        .stdout(predicate::str::contains("custom"));
}

#[test]
fn presets_show_prints_both_diagrams() {
    blp()
        .args(["presets", "show", "standard"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# placement"))
        .stdout(predicate::str::contains("rnbqkbnr"))
        .stdout(predicate::str::contains("# promotion"))
        .stdout(predicate::str::contains("WWWWWWWW"));
}

#[test]
fn presets_show_json_is_parseable() {
    let output = blp()
        .args(["presets", "show", "hole", "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let value: serde_json::Value =
        serde_json::from_slice(&output).expect("output should be valid JSON");
    assert_eq!(value["name"], "hole");
    assert!(value["placement"]
        .as_str()
        .expect("placement is a string")
        .contains("XX"));
}

#[test]
fn presets_show_rejects_unknown_name() {
    blp()
        .args(["presets", "show", "fortress"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("fortress"));
}

#[test]
fn presets_show_rejects_unknown_format() {
    blp()
        .args(["presets", "show", "standard", "--format", "yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("yaml"));
}

#[test]
fn config_path_prints_config_toml() {
    blp()
        .env("XDG_CONFIG_HOME", "/custom/xdg")
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "/custom/xdg/board-layout-panel/config.toml",
        ));
}

#[test]
fn config_init_creates_file_and_refuses_second_run() {
    let tmp = tempfile::tempdir().expect("failed to create temp dir");
    let xdg = tmp.path().to_str().expect("non-utf8 path");

    blp()
        .env("XDG_CONFIG_HOME", xdg)
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created configuration"));

    blp()
        .env("XDG_CONFIG_HOME", xdg)
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    blp()
        .env("XDG_CONFIG_HOME", xdg)
        .args(["config", "init", "--force"])
        .assert()
        .success();
}

#[test]
fn config_validate_accepts_generated_config() {
    let tmp = tempfile::tempdir().expect("failed to create temp dir");
    let xdg = tmp.path().to_str().expect("non-utf8 path");

    blp()
        .env("XDG_CONFIG_HOME", xdg)
        .args(["config", "init"])
        .assert()
        .success();

    blp()
        .env("XDG_CONFIG_HOME", xdg)
        .args(["config", "validate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid"));
}

#[test]
fn config_validate_reports_parse_position() {
    let tmp = tempfile::tempdir().expect("failed to create temp dir");
    let config_dir = tmp.path().join("board-layout-panel");
    std::fs::create_dir_all(&config_dir).expect("failed to create config dir");
    std::fs::write(config_dir.join("config.toml"), "[panel]\ninitial_layout = 42\n")
        .expect("failed to write config");

    blp()
        .env("XDG_CONFIG_HOME", tmp.path().to_str().expect("non-utf8 path"))
        .args(["config", "validate"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid configuration"));
}

#[test]
fn help_lists_all_subcommands() {
    blp()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("tui"))
        .stdout(predicate::str::contains("presets"))
        .stdout(predicate::str::contains("config"));
}
