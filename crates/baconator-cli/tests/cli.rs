//! Command line smoke tests

use assert_cmd::Command;
use predicates::prelude::*;

fn baconator(config: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("baconator").unwrap();
    cmd.env_remove("BACONATOR_ADDR")
        .env_remove("BACONATOR_REFERENCE_ACTOR")
        .arg("--config")
        .arg(config);
    cmd
}

#[test]
fn test_help_lists_commands() {
    Command::cargo_bin("baconator")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn test_config_init_get_set() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");

    baconator(&path)
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created config file"));
    assert!(path.exists());

    baconator(&path)
        .args(["config", "get", "reference_actor"])
        .assert()
        .success()
        .stdout("nm0000102\n");

    baconator(&path)
        .args(["config", "set", "addr", "0.0.0.0:9000"])
        .assert()
        .success();

    baconator(&path)
        .args(["config", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("addr = 0.0.0.0:9000"));

    // Refuses to clobber without --force
    baconator(&path).args(["config", "init"]).assert().failure();
    baconator(&path)
        .args(["config", "init", "--force"])
        .assert()
        .success();
}

#[test]
fn test_config_unknown_key_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");

    baconator(&path)
        .args(["config", "get", "colour"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown config key"));
}

#[test]
fn test_config_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");

    baconator(&path)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}
