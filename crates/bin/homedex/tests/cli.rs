//! End-to-end tests driving the compiled `homedex` binary over piped stdin.
//!
//! Every test runs inside its own temporary directory so data files, scripts
//! and the optional `homedex.toml` never leak between runs.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const HUE_BULB: &str = "Hue Bulb\n\
                        Philips\n\
                        netherlands\n\
                        1891\n\
                        70000\n\
                        https://philips.com\n\
                        light\n\
                        living room\n\
                        9.5\n\
                        19.99\n\
                        2\n\
                        zigbee\n\
                        2024-03-09\n\
                        yes\n\
                        dimmable\n\
                        \n";

fn homedex(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("homedex").unwrap();
    cmd.current_dir(dir)
        .env_remove("HOMEDEX_FILE")
        .env_remove("HOMEDEX_CONFIG")
        .env_remove("HOMEDEX_LOG")
        .env_remove("RUST_LOG");
    cmd
}

fn workspace() -> TempDir {
    tempfile::tempdir().unwrap()
}

// ---------------------------------------------------------------------------
// Startup
// ---------------------------------------------------------------------------

#[test]
fn should_start_empty_and_exit_successfully_when_data_file_is_missing() {
    let dir = workspace();

    homedex(dir.path())
        .arg("devices.json")
        .write_stdin("show\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("no data file found at devices.json"))
        .stdout(predicate::str::contains("collection is empty"));
}

#[test]
fn should_read_data_file_from_environment() {
    let dir = workspace();

    homedex(dir.path())
        .env("HOMEDEX_FILE", "from-env.json")
        .write_stdin("info\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("data file:      from-env.json"));
}

#[test]
fn should_fall_back_to_config_file_when_no_path_is_given() {
    let dir = workspace();
    fs::write(
        dir.path().join("homedex.toml"),
        "[storage]\nfile = 'configured.json'\n",
    )
    .unwrap();

    homedex(dir.path())
        .write_stdin("info\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("data file:      configured.json"));
}

#[test]
fn should_fail_with_exit_code_one_when_config_is_malformed() {
    let dir = workspace();
    fs::write(dir.path().join("homedex.toml"), "invalid {{{").unwrap();

    homedex(dir.path())
        .arg("devices.json")
        .write_stdin("exit\n")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to parse config file"));
}

#[test]
fn should_start_empty_when_data_file_is_corrupt() {
    let dir = workspace();
    fs::write(dir.path().join("devices.json"), "not json at all").unwrap();

    homedex(dir.path())
        .arg("devices.json")
        .write_stdin("show\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("error: could not load devices.json"))
        .stdout(predicate::str::contains("collection is empty"));
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

#[test]
fn should_list_commands_on_help() {
    let dir = workspace();

    homedex(dir.path())
        .arg("devices.json")
        .write_stdin("help\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("available commands:"))
        .stdout(predicate::str::contains("execute_script"))
        .stdout(predicate::str::contains("print_unique_field"));
}

#[test]
fn should_keep_running_after_unknown_command() {
    let dir = workspace();

    homedex(dir.path())
        .arg("devices.json")
        .write_stdin("launch rockets\ninfo\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("error: unknown command 'launch'"))
        .stdout(predicate::str::contains("devices:        0"));
}

#[test]
fn should_persist_inserted_device_across_runs() {
    let dir = workspace();

    homedex(dir.path())
        .arg("devices.json")
        .write_stdin(format!("insert\n{HUE_BULB}save\nexit\n"))
        .assert()
        .success()
        .stdout(predicate::str::contains("device inserted with id 1"))
        .stdout(predicate::str::contains("saved 1 device(s) to devices.json"));

    assert!(dir.path().join("devices.json").exists());

    homedex(dir.path())
        .arg("devices.json")
        .write_stdin("show\nprint_unique_field room\ninsert\n".to_string() + HUE_BULB + "exit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("loaded 1 device(s) from devices.json"))
        .stdout(predicate::str::contains("Device #1 \"Hue Bulb\""))
        .stdout(predicate::str::contains("distinct room values:\n  LIVING_ROOM"))
        .stdout(predicate::str::contains("device inserted with id 2"));
}

#[test]
fn should_not_write_data_file_without_save() {
    let dir = workspace();

    homedex(dir.path())
        .arg("devices.json")
        .write_stdin(format!("insert\n{HUE_BULB}exit\n"))
        .assert()
        .success();

    assert!(!dir.path().join("devices.json").exists());
}

#[test]
fn should_report_missing_script() {
    let dir = workspace();

    homedex(dir.path())
        .arg("devices.json")
        .write_stdin("execute_script missing.txt\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("error: script file 'missing.txt' not found"));
}

#[test]
fn should_run_script_and_stop_at_its_exit() {
    let dir = workspace();
    fs::write(
        dir.path().join("batch.txt"),
        "# wipe everything\nclear\n\ninfo\nexit\nhelp\n",
    )
    .unwrap();

    homedex(dir.path())
        .arg("devices.json")
        .write_stdin("execute_script batch.txt\nhelp\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("$ clear\ncollection cleared, 0 device(s) removed"))
        .stdout(predicate::str::contains("$ info"))
        .stdout(predicate::str::contains("available commands:").not());
}

#[test]
fn should_refuse_script_that_runs_itself() {
    let dir = workspace();
    fs::write(dir.path().join("loop.txt"), "execute_script loop.txt\ninfo\n").unwrap();

    homedex(dir.path())
        .arg("devices.json")
        .write_stdin("execute_script loop.txt\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("error: script 'loop.txt' is already running"))
        .stdout(predicate::str::contains("$ info"));
}

#[test]
fn should_exit_successfully_at_end_of_input() {
    let dir = workspace();

    homedex(dir.path())
        .arg("devices.json")
        .write_stdin("info\n")
        .assert()
        .success();
}
