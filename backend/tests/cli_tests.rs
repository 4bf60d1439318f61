//! Exit codes and messages of the `arcade-machines` binary.
#![cfg(feature = "cli")]

use std::fs;
use std::process::Command;

mod support;

use support::{output_target, session_file, SCENARIOS};

fn arcade() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_arcade-machines"));
    command
        .env_remove("ARCADE_STRATEGY")
        .env_remove("ARCADE_INVERTED")
        .env_remove("ARCADE_OVERWRITE");
    command
}

#[test]
fn test_cli_writes_machine_count() {
    let input = session_file(SCENARIOS[1].0);
    let (dir, output) = output_target();

    let status = arcade()
        .current_dir(dir.path())
        .arg(input.path())
        .arg(&output)
        .status()
        .unwrap();

    assert!(status.success());
    assert_eq!(fs::read_to_string(&output).unwrap(), "4\n");
}

#[test]
fn test_cli_strategy_flag() {
    let input = session_file(SCENARIOS[1].0);
    let (dir, output) = output_target();

    let status = arcade()
        .current_dir(dir.path())
        .arg(input.path())
        .arg(&output)
        .args(["--strategy", "sweep"])
        .status()
        .unwrap();

    assert!(status.success());
    assert_eq!(fs::read_to_string(&output).unwrap(), "3\n");
}

#[test]
fn test_cli_missing_arguments() {
    let output = arcade().output().unwrap();
    assert!(!output.status.success());
    assert!(!output.stderr.is_empty());
}

#[test]
fn test_cli_reports_bad_token() {
    let input = session_file(&["900 910", "2500 1000"]);
    let (dir, output) = output_target();

    let result = arcade()
        .current_dir(dir.path())
        .arg(input.path())
        .arg(&output)
        .output()
        .unwrap();

    assert_eq!(result.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("2500"), "stderr: {stderr}");
    assert!(!output.exists());
}

#[test]
fn test_cli_existing_output_needs_force() {
    let input = session_file(SCENARIOS[0].0);
    let (dir, output) = output_target();
    fs::write(&output, "stale\n").unwrap();

    let refused = arcade()
        .current_dir(dir.path())
        .arg(input.path())
        .arg(&output)
        .output()
        .unwrap();
    assert_eq!(refused.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&refused.stderr).contains("file already exists"));
    assert_eq!(fs::read_to_string(&output).unwrap(), "stale\n");

    let forced = arcade()
        .current_dir(dir.path())
        .arg(input.path())
        .arg(&output)
        .arg("--force")
        .status()
        .unwrap();
    assert!(forced.success());
    assert_eq!(fs::read_to_string(&output).unwrap(), "3\n");
}

const INVERTED_SESSIONS: [&str; 3] = ["1000 500", "0000 140", "320 1140"];

#[test]
fn test_cli_strategy_flag_overrides_config_file() {
    let input = session_file(SCENARIOS[1].0);
    let (dir, output) = output_target();
    let config = dir.path().join("custom.toml");
    fs::write(&config, "[counting]\nstrategy = \"sweep\"\n").unwrap();

    let status = arcade()
        .current_dir(dir.path())
        .arg(input.path())
        .arg(&output)
        .arg("--config")
        .arg(&config)
        .args(["--strategy", "pairwise"])
        .status()
        .unwrap();

    assert!(status.success());
    assert_eq!(fs::read_to_string(&output).unwrap(), "4\n");
}

#[test]
fn test_cli_config_flag_missing_file() {
    let input = session_file(SCENARIOS[0].0);
    let (dir, output) = output_target();

    let result = arcade()
        .current_dir(dir.path())
        .arg(input.path())
        .arg(&output)
        .arg("--config")
        .arg(dir.path().join("absent.toml"))
        .output()
        .unwrap();

    assert_eq!(result.status.code(), Some(1));
    assert!(!output.exists());
}

#[test]
fn test_cli_inverted_sessions_need_allow_flag() {
    let input = session_file(&INVERTED_SESSIONS);
    let (dir, output) = output_target();

    let rejected = arcade()
        .current_dir(dir.path())
        .arg(input.path())
        .arg(&output)
        .output()
        .unwrap();
    assert_eq!(rejected.status.code(), Some(1));
    assert!(!output.exists());

    let allowed = arcade()
        .current_dir(dir.path())
        .arg(input.path())
        .arg(&output)
        .arg("--allow-inverted")
        .status()
        .unwrap();
    assert!(allowed.success());
    assert_eq!(fs::read_to_string(&output).unwrap(), "2\n");
}

#[test]
fn test_cli_allow_inverted_overrides_environment() {
    let input = session_file(&INVERTED_SESSIONS);
    let (dir, output) = output_target();

    let status = arcade()
        .env("ARCADE_INVERTED", "reject")
        .current_dir(dir.path())
        .arg(input.path())
        .arg(&output)
        .arg("--allow-inverted")
        .status()
        .unwrap();

    assert!(status.success());
    assert_eq!(fs::read_to_string(&output).unwrap(), "2\n");
}

#[test]
fn test_cli_help_marks_pairwise_as_reference() {
    let result = arcade().arg("--help").output().unwrap();

    assert!(result.status.success());
    let stdout = String::from_utf8_lossy(&result.stdout);
    assert!(stdout.contains("the reference count"), "stdout: {stdout}");
    assert!(stdout.contains("can be lower than the pairwise count"), "stdout: {stdout}");
}
