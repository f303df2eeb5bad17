//! CLI integration tests
//!
//! Drive the `carshare` binary end to end over stdin/stdout against a store
//! file in a temporary directory.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

fn run_cli(dir: &Path, args: &[&str], stdin: &str) -> Output {
    let cli_bin = env!("CARGO_BIN_EXE_carshare");

    let mut child = Command::new(cli_bin)
        .current_dir(dir)
        .args(args)
        .env_remove("CARSHARE_DB")
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to execute CLI");

    // The process may exit before reading everything.
    let _ = child.stdin.take().unwrap().write_all(stdin.as_bytes());

    child.wait_with_output().unwrap()
}

#[test]
fn test_default_store_created_in_working_dir() {
    let temp_dir = TempDir::new().unwrap();

    let output = run_cli(temp_dir.path(), &[], "0\n");

    assert!(output.status.success());
    assert!(temp_dir.path().join("carsharing.db").is_file());
    assert!(String::from_utf8_lossy(&output.stdout).starts_with("1. Log in as a manager\n"));
}

#[test]
fn test_data_survives_between_runs() {
    let temp_dir = TempDir::new().unwrap();
    let args = ["--database-file-name", "fleet.db", "--db-dir", "nested/dir"];

    let first = run_cli(temp_dir.path(), &args, "1\n2\nSixt\n0\n3\nAlice\n0\n");
    assert!(first.status.success());

    let second = run_cli(temp_dir.path(), &args, "1\n1\n0\n0\n0\n");
    let stdout = String::from_utf8_lossy(&second.stdout);

    assert!(second.status.success());
    assert!(temp_dir.path().join("nested/dir/fleet.db").is_file());
    assert!(stdout.contains("Choose the company:\n1. Sixt\n0. Back\n"));
}

#[test]
fn test_legacy_flag_names_store_file() {
    let temp_dir = TempDir::new().unwrap();

    let output = run_cli(temp_dir.path(), &["-databaseFileName", "legacy.db"], "");

    assert!(output.status.success());
    assert!(temp_dir.path().join("legacy.db").is_file());
}

#[test]
fn test_dump_prints_json() {
    let temp_dir = TempDir::new().unwrap();
    run_cli(temp_dir.path(), &[], "3\nAlice\n0\n");

    let output = run_cli(temp_dir.path(), &["--dump"], "");
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();

    assert!(output.status.success());
    assert_eq!(value["customers"][0]["name"], "Alice");
    assert_eq!(value["companies"].as_array().unwrap().len(), 0);
}

#[test]
fn test_unusable_store_exits_with_error() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::create_dir(temp_dir.path().join("carsharing.db")).unwrap();

    let output = run_cli(temp_dir.path(), &[], "0\n");
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr.contains("Error: Cannot initialize store"));
}

#[test]
fn test_recoverable_errors_stay_off_stderr() {
    let temp_dir = TempDir::new().unwrap();

    let output = run_cli(temp_dir.path(), &[], "1\n2\nSixt\n2\nSixt\n2\n  \n0\n0\n");
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("A company named 'Sixt' already exists\n"));
    assert!(stdout.contains("Company name can't be empty!\n"));
    assert!(
        output.stderr.is_empty(),
        "unexpected stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}
