//! End-to-end tests for the `piggybank` binary.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn piggybank(data_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("piggybank").unwrap();
    cmd.env("PIGGYBANK_DATA_DIR", data_dir)
        .env_remove("PIGGYBANK_LOG");
    cmd
}

/// A data directory whose settings select English
fn english_data_dir() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("settings.json"),
        r#"{"language": "en"}"#,
    )
    .unwrap();
    temp_dir
}

#[test]
fn test_deposit_withdraw_balance() {
    let dir = english_data_dir();

    piggybank(dir.path())
        .args(["deposit", "12,50"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "12.50€ deposited. New balance: 12.50€",
        ));

    piggybank(dir.path())
        .args(["withdraw", "0.25"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "0.25€ withdrawn. New balance: 12.25€",
        ));

    piggybank(dir.path())
        .arg("balance")
        .assert()
        .success()
        .stdout(predicate::str::contains("Current Balance: 12.25€"));

    let stored = fs::read_to_string(dir.path().join("balance.txt")).unwrap();
    assert_eq!(stored.trim(), "12.25");
}

#[test]
fn test_overdraw_fails_without_changes() {
    let dir = english_data_dir();

    piggybank(dir.path())
        .args(["withdraw", "5"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "Error: Not enough money in the piggy bank!",
        ));

    assert!(!dir.path().join("withdrawals.json").exists());
}

#[test]
fn test_invalid_amount_is_reported() {
    let dir = english_data_dir();

    piggybank(dir.path())
        .args(["deposit", "abc"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid input, please try again."));
}

#[test]
fn test_strict_amounts_rejects_negative() {
    let dir = english_data_dir();

    piggybank(dir.path())
        .args(["--strict-amounts", "deposit", "-5"])
        .assert()
        .code(1);

    piggybank(dir.path())
        .args(["deposit", "10"])
        .assert()
        .success();

    piggybank(dir.path())
        .args(["deposit", "-5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("New balance: 5.00€"));
}

#[test]
fn test_history_lists_recent_records() {
    let dir = english_data_dir();

    piggybank(dir.path())
        .args(["history", "--kind", "deposits"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No transactions yet."));

    for amount in ["1", "2", "3"] {
        piggybank(dir.path())
            .args(["deposit", amount])
            .assert()
            .success();
    }

    piggybank(dir.path())
        .args(["history", "--limit", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Recent deposits"))
        .stdout(predicate::str::contains("3.00€"))
        .stdout(predicate::str::contains("6.00€"))
        .stdout(predicate::str::contains("1.00€").not())
        .stdout(predicate::str::contains("Recent withdrawals"));
}

#[test]
fn test_interactive_menu() {
    let dir = english_data_dir();

    piggybank(dir.path())
        .arg("--cli")
        .write_stdin("1\n10,50\n2\n20\n3\n4\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("How much do you want to deposit?"))
        .stdout(predicate::str::contains("10.50€ deposited."))
        .stdout(predicate::str::contains(
            "Error: Not enough money in the piggy bank!",
        ))
        .stdout(predicate::str::contains("Current Balance: 10.50€"))
        .stdout(predicate::str::contains("Exiting the program."));
}

#[test]
fn test_defaults_to_german() {
    let dir = TempDir::new().unwrap();

    piggybank(dir.path())
        .arg("balance")
        .assert()
        .success()
        .stdout(predicate::str::contains("Aktueller Kontostand: 0.00€"));
}

#[test]
fn test_data_dir_flag_overrides_env() {
    let env_dir = english_data_dir();
    let flag_dir = english_data_dir();

    piggybank(env_dir.path())
        .arg("--data-dir")
        .arg(flag_dir.path())
        .args(["deposit", "4"])
        .assert()
        .success();

    assert!(flag_dir.path().join("balance.txt").exists());
    assert!(!env_dir.path().join("balance.txt").exists());
}

#[test]
fn test_config_shows_paths_and_settings() {
    let dir = english_data_dir();

    piggybank(dir.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Data directory:"))
        .stdout(predicate::str::contains("Language:    en"))
        .stdout(predicate::str::contains("Currency:    €"));
}
