//! End-to-end tests for the `finmath` binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn finmath() -> Command {
    let mut cmd = Command::cargo_bin("finmath").unwrap();
    cmd.env_remove("FINMATH_FORMAT")
        .env_remove("FINMATH_ROUNDING")
        .env_remove("FINMATH_STRICT")
        .env_remove("RUST_LOG");
    cmd
}

// ============================================================================
// Interactive Session
// ============================================================================

#[test]
fn test_session_prompts_and_evaluates() {
    finmath()
        .write_stdin("pmt\n350000 360 0.0030208333333333333\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Enter function to execute or help for list or quit to exit",
        ))
        .stdout(predicate::str::contains(
            "Enter PV, # of periods and rate per period",
        ))
        .stdout(predicate::str::contains("PMT: 1596.179557 RTC(PMT): 1596.18"));
}

#[test]
fn test_session_survives_bad_input_and_ends_at_eof() {
    finmath()
        .arg("--quiet")
        .write_stdin("pmtfs 5000 500 5\nnope\npmtfs 5000 500 5 0.07\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Incorrect input: pmtfs expects 4 values, got 3"))
        .stdout(predicate::str::contains("unknown command: nope"))
        .stdout(predicate::str::contains("RTC(PMTFS): 747.51"));
}

#[test]
fn test_session_explicit_repl_command() {
    finmath()
        .args(["--quiet", "repl"])
        .write_stdin("help\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("pvg:"))
        .stdout(predicate::str::contains("pmtg:"));
}

// ============================================================================
// One-shot Evaluation
// ============================================================================

#[test]
fn test_eval_minimal() {
    finmath()
        .args(["--format", "minimal", "eval", "pmtf", "5000", "5", "0.07"])
        .assert()
        .success()
        .stdout("869.45\n");
}

#[test]
fn test_eval_negative_periods() {
    finmath()
        .args(["-f", "minimal", "eval", "ci", "1440", "-2", "0.2"])
        .assert()
        .success()
        .stdout("1000.00\n");
}

#[test]
fn test_eval_json() {
    finmath()
        .args(["--format", "json", "eval", "PV", "1200", "180", "0.00375"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"function\": \"PV\""))
        .stdout(predicate::str::contains("\"rounded\": 156864.12"))
        .stdout(predicate::str::contains("\"rounding\": \"nearest\""));
}

#[test]
fn test_eval_table() {
    finmath()
        .args(["eval", "pmtfs", "5000", "500", "5", "0.07"])
        .assert()
        .success()
        .stdout(predicate::str::contains("SV"))
        .stdout(predicate::str::contains("RTC(PMTFS)"))
        .stdout(predicate::str::contains("747.51"));
}

#[test]
fn test_eval_truncate_from_env() {
    finmath()
        .env("FINMATH_ROUNDING", "truncate")
        .args(["-f", "minimal", "eval", "rtc", "1.119"])
        .assert()
        .success()
        .stdout("1.12\n");

    finmath()
        .env("FINMATH_ROUNDING", "truncate")
        .args(["-f", "minimal", "eval", "ftc", "1.119"])
        .assert()
        .success()
        .stdout("1.11\n");
}

#[test]
fn test_eval_zero_rate() {
    finmath()
        .args(["-f", "minimal", "eval", "pmt", "350000", "360", "0"])
        .assert()
        .success()
        .stdout("NaN\n");

    finmath()
        .args(["--strict", "eval", "pmt", "350000", "360", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("PMT is undefined"));
}

#[test]
fn test_eval_errors() {
    finmath()
        .args(["eval", "npv", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown command: npv"));

    finmath()
        .args(["eval", "pmt", "350000", "360"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("pmt expects 3 values, got 2"));

    finmath()
        .args(["eval", "rtc", "twelve"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid number: \"twelve\""));
}

// ============================================================================
// Listing
// ============================================================================

#[test]
fn test_list_csv() {
    finmath()
        .args(["--format", "csv", "list"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("command,function,parameters,description"))
        .stdout(predicate::str::contains("pmtfs,PMTFS,"));
}
