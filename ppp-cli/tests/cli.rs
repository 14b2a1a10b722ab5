//! Drives the built `ppp` binary end-to-end against fixture matrix files: an integration test
//! that runs the real binary rather than calling into library code directly.

use std::process::Command;

fn ppp() -> Command {
    Command::new(env!("CARGO_BIN_EXE_ppp"))
}

fn fixture(name: &str) -> String {
    format!("{}/tests/fixtures/{name}", env!("CARGO_MANIFEST_DIR"))
}

#[test]
fn reduces_a_single_universal_pair() {
    let output = ppp().arg(fixture("two_universal.txt")).output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Ok ("));
    assert!(stdout.contains("c1+"));
    assert!(stdout.contains("c2+"));
}

#[test]
fn reduces_incomparable_sources_in_standard_mode() {
    let output = ppp().arg(fixture("incomparable.txt")).output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("Ok ("));
}

#[test]
fn exponential_flag_also_finds_a_reduction() {
    let output = ppp()
        .arg("--exponential")
        .arg(fixture("incomparable.txt"))
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("Ok ("));
}

#[test]
fn malformed_matrix_is_reported_as_a_failure_without_aborting_other_files() {
    let output = ppp()
        .arg(fixture("malformed.txt"))
        .arg(fixture("two_universal.txt"))
        .output()
        .unwrap();
    assert!(!output.status.success(), "one failing file should make the whole run exit non-zero");
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 2, "both files should still be processed");
    assert!(lines[0].starts_with("No ("));
    assert!(lines[1].starts_with("Ok ("));
}

#[test]
fn conflicting_strategy_flags_exit_with_code_one() {
    let output = ppp()
        .arg("--exponential")
        .arg("--interactive")
        .arg(fixture("two_universal.txt"))
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn missing_files_exit_with_code_one() {
    let output = ppp().output().unwrap();
    assert_eq!(output.status.code(), Some(1));
}
