//! End-to-end CLI integration tests.

use assert_cmd::Command;
use predicates::prelude::*;

fn ecalc() -> Command {
    let mut cmd = Command::cargo_bin("ecalc").expect("binary not found");
    cmd.env_remove("ECALC_WORKERS");
    cmd
}

#[test]
fn help_flag() {
    ecalc()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Euler"));
}

#[test]
fn version_flag() {
    ecalc()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("ecalc"));
}

#[test]
fn ten_digits_quiet() {
    ecalc()
        .args(["10", "-q"])
        .assert()
        .success()
        .stdout("2.7182818285\n");
}

#[test]
fn ten_digits_three_workers() {
    ecalc()
        .args(["10", "-q", "--workers", "3"])
        .assert()
        .success()
        .stdout("2.7182818285\n");
}

#[test]
fn normal_mode_frames_the_result() {
    ecalc()
        .args(["5", "--workers", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Workers: 2"))
        .stdout(predicate::str::contains("e = 2.71828"));
}

#[test]
fn verbose_mode() {
    ecalc()
        .args(["5", "-v", "--workers", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Precision:"));
}

#[test]
fn zero_digits() {
    ecalc().args(["0", "-q"]).assert().success().stdout("3\n");
}

#[test]
fn missing_digits_fails_with_usage() {
    ecalc()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn non_numeric_digits_fails() {
    ecalc().arg("many").assert().failure();
}

#[test]
fn hundred_digits_many_workers() {
    ecalc()
        .args(["100", "-q", "--workers", "8"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "2.7182818284590452353602874713526624977572470936999595749669676277240766303535475945713821785251664274",
        ));
}

#[test]
fn output_file() {
    let tmp = tempfile::TempDir::new().unwrap();
    let path = tmp.path().join("e.txt");
    ecalc()
        .args(["10", "-q", "-o", path.to_str().unwrap()])
        .assert()
        .success();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "2.7182818285");
}

#[test]
fn env_var_workers() {
    let mut cmd = Command::cargo_bin("ecalc").expect("binary not found");
    cmd.env("ECALC_WORKERS", "2")
        .args(["10", "-q"])
        .assert()
        .success()
        .stdout("2.7182818285\n");
}
