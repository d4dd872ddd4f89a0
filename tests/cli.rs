use assert_cmd::Command;
use predicates::prelude::*;

fn punchcard() -> Command {
    let mut cmd = Command::cargo_bin("punchcard").unwrap();
    cmd.arg("--no-banner");
    cmd
}

#[test]
fn test_single_interval_day() {
    punchcard()
        .write_stdin("8:00am-5:00pm\n1:00pm-1:00pm\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("START:\t08:00am"))
        .stdout(predicate::str::contains("END:\t05:00pm"))
        .stdout(predicate::str::contains("WORKED:\t09 hours and 00 minutes."))
        .stdout(predicate::str::contains("ACTUAL TIME:\t09 hours and 00 minutes."))
        .stdout(predicate::str::contains("ROUNDED TIME:\t9.00 hours."));
}

#[test]
fn test_multi_interval_day_rounds_up() {
    punchcard()
        .write_stdin("9:00am-1:00pm, 2:00pm-4:30pm, 6:10pm-9:20pm\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("WORKED:\t04 hours and 00 minutes."))
        .stdout(predicate::str::contains("WORKED:\t02 hours and 30 minutes."))
        .stdout(predicate::str::contains("WORKED:\t03 hours and 10 minutes."))
        .stdout(predicate::str::contains("ACTUAL TIME:\t09 hours and 40 minutes."))
        .stdout(predicate::str::contains("ROUNDED TIME:\t9.75 hours."));
}

#[test]
fn test_overnight_shift_wraps_past_midnight() {
    punchcard()
        .write_stdin("8:00pm-7:59pm\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("ACTUAL TIME:\t23 hours and 59 minutes."))
        .stdout(predicate::str::contains("ROUNDED TIME:\t24.00 hours."));
}

#[test]
fn test_sentinel_reports_nothing() {
    punchcard()
        .write_stdin("1:00pm-1:00pm\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("START:\t01:00pm"))
        .stdout(predicate::str::contains("ACTUAL TIME").not())
        .stdout(predicate::str::contains("ROUNDED TIME").not());
}

#[test]
fn test_malformed_time_diagnosed_then_session_continues() {
    punchcard()
        .write_stdin("13:00pm-2:00pm\n8:00AM-5:00PM\n")
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "HOUR TOO BIG: \"13\", should be less than 13.",
        ))
        .stderr(predicate::str::contains(
            "Something was wrong with your given start time!",
        ))
        .stdout(predicate::str::contains("ACTUAL TIME:\t09 hours and 00 minutes."));
}

#[test]
fn test_multiple_violations_in_one_entry() {
    punchcard()
        .write_stdin("0:99am-2:00pm\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("HOUR TOO SMALL: \"0\""))
        .stderr(predicate::str::contains("MINUTE TOO BIG: \"99\""));
}

#[test]
fn test_uppercase_meridiem_equivalent() {
    let upper = punchcard()
        .write_stdin("8:00AM-5:00PM\n")
        .assert()
        .success();
    let upper_out = String::from_utf8_lossy(&upper.get_output().stdout).into_owned();

    let lower = punchcard()
        .write_stdin("8:00am-5:00pm\n")
        .assert()
        .success();
    let lower_out = String::from_utf8_lossy(&lower.get_output().stdout).into_owned();

    assert_eq!(upper_out, lower_out);
}

#[test]
fn test_empty_input_exits_cleanly() {
    punchcard().write_stdin("").assert().success();
}

#[test]
fn test_banner_shown_by_default() {
    Command::cargo_bin("punchcard")
        .unwrap()
        .write_stdin("1:00pm-1:00pm\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome to PUNCHCARD!"));
}
