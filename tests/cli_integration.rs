#![forbid(unsafe_code)]
#![deny(warnings)]
#![warn(clippy::pedantic)]

use std::process::Command;
use std::time::{Duration, Instant};

fn loadgen() -> Command {
    Command::new(env!("CARGO_BIN_EXE_loadgen"))
}

#[test]
fn missing_arguments_print_usage_and_fail() {
    let output = loadgen().output().expect("spawn");
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Usage"), "stderr: {stderr}");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("allocating"), "stdout: {stdout}");
}

#[test]
fn missing_memory_argument_fails() {
    let output = loadgen()
        .args(["500", "1", "0.5"])
        .output()
        .expect("spawn");
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Usage"), "stderr: {stderr}");
}

#[test]
fn happy_path_runs_for_the_requested_duration() {
    let begun = Instant::now();
    let output = loadgen()
        .args(["300", "1", "0.5", "1"])
        .output()
        .expect("spawn");
    assert_eq!(output.status.code(), Some(0));
    assert!(begun.elapsed() >= Duration::from_millis(300));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("allocating"), "stdout: {stdout}");
    assert!(stdout.contains("exiting"), "stdout: {stdout}");
}

#[test]
fn out_of_range_load_fails() {
    let output = loadgen()
        .args(["300", "1", "1.5", "1"])
        .output()
        .expect("spawn");
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn non_numeric_duration_fails() {
    let output = loadgen()
        .args(["soon", "1", "0.5", "1"])
        .output()
        .expect("spawn");
    assert_eq!(output.status.code(), Some(1));
}
