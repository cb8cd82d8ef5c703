#![cfg(feature = "cli")]

use std::io::{BufRead, BufReader};
use std::process::{Command, Output, Stdio};

fn exercises(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_exercises"))
        .args(args)
        .output()
        .unwrap()
}

#[test]
fn powers_prints_one_value_per_line() {
    let output = exercises(&["powers", "--base", "2", "--limit", "10"]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "1\n2\n4\n8\n");
}

#[test]
fn endless_powers_stream_before_finishing() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_exercises"))
        .args(["powers", "--base", "1", "--limit", "5"])
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .unwrap();

    let stdout = child.stdout.take().unwrap();
    let first: Vec<String> = BufReader::new(stdout)
        .lines()
        .take(3)
        .map(|line| line.unwrap())
        .collect();
    child.kill().unwrap();
    child.wait().unwrap();

    assert_eq!(first, vec!["1", "1", "1"]);
}

#[test]
fn endless_powers_as_json_need_take() {
    let output = exercises(&["--json", "powers", "--base", "0", "--limit", "3"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("--take"));

    let output = exercises(&["--json", "powers", "--base", "0", "--limit", "3", "--take", "3"]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "[1,0,0]");
}

#[test]
fn change_and_quaternion_commands() {
    let output = exercises(&["--json", "change", "41"]);
    assert!(output.status.success());
    let coins: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(coins["25"], 1);
    assert_eq!(coins["10"], 1);
    assert_eq!(coins["1"], 1);

    let output = exercises(&["change", "-5"]);
    assert!(!output.status.success());

    let output = exercises(&["quaternion", "1,2,0,-1"]);
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "1+2i-k");
}
