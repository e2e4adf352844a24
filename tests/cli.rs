//! CLI behavior tests: exit codes, output formats, init.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn tracker_cmd(dir: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_tracker"));
    cmd.current_dir(dir.path()).env_remove("RUST_LOG");
    cmd
}

#[test]
fn exit_prints_banner_and_bye() {
    let dir = TempDir::new().unwrap();
    tracker_cmd(&dir)
        .arg("--no-color")
        .write_stdin("exit\n")
        .assert()
        .success()
        .stdout("Learning Progress Tracker\nBye!\n");
}

#[test]
fn end_of_input_exits_zero() {
    let dir = TempDir::new().unwrap();
    tracker_cmd(&dir)
        .arg("--no-color")
        .write_stdin("list\n")
        .assert()
        .success()
        .stdout(predicate::str::ends_with("No students found.\n"));
}

#[test]
fn full_session_transcript() {
    let dir = TempDir::new().unwrap();
    let input = "add students\n\
                 John Doe johnd@email.net\n\
                 Jane Spark jspark@yahoo.com\n\
                 back\n\
                 add points\n\
                 10000 600 400 0 0\n\
                 10001 5 0 0 0\n\
                 back\n\
                 find\n\
                 10001\n\
                 back\n\
                 notify\n\
                 exit\n";
    tracker_cmd(&dir)
        .arg("--no-color")
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Total 2 students have been added."))
        .stdout(predicate::str::contains(
            "10001 points: Java=5; DSA=0; Databases=0; Spring=0",
        ))
        .stdout(predicate::str::contains(
            "Hello, John Doe! You have accomplished our DSA course!",
        ))
        .stdout(predicate::str::contains("Total 1 students have been notified."))
        .stdout(predicate::str::ends_with("Bye!\n"));
}

#[test]
fn json_flag_emits_one_object_per_line() {
    let dir = TempDir::new().unwrap();
    let output = tracker_cmd(&dir)
        .arg("--json")
        .write_stdin("add students\nJohn Doe johnd@email.net\nbad\nback\nlist\nexit\n")
        .output()
        .unwrap();
    assert!(output.status.success());
    let s = String::from_utf8_lossy(&output.stdout);
    let events: Vec<serde_json::Value> = s
        .lines()
        .map(|line| serde_json::from_str(line).expect("valid JSON"))
        .collect();
    let names: Vec<&str> = events.iter().map(|e| e["event"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["studentAdded", "error", "studentsAdded", "students"]);
    assert_eq!(events[1]["code"], "too-few-tokens");
    assert_eq!(events[3]["ids"][0], 10000);
}

#[test]
fn config_file_selects_json_format() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(".trackerrc.json"), r#"{ "format": "json" }"#).unwrap();
    tracker_cmd(&dir)
        .write_stdin("hello\nexit\n")
        .assert()
        .success()
        .stdout("{\"event\":\"unknownCommand\"}\n");
}

#[test]
fn missing_explicit_config_exit_2() {
    let dir = TempDir::new().unwrap();
    tracker_cmd(&dir)
        .arg("--config")
        .arg("nope.json")
        .write_stdin("exit\n")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Config file not found"));
}

#[test]
fn invalid_config_exit_2() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(".trackerrc.json"), r#"{ "notifications": "pigeon" }"#).unwrap();
    tracker_cmd(&dir)
        .write_stdin("exit\n")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Invalid JSON in config"));
}

#[test]
fn init_creates_config() {
    let dir = TempDir::new().unwrap();
    tracker_cmd(&dir)
        .arg("init")
        .arg("--dir")
        .arg(dir.path())
        .assert()
        .success();
    let content = fs::read_to_string(dir.path().join(".trackerrc.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(value["notifications"], "email");
    assert_eq!(value["format"], "text");
    assert_eq!(value["color"], true);
}

#[test]
fn init_does_not_overwrite() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(".trackerrc.json");
    fs::write(&path, r#"{ "color": false }"#).unwrap();
    tracker_cmd(&dir)
        .arg("init")
        .assert()
        .success()
        .stderr(predicate::str::contains("already exists"));
    assert_eq!(fs::read_to_string(&path).unwrap(), r#"{ "color": false }"#);
}

#[test]
fn verbose_logs_go_to_stderr() {
    let dir = TempDir::new().unwrap();
    tracker_cmd(&dir)
        .args(["--verbose", "--no-color"])
        .write_stdin("add students\nJohn Doe johnd@email.net\nback\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("student registered").not())
        .stderr(predicate::str::contains("student registered"));
}
