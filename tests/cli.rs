// tests/cli.rs
use assert_cmd::Command;
use predicates::str::contains;
use std::fs;
use tempfile::TempDir;

fn cmd() -> Command {
    Command::cargo_bin("mars-rover").unwrap()
}

fn mission_file(dir: &TempDir, body: &str) -> String {
    let path = dir.path().join("mission.txt");
    fs::write(&path, body).expect("write mission file");
    path.to_string_lossy().into_owned()
}

#[test]
fn test_no_args_prints_usage() {
    cmd()
        .assert()
        .success()
        .stdout(contains("Run with the input file as a single argument"));
}

#[test]
fn test_missing_file_fails() {
    cmd()
        .arg("does/not/exist.txt")
        .assert()
        .code(1)
        .stderr(contains("Input file does/not/exist.txt does not exist"));
}

#[test]
fn test_runs_sample_mission() {
    let dir = TempDir::new().unwrap();
    let input = mission_file(&dir, "5 5\n1 2 N\nLMLMLMLMM\n3 3 E\nMMRMMRMRRM\n");

    cmd()
        .arg(&input)
        .assert()
        .success()
        .stdout("1 3 N\n5 1 E\n");
}

#[test]
fn test_json_output() {
    let dir = TempDir::new().unwrap();
    let input = mission_file(&dir, "10 10\n1 2 E\nMMMMMMMMMMM\n");

    let out = cmd()
        .args(["--json", input.as_str()])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let value: serde_json::Value = serde_json::from_slice(&out).expect("valid json output");
    assert_eq!(value["ok"], true);
    assert_eq!(value["data"][0]["x"], 10);
    assert_eq!(value["data"][0]["y"], 2);
    assert_eq!(value["data"][0]["heading"], "E");
}

#[test]
fn test_validation_failure_prints_nothing_on_stdout() {
    let dir = TempDir::new().unwrap();
    let input = mission_file(&dir, "5 5\n1 2 N\nM\n1 1 E\nMXM\n");

    cmd()
        .arg(&input)
        .assert()
        .code(1)
        .stdout("")
        .stderr(contains("move not valid: X in MXM"))
        .stderr(contains("see README.md"));
}

#[test]
fn test_two_line_file_is_malformed() {
    let dir = TempDir::new().unwrap();
    let input = mission_file(&dir, "5 5\n1 2 N\n");

    cmd()
        .arg(&input)
        .assert()
        .code(1)
        .stderr(contains("input incomplete"));
}

#[test]
fn test_edge_landing_flag() {
    let dir = TempDir::new().unwrap();
    let input = mission_file(&dir, "3 3\n0 0 E\nM\n");

    cmd().arg(&input).assert().code(1).stderr(contains("not positive"));
    cmd()
        .args(["--allow-edge-landing", input.as_str()])
        .assert()
        .success()
        .stdout("1 0 E\n");
}

#[test]
fn test_demo_mission_file() {
    cmd()
        .arg("demos/sample_mission.txt")
        .assert()
        .success()
        .stdout(contains("1 3 N"))
        .stdout(contains("5 1 E"));
}
