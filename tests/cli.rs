use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use rstest::*;

#[fixture]
fn work_dir() -> tempfile::TempDir {
    tempfile::tempdir().unwrap()
}

fn run_in(dir: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_linesort"))
        .current_dir(dir)
        .output()
        .unwrap()
}

#[rstest]
#[case("Zelda\nMario\nIco\n", "Ico\nMario\nZelda\n")]
#[case("Mario\nIco\nMario\n", "Ico\nMario\nMario\n")]
#[case("", "")]
fn test_sorts_games(work_dir: tempfile::TempDir, #[case] input: &str, #[case] expected: &str) {
    fs::write(work_dir.path().join("Games.txt"), input).unwrap();

    let output = run_in(work_dir.path());

    assert!(output.status.success());
    let sorted = fs::read_to_string(work_dir.path().join("Games_sorted.txt")).unwrap();
    assert_eq!(sorted, expected);
    assert!(linesort::is_sorted(&linesort::split_lines(&sorted)));
}

#[rstest]
fn test_missing_input(work_dir: tempfile::TempDir) {
    let output = run_in(work_dir.path());

    assert!(!output.status.success());
    assert!(!work_dir.path().join("Games_sorted.txt").exists());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Games.txt"), "stderr: {}", stderr);
}

#[rstest]
fn test_missing_input_keeps_old_output(work_dir: tempfile::TempDir) {
    let old = work_dir.path().join("Games_sorted.txt");
    fs::write(&old, "Pong\n").unwrap();

    let output = run_in(work_dir.path());

    assert!(!output.status.success());
    assert_eq!(fs::read_to_string(&old).unwrap(), "Pong\n");
}

#[rstest]
fn test_invalid_utf8(work_dir: tempfile::TempDir) {
    fs::write(work_dir.path().join("Games.txt"), b"Ico\n\xc3\x28\n").unwrap();

    let output = run_in(work_dir.path());

    assert!(!output.status.success());
    assert!(!work_dir.path().join("Games_sorted.txt").exists());
}
