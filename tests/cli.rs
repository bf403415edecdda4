//! End-to-end runs of the `ppmrw` binary.
#![cfg(feature = "cli")]

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

fn ppmrw(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_ppmrw"))
        .args(args)
        .output()
        .expect("failed to run ppmrw")
}

fn run(format: &str, input: &Path, output: &Path) -> Output {
    ppmrw(&[format, input.to_str().unwrap(), output.to_str().unwrap()])
}

#[test]
fn converts_p3_to_p6() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.ppm");
    let output = dir.path().join("out.ppm");
    fs::write(&input, "P3\n# red and green\n2 1\n255\n255 0 0 0 255 0\n").unwrap();

    let result = run("6", &input, &output);
    assert!(result.status.success(), "{result:?}");
    assert_eq!(result.status.code(), Some(0));

    let mut expected = b"P6\n2 1\n255\n".to_vec();
    expected.extend_from_slice(&[255, 0, 0, 0, 255, 0]);
    assert_eq!(fs::read(&output).unwrap(), expected);
}

#[test]
fn converts_p6_to_p3() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.ppm");
    let output = dir.path().join("out.ppm");
    let mut data = b"P6\n1 2\n200\n".to_vec();
    data.extend_from_slice(&[10, 20, 30, 200, 0, 1]);
    fs::write(&input, data).unwrap();

    let result = run("3", &input, &output);
    assert!(result.status.success(), "{result:?}");
    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "P3\n1 2\n200\n10 20 30\n200 0 1\n"
    );
}

#[test]
fn bad_input_fails_without_creating_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.ppm");
    let output = dir.path().join("out.ppm");
    fs::write(&input, "P3\n2 1\n255\n255 0 0\n").unwrap();

    let result = run("6", &input, &output);
    assert_eq!(result.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("Error:"), "{stderr}");
    assert!(!output.exists());
}

#[test]
fn missing_input_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let result = run("3", &dir.path().join("nope.ppm"), &dir.path().join("out.ppm"));
    assert_eq!(result.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&result.stderr).contains("unable to open"));
}

#[test]
fn argument_errors_exit_with_one() {
    assert_eq!(ppmrw(&[]).status.code(), Some(1));
    assert_eq!(ppmrw(&["6", "only-input.ppm"]).status.code(), Some(1));
    assert_eq!(ppmrw(&["5", "in.ppm", "out.ppm"]).status.code(), Some(1));
}

#[test]
fn help_exits_cleanly() {
    let result = ppmrw(&["--help"]);
    assert_eq!(result.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&result.stdout).contains("ppmrw"));
}

#[test]
fn max_pixels_limit_is_enforced() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.ppm");
    let output = dir.path().join("out.ppm");
    fs::write(&input, "P3\n2 1\n255\n1 2 3 4 5 6\n").unwrap();

    let result = ppmrw(&[
        "--max-pixels",
        "1",
        "6",
        input.to_str().unwrap(),
        output.to_str().unwrap(),
    ]);
    assert_eq!(result.status.code(), Some(1));
    assert!(!output.exists());
}
