//! Integration tests for the `bin2hex` binary.

use std::process::Command;

fn bin2hex() -> Command {
    Command::new(env!("CARGO_BIN_EXE_bin2hex"))
}

#[test]
fn converts_file_and_confirms() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.bin");
    let hex_path = dir.path().join("output.hex");
    std::fs::write(&input, [0x00, 0xff, 0x10]).unwrap();

    let output = bin2hex().arg(&input).arg(&hex_path).output().unwrap();
    assert!(output.status.success(), "{:?}", output.status);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Successfully converted"), "{stdout}");
    assert_eq!(std::fs::read_to_string(&hex_path).unwrap(), "00ff10");
}

#[test]
fn missing_input_reports_not_found_and_exits_zero() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.bin");
    let hex_path = dir.path().join("output.hex");

    let output = bin2hex().arg(&missing).arg(&hex_path).output().unwrap();
    assert!(output.status.success(), "{:?}", output.status);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("not found"), "{stdout}");
    assert!(!hex_path.exists());
}
