//! Tests for the `micrometa` binary.

use std::process::{Command, Output};

use super::test_utils::{cellfinder_metadata, mesospim_metadata, unsupported_metadata};

fn micrometa(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_micrometa"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run micrometa")
}

fn path_arg(path: std::path::PathBuf) -> String {
    path.to_string_lossy().into_owned()
}

#[test]
fn test_text_output() {
    let output = micrometa(&[&path_arg(cellfinder_metadata())]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("x_pixel_um: 2"));
    assert!(stdout.contains("z_pixel_um: 5"));
    assert!(stdout.contains("num_planes: 1500"));
}

#[test]
fn test_json_output() {
    let output = micrometa(&[&path_arg(mesospim_metadata()), "--output", "json"]);
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["num_planes"], 852);
    assert_eq!(json["x_pixel_um"], 8.23);
    assert_eq!(json["z_pixel_um"], 10.0);
}

#[test]
fn test_manual_override() {
    let output = micrometa(&[
        &path_arg(mesospim_metadata()),
        "--z-pixel-um",
        "4",
        "--output",
        "json",
    ]);
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["z_pixel_um"], 4.0);
    assert_eq!(json["num_planes"], 852);
}

#[test]
fn test_manual_entry_for_unsupported_file() {
    let output = micrometa(&[
        &path_arg(unsupported_metadata()),
        "--x-pixel-um",
        "2",
        "--y-pixel-um",
        "2",
        "--z-pixel-um",
        "5",
        "--num-planes",
        "10",
    ]);
    assert!(output.status.success());
}

#[test]
fn test_unsupported_file_fails() {
    let output = micrometa(&[&path_arg(unsupported_metadata())]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("not yet supported"));
}

#[test]
fn test_no_arguments_fails() {
    let output = micrometa(&[]);
    assert!(!output.status.success());
}
