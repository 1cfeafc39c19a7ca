//! Integration tests for the `marketsfx` binary.
//!
//! Tests verify:
//! - No-argument run creates the mod sound directory and all three files
//! - Repeated runs overwrite without error
//! - JSON report output
//! - Failure exit code when the directory cannot be created, in text and JSON mode
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p marketsfx-cli --test cli_generate
//! ```

use std::fs;
use std::path::Path;
use std::process::Command;

use tempfile::tempdir;

/// Helper to get the marketsfx binary path.
fn marketsfx_binary() -> &'static str {
    env!("CARGO_BIN_EXE_marketsfx")
}

fn sorted_listing(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn test_default_run_writes_into_mod_tree() {
    let tmp = tempdir().unwrap();
    // The default directory is relative to a `scripts/` style working dir
    let workdir = tmp.path().join("scripts");
    fs::create_dir(&workdir).unwrap();
    let sounds = tmp
        .path()
        .join("src/main/resources/assets/stockmarketmod/sounds");
    assert!(!sounds.exists());

    let output = Command::new(marketsfx_binary())
        .current_dir(&workdir)
        .output()
        .expect("Failed to execute marketsfx");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success(), "Expected success, got: {}", stdout);
    assert!(
        stdout.contains("Sound files generated successfully!"),
        "Expected confirmation in output: {}",
        stdout
    );
    assert_eq!(
        sorted_listing(&sounds),
        vec!["market_update.ogg", "trade_fail.ogg", "trade_success.ogg"]
    );
}

#[test]
fn test_second_run_is_identical() {
    let tmp = tempdir().unwrap();
    let out_dir = tmp.path().join("sounds");

    let run = || {
        let output = Command::new(marketsfx_binary())
            .args(["--out-dir", out_dir.to_str().unwrap()])
            .output()
            .expect("Failed to execute marketsfx");
        assert!(output.status.success());
        sorted_listing(&out_dir)
            .iter()
            .map(|name| (name.clone(), fs::read(out_dir.join(name)).unwrap()))
            .collect::<Vec<_>>()
    };

    let first = run();
    let second = run();
    assert_eq!(first.len(), 3);
    assert!(first == second, "second run changed file contents");
}

#[test]
fn test_json_report() {
    let tmp = tempdir().unwrap();
    let out_dir = tmp.path().join("sounds");

    let output = Command::new(marketsfx_binary())
        .args(["--out-dir", out_dir.to_str().unwrap(), "--format", "wav", "--json"])
        .output()
        .expect("Failed to execute marketsfx");

    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["success"], true);
    let files = report["files"].as_array().unwrap();
    assert_eq!(files.len(), 3);
    assert_eq!(files[2]["effect"], "market_update");
    assert!(out_dir.join("trade_fail.wav").is_file());
}

#[test]
fn test_unwritable_directory_fails() {
    let tmp = tempdir().unwrap();
    let blocker = tmp.path().join("blocker");
    fs::write(&blocker, b"file in the way").unwrap();

    let output = Command::new(marketsfx_binary())
        .args(["--out-dir", blocker.join("sounds").to_str().unwrap()])
        .output()
        .expect("Failed to execute marketsfx");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("Failed to generate sound files"), "{}", stderr);
}

#[test]
fn test_json_report_on_failure() {
    let tmp = tempdir().unwrap();
    let blocker = tmp.path().join("blocker");
    fs::write(&blocker, b"file in the way").unwrap();

    let output = Command::new(marketsfx_binary())
        .args(["--out-dir", blocker.join("sounds").to_str().unwrap(), "--json"])
        .output()
        .expect("Failed to execute marketsfx");

    assert_eq!(output.status.code(), Some(1));
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["success"], false);
    assert_eq!(report["files"].as_array().unwrap().len(), 0);
    let error = report["error"].as_str().unwrap();
    assert!(error.contains("Failed to generate sound files"), "{}", error);
    assert!(error.contains("blocker"), "{}", error);
}
