//! Integration tests for the towebp binary

use image::{ImageFormat, RgbImage};
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::tempdir;

fn run_towebp(dir: &Path, args: &[&str]) -> (String, String, bool) {
    let output = Command::new(env!("CARGO_BIN_EXE_towebp"))
        .args(args)
        .current_dir(dir)
        .output()
        .expect("Failed to run towebp");

    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
    (stdout, stderr, output.status.success())
}

fn write_png(path: &Path) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    RgbImage::new(10, 10)
        .save_with_format(path, ImageFormat::Png)
        .unwrap();
}

#[test]
fn test_defaults_to_current_directory() {
    let dir = tempdir().unwrap();
    write_png(&dir.path().join("sub/a.png"));

    let (stdout, stderr, success) = run_towebp(dir.path(), &[]);

    assert!(success, "Command should succeed: stderr={}", stderr);
    assert!(stdout.contains("Converting:"), "stdout={}", stdout);
    assert!(stdout.contains("a.png"), "stdout={}", stdout);
    assert!(dir.path().join("sub/a.webp").exists());
}

#[test]
fn test_second_run_prints_nothing() {
    let dir = tempdir().unwrap();
    write_png(&dir.path().join("a.png"));

    run_towebp(dir.path(), &["."]);
    let (stdout, _, success) = run_towebp(dir.path(), &["."]);

    assert!(success);
    assert!(stdout.is_empty(), "stdout={}", stdout);
}

#[test]
fn test_explicit_root_argument() {
    let dir = tempdir().unwrap();
    let root = dir.path().join("photos");
    write_png(&root.join("a.png"));

    let (_, stderr, success) = run_towebp(dir.path(), &[root.to_str().unwrap(), "--quiet"]);

    assert!(success, "stderr={}", stderr);
    assert!(root.join("a.webp").exists());
}

#[test]
fn test_corrupt_image_exits_nonzero() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("broken.png"), b"nope").unwrap();

    let (_, stderr, success) = run_towebp(dir.path(), &[]);

    assert!(!success);
    assert!(stderr.contains("broken.png"), "stderr={}", stderr);
}

#[test]
fn test_continue_on_error_still_exits_nonzero() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a_broken.png"), b"nope").unwrap();
    write_png(&dir.path().join("b.png"));

    let (_, stderr, success) = run_towebp(dir.path(), &["--continue-on-error"]);

    assert!(!success);
    assert!(stderr.contains("1 of 2 files failed"), "stderr={}", stderr);
    assert!(dir.path().join("b.webp").exists());
}

#[test]
fn test_dry_run_and_stats_json() {
    let dir = tempdir().unwrap();
    write_png(&dir.path().join("a.png"));

    let (stdout, _, success) = run_towebp(dir.path(), &["--dry-run", "--stats-json", "--quiet"]);

    assert!(success);
    let report: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(report["planned"], 1);
    assert_eq!(report["converted"], 0);
    assert!(!dir.path().join("a.webp").exists());
}

#[test]
fn test_missing_root_fails() {
    let dir = tempdir().unwrap();

    let (_, stderr, success) = run_towebp(dir.path(), &["does-not-exist"]);

    assert!(!success);
    assert!(stderr.contains("no such directory"), "stderr={}", stderr);
}
