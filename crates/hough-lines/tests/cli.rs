use std::path::{Path, PathBuf};

use assert_cmd::Command;
use hough_lines::HoughReport;
use predicates::prelude::*;
use tempfile::TempDir;

/// 100x100 black PNG with row 50 white.
fn write_row_png(dir: &Path) -> PathBuf {
    let img = image::GrayImage::from_fn(100, 100, |_, y| image::Luma([if y == 50 { 255 } else { 0 }]));
    let path = dir.join("edges.png");
    img.save(&path).expect("write png");
    path
}

fn cmd() -> Command {
    Command::cargo_bin("hough-lines").expect("binary built")
}

#[test]
fn prints_json_report_to_stdout() {
    let dir = TempDir::new().unwrap();
    let input = write_row_png(dir.path());

    let out = cmd()
        .arg(&input)
        .args(["--top", "1"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let report: HoughReport = serde_json::from_slice(&out).expect("valid json");
    assert_eq!(report.image_width, 100);
    assert_eq!(report.foreground_pixels, 100);
    assert_eq!(report.lines.len(), 1);
    assert_eq!(report.lines[0].descriptor.theta_index, 90);
    assert_eq!(report.lines[0].descriptor.votes, 100);
}

#[test]
fn writes_report_and_visualization_files() {
    let dir = TempDir::new().unwrap();
    let input = write_row_png(dir.path());
    let json = dir.path().join("lines.json");
    let space = dir.path().join("space.png");

    cmd()
        .arg(&input)
        .args(["--theta-bins", "360", "--threshold", "90"])
        .arg("--json")
        .arg(&json)
        .arg("--space")
        .arg(&space)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let report: HoughReport =
        serde_json::from_str(&std::fs::read_to_string(&json).unwrap()).unwrap();
    assert_eq!(report.theta_bins, 360);
    assert!(report.lines.iter().all(|l| l.descriptor.votes >= 90));
    // 0.5° steps: the cells next to 90° still collect all 100 votes.
    assert!((179..=181).contains(&report.lines[0].descriptor.theta_index));

    let vis = image::open(&space).unwrap().to_luma8();
    assert_eq!(vis.width(), 360);
    assert_eq!(vis.height() as usize, report.rho_bins);
}

#[test]
fn config_file_is_overridden_by_flags() {
    let dir = TempDir::new().unwrap();
    let input = write_row_png(dir.path());
    let config = dir.path().join("params.json");
    std::fs::write(&config, r#"{ "theta_bins": 90, "vote_threshold": 1000 }"#).unwrap();

    let out = cmd()
        .arg(&input)
        .arg("--config")
        .arg(&config)
        .args(["--threshold", "100"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let report: HoughReport = serde_json::from_slice(&out).unwrap();
    assert_eq!(report.theta_bins, 90);
    assert_eq!(report.lines.len(), 1);
}

#[test]
fn black_polarity_votes_with_background_pixels() {
    let dir = TempDir::new().unwrap();
    let input = write_row_png(dir.path());

    let out = cmd()
        .arg(&input)
        .args(["--polarity", "black", "--threshold", "1000"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let report: HoughReport = serde_json::from_slice(&out).unwrap();
    assert_eq!(report.foreground_pixels, 9900);
    assert_eq!(report.total_votes, 9900 * 180);
    assert!(report.lines.is_empty());
}

#[test]
fn missing_input_fails() {
    let dir = TempDir::new().unwrap();
    cmd()
        .arg(dir.path().join("nope.png"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("hough-lines:"));
}

#[test]
fn invalid_theta_bins_fails() {
    let dir = TempDir::new().unwrap();
    let input = write_row_png(dir.path());
    cmd()
        .arg(&input)
        .args(["--theta-bins", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("theta axis"));
}

#[test]
fn oversized_theta_bins_fails() {
    let dir = TempDir::new().unwrap();
    let input = write_row_png(dir.path());
    cmd()
        .arg(&input)
        .args(["--theta-bins", "100000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at most 65536"));
}

#[test]
fn debug_logs_go_to_stderr_only() {
    let dir = TempDir::new().unwrap();
    let input = write_row_png(dir.path());

    let assert = cmd()
        .arg(&input)
        .args(["--log-level", "debug"])
        .env_remove("HOUGH_LINES_LOG")
        .assert()
        .success()
        .stderr(predicate::str::contains("foreground pixels"));
    let report: HoughReport = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(report.foreground_pixels, 100);
}
