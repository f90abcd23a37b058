// Command-line tests

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn fixture_app() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("endeca_app")
}

fn cartridgemapper(workdir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("cartridgemapper").unwrap();
    cmd.current_dir(workdir.path()).env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_version() {
    let dir = TempDir::new().unwrap();
    cartridgemapper(&dir)
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("cartridgemapper"));
}

#[test]
fn test_map_writes_html_report() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("report");

    cartridgemapper(&dir)
        .args(["map", fixture_app().to_str().unwrap(), "--disable-color", "--output"])
        .arg(&out)
        .assert()
        .success()
        .stderr(predicate::str::contains("Reported 3 cartridges (1 skipped)"));

    let html = fs::read_to_string(out.join("index.html")).unwrap();
    assert!(html.contains("HeroBanner"));
}

#[test]
fn test_map_writes_json_report() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("report");

    cartridgemapper(&dir)
        .args(["map", fixture_app().to_str().unwrap(), "--format", "json", "--disable-color", "--output"])
        .arg(&out)
        .assert()
        .success();

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(out.join("cartridges.json")).unwrap()).unwrap();
    assert_eq!(json.as_array().unwrap().len(), 3);
}

#[test]
fn test_map_reads_config_file() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("cartridgemapper.toml"),
        "[output]\nformat = \"json\"\ndirectory = \"from-config\"\n",
    )
    .unwrap();

    cartridgemapper(&dir)
        .args(["map", fixture_app().to_str().unwrap(), "--disable-color"])
        .assert()
        .success();

    assert!(dir.path().join("from-config/cartridges.json").exists());
}

#[test]
fn test_map_debug_logs() {
    let dir = TempDir::new().unwrap();

    cartridgemapper(&dir)
        .args(["map", fixture_app().to_str().unwrap(), "--debug", "--disable-color"])
        .assert()
        .success()
        .stderr(predicate::str::contains("DEBUG"));
}

#[test]
fn test_map_missing_path_fails() {
    let dir = TempDir::new().unwrap();

    cartridgemapper(&dir)
        .args(["map", "does-not-exist"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Path not found"));
}

#[test]
fn test_map_unknown_format_fails() {
    let dir = TempDir::new().unwrap();

    cartridgemapper(&dir)
        .args(["map", fixture_app().to_str().unwrap(), "--format", "markdown"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown format"));
}

#[test]
fn test_map_missing_config_file_fails() {
    let dir = TempDir::new().unwrap();

    cartridgemapper(&dir)
        .args(["map", fixture_app().to_str().unwrap(), "--config", "missing.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("IO error"));
}
