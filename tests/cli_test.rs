mod common;

use assert_cmd::Command;
use common::*;
use std::path::Path;
use tempfile::TempDir;

fn asismap(cwd: &Path) -> Command {
    let mut cmd = Command::cargo_bin("asismap").unwrap();
    cmd.current_dir(cwd).env_remove("ASISMAP_CONFIG").env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_extract_prints_status_lines() {
    let input = TempDir::new().unwrap();
    order_management_package().write_to(input.path(), "OrderManagement.zip");

    let output = asismap(input.path())
        .args(["extract", "--plain"])
        .arg(input.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("[ok] Processed inner zip 'Create_Order.zip' with 2 adapters."));
    assert!(stdout.contains("[ok] Saved 3 adapters into"));
}

#[test]
fn test_extract_empty_directory_exits_cleanly() {
    let input = TempDir::new().unwrap();

    asismap(input.path())
        .args(["extract", "--plain", "."])
        .assert()
        .success()
        .stdout("[warn] No zip files found.\n");
}

#[test]
fn test_link_prints_only_absolute_output_path() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("report.csv"),
        "\"UID\",\"AdapterType\",\"AdapterDirection\",\"AdapterAddress\"\n\
         \"A-1\",\"ProcessDirect\",\"Sender\",\"/q\"\n\
         \"B-1\",\"ProcessDirect\",\"Receiver\",\"/Q/\"\n",
    )
    .unwrap();

    let output = asismap(dir.path()).args(["link", "."]).output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let printed = Path::new(stdout.trim_end());
    assert!(printed.is_absolute());
    assert!(printed.ends_with("final_output.csv"));
    assert_eq!(stdout.lines().count(), 1);

    let linked = std::fs::read_to_string(dir.path().join("final_output.csv")).unwrap();
    assert!(linked.contains("\"A-1\",\"ProcessDirect\",\"Sender\",\"/q\",\"B-1\",\"\""));
    assert!(linked.contains("\"B-1\",\"ProcessDirect\",\"Receiver\",\"/Q/\",\"\",\"A-1\""));
}

#[test]
fn test_link_without_report_fails() {
    let dir = TempDir::new().unwrap();

    asismap(dir.path()).args(["link", "."]).assert().failure();
    assert!(!dir.path().join("final_output.csv").exists());
}

#[test]
fn test_run_uses_configured_names() {
    let input = TempDir::new().unwrap();
    order_management_package().write_to(input.path(), "OrderManagement.zip");
    std::fs::write(
        input.path().join(".asismap.toml"),
        "[output]\nreport_prefix = \"inventory\"\nlinked_file_name = \"calls.csv\"\n",
    )
    .unwrap();

    let output = asismap(input.path())
        .args(["run", "--plain", "."])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.trim_end().ends_with("calls.csv"));
    assert!(input.path().join("calls.csv").exists());

    let reports: Vec<_> = std::fs::read_dir(input.path())
        .unwrap()
        .filter_map(|e| e.ok())
        .map(|e| e.file_name().to_string_lossy().to_string())
        .filter(|name| name.starts_with("inventory_") && name.ends_with(".csv"))
        .collect();
    assert_eq!(reports.len(), 1);
}

#[test]
fn test_init_creates_config_once() {
    let dir = TempDir::new().unwrap();

    asismap(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout("Created .asismap.toml configuration file\n");
    assert!(dir.path().join(".asismap.toml").exists());

    asismap(dir.path()).arg("init").assert().failure();
    asismap(dir.path()).args(["init", "--force"]).assert().success();
}
