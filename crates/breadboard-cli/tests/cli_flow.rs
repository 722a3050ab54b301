use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

const NOW: &str = "2025-06-15T12:00:00Z";

fn bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_breadboard"))
}

/// A command isolated from the caller's config and environment.
fn breadboard(config_home: &Path) -> Command {
    let mut cmd = Command::new(bin());
    cmd.env("XDG_CONFIG_HOME", config_home)
        .env_remove("BREADBOARD_CONFIG")
        .env_remove("BREADBOARD_NOW")
        .env_remove("BREADBOARD_LOG")
        .env("NO_COLOR", "1")
        .args(["--now", NOW]);
    cmd
}

fn run(config_home: &Path, args: &[&str]) -> Output {
    breadboard(config_home).args(args).output().expect("run breadboard")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn config_file(config_home: &Path) -> PathBuf {
    config_home.join("breadboard").join("config.toml")
}

#[test]
fn test_compliance_json_overview() {
    let home = TempDir::new().unwrap();
    let output = run(home.path(), &["--json", "compliance"]);
    assert!(output.status.success(), "{:?}", output);

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["next_filing_label"], "Quarterly Estimated Tax");
    assert_eq!(value["days_remaining"], 18);
    assert_eq!(value["open_items"], 4);
}

#[test]
fn test_money_plain_overview() {
    let home = TempDir::new().unwrap();
    let output = run(home.path(), &["--format", "plain", "money"]);
    assert!(output.status.success(), "{:?}", output);

    let text = stdout(&output);
    assert!(text.lines().any(|line| line == "breadboard money"));
    assert!(text.lines().any(|line| line.starts_with("income_ytd=$")));
    assert!(text.lines().any(|line| line.starts_with("tax_reserve=$")));
}

#[test]
fn test_default_command_is_dashboard() {
    let home = TempDir::new().unwrap();
    let output = run(home.path(), &["--json"]);
    assert!(output.status.success(), "{:?}", output);

    let panels: Vec<serde_json::Value> = serde_json::from_slice(&output.stdout).unwrap();
    let kinds: Vec<&str> = panels.iter().filter_map(|p| p["kind"].as_str()).collect();
    assert_eq!(kinds, vec!["money", "compliance", "work", "insights"]);
}

#[test]
fn test_layout_changes_persist() {
    let home = TempDir::new().unwrap();

    let added = run(home.path(), &["layout", "add", "cash_flow"]);
    assert!(added.status.success(), "{:?}", added);
    let saved = std::fs::read_to_string(config_file(home.path())).unwrap();
    assert!(saved.contains("cash_flow"));

    let removed = run(home.path(), &["layout", "remove", "money"]);
    assert!(removed.status.success(), "{:?}", removed);

    let shown = run(home.path(), &["--json", "layout"]);
    let layout: serde_json::Value = serde_json::from_slice(&shown.stdout).unwrap();
    assert_eq!(
        layout["widgets"],
        serde_json::json!(["compliance", "work", "insights", "cash_flow"])
    );
}

#[test]
fn test_layout_rejects_duplicate_widget() {
    let home = TempDir::new().unwrap();
    let output = run(home.path(), &["layout", "add", "money"]);
    assert_eq!(output.status.code(), Some(4));
    assert!(!config_file(home.path()).exists());
}

#[test]
fn test_unknown_widget_is_invalid_input() {
    let home = TempDir::new().unwrap();
    let output = run(home.path(), &["widget", "weather"]);
    assert_eq!(output.status.code(), Some(4));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("revenue_trend"));
}

#[test]
fn test_missing_explicit_config_is_not_found() {
    let home = TempDir::new().unwrap();
    let missing = home.path().join("nope.toml");
    let output = run(
        home.path(),
        &["--config", missing.to_str().unwrap(), "money"],
    );
    assert_eq!(output.status.code(), Some(3));
}

#[test]
fn test_init_refuses_to_overwrite() {
    let home = TempDir::new().unwrap();

    let first = run(
        home.path(),
        &["init", "--reference-date", "2025-01-31", "--timezone", "UTC"],
    );
    assert!(first.status.success(), "{:?}", first);
    let saved = std::fs::read_to_string(config_file(home.path())).unwrap();
    assert!(saved.contains("reference_date = \"2025-01-31\""));

    let second = run(home.path(), &["init"]);
    assert_eq!(second.status.code(), Some(4));

    let forced = run(home.path(), &["init", "--force"]);
    assert!(forced.status.success(), "{:?}", forced);
}

#[test]
fn test_init_rejects_bad_timezone() {
    let home = TempDir::new().unwrap();
    let output = run(home.path(), &["init", "--timezone", "Mars/Olympus"]);
    assert_eq!(output.status.code(), Some(4));
    assert!(!config_file(home.path()).exists());
}

#[test]
fn test_export_is_deterministic() {
    let home = TempDir::new().unwrap();
    let first = run(home.path(), &["export"]);
    let second = run(home.path(), &["export"]);
    assert!(first.status.success(), "{:?}", first);
    assert_eq!(first.stdout, second.stdout);

    let value: serde_json::Value = serde_json::from_slice(&first.stdout).unwrap();
    assert_eq!(value["invoices"][8]["id"], "inv_009");
}

#[test]
fn test_export_to_file() {
    let home = TempDir::new().unwrap();
    let target = home.path().join("out").join("dataset.json");
    let output = run(home.path(), &["export", "-o", target.to_str().unwrap()]);
    assert!(output.status.success(), "{:?}", output);

    let contents = std::fs::read_to_string(&target).unwrap();
    let value: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert!(value["clients"].as_array().is_some());
}

#[test]
fn test_marketplace_rejects_unknown_kind() {
    let home = TempDir::new().unwrap();
    let output = run(home.path(), &["marketplace", "--kind", "sticker"]);
    assert_eq!(output.status.code(), Some(4));
}

#[test]
fn test_completions_bash() {
    let home = TempDir::new().unwrap();
    let output = run(home.path(), &["completions", "bash"]);
    assert!(output.status.success(), "{:?}", output);
    assert!(stdout(&output).contains("breadboard"));
}
