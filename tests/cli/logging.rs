use crate::support::Catalog;
use predicates::prelude::*;

// ============================================================================
// Logging tests
// ============================================================================

#[test]
fn test_verbose_reports_phases() {
    let catalog = Catalog::new();
    catalog
        .cmd()
        .args(["--verbose", "list"])
        .assert()
        .success()
        .stderr(predicate::str::contains("load_base"));
}

#[test]
fn test_malformed_records_warn_by_default() {
    let catalog = Catalog::new();
    catalog
        .cmd()
        .arg("list")
        .assert()
        .success()
        .stderr(predicate::str::contains("skipping malformed entry"));
}

#[test]
fn test_log_level_error_hides_warnings() {
    let catalog = Catalog::new();
    catalog
        .cmd()
        .args(["--log-level", "error", "list"])
        .assert()
        .success()
        .stderr(predicate::str::contains("skipping malformed entry").not());
}

#[test]
fn test_log_json_emits_json_lines() {
    let catalog = Catalog::new();
    let output = catalog
        .cmd()
        .args(["--log-json", "--log-level", "debug", "list"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    let lines: Vec<&str> = stderr.lines().filter(|l| !l.trim().is_empty()).collect();
    assert!(!lines.is_empty());
    for line in lines {
        assert!(
            serde_json::from_str::<serde_json::Value>(line).is_ok(),
            "not JSON: {}",
            line
        );
    }
}
