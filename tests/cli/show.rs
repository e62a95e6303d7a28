use crate::support::{stdout_json, Catalog};
use predicates::prelude::*;

// ============================================================================
// Show command tests
// ============================================================================

#[test]
fn test_show_talent_by_name() {
    let catalog = Catalog::new();
    catalog
        .cmd()
        .args(["show", "mind thrust"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("# Mind Thrust\n*Talent*\n"))
        .stdout(predicate::str::contains("*Source: PSA, page 9*"));
}

#[test]
fn test_show_discipline_modes_in_order() {
    let catalog = Catalog::new();
    let output = catalog.cmd().args(["show", "Celerity"]).output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(stdout.contains("*Nomad Discipline*"));
    assert!(stdout.contains("***Psychic Focus.*** While focused"));
    let speed = stdout
        .find("***Speed Burst (2 psi).*** As a bonus action, you gain 1d4 extra feet")
        .unwrap();
    let agile = stdout
        .find("***Agile Defense (3 psi; conc., 1 min.).***")
        .unwrap();
    assert!(speed < agile);
}

#[test]
fn test_show_by_row_and_unique_id() {
    let catalog = Catalog::new();
    catalog
        .cmd()
        .args(["show", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Mantle of Awe"));
    catalog
        .cmd()
        .args(["show", "celerity-psa"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Celerity"));
}

#[test]
fn test_show_unknown_entry() {
    let catalog = Catalog::new();
    catalog
        .cmd()
        .args(["show", "Ego Whip"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("entry not found"));
}

#[test]
fn test_show_empty_reference_is_usage_error() {
    let catalog = Catalog::new();
    catalog.cmd().args(["show", "  "]).assert().code(2);
}

#[test]
fn test_show_json() {
    let catalog = Catalog::new();
    let output = catalog
        .cmd()
        .args(["--format", "json", "show", "Celerity"])
        .output()
        .unwrap();
    let json = stdout_json(&output);
    assert_eq!(json["row"], 1);
    assert_eq!(json["id"], "celerity-psa");
    assert_eq!(json["entry"]["order"], "Nomad");
    assert!(json["markdown"]
        .as_str()
        .unwrap()
        .starts_with("# Celerity"));
}

#[test]
fn test_show_records_wraps_body() {
    let catalog = Catalog::new();
    catalog
        .cmd()
        .args(["--format", "records", "show", "Mind Thrust"])
        .assert()
        .success()
        .stdout(predicate::str::contains("H psicat=1 records=1 mode=show row=0"))
        .stdout(predicate::str::contains("E 0 T \"Mind Thrust\""))
        .stdout(predicate::str::contains("B 0\n# Mind Thrust"))
        .stdout(predicate::str::contains("B-END"));
}

#[test]
fn test_show_json_error_envelope() {
    let catalog = Catalog::new();
    let output = catalog
        .cmd()
        .args(["--format", "json", "show", "Ego Whip"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));
    // Log lines may precede the envelope on stderr
    let stderr = String::from_utf8_lossy(&output.stderr);
    let last = stderr.lines().filter(|l| !l.trim().is_empty()).last().unwrap();
    let err: serde_json::Value = serde_json::from_str(last).unwrap();
    assert_eq!(err["error"]["type"], "entry_not_found");
}
