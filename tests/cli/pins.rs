use crate::support::{stdout_json, Catalog};
use predicates::prelude::*;

// ============================================================================
// Pin, unpin and pins command tests
// ============================================================================

#[test]
fn test_pin_persists_in_pin_order() {
    let catalog = Catalog::new();
    catalog
        .cmd()
        .args(["pin", "Celerity", "Mind Thrust"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Pinned Celerity [1]"))
        .stdout(predicate::str::contains("Pinned Mind Thrust [0]"));

    let output = catalog
        .cmd()
        .args(["--format", "json", "pins"])
        .output()
        .unwrap();
    let json = stdout_json(&output);
    let rows: Vec<u64> = json["pins"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["row"].as_u64().unwrap())
        .collect();
    assert_eq!(rows, vec![1, 0]);

    let state = std::fs::read_to_string(catalog.state_path()).unwrap();
    assert!(state.contains("celerity-psa"));
}

#[test]
fn test_pin_twice_is_noop() {
    let catalog = Catalog::new();
    catalog.cmd().args(["pin", "0"]).assert().success();
    catalog
        .cmd()
        .args(["pin", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing pinned"));
    catalog
        .cmd()
        .args(["--format", "records", "pins", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("mode=pins count=1"));
}

#[test]
fn test_unpin_keeps_remaining_order() {
    let catalog = Catalog::new();
    catalog
        .cmd()
        .args(["pin", "3", "1", "0"])
        .assert()
        .success();
    catalog
        .cmd()
        .args(["unpin", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Unpinned Celerity"));

    let output = catalog
        .cmd()
        .args(["--format", "json", "pins"])
        .output()
        .unwrap();
    let json = stdout_json(&output);
    assert_eq!(json["pins"][0]["row"], 3);
    assert_eq!(json["pins"][1]["row"], 0);
}

#[test]
fn test_pin_unknown_entry_changes_nothing() {
    let catalog = Catalog::new();
    catalog
        .cmd()
        .args(["pin", "Mind Thrust", "Ego Whip"])
        .assert()
        .code(3);
    catalog
        .cmd()
        .arg("pins")
        .assert()
        .success()
        .stdout(predicate::str::contains("No pinned entries"));
}

#[test]
fn test_pins_clear() {
    let catalog = Catalog::new();
    catalog.cmd().args(["pin", "0", "1"]).assert().success();
    catalog
        .cmd()
        .args(["pins", "clear"])
        .assert()
        .success();
    catalog
        .cmd()
        .args(["pins", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No pinned entries"));
}

#[test]
fn test_pins_export_import() {
    let catalog = Catalog::new();
    let export = catalog.dir.path().join("export.json");
    catalog.cmd().args(["pin", "2", "0"]).assert().success();
    catalog
        .cmd()
        .args(["pins", "export"])
        .arg(&export)
        .assert()
        .success();

    let other = Catalog::new();
    other
        .cmd()
        .args(["pins", "import"])
        .arg(&export)
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 2 pins"));
    other
        .cmd()
        .arg("pins")
        .assert()
        .success()
        .stdout(predicate::str::contains("1.").and(predicate::str::contains("Mantle of Awe")));
}

#[test]
fn test_pins_import_missing_file() {
    let catalog = Catalog::new();
    catalog
        .cmd()
        .args(["pins", "import", "/nonexistent/pins.json"])
        .assert()
        .code(2);
}

#[test]
fn test_pin_ambiguous_name_needs_source() {
    let catalog = Catalog::new();
    let brew = catalog.dir.path().join("dupe.json");
    std::fs::write(
        &brew,
        r#"{"psionic": [{"name": "Mind Thrust", "source": "HB", "type": "T"}]}"#,
    )
    .unwrap();

    catalog
        .cmd()
        .arg("--brew")
        .arg(&brew)
        .args(["pin", "Mind Thrust"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("ambiguous"));
    catalog
        .cmd()
        .arg("--brew")
        .arg(&brew)
        .args(["pin", "Mind Thrust", "--source", "HB"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[4]"));
}

#[test]
fn test_corrupt_state_file_is_ignored() {
    let catalog = Catalog::new();
    std::fs::write(catalog.state_path(), "not json").unwrap();
    catalog
        .cmd()
        .arg("pins")
        .assert()
        .success()
        .stdout(predicate::str::contains("No pinned entries"));
}

#[test]
fn test_pin_and_unpin_missing_row_are_noops() {
    let catalog = Catalog::new();
    catalog.cmd().args(["pin", "1"]).assert().success();
    catalog
        .cmd()
        .args(["pin", "99"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing pinned"));
    catalog
        .cmd()
        .args(["unpin", "99"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing unpinned"));

    let output = catalog
        .cmd()
        .args(["--format", "json", "pins"])
        .output()
        .unwrap();
    let json = stdout_json(&output);
    assert_eq!(json["count"], 1);
    assert_eq!(json["pins"][0]["row"], 1);
}
