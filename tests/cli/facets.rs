use crate::support::{stdout_json, Catalog};
use predicates::prelude::*;

// ============================================================================
// Facets command tests
// ============================================================================

#[test]
fn test_facets_lists_discovered_sources() {
    let catalog = Catalog::new();
    catalog
        .cmd()
        .arg("facets")
        .assert()
        .success()
        .stdout(predicate::str::contains("Source (source, combine or)"))
        .stdout(predicate::str::contains("PSA"))
        .stdout(predicate::str::contains("UA2017"))
        .stdout(predicate::str::contains("T (Talent)"))
        .stdout(predicate::str::contains("Wu Jen"));
}

#[test]
fn test_facets_from_locator() {
    let catalog = Catalog::new();
    let output = catalog
        .cmd()
        .args([
            "--format",
            "json",
            "facets",
            "--locator",
            "f.source=-PSA&m.order=and",
        ])
        .output()
        .unwrap();
    let json = stdout_json(&output);
    let source = json
        .as_array()
        .unwrap()
        .iter()
        .find(|f| f["name"] == "source")
        .unwrap();
    assert_eq!(source["active"], true);
    let psa = source["options"]
        .as_array()
        .unwrap()
        .iter()
        .find(|o| o["value"] == "PSA")
        .unwrap();
    assert_eq!(psa["state"], "exclude");

    let order = json
        .as_array()
        .unwrap()
        .iter()
        .find(|f| f["name"] == "order")
        .unwrap();
    assert_eq!(order["combine"], "and");
}

#[test]
fn test_facets_brew_adds_options() {
    let catalog = Catalog::new();
    catalog
        .cmd()
        .arg("--brew")
        .arg(crate::support::fixture("brew.json"))
        .args(["--format", "records", "facets"])
        .assert()
        .success()
        .stdout(predicate::str::contains("D source.ignore HB"));
}

#[test]
fn test_facets_records() {
    let catalog = Catalog::new();
    catalog
        .cmd()
        .args([
            "--format",
            "records",
            "facets",
            "--locator",
            "f.source=-PSA&m.source=and",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("F source \"Source\" combine=and active=true"))
        .stdout(predicate::str::contains("D source.exclude PSA"))
        .stdout(predicate::str::contains("D source.ignore UA2017"))
        .stdout(predicate::str::contains("F type \"Type\" combine=or active=false"));
}
