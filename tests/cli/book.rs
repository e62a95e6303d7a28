use crate::support::{stdout_json, Catalog};
use predicates::prelude::*;

// ============================================================================
// Book command tests
// ============================================================================

#[test]
fn test_book_empty() {
    let catalog = Catalog::new();
    catalog
        .cmd()
        .arg("book")
        .assert()
        .success()
        .stdout(predicate::str::contains("No pinned entries"));
}

#[test]
fn test_book_groups_disciplines_first() {
    let catalog = Catalog::new();
    catalog
        .cmd()
        .args(["pin", "Mind Thrust", "Celerity", "Blade Meditation"])
        .assert()
        .success();

    let output = catalog.cmd().arg("book").output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);

    let disciplines = stdout.find("# Disciplines").unwrap();
    let celerity = stdout.find("## Celerity").unwrap();
    let talents = stdout.find("# Talents").unwrap();
    let mind_thrust = stdout.find("## Mind Thrust").unwrap();
    let blade = stdout.find("## Blade Meditation").unwrap();
    assert!(disciplines < celerity);
    assert!(celerity < talents);
    assert!(talents < mind_thrust);
    assert!(mind_thrust < blade);
}

#[test]
fn test_book_falls_back_to_last_viewed() {
    let catalog = Catalog::new();
    catalog
        .cmd()
        .args(["show", "Mantle of Awe"])
        .assert()
        .success();
    catalog
        .cmd()
        .arg("book")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("# Mantle of Awe"));
}

#[test]
fn test_book_json() {
    let catalog = Catalog::new();
    catalog.cmd().args(["pin", "0"]).assert().success();
    let output = catalog
        .cmd()
        .args(["--format", "json", "book"])
        .output()
        .unwrap();
    let json = stdout_json(&output);
    assert_eq!(json["entries"][0]["name"], "Mind Thrust");
    assert!(json["markdown"]
        .as_str()
        .unwrap()
        .starts_with("# Talents\n\n## Mind Thrust"));
}
