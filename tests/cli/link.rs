use crate::support::{stdout_json, Catalog};
use predicates::prelude::*;

// ============================================================================
// Link and open command tests
// ============================================================================

#[test]
fn test_link_encodes_view() {
    let catalog = Catalog::new();
    catalog
        .cmd()
        .args([
            "link",
            "--exclude",
            "source=PSA",
            "--combine",
            "source=and",
            "--search",
            "mind thrust",
            "--sort",
            "name",
            "--desc",
        ])
        .assert()
        .success()
        .stdout(predicate::str::diff(
            "sel=3&f.source=-PSA&m.source=and&q=mind+thrust&sort=name%3Adesc\n",
        ));
}

#[test]
fn test_link_includes_pins_and_selection() {
    let catalog = Catalog::new();
    catalog.cmd().args(["pin", "1", "0"]).assert().success();
    catalog
        .cmd()
        .args(["link", "--select", "Celerity"])
        .assert()
        .success()
        .stdout(predicate::str::diff("sel=1&pin=1&pin=0\n"));
}

#[test]
fn test_open_round_trips_link() {
    let catalog = Catalog::new();
    let output = catalog
        .cmd()
        .args(["link", "--include", "type=D", "--select", "2"])
        .output()
        .unwrap();
    let locator = String::from_utf8_lossy(&output.stdout).trim().to_string();

    let output = catalog
        .cmd()
        .args(["--format", "json", "open", &locator])
        .output()
        .unwrap();
    let json = stdout_json(&output);
    assert_eq!(json["locator"], locator);
    assert_eq!(json["counts"]["visible"], 2);
    assert_eq!(json["selected"]["name"], "Mantle of Awe");
}

#[test]
fn test_open_human_shows_selection_and_filters() {
    let catalog = Catalog::new();
    catalog
        .cmd()
        .args(["open", "sel=0&f.type=%2BT&pin=0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Mind Thrust"))
        .stdout(predicate::str::contains("2/4 shown"))
        .stdout(predicate::str::contains("Filters: type=+T"))
        .stdout(predicate::str::contains("Pinned: Mind Thrust"));
}

#[test]
fn test_open_ignores_garbage() {
    let catalog = Catalog::new();
    catalog
        .cmd()
        .args(["open", "sel=57&bogus=1&pin=x&sort=sideways"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No entry selected"))
        .stdout(predicate::str::contains("4/4 shown"));
}

#[test]
fn test_open_accepts_fragment_prefix() {
    let catalog = Catalog::new();
    catalog
        .cmd()
        .args(["--format", "records", "open", "#q=celer"])
        .assert()
        .success()
        .stdout(predicate::str::contains("mode=open visible=1 total=4"));
}
