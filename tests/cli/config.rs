use crate::support::{fixture, stdout_json, Catalog};
use predicates::prelude::*;

// ============================================================================
// Configuration tests
// ============================================================================

fn config_with_data(extra: &str) -> String {
    format!(
        "data = '{}'\n{}",
        fixture("psionics.json").display(),
        extra
    )
}

#[test]
fn test_config_supplies_dataset() {
    let catalog = Catalog::new();
    catalog.write_config(&config_with_data(""));
    catalog
        .bare()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("4/4 shown"));
}

#[test]
fn test_config_relative_brew_path() {
    let catalog = Catalog::new();
    std::fs::copy(fixture("brew.json"), catalog.dir.path().join("brew.json")).unwrap();
    catalog.write_config(&config_with_data("brew = ['brew.json']\n"));
    catalog
        .bare()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Third Eye"));
}

#[test]
fn test_config_exclude_rules_hide_entries() {
    let catalog = Catalog::new();
    catalog.write_config(&config_with_data(
        "[[exclude]]\nname = 'celerity'\ncategory = 'psionic'\nsource = 'PSA'\n",
    ));
    catalog
        .bare()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Celerity").not())
        .stdout(predicate::str::contains("3/3 shown"));
}

#[test]
fn test_config_excluding_everything_warns() {
    let catalog = Catalog::new();
    catalog.write_config(&config_with_data("[[exclude]]\nname = '*'\n"));
    catalog
        .bare()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No entries found"))
        .stderr(predicate::str::contains("every entry is hidden"));
}

#[test]
fn test_config_default_sort() {
    let catalog = Catalog::new();
    catalog.write_config(&config_with_data("default_sort = 'name:desc'\n"));
    let output = catalog
        .bare()
        .args(["--format", "json", "list"])
        .output()
        .unwrap();
    let json = stdout_json(&output);
    assert_eq!(json["entries"][0]["name"], "Mind Thrust");
    // The configured default is not repeated in locators
    assert_eq!(json["locator"], "sel=0");
}

#[test]
fn test_config_default_combine() {
    let catalog = Catalog::new();
    catalog.write_config(&config_with_data("[filters.combine]\norder = 'and'\n"));
    catalog
        .bare()
        .args([
            "list",
            "--include",
            "order=Nomad",
            "--include",
            "order=Avatar",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("No entries found"));
}

#[test]
fn test_config_search_include_modes() {
    let catalog = Catalog::new();
    catalog
        .cmd()
        .args(["list", "--search", "speed burst"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No entries found"));

    catalog.write_config(&config_with_data("[search]\ninclude_modes = true\n"));
    catalog
        .bare()
        .args(["list", "--search", "speed burst"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Celerity"));
}

#[test]
fn test_config_state_file() {
    let catalog = Catalog::new();
    let state = catalog.dir.path().join("custom").join("sublist.json");
    catalog.write_config(&config_with_data(&format!(
        "state_file = '{}'\n",
        state.display()
    )));
    catalog.bare().args(["pin", "0"]).assert().success();
    assert!(state.exists());
}

#[test]
fn test_config_bad_default_sort() {
    let catalog = Catalog::new();
    catalog.write_config(&config_with_data("default_sort = 'sideways'\n"));
    catalog.bare().arg("list").assert().code(2);
}

#[test]
fn test_config_unknown_combine_facet() {
    let catalog = Catalog::new();
    catalog.write_config(&config_with_data("[filters.combine]\nschool = 'and'\n"));
    catalog
        .bare()
        .arg("list")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown facet"));
}

#[test]
fn test_explicit_config_must_exist() {
    let catalog = Catalog::new();
    catalog
        .cmd()
        .args(["--config", "/nonexistent/config.toml", "list"])
        .assert()
        .code(1);
}

#[test]
fn test_malformed_config() {
    let catalog = Catalog::new();
    catalog.write_config("data = [");
    catalog.cmd().arg("list").assert().code(1);
}
