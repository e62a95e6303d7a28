use crate::support::{stdout_json, Catalog};
use predicates::prelude::*;

// ============================================================================
// List command tests
// ============================================================================

#[test]
fn test_list_sorted_by_name() {
    let catalog = Catalog::new();
    let output = catalog.cmd().arg("list").output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let names: Vec<&str> = ["Blade Meditation", "Celerity", "Mantle of Awe", "Mind Thrust"]
        .into_iter()
        .collect();
    let positions: Vec<usize> = names
        .iter()
        .map(|name| stdout.find(name).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
    assert!(stdout.contains("4/4 shown"));
}

#[test]
fn test_list_malformed_entry_is_skipped() {
    let catalog = Catalog::new();
    let output = catalog
        .cmd()
        .args(["--format", "json", "list"])
        .output()
        .unwrap();
    let json = stdout_json(&output);
    assert_eq!(json["counts"]["total"], 4);
    assert_eq!(json["entries"].as_array().unwrap().len(), 4);
}

#[test]
fn test_list_exclude_source() {
    let catalog = Catalog::new();
    catalog
        .cmd()
        .args(["list", "--exclude", "source=PSA"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Blade Meditation"))
        .stdout(predicate::str::contains("Celerity").not())
        .stdout(predicate::str::contains("1/4 shown"));
}

#[test]
fn test_list_include_type_by_name() {
    let catalog = Catalog::new();
    catalog
        .cmd()
        .args(["list", "--include", "type=discipline"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Celerity"))
        .stdout(predicate::str::contains("Mantle of Awe"))
        .stdout(predicate::str::contains("Mind Thrust").not())
        .stdout(predicate::str::contains("2/4 shown"));
}

#[test]
fn test_list_include_or_across_one_facet() {
    let catalog = Catalog::new();
    catalog
        .cmd()
        .args([
            "list",
            "--include",
            "order=Nomad",
            "--include",
            "order=Avatar",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("2/4 shown"));
}

#[test]
fn test_list_include_and_across_one_facet() {
    let catalog = Catalog::new();
    catalog
        .cmd()
        .args([
            "list",
            "--include",
            "order=Nomad",
            "--include",
            "order=Avatar",
            "--combine",
            "order=and",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("No entries found"));
}

#[test]
fn test_list_search_is_case_insensitive_substring() {
    let catalog = Catalog::new();
    catalog
        .cmd()
        .args(["list", "--search", "CELER"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Celerity"))
        .stdout(predicate::str::contains("1/4 shown"));
}

#[test]
fn test_list_search_and_filter_combine() {
    let catalog = Catalog::new();
    catalog
        .cmd()
        .args(["list", "--search", "m", "--include", "type=T"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Mind Thrust"))
        .stdout(predicate::str::contains("Mantle of Awe").not());
}

#[test]
fn test_list_sort_desc() {
    let catalog = Catalog::new();
    let output = catalog
        .cmd()
        .args(["--format", "json", "list", "--sort", "name", "--desc"])
        .output()
        .unwrap();
    let json = stdout_json(&output);
    let first = &json["entries"][0];
    assert_eq!(first["name"], "Mind Thrust");
    assert_eq!(json["locator"], "sel=3&sort=name%3Adesc");
}

#[test]
fn test_list_sort_by_source_keeps_row_order_for_ties() {
    let catalog = Catalog::new();
    let output = catalog
        .cmd()
        .args(["--format", "json", "list", "--sort", "source"])
        .output()
        .unwrap();
    let json = stdout_json(&output);
    let rows: Vec<u64> = json["entries"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["row"].as_u64().unwrap())
        .collect();
    assert_eq!(rows, vec![0, 1, 2, 3]);
}

#[test]
fn test_list_from_locator() {
    let catalog = Catalog::new();
    catalog
        .cmd()
        .args(["list", "--locator", "f.source=%2BUA2017"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Blade Meditation"))
        .stdout(predicate::str::contains("1/4 shown"));
}

#[test]
fn test_list_records_format() {
    let catalog = Catalog::new();
    catalog
        .cmd()
        .args(["--format", "records", "list", "--search", "celerity"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "H psicat=1 records=1 mode=list visible=1 total=4",
        ))
        .stdout(predicate::str::contains(
            "E 1 D \"Celerity\" source=PSA order=\"Nomad\"",
        ));
}

#[test]
fn test_list_unknown_facet_is_usage_error() {
    let catalog = Catalog::new();
    catalog
        .cmd()
        .args(["list", "--include", "school=Evocation"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("school"));
}

#[test]
fn test_list_bad_facet_syntax_is_usage_error() {
    let catalog = Catalog::new();
    catalog
        .cmd()
        .args(["list", "--include", "source"])
        .assert()
        .code(2);
}

#[test]
fn test_list_quiet_hides_footer() {
    let catalog = Catalog::new();
    catalog
        .cmd()
        .args(["--quiet", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("shown").not());
}

#[test]
fn test_list_with_brew() {
    let catalog = Catalog::new();
    catalog
        .cmd()
        .arg("--brew")
        .arg(crate::support::fixture("brew.json"))
        .args(["list", "--include", "source=HB"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Third Eye"))
        .stdout(predicate::str::contains("1/5 shown"));
}

#[test]
fn test_list_broken_brew_rolls_back() {
    let catalog = Catalog::new();
    catalog
        .cmd()
        .arg("--brew")
        .arg(crate::support::fixture("brew.json"))
        .arg("--brew")
        .arg(crate::support::fixture("broken.json"))
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Third Eye").not())
        .stdout(predicate::str::contains("4/4 shown"));
}

#[test]
fn test_list_missing_dataset() {
    let catalog = Catalog::new();
    catalog
        .bare()
        .args(["--data", "/nonexistent/psionics.json", "list"])
        .assert()
        .code(3);
}

#[test]
fn test_list_without_dataset() {
    let catalog = Catalog::new();
    catalog
        .bare()
        .arg("list")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("dataset"));
}

#[test]
fn test_list_table() {
    let catalog = Catalog::new();
    catalog
        .cmd()
        .args(["list", "--table", "--include", "type=T"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "| Name | Source | Text |\n| --- | --- | --- |\n",
        ))
        .stdout(predicate::str::contains(
            "| Blade Meditation | UA2017 | You focus your mind on a blade. |",
        ))
        .stdout(predicate::str::contains("| Mind Thrust | PSA | You thrust a lance"))
        .stdout(predicate::str::contains("Celerity").not());
}

#[test]
fn test_list_table_empty() {
    let catalog = Catalog::new();
    catalog
        .cmd()
        .args(["list", "--table", "--search", "ego whip"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No entries found"));
}
