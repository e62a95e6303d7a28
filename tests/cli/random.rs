use crate::support::{stdout_json, Catalog};
use predicates::prelude::*;

// ============================================================================
// Random command tests
// ============================================================================

#[test]
fn test_random_picks_from_filtered_list() {
    let catalog = Catalog::new();
    for _ in 0..5 {
        let output = catalog
            .cmd()
            .args(["--format", "json", "random", "--include", "type=D"])
            .output()
            .unwrap();
        assert!(output.status.success());
        let json = stdout_json(&output);
        let name = json["name"].as_str().unwrap();
        assert!(name == "Celerity" || name == "Mantle of Awe", "{}", name);
    }
}

#[test]
fn test_random_single_candidate_renders_it() {
    let catalog = Catalog::new();
    catalog
        .cmd()
        .args(["random", "--search", "blade"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("# Blade Meditation"));
}

#[test]
fn test_random_pick_becomes_last_viewed() {
    let catalog = Catalog::new();
    catalog
        .cmd()
        .args(["random", "--include", "source=UA2017"])
        .assert()
        .success();
    catalog
        .cmd()
        .arg("book")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("# Blade Meditation"));
}

#[test]
fn test_random_with_nothing_visible() {
    let catalog = Catalog::new();
    catalog
        .cmd()
        .args(["random", "--search", "ego whip"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No entries found"));
}
