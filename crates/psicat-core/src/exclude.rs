//! Exclusion (blocklist) lookup consulted once per entry at append time

use serde::{Deserialize, Serialize};

/// Category passed to [`Exclusion::is_excluded`] for every catalog entry
pub const CATEGORY_PSIONIC: &str = "psionic";

const WILDCARD: &str = "*";

/// Decides whether an entry is hidden from the catalog entirely
pub trait Exclusion {
    fn is_excluded(&self, name: &str, category: &str, source: &str) -> bool;
}

impl<F> Exclusion for F
where
    F: Fn(&str, &str, &str) -> bool,
{
    fn is_excluded(&self, name: &str, category: &str, source: &str) -> bool {
        self(name, category, source)
    }
}

/// Excludes nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct NoExclusions;

impl Exclusion for NoExclusions {
    fn is_excluded(&self, _name: &str, _category: &str, _source: &str) -> bool {
        false
    }
}

/// One blocklist rule. Each field matches case-insensitively; `*` matches anything.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExcludeRule {
    #[serde(default = "wildcard")]
    pub name: String,
    #[serde(default = "wildcard")]
    pub category: String,
    #[serde(default = "wildcard")]
    pub source: String,
}

fn wildcard() -> String {
    WILDCARD.to_string()
}

impl ExcludeRule {
    pub fn matches(&self, name: &str, category: &str, source: &str) -> bool {
        field_matches(&self.name, name)
            && field_matches(&self.category, category)
            && field_matches(&self.source, source)
    }
}

fn field_matches(rule: &str, value: &str) -> bool {
    rule == WILDCARD || rule.eq_ignore_ascii_case(value)
}

/// A list of rules; an entry is excluded when any rule matches
#[derive(Debug, Clone, Default)]
pub struct ExcludeList {
    rules: Vec<ExcludeRule>,
}

impl ExcludeList {
    pub fn new(rules: Vec<ExcludeRule>) -> Self {
        Self { rules }
    }
}

impl Exclusion for ExcludeList {
    fn is_excluded(&self, name: &str, category: &str, source: &str) -> bool {
        self.rules
            .iter()
            .any(|rule| rule.matches(name, category, source))
    }
}
