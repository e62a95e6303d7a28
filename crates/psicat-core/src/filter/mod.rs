//! Facet filters
//!
//! A [`Facet`] is one filterable dimension with a discovered set of option
//! values, each in a tri-state ([`OptionState`]). [`Facet::evaluate`] is the
//! single per-facet predicate; [`FilterSet::passes`] is the AND-combinator
//! across facets.

mod set;
mod substate;

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::bail_unsupported;
use crate::error::{PsiError, Result};
pub use set::{FilterSet, FACET_ORDER, FACET_SOURCE, FACET_TYPE};
pub use substate::{FacetSubstate, FilterSubstate};

/// Per-option filter state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionState {
    /// Entries must carry this value (see [`Combine`])
    Include,
    /// Entries carrying this value are hidden
    Exclude,
    /// The option takes no part in filtering
    #[default]
    Ignore,
}

impl FromStr for OptionState {
    type Err = PsiError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "include" | "+" => Ok(OptionState::Include),
            "exclude" | "-" => Ok(OptionState::Exclude),
            "ignore" => Ok(OptionState::Ignore),
            other => bail_unsupported!("filter state", other, "include, exclude, ignore"),
        }
    }
}

impl fmt::Display for OptionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionState::Include => write!(f, "include"),
            OptionState::Exclude => write!(f, "exclude"),
            OptionState::Ignore => write!(f, "ignore"),
        }
    }
}

/// How the included options of one facet combine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Combine {
    /// Pass when any value is included
    #[default]
    Or,
    /// Pass when every included option is among the values
    And,
}

impl FromStr for Combine {
    type Err = PsiError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "or" => Ok(Combine::Or),
            "and" => Ok(Combine::And),
            other => bail_unsupported!("combine mode", other, "and, or"),
        }
    }
}

impl fmt::Display for Combine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Combine::Or => write!(f, "or"),
            Combine::And => write!(f, "and"),
        }
    }
}

/// Anything that exposes values per facet name (entries, list rows)
pub trait Faceted {
    fn facet_values(&self, facet: &str) -> Vec<&str>;
}

/// One filterable dimension
#[derive(Debug, Clone)]
pub struct Facet {
    name: String,
    header: String,
    options: IndexMap<String, OptionState>,
    combine: Combine,
    display: Option<fn(&str) -> String>,
}

impl Facet {
    pub fn new(name: impl Into<String>, header: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            header: header.into(),
            options: IndexMap::new(),
            combine: Combine::default(),
            display: None,
        }
    }

    /// Seed the facet with known option values
    pub fn with_options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for option in options {
            self.add_option(option);
        }
        self
    }

    /// Map option values to display text (e.g. `T` to `Talent`)
    pub fn with_display(mut self, display: fn(&str) -> String) -> Self {
        self.display = Some(display);
        self
    }

    pub fn with_combine(mut self, combine: Combine) -> Self {
        self.combine = combine;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    pub fn combine(&self) -> Combine {
        self.combine
    }

    pub fn set_combine(&mut self, combine: Combine) {
        self.combine = combine;
    }

    /// Register an option value. Returns false when it was already known;
    /// existing states are never touched.
    pub fn add_option(&mut self, value: impl Into<String>) -> bool {
        let value = value.into();
        if self.options.contains_key(&value) {
            return false;
        }
        self.options.insert(value, OptionState::Ignore);
        true
    }

    /// Set the state of an option, registering it first if unseen
    pub fn set_state(&mut self, value: &str, state: OptionState) {
        match self.options.get_mut(value) {
            Some(current) => *current = state,
            None => {
                self.options.insert(value.to_string(), state);
            }
        }
    }

    pub fn state(&self, value: &str) -> Option<OptionState> {
        self.options.get(value).copied()
    }

    /// Known options with their states, in discovery order
    pub fn options(&self) -> impl Iterator<Item = (&str, OptionState)> {
        self.options.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn display_value(&self, value: &str) -> String {
        match self.display {
            Some(display) => display(value),
            None => value.to_string(),
        }
    }

    /// True when at least one option is not ignored
    pub fn is_active(&self) -> bool {
        self.options.values().any(|s| *s != OptionState::Ignore)
    }

    /// Return every option to `Ignore` and the combination to the default
    pub fn reset(&mut self, combine: Combine) {
        for state in self.options.values_mut() {
            *state = OptionState::Ignore;
        }
        self.combine = combine;
    }

    /// Evaluate the facet against an entry's values for it
    pub fn evaluate(&self, values: &[&str]) -> bool {
        let state_of = |v: &&str| self.options.get(*v).copied().unwrap_or_default();

        if values.iter().any(|v| state_of(v) == OptionState::Exclude) {
            return false;
        }

        let mut includes = self
            .options
            .iter()
            .filter(|(_, s)| **s == OptionState::Include)
            .map(|(k, _)| k.as_str())
            .peekable();
        if includes.peek().is_none() {
            return true;
        }

        match self.combine {
            Combine::Or => values.iter().any(|v| state_of(v) == OptionState::Include),
            Combine::And => includes.all(|inc| values.contains(&inc)),
        }
    }
}
