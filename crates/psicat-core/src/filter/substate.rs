use std::collections::BTreeMap;

use super::{Combine, OptionState};

/// Serialized state of one facet
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FacetSubstate {
    /// Non-ignored options only
    pub states: BTreeMap<String, OptionState>,
    /// `None` means the facet's default combination
    pub combine: Option<Combine>,
}

impl FacetSubstate {
    /// Build a facet state, dropping ignored and empty-named options
    pub fn new(states: BTreeMap<String, OptionState>, combine: Option<Combine>) -> Self {
        let states = states
            .into_iter()
            .filter(|(value, state)| !value.is_empty() && *state != OptionState::Ignore)
            .collect();
        Self { states, combine }
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty() && self.combine.is_none()
    }
}

/// Serialized state of every facet, in the canonical form the router
/// encodes: only facets that differ from their default appear.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterSubstate {
    facets: BTreeMap<String, FacetSubstate>,
}

impl FilterSubstate {
    pub fn new(facets: BTreeMap<String, FacetSubstate>) -> Self {
        let facets = facets
            .into_iter()
            .filter(|(name, facet)| !name.is_empty() && !facet.is_empty())
            .collect();
        Self { facets }
    }

    pub fn facets(&self) -> impl Iterator<Item = (&str, &FacetSubstate)> {
        self.facets.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn facet(&self, name: &str) -> Option<&FacetSubstate> {
        self.facets.get(name)
    }

    pub fn is_empty(&self) -> bool {
        self.facets.is_empty()
    }
}
