//! Router: locator strings to and from [`RouterState`]
//!
//! A locator is a set of `application/x-www-form-urlencoded` pairs. Every
//! pair is optional and their order does not matter:
//!
//! - `sel=<row>` the selected entry
//! - `f.<facet>=+<option>` / `f.<facet>=-<option>` an included/excluded option
//! - `m.<facet>=and|or` a facet's include combination
//! - `q=<text>` the search text
//! - `sort=<column>:<direction>`
//! - `pin=<row>` repeated, in pin order
//!
//! Unknown keys and malformed values are ignored, so garbage decodes to the
//! default state.

use std::collections::BTreeMap;

use url::form_urlencoded;

use crate::entry::RowId;
use crate::filter::{Combine, FacetSubstate, FilterSubstate, OptionState};
use crate::list::SortSpec;

const KEY_SELECTED: &str = "sel";
const KEY_SEARCH: &str = "q";
const KEY_SORT: &str = "sort";
const KEY_PIN: &str = "pin";
const FILTER_PREFIX: &str = "f.";
const COMBINE_PREFIX: &str = "m.";

/// Everything a locator can carry
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouterState {
    pub selected: Option<RowId>,
    pub filters: FilterSubstate,
    /// Pinned rows in pin order, without duplicates
    pub sublist: Vec<RowId>,
    pub search: Option<String>,
    pub sort: Option<SortSpec>,
}

impl RouterState {
    /// Drop the selection and any pins that do not name a row of a store
    /// holding `len` entries
    pub fn resolve(mut self, len: usize) -> Self {
        self.selected = self.selected.filter(|row| *row < len);
        self.sublist.retain(|row| *row < len);
        self
    }
}

/// Encode a state as a locator
pub fn encode(state: &RouterState) -> String {
    let mut out = form_urlencoded::Serializer::new(String::new());
    if let Some(row) = state.selected {
        out.append_pair(KEY_SELECTED, &row.to_string());
    }
    for (facet, facet_state) in state.filters.facets() {
        let key = format!("{}{}", FILTER_PREFIX, facet);
        for (option, option_state) in &facet_state.states {
            let sign = match option_state {
                OptionState::Include => '+',
                OptionState::Exclude => '-',
                OptionState::Ignore => continue,
            };
            out.append_pair(&key, &format!("{}{}", sign, option));
        }
        if let Some(combine) = facet_state.combine {
            out.append_pair(&format!("{}{}", COMBINE_PREFIX, facet), &combine.to_string());
        }
    }
    if let Some(search) = state.search.as_deref().filter(|s| !s.is_empty()) {
        out.append_pair(KEY_SEARCH, search);
    }
    if let Some(sort) = state.sort {
        out.append_pair(KEY_SORT, &sort.to_string());
    }
    for row in &state.sublist {
        out.append_pair(KEY_PIN, &row.to_string());
    }
    out.finish()
}

/// Decode a locator. A leading `#` or `?` is skipped.
pub fn decode(locator: &str) -> RouterState {
    let locator = locator
        .strip_prefix('#')
        .or_else(|| locator.strip_prefix('?'))
        .unwrap_or(locator);

    let mut state = RouterState::default();
    let mut states: BTreeMap<String, BTreeMap<String, OptionState>> = BTreeMap::new();
    let mut combines: BTreeMap<String, Combine> = BTreeMap::new();

    for (key, value) in form_urlencoded::parse(locator.as_bytes()) {
        match key.as_ref() {
            KEY_SELECTED => {
                if let Ok(row) = value.parse() {
                    state.selected = Some(row);
                }
            }
            KEY_SEARCH if !value.is_empty() => state.search = Some(value.into_owned()),
            KEY_SORT => {
                if let Ok(sort) = value.parse() {
                    state.sort = Some(sort);
                }
            }
            KEY_PIN => {
                if let Ok(row) = value.parse::<RowId>() {
                    if !state.sublist.contains(&row) {
                        state.sublist.push(row);
                    }
                }
            }
            other => {
                if let Some(facet) = other.strip_prefix(FILTER_PREFIX) {
                    if let Some((option, option_state)) = parse_option(&value) {
                        states
                            .entry(facet.to_string())
                            .or_default()
                            .insert(option, option_state);
                    }
                } else if let Some(facet) = other.strip_prefix(COMBINE_PREFIX) {
                    if let Ok(combine) = value.parse() {
                        combines.insert(facet.to_string(), combine);
                    }
                } else {
                    tracing::trace!(key = %other, "ignoring unknown locator key");
                }
            }
        }
    }

    let mut facets: BTreeMap<String, FacetSubstate> = BTreeMap::new();
    for (facet, options) in states {
        let combine = combines.remove(&facet);
        facets.insert(facet, FacetSubstate::new(options, combine));
    }
    for (facet, combine) in combines {
        facets.insert(facet, FacetSubstate::new(BTreeMap::new(), Some(combine)));
    }
    state.filters = FilterSubstate::new(facets);
    state
}

fn parse_option(value: &str) -> Option<(String, OptionState)> {
    let mut chars = value.chars();
    let state = match chars.next()? {
        '+' => OptionState::Include,
        '-' => OptionState::Exclude,
        _ => return None,
    };
    let option = chars.as_str();
    if option.is_empty() {
        return None;
    }
    Some((option.to_string(), state))
}
