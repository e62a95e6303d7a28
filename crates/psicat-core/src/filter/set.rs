use std::collections::BTreeMap;

use crate::entry::{PsionicType, KNOWN_ORDERS, ORDER_NONE};
use crate::error::{PsiError, Result};
use crate::store::AppendReport;

use super::{Combine, Facet, FacetSubstate, Faceted, FilterSubstate, OptionState};

pub const FACET_SOURCE: &str = "source";
pub const FACET_TYPE: &str = "type";
pub const FACET_ORDER: &str = "order";

/// The catalog's facets: source, type and order
#[derive(Debug, Clone)]
pub struct FilterSet {
    facets: Vec<Facet>,
    defaults: BTreeMap<String, Combine>,
}

impl Default for FilterSet {
    fn default() -> Self {
        Self::new(BTreeMap::new())
    }
}

impl FilterSet {
    /// Build the standard facets. `defaults` maps facet names to their
    /// default combination; unlisted facets use [`Combine::Or`].
    pub fn new(defaults: BTreeMap<String, Combine>) -> Self {
        let combine_for = |name: &str| defaults.get(name).copied().unwrap_or_default();

        let mut orders: Vec<&str> = KNOWN_ORDERS.to_vec();
        orders.push(ORDER_NONE);

        let facets = vec![
            Facet::new(FACET_SOURCE, "Source").with_combine(combine_for(FACET_SOURCE)),
            Facet::new(FACET_TYPE, "Type")
                .with_options(PsionicType::CODES.iter().copied())
                .with_display(PsionicType::code_to_full)
                .with_combine(combine_for(FACET_TYPE)),
            Facet::new(FACET_ORDER, "Order")
                .with_options(orders)
                .with_combine(combine_for(FACET_ORDER)),
        ];

        Self { facets, defaults }
    }

    pub fn facets(&self) -> &[Facet] {
        &self.facets
    }

    pub fn facet(&self, name: &str) -> Option<&Facet> {
        self.facets.iter().find(|f| f.name() == name)
    }

    fn facet_mut(&mut self, name: &str) -> Result<&mut Facet> {
        self.facets
            .iter_mut()
            .find(|f| f.name() == name)
            .ok_or_else(|| PsiError::UnknownFacet(name.to_string()))
    }

    /// Register option values discovered by an append
    pub fn observe(&mut self, report: &AppendReport) {
        for source in &report.new_sources {
            if let Ok(facet) = self.facet_mut(FACET_SOURCE) {
                facet.add_option(source.as_str());
            }
        }
        for order in &report.new_orders {
            if let Ok(facet) = self.facet_mut(FACET_ORDER) {
                facet.add_option(order.as_str());
            }
        }
    }

    pub fn add_option(&mut self, facet: &str, value: &str) -> Result<bool> {
        Ok(self.facet_mut(facet)?.add_option(value))
    }

    pub fn set_state(&mut self, facet: &str, value: &str, state: OptionState) -> Result<()> {
        self.facet_mut(facet)?.set_state(value, state);
        Ok(())
    }

    pub fn set_combine(&mut self, facet: &str, combine: Combine) -> Result<()> {
        self.facet_mut(facet)?.set_combine(combine);
        Ok(())
    }

    fn default_combine(&self, facet: &str) -> Combine {
        self.defaults.get(facet).copied().unwrap_or_default()
    }

    /// Every facet back to all-ignore with its default combination
    pub fn reset(&mut self) {
        for facet in &mut self.facets {
            let combine = self.defaults.get(facet.name()).copied().unwrap_or_default();
            facet.reset(combine);
        }
    }

    pub fn is_active(&self) -> bool {
        self.facets
            .iter()
            .any(|f| f.is_active() || f.combine() != self.default_combine(f.name()))
    }

    /// AND across facets: an item passes only if every facet passes it
    pub fn passes(&self, item: &impl Faceted) -> bool {
        self.facets
            .iter()
            .all(|facet| facet.evaluate(&item.facet_values(facet.name())))
    }

    /// Serializable view of the non-default filter state
    pub fn substate(&self) -> FilterSubstate {
        let facets = self
            .facets
            .iter()
            .map(|facet| {
                let states = facet
                    .options()
                    .map(|(value, state)| (value.to_string(), state))
                    .collect();
                let combine = Some(facet.combine())
                    .filter(|c| *c != self.default_combine(facet.name()));
                (
                    facet.name().to_string(),
                    FacetSubstate::new(states, combine),
                )
            })
            .collect();
        FilterSubstate::new(facets)
    }

    /// Reset, then apply a serialized state. Unknown facets are ignored.
    pub fn apply_substate(&mut self, substate: &FilterSubstate) {
        self.reset();
        for (name, facet_state) in substate.facets() {
            let Ok(facet) = self.facet_mut(name) else {
                tracing::debug!(facet = %name, "ignoring unknown facet in filter state");
                continue;
            };
            if let Some(combine) = facet_state.combine {
                facet.set_combine(combine);
            }
            for (value, state) in &facet_state.states {
                facet.set_state(value, *state);
            }
        }
    }
}
