//! Applying filter, search and sort flags to a session

use crate::cli::commands::ViewArgs;
use psicat_core::entry::PsionicType;
use psicat_core::error::Result;
use psicat_core::filter::{OptionState, FACET_TYPE};
use psicat_core::list::SortDirection;
use psicat_core::session::Session;

/// Apply `--include`, `--exclude`, `--combine`, `--search` and `--sort`
/// on top of the session's current state
pub fn apply_view(session: &mut Session, view: &ViewArgs) -> Result<()> {
    for item in &view.include {
        let option = option_value(&item.facet, &item.value);
        session.set_filter_state(&item.facet, &option, OptionState::Include)?;
    }
    for item in &view.exclude {
        let option = option_value(&item.facet, &item.value);
        session.set_filter_state(&item.facet, &option, OptionState::Exclude)?;
    }
    for item in &view.combine {
        session.set_combine(&item.facet, item.combine)?;
    }
    if let Some(query) = &view.search {
        session.search(query);
    }
    if view.sort.is_some() || view.desc {
        let column = view
            .sort
            .unwrap_or_else(|| session.list().sort_spec().column);
        let direction = if view.desc {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        };
        session.sort(column, direction);
    }
    Ok(())
}

/// The type facet stores codes; accept `talent`/`discipline` too
fn option_value(facet: &str, value: &str) -> String {
    if facet == FACET_TYPE {
        if let Ok(kind) = value.parse::<PsionicType>() {
            return kind.code().to_string();
        }
    }
    value.to_string()
}
