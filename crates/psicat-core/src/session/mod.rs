//! Session: the one owner of catalog state
//!
//! A [`Session`] holds the entry store, filter set, list index, sublist and
//! selection, and wires them together: appends feed discovered options to
//! the filters, every filter change re-applies the predicate to the list,
//! and the router state is derived from all of it.

use std::time::Instant;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::config::CatalogConfig;
use crate::dataset::DataSource;
use crate::entry::{Entry, RawEntry, RowId};
use crate::error::{PsiError, Result};
use crate::exclude::{Exclusion, NoExclusions};
use crate::filter::{Combine, FilterSet, FilterSubstate, OptionState};
use crate::list::{ListCounts, ListIndex, SearchScope, SortColumn, SortDirection, SortSpec};
use crate::render::{self, Markup};
use crate::router::{self, RouterState};
use crate::store::{AppendReport, EntryStore};
use crate::sublist::{Sublist, SublistState};
use crate::trace_time;

/// Result of merging supplemental data
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeOutcome {
    /// Every source was fetched and appended
    Merged(AppendReport),
    /// A source failed; everything the merge appended was removed again
    RolledBack { source: String, reason: String },
}

pub struct Session {
    store: EntryStore,
    filters: FilterSet,
    list: ListIndex,
    sublist: Sublist,
    exclusion: Box<dyn Exclusion>,
    default_sort: SortSpec,
    selected: Option<RowId>,
    last_viewed: Option<RowId>,
    excluded_total: usize,
    loaded: bool,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("entries", &self.store.len())
            .field("list", &self.list)
            .field("sublist", &self.sublist)
            .field("selected", &self.selected)
            .field("last_viewed", &self.last_viewed)
            .field("loaded", &self.loaded)
            .finish()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(NoExclusions)
    }
}

impl Session {
    pub fn new(exclusion: impl Exclusion + 'static) -> Self {
        Self {
            store: EntryStore::new(),
            filters: FilterSet::default(),
            list: ListIndex::default(),
            sublist: Sublist::new(),
            exclusion: Box::new(exclusion),
            default_sort: SortSpec::default(),
            selected: None,
            last_viewed: None,
            excluded_total: 0,
            loaded: false,
        }
    }

    pub fn with_filters(mut self, filters: FilterSet) -> Self {
        self.filters = filters;
        self
    }

    pub fn with_search_scope(mut self, scope: SearchScope) -> Self {
        self.list.set_scope(scope);
        self
    }

    /// The initial sort, also the one a locator without `sort` restores
    pub fn with_default_sort(mut self, sort: SortSpec) -> Self {
        self.default_sort = sort;
        self.list.sort(sort.column, sort.direction);
        self
    }

    pub fn from_config(config: &CatalogConfig) -> Result<Self> {
        Ok(Self::new(config.exclusion())
            .with_filters(config.filter_set())
            .with_search_scope(config.search_scope())
            .with_default_sort(config.sort_spec()?))
    }

    /// Load the base dataset. On failure the session stays unloaded.
    #[tracing::instrument(skip(self, source), fields(source = %source.describe()))]
    pub fn load_base(&mut self, source: &dyn DataSource) -> Result<AppendReport> {
        let start = Instant::now();
        let dataset = match source.fetch() {
            Ok(dataset) => dataset,
            Err(e) => {
                tracing::error!(error = %e, "failed to load base dataset");
                return Err(e);
            }
        };

        let malformed = dataset.malformed;
        let mut report = self.append_entries(dataset.entries);
        report.malformed += malformed;
        self.refresh();
        self.loaded = true;
        if self.selected.is_none() {
            self.selected = self.list.first_visible();
        }

        trace_time!(start, "load_base", accepted = report.accepted_count());
        Ok(report)
    }

    /// Merge supplemental sources in order. If any source fails, every row,
    /// discovered option and pin added by this call is rolled back and the
    /// failure is reported, not returned. The list is rebuilt once at the
    /// end, so listeners hear about a merge at most once.
    #[tracing::instrument(skip(self, sources), fields(sources = sources.len()))]
    pub fn merge_supplemental(&mut self, sources: &[&dyn DataSource]) -> MergeOutcome {
        let checkpoint = self.store.len();
        let saved_filters = self.filters.clone();
        let saved_excluded = self.excluded_total;
        let mut merged = AppendReport {
            accepted: checkpoint..checkpoint,
            ..Default::default()
        };

        for source in sources {
            match source.fetch() {
                Ok(dataset) => {
                    let mut report = self.append_entries(dataset.entries);
                    report.malformed += dataset.malformed;
                    merged.absorb(report);
                }
                Err(e) => {
                    tracing::warn!(source = %source.describe(), error = %e, "supplemental merge failed; rolling back");
                    self.rollback(checkpoint, saved_filters);
                    self.excluded_total = saved_excluded;
                    return MergeOutcome::RolledBack {
                        source: source.describe(),
                        reason: e.to_string(),
                    };
                }
            }
        }
        self.refresh();
        MergeOutcome::Merged(merged)
    }

    fn rollback(&mut self, len: usize, filters: FilterSet) {
        self.store.truncate(len);
        self.filters = filters;
        self.sublist.retain_below(len);
        self.selected = self.selected.filter(|row| *row < len);
        self.last_viewed = self.last_viewed.filter(|row| *row < len);
        self.refresh();
    }

    /// Append to the store and discover filter options. The list is not
    /// touched until the next `refresh`.
    fn append_entries(&mut self, raws: Vec<RawEntry>) -> AppendReport {
        let report = self.store.append(raws, self.exclusion.as_ref());
        self.excluded_total += report.excluded;
        self.filters.observe(&report);
        tracing::debug!(
            accepted = report.accepted_count(),
            excluded = report.excluded,
            malformed = report.malformed,
            "appended entries"
        );
        report
    }

    /// Reindex and re-filter as one list operation
    fn refresh(&mut self) {
        let filters = self.filters.clone();
        let store = &self.store;
        self.list.batch(|list| {
            list.reindex(store);
            list.filter(move |row| filters.passes(row));
        });
    }

    fn apply_predicate(&mut self) {
        let filters = self.filters.clone();
        self.list.filter(move |row| filters.passes(row));
    }

    pub fn set_filter_state(&mut self, facet: &str, option: &str, state: OptionState) -> Result<()> {
        self.filters.set_state(facet, option, state)?;
        self.apply_predicate();
        Ok(())
    }

    pub fn set_combine(&mut self, facet: &str, combine: Combine) -> Result<()> {
        self.filters.set_combine(facet, combine)?;
        self.apply_predicate();
        Ok(())
    }

    pub fn reset_filters(&mut self) {
        self.filters.reset();
        self.apply_predicate();
    }

    /// Replace the whole filter state
    pub fn apply_filters(&mut self, substate: &FilterSubstate) {
        self.filters.apply_substate(substate);
        self.apply_predicate();
    }

    pub fn search(&mut self, query: &str) {
        self.list.search(query);
    }

    pub fn sort(&mut self, column: SortColumn, direction: SortDirection) {
        self.list.sort(column, direction);
    }

    /// Pin a row. Unknown rows are ignored.
    pub fn pin(&mut self, row: RowId) -> bool {
        if !self.store.contains(row) {
            tracing::debug!(row, "ignoring pin of unknown row");
            return false;
        }
        self.sublist.pin(row)
    }

    pub fn unpin(&mut self, row: RowId) -> bool {
        self.sublist.unpin(row)
    }

    pub fn clear_pins(&mut self) {
        self.sublist.clear();
    }

    /// Pinned rows in pin order
    pub fn selected_ids(&self) -> Vec<RowId> {
        self.sublist.selected_ids()
    }

    /// Select a row for the detail view. Unknown rows are ignored.
    pub fn select(&mut self, row: RowId) -> bool {
        if !self.store.contains(row) {
            return false;
        }
        self.selected = Some(row);
        self.last_viewed = Some(row);
        true
    }

    /// Select a random visible row. Returns `None` when nothing is visible.
    pub fn select_random(&mut self, rng: &mut impl Rng) -> Option<RowId> {
        let visible: Vec<RowId> = self.list.visible_ids().collect();
        let row = *visible.choose(rng)?;
        self.select(row);
        Some(row)
    }

    /// Visible entries as a name/source/text table
    pub fn table_view(&self) -> Markup {
        let visible: Vec<&Entry> = self
            .list
            .visible_ids()
            .filter_map(|row| self.store.get(row))
            .collect();
        render::render_table(&visible)
    }

    /// Apply a locator: filters, search, sort, sublist and selection are
    /// all replaced by what it carries, after dropping rows that do not
    /// exist. Returns the resolved state.
    #[tracing::instrument(skip(self))]
    pub fn navigate(&mut self, locator: &str) -> RouterState {
        let state = router::decode(locator).resolve(self.store.len());

        self.filters.apply_substate(&state.filters);
        let filters = self.filters.clone();
        let sort = state.sort.unwrap_or(self.default_sort);
        let query = state.search.clone().unwrap_or_default();
        self.list.batch(|list| {
            list.filter(move |row| filters.passes(row));
            list.search(&query);
            list.sort(sort.column, sort.direction);
        });

        self.sublist.clear();
        for row in &state.sublist {
            self.sublist.pin(*row);
        }
        self.selected = None;
        if let Some(row) = state.selected {
            self.select(row);
        }
        state
    }

    /// The current state as the router sees it
    pub fn router_state(&self) -> RouterState {
        let query = self.list.query();
        let sort = self.list.sort_spec();
        RouterState {
            selected: self.selected,
            filters: self.filters.substate(),
            sublist: self.sublist.selected_ids(),
            search: (!query.is_empty()).then(|| query.to_string()),
            sort: (sort != self.default_sort).then_some(sort),
        }
    }

    pub fn locator(&self) -> String {
        router::encode(&self.router_state())
    }

    /// Detail view of the selected entry
    pub fn render_selected(&self) -> Option<Markup> {
        self.selected_entry().map(render::render_one)
    }

    /// Book view of the sublist, falling back to the last viewed entry
    pub fn book_view(&self) -> Markup {
        let pinned: Vec<&Entry> = self
            .sublist
            .selected_ids()
            .into_iter()
            .filter_map(|row| self.store.get(row))
            .collect();
        let last_viewed = self.last_viewed.and_then(|row| self.store.get(row));
        render::render_many(&pinned, last_viewed)
    }

    /// Resolve a user reference: a row id, a unique id or an entry name.
    /// `source` narrows name matches.
    pub fn resolve_ref(&self, reference: &str, source: Option<&str>) -> Result<RowId> {
        if let Ok(row) = reference.parse::<RowId>() {
            if self.store.contains(row) {
                return Ok(row);
            }
        }
        if let Some(row) = self.store.find_by_unique_id(reference) {
            return Ok(row);
        }
        match self.store.find_by_name(reference, source).as_slice() {
            [] => Err(PsiError::EntryNotFound {
                reference: reference.to_string(),
            }),
            [row] => Ok(*row),
            rows => Err(PsiError::AmbiguousEntry {
                reference: reference.to_string(),
                count: rows.len(),
            }),
        }
    }

    pub fn sublist_state(&self) -> SublistState {
        self.sublist.to_state(&self.store, self.last_viewed)
    }

    /// Replace the sublist and last viewed entry with persisted state
    pub fn restore_sublist(&mut self, state: &SublistState) {
        let (sublist, last_viewed) = Sublist::from_state(state, &self.store);
        self.sublist = sublist;
        if last_viewed.is_some() {
            self.last_viewed = last_viewed;
        }
    }

    /// True when data loaded but the blocklist hid every entry
    pub fn all_excluded(&self) -> bool {
        self.loaded && self.store.is_empty() && self.excluded_total > 0
    }

    pub fn on_updated(&mut self, listener: impl FnMut(&ListCounts) + 'static) {
        self.list.on_updated(listener);
    }

    pub fn store(&self) -> &EntryStore {
        &self.store
    }

    pub fn filters(&self) -> &FilterSet {
        &self.filters
    }

    pub fn list(&self) -> &ListIndex {
        &self.list
    }

    pub fn sublist(&self) -> &Sublist {
        &self.sublist
    }

    pub fn counts(&self) -> ListCounts {
        self.list.counts()
    }

    pub fn selected(&self) -> Option<RowId> {
        self.selected
    }

    pub fn selected_entry(&self) -> Option<&Entry> {
        self.selected.and_then(|row| self.store.get(row))
    }

    pub fn last_viewed(&self) -> Option<RowId> {
        self.last_viewed
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }
}
