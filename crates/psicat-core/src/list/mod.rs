//! List index
//!
//! A searchable, sortable, filterable view over the entry store's rows.
//! Visibility of a row is always `search hit AND filter hit`, both computed
//! from the last query and the last predicate, and recomputed for the whole
//! set on every change.
//!
//! `updated` listeners fire at most once per logical operation, and only
//! when the full set or the visible set changed. [`ListIndex::batch`] groups
//! several operations into one logical operation.

mod sort;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::entry::{Entry, PsionicType, RowId};
use crate::filter::{Faceted, FACET_ORDER, FACET_SOURCE, FACET_TYPE};
use crate::store::EntryStore;
pub use sort::{SortColumn, SortDirection, SortSpec};

type Predicate = Box<dyn Fn(&ListRow) -> bool>;
type Listener = Box<dyn FnMut(&ListCounts)>;

/// What free-text search looks at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchScope {
    /// Entry names only
    #[default]
    Name,
    /// Entry names plus every mode and submode name
    NameAndModes,
}

/// Visible and total row counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ListCounts {
    pub visible: usize,
    pub total: usize,
}

impl fmt::Display for ListCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.visible, self.total)
    }
}

/// One indexed row with cached searchable and sortable values
#[derive(Debug, Clone)]
pub struct ListRow {
    pub row: RowId,
    pub name: String,
    pub source: String,
    pub kind: PsionicType,
    pub display_order: String,
    pub(crate) name_key: String,
    pub(crate) source_key: String,
    pub(crate) order_key: String,
    modes_key: String,
    search_hit: bool,
    filter_hit: bool,
}

impl ListRow {
    fn from_entry(row: RowId, entry: &Entry) -> Self {
        Self {
            row,
            name: entry.name.clone(),
            source: entry.source.clone(),
            kind: entry.kind,
            display_order: entry.display_order.clone(),
            name_key: entry.name.to_lowercase(),
            source_key: entry.source.to_lowercase(),
            order_key: entry.display_order.to_lowercase(),
            modes_key: entry.mode_names().join("\n").to_lowercase(),
            search_hit: true,
            filter_hit: true,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.search_hit && self.filter_hit
    }

    fn matches(&self, needle: &str, scope: SearchScope) -> bool {
        if needle.is_empty() || self.name_key.contains(needle) {
            return true;
        }
        scope == SearchScope::NameAndModes && self.modes_key.contains(needle)
    }
}

impl Faceted for ListRow {
    fn facet_values(&self, facet: &str) -> Vec<&str> {
        match facet {
            FACET_SOURCE => vec![self.source.as_str()],
            FACET_TYPE => vec![self.kind.code()],
            FACET_ORDER => vec![self.display_order.as_str()],
            _ => Vec::new(),
        }
    }
}

/// Snapshot used to decide whether an operation changed anything
#[derive(PartialEq, Eq)]
struct Visibility {
    total: usize,
    visible: Vec<RowId>,
}

pub struct ListIndex {
    /// Rows in current sort order
    rows: Vec<ListRow>,
    query: String,
    scope: SearchScope,
    sort: SortSpec,
    predicate: Option<Predicate>,
    listeners: Vec<Listener>,
    depth: usize,
}

impl fmt::Debug for ListIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListIndex")
            .field("rows", &self.rows.len())
            .field("query", &self.query)
            .field("scope", &self.scope)
            .field("sort", &self.sort)
            .field("filtered", &self.predicate.is_some())
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl Default for ListIndex {
    fn default() -> Self {
        Self::new(SearchScope::default(), SortSpec::default())
    }
}

impl ListIndex {
    pub fn new(scope: SearchScope, sort: SortSpec) -> Self {
        Self {
            rows: Vec::new(),
            query: String::new(),
            scope,
            sort,
            predicate: None,
            listeners: Vec::new(),
            depth: 0,
        }
    }

    /// Register a listener for the `updated` event
    pub fn on_updated(&mut self, listener: impl FnMut(&ListCounts) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Run several operations as one logical operation: listeners fire at
    /// most once, after `f` returns.
    pub fn batch<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
        if self.depth > 0 {
            return f(self);
        }

        let before = self.visibility();
        self.depth += 1;
        let out = f(self);
        self.depth -= 1;

        if self.visibility() != before {
            let counts = self.counts();
            tracing::trace!(%counts, "list updated");
            for listener in &mut self.listeners {
                listener(&counts);
            }
        }
        out
    }

    /// Rebuild from the store, keeping the current query, sort and predicate
    pub fn reindex(&mut self, store: &EntryStore) {
        self.batch(|list| {
            list.rows = store
                .iter()
                .map(|(row, entry)| ListRow::from_entry(row, entry))
                .collect();
            list.apply_search();
            list.apply_predicate();
            list.sort_rows();
        });
    }

    /// Case-insensitive substring search over the full set
    pub fn search(&mut self, query: &str) {
        self.batch(|list| {
            list.query = query.trim().to_string();
            list.apply_search();
        });
    }

    pub fn set_scope(&mut self, scope: SearchScope) {
        self.batch(|list| {
            list.scope = scope;
            list.apply_search();
        });
    }

    /// Stable sort; ties keep insertion order
    pub fn sort(&mut self, column: SortColumn, direction: SortDirection) {
        self.batch(|list| {
            list.sort = SortSpec::new(column, direction);
            list.sort_rows();
        });
    }

    /// Recompute every row's visibility against `predicate`. The predicate
    /// is kept and re-applied to rows added by later reindexing.
    pub fn filter(&mut self, predicate: impl Fn(&ListRow) -> bool + 'static) {
        self.batch(|list| {
            list.predicate = Some(Box::new(predicate));
            list.apply_predicate();
        });
    }

    fn apply_search(&mut self) {
        let needle = self.query.to_lowercase();
        for row in &mut self.rows {
            row.search_hit = row.matches(&needle, self.scope);
        }
    }

    fn apply_predicate(&mut self) {
        for row in &mut self.rows {
            row.filter_hit = self.predicate.as_ref().map_or(true, |p| p(row));
        }
    }

    fn sort_rows(&mut self) {
        let spec = self.sort;
        self.rows.sort_by(|a, b| spec.compare(a, b));
    }

    fn visibility(&self) -> Visibility {
        let mut visible: Vec<RowId> = self.visible_ids().collect();
        visible.sort_unstable();
        Visibility {
            total: self.rows.len(),
            visible,
        }
    }

    /// All rows in sort order
    pub fn rows(&self) -> &[ListRow] {
        &self.rows
    }

    /// Visible rows in sort order
    pub fn visible_rows(&self) -> impl Iterator<Item = &ListRow> {
        self.rows.iter().filter(|r| r.is_visible())
    }

    pub fn visible_ids(&self) -> impl Iterator<Item = RowId> + '_ {
        self.visible_rows().map(|r| r.row)
    }

    /// The first visible row in sort order, for auto-selection
    pub fn first_visible(&self) -> Option<RowId> {
        self.visible_ids().next()
    }

    pub fn counts(&self) -> ListCounts {
        ListCounts {
            visible: self.visible_rows().count(),
            total: self.rows.len(),
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn sort_spec(&self) -> SortSpec {
        self.sort
    }

    pub fn scope(&self) -> SearchScope {
        self.scope
    }
}
