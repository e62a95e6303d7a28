//! Entry store
//!
//! Append-only collection of accepted entries. The position of an entry is
//! its [`RowId`] for the lifetime of the session.

use std::collections::BTreeSet;
use std::ops::Range;

use crate::entry::{Entry, RawEntry, RowId};
use crate::exclude::{Exclusion, CATEGORY_PSIONIC};

/// Outcome of one [`EntryStore::append`] call
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppendReport {
    /// Row ids assigned to the accepted entries
    pub accepted: Range<RowId>,
    /// Entries skipped by the exclusion collaborator
    pub excluded: usize,
    /// Entries skipped because a required field was missing or invalid
    pub malformed: usize,
    /// Sources seen for the first time, in arrival order
    pub new_sources: Vec<String>,
    /// Orders seen for the first time, in arrival order
    pub new_orders: Vec<String>,
}

impl AppendReport {
    pub fn accepted_count(&self) -> usize {
        self.accepted.len()
    }

    /// Fold a later report into this one (used when merging several sources)
    pub fn absorb(&mut self, other: AppendReport) {
        if self.accepted.is_empty() {
            self.accepted = other.accepted;
        } else if !other.accepted.is_empty() {
            self.accepted = self.accepted.start..other.accepted.end;
        }
        self.excluded += other.excluded;
        self.malformed += other.malformed;
        self.new_sources.extend(other.new_sources);
        self.new_orders.extend(other.new_orders);
    }
}

/// The growing ordered collection of loaded entries
#[derive(Debug, Default)]
pub struct EntryStore {
    entries: Vec<Entry>,
    sources: BTreeSet<String>,
    orders: BTreeSet<String>,
}

impl EntryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate, filter and append a batch of raw entries
    pub fn append(&mut self, raws: Vec<RawEntry>, exclusion: &dyn Exclusion) -> AppendReport {
        let start = self.entries.len();
        let mut report = AppendReport::default();

        for raw in raws {
            let entry = match Entry::from_raw(raw) {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!(error = %e, "skipping malformed entry");
                    report.malformed += 1;
                    continue;
                }
            };

            if exclusion.is_excluded(&entry.name, CATEGORY_PSIONIC, &entry.source) {
                tracing::debug!(name = %entry.name, source = %entry.source, "entry excluded");
                report.excluded += 1;
                continue;
            }

            if self.sources.insert(entry.source.clone()) {
                report.new_sources.push(entry.source.clone());
            }
            if self.orders.insert(entry.display_order.clone()) {
                report.new_orders.push(entry.display_order.clone());
            }

            self.entries.push(entry);
        }

        report.accepted = start..self.entries.len();
        report
    }

    /// Drop every row at or past `len`. Only used to undo a failed merge.
    pub(crate) fn truncate(&mut self, len: usize) {
        if len >= self.entries.len() {
            return;
        }
        self.entries.truncate(len);
        self.sources = self.entries.iter().map(|e| e.source.clone()).collect();
        self.orders = self
            .entries
            .iter()
            .map(|e| e.display_order.clone())
            .collect();
    }

    pub fn get(&self, row: RowId) -> Option<&Entry> {
        self.entries.get(row)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, row: RowId) -> bool {
        row < self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (RowId, &Entry)> {
        self.entries.iter().enumerate()
    }

    /// Find the row of an entry by its explicit unique id
    pub fn find_by_unique_id(&self, unique_id: &str) -> Option<RowId> {
        self.entries
            .iter()
            .position(|e| e.unique_id.as_deref() == Some(unique_id))
    }

    /// Rows whose name matches case-insensitively, optionally narrowed by source
    pub fn find_by_name(&self, name: &str, source: Option<&str>) -> Vec<RowId> {
        self.iter()
            .filter(|(_, e)| e.name.eq_ignore_ascii_case(name))
            .filter(|(_, e)| source.map_or(true, |s| e.source.eq_ignore_ascii_case(s)))
            .map(|(row, _)| row)
            .collect()
    }
}
