//! Sublist: the user's pinned entries, in pin order
//!
//! Independent of list visibility. Persisted as a [`SublistState`] JSON
//! document that references entries by unique id where they have one and by
//! row id otherwise.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::entry::RowId;
use crate::error::{PsiError, Result};
use crate::store::EntryStore;

/// Pinned row ids in pin order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sublist {
    pins: IndexSet<RowId>,
}

impl Sublist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pin a row. Returns false if it was already pinned.
    pub fn pin(&mut self, row: RowId) -> bool {
        self.pins.insert(row)
    }

    /// Unpin a row, keeping the order of the rest. Returns false if it was
    /// not pinned.
    pub fn unpin(&mut self, row: RowId) -> bool {
        self.pins.shift_remove(&row)
    }

    pub fn contains(&self, row: RowId) -> bool {
        self.pins.contains(&row)
    }

    pub fn clear(&mut self) {
        self.pins.clear();
    }

    pub fn len(&self) -> usize {
        self.pins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pins.is_empty()
    }

    /// Pinned rows in pin order
    pub fn selected_ids(&self) -> Vec<RowId> {
        self.pins.iter().copied().collect()
    }

    /// Drop pins to rows at or past `len`
    pub(crate) fn retain_below(&mut self, len: usize) {
        self.pins.retain(|row| *row < len);
    }

    /// Build the persisted form
    pub fn to_state(&self, store: &EntryStore, last_viewed: Option<RowId>) -> SublistState {
        SublistState {
            items: self
                .pins
                .iter()
                .filter_map(|row| PinRef::for_row(store, *row))
                .collect(),
            last_viewed: last_viewed.and_then(|row| PinRef::for_row(store, row)),
            saved: Some(Utc::now()),
        }
    }

    /// Restore from the persisted form. References that no longer resolve
    /// are dropped. Returns the sublist and the last viewed row.
    pub fn from_state(state: &SublistState, store: &EntryStore) -> (Self, Option<RowId>) {
        let mut sublist = Sublist::new();
        for item in &state.items {
            match item.resolve(store) {
                Some(row) => {
                    sublist.pin(row);
                }
                None => tracing::debug!(?item, "dropping unresolved pin"),
            }
        }
        let last_viewed = state.last_viewed.as_ref().and_then(|r| r.resolve(store));
        (sublist, last_viewed)
    }
}

/// Reference to a pinned entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PinRef {
    Unique {
        #[serde(rename = "uniqueId")]
        unique_id: String,
    },
    Row {
        row: RowId,
    },
}

impl PinRef {
    fn for_row(store: &EntryStore, row: RowId) -> Option<Self> {
        let entry = store.get(row)?;
        Some(match &entry.unique_id {
            Some(unique_id) => PinRef::Unique {
                unique_id: unique_id.clone(),
            },
            None => PinRef::Row { row },
        })
    }

    fn resolve(&self, store: &EntryStore) -> Option<RowId> {
        match self {
            PinRef::Unique { unique_id } => store.find_by_unique_id(unique_id),
            PinRef::Row { row } => Some(*row).filter(|r| store.contains(*r)),
        }
    }
}

/// Persisted sublist document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SublistState {
    #[serde(default)]
    pub items: Vec<PinRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_viewed: Option<PinRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved: Option<DateTime<Utc>>,
}

impl SublistState {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a state file. A missing file is not an error.
    pub fn load(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path).map_err(|e| {
            PsiError::failed(&format!("read sublist {}", path.display()), e)
        })?;
        Self::from_json(&content).map(Some)
    }

    /// Write a state file, creating its directory if needed
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }
        fs::write(path, self.to_json()?).map_err(|e| {
            PsiError::failed(&format!("write sublist {}", path.display()), e)
        })
    }
}
