//! Catalog entries
//!
//! [`RawEntry`] mirrors the dataset record with every field optional;
//! [`Entry::from_raw`] validates it into the typed [`Entry`] kept by the
//! store.

pub mod types;

use serde::{Deserialize, Serialize};

use crate::error::{PsiError, Result};
use crate::filter::{Faceted, FACET_ORDER, FACET_SOURCE, FACET_TYPE};
pub use types::{Concentration, Cost, Mode, PsionicType, KNOWN_ORDERS, ORDER_NONE};

/// Stable positional identifier of an entry within a session
pub type RowId = usize;

/// Dataset record as it arrives, before validation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEntry {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub order: Option<String>,
    #[serde(default)]
    pub modes: Option<Vec<Mode>>,
    #[serde(default)]
    pub unique_id: Option<String>,
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub focus: Option<String>,
    #[serde(default)]
    pub entries: Option<Vec<serde_json::Value>>,
}

/// A validated catalog entry
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub name: String,
    pub source: String,
    #[serde(rename = "type")]
    pub kind: PsionicType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub modes: Vec<Mode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unique_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focus: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub entries: Vec<serde_json::Value>,
    /// Full order text, cached at append time
    pub display_order: String,
}

impl Entry {
    /// Validate a raw record. `name`, `source` and `type` are required.
    pub fn from_raw(raw: RawEntry) -> Result<Self> {
        let name = required(raw.name, "name")?;
        let source = required(raw.source, "source")?;
        let kind = required(raw.kind, "type")?
            .parse::<PsionicType>()
            .map_err(|e| PsiError::InvalidEntry {
                reason: format!("{} ({})", e, name),
            })?;

        // Talents never belong to an order, whatever the record says
        let order = match kind {
            PsionicType::Talent => None,
            PsionicType::Discipline => raw.order.filter(|o| !o.trim().is_empty()),
        };
        let display_order = order_to_full(order.as_deref());

        Ok(Entry {
            name,
            source,
            kind,
            order,
            modes: raw.modes.unwrap_or_default(),
            unique_id: raw.unique_id,
            page: raw.page,
            focus: raw.focus,
            entries: raw.entries.unwrap_or_default(),
            display_order,
        })
    }

    /// The persisted reference for this entry: its unique id, else the row id
    pub fn stable_id(&self, row: RowId) -> String {
        self.unique_id.clone().unwrap_or_else(|| row.to_string())
    }

    /// Names of every mode and submode, depth-first
    pub fn mode_names(&self) -> Vec<&str> {
        let mut names = Vec::new();
        collect_mode_names(&self.modes, &mut names);
        names
    }
}

impl Faceted for Entry {
    fn facet_values(&self, facet: &str) -> Vec<&str> {
        match facet {
            FACET_SOURCE => vec![self.source.as_str()],
            FACET_TYPE => vec![self.kind.code()],
            FACET_ORDER => vec![self.display_order.as_str()],
            _ => Vec::new(),
        }
    }
}

fn collect_mode_names<'a>(modes: &'a [Mode], out: &mut Vec<&'a str>) {
    for mode in modes {
        out.push(mode.name.as_str());
        collect_mode_names(&mode.submodes, out);
    }
}

fn required(value: Option<String>, field: &str) -> Result<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(PsiError::InvalidEntry {
            reason: format!("missing required field `{}`", field),
        }),
    }
}

/// Full display text of an order, `None` for entries without one
pub fn order_to_full(order: Option<&str>) -> String {
    order.unwrap_or(ORDER_NONE).to_string()
}
