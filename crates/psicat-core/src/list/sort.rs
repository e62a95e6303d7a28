use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::bail_unsupported;
use crate::error::{PsiError, Result};

use super::ListRow;

/// Sortable list columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortColumn {
    #[default]
    Name,
    Source,
    Type,
    Order,
}

impl SortColumn {
    pub const VALID: &'static [&'static str] = &["name", "source", "type", "order"];
}

impl FromStr for SortColumn {
    type Err = PsiError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "name" => Ok(SortColumn::Name),
            "source" => Ok(SortColumn::Source),
            "type" => Ok(SortColumn::Type),
            "order" => Ok(SortColumn::Order),
            other => bail_unsupported!("sort column", other, Self::VALID.join(", ")),
        }
    }
}

impl fmt::Display for SortColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortColumn::Name => write!(f, "name"),
            SortColumn::Source => write!(f, "source"),
            SortColumn::Type => write!(f, "type"),
            SortColumn::Order => write!(f, "order"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl FromStr for SortDirection {
    type Err = PsiError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            other => bail_unsupported!("sort direction", other, "asc, desc"),
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Asc => write!(f, "asc"),
            SortDirection::Desc => write!(f, "desc"),
        }
    }
}

/// A column plus a direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct SortSpec {
    pub column: SortColumn,
    #[serde(default)]
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn new(column: SortColumn, direction: SortDirection) -> Self {
        Self { column, direction }
    }

    /// Total order over rows: the column key in the chosen direction, then
    /// the row id ascending so that ties keep insertion order.
    pub(crate) fn compare(&self, a: &ListRow, b: &ListRow) -> Ordering {
        let by_key = match self.column {
            SortColumn::Name => a.name_key.cmp(&b.name_key),
            SortColumn::Source => a.source_key.cmp(&b.source_key),
            SortColumn::Type => a.kind.full_name().cmp(b.kind.full_name()),
            SortColumn::Order => a.order_key.cmp(&b.order_key),
        };
        let by_key = match self.direction {
            SortDirection::Asc => by_key,
            SortDirection::Desc => by_key.reverse(),
        };
        by_key.then_with(|| a.row.cmp(&b.row))
    }
}

/// `column:direction`, e.g. `name:asc`
impl fmt::Display for SortSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.column, self.direction)
    }
}

impl FromStr for SortSpec {
    type Err = PsiError;

    fn from_str(s: &str) -> Result<Self> {
        let (column, direction) = match s.split_once(':') {
            Some((c, d)) => (c.parse()?, d.parse()?),
            None => (s.parse()?, SortDirection::default()),
        };
        Ok(Self { column, direction })
    }
}
