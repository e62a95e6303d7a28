use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::bail_unsupported;
use crate::error::{PsiError, Result};

/// Display text for entries without a meaningful order (every talent)
pub const ORDER_NONE: &str = "None";

/// Orders shipped with the base dataset, in filter display order
pub const KNOWN_ORDERS: &[&str] = &["Avatar", "Awakened", "Immortal", "Nomad", "Wu Jen"];

/// Psionic type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PsionicType {
    /// Minor, always-on or at-will ability
    #[serde(rename = "T")]
    Talent,
    /// Mode-based ability belonging to an order
    #[serde(rename = "D")]
    Discipline,
}

impl PsionicType {
    /// Dataset codes, in filter display order
    pub const CODES: &'static [&'static str] = &["T", "D"];

    /// The short dataset code (`T` or `D`)
    pub fn code(self) -> &'static str {
        match self {
            PsionicType::Talent => "T",
            PsionicType::Discipline => "D",
        }
    }

    /// The full display name
    pub fn full_name(self) -> &'static str {
        match self {
            PsionicType::Talent => "Talent",
            PsionicType::Discipline => "Discipline",
        }
    }

    /// Map a dataset code to its display name, leaving unknown codes as-is
    pub fn code_to_full(code: &str) -> String {
        code.parse::<PsionicType>()
            .map(|t| t.full_name().to_string())
            .unwrap_or_else(|_| code.to_string())
    }
}

impl FromStr for PsionicType {
    type Err = PsiError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "t" | "talent" => Ok(PsionicType::Talent),
            "d" | "discipline" => Ok(PsionicType::Discipline),
            other => bail_unsupported!("psionic type", other, "T, D, talent, discipline"),
        }
    }
}

impl fmt::Display for PsionicType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.full_name())
    }
}

/// Psi point cost of a mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cost {
    pub min: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<u32>,
}

/// Concentration requirement of a mode
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Concentration {
    pub duration: u32,
    pub unit: String,
}

/// One mode of a discipline. Submodes share the shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mode {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<Cost>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub concentration: Option<Concentration>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub entries: Vec<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub submodes: Vec<Mode>,
}
