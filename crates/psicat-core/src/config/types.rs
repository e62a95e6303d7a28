//! Configuration type definitions

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::exclude::ExcludeRule;
use crate::filter::Combine;

/// Catalog configuration (`config.toml`)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Base dataset path
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<PathBuf>,

    /// Supplemental (homebrew) dataset paths, merged after the base
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub brew: Vec<PathBuf>,

    /// Sublist state file (optional; defaults to `pins.json` in the config directory)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_file: Option<PathBuf>,

    /// Initial sort, `column` or `column:direction`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_sort: Option<String>,

    /// Search configuration
    #[serde(default)]
    pub search: SearchConfig,

    /// Filter configuration
    #[serde(default)]
    pub filters: FiltersConfig,

    /// Blocklist rules
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exclude: Vec<ExcludeRule>,

    /// Directory relative paths are resolved against (the config file's directory)
    #[serde(skip)]
    pub base_dir: Option<PathBuf>,
}

/// Search configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Also match mode and submode names (optional; default false)
    #[serde(default)]
    pub include_modes: bool,
}

/// Filter configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FiltersConfig {
    /// Default include combination per facet; unlisted facets use `or`
    #[serde(default)]
    pub combine: BTreeMap<String, Combine>,
}
