//! Catalog configuration for psicat
//!
//! Read from `--config <path>` when given, else from `config.toml` in the
//! user configuration directory (`~/.config/psicat` on Linux). The directory
//! can be overridden with `PSICAT_CONFIG_DIR`.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{PsiError, Result};
use crate::exclude::ExcludeList;
use crate::filter::{FilterSet, FACET_ORDER, FACET_SOURCE, FACET_TYPE};
use crate::list::{SearchScope, SortSpec};

pub use types::{CatalogConfig, FiltersConfig, SearchConfig};

const CONFIG_DIR: &str = "psicat";
const CONFIG_FILE: &str = "config.toml";
const STATE_FILE: &str = "pins.json";
pub const CONFIG_DIR_ENV_VAR: &str = "PSICAT_CONFIG_DIR";

impl CatalogConfig {
    /// The configuration directory, honouring `PSICAT_CONFIG_DIR`
    pub fn config_dir() -> Result<PathBuf> {
        // Allow environment variable override for testing
        if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            return Ok(PathBuf::from(env_dir));
        }
        dirs::config_dir()
            .map(|dir| dir.join(CONFIG_DIR))
            .ok_or_else(|| PsiError::Other("unable to determine config directory".to_string()))
    }

    pub fn default_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            PsiError::failed(&format!("read config {}", path.display()), e)
        })?;
        let mut config: CatalogConfig = toml::from_str(&content)?;
        config.base_dir = path.parent().map(Path::to_path_buf);
        config.validate()?;

        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Load the explicit file if given (it must exist), else the default
    /// file if present, else defaults.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        let path = Self::default_path()?;
        if path.exists() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    fn validate(&self) -> Result<()> {
        if let Some(sort) = &self.default_sort {
            sort.parse::<SortSpec>()?;
        }
        for facet in self.filters.combine.keys() {
            if ![FACET_SOURCE, FACET_TYPE, FACET_ORDER].contains(&facet.as_str()) {
                return Err(PsiError::UnknownFacet(facet.clone()));
            }
        }
        Ok(())
    }

    /// Resolve a configured path against the config file's directory
    pub fn resolve(&self, path: &Path) -> PathBuf {
        match &self.base_dir {
            Some(base) if path.is_relative() => base.join(path),
            _ => path.to_path_buf(),
        }
    }

    pub fn data_path(&self) -> Option<PathBuf> {
        self.data.as_deref().map(|p| self.resolve(p))
    }

    pub fn brew_paths(&self) -> Vec<PathBuf> {
        self.brew.iter().map(|p| self.resolve(p)).collect()
    }

    /// Sublist state file: the configured one, else `pins.json` in the
    /// config directory
    pub fn state_path(&self) -> Result<PathBuf> {
        match &self.state_file {
            Some(path) => Ok(self.resolve(path)),
            None => Ok(Self::config_dir()?.join(STATE_FILE)),
        }
    }

    pub fn sort_spec(&self) -> Result<SortSpec> {
        match &self.default_sort {
            Some(sort) => sort.parse(),
            None => Ok(SortSpec::default()),
        }
    }

    pub fn search_scope(&self) -> SearchScope {
        if self.search.include_modes {
            SearchScope::NameAndModes
        } else {
            SearchScope::Name
        }
    }

    pub fn filter_set(&self) -> FilterSet {
        FilterSet::new(self.filters.combine.clone())
    }

    pub fn exclusion(&self) -> ExcludeList {
        ExcludeList::new(self.exclude.clone())
    }
}
