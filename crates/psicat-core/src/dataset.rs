//! Dataset retrieval
//!
//! A dataset is a JSON object whose `psionic` array holds the entries. Base
//! and supplemental data both come through [`DataSource`].

use std::fs;
use std::path::PathBuf;

use serde_json::Value;

use crate::entry::RawEntry;
use crate::error::{PsiError, Result};

/// Key of the entry array in a dataset document
pub const DATASET_KEY: &str = "psionic";

/// Raw entries fetched from one source
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub entries: Vec<RawEntry>,
    /// Array elements that were not objects of the expected shape
    pub malformed: usize,
}

impl Dataset {
    pub fn new(entries: Vec<RawEntry>) -> Self {
        Self {
            entries,
            malformed: 0,
        }
    }

    /// Parse a dataset document. A document without a `psionic` key is an
    /// empty dataset; one that is not a JSON object is an error.
    pub fn from_json(json: &str) -> Result<Self> {
        let document: Value = serde_json::from_str(json)?;
        let Value::Object(mut document) = document else {
            return Err(PsiError::InvalidEntry {
                reason: "dataset is not a JSON object".to_string(),
            });
        };

        let items = match document.remove(DATASET_KEY) {
            None | Some(Value::Null) => return Ok(Self::default()),
            Some(Value::Array(items)) => items,
            Some(_) => {
                return Err(PsiError::InvalidEntry {
                    reason: format!("`{}` is not an array", DATASET_KEY),
                })
            }
        };

        let mut dataset = Self::default();
        for (index, item) in items.into_iter().enumerate() {
            match serde_json::from_value::<RawEntry>(item) {
                Ok(raw) => dataset.entries.push(raw),
                Err(e) => {
                    tracing::warn!(index, error = %e, "skipping unreadable dataset record");
                    dataset.malformed += 1;
                }
            }
        }
        Ok(dataset)
    }
}

/// Where entries come from
pub trait DataSource {
    fn fetch(&self) -> Result<Dataset>;

    /// Short name for logs and error messages
    fn describe(&self) -> String;
}

/// A dataset file on disk
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DataSource for FileSource {
    fn fetch(&self) -> Result<Dataset> {
        let content = fs::read_to_string(&self.path)
            .map_err(|e| PsiError::dataset_load(self.describe(), e))?;
        Dataset::from_json(&content).map_err(|e| PsiError::dataset_load(self.describe(), e))
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// In-memory data, mostly for tests and embedding hosts
impl DataSource for Dataset {
    fn fetch(&self) -> Result<Dataset> {
        Ok(self.clone())
    }

    fn describe(&self) -> String {
        format!("in-memory dataset ({} entries)", self.entries.len())
    }
}
