//! Error types and exit codes for psicat
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (dataset missing or unreadable, unknown entry)

mod macros;

use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - dataset or entry problems (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during psicat operations
#[derive(Error, Debug)]
pub enum PsiError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    #[error("unsupported {context}: {value} (supported: {supported})")]
    Unsupported {
        context: String,
        value: String,
        supported: String,
    },

    #[error("unknown facet: {0} (expected: source, type, or order)")]
    UnknownFacet(String),

    // Data errors (exit code 3)
    #[error("failed to load dataset {source_name}: {reason}")]
    DatasetLoad { source_name: String, reason: String },

    #[error("no dataset configured (use --data or set `data` in the config file)")]
    NoDataset,

    #[error("entry not found: {reference}")]
    EntryNotFound { reference: String },

    #[error("ambiguous entry {reference}: {count} matches (use --source or a row id)")]
    AmbiguousEntry { reference: String, count: usize },

    #[error("invalid entry: {reason}")]
    InvalidEntry { reason: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to {operation}: {reason}")]
    FailedOperation { operation: String, reason: String },

    #[error("{0}")]
    Other(String),
}

impl PsiError {
    /// Create an error for an invalid value
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        PsiError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an unsupported value
    pub fn unsupported(
        context: &str,
        value: impl std::fmt::Display,
        supported: impl std::fmt::Display,
    ) -> Self {
        PsiError::Unsupported {
            context: context.to_string(),
            value: value.to_string(),
            supported: supported.to_string(),
        }
    }

    /// Create an error for a dataset that could not be fetched or parsed
    pub fn dataset_load(source: impl std::fmt::Display, reason: impl std::fmt::Display) -> Self {
        PsiError::DatasetLoad {
            source_name: source.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Create an error for a failed operation
    pub fn failed(operation: &str, reason: impl std::fmt::Display) -> Self {
        PsiError::FailedOperation {
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            PsiError::UnknownFormat(_)
            | PsiError::UsageError(_)
            | PsiError::InvalidValue { .. }
            | PsiError::Unsupported { .. }
            | PsiError::UnknownFacet(_) => ExitCode::Usage,

            PsiError::DatasetLoad { .. }
            | PsiError::NoDataset
            | PsiError::EntryNotFound { .. }
            | PsiError::AmbiguousEntry { .. }
            | PsiError::InvalidEntry { .. } => ExitCode::Data,

            PsiError::Io(_)
            | PsiError::Json(_)
            | PsiError::Toml(_)
            | PsiError::FailedOperation { .. }
            | PsiError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            PsiError::UnknownFormat(_) => "unknown_format",
            PsiError::UsageError(_) => "usage_error",
            PsiError::InvalidValue { .. } => "invalid_value",
            PsiError::Unsupported { .. } => "unsupported",
            PsiError::UnknownFacet(_) => "unknown_facet",
            PsiError::DatasetLoad { .. } => "dataset_load",
            PsiError::NoDataset => "no_dataset",
            PsiError::EntryNotFound { .. } => "entry_not_found",
            PsiError::AmbiguousEntry { .. } => "ambiguous_entry",
            PsiError::InvalidEntry { .. } => "invalid_entry",
            PsiError::Io(_) => "io_error",
            PsiError::Json(_) => "json_error",
            PsiError::Toml(_) => "toml_error",
            PsiError::FailedOperation { .. } => "failed_operation",
            PsiError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for psicat operations
pub type Result<T> = std::result::Result<T, PsiError>;
