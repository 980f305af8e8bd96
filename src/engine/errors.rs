use std::error::Error as StdError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;
use tracing::{debug, error, warn};

pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// Errors that can occur while producing a summary report.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("The parameter '{param}' cannot be empty.")]
    InvalidInput { param: &'static str },

    #[error("The field '{raw}' is not a valid column name.")]
    UnknownField { raw: String },

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Failed to load settings: {0}")]
    Settings(#[from] config::ConfigError),

    #[error("Data access failed during {operation}: {source}")]
    DataAccess {
        operation: &'static str,
        #[source]
        source: BoxError,
    },

    #[error("Failed to write CSV to {}: {source}", path.display())]
    CsvWrite {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Result shape mismatch: row {row} has {actual} values, expected {expected}")]
    ShapeMismatch {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("No numeric attributes left to sum when grouping by {group_by}")]
    NoMeasures { group_by: String },

    #[error("Filesystem error at {}: {source}", path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ReportError {
    pub fn data_access(operation: &'static str, source: impl Into<BoxError>) -> Self {
        ReportError::DataAccess {
            operation,
            source: source.into(),
        }
    }

    pub fn csv_write(path: impl Into<PathBuf>, source: impl Into<csv::Error>) -> Self {
        ReportError::CsvWrite {
            path: path.into(),
            source: source.into(),
        }
    }

    /// Caller mistakes, as opposed to environment failures or defects.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            ReportError::InvalidInput { .. } | ReportError::UnknownField { .. }
        )
    }

    pub fn log_error(&self) {
        match self {
            ReportError::InvalidInput { param } => {
                warn!(target: "customer_report::error", param, "Rejected blank input");
            }
            ReportError::UnknownField { raw } => {
                warn!(target: "customer_report::error", field = %raw, "Rejected unknown field");
            }
            ReportError::Configuration(e) => {
                error!("Configuration error: {}", e);
            }
            ReportError::Settings(e) => {
                error!("Settings could not be loaded: {}", e);
                debug!("Settings error details: {:?}", e);
            }
            ReportError::DataAccess { operation, source } => {
                error!("Data access failed during {}: {}", operation, source);
                debug!("Data access error details: {:?}", source);
            }
            ReportError::CsvWrite { path, source } => {
                error!("CSV write to {} failed: {}", path.display(), source);
                debug!("CSV write error details: {:?}", source);
            }
            ReportError::ShapeMismatch {
                row,
                expected,
                actual,
            } => {
                error!(
                    target: "customer_report::error",
                    row, expected, actual,
                    "Query result does not match the summed attributes"
                );
            }
            ReportError::NoMeasures { group_by } => {
                error!("No measures to sum when grouping by {}", group_by);
            }
            ReportError::Filesystem { path, source } => {
                error!("Filesystem error at {}: {}", path.display(), source);
                debug!("Filesystem error details: {:?}", source);
            }
        }
    }
}
