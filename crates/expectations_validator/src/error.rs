//! Error types for loading datasets and running suites.
//!
//! Every variant is a configuration problem that stops the run. Data-quality
//! failures are not errors; they are reported through `ValidationResult`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for validator operations.
pub type Result<T> = std::result::Result<T, ValidationError>;

/// Errors that can occur while loading data or running a suite.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// An expectation targets a column the dataset does not have
    #[error(
        "Column '{column}' not found in dataset '{dataset}' (available columns: [{}])",
        .available.join(", ")
    )]
    ColumnNotFound {
        column: String,
        dataset: String,
        available: Vec<String>,
    },

    /// A column's length differs from the other columns
    #[error("Column '{column}' has {actual} values but the dataset has {expected} rows")]
    RaggedColumns {
        column: String,
        expected: usize,
        actual: usize,
    },

    /// Two columns share a name
    #[error("Duplicate column '{0}' in dataset")]
    DuplicateColumn(String),

    /// The CSV input is malformed
    #[error("Failed to read CSV data from '{dataset}': {source}")]
    Csv {
        dataset: String,
        #[source]
        source: csv::Error,
    },

    /// The input file could not be opened
    #[error("Failed to open '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ValidationError {
    /// Creates a new column not found error.
    pub fn column_not_found(
        column: impl Into<String>,
        dataset: impl Into<String>,
        available: Vec<String>,
    ) -> Self {
        Self::ColumnNotFound {
            column: column.into(),
            dataset: dataset.into(),
            available,
        }
    }

    /// Creates a new ragged columns error.
    pub fn ragged(column: impl Into<String>, expected: usize, actual: usize) -> Self {
        Self::RaggedColumns {
            column: column.into(),
            expected,
            actual,
        }
    }

    /// Creates a new CSV error.
    pub fn csv(dataset: impl Into<String>, source: csv::Error) -> Self {
        Self::Csv {
            dataset: dataset.into(),
            source,
        }
    }

    /// Returns the missing column name for `ColumnNotFound`.
    pub fn missing_column(&self) -> Option<&str> {
        match self {
            Self::ColumnNotFound { column, .. } => Some(column),
            _ => None,
        }
    }
}
