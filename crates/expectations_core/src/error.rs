//! Error types for building expectations and suites.

use thiserror::Error;

/// Result type for expectation construction.
pub type Result<T> = std::result::Result<T, ExpectationError>;

/// Errors raised while constructing an expectation.
///
/// These are configuration mistakes, not data-quality findings: a suite that
/// contains one cannot be run.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExpectationError {
    /// The expectation parameters are malformed
    #[error("Invalid parameters for expectation '{kind}' on column '{column}': {message}")]
    InvalidParameters {
        /// Target column
        column: String,
        /// Expectation kind name
        kind: &'static str,
        /// What is wrong with the parameters
        message: String,
    },
}

impl ExpectationError {
    /// Creates a new invalid parameters error.
    pub fn invalid_parameters(
        column: impl Into<String>,
        kind: &'static str,
        message: impl Into<String>,
    ) -> Self {
        Self::InvalidParameters {
            column: column.into(),
            kind,
            message: message.into(),
        }
    }
}
