//! Options for a validation run.

use std::collections::BTreeMap;

/// Default number of example violations kept per expectation.
pub const DEFAULT_MAX_EXAMPLES: usize = 5;

/// Context for validation runs.
///
/// Passed explicitly to the runner; there is no process-wide context.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationContext {
    /// Maximum number of example violations kept per expectation
    pub max_examples: usize,

    /// Only validate the first `n` rows
    pub sample_size: Option<usize>,

    /// Additional metadata copied into the validation result
    pub metadata: BTreeMap<String, String>,
}

impl Default for ValidationContext {
    fn default() -> Self {
        Self {
            max_examples: DEFAULT_MAX_EXAMPLES,
            sample_size: None,
            metadata: BTreeMap::new(),
        }
    }
}

impl ValidationContext {
    /// Creates a new validation context with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of example violations kept per expectation.
    pub fn with_max_examples(mut self, max_examples: usize) -> Self {
        self.max_examples = max_examples;
        self
    }

    /// Sets the sample size.
    pub fn with_sample_size(mut self, size: usize) -> Self {
        self.sample_size = Some(size);
        self
    }

    /// Adds metadata to the context.
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }
}
