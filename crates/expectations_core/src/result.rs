//! Result types produced by running a suite.

use crate::{DataValue, Evaluation, Expectation};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

/// A row that failed an expectation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Violation {
    /// Zero-based row index
    pub row: usize,
    /// The offending value
    pub value: DataValue,
}

/// Outcome of one expectation against one dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpectationResult {
    /// The expectation that was evaluated
    pub expectation: Expectation,

    /// Whether the expectation held for every row
    pub success: bool,

    /// Number of rows evaluated
    pub element_count: usize,

    /// Number of rows that violated the expectation
    pub violation_count: usize,

    /// Share of evaluated rows that violated the expectation, in percent
    pub violation_percent: f64,

    /// The first few violations, in row order
    pub examples: Vec<Violation>,
}

impl ExpectationResult {
    /// Builds a result from an evaluation, keeping at most `max_examples`
    /// example violations.
    pub fn from_evaluation(
        expectation: Expectation,
        element_count: usize,
        evaluation: Evaluation,
        max_examples: usize,
    ) -> Self {
        let violation_count = evaluation.violations.len();
        let violation_percent = if element_count == 0 {
            0.0
        } else {
            violation_count as f64 * 100.0 / element_count as f64
        };

        let mut examples = evaluation.violations;
        examples.truncate(max_examples);

        Self {
            expectation,
            success: evaluation.success,
            element_count,
            violation_count,
            violation_percent,
            examples,
        }
    }
}

/// Statistics about a validation run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ValidationStats {
    /// Number of rows validated
    pub rows_validated: usize,

    /// Number of expectations evaluated
    pub expectations_evaluated: usize,

    /// Number of expectations that failed
    pub expectations_failed: usize,

    /// Validation duration in milliseconds
    pub duration_ms: u64,
}

/// The aggregated outcome of running a suite against a dataset.
///
/// Produced once per run and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationResult {
    /// Whether every expectation succeeded
    pub success: bool,

    /// Name of the suite that was run
    pub suite_name: String,

    /// Identifier of the dataset that was validated
    pub dataset: String,

    /// When the run started
    pub run_at: DateTime<Utc>,

    /// Per-expectation results, in suite order
    pub results: Vec<ExpectationResult>,

    /// Run statistics
    pub stats: ValidationStats,

    /// Metadata carried over from the validation context
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub meta: BTreeMap<String, String>,
}

impl ValidationResult {
    /// Returns the results of the expectations that failed, in suite order.
    pub fn failures(&self) -> impl Iterator<Item = &ExpectationResult> {
        self.results.iter().filter(|r| !r.success)
    }
}
