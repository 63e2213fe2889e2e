//! Main validation engine.
//!
//! This module provides the `DataValidator` that binds an expectation suite
//! to a dataset, evaluates every expectation and aggregates the outcome.

use crate::{DataSet, Result};
use chrono::Utc;
use expectations_core::{
    ExpectationResult, ExpectationSuite, ValidationContext, ValidationResult, ValidationStats,
};
use std::time::Instant;
use tracing::{debug, info};

/// Runs expectation suites against datasets.
///
/// # Example
///
/// ```rust
/// use expectations_core::{DataValue, SuiteBuilder, ValidationContext};
/// use expectations_validator::{DataSet, DataValidator};
///
/// let dataset = DataSet::from_columns(
///     "train.csv",
///     [("target", vec![DataValue::Int(0), DataValue::Int(1), DataValue::Int(2)])],
/// )
/// .unwrap();
/// let suite = SuiteBuilder::new("asteroid_suite")
///     .not_null("target")
///     .value_in_set("target", [0, 1])
///     .build()
///     .unwrap();
///
/// let validator = DataValidator::new(ValidationContext::new());
/// let result = validator.run(&dataset, &suite).unwrap();
///
/// assert!(!result.success);
/// assert!(result.results[0].success);
/// assert_eq!(result.results[1].violation_count, 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct DataValidator {
    context: ValidationContext,
}

impl DataValidator {
    /// Creates a validator with the given context.
    pub fn new(context: ValidationContext) -> Self {
        Self { context }
    }

    /// Returns the validation context.
    pub fn context(&self) -> &ValidationContext {
        &self.context
    }

    /// Evaluates every expectation of `suite` against `dataset`.
    ///
    /// All target columns are resolved before anything is evaluated, so a
    /// suite naming an absent column fails without producing a result.
    /// Failing expectations never stop the run: every expectation is
    /// evaluated and reported, in suite order. An empty suite succeeds.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::ColumnNotFound` for the first expectation
    /// whose column is missing.
    pub fn run(&self, dataset: &DataSet, suite: &ExpectationSuite) -> Result<ValidationResult> {
        let start = Instant::now();
        let run_at = Utc::now();

        let sampled;
        let dataset = match self.context.sample_size {
            Some(size) if size < dataset.len() => {
                sampled = dataset.sample(size);
                &sampled
            }
            _ => dataset,
        };

        info!(
            suite = suite.name(),
            dataset = dataset.name(),
            rows = dataset.len(),
            expectations = suite.len(),
            "Running expectation suite"
        );

        let columns = suite
            .expectations()
            .iter()
            .map(|expectation| dataset.column(expectation.column()))
            .collect::<Result<Vec<_>>>()?;

        let results: Vec<ExpectationResult> = suite
            .expectations()
            .iter()
            .zip(columns)
            .map(|(expectation, values)| {
                let evaluation = expectation.evaluate(values);
                let result = ExpectationResult::from_evaluation(
                    expectation.clone(),
                    values.len(),
                    evaluation,
                    self.context.max_examples,
                );
                debug!(
                    expectation = %expectation,
                    success = result.success,
                    violations = result.violation_count,
                    "Evaluated expectation"
                );
                result
            })
            .collect();

        let failed = results.iter().filter(|r| !r.success).count();
        let success = failed == 0;

        info!(
            suite = suite.name(),
            success,
            failed,
            "Expectation suite finished"
        );

        Ok(ValidationResult {
            success,
            suite_name: suite.name().to_string(),
            dataset: dataset.name().to_string(),
            run_at,
            stats: ValidationStats {
                rows_validated: dataset.len(),
                expectations_evaluated: results.len(),
                expectations_failed: failed,
                duration_ms: start.elapsed().as_millis() as u64,
            },
            results,
            meta: self.context.metadata.clone(),
        })
    }
}

/// Runs `suite` against `dataset` with the default context.
pub fn run(dataset: &DataSet, suite: &ExpectationSuite) -> Result<ValidationResult> {
    DataValidator::default().run(dataset, suite)
}
