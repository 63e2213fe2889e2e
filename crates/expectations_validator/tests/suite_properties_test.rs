//! Behavioural properties of suite runs.
//!
//! These tests pin down the guarantees callers rely on:
//! - an empty suite always succeeds
//! - `not_null` reports exactly the missing cells
//! - `value_in_set` accepts only listed values
//! - runs are repeatable and keep suite order

use expectations_core::{DataValue, ExpectationSuite, SuiteBuilder, ValidationContext};
use expectations_validator::{DataSet, DataValidator, ValidationError, run};
use pretty_assertions::assert_eq;

fn target_dataset(values: Vec<DataValue>) -> DataSet {
    let ids: Vec<DataValue> = (0..values.len() as i64).map(DataValue::Int).collect();
    DataSet::from_columns("train.csv", [("id", ids), ("target", values)]).unwrap()
}

fn ints(values: &[Option<i64>]) -> Vec<DataValue> {
    values.iter().map(|v| DataValue::from(*v)).collect()
}

fn binary_target_suite() -> ExpectationSuite {
    SuiteBuilder::new("asteroid_suite")
        .not_null("target")
        .value_in_set("target", [0, 1])
        .build()
        .unwrap()
}

#[test]
fn test_empty_suite_is_vacuously_successful() {
    let datasets = vec![
        DataSet::empty("nothing"),
        target_dataset(ints(&[None, None])),
        target_dataset(vec![DataValue::from("garbage"), DataValue::Float(9.5)]),
    ];

    for dataset in &datasets {
        let result = run(dataset, &ExpectationSuite::new("empty")).unwrap();
        assert!(result.success, "empty suite failed on {}", dataset.name());
    }
}

#[test]
fn test_not_null_passes_without_missing_values() {
    let suite = SuiteBuilder::new("s").not_null("target").build().unwrap();
    let result = run(&target_dataset(ints(&[Some(0), Some(0), Some(1)])), &suite).unwrap();

    assert!(result.success);
    assert_eq!(result.results[0].violation_count, 0);
    assert!(result.results[0].examples.is_empty());
}

#[test]
fn test_not_null_counts_exact_number_of_missing_values() {
    let suite = SuiteBuilder::new("s").not_null("target").build().unwrap();

    for missing in 1..=8usize {
        let values: Vec<Option<i64>> = (0..10)
            .map(|i| if i < missing { None } else { Some(1) })
            .collect();
        let result = run(&target_dataset(ints(&values)), &suite).unwrap();

        assert!(!result.success);
        assert_eq!(result.results[0].violation_count, missing);
    }
}

#[test]
fn test_value_in_set_accepts_only_zero_and_one() {
    let suite = SuiteBuilder::new("s")
        .value_in_set("target", [0, 1])
        .build()
        .unwrap();

    let passing = target_dataset(vec![
        DataValue::Int(0),
        DataValue::Int(1),
        DataValue::Float(1.0),
    ]);
    assert!(run(&passing, &suite).unwrap().success);

    for bad in [
        DataValue::Int(2),
        DataValue::from("yes"),
        DataValue::Int(-1),
        DataValue::Bool(true),
        DataValue::Float(0.5),
    ] {
        let dataset = target_dataset(vec![DataValue::Int(0), bad.clone(), DataValue::Int(1)]);
        let result = run(&dataset, &suite).unwrap();

        assert!(!result.success, "{} should be rejected", bad);
        assert_eq!(result.results[0].violation_count, 1);
        assert_eq!(result.results[0].examples[0].row, 1);
        assert_eq!(result.results[0].examples[0].value, bad);
    }
}

#[test]
fn test_missing_value_reported_by_both_expectations() {
    let result = run(
        &target_dataset(ints(&[Some(0), None])),
        &binary_target_suite(),
    )
    .unwrap();

    assert!(!result.results[0].success);
    assert!(!result.results[1].success);
}

#[test]
fn test_runs_are_repeatable() {
    let dataset = target_dataset(ints(&[Some(0), None, Some(3), Some(1), None]));
    let suite = binary_target_suite();
    let validator = DataValidator::new(ValidationContext::new());

    let first = validator.run(&dataset, &suite).unwrap();
    let second = validator.run(&dataset, &suite).unwrap();

    assert_eq!(first.success, second.success);
    assert_eq!(first.results, second.results);
    assert_eq!(first.stats.rows_validated, second.stats.rows_validated);
}

#[test]
fn test_results_follow_suite_order() {
    let suite = SuiteBuilder::new("s")
        .value_in_set("target", [0, 1])
        .not_null("id")
        .value_in_set("id", [100])
        .not_null("target")
        .not_null("target")
        .build()
        .unwrap();

    let result = run(&target_dataset(ints(&[Some(0), Some(5)])), &suite).unwrap();

    let order: Vec<String> = result
        .results
        .iter()
        .map(|r| r.expectation.to_string())
        .collect();
    let expected: Vec<String> = suite.expectations().iter().map(|e| e.to_string()).collect();
    assert_eq!(order, expected);

    let outcomes: Vec<bool> = result.results.iter().map(|r| r.success).collect();
    assert_eq!(outcomes, vec![false, true, false, true, true]);
}

#[test]
fn test_missing_target_column_is_fatal() {
    let dataset =
        DataSet::from_columns("train.csv", [("label", ints(&[Some(0), Some(1)]))]).unwrap();

    let err = run(&dataset, &binary_target_suite()).unwrap_err();

    assert!(matches!(err, ValidationError::ColumnNotFound { .. }));
    assert_eq!(err.missing_column(), Some("target"));
}
