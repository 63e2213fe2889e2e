//! Plain-text rendering of validation results.

use expectations_core::{ExpectationResult, ValidationResult};

/// Renders a result as one header line, one line per expectation and a final
/// overall line.
///
/// ```text
/// Suite 'asteroid_suite' on 'data/processed/train.csv' (4 rows)
/// [PASS] not_null(target): 0 violation(s)
/// [FAIL] value_in_set(target, {0, 1}): 1 violation(s) (25.0%), e.g. row 2 = 2
/// Overall: FAIL (1 of 2 expectations failed)
/// ```
pub fn summarize(result: &ValidationResult) -> String {
    let mut lines = Vec::with_capacity(result.results.len() + 2);

    lines.push(format!(
        "Suite '{}' on '{}' ({} rows)",
        result.suite_name, result.dataset, result.stats.rows_validated
    ));
    lines.extend(result.results.iter().map(expectation_line));

    let failed = result.failures().count();
    let overall = if is_success(result) {
        format!(
            "Overall: PASS ({} of {} expectations passed)",
            result.results.len(),
            result.results.len()
        )
    } else {
        format!(
            "Overall: FAIL ({} of {} expectations failed)",
            failed,
            result.results.len()
        )
    };
    lines.push(overall);

    let mut text = lines.join("\n");
    text.push('\n');
    text
}

/// Returns whether the run succeeded, for exit-code mapping.
pub fn is_success(result: &ValidationResult) -> bool {
    result.success
}

/// Renders a single expectation result line.
pub fn expectation_line(result: &ExpectationResult) -> String {
    let status = if result.success { "PASS" } else { "FAIL" };
    let mut line = format!(
        "[{}] {}: {} violation(s)",
        status, result.expectation, result.violation_count
    );

    if result.violation_count > 0 {
        line.push_str(&format!(" ({:.1}%)", result.violation_percent));
    }

    if !result.examples.is_empty() {
        let examples: Vec<String> = result
            .examples
            .iter()
            .map(|v| format!("row {} = {}", v.row, v.value))
            .collect();
        line.push_str(", e.g. ");
        line.push_str(&examples.join(", "));
        if result.violation_count > result.examples.len() {
            line.push_str(", ...");
        }
    }

    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DataSet, run};
    use expectations_core::{DataValue, SuiteBuilder};
    use pretty_assertions::assert_eq;

    fn result_for(target: Vec<DataValue>) -> ValidationResult {
        let dataset = DataSet::from_columns("train.csv", [("target", target)]).unwrap();
        let suite = SuiteBuilder::new("asteroid_suite")
            .not_null("target")
            .value_in_set("target", [0, 1])
            .build()
            .unwrap();
        run(&dataset, &suite).unwrap()
    }

    #[test]
    fn test_summary_for_passing_run() {
        let result = result_for(vec![DataValue::Int(0), DataValue::Int(1)]);

        assert!(is_success(&result));
        assert_eq!(
            summarize(&result),
            "Suite 'asteroid_suite' on 'train.csv' (2 rows)\n\
             [PASS] not_null(target): 0 violation(s)\n\
             [PASS] value_in_set(target, {0, 1}): 0 violation(s)\n\
             Overall: PASS (2 of 2 expectations passed)\n"
        );
    }

    #[test]
    fn test_summary_for_failing_run() {
        let result = result_for(vec![
            DataValue::Int(0),
            DataValue::Int(1),
            DataValue::Int(2),
            DataValue::Int(1),
        ]);

        assert!(!is_success(&result));
        let summary = summarize(&result);
        let lines: Vec<&str> = summary.lines().collect();
        assert_eq!(lines[1], "[PASS] not_null(target): 0 violation(s)");
        assert_eq!(
            lines[2],
            "[FAIL] value_in_set(target, {0, 1}): 1 violation(s) (25.0%), e.g. row 2 = 2"
        );
        assert_eq!(lines[3], "Overall: FAIL (1 of 2 expectations failed)");
    }

    #[test]
    fn test_summary_marks_truncated_examples() {
        let result = result_for(vec![DataValue::Null; 7]);
        let summary = summarize(&result);

        let first = summary.lines().nth(1).unwrap();
        assert!(first.starts_with("[FAIL] not_null(target): 7 violation(s)"));
        assert!(first.contains("row 4 = null"));
        assert!(!first.contains("row 5"));
        assert!(first.ends_with(", ..."));
    }
}
