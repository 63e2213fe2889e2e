//! Column-level expectations.
//!
//! An [`Expectation`] pairs a target column with an [`ExpectationKind`]. Each
//! kind is a predicate over a column's values; evaluating it yields every row
//! that breaks the predicate, in row order.

use crate::{DataValue, ExpectationError, Result, Violation};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The predicate an expectation applies to its column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ExpectationKind {
    /// Every value must be present
    NotNull,

    /// Every value must be one of the listed values.
    ///
    /// A missing value is a violation unless `DataValue::Null` is itself
    /// part of `values`.
    ValueInSet {
        /// Allowed values
        values: Vec<DataValue>,
    },

    /// Every present value must be numeric and within the bounds (inclusive).
    ///
    /// Missing values are skipped; `NotNull` reports them.
    ValueBetween {
        /// Lower bound
        min: Option<f64>,
        /// Upper bound
        max: Option<f64>,
    },
}

impl ExpectationKind {
    /// Returns the snake_case name of this kind.
    pub fn name(&self) -> &'static str {
        match self {
            ExpectationKind::NotNull => "not_null",
            ExpectationKind::ValueInSet { .. } => "value_in_set",
            ExpectationKind::ValueBetween { .. } => "value_between",
        }
    }

    fn violates(&self, value: &DataValue) -> bool {
        match self {
            ExpectationKind::NotNull => value.is_null(),
            ExpectationKind::ValueInSet { values } => {
                !values.iter().any(|allowed| allowed.matches(value))
            }
            ExpectationKind::ValueBetween { min, max } => {
                if value.is_null() {
                    return false;
                }
                match value.as_float() {
                    Some(n) => {
                        n.is_nan()
                            || min.is_some_and(|lo| n < lo)
                            || max.is_some_and(|hi| n > hi)
                    }
                    None => true,
                }
            }
        }
    }
}

/// Outcome of evaluating one expectation against one column.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    /// Whether no row violated the expectation
    pub success: bool,
    /// Every violating row, in row order
    pub violations: Vec<Violation>,
}

/// A single testable predicate bound to a column.
///
/// # Example
///
/// ```rust
/// use expectations_core::{DataValue, Expectation};
///
/// let expectation = Expectation::value_in_set("target", [0, 1]).unwrap();
/// let values = vec![DataValue::Int(0), DataValue::Int(2), DataValue::Int(1)];
///
/// let evaluation = expectation.evaluate(&values);
/// assert!(!evaluation.success);
/// assert_eq!(evaluation.violations[0].row, 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Expectation {
    column: String,
    #[serde(flatten)]
    kind: ExpectationKind,
}

impl Expectation {
    /// Creates an expectation, checking its parameters.
    ///
    /// # Errors
    ///
    /// Returns `ExpectationError::InvalidParameters` when the column name is
    /// empty, a value set is empty, or bounds are missing, non-finite or
    /// inverted.
    pub fn new(column: impl Into<String>, kind: ExpectationKind) -> Result<Self> {
        let column = column.into();
        let name = kind.name();

        if column.trim().is_empty() {
            return Err(ExpectationError::invalid_parameters(
                column,
                name,
                "column name must not be empty",
            ));
        }

        let kind = match kind {
            ExpectationKind::ValueInSet { values } => {
                if values.is_empty() {
                    return Err(ExpectationError::invalid_parameters(
                        column,
                        name,
                        "allowed value set must not be empty",
                    ));
                }
                ExpectationKind::ValueInSet {
                    values: dedup_values(values),
                }
            }
            ExpectationKind::ValueBetween { min, max } => {
                check_bounds(&column, min, max)?;
                ExpectationKind::ValueBetween { min, max }
            }
            other => other,
        };

        Ok(Self { column, kind })
    }

    /// Expects every value in `column` to be present.
    pub fn not_null(column: impl Into<String>) -> Result<Self> {
        Self::new(column, ExpectationKind::NotNull)
    }

    /// Expects every value in `column` to be one of `values`.
    pub fn value_in_set<I, V>(column: impl Into<String>, values: I) -> Result<Self>
    where
        I: IntoIterator<Item = V>,
        V: Into<DataValue>,
    {
        Self::new(
            column,
            ExpectationKind::ValueInSet {
                values: values.into_iter().map(Into::into).collect(),
            },
        )
    }

    /// Expects every present value in `column` to lie within `[min, max]`.
    pub fn value_between(
        column: impl Into<String>,
        min: Option<f64>,
        max: Option<f64>,
    ) -> Result<Self> {
        Self::new(column, ExpectationKind::ValueBetween { min, max })
    }

    /// Returns the target column name.
    pub fn column(&self) -> &str {
        &self.column
    }

    /// Returns the expectation kind.
    pub fn kind(&self) -> &ExpectationKind {
        &self.kind
    }

    /// Evaluates the expectation against a column's values.
    pub fn evaluate(&self, values: &[DataValue]) -> Evaluation {
        let violations: Vec<Violation> = values
            .iter()
            .enumerate()
            .filter(|(_, value)| self.kind.violates(value))
            .map(|(row, value)| Violation {
                row,
                value: value.clone(),
            })
            .collect();

        Evaluation {
            success: violations.is_empty(),
            violations,
        }
    }
}

impl fmt::Display for Expectation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ExpectationKind::NotNull => write!(f, "not_null({})", self.column),
            ExpectationKind::ValueInSet { values } => {
                let listed: Vec<String> = values.iter().map(|v| v.to_string()).collect();
                write!(f, "value_in_set({}, {{{}}})", self.column, listed.join(", "))
            }
            ExpectationKind::ValueBetween { min, max } => {
                let lo = min.map(|v| v.to_string()).unwrap_or_default();
                let hi = max.map(|v| v.to_string()).unwrap_or_default();
                write!(f, "value_between({}, [{}..{}])", self.column, lo, hi)
            }
        }
    }
}

fn dedup_values(values: Vec<DataValue>) -> Vec<DataValue> {
    let mut unique: Vec<DataValue> = Vec::with_capacity(values.len());
    for value in values {
        if !unique.iter().any(|seen| seen.matches(&value)) {
            unique.push(value);
        }
    }
    unique
}

fn check_bounds(column: &str, min: Option<f64>, max: Option<f64>) -> Result<()> {
    const KIND: &str = "value_between";

    if min.is_none() && max.is_none() {
        return Err(ExpectationError::invalid_parameters(
            column,
            KIND,
            "at least one of min or max is required",
        ));
    }
    if min.is_some_and(|v| !v.is_finite()) || max.is_some_and(|v| !v.is_finite()) {
        return Err(ExpectationError::invalid_parameters(
            column,
            KIND,
            "bounds must be finite numbers",
        ));
    }
    if let (Some(lo), Some(hi)) = (min, max) {
        if lo > hi {
            return Err(ExpectationError::invalid_parameters(
                column,
                KIND,
                format!("min ({}) is greater than max ({})", lo, hi),
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ints(values: &[Option<i64>]) -> Vec<DataValue> {
        values.iter().map(|v| DataValue::from(*v)).collect()
    }

    #[test]
    fn test_not_null_without_missing_values() {
        let expectation = Expectation::not_null("target").unwrap();
        let evaluation = expectation.evaluate(&ints(&[Some(0), Some(1), Some(0)]));

        assert!(evaluation.success);
        assert!(evaluation.violations.is_empty());
    }

    #[test]
    fn test_not_null_counts_every_missing_value() {
        let expectation = Expectation::not_null("target").unwrap();
        let evaluation = expectation.evaluate(&ints(&[None, Some(1), None, Some(0), None]));

        assert!(!evaluation.success);
        let rows: Vec<usize> = evaluation.violations.iter().map(|v| v.row).collect();
        assert_eq!(rows, vec![0, 2, 4]);
        assert!(evaluation.violations.iter().all(|v| v.value.is_null()));
    }

    #[test]
    fn test_not_null_treats_zero_as_present() {
        let expectation = Expectation::not_null("target").unwrap();
        assert!(expectation.evaluate(&ints(&[Some(0), Some(0)])).success);
    }

    #[test]
    fn test_value_in_set_accepts_members() {
        let expectation = Expectation::value_in_set("target", [0, 1]).unwrap();
        let mut values = ints(&[Some(0), Some(1), Some(1)]);
        values.push(DataValue::Float(0.0));

        assert!(expectation.evaluate(&values).success);
    }

    #[test]
    fn test_value_in_set_rejects_other_scalars() {
        let expectation = Expectation::value_in_set("target", [0, 1]).unwrap();
        let values = vec![
            DataValue::Int(0),
            DataValue::Int(2),
            DataValue::from("yes"),
            DataValue::Int(-1),
            DataValue::Float(1.5),
            DataValue::Int(1),
        ];

        let evaluation = expectation.evaluate(&values);
        assert!(!evaluation.success);
        let rows: Vec<usize> = evaluation.violations.iter().map(|v| v.row).collect();
        assert_eq!(rows, vec![1, 2, 3, 4]);
        assert_eq!(evaluation.violations[0].value, DataValue::Int(2));
    }

    #[test]
    fn test_value_in_set_null_is_violation_by_default() {
        let expectation = Expectation::value_in_set("target", [0, 1]).unwrap();
        let evaluation = expectation.evaluate(&ints(&[Some(0), None]));

        assert!(!evaluation.success);
        assert_eq!(evaluation.violations.len(), 1);
        assert_eq!(evaluation.violations[0].row, 1);
    }

    #[test]
    fn test_value_in_set_null_allowed_when_listed() {
        let expectation = Expectation::value_in_set(
            "target",
            [DataValue::Int(0), DataValue::Int(1), DataValue::Null],
        )
        .unwrap();

        assert!(expectation.evaluate(&ints(&[Some(0), None, Some(1)])).success);
    }

    #[test]
    fn test_value_in_set_empty_is_invalid() {
        let err = Expectation::value_in_set("target", Vec::<i64>::new()).unwrap_err();
        assert!(matches!(
            err,
            ExpectationError::InvalidParameters { kind: "value_in_set", .. }
        ));
        assert!(err.to_string().contains("target"));
    }

    #[test]
    fn test_value_in_set_removes_duplicates() {
        let expectation = Expectation::value_in_set("target", [1, 0, 1, 0]).unwrap();
        assert_eq!(
            expectation.kind(),
            &ExpectationKind::ValueInSet {
                values: vec![DataValue::Int(1), DataValue::Int(0)]
            }
        );
    }

    #[test]
    fn test_empty_column_name_is_invalid() {
        assert!(Expectation::not_null("  ").is_err());
    }

    #[test]
    fn test_value_between() {
        let expectation = Expectation::value_between("diameter", Some(0.0), Some(10.0)).unwrap();
        let values = vec![
            DataValue::Float(0.0),
            DataValue::Int(10),
            DataValue::Null,
            DataValue::Float(-0.5),
            DataValue::from("big"),
            DataValue::Float(10.5),
        ];

        let evaluation = expectation.evaluate(&values);
        let rows: Vec<usize> = evaluation.violations.iter().map(|v| v.row).collect();
        assert_eq!(rows, vec![3, 4, 5]);
    }

    #[test]
    fn test_value_between_invalid_bounds() {
        assert!(Expectation::value_between("x", None, None).is_err());
        assert!(Expectation::value_between("x", Some(2.0), Some(1.0)).is_err());
        assert!(Expectation::value_between("x", Some(f64::NAN), None).is_err());
        assert!(Expectation::value_between("x", None, Some(1.0)).is_ok());
    }

    #[test]
    fn test_display() {
        assert_eq!(
            Expectation::not_null("target").unwrap().to_string(),
            "not_null(target)"
        );
        assert_eq!(
            Expectation::value_in_set("target", [0, 1]).unwrap().to_string(),
            "value_in_set(target, {0, 1})"
        );
        assert_eq!(
            Expectation::value_between("d", Some(0.0), None)
                .unwrap()
                .to_string(),
            "value_between(d, [0..])"
        );
    }

    #[test]
    fn test_serializes_with_kind_tag() {
        let expectation = Expectation::value_in_set("target", [0, 1]).unwrap();
        let json = serde_json::to_value(&expectation).unwrap();

        assert_eq!(
            json,
            serde_json::json!({"column": "target", "kind": "value_in_set", "values": [0, 1]})
        );
    }
}
