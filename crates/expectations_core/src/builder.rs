//! Builder pattern for creating expectation suites.
//!
//! Each builder method constructs its expectation immediately. The first
//! parameter error is kept and returned from [`SuiteBuilder::build`], so a
//! chain of calls needs a single `?`.

use crate::{DataValue, Expectation, ExpectationSuite, Result};

/// Builder for creating an `ExpectationSuite`.
///
/// # Example
///
/// ```rust
/// use expectations_core::SuiteBuilder;
///
/// let suite = SuiteBuilder::new("asteroid_suite")
///     .not_null("target")
///     .value_in_set("target", [0, 1])
///     .build()
///     .unwrap();
///
/// assert_eq!(suite.len(), 2);
/// ```
#[derive(Debug)]
pub struct SuiteBuilder {
    suite: ExpectationSuite,
    error: Option<crate::ExpectationError>,
}

impl SuiteBuilder {
    /// Creates a builder for a suite with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            suite: ExpectationSuite::new(name),
            error: None,
        }
    }

    /// Adds an already constructed expectation.
    pub fn expectation(mut self, expectation: Expectation) -> Self {
        self.suite.add(expectation);
        self
    }

    /// Adds a `not_null` expectation.
    pub fn not_null(self, column: impl Into<String>) -> Self {
        self.push(Expectation::not_null(column))
    }

    /// Adds a `value_in_set` expectation.
    pub fn value_in_set<I, V>(self, column: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<DataValue>,
    {
        self.push(Expectation::value_in_set(column, values))
    }

    /// Adds a `value_between` expectation.
    pub fn value_between(
        self,
        column: impl Into<String>,
        min: Option<f64>,
        max: Option<f64>,
    ) -> Self {
        self.push(Expectation::value_between(column, min, max))
    }

    fn push(mut self, expectation: Result<Expectation>) -> Self {
        match expectation {
            Ok(expectation) => self.suite.add(expectation),
            Err(err) if self.error.is_none() => self.error = Some(err),
            Err(_) => {}
        }
        self
    }

    /// Builds the suite.
    ///
    /// # Errors
    ///
    /// Returns the first `ExpectationError` raised by any builder call.
    pub fn build(self) -> Result<ExpectationSuite> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.suite),
        }
    }
}
