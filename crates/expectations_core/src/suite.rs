//! Expectation suites.

use crate::Expectation;
use serde::Serialize;

/// A named, ordered collection of expectations evaluated as a unit.
///
/// Expectations keep their insertion order, which is also the order of the
/// results produced when the suite runs. Adding the same expectation twice is
/// allowed; both copies are evaluated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpectationSuite {
    name: String,
    expectations: Vec<Expectation>,
}

impl ExpectationSuite {
    /// Creates an empty suite.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            expectations: Vec::new(),
        }
    }

    /// Returns the suite name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Appends an expectation.
    pub fn add(&mut self, expectation: Expectation) {
        self.expectations.push(expectation);
    }

    /// Returns the expectations in insertion order.
    pub fn expectations(&self) -> &[Expectation] {
        &self.expectations
    }

    /// Returns the number of expectations.
    pub fn len(&self) -> usize {
        self.expectations.len()
    }

    /// Returns true if the suite has no expectations.
    pub fn is_empty(&self) -> bool {
        self.expectations.is_empty()
    }
}
