//! Keyed registry of expectation suites.
//!
//! Lookups return `Option` and `SuiteEntry` rather than signalling absence
//! through an error. The store lives in memory for the duration of a run.

use crate::ExpectationSuite;
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

/// Outcome of [`SuiteStore::get_or_create`].
#[derive(Debug)]
pub enum SuiteEntry<'a> {
    /// A suite with that name was already registered
    Found(&'a mut ExpectationSuite),
    /// The suite was built and registered by this call
    Created(&'a mut ExpectationSuite),
}

impl<'a> SuiteEntry<'a> {
    /// Returns true if the suite was created by this call.
    pub fn is_created(&self) -> bool {
        matches!(self, SuiteEntry::Created(_))
    }

    /// Returns the registered suite.
    pub fn into_suite(self) -> &'a mut ExpectationSuite {
        match self {
            SuiteEntry::Found(suite) | SuiteEntry::Created(suite) => suite,
        }
    }
}

/// In-memory mapping from suite name to suite.
#[derive(Debug, Default)]
pub struct SuiteStore {
    suites: BTreeMap<String, ExpectationSuite>,
}

impl SuiteStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the suite registered under `name`, if any.
    pub fn get(&self, name: &str) -> Option<&ExpectationSuite> {
        self.suites.get(name)
    }

    /// Returns the suite registered under `name`, building and registering it
    /// with `build` when absent.
    ///
    /// `build` only runs when no suite is registered; its error is returned
    /// unchanged and nothing is registered.
    pub fn get_or_create<F, E>(&mut self, name: &str, build: F) -> Result<SuiteEntry<'_>, E>
    where
        F: FnOnce(&str) -> Result<ExpectationSuite, E>,
    {
        match self.suites.entry(name.to_string()) {
            Entry::Occupied(entry) => Ok(SuiteEntry::Found(entry.into_mut())),
            Entry::Vacant(entry) => {
                let suite = build(name)?;
                Ok(SuiteEntry::Created(entry.insert(suite)))
            }
        }
    }

    /// Returns the number of registered suites.
    pub fn len(&self) -> usize {
        self.suites.len()
    }

    /// Returns true if no suite is registered.
    pub fn is_empty(&self) -> bool {
        self.suites.is_empty()
    }
}
