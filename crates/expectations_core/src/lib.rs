//! # Expectations Core
//!
//! Core data structures for the expectation engine.
//!
//! An expectation is a predicate over the values of one dataset column. A
//! suite groups expectations so they can be evaluated together, and the
//! outcome of a run is a [`ValidationResult`] holding one
//! [`ExpectationResult`] per expectation.
//!
//! ## Key Concepts
//!
//! - **DataValue**: a scalar cell value, with `Null` as the missing marker
//! - **Expectation**: a column name plus an [`ExpectationKind`]
//! - **ExpectationSuite**: an ordered, named collection of expectations
//! - **SuiteStore**: a keyed registry with get-or-create semantics
//! - **ValidationResult**: the immutable outcome of one run
//!
//! ## Example
//!
//! ```rust
//! use expectations_core::{DataValue, SuiteBuilder};
//!
//! let suite = SuiteBuilder::new("asteroid_suite")
//!     .not_null("target")
//!     .value_in_set("target", [0, 1])
//!     .build()
//!     .expect("valid suite");
//!
//! let target = vec![DataValue::Int(0), DataValue::Null, DataValue::Int(1)];
//! for expectation in suite.expectations() {
//!     let evaluation = expectation.evaluate(&target);
//!     println!("{}: {}", expectation, evaluation.success);
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod expectation;
pub mod result;
pub mod store;
pub mod suite;
pub mod value;

pub use builder::*;
pub use context::*;
pub use error::*;
pub use expectation::*;
pub use result::*;
pub use store::*;
pub use suite::*;
pub use value::*;
