//! # Expectations Validator
//!
//! Runs expectation suites against in-memory datasets:
//!
//! - Dataset representation and column access
//! - CSV loading
//! - Suite execution and result aggregation
//! - Plain-text result summaries
//!
//! ## Example
//!
//! ```rust
//! use expectations_core::{SuiteBuilder, ValidationContext};
//! use expectations_validator::{load_csv_reader, report, CsvOptions, DataValidator};
//!
//! let csv = "id,target\n1,0\n2,1\n3,1\n";
//! let dataset = load_csv_reader("train.csv", csv.as_bytes(), &CsvOptions::default()).unwrap();
//!
//! let suite = SuiteBuilder::new("asteroid_suite")
//!     .not_null("target")
//!     .value_in_set("target", [0, 1])
//!     .build()
//!     .unwrap();
//!
//! let result = DataValidator::new(ValidationContext::new())
//!     .run(&dataset, &suite)
//!     .unwrap();
//!
//! if report::is_success(&result) {
//!     println!("All data checks passed!");
//! } else {
//!     println!("{}", report::summarize(&result));
//! }
//! ```

mod dataset;
mod engine;
mod error;
mod loader;
pub mod report;

pub use dataset::*;
pub use engine::*;
pub use error::*;
pub use loader::*;
