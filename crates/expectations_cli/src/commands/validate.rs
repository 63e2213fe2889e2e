use anyhow::{Context, Result, anyhow};
use expectations_core::{
    ExpectationError, ExpectationSuite, SuiteBuilder, SuiteStore, ValidationContext,
};
use expectations_parser::parse_file;
use expectations_validator::{CsvOptions, DataValidator, load_csv, report};
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info};

use crate::output::{self, OutputFormat};

pub const DEFAULT_DATA_PATH: &str = "data/processed/train.csv";
pub const DEFAULT_REPORT_PATH: &str = "validation_report.txt";

/// Name of the built-in suite.
pub const DEFAULT_SUITE_NAME: &str = "asteroid_suite";
/// Column holding the binary label.
pub const TARGET_COLUMN: &str = "target";

/// Contents of the pass marker file.
const PASS_MARKER: &str = "Passed";

pub struct ValidateOptions {
    pub data: PathBuf,
    pub report: PathBuf,
    pub suite: Option<PathBuf>,
    pub format: OutputFormat,
    pub max_examples: usize,
    pub delimiter: char,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Passed,
    Failed,
}

/// The built-in suite: the target must be present and must be 0 or 1.
pub fn default_suite(name: &str) -> Result<ExpectationSuite, ExpectationError> {
    SuiteBuilder::new(name)
        .not_null(TARGET_COLUMN)
        .value_in_set(TARGET_COLUMN, [0, 1])
        .build()
}

pub fn execute(options: &ValidateOptions) -> Result<Outcome> {
    info!("Validating dataset: {}", options.data.display());

    let delimiter = u8::try_from(options.delimiter).map_err(|_| {
        anyhow!(
            "Delimiter must be a single-byte character, got '{}'",
            options.delimiter
        )
    })?;

    let dataset = load_csv(&options.data, &CsvOptions::default().with_delimiter(delimiter))
        .with_context(|| format!("Failed to load dataset: {}", options.data.display()))?;

    let mut store = SuiteStore::new();
    let entry = match &options.suite {
        Some(path) => {
            let parsed = parse_file(path)
                .with_context(|| format!("Failed to parse suite file: {}", path.display()))?;
            let name = parsed.name().to_string();
            store.get_or_create(&name, |_| Ok::<_, ExpectationError>(parsed))?
        }
        None => store.get_or_create(DEFAULT_SUITE_NAME, default_suite)?,
    };
    let suite: &ExpectationSuite = entry.into_suite();
    debug!(
        suite = suite.name(),
        expectations = suite.len(),
        "Expectation suite ready"
    );

    println!("Running validation...");

    let context = ValidationContext::new().with_max_examples(options.max_examples);
    let result = DataValidator::new(context)
        .run(&dataset, suite)
        .with_context(|| format!("Cannot run suite '{}'", suite.name()))?;

    if report::is_success(&result) {
        output::print_success("All data checks passed!");
        fs::write(&options.report, PASS_MARKER).with_context(|| {
            format!("Failed to write report file: {}", options.report.display())
        })?;
        info!("Report written to {}", options.report.display());
        Ok(Outcome::Passed)
    } else {
        output::print_failure("Data validation failed!");
        output::print_validation_result(&result, options.format)?;
        Ok(Outcome::Failed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn options(dir: &TempDir, csv: &str) -> ValidateOptions {
        let data = dir.path().join("train.csv");
        fs::write(&data, csv).unwrap();
        ValidateOptions {
            data,
            report: dir.path().join("validation_report.txt"),
            suite: None,
            format: OutputFormat::Text,
            max_examples: 5,
            delimiter: ',',
        }
    }

    #[test]
    fn test_default_suite_shape() {
        let suite = default_suite(DEFAULT_SUITE_NAME).unwrap();

        assert_eq!(suite.name(), "asteroid_suite");
        let kinds: Vec<&str> = suite.expectations().iter().map(|e| e.kind().name()).collect();
        assert_eq!(kinds, vec!["not_null", "value_in_set"]);
        assert!(suite.expectations().iter().all(|e| e.column() == "target"));
    }

    #[test]
    fn test_passing_run_writes_marker() {
        let dir = TempDir::new().unwrap();
        let options = options(&dir, "target\n0\n1\n");

        assert_eq!(execute(&options).unwrap(), Outcome::Passed);
        assert_eq!(fs::read_to_string(&options.report).unwrap(), "Passed");
    }

    #[test]
    fn test_failing_run_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let options = options(&dir, "target\n0\n7\n");

        assert_eq!(execute(&options).unwrap(), Outcome::Failed);
        assert!(!options.report.exists());
    }

    #[test]
    fn test_missing_column_is_error() {
        let dir = TempDir::new().unwrap();
        let options = options(&dir, "label\n0\n");

        let err = execute(&options).unwrap_err();
        assert!(format!("{:#}", err).contains("'target'"));
        assert!(!options.report.exists());
    }

    #[test]
    fn test_multibyte_delimiter_rejected() {
        let dir = TempDir::new().unwrap();
        let mut options = options(&dir, "target\n0\n");
        options.delimiter = '→';

        assert!(execute(&options).is_err());
    }
}
