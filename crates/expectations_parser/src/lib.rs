//! Parser for expectation suite definitions (YAML/TOML formats).
//!
//! A suite file names the suite and lists its expectations in order. Every
//! expectation goes through `Expectation::new`, so malformed parameters are
//! rejected here rather than at run time.
//!
//! # Example
//!
//! ```rust
//! use expectations_parser::parse_yaml;
//!
//! let yaml = r#"
//! name: asteroid_suite
//! expectations:
//!   - kind: not_null
//!     column: target
//!   - kind: value_in_set
//!     column: target
//!     values: [0, 1]
//! "#;
//!
//! let suite = parse_yaml(yaml).expect("Failed to parse suite");
//! assert_eq!(suite.name(), "asteroid_suite");
//! assert_eq!(suite.len(), 2);
//! ```

use expectations_core::{
    DataValue, Expectation, ExpectationError, ExpectationKind, ExpectationSuite,
};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during suite parsing.
#[derive(Debug, Error)]
pub enum ParserError {
    /// YAML parsing or deserialization failed
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml_ng::Error),

    /// TOML parsing or deserialization failed
    #[error("Failed to parse TOML: {0}")]
    TomlError(String),

    /// File I/O error
    #[error("File I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Unsupported file format
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    /// Invalid file extension
    #[error("Invalid or missing file extension")]
    InvalidExtension,

    /// An expectation has invalid parameters
    #[error(transparent)]
    Expectation(#[from] ExpectationError),
}

/// Result type alias for parser operations.
pub type Result<T> = std::result::Result<T, ParserError>;

/// Supported suite file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuiteFormat {
    /// YAML format (.yml, .yaml)
    Yaml,
    /// TOML format (.toml)
    Toml,
}

/// On-disk shape of a suite.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SuiteDefinition {
    name: String,
    #[serde(default)]
    expectations: Vec<ExpectationDefinition>,
}

/// On-disk shape of one expectation.
#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case", deny_unknown_fields)]
enum ExpectationDefinition {
    NotNull {
        column: String,
    },
    ValueInSet {
        column: String,
        values: Vec<DataValue>,
    },
    ValueBetween {
        column: String,
        #[serde(default)]
        min: Option<f64>,
        #[serde(default)]
        max: Option<f64>,
    },
}

impl ExpectationDefinition {
    fn into_expectation(self) -> std::result::Result<Expectation, ExpectationError> {
        match self {
            ExpectationDefinition::NotNull { column } => {
                Expectation::new(column, ExpectationKind::NotNull)
            }
            ExpectationDefinition::ValueInSet { column, values } => {
                Expectation::new(column, ExpectationKind::ValueInSet { values })
            }
            ExpectationDefinition::ValueBetween { column, min, max } => {
                Expectation::new(column, ExpectationKind::ValueBetween { min, max })
            }
        }
    }
}

impl SuiteDefinition {
    fn into_suite(self) -> std::result::Result<ExpectationSuite, ExpectationError> {
        let mut suite = ExpectationSuite::new(self.name);
        for expectation in self.expectations {
            suite.add(expectation.into_expectation()?);
        }
        Ok(suite)
    }
}

/// Parse a suite from a YAML string.
pub fn parse_yaml(content: &str) -> Result<ExpectationSuite> {
    let definition: SuiteDefinition = serde_yaml_ng::from_str(content)?;
    Ok(definition.into_suite()?)
}

/// Parse a suite from a TOML string.
///
/// # Example
///
/// ```rust
/// use expectations_parser::parse_toml;
///
/// let toml = r#"
/// name = "asteroid_suite"
///
/// [[expectations]]
/// kind = "not_null"
/// column = "target"
///
/// [[expectations]]
/// kind = "value_in_set"
/// column = "target"
/// values = [0, 1]
/// "#;
///
/// let suite = parse_toml(toml).unwrap();
/// assert_eq!(suite.len(), 2);
/// ```
pub fn parse_toml(content: &str) -> Result<ExpectationSuite> {
    let definition: SuiteDefinition =
        toml::from_str(content).map_err(|e| ParserError::TomlError(e.to_string()))?;
    Ok(definition.into_suite()?)
}

/// Detect the suite format from a file path based on its extension.
///
/// # Supported Extensions
///
/// * `.yaml`, `.yml` → `SuiteFormat::Yaml`
/// * `.toml` → `SuiteFormat::Toml`
///
/// # Errors
///
/// Returns `ParserError::InvalidExtension` if the file has no extension.
/// Returns `ParserError::UnsupportedFormat` if the extension is not recognized.
pub fn detect_format(path: &Path) -> Result<SuiteFormat> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .ok_or(ParserError::InvalidExtension)?;

    match extension.to_lowercase().as_str() {
        "yaml" | "yml" => Ok(SuiteFormat::Yaml),
        "toml" => Ok(SuiteFormat::Toml),
        other => Err(ParserError::UnsupportedFormat(other.to_string())),
    }
}

/// Parse a suite from a file with automatic format detection.
///
/// ```no_run
/// use expectations_parser::parse_file;
/// use std::path::Path;
///
/// let suite = parse_file(Path::new("suites/asteroid.yml")).unwrap();
/// println!("Loaded suite: {}", suite.name());
/// ```
pub fn parse_file(path: &Path) -> Result<ExpectationSuite> {
    let format = detect_format(path)?;
    let content = std::fs::read_to_string(path)?;

    match format {
        SuiteFormat::Yaml => parse_yaml(&content),
        SuiteFormat::Toml => parse_toml(&content),
    }
}
