//! CSV loading.
//!
//! Cells are typed one at a time: a null token becomes `DataValue::Null`,
//! then integers, floats and booleans are recognised, and anything else stays
//! a string. There is no per-column type inference, so a column can hold mixed
//! kinds, which is what lets a stray `"yes"` in a numeric column surface as a
//! violation instead of a load error.

use crate::{DataSet, Result, ValidationError};
use csv::{ReaderBuilder, Trim};
use expectations_core::DataValue;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// Tokens read as missing values by default.
pub const DEFAULT_NULL_VALUES: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Options for configuring CSV reading.
#[derive(Debug, Clone, PartialEq)]
pub struct CsvOptions {
    /// Field delimiter (default: ',')
    pub delimiter: u8,
    /// Whether the file starts with a header row (default: true)
    pub has_header: bool,
    /// Cell contents read as missing values, compared after trimming
    pub null_values: Vec<String>,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            has_header: true,
            null_values: DEFAULT_NULL_VALUES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl CsvOptions {
    /// Sets the field delimiter.
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets whether the first row is a header.
    pub fn with_header(mut self, has_header: bool) -> Self {
        self.has_header = has_header;
        self
    }
}

/// Loads a CSV file into a dataset named after its path.
///
/// # Errors
///
/// Returns `Io` when the file cannot be opened and `Csv` when its contents
/// are malformed (including rows with the wrong number of fields).
pub fn load_csv(path: impl AsRef<Path>, options: &CsvOptions) -> Result<DataSet> {
    let path = path.as_ref();
    info!("Loading dataset from {}", path.display());

    let file = File::open(path).map_err(|source| ValidationError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    load_csv_reader(path.display().to_string(), file, options)
}

/// Loads CSV data from any reader.
pub fn load_csv_reader<R: Read>(
    name: impl Into<String>,
    reader: R,
    options: &CsvOptions,
) -> Result<DataSet> {
    let name = name.into();
    let mut reader = ReaderBuilder::new()
        .delimiter(options.delimiter)
        .has_headers(options.has_header)
        .trim(Trim::All)
        .from_reader(reader);

    let mut headers: Vec<String> = if options.has_header {
        reader
            .headers()
            .map_err(|e| ValidationError::csv(&name, e))?
            .iter()
            .map(str::to_string)
            .collect()
    } else {
        Vec::new()
    };
    let mut columns: Vec<Vec<DataValue>> = vec![Vec::new(); headers.len()];

    for record in reader.records() {
        let record = record.map_err(|e| ValidationError::csv(&name, e))?;

        if headers.is_empty() {
            headers = (0..record.len()).map(|i| format!("column_{}", i)).collect();
            columns = vec![Vec::new(); record.len()];
        }

        for (column, cell) in columns.iter_mut().zip(record.iter()) {
            column.push(parse_cell(cell, &options.null_values));
        }
    }

    let dataset = DataSet::from_columns(name, headers.into_iter().zip(columns))?;
    debug!(
        dataset = dataset.name(),
        rows = dataset.len(),
        columns = dataset.columns().len(),
        "Loaded CSV dataset"
    );
    Ok(dataset)
}

/// Types a single (already trimmed) cell.
pub fn parse_cell(raw: &str, null_values: &[String]) -> DataValue {
    if null_values.iter().any(|token| token == raw) {
        return DataValue::Null;
    }
    if let Ok(i) = raw.parse::<i64>() {
        return DataValue::Int(i);
    }
    if let Ok(f) = raw.parse::<f64>() {
        return DataValue::Float(f);
    }
    if raw.eq_ignore_ascii_case("true") {
        return DataValue::Bool(true);
    }
    if raw.eq_ignore_ascii_case("false") {
        return DataValue::Bool(false);
    }
    DataValue::String(raw.to_string())
}
