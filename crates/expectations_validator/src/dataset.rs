//! Dataset representation for validation.
//!
//! A `DataSet` is stored column by column, which is how expectations read it.

use crate::{Result, ValidationError};
use expectations_core::DataValue;

/// A named column of values.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    name: String,
    values: Vec<DataValue>,
}

impl Column {
    /// Returns the column name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the values in row order.
    pub fn values(&self) -> &[DataValue] {
        &self.values
    }
}

/// An in-memory table: ordered, uniquely named columns of equal length.
///
/// The name identifies where the data came from (typically the file path) and
/// ends up in the validation result.
#[derive(Debug, Clone, PartialEq)]
pub struct DataSet {
    name: String,
    columns: Vec<Column>,
    rows: usize,
}

impl DataSet {
    /// Creates a dataset with no columns and no rows.
    pub fn empty(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            columns: Vec::new(),
            rows: 0,
        }
    }

    /// Creates a dataset from `(name, values)` pairs.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateColumn` if a name repeats and `RaggedColumns` if the
    /// columns differ in length.
    pub fn from_columns<N>(
        name: impl Into<String>,
        columns: impl IntoIterator<Item = (N, Vec<DataValue>)>,
    ) -> Result<Self>
    where
        N: Into<String>,
    {
        let mut dataset = Self::empty(name);
        for (column, values) in columns {
            dataset.add_column(column, values)?;
        }
        Ok(dataset)
    }

    /// Appends a column.
    ///
    /// The first column fixes the row count for the dataset.
    pub fn add_column(&mut self, name: impl Into<String>, values: Vec<DataValue>) -> Result<()> {
        let name = name.into();

        if self.columns.iter().any(|c| c.name == name) {
            return Err(ValidationError::DuplicateColumn(name));
        }
        if self.columns.is_empty() {
            self.rows = values.len();
        } else if values.len() != self.rows {
            return Err(ValidationError::ragged(name, self.rows, values.len()));
        }

        self.columns.push(Column { name, values });
        Ok(())
    }

    /// Returns the dataset identifier.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the number of rows in the dataset.
    pub fn len(&self) -> usize {
        self.rows
    }

    /// Returns true if the dataset has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    /// Returns the columns in order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Returns the column names in order.
    pub fn column_names(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.name.clone()).collect()
    }

    /// Returns the values of the named column in row order.
    ///
    /// # Errors
    ///
    /// Returns `ColumnNotFound` when no column has that name.
    pub fn column(&self, name: &str) -> Result<&[DataValue]> {
        self.columns
            .iter()
            .find(|c| c.name == name)
            .map(Column::values)
            .ok_or_else(|| ValidationError::column_not_found(name, &self.name, self.column_names()))
    }

    /// Takes the first `size` rows of the dataset.
    ///
    /// If `size` is greater than the number of rows, returns all rows.
    pub fn sample(&self, size: usize) -> DataSet {
        let rows = size.min(self.rows);
        DataSet {
            name: self.name.clone(),
            columns: self
                .columns
                .iter()
                .map(|c| Column {
                    name: c.name.clone(),
                    values: c.values[..rows].to_vec(),
                })
                .collect(),
            rows,
        }
    }
}
