//! Column-major table of crisp values
//!
//! The fuzzifier only needs a small slice of what a data frame offers:
//! named `f64` columns of equal length, column order, and a row index that
//! derived tables keep aligned with their source.

mod io;

use crate::error::{FuzzifyError, Result};

/// Named numeric columns sharing one row index
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Table {
    index: Vec<usize>,
    names: Vec<String>,
    columns: Vec<Vec<f64>>,
}

impl Table {
    /// Build a table from `(name, values)` pairs with index `0..n`.
    pub fn new<S: Into<String>>(columns: Vec<(S, Vec<f64>)>) -> Result<Self> {
        let n_rows = columns.first().map(|(_, v)| v.len()).unwrap_or(0);
        let mut table = Self::with_index((0..n_rows).collect());
        for (name, values) in columns {
            table.push_column(name, values)?;
        }
        Ok(table)
    }

    /// Empty table (no columns) over the given row index.
    pub fn with_index(index: Vec<usize>) -> Self {
        Self {
            index,
            names: Vec::new(),
            columns: Vec::new(),
        }
    }

    /// Replace the row index; its length must match the row count.
    pub fn set_index(&mut self, index: Vec<usize>) -> Result<()> {
        if index.len() != self.n_rows() {
            return Err(FuzzifyError::LengthMismatch {
                column: crate::types::INDEX_COLUMN.to_string(),
                expected: self.n_rows(),
                actual: index.len(),
            });
        }
        self.index = index;
        Ok(())
    }

    /// Append a column at the end; every cell must be finite.
    pub fn push_column<S: Into<String>>(&mut self, name: S, values: Vec<f64>) -> Result<()> {
        let name = name.into();
        if self.names.contains(&name) {
            return Err(FuzzifyError::DuplicateColumn(name));
        }
        if values.len() != self.index.len() {
            return Err(FuzzifyError::LengthMismatch {
                column: name,
                expected: self.index.len(),
                actual: values.len(),
            });
        }
        if let Some(row) = values.iter().position(|v| !v.is_finite()) {
            return Err(FuzzifyError::InvalidNumber {
                column: name,
                row,
                value: values[row].to_string(),
            });
        }
        self.names.push(name);
        self.columns.push(values);
        Ok(())
    }

    pub fn index(&self) -> &[usize] {
        &self.index
    }

    pub fn column_names(&self) -> &[String] {
        &self.names
    }

    pub fn column(&self, name: &str) -> Option<&[f64]> {
        self.names
            .iter()
            .position(|n| n == name)
            .map(|i| self.columns[i].as_slice())
    }

    /// Like [`Table::column`], failing with `MissingColumn`.
    pub fn require_column(&self, name: &str) -> Result<&[f64]> {
        self.column(name)
            .ok_or_else(|| FuzzifyError::MissingColumn(name.to_string()))
    }

    /// Columns in order, paired with their names.
    pub fn iter_columns(&self) -> impl Iterator<Item = (&str, &[f64])> {
        self.names
            .iter()
            .zip(self.columns.iter())
            .map(|(n, c)| (n.as_str(), c.as_slice()))
    }

    /// Single-row table holding row `i`, keeping its index label.
    pub fn select_row(&self, i: usize) -> Option<Table> {
        let label = *self.index.get(i)?;
        Some(Table {
            index: vec![label],
            names: self.names.clone(),
            columns: self.columns.iter().map(|c| vec![c[i]]).collect(),
        })
    }

    pub fn n_rows(&self) -> usize {
        self.index.len()
    }

    pub fn n_cols(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.n_rows() == 0 || self.n_cols() == 0
    }
}
