use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use csv::{ReaderBuilder, WriterBuilder};

use super::Table;
use crate::error::{FuzzifyError, Result};
use crate::types::INDEX_COLUMN;

impl Table {
    /// Read a headed CSV of numeric columns.
    ///
    /// A leading `index` column, when present, becomes the row index.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = ReaderBuilder::new().has_headers(true).from_reader(reader);
        let headers = rdr.headers()?.clone();
        let has_index = headers.get(0).map(|h| h.trim() == INDEX_COLUMN).unwrap_or(false);
        let first_value = usize::from(has_index);
        let names: Vec<String> = headers
            .iter()
            .skip(first_value)
            .map(|h| h.trim().to_string())
            .collect();

        let mut index = Vec::new();
        let mut columns: Vec<Vec<f64>> = vec![Vec::new(); names.len()];
        for (row, record) in rdr.records().enumerate() {
            let record = record?;
            if has_index {
                let raw = record.get(0).unwrap_or("").trim();
                let label = raw.parse::<usize>().map_err(|_| FuzzifyError::InvalidNumber {
                    column: INDEX_COLUMN.to_string(),
                    row,
                    value: raw.to_string(),
                })?;
                index.push(label);
            } else {
                index.push(row);
            }
            for (j, name) in names.iter().enumerate() {
                let raw = record.get(j + first_value).unwrap_or("").trim();
                let value = raw
                    .parse::<f64>()
                    .ok()
                    .filter(|v| v.is_finite())
                    .ok_or_else(|| FuzzifyError::InvalidNumber {
                        column: name.clone(),
                        row,
                        value: raw.to_string(),
                    })?;
                columns[j].push(value);
            }
        }

        let mut table = Table::with_index(index);
        for (name, values) in names.into_iter().zip(columns) {
            table.push_column(name, values)?;
        }
        Ok(table)
    }

    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_csv_reader(file)
    }

    /// Write the table as CSV, index first.
    pub fn to_csv_writer<W: Write>(&self, writer: W) -> Result<()> {
        let mut wtr = WriterBuilder::new().from_writer(writer);

        let mut header = Vec::with_capacity(self.n_cols() + 1);
        header.push(INDEX_COLUMN);
        header.extend(self.names.iter().map(String::as_str));
        wtr.write_record(&header)?;

        for (i, label) in self.index.iter().enumerate() {
            let mut record = Vec::with_capacity(self.n_cols() + 1);
            record.push(label.to_string());
            record.extend(self.columns.iter().map(|c| c[i].to_string()));
            wtr.write_record(&record)?;
        }
        wtr.flush()?;
        Ok(())
    }

    pub fn to_csv_path<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path)?;
        self.to_csv_writer(file)
    }
}
