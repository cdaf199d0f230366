//! Response tables: JSON arrays of row objects.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use glossa_core::{Error, Result};
use serde::Serialize;
use serde_json::{Map, Value};

#[derive(Debug, Clone, Default)]
pub struct Table {
    rows: Vec<Map<String, Value>>,
}

impl Table {
    pub fn from_value(value: Value) -> Result<Self> {
        let Value::Array(items) = value else {
            return Err(Error::Table("expected a JSON array of row objects".into()));
        };
        let mut rows = Vec::with_capacity(items.len());
        for (i, item) in items.into_iter().enumerate() {
            match item {
                Value::Object(row) => rows.push(row),
                other => {
                    return Err(Error::Table(format!(
                        "row {} is not an object: {}",
                        i, other
                    )))
                }
            }
        }
        Ok(Self { rows })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let reader = BufReader::new(File::open(path)?);
        let value: Value = serde_json::from_reader(reader)?;
        Self::from_value(value)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Text column as documents. Missing or non-string cells are empty
    /// documents; a column absent from every row is an error.
    pub fn texts(&self, column: &str) -> Result<Vec<String>> {
        if !self.rows.is_empty() && !self.rows.iter().any(|r| r.contains_key(column)) {
            return Err(Error::Table(format!("no row has a '{}' column", column)));
        }
        Ok(self
            .rows
            .iter()
            .map(|r| match r.get(column) {
                Some(Value::String(s)) => s.clone(),
                _ => String::new(),
            })
            .collect())
    }

    /// Copy of the table with `column` set row by row from `values`.
    pub fn with_column(&self, column: &str, values: &[String]) -> Result<Self> {
        if values.len() != self.rows.len() {
            return Err(Error::Table(format!(
                "column '{}' has {} values for {} rows",
                column,
                values.len(),
                self.rows.len()
            )));
        }
        let rows = self
            .rows
            .iter()
            .zip(values)
            .map(|(row, value)| {
                let mut row = row.clone();
                row.insert(column.to_string(), Value::String(value.clone()));
                row
            })
            .collect();
        Ok(Self { rows })
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        write_json(path, &self.rows)
    }
}

/// Pretty-print `value` to `path`.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(writer, value)?;
    Ok(())
}
