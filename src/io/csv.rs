//! Report CSV codec.
//!
//! Reports always start with a `UID` column. Every field is quoted on write so
//! commas and newlines inside adapter names or addresses round-trip.

use crate::core::AdapterRecord;
use crate::errors::{AsisError, Result};
use csv::{QuoteStyle, ReaderBuilder, WriterBuilder};
use std::path::Path;

/// Mandatory first header column.
pub const UID_COLUMN: &str = "UID";

/// A header plus rows, each row padded to the header width.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let mut table = Self { headers, rows };
        table.pad_rows();
        table
    }

    /// Index of the column named `name`.
    pub fn column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Append column `name` (empty in every row) unless it already exists.
    pub fn ensure_column(&mut self, name: &str) -> usize {
        if let Some(index) = self.column(name) {
            return index;
        }
        self.headers.push(name.to_string());
        self.pad_rows();
        self.headers.len() - 1
    }

    fn pad_rows(&mut self) {
        let width = self.headers.len();
        for row in &mut self.rows {
            if row.len() < width {
                row.resize(width, String::new());
            }
        }
    }
}

/// Read a report, validating the `UID` header and padding short rows.
pub fn read_table(path: &Path) -> Result<Table> {
    if !path.is_file() {
        return Err(AsisError::not_found("CSV file", path));
    }

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    let mut records = reader.records();
    let headers: Vec<String> = match records.next() {
        Some(header) => header?.iter().map(str::to_string).collect(),
        None => Vec::new(),
    };

    if headers.first().map(String::as_str) != Some(UID_COLUMN) {
        return Err(AsisError::validation(format!(
            "expected first column of {} to be '{}'",
            path.display(),
            UID_COLUMN
        )));
    }

    let mut rows = Vec::new();
    for record in records {
        rows.push(record?.iter().map(str::to_string).collect());
    }

    log::debug!("Read {} rows from {}", rows.len(), path.display());
    Ok(Table::new(headers, rows))
}

/// Write a table with every field quoted.
pub fn write_table(path: &Path, table: &Table) -> Result<()> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .from_path(path)?;

    writer.write_record(&table.headers)?;
    for row in &table.rows {
        writer.write_record(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Write adapter records under the extraction report header.
pub fn write_records(path: &Path, records: &[AdapterRecord]) -> Result<()> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .from_path(path)?;

    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}
