//! Delimited text tables
//!
//! The I/O layer around the batch driver: reads the input table, locates the
//! report text column and writes the flattened output table. Each output row
//! repeats the cells of its source row followed by the extracted columns.

use crate::batch::{RawReport, ReportRow};
use crate::error::{ReportError, Result};
use csv::{ReaderBuilder, StringRecord, Writer};
use log::{debug, info};
use std::io::{Read, Write};
use std::path::Path;

/// Name of the input column holding the report text
pub const DEFAULT_TEXT_COLUMN: &str = "Path Report Text";

/// An input table held in memory
///
/// Row identifiers handed to the batch driver are zero-based data row
/// positions, so output rows can be joined back to their source cells.
#[derive(Debug, Clone)]
pub struct ReportTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    text_index: usize,
}

impl ReportTable {
    /// Reads a table from a CSV file
    pub fn from_path(path: impl AsRef<Path>, text_column: &str) -> Result<Self> {
        let path = path.as_ref();
        info!("Reading table: {}", path.display());
        let file = std::fs::File::open(path)?;
        Self::from_reader(file, text_column)
    }

    /// Reads a table from any CSV source
    ///
    /// The text column is located by trimmed, case-insensitive header name.
    /// Short rows are padded with empty cells.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::MissingColumn`] if no header matches
    /// `text_column`, or [`ReportError::CsvError`] for malformed input.
    pub fn from_reader<R: Read>(reader: R, text_column: &str) -> Result<Self> {
        let mut reader = ReaderBuilder::new().flexible(true).from_reader(reader);

        let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
        let wanted = text_column.trim();
        let text_index = headers
            .iter()
            .position(|h| h.trim().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ReportError::MissingColumn(wanted.to_string()))?;

        let mut rows = Vec::new();
        for record in reader.records() {
            let record: StringRecord = record?;
            let mut cells: Vec<String> = record.iter().map(str::to_string).collect();
            cells.resize(headers.len().max(cells.len()), String::new());
            rows.push(cells);
        }

        debug!(
            "Loaded {} rows, text column {:?} at index {}",
            rows.len(),
            headers[text_index],
            text_index
        );

        Ok(Self {
            headers,
            rows,
            text_index,
        })
    }

    /// Input column names
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Number of data rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Checks if the table has no data rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Reports in table order, keyed by row position
    pub fn reports(&self) -> Vec<RawReport<usize>> {
        self.rows
            .iter()
            .enumerate()
            .map(|(index, cells)| {
                let text = cells
                    .get(self.text_index)
                    .filter(|text| !text.trim().is_empty())
                    .cloned();
                RawReport::new(index, text)
            })
            .collect()
    }

    /// Output column names: the input columns, then the extracted ones
    pub fn output_headers(&self) -> Vec<&str> {
        self.headers
            .iter()
            .map(String::as_str)
            .chain(ReportRow::<usize>::COLUMNS)
            .collect()
    }

    /// Cells of one output row: its source row's cells, then the extracted fields
    pub fn output_record<'a>(&'a self, row: &'a ReportRow<usize>) -> Vec<&'a str> {
        let source = self.rows.get(row.row_id).map(Vec::as_slice).unwrap_or(&[]);
        let mut cells: Vec<&str> = source.iter().map(String::as_str).collect();
        cells.resize(self.headers.len().max(cells.len()), "");
        cells.extend(row.fields());
        cells
    }

    /// Writes the flattened output table as CSV
    pub fn write_csv<W: Write>(&self, rows: &[ReportRow<usize>], writer: W) -> Result<()> {
        let mut writer = Writer::from_writer(writer);
        writer.write_record(self.output_headers())?;
        for row in rows {
            writer.write_record(self.output_record(row))?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Writes the flattened output table to a CSV file
    pub fn write_csv_path(&self, rows: &[ReportRow<usize>], path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let file = std::fs::File::create(path)?;
        self.write_csv(rows, file)?;
        info!("Wrote {} rows to {}", rows.len(), path.display());
        Ok(())
    }
}
