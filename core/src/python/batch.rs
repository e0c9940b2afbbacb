//! Python wrappers for the batch driver

use pyo3::prelude::*;

use super::errors::convert_error;
use super::policy::{resolve_policy, PyExtractionPolicy};
use super::record::PyReportRow;
use super::utils::path_to_pathbuf;
use crate::batch::{process_reports, RawReport};
use crate::table::{ReportTable, DEFAULT_TEXT_COLUMN};

/// Flatten a list of report texts into one row per specimen
///
/// Row ids are list positions. None and empty strings each yield one empty row.
///
/// Args:
///     texts: List of report texts (str or None)
///     policy: Optional ExtractionPolicy
///
/// Returns:
///     list[ReportRow]: Rows in input order
///
/// Example:
///     >>> from pathreport import process_reports
///     >>> rows = process_reports(["Accession: S1\n[A] Skin\n[B] Colon", None])
///     >>> [r.row_id for r in rows]
///     [0, 0, 1]
#[pyfunction]
#[pyo3(name = "process_reports", signature = (texts, policy=None))]
pub fn py_process_reports(
    py: Python,
    texts: Vec<Option<String>>,
    policy: Option<PyExtractionPolicy>,
) -> Vec<PyReportRow> {
    let policy = resolve_policy(policy);
    let reports: Vec<RawReport<usize>> = texts
        .into_iter()
        .enumerate()
        .map(|(index, text)| RawReport::new(index, text))
        .collect();

    py.allow_threads(|| process_reports(&reports, &policy))
        .into_iter()
        .map(PyReportRow::from)
        .collect()
}

/// Read a CSV table and flatten its reports
///
/// Row ids are zero-based data row positions in the table.
///
/// Raises:
///     MissingColumnError: If the table has no column named `text_column`
///     TableError: If the CSV is malformed
///     OSError: If the file cannot be read
#[pyfunction]
#[pyo3(name = "process_table", signature = (path, text_column=DEFAULT_TEXT_COLUMN, policy=None))]
pub fn py_process_table(
    path: &Bound<'_, PyAny>,
    text_column: &str,
    policy: Option<PyExtractionPolicy>,
) -> PyResult<Vec<PyReportRow>> {
    let path_buf = path_to_pathbuf(path)?;
    let table = ReportTable::from_path(&path_buf, text_column).map_err(convert_error)?;
    let policy = resolve_policy(policy);

    Ok(process_reports(&table.reports(), &policy)
        .into_iter()
        .map(PyReportRow::from)
        .collect())
}
