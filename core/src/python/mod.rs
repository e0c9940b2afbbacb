//! Python bindings for pathreport
//!
//! This module provides PyO3 bindings enabling Python users to extract
//! structured fields from pathology report text and report tables.

// Suppress false positive warnings from PyO3 macro expansion
#![allow(clippy::useless_conversion)]

use pyo3::prelude::*;

mod batch;
mod enums;
mod errors;
mod extractor;
#[macro_use]
mod macros;
mod policy;
mod record;
mod utils;

pub use batch::*;
pub use enums::*;
pub use errors::*;
pub use extractor::*;
pub use policy::*;
pub use record::*;

/// Python module definition
#[pymodule]
fn _pathreport(py: Python, m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Register exception classes
    m.add(
        "PathreportError",
        py.get_type_bound::<errors::PyPathreportError>(),
    )?;
    m.add(
        "MissingColumnError",
        py.get_type_bound::<errors::PyMissingColumnError>(),
    )?;
    m.add("TableError", py.get_type_bound::<errors::PyTableError>())?;

    // Register enum classes
    m.add_class::<PyAccessionLabel>()?;
    m.add_class::<PyUnlabeledSpecimens>()?;
    m.add_class::<PyReportLevelFallback>()?;
    m.add_class::<PyFieldTruncation>()?;

    // Register data structure classes
    m.add_class::<PyExtractionPolicy>()?;
    m.add_class::<PySpecimen>()?;
    m.add_class::<PyStructuredRecord>()?;
    m.add_class::<PyReportRow>()?;

    // Register main API
    m.add_class::<PyReportExtractor>()?;

    // Register functions
    m.add_function(wrap_pyfunction!(py_process_reports, m)?)?;
    m.add_function(wrap_pyfunction!(py_process_table, m)?)?;

    m.add("DEFAULT_TEXT_COLUMN", crate::table::DEFAULT_TEXT_COLUMN)?;
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;

    Ok(())
}
