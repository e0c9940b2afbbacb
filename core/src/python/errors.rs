//! Python exception types for pathreport
//!
//! Extraction never raises; these exceptions cover the table I/O layer only.

// Suppress warnings from PyO3's create_exception! macro about gil-refs feature
#![allow(unexpected_cfgs)]

use pyo3::{create_exception, exceptions::PyException, prelude::*};

use crate::error::ReportError;

// Base exception
create_exception!(
    pathreport,
    PyPathreportError,
    PyException,
    "Base exception for all pathreport errors"
);

create_exception!(
    pathreport,
    PyMissingColumnError,
    PyPathreportError,
    "The input table has no report text column"
);

create_exception!(
    pathreport,
    PyTableError,
    PyPathreportError,
    "Malformed input table or failed output serialization"
);

/// Convert Rust ReportError to appropriate Python exception
pub fn convert_error(err: ReportError) -> PyErr {
    match err {
        ReportError::MissingColumn(name) => {
            PyMissingColumnError::new_err(format!("Required input column missing: {}", name))
        }
        ReportError::CsvError(msg) => PyTableError::new_err(msg),
        ReportError::JsonError(msg) => PyTableError::new_err(msg),
        ReportError::IoError(e) => pyo3::exceptions::PyIOError::new_err(e.to_string()),
    }
}
